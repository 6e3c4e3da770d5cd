//! Product Card Component
//!
//! One menu item. Edit and delete buttons appear only when handlers are given.

use leptos::*;

use crate::api::Product;

#[component]
pub fn ProductCard(
    product: Product,
    #[prop(optional, into)]
    on_edit: Option<Callback<Product>>,
    #[prop(optional, into)]
    on_delete: Option<Callback<u64>>,
) -> impl IntoView {
    let price = product.display_price();
    let id = product.id;
    let for_edit = product.clone();

    view! {
        <div class="bg-white rounded-xl shadow hover:shadow-md transition-shadow overflow-hidden flex flex-col">
            {match product.image.clone() {
                Some(src) => view! {
                    <img src=src alt=product.name.clone() class="h-40 w-full object-cover" />
                }.into_view(),
                None => view! {
                    <div class="h-40 w-full bg-gray-100 flex items-center justify-center text-4xl">"🍽️"</div>
                }.into_view(),
            }}

            <div class="p-4 flex-1 flex flex-col">
                <div class="flex items-start justify-between mb-2">
                    <h3 class="font-semibold text-lg">{product.name.clone()}</h3>
                    <span class="text-red-600 font-bold whitespace-nowrap ml-2">{price}</span>
                </div>
                <p class="text-sm text-gray-600 flex-1">{product.description.clone()}</p>

                <div class="flex items-center space-x-4 text-xs text-gray-500 mt-3">
                    {(!product.prep_time.is_empty()).then(|| view! { <span>"⏱ " {product.prep_time.clone()}</span> })}
                    {(!product.servings.is_empty()).then(|| view! { <span>"👥 " {product.servings.clone()}</span> })}
                </div>

                {(on_edit.is_some() || on_delete.is_some()).then(move || view! {
                    <div class="flex space-x-2 mt-4">
                        {on_edit.map(|cb| {
                            let product = for_edit.clone();
                            view! {
                                <button
                                    on:click=move |_| cb.call(product.clone())
                                    class="flex-1 px-3 py-2 bg-gray-100 hover:bg-gray-200 rounded-lg text-sm font-medium transition-colors"
                                >
                                    "Editar"
                                </button>
                            }
                        })}
                        {on_delete.map(|cb| view! {
                            <button
                                on:click=move |_| cb.call(id)
                                class="flex-1 px-3 py-2 bg-red-50 hover:bg-red-100 text-red-600 rounded-lg text-sm font-medium transition-colors"
                            >
                                "Excluir"
                            </button>
                        })}
                    </div>
                })}
            </div>
        </div>
    }
}
