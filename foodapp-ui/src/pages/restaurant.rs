//! Restaurant Menu Page
//!
//! Public menu: restaurant header, search, and products grouped by category.

use leptos::*;

use crate::api::{self, Product, RestaurantInfo, CATEGORIES};
use crate::components::loading::CardSkeleton;
use crate::components::ProductCard;
use crate::state::use_app_state;

#[derive(Clone, PartialEq)]
enum MenuState {
    Loading,
    Ready,
    Error(String),
}

/// Products whose name or description contain the query, case-insensitively
fn matching(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    products
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Known categories first, then any others in first-seen order
fn sections(products: Vec<Product>) -> Vec<(String, Vec<Product>)> {
    let mut sections: Vec<(String, Vec<Product>)> = CATEGORIES
        .iter()
        .map(|c| (c.to_string(), Vec::new()))
        .collect();

    for product in products {
        match sections.iter_mut().find(|(name, _)| *name == product.category) {
            Some((_, items)) => items.push(product),
            None => sections.push((product.category.clone(), vec![product])),
        }
    }
    sections.retain(|(_, items)| !items.is_empty());
    sections
}

#[component]
pub fn RestaurantMenu() -> impl IntoView {
    let state = use_app_state();
    let (products, set_products) = create_signal(Vec::<Product>::new());
    let (menu_state, set_menu_state) = create_signal(MenuState::Loading);
    let (search, set_search) = create_signal(String::new());
    let info = RestaurantInfo::default();

    create_effect(move |_| {
        spawn_local(async move {
            set_menu_state.set(MenuState::Loading);
            match state.track(api::fetch_products()).await {
                Ok(list) => {
                    set_products.set(list);
                    set_menu_state.set(MenuState::Ready);
                }
                Err(e) => set_menu_state.set(MenuState::Error(e)),
            }
        });
    });

    view! {
        <div>
            <header class="bg-red-600 text-white">
                <div class="container mx-auto px-4 py-10 space-y-2">
                    <h1 class="text-4xl font-bold">{info.restaurant_name.clone()}</h1>
                    <p class="opacity-90">{info.category.clone()}</p>
                    <div class="flex space-x-6 text-sm opacity-90">
                        <span>"★ 4.8 (500+)"</span>
                        <span>"🕒 " {info.delivery_time.clone()}</span>
                        <span>{info.opening_hours.clone()}</span>
                    </div>
                </div>
            </header>

            <div class="container mx-auto px-4 py-8 grid gap-8 lg:grid-cols-4">
                <aside class="bg-white rounded-xl shadow p-5 space-y-4 h-fit">
                    <div>
                        <h3 class="font-semibold mb-1">"Sobre"</h3>
                        <p class="text-sm text-gray-600">{info.description.clone()}</p>
                    </div>
                    <div>
                        <h3 class="font-semibold mb-1">"Horário"</h3>
                        <p class="text-sm text-gray-600">{info.opening_hours.clone()}</p>
                    </div>
                    <div>
                        <h3 class="font-semibold mb-1">"Distância"</h3>
                        <p class="text-sm text-gray-600">"2.5 km"</p>
                    </div>
                </aside>

                <div class="lg:col-span-3 space-y-8">
                    <input
                        type="search"
                        placeholder="Buscar no cardápio"
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                        class="w-full border border-gray-300 rounded-lg px-4 py-3 focus:border-red-500 focus:outline-none"
                    />

                    {move || match menu_state.get() {
                        MenuState::Loading => view! { <CardSkeleton /> }.into_view(),
                        MenuState::Error(message) => view! {
                            <div class="bg-red-50 border border-red-200 text-red-700 rounded-lg p-6 text-center">{message}</div>
                        }.into_view(),
                        MenuState::Ready => {
                            let found = products.with(|all| matching(all, &search.get()));
                            if found.is_empty() {
                                view! {
                                    <p class="text-center text-gray-500 py-12">"Nenhum produto encontrado."</p>
                                }.into_view()
                            } else {
                                sections(found).into_iter().map(|(category, items)| view! {
                                    <section class="space-y-4">
                                        <h2 class="text-2xl font-semibold">{category}</h2>
                                        <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                                            {items.into_iter().map(|p| view! { <ProductCard product=p /> }).collect_view()}
                                        </div>
                                    </section>
                                }).collect_view()
                            }
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
