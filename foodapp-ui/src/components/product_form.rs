//! Product Form Component
//!
//! Modal for creating or editing a product. The picked image lives in a
//! page signal so it survives the modal closing during a save; it is
//! previewed locally and uploaded by the page.

use leptos::*;

use crate::api::{self, EditForm, CATEGORIES};

#[component]
pub fn ProductForm(
    form: RwSignal<EditForm>,
    #[prop(into)]
    is_new: Signal<bool>,
    picked_image: RwSignal<Option<web_sys::File>>,
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(into)]
    on_submit: Callback<()>,
    #[prop(into)]
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (preview, set_preview) = create_signal(None::<String>);

    create_effect(move |_| {
        let Some(file) = picked_image.get() else {
            set_preview.set(None);
            return;
        };
        spawn_local(async move {
            match api::read_as_data_url(&file).await {
                Ok(url) => set_preview.set(Some(url)),
                Err(e) => web_sys::console::error_1(&format!("Preview failed: {}", e).into()),
            }
        });
    });

    let pick_image = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            picked_image.set(Some(file));
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    let image_src = move || preview.get().or_else(|| form.with(|f| f.image.clone()));

    view! {
        <div class="fixed inset-0 bg-black/50 z-40 flex items-center justify-center p-4">
            <form on:submit=submit class="bg-white rounded-xl shadow-xl w-full max-w-lg p-6 space-y-4 max-h-[90vh] overflow-y-auto">
                <h2 class="text-xl font-bold">
                    {move || if is_new.get() { "Novo Produto" } else { "Editar Produto" }}
                </h2>

                {move || error.get().map(|message| view! {
                    <p class="bg-red-50 border border-red-200 text-red-700 rounded-lg px-3 py-2 text-sm">
                        {message}
                    </p>
                })}

                <TextField label="Nome" form=form
                    get=|f| f.name.clone() set=|f, v| f.name = v />
                <TextField label="Preço (R$)" form=form
                    get=|f| f.price.clone() set=|f, v| f.price = v />

                <div>
                    <label class="block text-sm text-gray-600 mb-1">"Descrição"</label>
                    <textarea
                        rows=3
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        class="w-full border border-gray-300 rounded-lg px-3 py-2 focus:border-red-500 focus:outline-none"
                    />
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <TextField label="Tempo de preparo" form=form
                        get=|f| f.prep_time.clone() set=|f, v| f.prep_time = v />
                    <TextField label="Porções" form=form
                        get=|f| f.servings.clone() set=|f, v| f.servings = v />
                </div>

                <div>
                    <label class="block text-sm text-gray-600 mb-1">"Categoria"</label>
                    <select
                        prop:value=move || form.with(|f| f.category.clone())
                        on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                        class="w-full border border-gray-300 rounded-lg px-3 py-2 focus:border-red-500 focus:outline-none"
                    >
                        {CATEGORIES.iter().map(|c| view! {
                            <option value=*c>{*c}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div>
                    <label class="block text-sm text-gray-600 mb-1">"Imagem"</label>
                    {move || image_src().map(|src| view! {
                        <img src=src class="h-32 w-full object-cover rounded-lg mb-2" />
                    })}
                    <input type="file" accept="image/*" on:change=pick_image class="text-sm" />
                </div>

                <div class="flex justify-end space-x-2 pt-2">
                    <button
                        type="button"
                        on:click=move |_| on_cancel.call(())
                        class="px-4 py-2 bg-gray-100 hover:bg-gray-200 rounded-lg font-medium transition-colors"
                    >
                        "Cancelar"
                    </button>
                    <button
                        type="submit"
                        class="px-4 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium transition-colors"
                    >
                        "Salvar"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn TextField(
    label: &'static str,
    form: RwSignal<EditForm>,
    get: fn(&EditForm) -> String,
    set: fn(&mut EditForm, String),
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-600 mb-1">{label}</label>
            <input
                type="text"
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
                class="w-full border border-gray-300 rounded-lg px-3 py-2 focus:border-red-500 focus:outline-none"
            />
        </div>
    }
}
