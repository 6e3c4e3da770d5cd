//! Dashboard Page
//!
//! Owner view: manage the menu, edit restaurant information, settings.
//!
//! The menu tab follows one state machine: `Loading` while a request is in
//! flight, `Editing` while the product modal is open, `Error` after a failed
//! load or delete, `Idle` otherwise. A failed save goes back to `Editing`
//! with the message shown in the modal. New requests start only from `Idle`
//! or `Error`.

use leptos::*;

use crate::api::{self, EditForm, Product, RestaurantInfo, CATEGORIES};
use crate::components::{Loading, ProductCard, ProductForm};
use crate::state::use_app_state;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Menu,
    Info,
    Settings,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Menu, Tab::Info, Tab::Settings];

    fn label(self) -> &'static str {
        match self {
            Tab::Menu => "Cardápio",
            Tab::Info => "Informações",
            Tab::Settings => "Configurações",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Idle,
    Loading,
    /// Product modal open, with the message of a failed save if any
    Editing(Option<String>),
    Error(String),
}

impl Phase {
    fn is_interactive(&self) -> bool {
        matches!(self, Phase::Idle | Phase::Error(_))
    }

    fn is_editing(&self) -> bool {
        matches!(self, Phase::Editing(_))
    }

    fn save_error(&self) -> Option<String> {
        match self {
            Phase::Editing(error) => error.clone(),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Request {
    Load,
    Save,
    Delete,
}

/// Where the menu goes when a request fails. A failed save reopens the
/// modal so the typed form is not lost.
fn after_failure(request: Request, message: String) -> Phase {
    match request {
        Request::Save => Phase::Editing(Some(message)),
        Request::Load | Request::Delete => Phase::Error(message),
    }
}

/// Replace the product with the same id, or append it
fn upsert(products: &mut Vec<Product>, saved: Product) {
    match products.iter_mut().find(|p| p.id == saved.id) {
        Some(slot) => *slot = saved,
        None => products.push(saved),
    }
}

/// Product count for each fixed category, in display order
fn category_counts(products: &[Product]) -> Vec<(&'static str, usize)> {
    CATEGORIES
        .iter()
        .map(|c| (*c, products.iter().filter(|p| p.category == *c).count()))
        .collect()
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let (tab, set_tab) = create_signal(Tab::Menu);

    view! {
        <div class="container mx-auto px-4 py-8 space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Meu Restaurante"</h1>
                <p class="text-gray-500 mt-1">"Gerencie o cardápio e as informações do restaurante"</p>
            </div>

            <div class="flex space-x-2 border-b border-gray-200">
                {Tab::ALL.into_iter().map(|t| view! {
                    <button
                        on:click=move |_| set_tab.set(t)
                        class=move || {
                            let base = "px-4 py-2 font-medium transition-colors border-b-2";
                            if tab.get() == t {
                                format!("{} border-red-600 text-red-600", base)
                            } else {
                                format!("{} border-transparent text-gray-500 hover:text-gray-800", base)
                            }
                        }
                    >
                        {t.label()}
                    </button>
                }).collect_view()}
            </div>

            {move || match tab.get() {
                Tab::Menu => view! { <MenuManager /> }.into_view(),
                Tab::Info => view! { <InfoEditor /> }.into_view(),
                Tab::Settings => view! { <SettingsPanel /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn MenuManager() -> impl IntoView {
    let state = use_app_state();

    let products = create_rw_signal(Vec::<Product>::new());
    let phase = create_rw_signal(Phase::Loading);
    let form = create_rw_signal(EditForm::new_product());
    let editing_id = create_rw_signal(None::<u64>);
    let picked_image = create_rw_signal(None::<web_sys::File>);
    let pending_delete = create_rw_signal(None::<u64>);

    create_effect(move |_| {
        spawn_local(async move {
            match state.track(api::fetch_products()).await {
                Ok(list) => {
                    products.set(list);
                    phase.set(Phase::Idle);
                }
                Err(e) => {
                    state.error(e.clone());
                    phase.set(after_failure(Request::Load, e));
                }
            }
        });
    });

    let open_new = move |_: web_sys::MouseEvent| {
        if !phase.with_untracked(Phase::is_interactive) {
            return;
        }
        pending_delete.set(None);
        editing_id.set(None);
        picked_image.set(None);
        form.set(EditForm::new_product());
        phase.set(Phase::Editing(None));
    };

    let open_edit = Callback::new(move |product: Product| {
        if !phase.with_untracked(Phase::is_interactive) {
            return;
        }
        pending_delete.set(None);
        editing_id.set(Some(product.id));
        picked_image.set(None);
        form.set(EditForm::from_product(&product));
        phase.set(Phase::Editing(None));
    });

    let submit = Callback::new(move |_: ()| {
        if form.with_untracked(|f| f.name.trim().is_empty()) {
            phase.set(Phase::Editing(Some("Informe o nome do produto.".to_string())));
            return;
        }

        phase.set(Phase::Loading);
        spawn_local(async move {
            if let Some(file) = picked_image.get_untracked() {
                match state.track(api::upload_image(&file)).await {
                    Ok(url) => form.update(|f| f.image = Some(url)),
                    Err(e) => {
                        phase.set(after_failure(Request::Save, e));
                        return;
                    }
                }
            }

            let payload = form.with_untracked(|f| f.to_payload(editing_id.get_untracked()));
            match state.track(api::save_product(&payload)).await {
                Ok(saved) => {
                    products.update(|list| upsert(list, saved));
                    picked_image.set(None);
                    phase.set(Phase::Idle);
                    state.success("Produto salvo com sucesso!");
                }
                Err(e) => phase.set(after_failure(Request::Save, e)),
            }
        });
    });

    let cancel = Callback::new(move |_: ()| {
        picked_image.set(None);
        phase.set(Phase::Idle);
    });

    let request_delete = Callback::new(move |id: u64| {
        if phase.with_untracked(Phase::is_interactive) {
            pending_delete.set(Some(id));
        }
    });

    let confirm_delete = move |_: web_sys::MouseEvent| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        phase.set(Phase::Loading);

        spawn_local(async move {
            match state.track(api::delete_product(id)).await {
                Ok(_) => {
                    products.update(|list| list.retain(|p| p.id != id));
                    phase.set(Phase::Idle);
                    state.success("Produto excluído.");
                }
                Err(e) => {
                    state.error(e.clone());
                    phase.set(after_failure(Request::Delete, e));
                }
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <p class="text-gray-600">
                    {move || format!("{} produtos no cardápio", products.with(|p| p.len()))}
                </p>
                <button
                    on:click=open_new
                    disabled=move || !phase.with(Phase::is_interactive)
                    class="px-4 py-2 bg-red-600 hover:bg-red-700 disabled:bg-gray-400 text-white rounded-lg font-medium transition-colors"
                >
                    "+ Novo Produto"
                </button>
            </div>

            <div class="grid grid-cols-3 gap-4">
                {move || products.with(|list| category_counts(list)).into_iter().map(|(category, count)| view! {
                    <div class="bg-white rounded-xl shadow p-4">
                        <p class="text-sm text-gray-500">{category}</p>
                        <p class="text-2xl font-bold">{count}</p>
                    </div>
                }).collect_view()}
            </div>

            {move || match phase.get() {
                Phase::Error(message) => view! {
                    <div class="flex items-center justify-between bg-red-50 border border-red-200 text-red-700 rounded-lg px-4 py-3">
                        <span>{message}</span>
                        <button on:click=move |_| phase.set(Phase::Idle) class="text-sm underline">"Fechar"</button>
                    </div>
                }.into_view(),
                _ => view! {}.into_view(),
            }}

            {move || pending_delete.get().map(|id| {
                let name = products.with(|list| {
                    list.iter().find(|p| p.id == id).map(|p| p.name.clone()).unwrap_or_default()
                });
                view! {
                    <div class="flex items-center justify-between bg-yellow-50 border border-yellow-200 rounded-lg px-4 py-3">
                        <span>{format!("Excluir \"{}\"?", name)}</span>
                        <div class="space-x-2">
                            <button on:click=confirm_delete class="px-3 py-1 bg-red-600 text-white rounded-lg text-sm">"Excluir"</button>
                            <button on:click=move |_| pending_delete.set(None) class="px-3 py-1 bg-gray-100 rounded-lg text-sm">"Cancelar"</button>
                        </div>
                    </div>
                }
            })}

            {move || if phase.get() == Phase::Loading {
                view! { <Loading /> }.into_view()
            } else {
                view! {
                    <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                        {products.get().into_iter().map(|p| view! {
                            <ProductCard product=p on_edit=open_edit on_delete=request_delete />
                        }).collect_view()}
                    </div>
                }.into_view()
            }}

            {move || phase.with(Phase::is_editing).then(|| view! {
                <ProductForm
                    form=form
                    is_new=Signal::derive(move || editing_id.get().is_none())
                    picked_image=picked_image
                    error=Signal::derive(move || phase.with(Phase::save_error))
                    on_submit=submit
                    on_cancel=cancel
                />
            })}
        </div>
    }
}

#[component]
fn InfoEditor() -> impl IntoView {
    let state = use_app_state();
    let info = create_rw_signal(RestaurantInfo::default());
    let (saving, set_saving) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);

        let payload = info.get_untracked();
        spawn_local(async move {
            match state.track(api::save_restaurant_info(&payload)).await {
                Ok(_) => state.success("Informações salvas com sucesso!"),
                Err(e) => state.error(e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="bg-white rounded-xl shadow p-6 space-y-4 max-w-2xl">
            <InfoField label="Nome do restaurante" info=info
                get=|i| i.restaurant_name.clone() set=|i, v| i.restaurant_name = v />
            <InfoField label="Categoria" info=info
                get=|i| i.category.clone() set=|i, v| i.category = v />
            <InfoField label="Horário de funcionamento" info=info
                get=|i| i.opening_hours.clone() set=|i, v| i.opening_hours = v />
            <InfoField label="Tempo de entrega" info=info
                get=|i| i.delivery_time.clone() set=|i, v| i.delivery_time = v />

            <div>
                <label class="block text-sm text-gray-600 mb-1">"Descrição"</label>
                <textarea
                    rows=4
                    prop:value=move || info.with(|i| i.description.clone())
                    on:input=move |ev| info.update(|i| i.description = event_target_value(&ev))
                    class="w-full border border-gray-300 rounded-lg px-3 py-2 focus:border-red-500 focus:outline-none"
                />
            </div>

            <button
                type="submit"
                disabled=move || saving.get()
                class="px-6 py-2 bg-red-600 hover:bg-red-700 disabled:bg-gray-400 text-white rounded-lg font-medium transition-colors"
            >
                {move || if saving.get() { "Salvando..." } else { "Salvar alterações" }}
            </button>
        </form>
    }
}

#[component]
fn InfoField(
    label: &'static str,
    info: RwSignal<RestaurantInfo>,
    get: fn(&RestaurantInfo) -> String,
    set: fn(&mut RestaurantInfo, String),
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-600 mb-1">{label}</label>
            <input
                type="text"
                prop:value=move || info.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    info.update(|i| set(i, value));
                }
                class="w-full border border-gray-300 rounded-lg px-3 py-2 focus:border-red-500 focus:outline-none"
            />
        </div>
    }
}

#[component]
fn SettingsPanel() -> impl IntoView {
    let backend = if api::use_mock() {
        "Armazenamento local (modo de demonstração)".to_string()
    } else {
        api::api_base()
    };

    view! {
        <section class="bg-white rounded-xl shadow p-6 space-y-3 max-w-2xl">
            <h2 class="text-xl font-semibold">"Conexão"</h2>
            <div class="flex justify-between text-sm">
                <span class="text-gray-500">"API de produtos"</span>
                <span class="font-mono">{backend}</span>
            </div>
            <div class="flex justify-between text-sm">
                <span class="text-gray-500">"Relay"</span>
                <span class="font-mono">{api::relay_base()}</span>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: 1.0,
            description: String::new(),
            prep_time: String::new(),
            servings: String::new(),
            image: None,
            category: "Bebidas".to_string(),
        }
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut list = vec![product(1, "Suco"), product(2, "Chá")];
        upsert(&mut list, product(1, "Suco de Uva"));
        upsert(&mut list, product(3, "Café"));

        let names: Vec<&str> = list.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Suco de Uva", "Chá", "Café"]);
    }

    #[test]
    fn test_category_counts_cover_fixed_categories() {
        let list = vec![product(1, "Suco"), product(2, "Chá")];
        assert_eq!(
            category_counts(&list),
            vec![("Pratos Principais", 0), ("Bebidas", 2), ("Sobremesas", 0)]
        );
    }

    #[test]
    fn test_only_idle_and_error_accept_input() {
        assert!(Phase::Idle.is_interactive());
        assert!(Phase::Error("x".to_string()).is_interactive());
        assert!(!Phase::Loading.is_interactive());
        assert!(!Phase::Editing(None).is_interactive());
    }

    #[test]
    fn test_failed_save_reopens_form_with_message() {
        let phase = after_failure(Request::Save, "Erro ao salvar produto.".to_string());
        assert!(phase.is_editing());
        assert_eq!(phase.save_error().as_deref(), Some("Erro ao salvar produto."));

        let phase = after_failure(Request::Delete, "Erro ao excluir.".to_string());
        assert_eq!(phase, Phase::Error("Erro ao excluir.".to_string()));
        assert_eq!(phase.save_error(), None);
    }
}
