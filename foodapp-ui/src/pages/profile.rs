//! Profile Page
//!
//! Customer profile: favorite restaurants, delivery addresses, order
//! history and account settings. Data is local to the page.

use leptos::*;

use crate::state::use_app_state;

#[derive(Clone, Debug, PartialEq)]
struct Address {
    id: u64,
    title: String,
    street: String,
    city: String,
    state: String,
    is_main: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct AddressForm {
    title: String,
    street: String,
    city: String,
    state: String,
}

impl AddressForm {
    fn from_address(address: &Address) -> Self {
        Self {
            title: address.title.clone(),
            street: address.street.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
        }
    }

    fn is_complete(&self) -> bool {
        [&self.title, &self.street, &self.city, &self.state]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Favorite {
    id: u64,
    name: &'static str,
    rating: f32,
    category: &'static str,
    delivery_time: &'static str,
    distance: &'static str,
    is_favorite: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum OrderStatus {
    Delivered,
    Cancelled,
    Processing,
}

impl OrderStatus {
    fn label(self) -> &'static str {
        match self {
            OrderStatus::Delivered => "Entregue",
            OrderStatus::Cancelled => "Cancelado",
            OrderStatus::Processing => "Em processamento",
        }
    }

    fn badge(self) -> &'static str {
        match self {
            OrderStatus::Delivered => "bg-green-100 text-green-700",
            OrderStatus::Cancelled => "bg-red-100 text-red-700",
            OrderStatus::Processing => "bg-yellow-100 text-yellow-700",
        }
    }
}

#[derive(Clone, Debug)]
struct Order {
    restaurant_name: &'static str,
    order_number: &'static str,
    date: &'static str,
    total: &'static str,
    status: OrderStatus,
    items: &'static [&'static str],
}

const ORDERS: [Order; 3] = [
    Order {
        restaurant_name: "Restaurante do Chef",
        order_number: "#12345",
        date: "20/02/2025",
        total: "R$ 89,90",
        status: OrderStatus::Delivered,
        items: &["1x Filé à Parmegiana", "1x Arroz", "1x Coca-Cola 350ml"],
    },
    Order {
        restaurant_name: "Pizza Delícia",
        order_number: "#12344",
        date: "15/02/2025",
        total: "R$ 75,50",
        status: OrderStatus::Delivered,
        items: &["1x Pizza Grande Margherita", "1x Guaraná 2L"],
    },
    Order {
        restaurant_name: "Sushi Express",
        order_number: "#12343",
        date: "10/02/2025",
        total: "R$ 132,00",
        status: OrderStatus::Cancelled,
        items: &["2x Combo 20 Peças", "1x Temaki Salmão"],
    },
];

fn initial_favorites() -> Vec<Favorite> {
    vec![
        Favorite {
            id: 1,
            name: "Restaurante do Chef",
            rating: 4.8,
            category: "Contemporâneo • Brasileiro",
            delivery_time: "30-45 min",
            distance: "2.5 km",
            is_favorite: true,
        },
        Favorite {
            id: 2,
            name: "Pizza Delícia",
            rating: 4.6,
            category: "Pizza • Italiana",
            delivery_time: "40-55 min",
            distance: "3.2 km",
            is_favorite: true,
        },
    ]
}

fn initial_addresses() -> Vec<Address> {
    vec![Address {
        id: 1,
        title: "Endereço Principal".to_string(),
        street: "Rua das Flores, 123 - Jardim América".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
        is_main: true,
    }]
}

/// Insert or update from the modal form. A new address is main only when
/// the list was empty.
fn save_address(
    addresses: &mut Vec<Address>,
    next_id: &mut u64,
    editing: Option<u64>,
    form: AddressForm,
) {
    match editing.and_then(|id| addresses.iter_mut().find(|a| a.id == id)) {
        Some(address) => {
            address.title = form.title;
            address.street = form.street;
            address.city = form.city;
            address.state = form.state;
        }
        None => {
            let is_main = addresses.is_empty();
            addresses.push(Address {
                id: *next_id,
                title: form.title,
                street: form.street,
                city: form.city,
                state: form.state,
                is_main,
            });
            *next_id += 1;
        }
    }
}

fn set_main(addresses: &mut [Address], id: u64) {
    if addresses.iter().any(|a| a.id == id) {
        for address in addresses.iter_mut() {
            address.is_main = address.id == id;
        }
    }
}

/// Removing the main address promotes the first remaining one
fn remove_address(addresses: &mut Vec<Address>, id: u64) {
    let Some(index) = addresses.iter().position(|a| a.id == id) else {
        return;
    };
    let removed = addresses.remove(index);
    if removed.is_main {
        if let Some(first) = addresses.first_mut() {
            first.is_main = true;
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Favorites,
    Addresses,
    Orders,
    Settings,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Favorites, Tab::Addresses, Tab::Orders, Tab::Settings];

    fn label(self) -> &'static str {
        match self {
            Tab::Favorites => "Restaurantes Favoritos",
            Tab::Addresses => "Endereços",
            Tab::Orders => "Histórico de Pedidos",
            Tab::Settings => "Configurações",
        }
    }
}

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let (tab, set_tab) = create_signal(Tab::Favorites);

    view! {
        <div class="container mx-auto px-4 py-8 grid gap-6 md:grid-cols-4">
            <aside class="bg-white rounded-xl shadow p-4 space-y-1 h-fit">
                <div class="text-center pb-4 mb-2 border-b border-gray-100">
                    <div class="text-5xl mb-2">"👤"</div>
                    <p class="font-semibold">"Cliente FoodApp"</p>
                </div>
                {Tab::ALL.into_iter().map(|t| view! {
                    <button
                        on:click=move |_| set_tab.set(t)
                        class=move || {
                            let base = "w-full text-left px-4 py-2 rounded-lg transition-colors";
                            if tab.get() == t {
                                format!("{} bg-red-50 text-red-600 font-medium", base)
                            } else {
                                format!("{} text-gray-600 hover:bg-gray-50", base)
                            }
                        }
                    >
                        {t.label()}
                    </button>
                }).collect_view()}
            </aside>

            <section class="md:col-span-3">
                {move || match tab.get() {
                    Tab::Favorites => view! { <Favorites /> }.into_view(),
                    Tab::Addresses => view! { <Addresses /> }.into_view(),
                    Tab::Orders => view! { <Orders /> }.into_view(),
                    Tab::Settings => view! { <AccountSettings /> }.into_view(),
                }}
            </section>
        </div>
    }
}

#[component]
fn Favorites() -> impl IntoView {
    let favorites = create_rw_signal(initial_favorites());

    let toggle = move |id: u64| {
        favorites.update(|list| {
            if let Some(f) = list.iter_mut().find(|f| f.id == id) {
                f.is_favorite = !f.is_favorite;
            }
        });
    };

    view! {
        <div class="space-y-4">
            <h2 class="text-2xl font-semibold">"Restaurantes Favoritos"</h2>
            {move || {
                let active: Vec<Favorite> = favorites.get().into_iter().filter(|f| f.is_favorite).collect();
                if active.is_empty() {
                    view! { <p class="text-gray-500">"Você ainda não tem favoritos."</p> }.into_view()
                } else {
                    active.into_iter().map(|f| view! {
                        <div class="bg-white rounded-xl shadow p-4 flex items-center justify-between">
                            <div>
                                <h3 class="font-semibold">{f.name}</h3>
                                <p class="text-sm text-gray-600">{f.category}</p>
                                <p class="text-xs text-gray-500 mt-1">
                                    {format!("★ {:.1} • {} • {}", f.rating, f.delivery_time, f.distance)}
                                </p>
                            </div>
                            <button on:click=move |_| toggle(f.id) class="text-red-600 text-2xl" title="Remover dos favoritos">"♥"</button>
                        </div>
                    }).collect_view()
                }
            }}
        </div>
    }
}

#[component]
fn Addresses() -> impl IntoView {
    let state = use_app_state();

    let addresses = create_rw_signal(initial_addresses());
    let next_id = store_value(2u64);
    // Some(None) = adding, Some(Some(id)) = editing
    let modal = create_rw_signal(None::<Option<u64>>);
    let form = create_rw_signal(AddressForm::default());

    let open_new = move |_| {
        form.set(AddressForm::default());
        modal.set(Some(None));
    };

    let open_edit = move |address: Address| {
        form.set(AddressForm::from_address(&address));
        modal.set(Some(Some(address.id)));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = form.get_untracked();
        if !draft.is_complete() {
            state.error("Preencha todos os campos do endereço.");
            return;
        }
        let editing = modal.get_untracked().flatten();
        next_id.update_value(|next| {
            addresses.update(|list| save_address(list, next, editing, draft));
        });
        modal.set(None);
    };

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-semibold">"Endereços"</h2>
                <button on:click=open_new class="px-4 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium transition-colors">
                    "+ Novo Endereço"
                </button>
            </div>

            {move || addresses.get().into_iter().map(|a| {
                let id = a.id;
                let for_edit = a.clone();
                view! {
                    <div class="bg-white rounded-xl shadow p-4 flex items-start justify-between">
                        <div>
                            <div class="flex items-center space-x-2">
                                <h3 class="font-semibold">{a.title.clone()}</h3>
                                {a.is_main.then(|| view! {
                                    <span class="text-xs bg-red-100 text-red-600 px-2 py-0.5 rounded-full">"Principal"</span>
                                })}
                            </div>
                            <p class="text-sm text-gray-600">{a.street.clone()}</p>
                            <p class="text-sm text-gray-600">{format!("{} - {}", a.city, a.state)}</p>
                        </div>
                        <div class="flex flex-col items-end space-y-1 text-sm">
                            <button on:click=move |_| open_edit(for_edit.clone()) class="text-gray-600 hover:text-gray-900">"Editar"</button>
                            {(!a.is_main).then(|| view! {
                                <button on:click=move |_| addresses.update(|l| set_main(l, id)) class="text-gray-600 hover:text-gray-900">"Tornar principal"</button>
                            })}
                            <button on:click=move |_| addresses.update(|l| remove_address(l, id)) class="text-red-600 hover:text-red-700">"Excluir"</button>
                        </div>
                    </div>
                }
            }).collect_view()}

            {move || modal.get().map(|editing| view! {
                <div class="fixed inset-0 bg-black/50 z-40 flex items-center justify-center p-4">
                    <form on:submit=on_submit.clone() class="bg-white rounded-xl shadow-xl w-full max-w-md p-6 space-y-3">
                        <h3 class="text-xl font-bold">
                            {if editing.is_some() { "Editar Endereço" } else { "Novo Endereço" }}
                        </h3>
                        <AddressField label="Título" form=form get=|f| f.title.clone() set=|f, v| f.title = v />
                        <AddressField label="Endereço" form=form get=|f| f.street.clone() set=|f, v| f.street = v />
                        <div class="grid grid-cols-2 gap-3">
                            <AddressField label="Cidade" form=form get=|f| f.city.clone() set=|f, v| f.city = v />
                            <AddressField label="Estado" form=form get=|f| f.state.clone() set=|f, v| f.state = v />
                        </div>
                        <div class="flex justify-end space-x-2 pt-2">
                            <button type="button" on:click=move |_| modal.set(None) class="px-4 py-2 bg-gray-100 rounded-lg">"Cancelar"</button>
                            <button type="submit" class="px-4 py-2 bg-red-600 text-white rounded-lg">"Salvar"</button>
                        </div>
                    </form>
                </div>
            })}
        </div>
    }
}

#[component]
fn AddressField(
    label: &'static str,
    form: RwSignal<AddressForm>,
    get: fn(&AddressForm) -> String,
    set: fn(&mut AddressForm, String),
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

#[component]
fn Orders() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h2 class="text-2xl font-semibold">"Histórico de Pedidos"</h2>
            {ORDERS.iter().map(|o| view! {
                <div class="bg-white rounded-xl shadow p-4 space-y-2">
                    <div class="flex items-center justify-between">
                        <div>
                            <h3 class="font-semibold">{o.restaurant_name}</h3>
                            <p class="text-xs text-gray-500">{format!("Pedido {} • {}", o.order_number, o.date)}</p>
                        </div>
                        <span class=format!("text-xs px-2 py-1 rounded-full {}", o.status.badge())>{o.status.label()}</span>
                    </div>
                    <ul class="text-sm text-gray-600">
                        {o.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                    <p class="text-right font-semibold">{o.total}</p>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn AccountSettings() -> impl IntoView {
    let state = use_app_state();
    let (notifications, set_notifications) = create_signal(true);

    view! {
        <div class="bg-white rounded-xl shadow p-6 space-y-4">
            <h2 class="text-2xl font-semibold">"Configurações"</h2>
            <label class="flex items-center justify-between">
                <span>"Receber notificações de pedidos"</span>
                <input
                    type="checkbox"
                    prop:checked=move || notifications.get()
                    on:change=move |ev| set_notifications.set(event_target_checked(&ev))
                />
            </label>
            <button
                on:click=move |_| state.success("Preferências salvas.")
                class="px-4 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium transition-colors"
            >
                "Salvar"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str) -> AddressForm {
        AddressForm {
            title: title.to_string(),
            street: "Rua A, 1".to_string(),
            city: "Campinas".to_string(),
            state: "SP".to_string(),
        }
    }

    #[test]
    fn test_first_address_becomes_main() {
        let mut list = Vec::new();
        let mut next = 1;
        save_address(&mut list, &mut next, None, form("Casa"));
        save_address(&mut list, &mut next, None, form("Trabalho"));

        assert!(list[0].is_main);
        assert!(!list[1].is_main);
        assert_eq!(next, 3);
    }

    #[test]
    fn test_removing_main_promotes_next() {
        let mut list = initial_addresses();
        let mut next = 2;
        save_address(&mut list, &mut next, None, form("Trabalho"));

        remove_address(&mut list, 1);
        assert_eq!(list.len(), 1);
        assert!(list[0].is_main);
    }

    #[test]
    fn test_set_main_unknown_id_is_ignored() {
        let mut list = initial_addresses();
        set_main(&mut list, 42);
        assert!(list[0].is_main);
    }

    #[test]
    fn test_incomplete_form() {
        let mut f = form("Casa");
        assert!(f.is_complete());
        f.city = "  ".to_string();
        assert!(!f.is_complete());
    }
}
