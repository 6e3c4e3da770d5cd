//! Navigation Component
//!
//! Header bar with the brand, a link to each page and a spinner while
//! requests are in flight.

use leptos::*;
use leptos_router::*;

use crate::state::use_app_state;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_app_state();

    view! {
        <nav class="bg-white border-b border-gray-200 shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-2">
                        <span class="text-2xl">"🍔"</span>
                        <span class="text-xl font-bold text-red-600">"FoodApp"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        {move || state.is_busy().then(|| view! {
                            <span
                                class="h-5 w-5 mr-3 border-2 border-red-600 border-t-transparent rounded-full animate-spin"
                                title="Carregando"
                            />
                        })}
                        <NavLink href="/" label="Início" />
                        <NavLink href="/restaurante" label="Cardápio" />
                        <NavLink href="/dashboard" label="Meu Restaurante" />
                        <NavLink href="/cliente" label="Perfil" />
                        <NavLink href="/entrar" label="Entrar" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-red-600 hover:bg-red-50 transition-colors"
            active_class="bg-red-50 text-red-600"
        >
            {label}
        </A>
    }
}
