//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, NoticeStack};
use crate::pages::{Auth, Dashboard, Home, Profile, RestaurantMenu};
use crate::state::provide_app_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_app_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
                <Nav />

                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/restaurante" view=RestaurantMenu />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/cliente" view=Profile />
                        <Route path="/entrar" view=Auth />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <NoticeStack />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🍽️"</div>
            <h1 class="text-3xl font-bold mb-2">"Página não encontrada"</h1>
            <p class="text-gray-600 mb-6">"O endereço que você procura não existe."</p>
            <A
                href="/"
                class="px-6 py-3 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium transition-colors"
            >
                "Voltar ao início"
            </A>
        </div>
    }
}
