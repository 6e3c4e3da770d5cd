//! Notice Stack Component
//!
//! Renders the app notices; each can be closed before it expires.

use leptos::*;

use crate::state::{use_app_state, Notice, NoticeKind};

#[component]
pub fn NoticeStack() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="fixed bottom-6 right-4 z-50 flex flex-col items-end space-y-2">
            <For
                each=move || state.notices().get()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    let (icon, color) = match notice.kind {
                        NoticeKind::Success => ("✓", "bg-green-600"),
                        NoticeKind::Error => ("✕", "bg-red-600"),
                    };
                    view! {
                        <div class=format!("flex items-center space-x-3 {} text-white pl-4 pr-2 py-3 rounded-lg shadow-lg", color)>
                            <span class="text-lg">{icon}</span>
                            <span class="text-sm font-medium">{notice.text}</span>
                            <button
                                on:click=move |_| state.dismiss(id)
                                class="px-2 text-white/80 hover:text-white"
                                aria-label="Fechar"
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
