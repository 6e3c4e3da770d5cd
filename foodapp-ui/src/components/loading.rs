//! Loading Component
//!
//! Spinners and skeleton placeholders.

use leptos::*;

/// Full-width loading spinner
#[component]
pub fn Loading(
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3">
            <div class="w-8 h-8 border-4 border-red-200 border-t-red-600 rounded-full animate-spin" />
            {label.map(|l| view! { <p class="text-sm text-gray-500">{l}</p> })}
        </div>
    }
}

/// Skeleton loader for product cards
#[component]
pub fn CardSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-white rounded-xl shadow p-4">
                    <div class="h-40 bg-gray-200 rounded-lg mb-4" />
                    <div class="h-4 bg-gray-200 rounded w-2/3 mb-2" />
                    <div class="h-4 bg-gray-200 rounded w-1/3" />
                </div>
            }).collect_view()}
        </div>
    }
}
