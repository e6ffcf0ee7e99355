//! Loading Component
//!
//! Loading spinners shown while a fetch is in flight.

use leptos::*;

/// Full-width loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Loading overlay that keeps the wrapped content visible underneath
#[component]
pub fn LoadingOverlay(
    #[prop(into)]
    loading: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="relative">
            {children()}

            {move || {
                if loading.get() {
                    view! {
                        <div class="absolute inset-0 bg-gray-900/50 flex items-center justify-center rounded-lg">
                            <div class="loading-spinner w-8 h-8" />
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}
