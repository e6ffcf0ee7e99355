//! App Root Component
//!
//! Runs the startup connectivity probe and gates the chart panels on its
//! outcome.

use leptos::*;

use crate::api;
use crate::components::Loading;
use crate::panels::{ChanSentimentPanel, RedditSentimentPanel, SubredditCountsPanel};

/// Outcome of the startup probe. Set exactly once, never reset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConnectionStatus {
    Pending,
    Connected,
    Failed,
}

impl ConnectionStatus {
    fn from_probe<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => ConnectionStatus::Connected,
            Err(_) => ConnectionStatus::Failed,
        }
    }
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let (status, set_status) = create_signal(ConnectionStatus::Pending);

    // Probe the backend once on mount
    create_effect(move |_| {
        spawn_local(async move {
            let result = api::check_connection().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Error connecting backend API: {}", e).into());
            }
            set_status.set(ConnectionStatus::from_probe(&result));
        });
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                {move || match status.get() {
                    ConnectionStatus::Pending => view! {
                        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
                            <Loading />
                            <p class="text-gray-400">"Checking API connection..."</p>
                        </div>
                    }.into_view(),
                    ConnectionStatus::Failed => view! {
                        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
                            <p class="text-red-400">
                                "Unable to connect to API. Please ensure the API service is running in backend."
                            </p>
                        </div>
                    }.into_view(),
                    ConnectionStatus::Connected => view! {
                        <div class="space-y-8">
                            <h1 class="text-3xl font-bold text-center py-6">
                                "Job Market Sentiment Analysis"
                            </h1>

                            <div class="grid gap-8 xl:grid-cols-2">
                                <ChanSentimentPanel />
                                <RedditSentimentPanel />
                                <SubredditCountsPanel />
                            </div>
                        </div>
                    }.into_view(),
                }}
            </main>

            <Footer status=status />
        </div>
    }
}

/// Footer showing probe outcome and the resolved API bases
#[component]
fn Footer(
    #[prop(into)]
    status: Signal<ConnectionStatus>,
) -> impl IntoView {
    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="flex items-center space-x-2">
                    {move || {
                        match status.get() {
                            ConnectionStatus::Connected => view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                                    <span>"Connected"</span>
                                </span>
                            }.into_view(),
                            ConnectionStatus::Failed => view! {
                                <span class="flex items-center space-x-1 text-red-400">
                                    <span class="w-2 h-2 bg-red-400 rounded-full" />
                                    <span>"Disconnected"</span>
                                </span>
                            }.into_view(),
                            ConnectionStatus::Pending => view! {
                                <span class="flex items-center space-x-1 text-gray-400">
                                    <span class="w-2 h-2 bg-gray-400 rounded-full" />
                                    <span>"Connecting..."</span>
                                </span>
                            }.into_view(),
                        }
                    }}
                </div>

                <div class="text-gray-400">
                    {format!("4chan API: {} · Reddit API: {}", api::chan_api_base(), api::reddit_api_base())}
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_success_connects() {
        let result: Result<(), String> = Ok(());
        assert_eq!(
            ConnectionStatus::from_probe(&result),
            ConnectionStatus::Connected
        );
    }

    #[test]
    fn test_probe_failure_disconnects() {
        let result: Result<(), String> = Err("Network error: timed out".to_string());
        assert_eq!(
            ConnectionStatus::from_probe(&result),
            ConnectionStatus::Failed
        );
    }
}
