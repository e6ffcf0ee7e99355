//! Subreddit Counts Panel
//!
//! Post counts per subreddit, fetched once when the panel mounts. No
//! filters.

use leptos::*;
use std::collections::BTreeMap;

use crate::api;
use crate::components::bar_chart::CATEGORY_PALETTE;
use crate::components::{BarChart, BarColor, BarSeries, LoadingOverlay};

/// Subreddit post-count panel component
#[component]
pub fn SubredditCountsPanel() -> impl IntoView {
    let (loading, set_loading) = create_signal(false);
    let (data, set_data) = create_signal(BTreeMap::<String, u64>::new());

    // Fetch once on mount
    create_effect(move |_| {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_subreddit_counts().await {
                Ok(counts) => {
                    set_data.set(counts);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch subreddit counts: {}", e).into(),
                    );
                }
            }
            set_loading.set(false);
        });
    });

    let labels = Signal::derive(move || data.get().keys().cloned().collect::<Vec<_>>());

    let series = Signal::derive(move || {
        vec![BarSeries {
            name: "Subreddit Post Counts".to_string(),
            values: data.get().values().map(|&count| count as f64).collect(),
            color: BarColor::PerBar(&CATEGORY_PALETTE),
        }]
    });

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Subreddit Post Counts"</h2>

            <LoadingOverlay loading=loading>
                <BarChart labels=labels series=series />
            </LoadingOverlay>
        </section>
    }
}
