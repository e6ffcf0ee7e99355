//! 4chan Sentiment Panel
//!
//! Positive/Neutral/Negative totals from the 4chan service, with optional
//! date-range filters.

use leptos::*;

use crate::api;
use crate::components::bar_chart::SENTIMENT_COLORS;
use crate::components::{BarChart, BarColor, BarSeries, LoadingOverlay};

/// 4chan sentiment panel component
#[component]
pub fn ChanSentimentPanel() -> impl IntoView {
    let (start_date, set_start_date) = create_signal(String::new());
    let (end_date, set_end_date) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);
    let (data, set_data) = create_signal(api::SentimentBreakdown::default());

    let on_filter = move |_| {
        let start = api::parse_date(&start_date.get());
        let end = api::parse_date(&end_date.get());

        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_chan_sentiments(start, end).await {
                Ok(breakdown) => {
                    set_data.set(breakdown);
                }
                Err(e) => {
                    // Keep whatever was on screen before
                    web_sys::console::error_1(
                        &format!("Failed to fetch 4chan sentiments: {}", e).into(),
                    );
                }
            }
            set_loading.set(false);
        });
    };

    let labels = Signal::derive(|| {
        vec![
            "Positive".to_string(),
            "Neutral".to_string(),
            "Negative".to_string(),
        ]
    });

    let series = Signal::derive(move || {
        let breakdown = data.get();
        vec![BarSeries {
            name: "Sentiment Counts".to_string(),
            values: vec![
                breakdown.positive.total() as f64,
                breakdown.neutral.total() as f64,
                breakdown.negative.total() as f64,
            ],
            color: BarColor::PerBar(&SENTIMENT_COLORS),
        }]
    });

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"4chan Sentiment Analysis for Job Market"</h2>

            <div class="flex flex-wrap items-end gap-4 mb-4">
                <label class="text-sm text-gray-300">
                    "Start Date"
                    <input
                        type="date"
                        class="block mt-1 bg-gray-700 rounded px-2 py-1"
                        prop:value=start_date
                        on:input=move |ev| set_start_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="text-sm text-gray-300">
                    "End Date"
                    <input
                        type="date"
                        class="block mt-1 bg-gray-700 rounded px-2 py-1"
                        prop:value=end_date
                        on:input=move |ev| set_end_date.set(event_target_value(&ev))
                    />
                </label>
                <button
                    on:click=on_filter
                    disabled=move || loading.get()
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg text-sm font-medium transition-colors"
                >
                    "Filter"
                </button>
            </div>

            <LoadingOverlay loading=loading>
                <BarChart labels=labels series=series />
            </LoadingOverlay>
        </section>
    }
}
