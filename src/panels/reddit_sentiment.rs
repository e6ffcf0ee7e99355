//! Reddit Sentiment Panel
//!
//! Per-subreddit sentiment from the Reddit service. With no subreddit
//! selected the chart stacks one series per sentiment across every
//! subreddit in the payload; with one selected it shows that subreddit's
//! three totals.

use leptos::*;

use crate::api;
use crate::components::bar_chart::{
    NEGATIVE_COLOR, NEUTRAL_COLOR, POSITIVE_COLOR, SENTIMENT_COLORS,
};
use crate::components::{BarChart, BarColor, BarSeries, LoadingOverlay};

/// Subreddits the Reddit service crawls, as (query value, display name)
const SUBREDDITS: [(&str, &str); 6] = [
    ("technology", "Technology"),
    ("csMajors", "Cs Majors"),
    ("cscareerquestions", "Cs Career Questions"),
    ("programming", "Programming"),
    ("jobs", "Jobs"),
    ("recruitinghell", "Recruiting Hell"),
];

/// Reddit sentiment panel component
#[component]
pub fn RedditSentimentPanel() -> impl IntoView {
    let (from_date, set_from_date) = create_signal(String::new());
    let (to_date, set_to_date) = create_signal(String::new());
    let (subreddit, set_subreddit) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);
    let (data, set_data) = create_signal(api::SentimentBreakdown::default());

    let on_filter = move |_| {
        let from = api::parse_date(&from_date.get());
        let to = api::parse_date(&to_date.get());
        let sub = subreddit.get();

        // Clear the previous payload so a stale subreddit mix is never shown
        set_data.set(api::SentimentBreakdown::default());

        set_loading.set(true);
        spawn_local(async move {
            let filter = (!sub.is_empty()).then_some(sub.as_str());
            match api::fetch_reddit_sentiments(from, to, filter).await {
                Ok(breakdown) => {
                    set_data.set(breakdown);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch Reddit sentiments: {}", e).into(),
                    );
                }
            }
            set_loading.set(false);
        });
    };

    // Chart shape depends on whether a single subreddit is selected
    let chart = create_memo(move |_| {
        let breakdown = data.get();
        let sub = subreddit.get();

        if sub.is_empty() {
            let labels = breakdown.categories();
            let sentiment = |name: &str, color, values: Vec<f64>| BarSeries {
                name: name.to_string(),
                values,
                color: BarColor::Uniform(color),
            };

            let series = vec![
                sentiment(
                    "Positive",
                    POSITIVE_COLOR,
                    labels
                        .iter()
                        .map(|l| breakdown.positive.for_category(l) as f64)
                        .collect(),
                ),
                sentiment(
                    "Neutral",
                    NEUTRAL_COLOR,
                    labels
                        .iter()
                        .map(|l| breakdown.neutral.for_category(l) as f64)
                        .collect(),
                ),
                sentiment(
                    "Negative",
                    NEGATIVE_COLOR,
                    labels
                        .iter()
                        .map(|l| breakdown.negative.for_category(l) as f64)
                        .collect(),
                ),
            ];

            (labels, series, true)
        } else {
            let labels = vec![
                "Positive".to_string(),
                "Neutral".to_string(),
                "Negative".to_string(),
            ];
            let series = vec![BarSeries {
                name: "Sentiment Counts".to_string(),
                values: vec![
                    breakdown.positive.for_category(&sub) as f64,
                    breakdown.neutral.for_category(&sub) as f64,
                    breakdown.negative.for_category(&sub) as f64,
                ],
                color: BarColor::PerBar(&SENTIMENT_COLORS),
            }];

            (labels, series, false)
        }
    });

    let labels = Signal::derive(move || chart.get().0);
    let series = Signal::derive(move || chart.get().1);
    let stacked = Signal::derive(move || chart.get().2);

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Reddit Sentiment Analysis"</h2>

            <div class="flex flex-wrap items-end gap-4 mb-4">
                <label class="text-sm text-gray-300">
                    "Sub-Reddit"
                    <select
                        class="block mt-1 bg-gray-700 rounded px-2 py-1"
                        on:change=move |ev| set_subreddit.set(event_target_value(&ev))
                    >
                        <option value="">"All Sub-Reddits"</option>
                        {SUBREDDITS
                            .iter()
                            .map(|(value, display)| {
                                view! { <option value=*value>{*display}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="text-sm text-gray-300">
                    "Start Date"
                    <input
                        type="date"
                        class="block mt-1 bg-gray-700 rounded px-2 py-1"
                        prop:value=from_date
                        on:input=move |ev| set_from_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="text-sm text-gray-300">
                    "End Date"
                    <input
                        type="date"
                        class="block mt-1 bg-gray-700 rounded px-2 py-1"
                        prop:value=to_date
                        on:input=move |ev| set_to_date.set(event_target_value(&ev))
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
                <BarChart labels=labels series=series stacked=stacked />
            </LoadingOverlay>
        </section>
    }
}
