//! HTTP API Client
//!
//! Functions for communicating with the two sentiment API services:
//! service A (4chan crawler: health check + aggregate sentiments) and
//! service B (Reddit crawler: per-subreddit sentiments + post counts).
//! Both are external collaborators; this crate only consumes their JSON.

use chrono::NaiveDate;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, BTreeSet};

/// Default base URL for the 4chan service (health check + `/sentiments`)
pub const DEFAULT_CHAN_API_BASE: &str = "http://127.0.0.1:8000";

/// Default base URL for the Reddit service (`/sentimentsReddit`, `/countsReddit`)
pub const DEFAULT_REDDIT_API_BASE: &str = "http://127.0.0.1:8001";

/// Deadline for the startup connectivity probe
pub const PROBE_TIMEOUT_MS: u32 = 10_000;

/// Get the 4chan service base URL from local storage or use default
pub fn chan_api_base() -> String {
    base_from_storage("dashboard_chan_api_url", DEFAULT_CHAN_API_BASE)
}

/// Get the Reddit service base URL from local storage or use default
pub fn reddit_api_base() -> String {
    base_from_storage("dashboard_reddit_api_url", DEFAULT_REDDIT_API_BASE)
}

fn base_from_storage(key: &str, default: &str) -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(key) {
                url
            } else {
                default.to_string()
            }
        } else {
            default.to_string()
        }
    } else {
        default.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// A sentiment count as the services report it: the 4chan service returns
/// plain totals, the Reddit service returns per-subreddit maps. Absent
/// fields are treated as a zero count.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum SentimentValue {
    Count(u64),
    ByCategory(BTreeMap<String, u64>),
}

impl Default for SentimentValue {
    fn default() -> Self {
        SentimentValue::Count(0)
    }
}

impl SentimentValue {
    /// Total count across all categories
    pub fn total(&self) -> u64 {
        match self {
            SentimentValue::Count(n) => *n,
            SentimentValue::ByCategory(map) => map.values().sum(),
        }
    }

    /// Count for a single category; missing keys read as 0
    pub fn for_category(&self, name: &str) -> u64 {
        match self {
            SentimentValue::Count(n) => *n,
            SentimentValue::ByCategory(map) => map.get(name).copied().unwrap_or(0),
        }
    }

    /// Category labels present in this value (empty for scalar counts)
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        match self {
            SentimentValue::Count(_) => None,
            SentimentValue::ByCategory(map) => Some(map.keys().map(String::as_str)),
        }
        .into_iter()
        .flatten()
    }
}

/// Sentiment payload from either service
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct SentimentBreakdown {
    #[serde(default)]
    pub positive: SentimentValue,
    #[serde(default)]
    pub neutral: SentimentValue,
    #[serde(default)]
    pub negative: SentimentValue,
}

impl SentimentBreakdown {
    /// Union of category labels across all three sentiment fields, sorted
    pub fn categories(&self) -> Vec<String> {
        let mut labels = BTreeSet::new();
        for value in [&self.positive, &self.neutral, &self.negative] {
            labels.extend(value.categories().map(str::to_string));
        }
        labels.into_iter().collect()
    }
}

// ============ Query Strings ============

/// Build a query string from optional filter values, skipping absent and
/// empty ones. Returns "" when nothing is set, otherwise "?k=v&...".
pub fn build_query(params: &[(&str, Option<String>)]) -> String {
    let mut query = String::new();
    for (key, value) in params {
        if let Some(value) = value {
            if value.is_empty() {
                continue;
            }
            query.push(if query.is_empty() { '?' } else { '&' });
            query.push_str(key);
            query.push('=');
            query.push_str(value);
        }
    }
    query
}

/// Parse a date filter as entered in an `<input type="date">`. Empty or
/// malformed input counts as "no filter".
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// ============ API Functions ============

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("API responded with status {}", response.status()));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// One-shot connectivity probe against the 4chan service health endpoint.
/// The request is aborted if it outlives [`PROBE_TIMEOUT_MS`].
pub async fn check_connection() -> Result<(), String> {
    let url = format!("{}/testconnection", chan_api_base());

    let controller = web_sys::AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());

    // Timer races the request; dropping it on completion cancels the timer.
    let deadline = controller.clone().map(|controller| {
        gloo_timers::callback::Timeout::new(PROBE_TIMEOUT_MS, move || controller.abort())
    });

    let result = Request::get(&url)
        .abort_signal(signal.as_ref())
        .send()
        .await;
    drop(deadline);

    let response = result.map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("API responded with status {}", response.status()));
    }

    Ok(())
}

/// Fetch 4chan sentiment totals, optionally restricted to a date range
pub async fn fetch_chan_sentiments(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<SentimentBreakdown, String> {
    let query = build_query(&[
        ("startDate", start.map(format_date)),
        ("endDate", end.map(format_date)),
    ]);

    get_json(&format!("{}/sentiments{}", chan_api_base(), query)).await
}

/// Fetch per-subreddit Reddit sentiments, optionally restricted to a date
/// range and/or a single subreddit
pub async fn fetch_reddit_sentiments(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    subreddit: Option<&str>,
) -> Result<SentimentBreakdown, String> {
    let query = build_query(&[
        ("from_date", from.map(format_date)),
        ("to_date", to.map(format_date)),
        ("subreddit", subreddit.map(str::to_string)),
    ]);

    get_json(&format!("{}/sentimentsReddit{}", reddit_api_base(), query)).await
}

/// Fetch post counts per subreddit
pub async fn fetch_subreddit_counts() -> Result<BTreeMap<String, u64>, String> {
    get_json(&format!("{}/countsReddit", reddit_api_base())).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_empty() {
        assert_eq!(build_query(&[]), "");
        assert_eq!(build_query(&[("startDate", None)]), "");
        assert_eq!(build_query(&[("startDate", Some(String::new()))]), "");
    }

    #[test]
    fn test_build_query_skips_absent_filters() {
        let query = build_query(&[
            ("from_date", Some("2024-11-01".to_string())),
            ("to_date", None),
            ("subreddit", Some("jobs".to_string())),
        ]);
        assert_eq!(query, "?from_date=2024-11-01&subreddit=jobs");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-11-01"),
            NaiveDate::from_ymd_opt(2024, 11, 1)
        );
        assert_eq!(parse_date(" 2024-11-01 "), NaiveDate::from_ymd_opt(2024, 11, 1));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("11/01/2024"), None);
    }

    #[test]
    fn test_scalar_breakdown_decodes() {
        let breakdown: SentimentBreakdown =
            serde_json::from_str(r#"{"positive":3,"neutral":1,"negative":2}"#).unwrap();
        assert_eq!(breakdown.positive.total(), 3);
        assert_eq!(breakdown.neutral.total(), 1);
        assert_eq!(breakdown.negative.total(), 2);
        assert!(breakdown.categories().is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let breakdown: SentimentBreakdown = serde_json::from_str(r#"{"positive":5}"#).unwrap();
        assert_eq!(breakdown.positive.total(), 5);
        assert_eq!(breakdown.neutral.total(), 0);
        assert_eq!(breakdown.negative.total(), 0);
    }

    #[test]
    fn test_categorized_breakdown_decodes() {
        let breakdown: SentimentBreakdown = serde_json::from_str(
            r#"{
                "positive": {"jobs": 4, "technology": 7},
                "neutral": {"jobs": 2},
                "negative": {"programming": 1}
            }"#,
        )
        .unwrap();

        assert_eq!(breakdown.positive.for_category("jobs"), 4);
        assert_eq!(breakdown.neutral.for_category("technology"), 0);
        assert_eq!(breakdown.positive.total(), 11);
        // Union across all three fields, sorted
        assert_eq!(breakdown.categories(), vec!["jobs", "programming", "technology"]);
    }

    #[test]
    fn test_counts_payload_sorted_by_key() {
        let counts: BTreeMap<String, u64> =
            serde_json::from_str(r#"{"technology": 12, "jobs": 30, "csMajors": 8}"#).unwrap();
        let labels: Vec<_> = counts.keys().cloned().collect();
        assert_eq!(labels, vec!["csMajors", "jobs", "technology"]);
    }
}
