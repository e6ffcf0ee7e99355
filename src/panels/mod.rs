//! Chart Panels
//!
//! One panel per chart: local filter state, explicit fetch, canvas render.

pub mod chan_sentiment;
pub mod reddit_sentiment;
pub mod subreddit_counts;

pub use chan_sentiment::ChanSentimentPanel;
pub use reddit_sentiment::RedditSentimentPanel;
pub use subreddit_counts::SubredditCountsPanel;
