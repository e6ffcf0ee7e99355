//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod bar_chart;
pub mod loading;

pub use bar_chart::{BarChart, BarColor, BarSeries};
pub use loading::{Loading, LoadingOverlay};
