//! HTTP API Client
//!
//! Talks to the two sentiment API services consumed by the dashboard.

pub mod client;

pub use client::*;
