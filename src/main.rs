//! Sentiment Dashboard
//!
//! Job Market Sentiment Dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - 4chan sentiment bar chart with date-range filters
//! - Reddit sentiment chart, stacked per subreddit or filtered to one
//! - Subreddit post-count chart
//! - Startup connectivity probe that gates the panels
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It consumes two local sentiment API services over HTTP; it
//! owns neither of them.

use leptos::*;

mod api;
mod app;
mod components;
mod panels;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
