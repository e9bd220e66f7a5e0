//! Web search module
//!
//! Builds the Tavily request, sends it over a [`Transport`](crate::network::Transport)
//! and flattens the response into plain text.

mod client;
mod models;

pub use client::WebSearchClient;
pub use models::*;
