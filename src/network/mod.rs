//! HTTP networking module
//!
//! Defines the [`Transport`] capability and its reqwest implementation.

mod client;
mod transport;

pub use client::{HttpClient, USER_AGENT};
pub use transport::*;
