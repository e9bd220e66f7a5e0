//! tavily-search: a minimal Tavily web search client
//!
//! One query in, one POST to the Tavily API, and the `content` of every
//! returned result joined into a single newline-terminated string.
//!
//! ```no_run
//! use tavily_search::WebSearchClient;
//!
//! # async fn run() -> Result<(), tavily_search::SearchError> {
//! let client = WebSearchClient::from_env()?;
//! let context = client.search("rust async runtimes").await?;
//! print!("{}", context);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod network;
pub mod search;

pub use config::Settings;
pub use error::SearchError;
pub use network::{HttpClient, Transport};
pub use search::WebSearchClient;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
