//! Tavily wire models

use serde::{Deserialize, Deserializer, Serialize};

/// POST body sent to the search endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub api_key: &'a str,
    pub query: &'a str,
}

/// Consumed part of the search endpoint's response; other fields are ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Required; `null` decodes as no results
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<ResultItem>,
}

/// A single search hit
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultItem {
    /// Content snippet
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl SearchResponse {
    /// Each item's content followed by a newline, in received order
    pub fn concatenate(&self) -> String {
        let capacity = self.results.iter().map(|r| r.content.len() + 1).sum();
        self.results
            .iter()
            .fold(String::with_capacity(capacity), |mut out, item| {
                out.push_str(&item.content);
                out.push('\n');
                out
            })
    }
}
