//! WebSearch trait: the abstraction over the remote search API.

use crate::error::SearchError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One search result. Only `content` feeds the agent; the rest is for logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub url: String,

    pub content: String,
}

#[async_trait]
pub trait WebSearch: Send + Sync {
    /// A human-readable name for this backend (e.g., "tavily").
    fn name(&self) -> &str;

    /// Run a free-text query and return the hits in ranking order.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError>;
}
