//! Weather search tool (`webApiSearch`).
//!
//! Asks the web-search backend about the weather and hands the model the raw
//! result snippets. No temperature or condition is parsed out here; the model
//! reads the free text itself.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use weatherwear_core::error::ToolError;
use weatherwear_core::search::WebSearch;
use weatherwear_core::tool::{Tool, ToolOutput};

/// Separator between result snippets.
const SNIPPET_SEPARATOR: &str = "\n\n\n";

pub struct WeatherSearchTool {
    search: Arc<dyn WebSearch>,
}

impl WeatherSearchTool {
    pub fn new(search: Arc<dyn WebSearch>) -> Self {
        Self { search }
    }

    /// Run the search and join every snippet into one blob.
    pub async fn search(&self, query: &str) -> Result<String, ToolError> {
        let hits = self.search.search(&search_phrase(query)).await?;
        debug!(backend = self.search.name(), hits = hits.len(), "Weather search returned");

        // Hits without any text are dropped.
        let snippets: Vec<String> = hits
            .into_iter()
            .map(|hit| hit.content)
            .filter(|content| !content.trim().is_empty())
            .collect();

        if snippets.is_empty() {
            return Ok(format!("No search results found for \"{query}\"."));
        }

        Ok(snippets.join(SNIPPET_SEPARATOR))
    }
}

/// The question sent to the search backend.
fn search_phrase(query: &str) -> String {
    format!("what is the  {query} ?")
}

#[async_trait]
impl Tool for WeatherSearchTool {
    fn name(&self) -> &str {
        "webApiSearch"
    }

    fn description(&self) -> &str {
        "Fetch weather for a city"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "minLength": 2
                }
            },
            "required": ["query"]
        })
    }

    fn output_schema(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({ "type": "string", "minLength": 5 }))
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolOutput, ToolError> {
        let query = arguments["query"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'query' argument".into()))?;

        Ok(ToolOutput::Text(self.search(query).await?))
    }
}
