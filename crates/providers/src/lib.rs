//! Remote API clients for weatherwear.
//!
//! The chat provider implements `weatherwear_core::Provider`, the search
//! client implements `weatherwear_core::WebSearch`. Both are built once at
//! process start from configuration and shared behind an `Arc`.

pub mod openai_compat;
pub mod tavily;

pub use openai_compat::OpenAiCompatProvider;
pub use tavily::TavilyClient;

use std::sync::Arc;
use std::time::Duration;
use weatherwear_config::{ChatConfig, SearchConfig};
use weatherwear_core::provider::Provider;
use weatherwear_core::search::WebSearch;

/// Build the chat provider from configuration.
pub fn chat_provider(config: &ChatConfig) -> Arc<dyn Provider> {
    Arc::new(OpenAiCompatProvider::new(
        provider_name(&config.api_url),
        &config.api_url,
        config.api_key.clone(),
        config.timeout_secs.map(Duration::from_secs),
    ))
}

/// Build the web-search client from configuration.
pub fn search_client(config: &SearchConfig) -> Arc<dyn WebSearch> {
    Arc::new(
        TavilyClient::new(
            &config.api_url,
            config.api_key.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
        .with_max_results(config.max_results)
        .with_search_depth(&config.search_depth),
    )
}

/// Derive a short provider name from its base URL, for logs.
fn provider_name(api_url: &str) -> &'static str {
    if api_url.contains("groq.com") {
        "groq"
    } else if api_url.contains("openai.com") {
        "openai"
    } else if api_url.contains("openrouter.ai") {
        "openrouter"
    } else {
        "custom"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_groq() {
        let provider = chat_provider(&ChatConfig::default());
        assert_eq!(provider.name(), "groq");
    }

    #[test]
    fn custom_url_builds_custom() {
        let config = ChatConfig {
            api_url: "http://localhost:11434/v1".into(),
            ..ChatConfig::default()
        };
        assert_eq!(chat_provider(&config).name(), "custom");
    }

    #[test]
    fn search_client_is_tavily() {
        assert_eq!(search_client(&SearchConfig::default()).name(), "tavily");
    }
}
