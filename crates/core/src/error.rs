//! Error types for the weatherwear domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each remote collaborator has its own error enum.

use thiserror::Error;

/// Failures talking to the remote chat-completion API.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}

/// Failures talking to the remote web-search API.
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    #[error("Search API request failed: {message} (status: {status_code})")]
    Api { status_code: u16, message: String },

    #[error("Search network error: {0}")]
    Network(String),

    #[error("Search provider not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid search response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    NotFound(String),

    #[error("Could not parse arguments for {tool_name}: {reason}")]
    ArgumentParse { tool_name: String, reason: String },

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),

    #[error("Tool {tool_name} produced invalid output: {reason}")]
    InvalidOutput { tool_name: String, reason: String },

    #[error("Tool execution failed: {tool_name}: {reason}")]
    ExecutionFailed { tool_name: String, reason: String },

    #[error(transparent)]
    Search(#[from] SearchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_correctly() {
        let err = ProviderError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        };
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn unknown_tool_carries_name() {
        let err = ToolError::NotFound("getStockPrice".into());
        assert_eq!(err.to_string(), "Unknown tool: getStockPrice");
    }

    #[test]
    fn search_error_is_transparent_inside_tool_error() {
        let err: ToolError = SearchError::Network("connection reset".into()).into();
        assert_eq!(err.to_string(), "Search network error: connection reset");
    }
}
