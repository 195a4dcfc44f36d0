//! Errors surfaced by the orchestration loop.

use thiserror::Error;
use weatherwear_core::error::{ProviderError, ToolError};

#[derive(Debug, Error)]
pub enum AgentError {
    /// The chat model answered without any message (e.g. zero choices).
    #[error("No message returned from model")]
    NoResponse,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("Model still requested tools after {rounds} rounds")]
    ToolLoopExceeded { rounds: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_errors_keep_their_message() {
        let err: AgentError = ToolError::NotFound("getStockPrice".into()).into();
        assert_eq!(err.to_string(), "Unknown tool: getStockPrice");
    }

    #[test]
    fn loop_exceeded_names_the_bound() {
        let err = AgentError::ToolLoopExceeded { rounds: 10 };
        assert!(err.to_string().contains("10 rounds"));
    }
}
