//! The orchestration loop behind weatherwear.
//!
//! One request runs through a short cycle:
//!
//! 1. **Start** a conversation with the system prompt and the user's query
//! 2. **Send** it to the chat model together with the two tool declarations
//! 3. **If tool calls**: run them, append the assistant turn and the results, go to 2
//! 4. **If text**: that text is the answer
//!
//! The number of tool rounds is bounded; see [`AgentLoop::with_max_tool_rounds`].

pub mod error;
pub mod loop_runner;
pub mod prompt;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use error::AgentError;
pub use loop_runner::{AgentLoop, DEFAULT_MAX_TOOL_ROUNDS};
