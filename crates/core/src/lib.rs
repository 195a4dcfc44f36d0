//! # weatherwear core
//!
//! Domain types, traits, and error definitions for the weatherwear agent.
//! This crate has **no framework dependencies**: it defines the model the
//! other crates implement against.
//!
//! Every remote collaborator (the chat model, the web search) is a trait
//! here. Implementations live in `weatherwear-providers` and are injected
//! into the agent loop at startup, so tests can swap in scripted stubs.

pub mod error;
pub mod message;
pub mod provider;
pub mod search;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use error::{ProviderError, SearchError, ToolError};
pub use message::{Conversation, ConversationId, Message, MessageToolCall, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, ToolChoice, ToolDefinition, Usage};
pub use search::{SearchHit, WebSearch};
pub use tool::{Tool, ToolCall, ToolOutput, ToolRegistry, ToolResult};
