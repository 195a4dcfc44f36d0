//! The agent reasoning loop implementation.

use std::sync::Arc;
use tracing::{debug, info, warn};
use weatherwear_core::message::{Conversation, Message};
use weatherwear_core::provider::{Provider, ProviderRequest, ToolChoice};
use weatherwear_tools::ToolExecutor;

use crate::error::AgentError;
use crate::prompt;

/// Default bound on tool-call rounds per request.
pub const DEFAULT_MAX_TOOL_ROUNDS: u32 = 10;

/// Drives one user query through the chat model and the weather tools.
pub struct AgentLoop {
    /// The chat model backend
    provider: Arc<dyn Provider>,

    /// Dispatches the model's tool calls
    tools: Arc<ToolExecutor>,

    model: String,

    temperature: f32,

    /// Optional cap on tokens per completion
    max_tokens: Option<u32>,

    /// Maximum tool-call rounds before giving up
    max_tool_rounds: u32,
}

impl AgentLoop {
    /// Create a new agent loop.
    pub fn new(
        provider: Arc<dyn Provider>,
        tools: Arc<ToolExecutor>,
        model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            provider,
            tools,
            model: model.into(),
            temperature,
            max_tokens: None,
            max_tool_rounds: DEFAULT_MAX_TOOL_ROUNDS,
        }
    }

    /// Set the default max tokens per LLM response.
    pub fn with_max_tokens(mut self, max: Option<u32>) -> Self {
        self.max_tokens = max;
        self
    }

    /// Set the maximum number of tool-call rounds.
    pub fn with_max_tool_rounds(mut self, rounds: u32) -> Self {
        self.max_tool_rounds = rounds;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// A fresh conversation: the system prompt followed by the user's query.
    pub fn start_conversation(query: &str) -> Conversation {
        let mut conversation = Conversation::new();
        conversation.push(Message::system(prompt::system_prompt()));
        conversation.push(Message::user(query));
        conversation
    }

    /// Answer a single query from scratch.
    pub async fn run(&self, query: &str) -> Result<String, AgentError> {
        let mut conversation = Self::start_conversation(query);
        self.process(&mut conversation).await
    }

    /// Run the loop on `conversation` until the model answers without tools.
    ///
    /// On success the final assistant message is appended and its text is
    /// returned. A failing tool call leaves the conversation as it was before
    /// that round.
    pub async fn process(&self, conversation: &mut Conversation) -> Result<String, AgentError> {
        info!(
            conversation_id = %conversation.id,
            messages = conversation.len(),
            model = %self.model,
            "Processing conversation"
        );

        let tool_definitions = self.tools.definitions();
        let mut rounds = 0u32;

        loop {
            debug!(conversation_id = %conversation.id, round = rounds + 1, "Agent loop iteration");

            let request = ProviderRequest {
                model: self.model.clone(),
                messages: conversation.messages.clone(),
                temperature: self.temperature,
                max_tokens: self.max_tokens,
                tools: tool_definitions.clone(),
                tool_choice: ToolChoice::Auto,
            };

            let response = self.provider.complete(request).await?;
            let message = response.message.ok_or(AgentError::NoResponse)?;

            if !message.requests_tools() {
                let text = message.content.clone();
                conversation.push(message);
                info!(conversation_id = %conversation.id, rounds, "Agent produced final answer");
                return Ok(text);
            }

            if rounds >= self.max_tool_rounds {
                warn!(
                    conversation_id = %conversation.id,
                    rounds,
                    "Max tool rounds reached"
                );
                return Err(AgentError::ToolLoopExceeded { rounds });
            }
            rounds += 1;

            debug!(tool_count = message.tool_calls.len(), "Executing tool calls");

            let mut results = Vec::with_capacity(message.tool_calls.len());
            for call in &message.tool_calls {
                debug!(tool = %call.name, call_id = %call.id, "Running tool");
                let result = self.tools.execute(call).await.inspect_err(|e| {
                    warn!(tool = %call.name, error = %e, "Tool execution failed");
                })?;
                results.push(Message::tool_result(
                    &result.call_id,
                    &call.name,
                    result.output.into_text(),
                ));
            }

            conversation.push(message);
            for result in results {
                conversation.push(result);
            }
        }
    }
}
