//! Shared test helpers for agent loop tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use weatherwear_core::error::{ProviderError, SearchError};
use weatherwear_core::message::{Message, MessageToolCall};
use weatherwear_core::provider::{Provider, ProviderRequest, ProviderResponse, Usage};
use weatherwear_core::search::{SearchHit, WebSearch};
use weatherwear_tools::ToolExecutor;

/// A mock provider that returns a sequence of scripted responses and keeps
/// every request it received.
///
/// Panics if more calls are made than responses provided.
pub struct SequentialMockProvider {
    responses: Mutex<Vec<Result<ProviderResponse, ProviderError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl SequentialMockProvider {
    pub fn new(responses: Vec<Result<ProviderResponse, ProviderError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a provider that returns a single text response (no tool calls).
    pub fn single_text(text: &str) -> Self {
        Self::new(vec![Ok(make_text_response(text))])
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for SequentialMockProvider {
    fn name(&self) -> &str {
        "sequential_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let mut requests = self.requests.lock().unwrap();
        let responses = self.responses.lock().unwrap();
        let index = requests.len();

        if index >= responses.len() {
            panic!(
                "SequentialMockProvider: no more responses (call #{}, have {})",
                index,
                responses.len()
            );
        }

        requests.push(request);
        responses[index].clone()
    }
}

/// Create a simple text response (no tool calls).
pub fn make_text_response(text: &str) -> ProviderResponse {
    ProviderResponse {
        message: Some(Message::assistant(text)),
        usage: Some(Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        }),
        model: "mock-model".into(),
    }
}

/// Create a response whose assistant message only requests tools.
pub fn make_tool_call_response(tool_calls: Vec<MessageToolCall>) -> ProviderResponse {
    ProviderResponse {
        message: Some(Message::assistant_tool_calls(tool_calls)),
        usage: None,
        model: "mock-model".into(),
    }
}

/// A response with no choices at all.
pub fn make_empty_response() -> ProviderResponse {
    ProviderResponse {
        message: None,
        usage: None,
        model: "mock-model".into(),
    }
}

/// Helper to create a tool call with a distinct id.
pub fn make_tool_call(id: &str, name: &str, args: serde_json::Value) -> MessageToolCall {
    MessageToolCall {
        id: id.to_string(),
        name: name.to_string(),
        arguments: serde_json::to_string(&args).unwrap(),
    }
}

/// A search backend that answers every query with one snippet and counts calls.
pub struct StubSearch {
    snippet: &'static str,
    calls: Mutex<usize>,
}

impl StubSearch {
    pub fn new(snippet: &'static str) -> Arc<Self> {
        Arc::new(Self {
            snippet,
            calls: Mutex::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl WebSearch for StubSearch {
    fn name(&self) -> &str {
        "stub"
    }

    async fn search(&self, _query: &str) -> Result<Vec<SearchHit>, SearchError> {
        *self.calls.lock().unwrap() += 1;
        Ok(vec![SearchHit {
            title: "Weather".into(),
            url: "https://example.com/weather".into(),
            content: self.snippet.to_string(),
        }])
    }
}

/// The standard executor over a stub search backend.
pub fn stub_executor(search: Arc<StubSearch>) -> Arc<ToolExecutor> {
    Arc::new(ToolExecutor::new(search))
}
