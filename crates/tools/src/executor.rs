//! Tool executor: turns a raw model tool call into a validated tool result.
//!
//! Steps, in order:
//! 1. Resolve the tool by exact name (unknown names fail with `NotFound`)
//! 2. Parse the JSON argument payload (an empty payload counts as `{}`)
//! 3. Check the arguments against the tool's declared parameter schema
//! 4. Run the tool
//! 5. Check the output against the tool's output schema, if it has one

use std::sync::Arc;
use tracing::debug;
use weatherwear_core::error::ToolError;
use weatherwear_core::message::MessageToolCall;
use weatherwear_core::provider::ToolDefinition;
use weatherwear_core::search::WebSearch;
use weatherwear_core::tool::{ToolCall, ToolRegistry, ToolResult};

use crate::schema;

pub struct ToolExecutor {
    registry: ToolRegistry,
}

impl ToolExecutor {
    /// The standard executor: `webApiSearch` backed by `search`, plus `outFitTools`.
    pub fn new(search: Arc<dyn WebSearch>) -> Self {
        Self::from_registry(crate::default_registry(search))
    }

    /// Build an executor over an arbitrary registry.
    pub fn from_registry(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Tool declarations for the model, sorted by name.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.registry.definitions()
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    /// Execute one tool call as the model emitted it.
    pub async fn execute(&self, call: &MessageToolCall) -> Result<ToolResult, ToolError> {
        let tool = self
            .registry
            .get(&call.name)
            .ok_or_else(|| ToolError::NotFound(call.name.clone()))?;

        let arguments = parse_arguments(&call.name, &call.arguments)?;

        schema::validate(&tool.parameters_schema(), &arguments)
            .map_err(|reason| ToolError::InvalidArguments(format!("{}: {reason}", call.name)))?;

        debug!(tool = %call.name, call_id = %call.id, "Dispatching tool call");

        let parsed = ToolCall {
            id: call.id.clone(),
            name: call.name.clone(),
            arguments,
        };
        let result = self.registry.execute(&parsed).await?;

        if let Some(output_schema) = tool.output_schema() {
            schema::validate(&output_schema, &result.output.as_json()).map_err(|reason| {
                ToolError::InvalidOutput {
                    tool_name: call.name.clone(),
                    reason,
                }
            })?;
        }

        Ok(result)
    }
}

/// Parse a raw argument payload; blank payloads mean "no arguments".
fn parse_arguments(tool_name: &str, raw: &str) -> Result<serde_json::Value, ToolError> {
    let raw = if raw.trim().is_empty() { "{}" } else { raw };
    serde_json::from_str(raw).map_err(|e| ToolError::ArgumentParse {
        tool_name: tool_name.to_string(),
        reason: e.to_string(),
    })
}
