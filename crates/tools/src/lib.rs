//! Tools for the weatherwear agent.
//!
//! Exactly two tools are exposed to the model:
//! - `webApiSearch`: current weather as free text from a web search
//! - `outFitTools`: clothing advice for a temperature
//!
//! [`ToolExecutor`] is the only entry point the agent loop uses; it validates
//! arguments and outputs against each tool's JSON Schema.

pub mod executor;
pub mod outfit;
pub mod schema;
pub mod weather_search;

pub use executor::ToolExecutor;
pub use outfit::OutfitTool;
pub use weather_search::WeatherSearchTool;

use std::sync::Arc;
use weatherwear_core::search::WebSearch;
use weatherwear_core::tool::ToolRegistry;

/// Create the registry holding the two weather tools.
pub fn default_registry(search: Arc<dyn WebSearch>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(WeatherSearchTool::new(search)));
    registry.register(Box::new(OutfitTool));
    registry
}
