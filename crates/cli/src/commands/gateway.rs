//! `weatherwear gateway` - start the HTTP API server.

use weatherwear_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    if !config.has_chat_key() {
        tracing::warn!("No chat API key set (GROQ_API_KEY); agent requests will fail");
    }
    if !config.has_search_key() {
        tracing::warn!("No search API key set (TAVILY_API_KEY); weather lookups will fail");
    }

    println!("weatherwear gateway");
    println!("   Listening: http://{}:{}", config.gateway.host, config.gateway.port);
    println!("   Model:     {}", config.chat.model);

    weatherwear_gateway::start(config).await?;

    Ok(())
}
