//! `weatherwear ask` - answer one question in the terminal.

use weatherwear_agent::AgentLoop;
use weatherwear_config::AppConfig;
use weatherwear_core::message::{Conversation, Role};

pub async fn run(message: &str, show_history: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if !config.has_chat_key() {
        eprintln!();
        eprintln!("  ERROR: No chat API key configured!");
        eprintln!();
        eprintln!("  Set GROQ_API_KEY (or WEATHERWEAR_CHAT_API_KEY), or add api_key under [chat] in:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        return Err("No chat API key found. See above for setup instructions.".into());
    }

    let agent = weatherwear_gateway::build_agent(&config);
    let mut conversation = AgentLoop::start_conversation(message);
    let answer = agent.process(&mut conversation).await?;

    if show_history {
        print!("{}", render_tool_history(&conversation));
    }
    println!("{answer}");

    Ok(())
}

/// One line per tool call and per tool result, in conversation order.
fn render_tool_history(conversation: &Conversation) -> String {
    let mut out = String::new();
    for message in &conversation.messages {
        match message.role {
            Role::Assistant => {
                for call in &message.tool_calls {
                    out.push_str(&format!("-> {}({})\n", call.name, call.arguments));
                }
            }
            Role::Tool => {
                let name = message.name.as_deref().unwrap_or("tool");
                out.push_str(&format!("<- {name}: {}\n", message.content));
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use weatherwear_core::message::{Message, MessageToolCall};

    #[test]
    fn history_lists_calls_and_results() {
        let mut conversation = AgentLoop::start_conversation("Mumbai?");
        conversation.push(Message::assistant_tool_calls(vec![MessageToolCall {
            id: "call_1".into(),
            name: "webApiSearch".into(),
            arguments: r#"{"query":"Mumbai"}"#.into(),
        }]));
        conversation.push(Message::tool_result("call_1", "webApiSearch", "31°C, humid"));
        conversation.push(Message::assistant("Wear linen."));

        let history = render_tool_history(&conversation);
        assert_eq!(
            history,
            "-> webApiSearch({\"query\":\"Mumbai\"})\n<- webApiSearch: 31°C, humid\n"
        );
    }

    #[test]
    fn plain_conversation_has_no_history() {
        let mut conversation = AgentLoop::start_conversation("Hi");
        conversation.push(Message::assistant("Hello!"));
        assert!(render_tool_history(&conversation).is_empty());
    }
}
