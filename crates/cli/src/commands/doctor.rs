//! `weatherwear doctor` - diagnose configuration.

use weatherwear_config::AppConfig;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("weatherwear doctor");
    println!("==================\n");

    let config_path = AppConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("  [ok]   Config file found at {}", config_path.display());
    } else {
        println!("  [info] No config file, using defaults (run `weatherwear config` for a template)");
    }

    let config = match AppConfig::load() {
        Ok(config) => {
            println!("  [ok]   Configuration valid");
            config
        }
        Err(e) => {
            println!("  [fail] Configuration invalid: {e}");
            println!("\n  1 issue found.");
            return Ok(());
        }
    };

    let issues = report(&config);

    println!();
    if issues == 0 {
        println!("  All checks passed!");
    } else {
        println!("  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}

/// Print the key checks and return how many failed.
fn report(config: &AppConfig) -> usize {
    let mut issues = 0;

    println!("  [info] Chat API: {} (model {})", config.chat.api_url, config.chat.model);
    if config.has_chat_key() {
        println!("  [ok]   Chat API key configured");
    } else {
        println!("  [warn] No chat API key: set GROQ_API_KEY");
        issues += 1;
    }

    println!("  [info] Search API: {}", config.search.api_url);
    if config.has_search_key() {
        println!("  [ok]   Search API key configured");
    } else {
        println!("  [warn] No search API key: set TAVILY_API_KEY");
        issues += 1;
    }

    issues
}
