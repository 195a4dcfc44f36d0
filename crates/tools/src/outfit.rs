//! Outfit suggestion tool (`outFitTools`).
//!
//! Turns a temperature into clothing advice for morning, afternoon and
//! evening from a fixed rule table. The temperature arrives as a string
//! (that is what the model is told to send) and stays one until the tool
//! pulls a number out of it.

use async_trait::async_trait;
use regex_lite::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use weatherwear_core::error::ToolError;
use weatherwear_core::tool::{Tool, ToolOutput};

pub struct OutfitTool;

/// One row of the rule table: applies below `upper_c` (exclusive).
struct Band {
    upper_c: f64,
    label: &'static str,
    summary: &'static str,
    morning: &'static str,
    afternoon: &'static str,
    evening: &'static str,
}

const BANDS: &[Band] = &[
    Band {
        upper_c: 0.0,
        label: "freezing",
        summary: "Bundle up: thermal base layer, insulated coat, hat, gloves and scarf.",
        morning: "thermal base layer, wool sweater, insulated down coat, hat and gloves",
        afternoon: "wool sweater under a heavy coat, warm trousers and waterproof boots",
        evening: "insulated coat, scarf, gloves and thermal socks",
    },
    Band {
        upper_c: 10.0,
        label: "cold",
        summary: "Dress warm: a sweater under a heavy jacket with closed shoes.",
        morning: "sweater with a heavy jacket and a scarf",
        afternoon: "long-sleeve top, sweater and jeans with closed shoes",
        evening: "heavy jacket over a sweater, warm socks",
    },
    Band {
        upper_c: 18.0,
        label: "cool",
        summary: "Layer up lightly: long sleeves with a light jacket or hoodie.",
        morning: "long-sleeve shirt with a light jacket or hoodie",
        afternoon: "long-sleeve shirt or light sweater with jeans or chinos",
        evening: "light jacket or cardigan over a long-sleeve top",
    },
    Band {
        upper_c: 25.0,
        label: "mild",
        summary: "Comfortable weather: a t-shirt or light shirt with a thin layer handy.",
        morning: "t-shirt with a light overshirt or cardigan",
        afternoon: "t-shirt or short-sleeve shirt with chinos or a skirt",
        evening: "light long-sleeve top or a thin jacket",
    },
    Band {
        upper_c: 32.0,
        label: "warm",
        summary: "Keep it breathable: cotton or linen, shorts and sunglasses.",
        morning: "breathable cotton t-shirt with light trousers",
        afternoon: "linen shirt or cotton tee with shorts, sunglasses and a cap",
        evening: "light cotton shirt with comfortable trousers",
    },
    Band {
        upper_c: f64::INFINITY,
        label: "hot",
        summary: "Beat the heat: loose light-coloured linen, a hat, sunscreen and water.",
        morning: "loose light-coloured cotton top with breathable trousers",
        afternoon: "loose linen clothing, wide-brimmed hat, sunglasses and sunscreen",
        evening: "airy cotton shirt or kurta with light trousers",
    },
];

#[derive(Debug, Serialize)]
pub struct OutfitSuggestion {
    pub temperature_c: f64,
    pub band: &'static str,
    pub suggestion: &'static str,
    pub morning: &'static str,
    pub afternoon: &'static str,
    pub evening: &'static str,
}

impl OutfitTool {
    /// Look up the outfit for a temperature string such as "30", "30°C" or "86 F".
    pub fn suggest(&self, temp: &str) -> Result<OutfitSuggestion, ToolError> {
        let celsius = parse_celsius(temp).ok_or_else(|| {
            ToolError::InvalidArguments(format!("'temp' does not contain a temperature: {temp:?}"))
        })?;

        let band = BANDS
            .iter()
            .find(|b| celsius < b.upper_c)
            .unwrap_or(&BANDS[BANDS.len() - 1]);

        Ok(OutfitSuggestion {
            temperature_c: (celsius * 10.0).round() / 10.0,
            band: band.label,
            suggestion: band.summary,
            morning: band.morning,
            afternoon: band.afternoon,
            evening: band.evening,
        })
    }
}

/// A number, optionally followed by a standalone `C` / `F` unit (`°` allowed).
static TEMPERATURE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(-?\d+(?:\.\d+)?)(?:\s*°?\s*([CcFf])\b)?").ok());

/// Pull the first number out of `text` as degrees Celsius.
///
/// Only an explicit Fahrenheit unit ("86°F", "50 f") is converted; words
/// after the number ("30 feels like 35") are ignored.
fn parse_celsius(text: &str) -> Option<f64> {
    let caps = TEMPERATURE.as_ref()?.captures(text)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;

    match caps.get(2).map(|unit| unit.as_str()) {
        Some("F") | Some("f") => Some((value - 32.0) * 5.0 / 9.0),
        _ => Some(value),
    }
}

#[async_trait]
impl Tool for OutfitTool {
    fn name(&self) -> &str {
        "outFitTools"
    }

    fn description(&self) -> &str {
        "Suggest clothing based on weather"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "temp": {
                    "type": "string",
                    "description": "this is the temperature in celsius"
                }
            },
            "required": ["temp"]
        })
    }

    fn output_schema(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "type": "object",
            "properties": {
                "suggestion": { "type": "string", "minLength": 5 }
            },
            "required": ["suggestion"]
        }))
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolOutput, ToolError> {
        let temp = arguments["temp"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'temp' argument".into()))?;

        let suggestion = self.suggest(temp)?;
        let value = serde_json::to_value(&suggestion).map_err(|e| ToolError::ExecutionFailed {
            tool_name: self.name().to_string(),
            reason: e.to_string(),
        })?;
        Ok(ToolOutput::Structured(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_decorated_temperatures() {
        assert_eq!(parse_celsius("30"), Some(30.0));
        assert_eq!(parse_celsius("30°C"), Some(30.0));
        assert_eq!(parse_celsius("about 30.5 C"), Some(30.5));
        assert_eq!(parse_celsius("-4"), Some(-4.0));
        assert_eq!(parse_celsius("22."), Some(22.0));
        assert_eq!(parse_celsius("hot"), None);
        assert_eq!(parse_celsius(""), None);
    }

    #[test]
    fn converts_fahrenheit() {
        let c = parse_celsius("86°F").unwrap();
        assert!((c - 30.0).abs() < 1e-9);
        let c = parse_celsius("50 f").unwrap();
        assert!((c - 10.0).abs() < 1e-9);
    }

    #[test]
    fn trailing_words_are_not_a_unit() {
        assert_eq!(parse_celsius("30 feels like 35"), Some(30.0));
        assert_eq!(parse_celsius("28 for Mumbai"), Some(28.0));
        assert_eq!(parse_celsius("25C, Fair"), Some(25.0));
        assert_eq!(parse_celsius("19 Celsius"), Some(19.0));
        assert_eq!(OutfitTool.suggest("30 feels like 35").unwrap().band, "warm");
        assert_eq!(OutfitTool.suggest("28 for Mumbai").unwrap().band, "warm");
    }

    #[test]
    fn picks_band_by_temperature() {
        let tool = OutfitTool;
        assert_eq!(tool.suggest("-5").unwrap().band, "freezing");
        assert_eq!(tool.suggest("0").unwrap().band, "cold");
        assert_eq!(tool.suggest("15").unwrap().band, "cool");
        assert_eq!(tool.suggest("24.9").unwrap().band, "mild");
        assert_eq!(tool.suggest("30").unwrap().band, "warm");
        assert_eq!(tool.suggest("41").unwrap().band, "hot");
    }

    #[tokio::test]
    async fn returns_structured_suggestion() {
        let tool = OutfitTool;
        let output = tool.execute(serde_json::json!({"temp": "30"})).await.unwrap();

        let ToolOutput::Structured(value) = output else {
            panic!("expected structured output");
        };
        assert_eq!(value["band"], "warm");
        assert_eq!(value["temperature_c"], 30.0);
        assert!(value["suggestion"].as_str().unwrap().len() >= 5);
        assert!(value["afternoon"].as_str().unwrap().contains("linen"));
    }

    #[tokio::test]
    async fn missing_temp_returns_error() {
        let tool = OutfitTool;
        let result = tool.execute(serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn non_numeric_temp_returns_error() {
        let tool = OutfitTool;
        let result = tool.execute(serde_json::json!({"temp": "warm-ish"})).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn tool_definition() {
        let def = OutfitTool.to_definition();
        assert_eq!(def.name, "outFitTools");
        assert_eq!(
            def.parameters["properties"]["temp"]["description"],
            "this is the temperature in celsius"
        );
    }
}
