//! JSON Schema checks applied at the tool boundary.

use serde_json::Value;

/// At most this many violations are reported in one message.
const MAX_REPORTED: usize = 3;

/// Validate `instance` against `schema`.
///
/// Returns a human-readable list of violations on failure. A schema that is
/// not an object, or does not compile, is logged and treated as permissive.
pub fn validate(schema: &Value, instance: &Value) -> Result<(), String> {
    if !schema.is_object() {
        return Ok(());
    }

    let validator = match jsonschema::validator_for(schema) {
        Ok(validator) => validator,
        Err(e) => {
            tracing::warn!(error = %e, "invalid tool schema, skipping validation");
            return Ok(());
        }
    };

    let messages: Vec<String> = validator
        .iter_errors(instance)
        .take(MAX_REPORTED)
        .map(|err| err.to_string())
        .collect();

    if messages.is_empty() {
        Ok(())
    } else {
        Err(messages.join("; "))
    }
}
