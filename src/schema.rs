//! Shape check for parsed JSON records.
//!
//! This uses the `jsonschema` crate against a schema embedded at compile
//! time. Every violation is collected so the error names all the problems
//! at once instead of just the first one.

use crate::errors::ConverterError;
use log::debug;
use serde_json::Value;

/// Schema of the record object: `id` integer, `title` and `content` strings.
pub const RECORD_SCHEMA: &str = include_str!("../schemas/record.schema.json");

/// Validates a parsed JSON value against the record schema.
pub fn validate_record_shape(instance: &Value) -> Result<(), ConverterError> {
    let schema_json: Value = serde_json::from_str(RECORD_SCHEMA)
        .map_err(|e| ConverterError::Schema(format!("Record schema is not valid JSON: {}", e)))?;
    let compiled_schema = jsonschema::validator_for(&schema_json)
        .map_err(|e| ConverterError::Schema(e.to_string()))?;

    let violations: Vec<String> = compiled_schema
        .iter_errors(instance)
        .map(|e| e.to_string())
        .collect();

    if violations.is_empty() {
        debug!("Record shape check passed");
        Ok(())
    } else {
        Err(ConverterError::InvalidShape(violations.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_record() {
        let value = json!({ "id": 1, "title": "t", "content": "" });
        assert!(validate_record_shape(&value).is_ok());
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let value = json!({ "id": 1, "title": "t", "content": "c", "name": "Data" });
        assert!(validate_record_shape(&value).is_ok());
    }

    #[test]
    fn test_missing_fields() {
        let value = json!({ "title": "t" });
        let err = validate_record_shape(&value).unwrap_err();
        assert!(matches!(err, ConverterError::InvalidShape(_)));
        let message = err.to_string();
        assert!(message.contains("id"), "{}", message);
        assert!(message.contains("content"), "{}", message);
    }

    #[test]
    fn test_wrong_types() {
        let value = json!({ "id": "101", "title": 5, "content": null });
        assert!(matches!(
            validate_record_shape(&value),
            Err(ConverterError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_non_object_root() {
        for value in [json!([1, 2, 3]), json!("text"), json!(42), Value::Null] {
            assert!(validate_record_shape(&value).unwrap_err().is_parse_error());
        }
    }
}
