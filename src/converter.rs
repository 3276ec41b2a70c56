//! JSON record to XML document conversion.
//!
//! The JSON side is loosely typed, so the input is first parsed into a
//! generic `serde_json::Value`, checked against the record schema, and only
//! then mapped onto a `Record`. The XML side is produced by serializing the
//! strongly typed `RecordDocument` with quick-xml, which takes care of
//! escaping.

use crate::errors::ConverterError;
use crate::models::{Record, RecordDocument};
use crate::schema;
use log::debug;
use quick_xml::escape::escape;
use quick_xml::se::{QuoteLevel, Serializer};
use serde::Serialize;
use serde_json::Value;

pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Convert a JSON-encoded record into an XML document.
pub fn convert(json: &str) -> Result<String, ConverterError> {
    let record = parse_record(json)?;
    record_to_xml(&record)
}

/// Parse and shape-check a JSON-encoded record.
pub fn parse_record(json: &str) -> Result<Record, ConverterError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| ConverterError::JsonParse(format!("Failed to parse record JSON: {}", e)))?;

    schema::validate_record_shape(&value)?;
    record_from_value(&value)
}

fn record_from_value(value: &Value) -> Result<Record, ConverterError> {
    let id = value
        .get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| {
            ConverterError::InvalidShape(format!(
                "\"id\" must be an integer in the i64 range, found {}",
                value.get("id").unwrap_or(&Value::Null)
            ))
        })?;

    Ok(Record {
        id,
        title: string_field(value, "title")?,
        content: string_field(value, "content")?,
    })
}

fn string_field(value: &Value, key: &str) -> Result<String, ConverterError> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ConverterError::InvalidShape(format!("\"{}\" must be a string", key)))
}

/// Character reference written in place of a raw carriage return, which
/// XML parsers would otherwise normalize away.
const CARRIAGE_RETURN_REF: &str = "&#xD;";

/// Whether XML 1.0 allows `c` anywhere in a document.
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Escape text for element content, including quotes and carriage returns.
pub fn escape_text(text: &str) -> String {
    escape(text).replace('\r', CARRIAGE_RETURN_REF)
}

fn check_xml_text(field: &str, text: &str) -> Result<(), ConverterError> {
    match text.chars().find(|c| !is_xml_char(*c)) {
        Some(c) => Err(ConverterError::Serialization(format!(
            "{} contains U+{:04X}, which XML 1.0 does not allow",
            field, c as u32
        ))),
        None => Ok(()),
    }
}

/// Serialize a record as `<DataExchange><Record>...</Record></DataExchange>`.
///
/// Fails with `Serialization` when the title or content holds a character
/// no XML 1.0 document may contain.
pub fn record_to_xml(record: &Record) -> Result<String, ConverterError> {
    check_xml_text("Title", &record.title)?;
    check_xml_text("Content", &record.content)?;

    let mut xml = String::from(XML_DECLARATION);
    write_xml(&mut xml, &RecordDocument::from(record))?;
    debug!("Converted record {} to XML ({} bytes)", record.id, xml.len());
    Ok(xml)
}

/// Append `value` as indented XML with every reserved character escaped,
/// quotes and carriage returns included.
fn write_xml<T: Serialize>(buffer: &mut String, value: &T) -> Result<(), ConverterError> {
    let mut serialized = String::new();
    let mut serializer = Serializer::new(&mut serialized);
    serializer.indent(' ', 2);
    serializer.set_quote_level(QuoteLevel::Full);
    value
        .serialize(serializer)
        .map_err(|e| ConverterError::Serialization(format!("Failed to serialize XML: {}", e)))?;

    // Indentation only uses '\n', so any '\r' left is from text content.
    buffer.push_str(&serialized.replace('\r', CARRIAGE_RETURN_REF));
    Ok(())
}
