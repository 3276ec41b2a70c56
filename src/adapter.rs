//! The XML-facing adapter over the JSON service.
//!
//! Callers only see [`XmlConverter::convert_to_xml`], which always returns a
//! string: either the record document or an `<Error type="...">` document.
//! The fallible path is [`JsonToXmlAdapter::try_convert_to_xml`]; turning its
//! error into XML is the separate, pure [`render_error`].

use crate::converter;
use crate::errors::ConverterError;
use crate::models::ErrorDocument;
use crate::source::{JsonService, JsonSource};
use log::{info, warn};

/// Record id used when the caller does not pick one.
pub const DEFAULT_RECORD_ID: i64 = 101;

/// The interface callers expect: text in, XML out.
pub trait XmlConverter {
    fn convert_to_xml(&self, input: &str) -> String;
}

/// Exposes a [`JsonSource`] as an [`XmlConverter`].
#[derive(Debug, Clone)]
pub struct JsonToXmlAdapter<S = JsonService> {
    source: S,
    id: i64,
}

impl<S: JsonSource> JsonToXmlAdapter<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            id: DEFAULT_RECORD_ID,
        }
    }

    /// Use `id` for every record this adapter requests.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Ask the source for JSON and convert it, keeping the error typed.
    pub fn try_convert_to_xml(&self, input: &str) -> Result<String, ConverterError> {
        let json = self.source.produce(self.id, input);
        let xml = converter::convert(&json)?;
        info!("Adapter: converted JSON to XML");
        Ok(xml)
    }
}

impl Default for JsonToXmlAdapter<JsonService> {
    fn default() -> Self {
        Self::new(JsonService::new())
    }
}

impl<S: JsonSource> XmlConverter for JsonToXmlAdapter<S> {
    fn convert_to_xml(&self, input: &str) -> String {
        self.try_convert_to_xml(input).unwrap_or_else(|e| {
            warn!("Adapter: conversion failed, returning error document: {}", e);
            render_error(&e)
        })
    }
}

/// Render an error as `<Error type="JsonParsing|General">message</Error>`.
///
/// Characters XML 1.0 forbids are replaced with U+FFFD so the payload is
/// always well-formed.
pub fn render_error(error: &ConverterError) -> String {
    let message: String = error
        .to_string()
        .chars()
        .map(|c| if converter::is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER })
        .collect();

    format!(
        "<Error type=\"{}\">{}</Error>",
        error.category().as_str(),
        converter::escape_text(&message)
    )
}

/// Read back an error document produced by [`render_error`].
///
/// Returns `None` for record documents and anything else that is not an
/// `<Error>` element.
pub fn parse_error_document(xml: &str) -> Option<ErrorDocument> {
    if !xml.trim_start().starts_with("<Error") {
        return None;
    }
    quick_xml::de::from_str(xml).ok()
}
