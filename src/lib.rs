//! Main library for the JSON to XML adapter.
//!
//! This crate wraps a JSON-producing service ([`source::JsonService`]) in an
//! adapter ([`adapter::JsonToXmlAdapter`]) that exposes the XML-producing
//! interface ([`adapter::XmlConverter`]) callers expect. The binary is a thin
//! presentation layer over [`run`].

pub mod adapter;
pub mod converter;
pub mod errors;
pub mod models;
pub mod schema;
pub mod source;

pub use adapter::{
    DEFAULT_RECORD_ID, JsonToXmlAdapter, XmlConverter, parse_error_document, render_error,
};
pub use errors::{ConverterError, ErrorCategory};
pub use models::Record;
pub use source::{JsonService, JsonSource};

use log::{info, warn};
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Text the demo converts when nothing else is given.
pub const DEFAULT_INPUT: &str = "Лабораторна робота ООП";

/// Where the text to convert comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
}

/// Top-level configuration for a conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: InputSource,
    pub id: i64,
    pub output_file: Option<PathBuf>,
    pub show_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputSource::Text(DEFAULT_INPUT.to_string()),
            id: DEFAULT_RECORD_ID,
            output_file: None,
            show_json: false,
        }
    }
}

impl Config {
    /// Resolve the input text, reading the file if one was given.
    pub fn read_input(&self) -> Result<String, ConverterError> {
        match &self.input {
            InputSource::Text(text) => Ok(text.clone()),
            InputSource::File(path) => fs::read_to_string(path).map_err(|e| {
                ConverterError::Io(e, format!("Failed to read input file {}", path.display()))
            }),
        }
    }
}

/// The main entry point for the conversion logic.
///
/// Reads the input, runs it through the adapter and writes the XML either
/// to the configured output file or to `out`. A failed conversion is not an
/// error here: the adapter's error document is written like any other
/// result. Only I/O failures are returned.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<(), ConverterError> {
    run_with_source(config, JsonService::new(), out)
}

/// [`run`] with a caller-supplied JSON source.
///
/// The source is called once per run; with `show_json` the JSON it handed
/// to the adapter is written before the XML.
pub fn run_with_source<S: JsonSource, W: Write>(
    config: &Config,
    source: S,
    out: &mut W,
) -> Result<(), ConverterError> {
    let start_time = Instant::now();
    let input = config.read_input()?;
    info!("Client: requesting conversion of '{}'", input);

    let produced = RefCell::new(None);
    let recording_source = |id: i64, text: &str| {
        let json = source.produce(id, text);
        *produced.borrow_mut() = Some(json.clone());
        json
    };

    let xml_adapter = JsonToXmlAdapter::new(recording_source).with_id(config.id);
    let xml = xml_adapter.convert_to_xml(&input);
    if let Some(doc) = parse_error_document(&xml) {
        warn!("Conversion produced a {} error document", doc.category);
    }

    if config.show_json {
        if let Some(json) = produced.borrow().as_deref() {
            writeln!(out, "{}", json)
                .map_err(|e| ConverterError::Io(e, "Failed to write JSON".to_string()))?;
        }
    }

    match &config.output_file {
        Some(path) => {
            fs::write(path, &xml).map_err(|e| {
                ConverterError::Io(e, format!("Failed to write output file {}", path.display()))
            })?;
            info!("  Output: {}", path.display());
        }
        None => {
            writeln!(out, "{}", xml)
                .map_err(|e| ConverterError::Io(e, "Failed to write XML".to_string()))?;
        }
    }

    info!("Finished in {:.2?}", start_time.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(config: &Config) -> String {
        let mut out = Vec::new();
        run(config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_run_default_config() {
        let output = run_to_string(&Config::default());
        assert!(output.contains("<Content>Лабораторна робота ООП</Content>"), "{}", output);
        assert!(output.contains("<ID>101</ID>"), "{}", output);
    }

    #[test]
    fn test_run_show_json_prints_json_first() {
        let config = Config {
            input: InputSource::Text("abc".to_string()),
            id: 2,
            show_json: true,
            ..Default::default()
        };
        let output = run_to_string(&config);
        let first_line = output.lines().next().unwrap();
        assert_eq!(first_line, r#"{"id":2,"title":"Елемент_2","content":"abc"}"#);
        assert!(output.contains("<DataExchange>"));
    }

    #[test]
    fn test_read_input_missing_file() {
        let config = Config {
            input: InputSource::File(PathBuf::from("definitely-missing-input.txt")),
            ..Default::default()
        };
        let err = config.read_input().unwrap_err();
        assert!(matches!(err, ConverterError::Io(..)));
        assert_eq!(err.category(), ErrorCategory::General);
    }

    #[test]
    fn test_show_json_calls_source_once() {
        let calls = std::cell::Cell::new(0);
        let counting = |id: i64, input: &str| {
            calls.set(calls.get() + 1);
            JsonService.produce(id, input)
        };
        let config = Config {
            input: InputSource::Text("once".to_string()),
            show_json: true,
            ..Default::default()
        };

        let mut out = Vec::new();
        run_with_source(&config, counting, &mut out).unwrap();
        assert_eq!(calls.get(), 1);

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches(r#""content":"once""#).count(), 1);
        assert!(output.contains("<Content>once</Content>"), "{}", output);
    }

    #[test]
    fn test_show_json_prints_what_the_adapter_converted() {
        let canned = |_id: i64, _input: &str| "{not json".to_string();
        let config = Config {
            show_json: true,
            ..Default::default()
        };

        let mut out = Vec::new();
        run_with_source(&config, canned, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("{not json"));
        assert!(lines.next().unwrap().contains("type=\"JsonParsing\""), "{}", output);
    }
}
