//! The JSON-producing service wrapped by the adapter.

use log::{debug, info};
use serde_json::json;

use crate::models::Record;

/// Something that turns an id and free text into a JSON-encoded record.
///
/// Closures with the matching signature implement this too, so a test can
/// hand the adapter a canned producer.
pub trait JsonSource {
    fn produce(&self, id: i64, input: &str) -> String;
}

impl<F> JsonSource for F
where
    F: Fn(i64, &str) -> String,
{
    fn produce(&self, id: i64, input: &str) -> String {
        self(id, input)
    }
}

/// The stock JSON service.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonService;

impl JsonService {
    pub fn new() -> Self {
        Self
    }
}

impl JsonSource for JsonService {
    fn produce(&self, id: i64, input: &str) -> String {
        info!("JsonService: received input '{}', returning JSON", input);
        let json = record_to_json(&build_record(id, input));
        debug!("JsonService: produced {}", json);
        json
    }
}

/// Title label derived from the record id.
pub fn title_for(id: i64) -> String {
    format!("Елемент_{}", id)
}

/// Build the record the service would serialize for `(id, input)`.
pub fn build_record(id: i64, input: &str) -> Record {
    Record {
        id,
        title: title_for(id),
        content: input.to_string(),
    }
}

/// Compact JSON with the keys `id`, `title`, `content`.
///
/// Goes through `Value`'s `Display`, which cannot fail.
pub fn record_to_json(record: &Record) -> String {
    json!({
        "id": record.id,
        "title": record.title,
        "content": record.content,
    })
    .to_string()
}
