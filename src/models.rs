//! Data structures exchanged between the JSON service and the XML side.
//!
//! `Record` is the JSON shape produced by the service. The XML shapes are
//! separate structs so the element names (`DataExchange`, `Record`, `ID`,
//! `Title`, `Content`) stay independent from the JSON keys.

use serde::{Deserialize, Serialize};

/// The fixed three-field record.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Root of the XML document produced by a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename = "DataExchange")]
pub struct RecordDocument {
    #[serde(rename = "Record")]
    pub record: RecordElement,
}

/// The single `<Record>` child of `<DataExchange>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordElement {
    #[serde(rename = "ID")]
    pub id: i64,

    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Content", default)]
    pub content: String,
}

impl From<&Record> for RecordDocument {
    fn from(record: &Record) -> Self {
        Self {
            record: RecordElement {
                id: record.id,
                title: record.title.clone(),
                content: record.content.clone(),
            },
        }
    }
}

impl From<RecordDocument> for Record {
    fn from(doc: RecordDocument) -> Self {
        Record {
            id: doc.record.id,
            title: doc.record.title,
            content: doc.record.content,
        }
    }
}

/// Error payload returned by the adapter instead of a record document.
///
/// Serializes as `<Error type="JsonParsing">message</Error>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename = "Error")]
pub struct ErrorDocument {
    #[serde(rename = "@type")]
    pub category: String,

    #[serde(rename = "$text", default)]
    pub message: String,
}
