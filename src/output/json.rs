//! JSON output formatting
//!
//! Structured output wraps the payload in a `data`/`meta` envelope so
//! scripts can tell when, and by which poxdex version, a dump was made.

use chrono::Utc;
use serde::Serialize;

/// Payload wrapper serialized as `{ data, meta }`
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T: ?Sized> {
    /// The command's payload
    pub data: &'a T,

    /// Provenance for the dump
    pub meta: Metadata,
}

/// Provenance block attached to every JSON dump
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// RFC 3339 production time
    pub timestamp: String,

    /// poxdex version that produced the dump
    pub version: String,
}

impl Metadata {
    fn now() -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Render a payload as pretty-printed JSON with the meta block attached.
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput {
        data,
        meta: Metadata::now(),
    })
}
