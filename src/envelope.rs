//! Response envelope decoding.
//!
//! Every endpoint wraps its payload in the same envelope:
//!
//! ```json
//! {"get": "countries", "parameters": {}, "errors": [], "results": 164,
//!  "paging": {"current": 1, "total": 1}, "response": [...]}
//! ```
//!
//! `errors` and `parameters` are objects when populated and arrays when empty,
//! so both are read as untyped JSON first and normalized afterwards. The
//! `response` payload stays raw until a resource projects it.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::{Map, Value};

use crate::error::{FootballError, Result};

/// Decoded envelope of a successful call, payload not yet projected.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    /// Echo of the requested endpoint (e.g. `"countries"`).
    pub get: String,
    /// Echo of the query parameters; empty when the API sent none.
    pub parameters: Map<String, Value>,
    /// Always empty on a successful envelope.
    pub errors: Map<String, Value>,
    /// Number of records in `response`.
    pub results: u64,
    /// Paging summary, typically `current` and `total`.
    pub paging: BTreeMap<String, i64>,
    /// Raw JSON of the payload.
    pub response: Box<RawValue>,
}

impl Envelope {
    /// Raw payload bytes.
    pub fn response_bytes(&self) -> &[u8] {
        self.response.get().as_bytes()
    }

    /// Current page, when reported.
    pub fn current_page(&self) -> Option<i64> {
        self.paging.get("current").copied()
    }

    /// Total number of pages, when reported.
    pub fn total_pages(&self) -> Option<i64> {
        self.paging.get("total").copied()
    }

    /// Decode the payload as a list of `T`.
    ///
    /// A `null` payload yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns a decoding error if the payload is not a list of `T`.
    pub fn project<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let items: Option<Vec<T>> = serde_json::from_str(self.response.get())?;
        Ok(items.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    get: String,
    #[serde(default)]
    parameters: Value,
    #[serde(default)]
    errors: Value,
    #[serde(default)]
    results: u64,
    #[serde(default)]
    paging: Option<BTreeMap<String, i64>>,
    #[serde(default)]
    response: Option<Box<RawValue>>,
}

/// Body of a 400-500 answer.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
}

/// Interpret a raw HTTP answer.
///
/// | status    | outcome                                  |
/// |-----------|------------------------------------------|
/// | 200..=399 | envelope decode                          |
/// | 400..=500 | [`FootballError::ApiError`] from payload |
/// | otherwise | [`FootballError::UnknownStatus`]         |
///
/// # Errors
///
/// API errors (including an `errors` map inside a 2xx envelope), unknown
/// status codes and malformed envelopes.
pub fn decode(status: u16, body: &[u8]) -> Result<Envelope> {
    match status {
        200..=399 => decode_envelope(body),
        400..=500 => Err(decode_error(status, body)),
        code => {
            tracing::error!(status = code, "unhandled status code from API");
            Err(FootballError::UnknownStatus(code))
        }
    }
}

/// Decode a 2xx/3xx body.
///
/// # Errors
///
/// Returns [`FootballError::ApiError`] when `errors` is a non-empty object,
/// or a decoding error when the body is not an envelope.
pub fn decode_envelope(body: &[u8]) -> Result<Envelope> {
    let raw: RawEnvelope = serde_json::from_slice(body)?;

    let errors = normalize(raw.errors);
    if !errors.is_empty() {
        let message = join_errors(&errors);
        tracing::warn!(%message, "API reported errors in a successful response");
        return Err(FootballError::ApiError {
            message,
            status_code: None,
        });
    }

    let response = match raw.response {
        Some(response) => response,
        None => RawValue::from_string("null".to_string())?,
    };

    Ok(Envelope {
        get: raw.get,
        parameters: normalize(raw.parameters),
        errors,
        results: raw.results,
        paging: raw.paging.unwrap_or_default(),
        response,
    })
}

/// Build the API error for a 400-500 answer.
///
/// Falls back to the raw body text when it carries no `message`.
pub fn decode_error(status: u16, body: &[u8]) -> FootballError {
    let message = match serde_json::from_slice::<ErrorPayload>(body) {
        Ok(payload) => payload.message,
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    };

    FootballError::ApiError {
        message,
        status_code: Some(status),
    }
}

/// Objects are kept, every other shape becomes an empty map.
fn normalize(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn join_errors(errors: &Map<String, Value>) -> String {
    let mut lines: Vec<String> = errors
        .iter()
        .map(|(key, value)| match value {
            Value::String(text) => format!("{key} : {text}"),
            other => format!("{key} : {other}"),
        })
        .collect();
    lines.sort();
    lines.join("\n")
}
