//! Gateway response envelope classification
//!
//! Every gateway endpoint answers with one of three shapes:
//! `{ "error": "..." }`, `{ "code": "..." }` or `{ "data": ... }`. The body is
//! turned into an [`Outcome`] immediately after transport so the operations
//! never look at the sentinel fields themselves.
//!
//! `error` takes priority over `code`. Both follow JSON truthiness: `null`,
//! `false`, `""` and `0` count as absent. The HTTP status is not consulted.
//! A body that is not a JSON object is malformed, never a success.

use serde_json::Value;

use crate::error::{Error, Result};

/// Sentinel fields of a response body. Unknown top-level fields are ignored.
#[derive(Debug, Default)]
pub struct Envelope {
    error: Option<Value>,
    code: Option<Value>,
    data: Option<Value>,
}

/// Classified gateway response.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No error or code present. Carries `data` if the gateway sent one.
    Success(Option<Value>),
    /// Remote `error` message, or `code` when no message was given.
    Failure(String),
}

impl Envelope {
    /// Split a decoded response body into its sentinel fields.
    pub fn from_body(body: Value) -> Result<Self> {
        let mut fields = match body {
            Value::Object(fields) => fields,
            other => {
                return Err(Error::MalformedResponse(format!(
                    "expected a JSON object, got: {other}"
                )));
            }
        };
        Ok(Self {
            error: fields.remove("error"),
            code: fields.remove("code"),
            data: fields.remove("data"),
        })
    }

    pub fn classify(self) -> Outcome {
        if let Some(message) = self.error.as_ref().and_then(sentinel_text) {
            return Outcome::Failure(message);
        }
        if let Some(code) = self.code.as_ref().and_then(sentinel_text) {
            return Outcome::Failure(code);
        }
        Outcome::Success(self.data.filter(|data| !data.is_null()))
    }
}

impl Outcome {
    /// Convert into the crate result, turning a failure into `Error::Gateway`.
    pub fn into_result(self) -> Result<Option<Value>> {
        match self {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure(message) => Err(Error::Gateway(message)),
        }
    }
}

/// Text of a sentinel field, or `None` if it is falsy.
///
/// Strings are taken verbatim; other JSON values (numeric codes, objects) use
/// their JSON text.
fn sentinel_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
