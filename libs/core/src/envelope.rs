use serde::{Deserialize, Serialize};

use crate::value::{Params, Value};

/// Parsed response object returned by a remote function endpoint
///
/// Only ever holds a JSON object. Fields are read through optional accessors,
/// so a missing key is an ordinary `None` rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope(Params);

impl Envelope {
    pub const RESULT: &'static str = "result";
    pub const ERROR: &'static str = "error";
    pub const CODE: &'static str = "code";

    pub fn new(fields: Params) -> Self {
        Self(fields)
    }

    /// Look up a top-level field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `result` field, if the server sent one
    pub fn result(&self) -> Option<&Value> {
        self.get(Self::RESULT)
    }

    /// Move the `result` field out of the envelope
    ///
    /// `{"result": null}` yields `Some(Value::Null)`, a missing field yields `None`.
    pub fn into_result(mut self) -> Option<Value> {
        self.0.remove(Self::RESULT)
    }

    /// Numeric error code from a failure body
    pub fn error_code(&self) -> Option<i64> {
        self.get(Self::CODE).and_then(Value::as_i64)
    }

    /// Error message from a failure body
    pub fn error_message(&self) -> Option<&str> {
        self.get(Self::ERROR).and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Params {
        &self.0
    }
}

impl From<Params> for Envelope {
    fn from(fields: Params) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn result_distinguishes_null_from_missing() {
        assert_eq!(envelope(json!({"result": null})).into_result(), Some(Value::Null));
        assert_eq!(envelope(json!({"status": "ok"})).into_result(), None);
    }

    #[test]
    fn error_fields_are_read_from_failure_body() {
        let env = envelope(json!({"code": 141, "error": "function not found"}));
        assert_eq!(env.error_code(), Some(141));
        assert_eq!(env.error_message(), Some("function not found"));
        assert_eq!(env.result(), None);
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(serde_json::from_value::<Envelope>(json!([1, 2, 3])).is_err());
        assert!(serde_json::from_value::<Envelope>(json!("result")).is_err());
    }
}
