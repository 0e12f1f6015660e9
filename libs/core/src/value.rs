pub use serde_json::Value;

/// Named parameters passed to a remote function
pub type Params = serde_json::Map<String, Value>;
