//! Schema-less command bodies with absent-key semantics.
//!
//! Command payloads are conventions, not contracts: every field is
//! optional and nothing is validated. A field missing from the request
//! stays missing in the forwarded payload, while an explicit `null` is
//! forwarded as `null`.

use serde_json::{Map, Value};
use utoipa::ToSchema;

/// JSON object received on a command route.
///
/// Anything that is not a JSON object is represented as an empty body.
#[derive(Debug, Clone, Default, PartialEq, ToSchema)]
#[schema(value_type = Object)]
pub struct CommandBody(Map<String, Value>);

impl CommandBody {
    /// Creates an empty body.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses raw request bytes. Empty, malformed, or non-object input
    /// yields an empty body.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::empty();
        }
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => Self::from(value),
            Err(err) => {
                tracing::debug!(error = %err, "unparseable command body treated as empty");
                Self::empty()
            }
        }
    }

    /// Returns the raw value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the body has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds a payload holding exactly the listed fields that are present.
    #[must_use]
    pub fn pick(&self, fields: &[&str]) -> Map<String, Value> {
        let mut payload = Map::new();
        for field in fields {
            self.copy_into(&mut payload, field, field);
        }
        payload
    }

    /// Copies `source` into `payload` under the key `target`, if present.
    pub fn copy_into(&self, payload: &mut Map<String, Value>, source: &str, target: &str) {
        if let Some(value) = self.0.get(source) {
            payload.insert(target.to_string(), value.clone());
        }
    }

    /// Returns the value for `key`, or `default` when the key is absent.
    ///
    /// An explicit `null` is kept as `null`.
    #[must_use]
    pub fn get_or(&self, key: &str, default: &str) -> Value {
        self.0
            .get(key)
            .cloned()
            .unwrap_or_else(|| Value::String(default.to_string()))
    }

    /// Returns `true` if `key` is present and truthy.
    #[must_use]
    pub fn is_truthy(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(is_truthy)
    }
}

impl From<Value> for CommandBody {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::empty(),
        }
    }
}

impl From<Map<String, Value>> for CommandBody {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Loose truthiness: `null`, `false`, zero and `""` are falsy; every other
/// value, including empty arrays and objects, is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
