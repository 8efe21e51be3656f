use std::collections::HashMap;

use parser::Pos;
use serde::{Deserialize, Serialize};
use value::ConstValue;

/// A GraphQL execution error carrying an optional extension map.
///
/// This is the shape servers put in the `errors` array of a response. The
/// telemetry layer only ever looks at `extensions`; everything else is carried
/// through for the host engine's benefit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ServerError {
    pub message: String,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub path: Vec<ConstValue>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub locations: Vec<Pos>,

    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub extensions: HashMap<String, ConstValue>,
}

impl ServerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Default::default(),
            locations: Default::default(),
            extensions: Default::default(),
        }
    }

    pub fn extension(mut self, key: impl Into<String>, value: impl Into<ConstValue>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_skipped_on_the_wire() {
        let err = ServerError::new("boom");
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"message":"boom"}"#
        );
    }

    #[test]
    fn extensions_serialize_as_a_map() {
        let err = ServerError::new("boom").extension("error_code", "FORBIDDEN");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({
                "message": "boom",
                "extensions": { "error_code": "FORBIDDEN" }
            })
        );
    }
}
