//! Uniform response envelope.

use serde::Serialize;
use serde_json::{Map, Value};

/// Wrapper shared by every response of the API.
///
/// Serializes as `{ "success": ..., "result": ..., ...additional }`. Extra
/// top-level attributes (`token`, `total`, `message`, ...) are flattened into
/// the same object.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub result: T,
    #[serde(flatten)]
    pub additional: Map<String, Value>,
}

impl<T: Serialize> Envelope<T> {
    /// Successful envelope around `result`.
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            result,
            additional: Map::new(),
        }
    }

    /// Adds a top-level attribute next to `success` and `result`.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.additional.insert(key.to_string(), value.into());
        self
    }
}

impl Envelope<Vec<Value>> {
    /// Successful envelope with an empty `result` list.
    pub fn empty() -> Self {
        Self::ok(Vec::new())
    }

    /// Error envelope: `success: false`, empty `result` and a `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: Vec::new(),
            additional: Map::new(),
        }
        .with("message", message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_additional_attributes_are_flattened() {
        let envelope = Envelope::ok(vec![1, 2]).with("total", 2).with("allRestaurantCount", 7);

        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            json!({ "success": true, "result": [1, 2], "total": 2, "allRestaurantCount": 7 })
        );
    }

    #[test]
    fn test_failure_shape() {
        let value = serde_json::to_value(Envelope::failure("User not found")).unwrap();

        assert_eq!(
            value,
            json!({ "success": false, "result": [], "message": "User not found" })
        );
    }
}
