//! Data handed to templates.

use crate::error::{RenderError, RenderResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tera::Context;

/// Key-value bag passed to a page.
///
/// Templates see it under `data`, e.g. `{{ data.title }}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateData {
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl TemplateData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.data.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Build the Tera context for one render.
    pub fn to_context(&self) -> RenderResult<Context> {
        Context::from_serialize(self).map_err(|e| RenderError::InvalidData(e.to_string()))
    }
}

impl From<Map<String, Value>> for TemplateData {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

impl TryFrom<Value> for TemplateData {
    type Error = RenderError;

    /// Only JSON objects carry keys; anything else is rejected.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(data) => Ok(Self { data }),
            other => Err(RenderError::InvalidData(format!(
                "expected an object, got {}",
                type_name(&other)
            ))),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_and_accessors() {
        let mut data = TemplateData::new().with("title", "Home").with("count", 3);
        assert_eq!(data.get("title"), Some(&json!("Home")));
        assert_eq!(data.len(), 2);

        let previous = data.insert("count", 4);
        assert_eq!(previous, Some(json!(3)));
        assert_eq!(data.get("count"), Some(&json!(4)));
    }

    #[test]
    fn test_context_exposes_data_key() {
        let context = TemplateData::new().with("title", "About").to_context().unwrap();
        assert_eq!(context.get("data"), Some(&json!({ "title": "About" })));
    }

    #[test]
    fn test_empty_context_still_has_data_key() {
        let context = TemplateData::default().to_context().unwrap();
        assert_eq!(context.get("data"), Some(&json!({})));
    }

    #[test]
    fn test_try_from_value() {
        let data = TemplateData::try_from(json!({ "items": [1, 2, 3] })).unwrap();
        assert_eq!(data.get("items"), Some(&json!([1, 2, 3])));

        let err = TemplateData::try_from(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, RenderError::InvalidData(msg) if msg.contains("an array")));
    }
}
