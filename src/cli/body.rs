use std::path::Path;

use serde_json::{Map, Value};

use crate::{error::Body, Result};

/// User attributes as an open JSON object; Thunder defines the schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserBody(pub Map<String, Value>);

impl UserBody {
    pub fn from_json(text: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(Body::NotAnObject.into()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
