use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ModelError;
use crate::null_as_empty;

/// A service entry keyed by `id`. Uniqueness of `id` is not enforced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    #[serde(rename = "servicename", default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "servicedetails", default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ServiceDetails>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDetails {
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub vlan: String,
    #[serde(rename = "remoteip", default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub remote_ip: String,
}

impl ServiceRecord {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self { kind: kind.into(), id: id.into(), details: None }
    }

    pub fn with_details(mut self, vlan: impl Into<String>, remote_ip: impl Into<String>) -> Self {
        self.details = Some(ServiceDetails { vlan: vlan.into(), remote_ip: remote_ip.into() });
        self
    }

    /// Decode the first JSON value of a request body.
    ///
    /// Bytes after the first complete value are not inspected, so
    /// `{"servicename":"a"} trailing` decodes. A blank body yields
    /// [`ModelError::EmptyBody`]. The body and `servicedetails` must be JSON
    /// objects; arrays are not read positionally. A repeated key keeps its
    /// last value.
    pub fn from_json(body: &[u8]) -> Result<Self, ModelError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ModelError::EmptyBody);
        }
        let mut stream = serde_json::Deserializer::from_slice(body).into_iter::<Value>();
        let value = match stream.next() {
            Some(Ok(value)) => value,
            Some(Err(e)) => return Err(ModelError::Decode(e.to_string())),
            None => return Err(ModelError::EmptyBody),
        };
        let Value::Object(fields) = &value else {
            return Err(ModelError::Decode(format!("expected a JSON object, found {}", kind_of(&value))));
        };
        match fields.get("servicedetails") {
            None | Some(Value::Null) | Some(Value::Object(_)) => {}
            Some(other) => {
                return Err(ModelError::Decode(format!(
                    "servicedetails: expected a JSON object, found {}",
                    kind_of(other)
                )))
            }
        }
        serde_json::from_value(value).map_err(|e| ModelError::Decode(e.to_string()))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
