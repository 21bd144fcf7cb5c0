use serde_json::{Map, Value};

/// The authenticated identity attached to a request.
///
/// Attributes are whatever the identity provider returned for the user. The
/// handler only ever reads them, so no mutable access is exposed.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    attributes: Map<String, Value>,
}

impl Principal {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self { attributes }
    }

    /// Builds a principal from a JSON document. Anything but an object is rejected.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Object(attributes) => Some(Self::new(attributes)),
            _ => None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}
