use std::collections::BTreeMap;

use serde::Serialize;

/// Type tags of the generateContent structured-output schema language.
/// The wire format wants them uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
}

/// One node of a response schema. Empty collections and absent fields are
/// skipped on serialization so the payload stays minimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, ResponseSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ResponseSchema>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl ResponseSchema {
    fn leaf(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            properties: BTreeMap::new(),
            items: None,
            required: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::leaf(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::leaf(SchemaType::Number)
    }

    pub fn array(items: ResponseSchema) -> Self {
        let mut node = Self::leaf(SchemaType::Array);
        node.items = Some(Box::new(items));
        node
    }

    pub fn object(properties: Vec<(&str, ResponseSchema)>, required: &[&str]) -> Self {
        let mut node = Self::leaf(SchemaType::Object);
        node.properties = properties
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        node.required = required.iter().map(|r| r.to_string()).collect();
        node
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}
