//! Resource schema for the book collection
//!
//! A static description of the book resource. Create arguments are checked
//! against it, and `OPTIONS /books` publishes it as JSON Schema.

use serde_json::{json, Map, Value};

use crate::error::{BookListError, Result};
use crate::store::{OrderBy, SortOrder};
use crate::validation::{MAX_NAME_LENGTH, MIN_NAME_LENGTH};

// == Property Schema ==
/// JSON type of a schema property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    String,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::String => "string",
        }
    }
}

/// One declared property of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySchema {
    pub name: &'static str,
    pub description: &'static str,
    pub field_type: FieldType,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub readonly: bool,
    pub required: bool,
}

impl PropertySchema {
    /// Checks a string argument against this property's length bounds.
    pub fn check_string(&self, value: &str) -> Result<()> {
        let length = value.chars().count();

        let failure = match (self.min_length, self.max_length) {
            (Some(_), _) if value.is_empty() => {
                Some((format!("{} must not be empty.", self.name), "empty"))
            }
            (Some(min), Some(max)) if length < min || length > max => Some((
                format!(
                    "{} must be between {} and {} characters long.",
                    self.name, min, max
                ),
                "length",
            )),
            (Some(min), None) if length < min => Some((
                format!("{} must be at least {} characters long.", self.name, min),
                "length",
            )),
            (None, Some(max)) if length > max => Some((
                format!("{} must be at most {} characters long.", self.name, max),
                "length",
            )),
            _ => None,
        };

        match failure {
            Some((message, reason)) => Err(BookListError::InvalidParam {
                param: self.name.to_string(),
                message,
                reason: Some(reason),
            }),
            None => Ok(()),
        }
    }

    fn to_json(self) -> Value {
        let mut property = Map::new();
        property.insert("description".into(), json!(self.description));
        property.insert("type".into(), json!(self.field_type.as_str()));
        if let Some(min) = self.min_length {
            property.insert("minLength".into(), json!(min));
        }
        if let Some(max) = self.max_length {
            property.insert("maxLength".into(), json!(max));
        }
        property.insert("context".into(), json!(["embed", "view", "edit"]));
        if self.readonly {
            property.insert("readonly".into(), json!(true));
        }
        if self.required {
            property.insert("required".into(), json!(true));
        }
        Value::Object(property)
    }
}

// == Resource Schema ==
/// A named set of properties.
#[derive(Debug, Clone, Copy)]
pub struct ResourceSchema {
    pub title: &'static str,
    pub properties: &'static [PropertySchema],
}

impl ResourceSchema {
    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Names of all declared properties, in declaration order.
    pub fn property_names(&self) -> Vec<&'static str> {
        self.properties.iter().map(|p| p.name).collect()
    }

    /// Properties a create request must supply.
    pub fn required(&self) -> impl Iterator<Item = &PropertySchema> {
        self.properties.iter().filter(|p| p.required && !p.readonly)
    }

    /// Draft-04 JSON Schema document.
    pub fn to_json(&self) -> Value {
        let properties: Map<String, Value> = self
            .properties
            .iter()
            .map(|p| (p.name.to_string(), p.to_json()))
            .collect();

        json!({
            "$schema": "http://json-schema.org/draft-04/schema#",
            "title": self.title,
            "type": "object",
            "properties": properties,
        })
    }
}

/// The book resource.
pub const BOOK_SCHEMA: ResourceSchema = ResourceSchema {
    title: "book",
    properties: &[
        PropertySchema {
            name: "id",
            description: "Unique identifier for the book.",
            field_type: FieldType::Integer,
            min_length: None,
            max_length: None,
            readonly: true,
            required: false,
        },
        PropertySchema {
            name: "book_name",
            description: "Display name for the book.",
            field_type: FieldType::String,
            min_length: Some(MIN_NAME_LENGTH),
            max_length: Some(MAX_NAME_LENGTH),
            readonly: false,
            required: true,
        },
        PropertySchema {
            name: "author_name",
            description: "Author name for the book.",
            field_type: FieldType::String,
            min_length: Some(MIN_NAME_LENGTH),
            max_length: Some(MAX_NAME_LENGTH),
            readonly: false,
            required: true,
        },
    ],
};

/// Argument descriptions for `GET /books`.
pub fn collection_params(max_per_page: u64) -> Value {
    let orderby: Vec<&str> = OrderBy::ALL.iter().map(|o| o.as_str()).collect();

    json!({
        "page": {
            "description": "Current page of the collection.",
            "type": "integer",
            "default": 1,
            "minimum": 1,
        },
        "per_page": {
            "description": "Maximum number of items to be returned in result set.",
            "type": "integer",
            "default": 10,
            "minimum": 1,
            "maximum": max_per_page,
        },
        "search": {
            "description": "Limit results to those matching a string.",
            "type": "string",
        },
        "order": {
            "description": "Order sort attribute ascending or descending.",
            "type": "string",
            "default": SortOrder::Asc.as_str(),
            "enum": [SortOrder::Asc.as_str(), SortOrder::Desc.as_str()],
        },
        "orderby": {
            "description": "Sort collection by book attribute.",
            "type": "string",
            "default": OrderBy::BookName.as_str(),
            "enum": orderby,
        },
    })
}
