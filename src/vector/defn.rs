use std::fmt::{self, Display, Formatter};

use crate::errors::*;
use crate::vector::FieldValue;

/// Data type of an attribute field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    Integer,
    Integer64,
    Real,
    String,
    Date,
    DateTime,
}

impl FieldType {
    /// Whether `value` can be stored in a field of this type.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (FieldType::Integer, FieldValue::IntegerValue(_))
                | (FieldType::Integer64, FieldValue::IntegerValue(_))
                | (FieldType::Integer64, FieldValue::Integer64Value(_))
                | (FieldType::Real, FieldValue::RealValue(_))
                | (FieldType::String, FieldValue::StringValue(_))
                | (FieldType::Date, FieldValue::DateValue(_))
                | (FieldType::DateTime, FieldValue::DateTimeValue(_))
        )
    }
}

/// Definition of a single attribute field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDefn {
    name: String,
    field_type: FieldType,
}

impl FieldDefn {
    pub fn new(name: &str, field_type: FieldType) -> FieldDefn {
        FieldDefn {
            name: name.to_string(),
            field_type,
        }
    }

    /// Get the name of this field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the data type of this field.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }
}

/// Reference to an attribute field, either by position or by name.
///
/// Both forms may be mixed in a single [`values`](crate::vector::values) call;
/// results are keyed by the reference exactly as the caller passed it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldRef {
    Index(usize),
    Name(String),
}

impl From<usize> for FieldRef {
    fn from(index: usize) -> Self {
        FieldRef::Index(index)
    }
}

impl From<&str> for FieldRef {
    fn from(name: &str) -> Self {
        FieldRef::Name(name.to_string())
    }
}

impl From<String> for FieldRef {
    fn from(name: String) -> Self {
        FieldRef::Name(name)
    }
}

impl From<&FieldRef> for FieldRef {
    fn from(field_ref: &FieldRef) -> Self {
        field_ref.clone()
    }
}

impl Display for FieldRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FieldRef::Index(index) => write!(f, "{index}"),
            FieldRef::Name(name) => f.write_str(name),
        }
    }
}

/// Layer definition
///
/// Defines the fields available for features in a layer, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Defn {
    fields: Vec<FieldDefn>,
}

impl Defn {
    pub fn new(fields: Vec<FieldDefn>) -> Defn {
        Defn { fields }
    }

    /// Convenience constructor from `(name, type)` pairs.
    pub fn from_fields(fields: &[(&str, FieldType)]) -> Defn {
        Defn::new(
            fields
                .iter()
                .map(|(name, field_type)| FieldDefn::new(name, *field_type))
                .collect(),
        )
    }

    /// Iterate over the field schema of this layer.
    pub fn fields(&self) -> std::slice::Iter<'_, FieldDefn> {
        self.fields.iter()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, index: usize) -> Option<&FieldDefn> {
        self.fields.get(index)
    }

    /// Resolve a field reference to its position in the schema.
    pub fn field_index(&self, field_ref: &FieldRef) -> Result<usize> {
        match field_ref {
            FieldRef::Index(index) if *index < self.fields.len() => Ok(*index),
            FieldRef::Index(index) => Err(VectorError::InvalidFieldIndex {
                index: *index,
                method_name: "field_index",
            }),
            FieldRef::Name(name) => self
                .fields
                .iter()
                .position(|field| field.name == *name)
                .ok_or_else(|| VectorError::InvalidFieldName {
                    field_name: name.clone(),
                    method_name: "field_index",
                }),
        }
    }
}
