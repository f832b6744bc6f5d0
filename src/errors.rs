use thiserror::Error;

use crate::vector::FieldType;

pub type Result<T> = std::result::Result<T, VectorError>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VectorError {
    #[error("Bad argument: {0}")]
    BadArgument(String),
    #[error("Invalid field name '{field_name}' used on method {method_name}")]
    InvalidFieldName {
        field_name: String,
        method_name: &'static str,
    },
    #[error("Invalid field index {index} used on method {method_name}")]
    InvalidFieldIndex {
        index: usize,
        method_name: &'static str,
    },
    #[error("Feature has {found} values but the layer defines {expected} fields")]
    FieldCountMismatch { expected: usize, found: usize },
    #[error("Value does not match field type {field_type:?} on method {method_name}")]
    UnhandledFieldType {
        field_type: FieldType,
        method_name: &'static str,
    },
    #[error("Configuration store lock was poisoned")]
    ConfigLock,
}
