use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset, NaiveDate};
use geo_types::Geometry;

use crate::errors::*;

/// A single feature of a vector layer: identifier, attribute row and
/// optional geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    fid: u64,
    fields: Vec<Option<FieldValue>>,
    geometry: Option<Geometry<f64>>,
}

impl Feature {
    pub fn new(fid: u64, fields: Vec<Option<FieldValue>>, geometry: Option<Geometry<f64>>) -> Self {
        Feature {
            fid,
            fields,
            geometry,
        }
    }

    /// Get the feature identifier.
    pub fn fid(&self) -> u64 {
        self.fid
    }

    /// Get the value of the field at `index`.
    ///
    /// Returns `Ok(None)` for a null value, and an error if the index lies
    /// outside the row.
    pub fn field(&self, index: usize) -> Result<Option<&FieldValue>> {
        self.fields
            .get(index)
            .map(Option::as_ref)
            .ok_or(VectorError::InvalidFieldIndex {
                index,
                method_name: "field",
            })
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Get the feature's geometry, absent when it was requested without one.
    pub fn geometry(&self) -> Option<&Geometry<f64>> {
        self.geometry.as_ref()
    }

    pub fn has_geometry(&self) -> bool {
        self.geometry.is_some()
    }

    pub(crate) fn without_geometry(mut self) -> Self {
        self.geometry = None;
        self
    }
}

/// Value of an attribute field
///
/// Equality and hashing treat reals by bit pattern, so `NaN` equals itself
/// and `0.0` differs from `-0.0`. This lets values be collected into sets.
#[derive(Clone, Debug)]
pub enum FieldValue {
    IntegerValue(i32),
    Integer64Value(i64),
    StringValue(String),
    RealValue(f64),
    DateValue(NaiveDate),
    DateTimeValue(DateTime<FixedOffset>),
}

impl FieldValue {
    /// Interpret the value as `String`. Returns `None` if the value is something else.
    pub fn into_string(self) -> Option<String> {
        match self {
            FieldValue::StringValue(rv) => Some(rv),
            _ => None,
        }
    }

    /// Interpret the value as `f64`. Integers are widened.
    pub fn into_real(self) -> Option<f64> {
        match self {
            FieldValue::RealValue(rv) => Some(rv),
            FieldValue::IntegerValue(rv) => Some(rv as f64),
            FieldValue::Integer64Value(rv) => Some(rv as f64),
            _ => None,
        }
    }

    /// Interpret the value as `i32`. Returns `None` if the value is something else.
    pub fn into_int(self) -> Option<i32> {
        match self {
            FieldValue::IntegerValue(rv) => Some(rv),
            _ => None,
        }
    }

    /// Interpret the value as `i64`. 32-bit integers are widened.
    pub fn into_int64(self) -> Option<i64> {
        match self {
            FieldValue::IntegerValue(rv) => Some(rv as i64),
            FieldValue::Integer64Value(rv) => Some(rv),
            _ => None,
        }
    }

    pub fn into_date(self) -> Option<NaiveDate> {
        match self {
            FieldValue::DateValue(rv) => Some(rv),
            FieldValue::DateTimeValue(rv) => Some(rv.date_naive()),
            _ => None,
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        use FieldValue::*;
        match (self, other) {
            (IntegerValue(a), IntegerValue(b)) => a == b,
            (Integer64Value(a), Integer64Value(b)) => a == b,
            (StringValue(a), StringValue(b)) => a == b,
            (RealValue(a), RealValue(b)) => a.to_bits() == b.to_bits(),
            (DateValue(a), DateValue(b)) => a == b,
            (DateTimeValue(a), DateTimeValue(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for FieldValue {}

impl Hash for FieldValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            FieldValue::IntegerValue(v) => v.hash(state),
            FieldValue::Integer64Value(v) => v.hash(state),
            FieldValue::StringValue(v) => v.hash(state),
            FieldValue::RealValue(v) => v.to_bits().hash(state),
            FieldValue::DateValue(v) => v.hash(state),
            FieldValue::DateTimeValue(v) => v.hash(state),
        }
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::IntegerValue(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer64Value(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::RealValue(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::StringValue(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::StringValue(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::DateValue(value)
    }
}

impl From<DateTime<FixedOffset>> for FieldValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        FieldValue::DateTimeValue(value)
    }
}
