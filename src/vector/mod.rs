//! Vector layer access
//!
//! ## Reading
//!
//! ```
//! use ogr_tools::vector::{values, Defn, FieldType, MemoryLayer, SelectionContext};
//!
//! let mut layer = MemoryLayer::new("roads", Defn::from_fields(&[("highway", FieldType::String)]));
//! layer.add_feature(None, vec![Some("footway".into())]).unwrap();
//! layer.add_feature(None, vec![Some("residential".into())]).unwrap();
//!
//! let res = values(&layer, &SelectionContext::default(), ["highway"]).unwrap();
//! assert_eq!(res.get("highway").unwrap().len(), 2);
//! ```

pub use crate::vector::defn::{Defn, FieldDefn, FieldRef, FieldType};
pub use crate::vector::feature::{Feature, FieldValue};
pub use crate::vector::layer::LayerAccess;
pub use crate::vector::memory::{FeatureIterator, MemoryLayer};
pub use crate::vector::options::{FeatureRequest, RequestFlags};
pub use crate::vector::selection::{
    features, unique_values, values, FieldValues, SelectionContext,
};

mod defn;
mod feature;
mod layer;
mod memory;
mod options;
mod selection;
