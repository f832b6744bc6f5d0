//! Tools for working with OGR-style vector data sources.
//!
//! Two independent pieces share the vector layer model:
//!
//! * [`uri`] resolves a human readable layer name from a connection string,
//!   whether it points at a directory of files, a single file, an embedded
//!   database or a client/server database.
//! * [`vector`] iterates features and collects field values while honouring
//!   the "use selected features only" toggle.
//!
//! ## Use
//!
//! ```
//! use ogr_tools::uri::ogr_layer_name;
//! use ogr_tools::vector::{features, Defn, FeatureRequest, MemoryLayer, SelectionContext};
//!
//! let dsn = r#"port=5493 table="city_data"."edge" (geom) sql="#;
//! assert_eq!(ogr_layer_name(dsn), "city_data.edge");
//!
//! let mut layer = MemoryLayer::new("edge", Defn::default());
//! for _ in 0..3 {
//!     layer.add_feature(None, vec![]).unwrap();
//! }
//! layer.select_by_ids([1]);
//! let ctx = SelectionContext::from_config().unwrap();
//! for feature in features(&layer, &ctx, &FeatureRequest::new()).unwrap() {
//!     println!("{}", feature.fid());
//! }
//! ```

#![crate_name = "ogr_tools"]
#![crate_type = "lib"]

pub mod config;
pub mod errors;
pub mod uri;
pub mod vector;

#[cfg(test)]
mod test_utils;
