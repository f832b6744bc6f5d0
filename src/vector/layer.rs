use std::collections::BTreeSet;

use crate::errors::Result;
use crate::vector::{Defn, Feature, FeatureRequest};

/// Read access to a vector layer.
///
/// This is the surface the selection-aware accessor consumes: the schema,
/// the current selection and request-filtered iteration.
///
/// ```
/// use ogr_tools::vector::{Defn, FeatureRequest, FieldType, LayerAccess, MemoryLayer};
///
/// let mut layer = MemoryLayer::new("roads", Defn::from_fields(&[("highway", FieldType::String)]));
/// layer.add_feature(None, vec![Some("footway".into())]).unwrap();
/// for feature in layer.features(&FeatureRequest::new()).unwrap() {
///     // do something with each feature
///     assert_eq!(feature.fid(), 0);
/// }
/// ```
pub trait LayerAccess {
    type Features<'a>: Iterator<Item = Feature>
    where
        Self: 'a;

    /// Get the name of this layer.
    fn name(&self) -> &str;

    fn defn(&self) -> &Defn;

    /// Identifiers of the currently selected features, possibly empty.
    fn selected_ids(&self) -> Result<BTreeSet<u64>>;

    /// Iterate over the features matching `request`, in the layer's natural order.
    fn features(&self, request: &FeatureRequest) -> Result<Self::Features<'_>>;

    /// Total number of features, ignoring any selection.
    fn feature_count(&self) -> u64;
}
