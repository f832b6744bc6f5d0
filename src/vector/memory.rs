use std::collections::BTreeSet;

use geo_types::Geometry;

use crate::errors::*;
use crate::vector::{Defn, Feature, FeatureRequest, FieldValue, LayerAccess};

/// Vector layer held entirely in memory.
///
/// Feature identifiers are assigned sequentially from `0` in insertion order,
/// which is also the iteration order.
#[derive(Clone, Debug)]
pub struct MemoryLayer {
    name: String,
    defn: Defn,
    features: Vec<Feature>,
    selection: BTreeSet<u64>,
}

impl MemoryLayer {
    pub fn new(name: &str, defn: Defn) -> Self {
        MemoryLayer {
            name: name.to_string(),
            defn,
            features: Vec::new(),
            selection: BTreeSet::new(),
        }
    }

    /// Append a feature and return its identifier.
    ///
    /// `values` must hold one entry per schema field, each either `None` or
    /// a value the field type accepts.
    pub fn add_feature(
        &mut self,
        geometry: Option<Geometry<f64>>,
        values: Vec<Option<FieldValue>>,
    ) -> Result<u64> {
        if values.len() != self.defn.field_count() {
            return Err(VectorError::FieldCountMismatch {
                expected: self.defn.field_count(),
                found: values.len(),
            });
        }
        for (field, value) in self.defn.fields().zip(&values) {
            if let Some(value) = value {
                if !field.field_type().accepts(value) {
                    return Err(VectorError::UnhandledFieldType {
                        field_type: field.field_type(),
                        method_name: "add_feature",
                    });
                }
            }
        }
        let fid = self.features.len() as u64;
        self.features.push(Feature::new(fid, values, geometry));
        Ok(fid)
    }

    /// Replace the current selection. Unknown identifiers are dropped.
    pub fn select_by_ids<I: IntoIterator<Item = u64>>(&mut self, fids: I) {
        let count = self.features.len() as u64;
        self.selection = fids.into_iter().filter(|fid| *fid < count).collect();
    }

    pub fn remove_selection(&mut self) {
        self.selection.clear();
    }
}

impl LayerAccess for MemoryLayer {
    type Features<'a> = FeatureIterator<'a>;

    fn name(&self) -> &str {
        &self.name
    }

    fn defn(&self) -> &Defn {
        &self.defn
    }

    fn selected_ids(&self) -> Result<BTreeSet<u64>> {
        Ok(self.selection.clone())
    }

    fn features(&self, request: &FeatureRequest) -> Result<FeatureIterator<'_>> {
        Ok(FeatureIterator {
            inner: self.features.iter(),
            request: request.clone(),
        })
    }

    fn feature_count(&self) -> u64 {
        self.features.len() as u64
    }
}

pub struct FeatureIterator<'a> {
    inner: std::slice::Iter<'a, Feature>,
    request: FeatureRequest,
}

impl<'a> Iterator for FeatureIterator<'a> {
    type Item = Feature;

    #[inline]
    fn next(&mut self) -> Option<Feature> {
        let request = &self.request;
        let feature = self.inner.find(|feature| request.matches(feature.fid()))?;
        let feature = feature.clone();
        Some(if request.include_geometry() {
            feature
        } else {
            feature.without_geometry()
        })
    }
}
