use std::collections::BTreeSet;

use bitflags::bitflags;

bitflags! {
    /// Flags altering what [`LayerAccess::features`](crate::vector::LayerAccess::features)
    /// fetches for each feature.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct RequestFlags: u32 {
        /// Fetch attributes only, leave geometries out.
        const NO_GEOMETRY = 0x01;
    }
}

/// Filter applied when iterating a layer.
///
/// The default request matches every feature and includes geometries.
///
/// ```
/// use ogr_tools::vector::{FeatureRequest, RequestFlags};
///
/// let request = FeatureRequest::new()
///     .with_filter_fids([1, 3, 5])
///     .with_flags(RequestFlags::NO_GEOMETRY);
/// assert!(request.matches(3));
/// assert!(!request.matches(2));
/// assert!(!request.include_geometry());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureRequest {
    /// Restrict iteration to these feature identifiers, or `None` for all.
    pub filter_fids: Option<BTreeSet<u64>>,
    pub flags: RequestFlags,
}

impl FeatureRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter_fids<I: IntoIterator<Item = u64>>(mut self, fids: I) -> Self {
        self.filter_fids = Some(fids.into_iter().collect());
        self
    }

    pub fn with_flags(mut self, flags: RequestFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn include_geometry(&self) -> bool {
        !self.flags.contains(RequestFlags::NO_GEOMETRY)
    }

    /// Whether a feature with identifier `fid` passes the id filter.
    pub fn matches(&self, fid: u64) -> bool {
        self.filter_fids
            .as_ref()
            .map_or(true, |fids| fids.contains(&fid))
    }

    /// Narrow this request to the given selection.
    ///
    /// The result keeps the flags and filters on `selection` intersected
    /// with any ids already requested.
    pub fn restricted_to(&self, selection: &BTreeSet<u64>) -> Self {
        let fids = match &self.filter_fids {
            Some(requested) => requested.intersection(selection).copied().collect(),
            None => selection.clone(),
        };
        FeatureRequest {
            filter_fids: Some(fids),
            flags: self.flags,
        }
    }
}
