use std::collections::HashSet;

use log::debug;

use crate::config::{self, USE_SELECTED};
use crate::errors::Result;
use crate::vector::{FeatureRequest, FieldRef, FieldValue, LayerAccess, RequestFlags};

/// Whether feature access honours the layer's selection.
///
/// Captured once and passed into every accessor call, so a single call sees
/// one consistent toggle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionContext {
    pub use_selected_only: bool,
}

impl SelectionContext {
    pub fn new(use_selected_only: bool) -> Self {
        SelectionContext { use_selected_only }
    }

    /// Snapshot the [`USE_SELECTED`] configuration option.
    pub fn from_config() -> Result<Self> {
        Ok(SelectionContext {
            use_selected_only: config::get_bool_config_option(USE_SELECTED, false)?,
        })
    }
}

/// Iterate the features of `layer` matching `request`, restricted to the
/// selection when `ctx` asks for it.
///
/// An empty selection counts as no selection: all features matching
/// `request` are returned.
///
/// ```
/// use ogr_tools::vector::{features, Defn, FeatureRequest, MemoryLayer, SelectionContext};
///
/// let mut layer = MemoryLayer::new("points", Defn::default());
/// for _ in 0..4 {
///     layer.add_feature(None, vec![]).unwrap();
/// }
/// layer.select_by_ids([1, 3]);
///
/// let ctx = SelectionContext::new(true);
/// let fids: Vec<u64> = features(&layer, &ctx, &FeatureRequest::new())
///     .unwrap()
///     .map(|f| f.fid())
///     .collect();
/// assert_eq!(fids, vec![1, 3]);
/// ```
pub fn features<'a, L: LayerAccess>(
    layer: &'a L,
    ctx: &SelectionContext,
    request: &FeatureRequest,
) -> Result<L::Features<'a>> {
    if ctx.use_selected_only {
        let selection = layer.selected_ids()?;
        if !selection.is_empty() {
            debug!(
                "Restricting layer '{}' to {} selected features",
                layer.name(),
                selection.len()
            );
            return layer.features(&request.restricted_to(&selection));
        }
    }
    layer.features(request)
}

/// Field values collected by [`values`], one column per requested field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldValues {
    columns: Vec<(FieldRef, Vec<Option<FieldValue>>)>,
}

impl FieldValues {
    /// Values of the field requested as `field_ref`, in feature order.
    pub fn get<R: Into<FieldRef>>(&self, field_ref: R) -> Option<&[Option<FieldValue>]> {
        let field_ref = field_ref.into();
        self.columns
            .iter()
            .find(|(key, _)| *key == field_ref)
            .map(|(_, column)| column.as_slice())
    }

    /// Iterate the columns in the order they were requested.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldRef, &[Option<FieldValue>])> {
        self.columns
            .iter()
            .map(|(key, column)| (key, column.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn into_column<R: Into<FieldRef>>(self, field_ref: R) -> Option<Vec<Option<FieldValue>>> {
        let field_ref = field_ref.into();
        self.columns
            .into_iter()
            .find(|(key, _)| *key == field_ref)
            .map(|(_, column)| column)
    }
}

/// Collect the values of several fields in a single pass over [`features`].
///
/// Fields may be referenced by index or by name. Referencing the same field
/// twice under one key yields a single column.
pub fn values<L, I, R>(layer: &L, ctx: &SelectionContext, field_refs: I) -> Result<FieldValues>
where
    L: LayerAccess,
    I: IntoIterator<Item = R>,
    R: Into<FieldRef>,
{
    let mut keys: Vec<FieldRef> = Vec::new();
    for field_ref in field_refs {
        let field_ref = field_ref.into();
        if !keys.contains(&field_ref) {
            keys.push(field_ref);
        }
    }
    let indices = keys
        .iter()
        .map(|key| layer.defn().field_index(key))
        .collect::<Result<Vec<usize>>>()?;

    let request = FeatureRequest::new().with_flags(RequestFlags::NO_GEOMETRY);
    let mut columns: Vec<Vec<Option<FieldValue>>> = vec![Vec::new(); keys.len()];
    for feature in features(layer, ctx, &request)? {
        for (column, index) in columns.iter_mut().zip(&indices) {
            column.push(feature.field(*index)?.cloned());
        }
    }

    Ok(FieldValues {
        columns: keys.into_iter().zip(columns).collect(),
    })
}

/// Distinct values of one field over [`features`].
pub fn unique_values<L, R>(
    layer: &L,
    ctx: &SelectionContext,
    field_ref: R,
) -> Result<HashSet<Option<FieldValue>>>
where
    L: LayerAccess,
    R: Into<FieldRef>,
{
    let field_ref = field_ref.into();
    let column = values(layer, ctx, [field_ref.clone()])?
        .into_column(field_ref)
        .unwrap_or_default();
    Ok(column.into_iter().collect())
}
