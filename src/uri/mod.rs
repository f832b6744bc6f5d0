//! Layer names from OGR connection strings
//!
//! A connection string describes how to open a vector data source. Several
//! incompatible dialects are in use:
//!
//! ```text
//! base[|layerid=<int>][|layername=<text>]                  file or directory
//! dbname='<path>' table="<name>" (<geomcol>) sql=           embedded database
//! <kv-pairs> table="<schema>"."<name>" (<geomcol>) sql=      client/server database
//! ```
//!
//! [`resolve`] turns any of them into a [`LayerName`] suitable for display.
//!
//! ```
//! use ogr_tools::uri::{resolve, FsLister, LayerName};
//!
//! let name = resolve(r#"dbname='/tmp/x.sqlite' table="t" (geometry) sql="#, &FsLister);
//! assert_eq!(name, LayerName::Resolved("t".to_string()));
//! ```

use std::fmt::{self, Display, Formatter};
use std::path::Path;

use log::debug;

pub use crate::uri::dialect::{
    default_dialects, DialectMatcher, DirectoryDialect, EmbeddedDbDialect, FileDialect,
    ServerDbDialect,
};
pub use crate::uri::listing::{candidates, layer_stem, DirectoryLister, FsLister};
pub use crate::uri::qualifier::{Qualifier, Qualifiers, QUALIFIER_SEPARATOR};

mod dialect;
mod listing;
mod qualifier;


/// Display form of an out-of-range `layerid`.
pub const INVALID_LAYER_ID: &str = "invalid-layerid";

/// Outcome of resolving a connection string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayerName {
    Resolved(String),
    /// `layerid` does not index into the sorted candidates.
    OutOfRange { index: i64, candidates: usize },
    /// A directory holds several sublayers and no qualifier picks one.
    Ambiguous {
        base: String,
        candidates: Vec<String>,
    },
}

impl LayerName {
    pub fn is_resolved(&self) -> bool {
        matches!(self, LayerName::Resolved(_))
    }

    /// The resolved name, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LayerName::Resolved(name) => Some(name),
            _ => None,
        }
    }
}

impl Display for LayerName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LayerName::Resolved(name) => f.write_str(name),
            LayerName::OutOfRange { .. } => f.write_str(INVALID_LAYER_ID),
            LayerName::Ambiguous { base, .. } => f.write_str(base),
        }
    }
}

fn strip_quotes(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(raw)
}

/// Resolve the layer name a connection string refers to.
///
/// Qualifiers are honoured first (`layername` over `layerid`, whatever their
/// order), then the base is matched against [`default_dialects`]. A base no
/// dialect recognises is returned as is. Directory listing happens through
/// `lister` and its failures never surface: they make a dialect miss, and a
/// `layerid` on a base that cannot be listed yields the base itself.
/// Double quotes around the whole string or around the base are dropped.
pub fn resolve<L: DirectoryLister>(raw: &str, lister: &L) -> LayerName {
    resolve_with(raw, lister, &default_dialects())
}

/// Like [`resolve`], with an explicit dialect list tried in order.
pub fn resolve_with<L: DirectoryLister>(
    raw: &str,
    lister: &L,
    dialects: &[&dyn DialectMatcher],
) -> LayerName {
    let qualifiers = Qualifiers::split(strip_quotes(raw));
    let base = strip_quotes(qualifiers.base);

    if let Some(name) = qualifiers.layer_name {
        return LayerName::Resolved(name);
    }

    if let Some(index) = qualifiers.layer_id {
        match candidates(lister, Path::new(base)) {
            Ok(mut names) => {
                return match usize::try_from(index) {
                    Ok(i) if i < names.len() => LayerName::Resolved(names.swap_remove(i)),
                    _ => LayerName::OutOfRange {
                        index,
                        candidates: names.len(),
                    },
                };
            }
            Err(err) => {
                debug!("Cannot list '{base}' for layerid={index}: {err}");
                return LayerName::Resolved(base.to_string());
            }
        }
    }

    for dialect in dialects {
        if let Some(name) = dialect.resolve(base, lister) {
            debug!("Resolved '{base}' as {} dialect", dialect.name());
            return name;
        }
    }
    LayerName::Resolved(base.to_string())
}

/// Display name of the layer `raw` refers to, looking at the local filesystem.
///
/// Out of range `layerid` qualifiers yield [`INVALID_LAYER_ID`].
pub fn ogr_layer_name(raw: &str) -> String {
    resolve(raw, &FsLister).to_string()
}
