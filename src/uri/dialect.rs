use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::uri::listing::{candidates, layer_stem, DirectoryLister};
use crate::uri::LayerName;

/// One connection string dialect.
///
/// A matcher inspects the base of a connection string and either resolves a
/// layer name or returns `None` so the next dialect can be tried.
pub trait DialectMatcher {
    fn name(&self) -> &'static str;

    fn resolve(&self, base: &str, lister: &dyn DirectoryLister) -> Option<LayerName>;
}

/// A directory of single-layer files, e.g. a folder of CSVs.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectoryDialect;

impl DialectMatcher for DirectoryDialect {
    fn name(&self) -> &'static str {
        "directory"
    }

    fn resolve(&self, base: &str, lister: &dyn DirectoryLister) -> Option<LayerName> {
        let mut names = match candidates(lister, Path::new(base)) {
            Ok(names) => names,
            Err(err) => {
                debug!("'{base}' is not a listable directory: {err}");
                return None;
            }
        };
        match names.len() {
            0 => None,
            1 => names.pop().map(LayerName::Resolved),
            _ => Some(LayerName::Ambiguous {
                base: base.to_string(),
                candidates: names,
            }),
        }
    }
}

/// A path to a single file: the layer is named after the file.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileDialect;

impl DialectMatcher for FileDialect {
    fn name(&self) -> &'static str {
        "file"
    }

    fn resolve(&self, base: &str, lister: &dyn DirectoryLister) -> Option<LayerName> {
        let path = Path::new(base);
        if !lister.is_file(path) {
            return None;
        }
        let file_name = path.file_name()?.to_string_lossy();
        Some(LayerName::Resolved(layer_stem(&file_name)))
    }
}

// `table=` must start the string or follow whitespace, so `mytable="x"` is not a table clause.
static TABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|\s)table="([^"]*)""#).expect("valid table regex"));
static SCHEMA_TABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:^|\s)table="([^"]*)"\."([^"]*)""#).expect("valid schema table regex")
});

/// Embedded database DSN with an unqualified table, as written by the
/// SpatiaLite provider: `dbname='/tmp/x.sqlite' table="t" (geometry) sql=`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedDbDialect;

impl DialectMatcher for EmbeddedDbDialect {
    fn name(&self) -> &'static str {
        "embedded database"
    }

    fn resolve(&self, base: &str, _lister: &dyn DirectoryLister) -> Option<LayerName> {
        TABLE_RE.captures_iter(base).find_map(|caps| {
            let clause = caps.get(0)?;
            // A following `."` makes this a schema-qualified table.
            if base[clause.end()..].starts_with(".\"") {
                return None;
            }
            Some(LayerName::Resolved(caps[1].to_string()))
        })
    }
}

/// Client/server database DSN with a schema-qualified table, as written by
/// the PostgreSQL provider: `... table="city_data"."edge" (geom) sql=`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerDbDialect;

impl DialectMatcher for ServerDbDialect {
    fn name(&self) -> &'static str {
        "client/server database"
    }

    fn resolve(&self, base: &str, _lister: &dyn DirectoryLister) -> Option<LayerName> {
        let caps = SCHEMA_TABLE_RE.captures(base)?;
        Some(LayerName::Resolved(format!("{}.{}", &caps[1], &caps[2])))
    }
}

/// Dialects tried, in order, when no qualifier decides the layer.
pub fn default_dialects() -> [&'static dyn DialectMatcher; 4] {
    [
        &DirectoryDialect,
        &FileDialect,
        &EmbeddedDbDialect,
        &ServerDbDialect,
    ]
}
