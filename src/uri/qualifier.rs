use log::warn;

/// Separator between the base of a connection string and its qualifiers.
pub const QUALIFIER_SEPARATOR: char = '|';

/// A `key=value` token following the base of a connection string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Qualifier {
    /// `layerid=<int>`: position in the sorted sublayer candidates.
    LayerId(i64),
    /// `layername=<text>`: explicit sublayer name.
    LayerName(String),
}

impl Qualifier {
    /// Parse a single token, `None` for anything other than a well-formed
    /// `layerid` or `layername`.
    pub fn parse(token: &str) -> Option<Qualifier> {
        let (key, value) = token.split_once('=')?;
        match key {
            "layername" => Some(Qualifier::LayerName(value.to_string())),
            "layerid" => match value.trim().parse::<i64>() {
                Ok(id) => Some(Qualifier::LayerId(id)),
                Err(_) => {
                    warn!("Ignoring non-integer layerid '{value}'");
                    None
                }
            },
            _ => None,
        }
    }
}

/// A connection string split into its base and qualifiers.
///
/// At most one qualifier of each kind is kept; when a kind repeats the last
/// occurrence wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Qualifiers<'a> {
    pub base: &'a str,
    pub layer_id: Option<i64>,
    pub layer_name: Option<String>,
}

impl<'a> Qualifiers<'a> {
    pub fn split(raw: &'a str) -> Qualifiers<'a> {
        let mut parts = raw.split(QUALIFIER_SEPARATOR);
        let mut qualifiers = Qualifiers {
            base: parts.next().unwrap_or_default(),
            ..Qualifiers::default()
        };
        for qualifier in parts.filter_map(Qualifier::parse) {
            match qualifier {
                Qualifier::LayerId(id) => qualifiers.layer_id = Some(id),
                Qualifier::LayerName(name) => qualifiers.layer_name = Some(name),
            }
        }
        qualifiers
    }
}
