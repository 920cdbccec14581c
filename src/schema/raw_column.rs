use serde::{Deserialize, Serialize};

/// One column as carved out of a table declaration by the catalog reader.
///
/// Deserializes from SQLite `PRAGMA table_info` rows as well: `type` and
/// `dflt_value` are accepted as aliases, other keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawColumnSpec {
    pub name: String,
    #[serde(alias = "type", default)]
    pub raw_type: String,
    #[serde(alias = "dflt_value", default)]
    pub raw_default: Option<String>,
}

impl RawColumnSpec {
    pub fn new(name: &str, raw_type: &str, raw_default: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            raw_type: raw_type.to_string(),
            raw_default: raw_default.map(str::to_string),
        }
    }
}

impl<N, T> From<(N, T, Option<&str>)> for RawColumnSpec
where
    N: AsRef<str>,
    T: AsRef<str>,
{
    fn from((name, raw_type, raw_default): (N, T, Option<&str>)) -> Self {
        RawColumnSpec::new(name.as_ref(), raw_type.as_ref(), raw_default)
    }
}
