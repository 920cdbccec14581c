use std::{collections::HashMap, fmt::{self, Display}};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Generic value kind a column maps to, independent of the engine's
/// spelling of the type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCategory {
    /// Integers, decimals and floating point
    Numeric,
    /// Character, text and blob types; also the fallback
    Textual,
    /// `BOOLEAN`
    Boolean,
    /// `DATE` / `DATETIME`
    Temporal,
}

static TYPE_ARGUMENTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(.*\)\s*$").expect("type argument pattern is valid")
});

static TYPE_TABLE: Lazy<HashMap<&'static str, TypeCategory>> = Lazy::new(|| {
    use TypeCategory::*;
    HashMap::from([
        ("INT", Numeric),
        ("INTEGER", Numeric),
        ("TINYINT", Numeric),
        ("SMALLINT", Numeric),
        ("MEDIUMINT", Numeric),
        ("BIGINT", Numeric),
        ("INT2", Numeric),
        ("INT8", Numeric),
        ("UNSIGNED BIG INT", Numeric),
        ("NUMERIC", Numeric),
        ("DECIMAL", Numeric),
        ("FLOAT", Numeric),
        ("DOUBLE", Numeric),
        ("DOUBLE PRECISION", Numeric),
        ("REAL", Numeric),

        ("CHARACTER", Textual),
        ("VARCHAR", Textual),
        ("VARYING CHARACTER", Textual),
        ("NCHAR", Textual),
        ("NATIVE CHARACTER", Textual),
        ("NVARCHAR", Textual),
        ("TEXT", Textual),
        ("CLOB", Textual),
        ("BLOB", Textual),

        ("BOOLEAN", Boolean),

        ("DATE", Temporal),
        ("DATETIME", Temporal),
    ])
});

impl TypeCategory {
    /// Map a declared column type to its category.
    ///
    /// Unknown or empty type names classify as `Textual`.
    pub fn classify(raw_type: &str) -> TypeCategory {
        let normalized = Self::normalize(raw_type);
        TYPE_TABLE.get(normalized.as_str()).copied().unwrap_or(TypeCategory::Textual)
    }

    /// Lookup key for a declared type: arguments such as `(255)` removed,
    /// whitespace collapsed, uppercased.
    pub fn normalize(raw_type: &str) -> String {
        let bare = TYPE_ARGUMENTS.replace(raw_type, "");
        bare.split_whitespace().collect::<Vec<_>>().join(" ").to_ascii_uppercase()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeCategory::Numeric => "numeric",
            TypeCategory::Textual => "textual",
            TypeCategory::Boolean => "boolean",
            TypeCategory::Temporal => "temporal",
        }
    }
}

impl Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
