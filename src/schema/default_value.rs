use ordered_float::NotNan;
use serde::{Serialize, Serializer};

use crate::TypeCategory;

/// Default value of a column as read from its declaration.
///
/// `Null` is an explicit `DEFAULT NULL` (or no default clause at all).
/// `Unresolved` marks a default that exists but is not a literal this crate
/// can evaluate; it is skipped when an attribute is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DefaultValue {
    Unresolved,
    #[default]
    Null,
    Number(NotNan<f64>),
    Text(String),
    Bool(bool),
}

impl DefaultValue {
    pub fn is_null(&self) -> bool {
        matches!(self, DefaultValue::Null)
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, DefaultValue::Unresolved)
    }

    /// Collapse `Unresolved` into `Null`.
    pub fn fold_unresolved(self) -> DefaultValue {
        match self {
            DefaultValue::Unresolved => DefaultValue::Null,
            other => other,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DefaultValue::Number(n) => Some(n.into_inner()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DefaultValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DefaultValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Concrete values must agree with the column's category; `Null` and
    /// `Unresolved` fit any category.
    pub fn fits(&self, category: TypeCategory) -> bool {
        match self {
            DefaultValue::Unresolved | DefaultValue::Null => true,
            DefaultValue::Number(_) => category == TypeCategory::Numeric,
            DefaultValue::Text(_) => category == TypeCategory::Textual,
            DefaultValue::Bool(_) => category == TypeCategory::Boolean,
        }
    }
}

impl Serialize for DefaultValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DefaultValue::Unresolved | DefaultValue::Null => serializer.serialize_none(),
            DefaultValue::Number(n) => serializer.serialize_f64(n.into_inner()),
            DefaultValue::Text(s) => serializer.serialize_str(s),
            DefaultValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}
