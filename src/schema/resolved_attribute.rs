use serde::Serialize;

use crate::{DefaultValue, TypeCategory};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedAttribute {
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeCategory,
    #[serde(skip_serializing_if = "DefaultValue::is_unresolved")]
    pub default: DefaultValue,
}

impl ResolvedAttribute {
    pub fn new(name: &str, ty: TypeCategory, default: DefaultValue) -> Self {
        Self { name: name.to_string(), ty, default }
    }
}
