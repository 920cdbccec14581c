use tracing::debug;

use crate::{
    catalog::ColumnSource,
    parser::DefaultLiteral,
    resolver::ResolverConfig,
    AttributeDict,
    DefaultValue,
    RawColumnSpec,
    ResolvedAttribute,
    TypeCategory,
};

/// Resolves column declarations into typed attributes.
///
/// Stateless apart from its configuration; every column is resolved on its
/// own.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeResolver {
    config: ResolverConfig,
}

impl AttributeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ResolverConfig {
        self.config
    }

    pub fn resolve_column(&self, column: &RawColumnSpec) -> ResolvedAttribute {
        let ty = TypeCategory::classify(&column.raw_type);
        let mut default = DefaultLiteral::parse(ty, column.raw_default.as_deref());

        if default.is_unresolved() {
            debug!(
                column = %column.name,
                category = %ty,
                raw_default = column.raw_default.as_deref().unwrap_or_default(),
                "default is not a static literal"
            );
            if !self.config.report_unresolved {
                default = DefaultValue::Null;
            }
        }

        ResolvedAttribute::new(&column.name, ty, default)
    }

    /// Resolve every column, keeping input order.
    pub fn resolve(&self, columns: &[RawColumnSpec]) -> AttributeDict {
        columns.iter().map(|column| self.resolve_column(column)).collect()
    }

    /// Resolve the columns `source` reports for `table`.
    pub fn resolve_table(&self, source: &impl ColumnSource, table: &str) -> Option<AttributeDict> {
        let columns = source.columns(table)?;
        Some(self.resolve(&columns))
    }
}

/// Category of a declared column type.
pub fn classify(raw_type: &str) -> TypeCategory {
    TypeCategory::classify(raw_type)
}

/// Default value of a column; defaults that cannot be evaluated are `Null`.
pub fn parse_default(category: TypeCategory, raw_default: Option<&str>) -> DefaultValue {
    DefaultLiteral::parse(category, raw_default).fold_unresolved()
}

/// Resolve columns with the default configuration.
pub fn resolve(columns: &[RawColumnSpec]) -> AttributeDict {
    AttributeResolver::new().resolve(columns)
}
