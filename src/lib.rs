pub mod parser;

pub mod schema;
pub use schema::{AttributeDict, DefaultValue, RawColumnSpec, ResolvedAttribute, TypeCategory};

pub mod resolver;
pub use resolver::{classify, parse_default, resolve, AttributeResolver, ResolverConfig};

pub mod catalog;
pub use catalog::{Catalog, CatalogError, ColumnSource};
