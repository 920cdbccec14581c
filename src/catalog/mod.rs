pub mod catalog_error;
pub use catalog_error::*;

pub mod memory_catalog;
pub use memory_catalog::*;

use crate::RawColumnSpec;

/// Supplier of per-column declarations, such as a database driver running
/// `PRAGMA table_info`.
pub trait ColumnSource {
    /// Columns of `table` in declaration order, or `None` if the table is
    /// unknown.
    fn columns(&self, table: &str) -> Option<Vec<RawColumnSpec>>;
}
