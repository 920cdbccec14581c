use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::info;

use crate::{catalog::{CatalogError, ColumnSource}, RawColumnSpec};

/// Column declarations of a set of tables, already carved out of their DDL.
///
/// Table names are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tables: IndexMap<String, Vec<RawColumnSpec>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table(&mut self, name: &str, columns: Vec<RawColumnSpec>) {
        self.tables.insert(name.to_ascii_lowercase(), columns);
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Build a catalog from `{ "<table>": [ <column row>, ... ], ... }`.
    ///
    /// Column rows use the `RawColumnSpec` shape, including SQLite
    /// `PRAGMA table_info` output.
    pub fn from_json(json_value: Value) -> Result<Self, CatalogError> {
        let Value::Object(tables) = json_value else {
            return Err(CatalogError::InvalidShape("catalog root must be a JSON object".to_string()));
        };

        let mut catalog = Catalog::new();
        for (name, columns) in tables {
            if !columns.is_array() {
                return Err(CatalogError::InvalidShape(format!("columns of table {} must be a JSON array", name)));
            }
            let columns: Vec<RawColumnSpec> = serde_json::from_value(columns)?;
            catalog.add_table(&name, columns);
        }

        Ok(catalog)
    }

    pub async fn load_from_file(file_path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file_path = file_path.as_ref();

        let file_content = tokio::fs::read_to_string(file_path).await
            .map_err(|source| CatalogError::Io { path: file_path.display().to_string(), source })?;
        let json_value = serde_json::from_str::<Value>(&file_content)?;
        let catalog = Catalog::from_json(json_value)?;

        info!(path = %file_path.display(), tables = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

impl ColumnSource for Catalog {
    fn columns(&self, table: &str) -> Option<Vec<RawColumnSpec>> {
        self.tables.get(&table.to_ascii_lowercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::{fs::File, io::Write};
    use tempfile::TempDir;

    fn sample() -> Value {
        json!({
            "Test": [
                { "cid": 0, "name": "foo", "type": "INTEGER", "notnull": 0, "dflt_value": "42", "pk": 0 },
                { "cid": 1, "name": "bar", "type": "TEXT", "notnull": 0, "dflt_value": null, "pk": 0 }
            ]
        })
    }

    #[test]
    fn test_from_json_case_insensitive_lookup() {
        let catalog = Catalog::from_json(sample()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.table_names().collect::<Vec<_>>(), vec!["test"]);

        let columns = catalog.columns("TEST").unwrap();
        assert_eq!(columns, vec![
            RawColumnSpec::new("foo", "INTEGER", Some("42")),
            RawColumnSpec::new("bar", "TEXT", None),
        ]);
        assert!(catalog.columns("other").is_none());
    }

    #[test]
    fn test_from_json_rejects_non_object_root() {
        match Catalog::from_json(json!([1, 2])) {
            Err(CatalogError::InvalidShape(message)) => assert!(message.contains("object")),
            _ => panic!(),
        }
    }

    #[test]
    fn test_from_json_rejects_non_array_columns() {
        match Catalog::from_json(json!({ "t": { "name": "foo" } })) {
            Err(CatalogError::InvalidShape(message)) => assert!(message.contains("table t")),
            _ => panic!(),
        }
    }

    #[test]
    fn test_from_json_rejects_column_without_name() {
        assert!(matches!(
            Catalog::from_json(json!({ "t": [ { "type": "INT" } ] })),
            Err(CatalogError::Json(_))
        ));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("catalog.json");
        let mut file = File::create(&file_path).unwrap();
        file.write_all(sample().to_string().as_bytes()).unwrap();

        let catalog = Catalog::load_from_file(&file_path).await.unwrap();
        assert_eq!(catalog.columns("test").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing.json");

        match Catalog::load_from_file(&file_path).await {
            Err(err @ CatalogError::Io { .. }) => assert!(err.to_string().contains("missing.json")),
            _ => panic!(),
        }
    }

    #[tokio::test]
    async fn test_load_from_invalid_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("broken.json");
        std::fs::write(&file_path, "{ not json").unwrap();

        assert!(matches!(Catalog::load_from_file(&file_path).await, Err(CatalogError::Json(_))));
    }
}
