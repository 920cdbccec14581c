use std::fmt::Display;

/// Failure to obtain column declarations from a catalog snapshot.
#[derive(Debug)]
pub enum CatalogError {
    Io { path: String, source: std::io::Error },
    Json(serde_json::Error),
    InvalidShape(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io { path, source } => write!(f, "CatalogError: could not read {}: {}", path, source),
            CatalogError::Json(err) => write!(f, "CatalogError: invalid JSON: {}", err),
            CatalogError::InvalidShape(message) => write!(f, "CatalogError: {}", message),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            CatalogError::Json(err) => Some(err),
            CatalogError::InvalidShape(_) => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Json(err)
    }
}
