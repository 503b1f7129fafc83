use crate::catalog::{Book, Catalog};
use crate::error::CatalogError;
use std::fs;
use std::path::Path;

// =============================================================================
// Catalog files
// =============================================================================

/// Reads catalogs from JSON or TOML.
///
/// JSON accepts either a bare array of books or `{ "books": [...] }`.
/// TOML uses `[[books]]` tables.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn parse_json(content: &str) -> Result<Catalog, CatalogError> {
        if content.trim_start().starts_with('[') {
            let books: Vec<Book> = serde_json::from_str(content)?;
            Ok(Catalog::from(books))
        } else {
            Ok(serde_json::from_str(content)?)
        }
    }

    pub fn parse_toml(content: &str) -> Result<Catalog, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
        let content = fs::read_to_string(path).map_err(|err| CatalogError::io(path, err))?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::parse_json(&content),
            Some("toml") => Self::parse_toml(&content),
            Some(other) => Err(CatalogError::UnsupportedFormat {
                extension: other.to_string(),
            }),
            None => {
                let trimmed = content.trim_start();
                if trimmed.starts_with('{') || trimmed.starts_with('[') {
                    Self::parse_json(&content)
                } else {
                    Self::parse_toml(&content)
                }
            }
        }
    }
}
