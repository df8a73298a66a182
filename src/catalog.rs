//! Catalog Data
//!
//! Attribute records for the products listed on the page.

use crate::models::ProductAttrs;

const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

/// Parse the embedded catalog
pub fn load_catalog() -> Result<Vec<ProductAttrs>, String> {
    parse_catalog(CATALOG_JSON)
}

fn parse_catalog(raw: &str) -> Result<Vec<ProductAttrs>, String> {
    serde_json::from_str(raw).map_err(|e| e.to_string())
}
