pub mod builtin;
pub mod schema;

use crate::error::EstimatorError;
use schema::{PriceBook, ScopeCatalog};
use std::collections::HashSet;
use std::path::Path;

/// Load a scope catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<ScopeCatalog, EstimatorError> {
    let content = read_config(path)?;
    let catalog: ScopeCatalog =
        serde_json::from_str(&content).map_err(|e| EstimatorError::CatalogLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Parse a scope catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<ScopeCatalog, EstimatorError> {
    let catalog: ScopeCatalog = serde_json::from_str(json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate that a scope catalog is well-formed.
pub fn validate_catalog(catalog: &ScopeCatalog) -> Result<(), EstimatorError> {
    if catalog.name.trim().is_empty() {
        return Err(EstimatorError::CatalogInvalid(
            "catalog name must not be empty".into(),
        ));
    }

    if catalog.version.trim().is_empty() {
        return Err(EstimatorError::CatalogInvalid(
            "catalog version must not be empty".into(),
        ));
    }

    if catalog.scopes.is_empty() {
        return Err(EstimatorError::CatalogInvalid(
            "scopes must not be empty".into(),
        ));
    }

    let mut seen_ids = HashSet::new();
    for scope in &catalog.scopes {
        if scope.id.trim().is_empty() {
            return Err(EstimatorError::CatalogInvalid(format!(
                "scope '{}' has an empty id",
                scope.title
            )));
        }

        if !seen_ids.insert(scope.id.as_str()) {
            return Err(EstimatorError::CatalogInvalid(format!(
                "duplicate scope id '{}'",
                scope.id
            )));
        }

        if scope.title.trim().is_empty() {
            return Err(EstimatorError::CatalogInvalid(format!(
                "scope '{}' has an empty title",
                scope.id
            )));
        }

        if scope.keywords.is_empty() {
            return Err(EstimatorError::CatalogInvalid(format!(
                "scope '{}' has no keywords",
                scope.id
            )));
        }

        for keyword in &scope.keywords {
            if keyword.trim().is_empty() {
                return Err(EstimatorError::CatalogInvalid(format!(
                    "scope '{}' has an empty keyword",
                    scope.id
                )));
            }
            // Documents are lowercased before matching, so an uppercase keyword can never match.
            if *keyword != keyword.to_lowercase() {
                return Err(EstimatorError::CatalogInvalid(format!(
                    "scope '{}' keyword '{}' must be lowercase",
                    scope.id, keyword
                )));
            }
        }
    }

    Ok(())
}

/// Load a price book from a JSON file.
pub fn load_price_book(path: &Path) -> Result<PriceBook, EstimatorError> {
    let content = read_config(path)?;
    let book: PriceBook =
        serde_json::from_str(&content).map_err(|e| EstimatorError::CatalogLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_price_book(&book)?;
    Ok(book)
}

/// Parse a price book from a JSON string (no file path context).
pub fn parse_price_book_str(json: &str) -> Result<PriceBook, EstimatorError> {
    let book: PriceBook = serde_json::from_str(json)?;
    validate_price_book(&book)?;
    Ok(book)
}

/// Validate that a price book is well-formed.
pub fn validate_price_book(book: &PriceBook) -> Result<(), EstimatorError> {
    if book.prices.is_empty() {
        return Err(EstimatorError::PriceBookInvalid(
            "prices must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for price in &book.prices {
        if price.scope.trim().is_empty() {
            return Err(EstimatorError::PriceBookInvalid(
                "price scope must not be empty".into(),
            ));
        }

        if !seen.insert(crate::pricing::scope_key(&price.scope)) {
            return Err(EstimatorError::PriceBookInvalid(format!(
                "duplicate price for scope '{}'",
                price.scope
            )));
        }

        if price.unit_cost.is_sign_negative() {
            return Err(EstimatorError::PriceBookInvalid(format!(
                "scope '{}' has a negative unit cost",
                price.scope
            )));
        }
    }

    Ok(())
}

fn read_config(path: &Path) -> Result<String, EstimatorError> {
    std::fs::read_to_string(path).map_err(|e| EstimatorError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
