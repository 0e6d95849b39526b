use crate::catalog::schema::{PriceBook, ScopeCatalog};
use crate::error::EstimatorError;

const TRADES_JSON: &str = include_str!("../../../../catalogs/trades.json");
const CSI_JSON: &str = include_str!("../../../../catalogs/csi.json");
const PRICES_DEFAULT_JSON: &str = include_str!("../../../../catalogs/prices-default.json");

/// Available predefined scope catalogs.
pub const PRESETS: &[&str] = &["trades", "csi"];

/// Catalog used when no preset or custom catalog is given.
pub const DEFAULT_PRESET: &str = "trades";

/// Available predefined price books.
pub const PRICE_PRESETS: &[&str] = &["default"];

/// Load a predefined scope catalog by name.
pub fn load_preset(name: &str) -> Result<ScopeCatalog, EstimatorError> {
    let json = match name {
        "trades" => TRADES_JSON,
        "csi" => CSI_JSON,
        _ => {
            return Err(EstimatorError::CatalogInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let catalog: ScopeCatalog = serde_json::from_str(json)?;
    Ok(catalog)
}

/// Load a predefined price book by name.
pub fn load_price_preset(name: &str) -> Result<PriceBook, EstimatorError> {
    match name {
        "default" => {
            let book: PriceBook = serde_json::from_str(PRICES_DEFAULT_JSON)?;
            Ok(book)
        }
        _ => Err(EstimatorError::PriceBookInvalid(format!(
            "unknown price preset '{}'. Available: {}",
            name,
            PRICE_PRESETS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{validate_catalog, validate_price_book};

    #[test]
    fn test_load_trades_preset() {
        let catalog = load_preset("trades").unwrap();
        let titles: Vec<&str> = catalog.scopes.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Doors and Hardware", "Slab Concrete", "Painting", "Drywall Package"]
        );
    }

    #[test]
    fn test_all_presets_valid() {
        for name in PRESETS {
            let catalog = load_preset(name).unwrap();
            validate_catalog(&catalog).unwrap();
        }
        for name in PRICE_PRESETS {
            let book = load_price_preset(name).unwrap();
            validate_price_book(&book).unwrap();
        }
    }

    #[test]
    fn test_csi_division_order() {
        let catalog = load_preset("csi").unwrap();
        let ids: Vec<&str> = catalog.scopes.iter().map(|s| s.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert!(ids.contains(&"08"));
    }

    #[test]
    fn test_default_preset_exists() {
        assert!(PRESETS.contains(&DEFAULT_PRESET));
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("xyz").is_err());
        assert!(load_price_preset("xyz").is_err());
    }
}
