use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A keyword catalog: the fixed list of scopes a document is checked against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeCatalog {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Scopes in report order.
    pub scopes: Vec<ScopeDef>,
}

/// One scope (trade or CSI division) and the keywords that detect it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeDef {
    pub id: String,
    pub title: String,
    /// Lowercase substrings; any one of them marks the scope as found.
    pub keywords: Vec<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Unit costs used to price takeoff quantities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBook {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub currency: String,
    pub prices: Vec<PriceDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceDef {
    /// Schedule scope this price applies to (e.g. "Doors"), matched case-insensitively.
    pub scope: String,
    pub unit: String,
    /// Cost per unit (as string for exact decimal).
    pub unit_cost: Decimal,
    #[serde(default)]
    pub note: Option<String>,
}
