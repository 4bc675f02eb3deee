use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl fmt::Display for Product {
    /// Renders as `<name>, <price>` with the price always at two decimals,
    /// e.g. `Tv, 900.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {:.2}", self.name, self.price)
    }
}

/// Result of one engine run: the catalog after conditional removal, and the
/// original catalog after the price raise.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub below_cutoff: Vec<Product>,
    pub repriced: Vec<Product>,
}

impl CatalogReport {
    pub fn render_text(&self) -> String {
        let mut lines = vec!["Below cutoff:".to_string()];
        for product in &self.below_cutoff {
            lines.push(product.to_string());
        }
        lines.push("After price raise:".to_string());
        for product in &self.repriced {
            lines.push(product.to_string());
        }
        lines.join("\n")
    }

    pub fn render_json(&self) -> crate::utils::error::Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}
