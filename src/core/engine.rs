use crate::core::transform::{price_raise, remove_where, update_each};
use crate::core::{CatalogReport, ConfigProvider, Product, Result};

pub struct CatalogEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> CatalogEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Runs both catalog operations: removal of products at or above the
    /// cutoff, and the price raise over the original catalog.
    pub fn run(&self, catalog: Vec<Product>) -> Result<CatalogReport> {
        tracing::info!("Processing {} products", catalog.len());

        let cutoff = self.config.price_cutoff();
        tracing::debug!("Removing products with price >= {:.2}", cutoff);
        let below_cutoff = remove_where(catalog.clone(), |p| p.price >= cutoff);
        tracing::info!("{} products below cutoff", below_cutoff.len());

        let rate = self.config.raise_rate();
        tracing::debug!("Raising prices by factor {}", rate);
        let mut repriced = catalog;
        update_each(&mut repriced, price_raise(rate));

        Ok(CatalogReport {
            below_cutoff,
            repriced,
        })
    }
}
