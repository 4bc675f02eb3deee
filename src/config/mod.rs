use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite_number, validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pricelist")]
#[command(about = "A small catalog tool for filtering and repricing products")]
pub struct CliConfig {
    /// Products priced at or above this value are removed by the filter
    #[arg(long, default_value = "100.0")]
    pub cutoff: f64,

    /// Multiplicative price increase applied to every product
    #[arg(long, default_value = "1.10")]
    pub rate: f64,

    #[arg(long, help = "Render the report as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn price_cutoff(&self) -> f64 {
        self.cutoff
    }

    fn raise_rate(&self) -> f64 {
        self.rate
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_finite_number("cutoff", self.cutoff)?;
        validate_positive_number("rate", self.rate)?;
        Ok(())
    }
}
