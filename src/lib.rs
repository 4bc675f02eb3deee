pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{engine::CatalogEngine, multicast::Multicast};
pub use domain::model::{CatalogReport, Product};
pub use utils::error::{CatalogError, Result};
