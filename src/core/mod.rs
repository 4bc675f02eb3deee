pub mod engine;
pub mod multicast;
pub mod transform;

pub use crate::domain::model::{CatalogReport, Product};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
