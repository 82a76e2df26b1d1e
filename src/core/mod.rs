pub mod catalog;
pub mod report;

pub use catalog::Catalog;
pub use report::CatalogReport;
pub use crate::utils::error::Result;
