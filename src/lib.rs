pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::seed::SeedConfig;
pub use core::{Catalog, CatalogReport};
pub use domain::{Book, BookKind, User};
pub use utils::error::{CatalogError, Result};
