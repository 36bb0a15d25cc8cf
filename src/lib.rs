pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::source::{BundledSource, FileSource};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::catalog::CityCatalog;
pub use crate::domain::model::{CityRecord, OutputFormat, SortKey, StateFilter, ViewState};
pub use crate::utils::error::{CityError, Result};
