pub mod catalog;
pub mod export;
pub mod filter;
pub mod format;
pub mod parser;
pub mod sort;

pub use crate::domain::model::{CityRecord, OutputFormat, SortKey, StateFilter, ViewState};
pub use crate::domain::ports::{ConfigProvider, RecordSource};
pub use crate::utils::error::Result;
