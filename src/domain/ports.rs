use crate::domain::model::{OutputFormat, ViewState};
use crate::utils::error::Result;
use std::path::Path;

/// Where the raw city list comes from. Read once at startup.
pub trait RecordSource {
    fn describe(&self) -> String;
    fn read_to_string(&self) -> Result<String>;
}

pub trait ConfigProvider {
    /// `None` means the bundled data set.
    fn data_path(&self) -> Option<&Path>;
    fn view_state(&self) -> ViewState;
    fn output_format(&self) -> OutputFormat;
}
