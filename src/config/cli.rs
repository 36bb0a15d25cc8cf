use crate::config::toml_config::TomlConfig;
use crate::core::{ConfigProvider, OutputFormat, SortKey, StateFilter, ViewState};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_state_filter, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Flags left unset fall back to the TOML file, then to the defaults
/// (all states, sorted by name, text output).
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "city-roster")]
#[command(about = "List large US cities, filtered by state and sorted by name or population")]
pub struct CliConfig {
    /// City data file (`<name>, <ST>, <population>` per line); defaults to the bundled list
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Two-letter state code, or "All"
    #[arg(long)]
    pub state: Option<String>,

    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the state selector choices and the states present in the data
    #[arg(long)]
    pub list_states: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Fills every flag the user did not pass from the TOML file.
    pub fn merge_toml(&mut self, file: &TomlConfig) {
        if self.data.is_none() {
            self.data = file.data_path().map(Path::to_path_buf);
        }
        if self.state.is_none() {
            self.state = file.view.state.clone();
        }
        if self.sort.is_none() {
            self.sort = file.view.sort;
        }
        if self.format.is_none() {
            self.format = file.output.format;
        }
    }
}

impl ConfigProvider for CliConfig {
    fn data_path(&self) -> Option<&Path> {
        self.data.as_deref()
    }

    fn view_state(&self) -> ViewState {
        ViewState {
            state: self
                .state
                .as_deref()
                .map(StateFilter::from)
                .unwrap_or_default(),
            sort: self.sort.unwrap_or_default(),
        }
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.data {
            validate_path("--data", &path.to_string_lossy())?;
        }
        if let Some(state) = &self.state {
            validate_state_filter("--state", state)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["city-roster"]);
        assert_eq!(config.data_path(), None);
        assert_eq!(config.view_state(), ViewState::default());
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from([
            "city-roster",
            "--data",
            "my-cities.txt",
            "--state",
            "NY",
            "--sort",
            "by-population",
            "--format",
            "csv",
            "-v",
        ]);
        assert_eq!(config.data_path(), Some(Path::new("my-cities.txt")));
        assert_eq!(config.view_state(), ViewState::new("NY", SortKey::ByPopulation));
        assert_eq!(config.output_format(), OutputFormat::Csv);
        assert!(config.verbose);
    }

    #[test]
    fn test_sort_alias() {
        let config = CliConfig::parse_from(["city-roster", "--sort", "population"]);
        assert_eq!(config.sort, Some(SortKey::ByPopulation));
    }

    #[test]
    fn test_malformed_states_pass_validation() {
        for state in ["ny", "all", "NYC", "ZZ"] {
            let config = CliConfig::parse_from(["city-roster", "--state", state]);
            assert!(config.validate().is_ok(), "{}", state);
            assert_eq!(config.view_state().state, StateFilter::state(state));
        }

        let config = CliConfig::parse_from(["city-roster", "--state", ""]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_flags_win_over_toml() {
        let file = TomlConfig::from_toml_str(
            "[data]\npath = \"file.txt\"\n[view]\nstate = \"WA\"\nsort = \"by-population\"\n[output]\nformat = \"json\"\n",
        )
        .unwrap();
        let mut config = CliConfig::parse_from(["city-roster", "--state", "CA"]);
        config.merge_toml(&file);

        assert_eq!(config.data_path(), Some(Path::new("file.txt")));
        assert_eq!(config.view_state(), ViewState::new("CA", SortKey::ByPopulation));
        assert_eq!(config.output_format(), OutputFormat::Json);
    }
}
