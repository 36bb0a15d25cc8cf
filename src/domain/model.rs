use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Filter text meaning "no filtering".
pub const ALL_STATES: &str = "All";

/// Codes offered by the state selector: the fifty states plus DC.
pub const KNOWN_STATE_CODES: [&str; 51] = [
    "AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "IA", "ID", "IL",
    "IN", "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT", "NC", "ND", "NE",
    "NH", "NJ", "NM", "NV", "NY", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VA", "VT", "WA", "WI", "WV", "WY",
];

/// One city: name, two-letter state code and population.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub state: String,
    pub population: u64,
}

impl CityRecord {
    pub fn new(name: impl Into<String>, state: impl Into<String>, population: u64) -> Self {
        Self {
            name: name.into(),
            state: state.into(),
            population,
        }
    }

    /// Name first, then state, both compared byte-wise.
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.state.cmp(&other.state))
    }
}

impl fmt::Display for CityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, ({})", self.name, self.state, self.population)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum StateFilter {
    #[default]
    All,
    State(String),
}

impl StateFilter {
    pub fn state(code: impl Into<String>) -> Self {
        Self::State(code.into())
    }

    pub fn matches(&self, record: &CityRecord) -> bool {
        match self {
            Self::All => true,
            Self::State(code) => record.state == *code,
        }
    }

    pub fn is_known(&self) -> bool {
        match self {
            Self::All => true,
            Self::State(code) => KNOWN_STATE_CODES.contains(&code.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_STATES,
            Self::State(code) => code,
        }
    }

    /// Selector entries: "All" followed by every known code.
    pub fn choices() -> impl Iterator<Item = &'static str> {
        std::iter::once(ALL_STATES).chain(KNOWN_STATE_CODES)
    }
}

impl From<&str> for StateFilter {
    fn from(value: &str) -> Self {
        if value == ALL_STATES {
            Self::All
        } else {
            Self::State(value.to_string())
        }
    }
}

impl From<String> for StateFilter {
    fn from(value: String) -> Self {
        if value == ALL_STATES {
            Self::All
        } else {
            Self::State(value)
        }
    }
}

impl From<StateFilter> for String {
    fn from(value: StateFilter) -> Self {
        match value {
            StateFilter::All => ALL_STATES.to_string(),
            StateFilter::State(code) => code,
        }
    }
}

impl FromStr for StateFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for StateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    #[serde(alias = "name")]
    #[cfg_attr(feature = "cli", value(alias = "name"))]
    ByName,
    #[serde(alias = "population")]
    #[cfg_attr(feature = "cli", value(alias = "population"))]
    ByPopulation,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByName => f.write_str("by-name"),
            Self::ByPopulation => f.write_str("by-population"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

/// What the shell has selected. Input to the pipeline, never owned by it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub state: StateFilter,
    pub sort: SortKey,
}

impl ViewState {
    pub fn new(state: impl Into<StateFilter>, sort: SortKey) -> Self {
        Self {
            state: state.into(),
            sort,
        }
    }
}
