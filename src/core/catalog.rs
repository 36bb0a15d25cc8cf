use crate::config::source::BundledSource;
use crate::core::export;
use crate::core::filter::filter_by_state;
use crate::core::format::format_records;
use crate::core::parser::parse_records;
use crate::core::sort::sort_records;
use crate::core::{CityRecord, OutputFormat, RecordSource, StateFilter, ViewState};
use crate::utils::error::Result;

/// The full city list, loaded once and never mutated afterwards.
///
/// Each selection change from the shell is one synchronous call to
/// [`CityCatalog::render`], which filters, sorts and formats a fresh listing.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    records: Vec<CityRecord>,
}

impl CityCatalog {
    pub fn new(records: Vec<CityRecord>) -> Self {
        Self { records }
    }

    pub fn load<S: RecordSource + ?Sized>(source: &S) -> Result<Self> {
        tracing::debug!("Reading city data from {}", source.describe());
        let text = source.read_to_string()?;
        let records = parse_records(&text)?;
        tracing::info!(
            "Loaded {} cities from {}",
            records.len(),
            source.describe()
        );
        Ok(Self::new(records))
    }

    /// The data set compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::load(&BundledSource)
    }

    pub fn records(&self) -> &[CityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn view(&self, view: &ViewState) -> Vec<&CityRecord> {
        if !view.state.is_known() {
            // Still answered with an empty listing rather than an error.
            tracing::warn!("State filter {:?} is not a known state code", view.state.as_str());
        }

        let filtered = filter_by_state(&self.records, &view.state);
        let sorted = sort_records(&filtered, view.sort);
        tracing::debug!(
            "View {} / {}: {} of {} cities",
            view.state,
            view.sort,
            sorted.len(),
            self.records.len()
        );
        sorted
    }

    pub fn render(&self, view: &ViewState) -> String {
        format_records(&self.view(view))
    }

    pub fn render_as(&self, view: &ViewState, format: OutputFormat) -> Result<String> {
        export::render(&self.view(view), format)
    }

    /// Distinct state codes present in the data, alphabetical.
    pub fn states_present(&self) -> Vec<&str> {
        let mut states: Vec<&str> = self.records.iter().map(|r| r.state.as_str()).collect();
        states.sort_unstable();
        states.dedup();
        states
    }

    /// Selector entries with their city counts: "All", every known code
    /// (`None` when the data has no cities there), then any codes found in
    /// the data that the selector does not know.
    pub fn state_choices(&self) -> Vec<(&str, Option<usize>)> {
        let present = self.states_present();
        let mut choices: Vec<(&str, Option<usize>)> = StateFilter::choices()
            .map(|choice| {
                let filter = StateFilter::from(choice);
                let count = (filter == StateFilter::All || present.contains(&choice))
                    .then(|| self.count_in(&filter));
                (choice, count)
            })
            .collect();

        for code in present {
            if !StateFilter::state(code).is_known() {
                choices.push((code, Some(self.count_in(&StateFilter::state(code)))));
            }
        }
        choices
    }

    pub fn count_in(&self, filter: &StateFilter) -> usize {
        self.records.iter().filter(|r| filter.matches(r)).count()
    }
}
