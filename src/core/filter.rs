use crate::core::{CityRecord, StateFilter};

/// Keeps the records whose state equals the filter code, in input order.
/// `StateFilter::All` keeps everything; an unknown code keeps nothing.
pub fn filter_by_state<'a>(records: &'a [CityRecord], filter: &StateFilter) -> Vec<&'a CityRecord> {
    records.iter().filter(|record| filter.matches(record)).collect()
}
