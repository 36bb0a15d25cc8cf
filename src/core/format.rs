use crate::core::CityRecord;
use std::borrow::Borrow;

pub const NAME_WIDTH: usize = 28;
pub const POPULATION_WIDTH: usize = 10;
pub const COLUMN_SEPARATOR: &str = " | ";

/// Renders one aligned line per record, joined by `\n` with no trailing
/// newline. An empty slice renders as an empty string.
pub fn format_records<R: Borrow<CityRecord>>(records: &[R]) -> String {
    records
        .iter()
        .map(|record| format_record(record.borrow()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `name` padded to at least 28 columns, the state code, then the grouped
/// population right-aligned in 10 columns. Long names are not truncated.
pub fn format_record(record: &CityRecord) -> String {
    format!(
        "{:<name_width$}{sep}{}{sep}{:>pop_width$}",
        record.name,
        record.state,
        group_thousands(record.population),
        sep = COLUMN_SEPARATOR,
        name_width = NAME_WIDTH,
        pop_width = POPULATION_WIDTH,
    )
}

/// `3857799` -> `"3,857,799"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
