use crate::core::CityRecord;
use crate::utils::error::{CityError, Result};
use crate::utils::validation::is_state_code;

pub const FIELD_DELIMITER: &str = ", ";

/// Parses `<name>, <ST>, <population>` lines in file order.
///
/// Trailing blank lines are dropped. Any other malformed line, a blank one in
/// the middle included, aborts the whole parse.
pub fn parse_records(text: &str) -> Result<Vec<CityRecord>> {
    let lines: Vec<&str> = text.lines().collect();
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |last| last + 1);

    let records = lines[..end]
        .iter()
        .enumerate()
        .map(|(index, line)| parse_line(index + 1, line))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Parsed {} city records", records.len());
    Ok(records)
}

pub fn parse_line(line_number: usize, line: &str) -> Result<CityRecord> {
    if line.trim().is_empty() {
        return Err(CityError::parse(line_number, line, "blank line"));
    }

    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    let [name, state, population] = fields.as_slice() else {
        return Err(CityError::parse(
            line_number,
            line,
            format!("expected 3 fields separated by {:?}, found {}", FIELD_DELIMITER, fields.len()),
        ));
    };

    if name.is_empty() {
        return Err(CityError::parse(line_number, line, "city name is empty"));
    }

    if !is_state_code(state) {
        return Err(CityError::parse(
            line_number,
            line,
            format!("state {:?} is not a two-letter uppercase code", state),
        ));
    }

    let population = population.parse::<u64>().map_err(|e| {
        CityError::parse(
            line_number,
            line,
            format!("population {:?} is not a non-negative integer: {}", population, e),
        )
    })?;

    Ok(CityRecord::new(*name, *state, population))
}
