use crate::core::format::format_records;
use crate::core::{CityRecord, OutputFormat};
use crate::utils::error::{CityError, Result};
use std::borrow::Borrow;

/// CSV with a `name,state,population` header and plain integer populations.
pub fn to_csv<R: Borrow<CityRecord>>(records: &[R]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record.borrow())?;
    }
    // An empty listing still gets its header row.
    if records.is_empty() {
        writer.write_record(["name", "state", "population"])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CityError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| CityError::ValidationError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

pub fn to_json<R: Borrow<CityRecord>>(records: &[R]) -> Result<String> {
    let borrowed: Vec<&CityRecord> = records.iter().map(|record| record.borrow()).collect();
    Ok(serde_json::to_string_pretty(&borrowed)?)
}

pub fn render<R: Borrow<CityRecord>>(records: &[R], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_records(records)),
        OutputFormat::Csv => to_csv(records),
        OutputFormat::Json => to_json(records),
    }
}
