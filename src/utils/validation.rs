use crate::utils::error::{CityError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn is_state_code(value: &str) -> bool {
    value.len() == 2 && value.bytes().all(|b| b.is_ascii_uppercase())
}

/// Any non-empty filter is accepted. Codes that are not "All" or a known
/// state are still valid selections; they list no cities.
pub fn validate_state_filter(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data.path", "data/cities.txt").is_ok());
        assert!(validate_path("data.path", "").is_err());
        assert!(validate_path("data.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_state_filter() {
        assert!(validate_state_filter("view.state", "All").is_ok());
        assert!(validate_state_filter("view.state", "NY").is_ok());
        // Unknown or malformed codes pass; they simply match nothing.
        assert!(validate_state_filter("view.state", "ZZ").is_ok());
        assert!(validate_state_filter("view.state", "ny").is_ok());
        assert!(validate_state_filter("view.state", "all").is_ok());
        assert!(validate_state_filter("view.state", "NYC").is_ok());
        assert!(validate_state_filter("view.state", "").is_err());
        assert!(validate_state_filter("view.state", " ").is_err());
    }

    #[test]
    fn test_is_state_code() {
        assert!(is_state_code("CA"));
        assert!(!is_state_code("C"));
        assert!(!is_state_code("Ca"));
        assert!(!is_state_code("C1"));
    }
}
