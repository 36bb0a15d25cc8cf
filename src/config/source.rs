use crate::core::RecordSource;
use crate::utils::error::{CityError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The city list shipped inside the binary.
pub const BUNDLED_CITIES: &str = include_str!("../../data/cities.txt");

#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl RecordSource for BundledSource {
    fn describe(&self) -> String {
        "bundled city list".to_string()
    }

    fn read_to_string(&self) -> Result<String> {
        Ok(BUNDLED_CITIES.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_to_string(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|source| CityError::SourceRead {
            source_name: self.describe(),
            source,
        })
    }
}

/// Picks the file source when a path is given, otherwise the bundled list.
pub fn source_for(data_path: Option<&Path>) -> Box<dyn RecordSource> {
    match data_path {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(BundledSource),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_bundled_source_is_not_empty() {
        let text = BundledSource.read_to_string().unwrap();
        assert!(text.starts_with("New York, NY, 8336697"));
    }

    #[test]
    fn test_file_source_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Troy, NY, 49946\n").unwrap();

        let source = FileSource::new(file.path());
        assert_eq!(source.read_to_string().unwrap(), "Troy, NY, 49946\n");
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let source = FileSource::new("/definitely/not/here/cities.txt");
        let err = source.read_to_string().unwrap_err();
        assert!(matches!(err, CityError::SourceRead { .. }));
        assert!(err.to_string().contains("/definitely/not/here/cities.txt"));
    }

    #[test]
    fn test_source_for() {
        assert_eq!(source_for(None).describe(), "bundled city list");
        assert_eq!(
            source_for(Some(Path::new("cities.txt"))).describe(),
            "cities.txt"
        );
    }
}
