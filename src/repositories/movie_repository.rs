// src/repositories/movie_repository.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::movie::RawMovieRecord;
use crate::error::AppResult;

/// Source of raw movie rows.
/// Implementations only read and deserialize; normalization happens in services.
#[cfg_attr(test, mockall::automock)]
pub trait MovieRepository: Send + Sync {
    fn list_all(&self) -> AppResult<Vec<RawMovieRecord>>;
}

/// Reads the club export: a JSON array of sheet rows.
pub struct JsonFileMovieRepository {
    path: PathBuf,
}

impl JsonFileMovieRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MovieRepository for JsonFileMovieRepository {
    fn list_all(&self) -> AppResult<Vec<RawMovieRecord>> {
        let contents = fs::read_to_string(&self.path)?;
        let records = serde_json::from_str(&contents)?;
        Ok(records)
    }
}

/// Rows held in memory, e.g. a dataset bundled with the host.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMovieRepository {
    records: Vec<RawMovieRecord>,
}

impl InMemoryMovieRepository {
    pub fn new(records: Vec<RawMovieRecord>) -> Self {
        Self { records }
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl MovieRepository for InMemoryMovieRepository {
    fn list_all(&self) -> AppResult<Vec<RawMovieRecord>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::io::Write;

    #[test]
    fn test_json_file_repository_reads_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"Title": "Brazil", "Season": 1}}, {{"Title": "Ran", "Presented by": "E."}}]"#
        )
        .unwrap();

        let repo = JsonFileMovieRepository::new(file.path());
        let rows = repo.list_all().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, serde_json::json!("Brazil"));
        assert_eq!(rows[1].presented_by, serde_json::json!("E."));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileMovieRepository::new(dir.path().join("movies.json"));

        assert!(matches!(repo.list_all(), Err(AppError::Io(_))));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let repo = InMemoryMovieRepository::from_json_str("{ not json");
        assert!(matches!(repo, Err(AppError::Serialization(_))));
    }

    #[test]
    fn test_in_memory_repository_returns_copies() {
        let repo = InMemoryMovieRepository::from_json_str(r#"[{"Title": "Heat"}]"#).unwrap();
        assert_eq!(repo.list_all().unwrap(), repo.list_all().unwrap());
    }
}
