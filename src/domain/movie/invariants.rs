// src/domain/movie/invariants.rs

use super::entity::MovieRecord;
use crate::domain::{DomainError, DomainResult};

/// Validates MovieRecord invariants.
///
/// Loading never rejects a record; a failed check is reported and the
/// record is kept so aggregates still reflect the whole sheet.
pub fn validate_movie(movie: &MovieRecord) -> DomainResult<()> {
    if !movie.has_title() {
        return Err(DomainError::InvariantViolation(format!(
            "Movie in season '{}' has no title",
            movie.season
        )));
    }
    Ok(())
}

/// Invariants that hold for every normalized MovieRecord:
///
/// 1. Season is always a string (possibly empty)
/// 2. Duration is a non-negative whole number of minutes
/// 3. Presenter is canonical, "No-One", an unmapped original, or absent
/// 4. Rating is either a finite percentage or absent
/// 5. Title should be non-empty (reported, not enforced)
