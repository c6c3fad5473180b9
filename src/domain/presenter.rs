// src/domain/presenter.rs
//
// Presenter Canonicalization
//
// The club sheet spells presenter names however the person typing felt
// that week. This table folds the known variants onto one name.
//
// RULES:
// - Exact, case-sensitive lookup. No fuzzy matching.
// - Unknown spellings pass through untouched.
// - Absent or empty presenters stay absent.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Placeholder used by the sheet when nobody presented the movie.
pub const NO_PRESENTER: &str = "No-One";

/// Raw variant → canonical presenter.
pub const PRESENTER_ALIASES: &[(&str, &str)] = &[
    ("E.", "Eleonore"),
    ("E", "Eleonore"),
    ("Diego", "Diego K."),
    ("Dieg K", "Diego K."),
    ("Diego K", "Diego K."),
    ("Dieg K.", "Diego K."),
    ("Diego K.", "Diego K."),
    ("Ketels", "Diego K."),
    ("Cha", "Chachacha"),
    ("Cha-cha-cha", "Chachacha"),
    ("Chacha", "Chachacha"),
    ("chachacha", "Chachacha"),
    ("Juanita", "Juan"),
    ("Bonus", "HS"),
    ("Bonus HS", "HS"),
    ("again", NO_PRESENTER),
    ("null", NO_PRESENTER),
];

static ALIAS_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PRESENTER_ALIASES.iter().copied().collect());

/// Canonical spelling of a presenter label, or the label itself if unmapped.
pub fn canonical_presenter(raw: &str) -> &str {
    ALIAS_TABLE.get(raw).copied().unwrap_or(raw)
}

/// Canonicalize an optional presenter field.
pub fn canonicalize_presenter(raw: Option<&str>) -> Option<String> {
    raw.filter(|name| !name.is_empty())
        .map(|name| canonical_presenter(name).to_string())
}

/// True when canonicalization rewrites `raw` to a different string.
pub fn is_rewritten(raw: &str) -> bool {
    canonical_presenter(raw) != raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_variants_map_to_canonical() {
        assert_eq!(canonical_presenter("E."), "Eleonore");
        assert_eq!(canonical_presenter("E"), "Eleonore");
        assert_eq!(canonical_presenter("Ketels"), "Diego K.");
        assert_eq!(canonical_presenter("Dieg K."), "Diego K.");
        assert_eq!(canonical_presenter("Cha-cha-cha"), "Chachacha");
        assert_eq!(canonical_presenter("Juanita"), "Juan");
        assert_eq!(canonical_presenter("Bonus HS"), "HS");
        assert_eq!(canonical_presenter("again"), "No-One");
        assert_eq!(canonical_presenter("null"), "No-One");
    }

    #[test]
    fn test_canonical_form_is_identity() {
        assert_eq!(canonical_presenter("Diego K."), "Diego K.");
        assert!(!is_rewritten("Diego K."));
        assert!(is_rewritten("Diego"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(canonical_presenter("CHACHACHA"), "CHACHACHA");
        assert_eq!(canonical_presenter("e."), "e.");
        assert_eq!(canonical_presenter("Diego  K."), "Diego  K.");
    }

    #[test]
    fn test_idempotent_over_table() {
        for (raw, _) in PRESENTER_ALIASES {
            let once = canonical_presenter(raw);
            assert_eq!(canonical_presenter(once), once, "not idempotent for {raw}");
        }
    }

    #[test]
    fn test_absent_presenter_stays_absent() {
        assert_eq!(canonicalize_presenter(None), None);
        assert_eq!(canonicalize_presenter(Some("")), None);
        assert_eq!(
            canonicalize_presenter(Some("Chacha")),
            Some("Chachacha".to_string())
        );
        assert_eq!(
            canonicalize_presenter(Some("Someone New")),
            Some("Someone New".to_string())
        );
    }
}
