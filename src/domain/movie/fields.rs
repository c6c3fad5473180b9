// src/domain/movie/fields.rs
//
// Field Parsers
//
// Raw dataset fields arrive as whatever the spreadsheet export produced:
// numbers, strings with units, percentages, nulls. Every parser here is
// total and degrades to a neutral value instead of failing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Number, Value};

/// Leading integer, `parseInt` style: optional whitespace, optional sign, digits.
static INTEGER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?)(\d+)").expect("valid integer prefix pattern"));

/// Leading decimal number, `parseFloat` style.
static DECIMAL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("valid decimal prefix pattern")
});

/// Parse a duration field into whole minutes.
///
/// `"120 min"` gives 120, numbers truncate toward zero, negatives clamp
/// to 0 and anything non-numeric gives 0.
pub fn parse_duration(raw: &Value) -> u32 {
    match raw {
        Value::Number(number) => {
            if let Some(value) = number.as_u64() {
                saturate(value)
            } else if let Some(value) = number.as_f64() {
                if value.is_finite() && value > 0.0 {
                    saturate(value.trunc() as u64)
                } else {
                    0
                }
            } else {
                0
            }
        }
        Value::String(text) => parse_duration_text(text),
        _ => 0,
    }
}

/// Text variant of [`parse_duration`].
pub fn parse_duration_text(text: &str) -> u32 {
    let Some(captures) = INTEGER_PREFIX.captures(text) else {
        return 0;
    };

    if &captures[1] == "-" {
        return 0;
    }

    // Only digits are captured, so a parse failure means overflow.
    captures[2].parse::<u64>().map(saturate).unwrap_or(u32::MAX)
}

/// Parse a `"NN%"` rating into a percentage.
///
/// Returns `None` when the field is absent or carries no leading number,
/// so callers can keep it out of averages.
pub fn parse_rating(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(number) => number.as_f64().filter(|v| v.is_finite()),
        Value::String(text) => parse_rating_text(text),
        _ => None,
    }
}

/// Text variant of [`parse_rating`].
pub fn parse_rating_text(text: &str) -> Option<f64> {
    let head = text.split('%').next().unwrap_or_default();
    let captures = DECIMAL_PREFIX.captures(head)?;
    captures[1].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce a season value to its string label. Missing seasons become `""`.
pub fn coerce_season(raw: &Value) -> String {
    match raw {
        Value::String(text) => text.clone(),
        Value::Number(number) => number_text(number),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}

/// Read an optional free-text field. Empty strings count as absent.
pub fn text_field(raw: &Value) -> Option<String> {
    match raw {
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number_text(number)),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Render a number the way the sheet shows it: whole floats drop the `.0`.
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e21 => {
            // + 0.0 folds -0.0 into 0
            format!("{:.0}", value + 0.0)
        }
        _ => number.to_string(),
    }
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_duration_with_unit_suffix() {
        assert_eq!(parse_duration(&json!("142 min")), 142);
        assert_eq!(parse_duration(&json!("  95")), 95);
        assert_eq!(parse_duration(&json!("+88min")), 88);
    }

    #[test]
    fn test_duration_missing_or_garbage_is_zero() {
        assert_eq!(parse_duration(&Value::Null), 0);
        assert_eq!(parse_duration(&json!("")), 0);
        assert_eq!(parse_duration(&json!("n/a")), 0);
        assert_eq!(parse_duration(&json!("min 90")), 0);
        assert_eq!(parse_duration(&json!(true)), 0);
        assert_eq!(parse_duration(&json!(["90"])), 0);
    }

    #[test]
    fn test_duration_numbers_truncate() {
        assert_eq!(parse_duration(&json!(100)), 100);
        assert_eq!(parse_duration(&json!(99.9)), 99);
        assert_eq!(parse_duration(&json!("1.5")), 1);
    }

    #[test]
    fn test_duration_negative_clamps_to_zero() {
        assert_eq!(parse_duration(&json!(-30)), 0);
        assert_eq!(parse_duration(&json!(-2.5)), 0);
        assert_eq!(parse_duration(&json!("-45 min")), 0);
    }

    #[test]
    fn test_duration_overflow_saturates() {
        assert_eq!(parse_duration(&json!("99999999999999999999999")), u32::MAX);
        assert_eq!(parse_duration(&json!(5_000_000_000u64)), u32::MAX);
    }

    #[test]
    fn test_rating_percent() {
        assert_eq!(parse_rating(&json!("87%")), Some(87.0));
        assert_eq!(parse_rating(&json!("92.5% (Tomatometer)")), Some(92.5));
        assert_eq!(parse_rating(&json!(" 71")), Some(71.0));
        assert_eq!(parse_rating(&json!(64)), Some(64.0));
    }

    #[test]
    fn test_rating_unparseable_is_none() {
        assert_eq!(parse_rating(&Value::Null), None);
        assert_eq!(parse_rating(&json!("")), None);
        assert_eq!(parse_rating(&json!("N/A")), None);
        assert_eq!(parse_rating(&json!("%87")), None);
    }

    #[test]
    fn test_season_coercion() {
        assert_eq!(coerce_season(&json!(3)), "3");
        assert_eq!(coerce_season(&json!("2")), "2");
        assert_eq!(coerce_season(&json!("Summer")), "Summer");
        assert_eq!(coerce_season(&Value::Null), "");
    }

    #[test]
    fn test_text_field_empty_is_absent() {
        assert_eq!(text_field(&json!("")), None);
        assert_eq!(text_field(&Value::Null), None);
        assert_eq!(text_field(&json!("France")), Some("France".to_string()));
        assert_eq!(text_field(&json!(1999)), Some("1999".to_string()));
    }

    #[test]
    fn test_whole_floats_render_without_fraction() {
        assert_eq!(coerce_season(&json!(1.0)), "1");
        assert_eq!(coerce_season(&json!(2.5)), "2.5");
        assert_eq!(coerce_season(&json!(-0.0)), "0");
        assert_eq!(text_field(&json!(1999.0)), Some("1999".to_string()));
        assert_eq!(text_field(&json!(7.25)), Some("7.25".to_string()));
    }
}
