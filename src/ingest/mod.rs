//! Report ingestion: raw API responses to validated records
//!
//! Values arrive either as JSON strings (GA4 encodes every metric as a
//! string) or as JSON numbers (Search Console). Both are accepted; anything
//! that does not parse to a finite, non-negative number is rejected with the
//! row index and field name. Row indexes are zero-based positions in `rows`.

pub mod ga4;
pub mod request;
pub mod search_console;

use crate::{Error, Result};
use serde_json::Value;

const PROPERTY_PREFIX: &str = "properties/";

/// GA4 property ids are addressed as `properties/<id>`
pub fn normalize_property_id(id: &str) -> String {
    let id = id.trim();
    if id.starts_with(PROPERTY_PREFIX) {
        id.to_string()
    } else {
        format!("{}{}", PROPERTY_PREFIX, id)
    }
}

fn invalid(row: usize, field: &'static str, reason: impl Into<String>) -> Error {
    Error::InvalidRow {
        row,
        field,
        reason: reason.into(),
    }
}

/// Non-empty text value
pub(crate) fn text(row: usize, field: &'static str, value: Option<&Value>) -> Result<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(invalid(row, field, "empty value")),
        Some(other) => Err(invalid(row, field, format!("expected text, got {}", other))),
        None => Err(invalid(row, field, "missing")),
    }
}

/// Finite, non-negative number from a JSON number or numeric string
pub(crate) fn metric(row: usize, field: &'static str, value: Option<&Value>) -> Result<f64> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
        None => return Err(invalid(row, field, "missing")),
    };
    let Some(number) = parsed else {
        return Err(invalid(
            row,
            field,
            format!("not a number: {}", value.map(Value::to_string).unwrap_or_default()),
        ));
    };
    if !number.is_finite() {
        return Err(invalid(row, field, format!("not finite: {}", number)));
    }
    if number < 0.0 {
        return Err(invalid(row, field, format!("negative: {}", number)));
    }
    Ok(number)
}

/// Whole, non-negative count. Integral floats such as `12.0` are accepted.
pub(crate) fn count(row: usize, field: &'static str, value: Option<&Value>) -> Result<u64> {
    let number = metric(row, field, value)?;
    if number.fract() != 0.0 {
        return Err(invalid(row, field, format!("not a whole number: {}", number)));
    }
    if number > u64::MAX as f64 {
        return Err(invalid(row, field, format!("out of range: {}", number)));
    }
    Ok(number as u64)
}

/// Fraction (0.25) to percentage (25.0)
pub(crate) fn fraction_to_percent(fraction: f64) -> f64 {
    fraction * 100.0
}
