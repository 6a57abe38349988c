//! Cell coercions applied to every CSV field before insertion.

use crate::constants::MAX_FOOT_TRAFFIC;

/// Trimmed text, with blank cells becoming `None`.
pub fn coerce_text(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

/// A finite number, or `None` for blank and non-numeric cells.
pub fn coerce_number(value: Option<&str>) -> Option<f64> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// A number truncated toward zero.
pub fn coerce_integer(value: Option<&str>) -> Option<i64> {
    coerce_number(value).map(|n| n.trunc() as i64)
}

/// Foot traffic is never null, never negative and at most [`MAX_FOOT_TRAFFIC`].
pub fn coerce_foot_traffic(value: Option<&str>) -> i64 {
    coerce_integer(value).unwrap_or(0).clamp(0, MAX_FOOT_TRAFFIC)
}
