//! Input admission: raw text in, a finite number (or nothing) out.
//!
//! This is the boundary between whatever the user typed and the engine.
//! Anything that is not a plain finite number means "no result yet";
//! the engine never sees it.

use crate::engine::convert;
use crate::types::{ConversionResult, TemperatureUnit};

/// Largest admitted magnitude. Every unit's conversion of a value this
/// size still fits in an `f64`.
pub const MAX_MAGNITUDE: f64 = 1.0e307;

/// Parse raw input text into a finite reading.
///
/// Returns `None` for empty or whitespace-only text, for text that is not
/// entirely a number ("abc", "12abc"), and for non-finite spellings such
/// as "inf" or "NaN". Magnitudes above [`MAX_MAGNITUDE`] are rejected too.
pub fn parse_input(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.abs() <= MAX_MAGNITUDE)
}

/// Admit the text and convert it, or report that there is no result.
pub fn evaluate(text: &str, unit: TemperatureUnit) -> Option<ConversionResult> {
    parse_input(text).map(|value| convert(value, unit))
}

// ============================================================================
// TESTS
// ============================================================================
