//! Report formatting for one-shot conversions.
//!
//! Pure functions: (ConversionReport, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::engine::classify;
use crate::types::{ConversionResult, OutputFormat, TemperatureUnit, ThermalBand};

/// The reading the user asked about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    pub value: f64,
    pub unit: TemperatureUnit,
}

/// A conversion together with the input that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionReport {
    pub input: Reading,
    pub result: ConversionResult,
    /// Band of the input reading.
    pub band: ThermalBand,
}

impl ConversionReport {
    pub fn new(value: f64, unit: TemperatureUnit, result: ConversionResult) -> Self {
        ConversionReport {
            input: Reading { value, unit },
            result,
            band: classify(value, unit),
        }
    }
}

/// Format a conversion report for output.
pub fn format_report(report: &ConversionReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(report),
        OutputFormat::Json => format_json(report),
    }
}

/// Render a rounded value without trailing zeros: 37.00 → "37", 98.60 → "98.6".
pub fn format_value(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(report: &ConversionReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}{} converts to:\n",
        format_value(report.input.value),
        report.input.unit.symbol()
    ));

    for unit in TemperatureUnit::ALL {
        let value = report.result.get(unit);
        let band = classify(value, unit);
        out.push_str(&format!(
            "  {:<11} {:>12}  [{}]\n",
            unit.name(),
            format!("{}{}", format_value(value), unit.symbol()),
            band.label()
        ));
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(report: &ConversionReport) -> String {
    // Every field is a finite number or a plain enum; serialization cannot fail.
    serde_json::to_string_pretty(report)
        .unwrap_or_else(|e| panic!("Failed to serialize report to JSON: {}", e))
}

// ============================================================================
// TESTS
// ============================================================================
