//! Static reference facts and the usage guide.
//!
//! Pure data shared by the terminal view and the `reference` command.

use crate::types::TemperatureUnit;

/// Two well-known readings on one scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleFacts {
    pub unit: TemperatureUnit,
    pub facts: [&'static str; 2],
}

/// Freezing/boiling landmarks, one entry per unit in selector order.
pub const SCALE_FACTS: [ScaleFacts; 3] = [
    ScaleFacts {
        unit: TemperatureUnit::Celsius,
        facts: ["Water freezes at 0°C", "Water boils at 100°C"],
    },
    ScaleFacts {
        unit: TemperatureUnit::Fahrenheit,
        facts: ["Water freezes at 32°F", "Water boils at 212°F"],
    },
    ScaleFacts {
        unit: TemperatureUnit::Kelvin,
        facts: ["Absolute zero at 0K", "Water freezes at 273.15K"],
    },
];

/// Numbered steps shown while there is no result.
pub const USAGE_STEPS: [&str; 3] = [
    "Enter a temperature value in the input field",
    "Select the original unit of measurement (°C, °F, or K)",
    "View the instant conversion to all three temperature scales",
];

/// Plain-text rendering of [`SCALE_FACTS`] for the terminal.
pub fn format_reference() -> String {
    let mut out = String::new();
    out.push_str("=== Temperature Scale References ===\n");
    for scale in &SCALE_FACTS {
        out.push_str(&format!("{}\n", scale.unit.name()));
        for fact in scale.facts {
            out.push_str(&format!("  {}\n", fact));
        }
    }
    out
}
