//! Domain types for thermoconv.
//!
//! Units, results, bands and output configuration. No conversion logic
//! lives here; see `engine` for the arithmetic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// UNITS
// ============================================================================

/// The three supported temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Canonical pivot unit.
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// All units in selector order.
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// Full name, e.g. "Fahrenheit".
    pub fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    /// Short symbol, e.g. "°F".
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    /// Suffix printed directly after a card value.
    ///
    /// Kelvin is an absolute scale and takes no degree sign.
    pub fn value_suffix(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius | TemperatureUnit::Fahrenheit => "°",
            TemperatureUnit::Kelvin => "",
        }
    }

    /// Next unit in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Kelvin,
            TemperatureUnit::Kelvin => TemperatureUnit::Celsius,
        }
    }

    /// Previous unit in selector order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Kelvin,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
            TemperatureUnit::Kelvin => TemperatureUnit::Fahrenheit,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when text does not name a known unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownUnit(pub String);

impl fmt::Display for UnknownUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown temperature unit '{}' (expected celsius, fahrenheit or kelvin)",
            self.0
        )
    }
}

impl std::error::Error for UnknownUnit {}

impl FromStr for TemperatureUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "°c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "°f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
            _ => Err(UnknownUnit(s.to_string())),
        }
    }
}

// ============================================================================
// RESULTS
// ============================================================================

/// One successful conversion, every field rounded to 2 decimals.
///
/// Never mutated: the next conversion replaces it wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionResult {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
}

impl ConversionResult {
    /// The field for a given unit.
    pub fn get(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.celsius,
            TemperatureUnit::Fahrenheit => self.fahrenheit,
            TemperatureUnit::Kelvin => self.kelvin,
        }
    }
}

// ============================================================================
// THERMAL BANDS
// ============================================================================

/// Ordered thermal classification of a Celsius-equivalent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThermalBand {
    /// Below 0 °C.
    Freezing,
    /// 0 °C up to (not including) 20 °C.
    Cool,
    /// 20 °C up to (not including) 35 °C.
    Warm,
    /// 35 °C and above.
    Hot,
}

/// Color token handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Blue,
    Cyan,
    Orange,
    Red,
}

/// Icon token handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconToken {
    Snowflake,
    Thermometer,
    Sun,
    Flame,
}

/// Fixed (color, icon) pair for a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub color: ColorToken,
    pub icon: IconToken,
}

impl ThermalBand {
    pub fn label(self) -> &'static str {
        match self {
            ThermalBand::Freezing => "freezing",
            ThermalBand::Cool => "cool",
            ThermalBand::Warm => "warm",
            ThermalBand::Hot => "hot",
        }
    }

    /// Presentation hints for this band.
    pub fn presentation(self) -> Presentation {
        let (color, icon) = match self {
            ThermalBand::Freezing => (ColorToken::Blue, IconToken::Snowflake),
            ThermalBand::Cool => (ColorToken::Cyan, IconToken::Thermometer),
            ThermalBand::Warm => (ColorToken::Orange, IconToken::Sun),
            ThermalBand::Hot => (ColorToken::Red, IconToken::Flame),
        };
        Presentation { color, icon }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for one-shot conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_parses_short_and_long_names() {
        assert_eq!("c".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Celsius));
        assert_eq!("Fahrenheit".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
        assert_eq!(" K ".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Kelvin));
        assert_eq!("°F".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
    }

    #[test]
    fn unit_rejects_unknown_names() {
        let err = "rankine".parse::<TemperatureUnit>().unwrap_err();
        assert_eq!(err, UnknownUnit("rankine".into()));
        assert!(err.to_string().contains("rankine"));
    }

    #[test]
    fn unit_cycle_wraps_both_ways() {
        for unit in TemperatureUnit::ALL {
            assert_eq!(unit.next().prev(), unit);
        }
        assert_eq!(TemperatureUnit::Kelvin.next(), TemperatureUnit::Celsius);
        assert_eq!(TemperatureUnit::Celsius.prev(), TemperatureUnit::Kelvin);
    }

    #[test]
    fn kelvin_has_no_degree_suffix() {
        assert_eq!(TemperatureUnit::Kelvin.value_suffix(), "");
        assert_eq!(TemperatureUnit::Celsius.value_suffix(), "°");
    }

    #[test]
    fn bands_are_ordered_cold_to_hot() {
        assert!(ThermalBand::Freezing < ThermalBand::Cool);
        assert!(ThermalBand::Cool < ThermalBand::Warm);
        assert!(ThermalBand::Warm < ThermalBand::Hot);
    }

    #[test]
    fn presentation_table_matches_bands() {
        let hot = ThermalBand::Hot.presentation();
        assert_eq!(hot.color, ColorToken::Red);
        assert_eq!(hot.icon, IconToken::Flame);

        let freezing = ThermalBand::Freezing.presentation();
        assert_eq!(freezing.color, ColorToken::Blue);
        assert_eq!(freezing.icon, IconToken::Snowflake);

        assert_eq!(ThermalBand::Cool.presentation().icon, IconToken::Thermometer);
        assert_eq!(ThermalBand::Warm.presentation().color, ColorToken::Orange);
    }

    #[test]
    fn unit_serializes_lowercase() {
        let json = serde_json::to_string(&TemperatureUnit::Kelvin).unwrap();
        assert_eq!(json, "\"kelvin\"");
    }
}
