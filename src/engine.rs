//! Conversion engine: the temperature arithmetic.
//!
//! Pure functions, no I/O. Celsius is the pivot: every conversion
//! normalizes to Celsius first, then derives the other scales from it.
//!
//! The engine is total. Values below absolute zero are computed like any
//! other; rejecting them is not its job.

use crate::types::{ConversionResult, TemperatureUnit, ThermalBand};

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Fahrenheit reading at 0 °C.
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Lower edge of the Warm band, in °C.
const WARM_FROM: f64 = 20.0;

/// Lower edge of the Hot band, in °C.
const HOT_FROM: f64 = 35.0;

/// Convert `value` in `from` to all three scales.
///
/// Derivation uses the unrounded Celsius value; only the three outputs are
/// rounded (see [`round2`]).
pub fn convert(value: f64, from: TemperatureUnit) -> ConversionResult {
    let celsius = to_celsius(value, from);

    ConversionResult {
        celsius: round2(celsius),
        fahrenheit: round2(from_celsius(celsius, TemperatureUnit::Fahrenheit)),
        kelvin: round2(from_celsius(celsius, TemperatureUnit::Kelvin)),
    }
}

/// Classify a reading into its thermal band.
///
/// Half-open intervals on the Celsius equivalent: the lower edge of each
/// band belongs to that band.
pub fn classify(value: f64, unit: TemperatureUnit) -> ThermalBand {
    let celsius = to_celsius(value, unit);

    if celsius < 0.0 {
        ThermalBand::Freezing
    } else if celsius < WARM_FROM {
        ThermalBand::Cool
    } else if celsius < HOT_FROM {
        ThermalBand::Warm
    } else {
        ThermalBand::Hot
    }
}

/// Normalize a reading to Celsius.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
    }
}

/// Express a Celsius value in `unit`.
pub fn from_celsius(celsius: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        TemperatureUnit::Kelvin => celsius + KELVIN_OFFSET,
    }
}

/// Round to 2 decimal places, ties away from zero.
///
/// Negative zero collapses to `0.0` so "-0" never reaches the screen.
/// Values too large to scale by 100 are already integral and pass through.
pub fn round2(x: f64) -> f64 {
    let scaled = x * 100.0;
    if !scaled.is_finite() {
        return x;
    }

    let rounded = scaled.round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    use crate::types::TemperatureUnit::{Celsius, Fahrenheit, Kelvin};

    const SAMPLES: [f64; 12] = [
        -459.67, -273.15, -40.0, -17.777, -0.005, 0.0, 0.004, 19.99, 36.6, 98.6, 1234.567, 1.0e6,
    ];

    /// One rounding step, plus float noise.
    const TOLERANCE: f64 = 0.01 + 1e-9;

    // -- convert --

    #[test]
    fn freezing_point_of_water() {
        let r = convert(0.0, Celsius);
        assert_eq!(r, ConversionResult { celsius: 0.0, fahrenheit: 32.0, kelvin: 273.15 });
    }

    #[test]
    fn boiling_point_of_water() {
        let r = convert(100.0, Celsius);
        assert_eq!(r, ConversionResult { celsius: 100.0, fahrenheit: 212.0, kelvin: 373.15 });
    }

    #[test]
    fn fahrenheit_and_kelvin_fixed_points() {
        assert_eq!(convert(32.0, Fahrenheit).celsius, 0.0);
        assert_eq!(convert(273.15, Kelvin).celsius, 0.0);
        assert_eq!(convert(212.0, Fahrenheit).kelvin, 373.15);
    }

    #[test]
    fn body_temperature_in_fahrenheit() {
        let r = convert(98.6, Fahrenheit);
        assert_eq!(r, ConversionResult { celsius: 37.0, fahrenheit: 98.6, kelvin: 310.15 });
    }

    #[test]
    fn minus_forty_is_the_same_in_both_degree_scales() {
        let r = convert(-40.0, Celsius);
        assert_eq!(r.fahrenheit, -40.0);
        assert_eq!(r.kelvin, 233.15);
    }

    #[test]
    fn below_absolute_zero_is_computed_not_rejected() {
        let r = convert(-10.0, Kelvin);
        assert_eq!(r.kelvin, -10.0);
        assert_eq!(r.celsius, -283.15);
    }

    #[test]
    fn celsius_input_is_only_rounded() {
        for x in SAMPLES {
            assert_eq!(convert(x, Celsius).celsius, round2(x), "x = {}", x);
        }
    }

    #[test]
    fn fahrenheit_round_trip_stays_within_tolerance() {
        for x in SAMPLES {
            let f = convert(x, Celsius).fahrenheit;
            assert_abs_diff_eq!(convert(f, Fahrenheit).celsius, round2(x), epsilon = TOLERANCE);
        }
    }

    #[test]
    fn stored_fields_agree_with_each_other() {
        for unit in TemperatureUnit::ALL {
            for x in SAMPLES {
                let r = convert(x, unit);
                let via_fahrenheit = to_celsius(r.fahrenheit, Fahrenheit);
                let via_kelvin = to_celsius(r.kelvin, Kelvin);
                assert_abs_diff_eq!(via_fahrenheit, r.celsius, epsilon = TOLERANCE);
                assert_abs_diff_eq!(via_kelvin, r.celsius, epsilon = TOLERANCE);
            }
        }
    }

    #[test]
    fn results_are_finite_for_finite_input() {
        for unit in TemperatureUnit::ALL {
            for x in [-1.0e300, 1.0e307, -1.7e306] {
                let r = convert(x, unit);
                assert!(r.celsius.is_finite(), "{} {} -> {:?}", x, unit, r);
                assert!(r.fahrenheit.is_finite(), "{} {} -> {:?}", x, unit, r);
                assert!(r.kelvin.is_finite(), "{} {} -> {:?}", x, unit, r);
            }
        }
    }

    #[test]
    fn round2_passes_huge_values_through() {
        assert_eq!(round2(1.0e307), 1.0e307);
        assert_eq!(round2(-1.7e308), -1.7e308);
    }

    // -- round2 --

    #[test]
    fn round2_is_idempotent() {
        for x in SAMPLES {
            assert_eq!(round2(round2(x)), round2(x));
        }
    }

    #[test]
    fn round2_ties_go_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }

    #[test]
    fn round2_never_returns_negative_zero() {
        let r = round2(-0.001);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    // -- classify --

    #[test]
    fn band_boundaries_in_celsius() {
        assert_eq!(classify(-0.01, Celsius), ThermalBand::Freezing);
        assert_eq!(classify(0.0, Celsius), ThermalBand::Cool);
        assert_eq!(classify(19.99, Celsius), ThermalBand::Cool);
        assert_eq!(classify(20.0, Celsius), ThermalBand::Warm);
        assert_eq!(classify(34.99, Celsius), ThermalBand::Warm);
        assert_eq!(classify(35.0, Celsius), ThermalBand::Hot);
    }

    #[test]
    fn classify_normalizes_other_units_first() {
        assert_eq!(classify(98.6, Fahrenheit), ThermalBand::Hot);
        assert_eq!(classify(31.0, Fahrenheit), ThermalBand::Freezing);
        assert_eq!(classify(32.0, Fahrenheit), ThermalBand::Cool);
        assert_eq!(classify(300.0, Kelvin), ThermalBand::Warm);
        assert_eq!(classify(0.0, Kelvin), ThermalBand::Freezing);
    }

    #[test]
    fn single_step_conversions_invert_each_other() {
        for unit in TemperatureUnit::ALL {
            for x in SAMPLES {
                assert_abs_diff_eq!(to_celsius(from_celsius(x, unit), unit), x, epsilon = 1e-6);
            }
        }
    }
}
