// ABOUTME: Unit normalization for imported measurements
// ABOUTME: Converts source units to the system's canonical pounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Unit normalization
//!
//! The store keeps body weight in pounds. Exports from metric-locale devices
//! carry `kg`; anything else is treated as already pounds and passed through.

/// Kilograms-to-pounds conversion factor
pub const KG_TO_LBS: f64 = 2.20462;

/// Normalize a body-mass value to pounds, rounded to 1 decimal.
///
/// Only `"kg"` triggers conversion; every other unit string passes through
/// unconverted.
#[must_use]
pub fn normalize_weight(value: f64, unit: &str) -> f64 {
    let lbs = if unit == "kg" { value * KG_TO_LBS } else { value };
    round_to_1(lbs)
}

/// Round to 1 decimal place
#[must_use]
pub fn round_to_1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to 2 decimal places
#[must_use]
pub fn round_to_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kg_converts_to_pounds() {
        let lbs = normalize_weight(100.0, "kg");
        assert!((lbs - 220.5).abs() < 0.1);
    }

    #[test]
    fn test_other_units_pass_through() {
        assert!((normalize_weight(150.0, "lb") - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_conversion_rounds_to_one_decimal() {
        // 99.5 kg = 219.35969 lbs
        assert!((normalize_weight(99.5, "kg") - 219.4).abs() < f64::EPSILON);
    }
}
