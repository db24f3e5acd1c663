//! Runtime dimension vectors.
//!
//! A [`Dimension`] holds the exponent of each base quantity. Two quantities can
//! be added or converted into each other only when their dimensions are equal.

use std::fmt;
use std::ops::{Div, Mul};

/// Names of the base quantities, in storage order.
pub const BASE_QUANTITIES: [&str; 9] = [
    "length",
    "mass",
    "time",
    "current",
    "temperature",
    "substance",
    "luminosity",
    "angle",
    "logarithmic",
];

/// Exponents of the base quantities.
///
/// Derived dimensions are products of powers of the bases:
/// - Velocity = [length] / [time]
/// - Force = [mass] * [length] / [time] ** 2
///
/// Angles and logarithmic levels get their own bases so that radians and
/// decibels never compare equal to plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension([i32; 9]);

impl Dimension {
    pub const DIMENSIONLESS: Self = Self([0; 9]);

    pub const LENGTH: Self = Self::base(0);
    pub const MASS: Self = Self::base(1);
    pub const TIME: Self = Self::base(2);
    pub const CURRENT: Self = Self::base(3);
    pub const TEMPERATURE: Self = Self::base(4);
    pub const SUBSTANCE: Self = Self::base(5);
    pub const LUMINOSITY: Self = Self::base(6);
    pub const ANGLE: Self = Self::base(7);
    pub const LOGARITHMIC: Self = Self::base(8);

    pub const AREA: Self = Self::mechanical(2, 0, 0);
    pub const VOLUME: Self = Self::mechanical(3, 0, 0);
    pub const VELOCITY: Self = Self::mechanical(1, 0, -1);
    pub const ACCELERATION: Self = Self::mechanical(1, 0, -2);
    pub const FLOW: Self = Self::mechanical(3, 0, -1);
    pub const DENSITY: Self = Self::mechanical(-3, 1, 0);
    pub const FREQUENCY: Self = Self::mechanical(0, 0, -1);
    pub const FORCE: Self = Self::mechanical(1, 1, -2);
    pub const PRESSURE: Self = Self::mechanical(-1, 1, -2);
    pub const ENERGY: Self = Self::mechanical(2, 1, -2);
    pub const POWER: Self = Self::mechanical(2, 1, -3);

    pub const CHARGE: Self = Self::electrical(0, 0, 1, 1);
    pub const VOLTAGE: Self = Self::electrical(2, 1, -3, -1);
    pub const RESISTANCE: Self = Self::electrical(2, 1, -3, -2);
    pub const CAPACITANCE: Self = Self::electrical(-2, -1, 4, 2);

    const fn base(index: usize) -> Self {
        let mut exponents = [0; 9];
        exponents[index] = 1;
        Self(exponents)
    }

    const fn mechanical(length: i32, mass: i32, time: i32) -> Self {
        Self([length, mass, time, 0, 0, 0, 0, 0, 0])
    }

    const fn electrical(length: i32, mass: i32, time: i32, current: i32) -> Self {
        Self([length, mass, time, current, 0, 0, 0, 0, 0])
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|e| *e == 0)
    }

    /// Raise to an integer power, saturating at the `i32` bounds.
    pub fn powi(self, n: i32) -> Self {
        let mut exponents = self.0;
        for e in exponents.iter_mut() {
            *e = e.saturating_mul(n);
        }
        Self(exponents)
    }

    /// Raise to an integer power, or `None` if an exponent overflows.
    pub fn checked_powi(self, n: i32) -> Option<Self> {
        let mut exponents = self.0;
        for e in exponents.iter_mut() {
            *e = e.checked_mul(n)?;
        }
        Some(Self(exponents))
    }

    /// Product of two dimensions, or `None` if an exponent overflows.
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let mut exponents = self.0;
        for (e, r) in exponents.iter_mut().zip(rhs.0) {
            *e = e.checked_add(r)?;
        }
        Some(Self(exponents))
    }

    pub fn exponents(&self) -> &[i32; 9] {
        &self.0
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        let mut exponents = self.0;
        for (e, r) in exponents.iter_mut().zip(rhs.0) {
            *e = e.saturating_add(r);
        }
        Dimension(exponents)
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        self * rhs.powi(-1)
    }
}

impl fmt::Display for Dimension {
    /// Formats as `[mass] / [length] / [time] ** 2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("dimensionless");
        }

        let term = |name: &str, power: u32| {
            if power == 1 {
                format!("[{}]", name)
            } else {
                format!("[{}] ** {}", name, power)
            }
        };

        let pairs = BASE_QUANTITIES.iter().zip(self.0.iter());
        let numerator: Vec<String> = pairs
            .clone()
            .filter(|(_, e)| **e > 0)
            .map(|(name, e)| term(name, e.unsigned_abs()))
            .collect();
        let denominator: Vec<String> = pairs
            .filter(|(_, e)| **e < 0)
            .map(|(name, e)| term(name, e.unsigned_abs()))
            .collect();

        let mut out = if numerator.is_empty() {
            "1".to_string()
        } else {
            numerator.join(" * ")
        };
        for d in denominator {
            out.push_str(" / ");
            out.push_str(&d);
        }
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_dimensions() {
        assert_eq!(Dimension::LENGTH / Dimension::TIME, Dimension::VELOCITY);
        assert_eq!(Dimension::MASS * Dimension::ACCELERATION, Dimension::FORCE);
        assert_eq!(Dimension::FORCE / Dimension::AREA, Dimension::PRESSURE);
        assert_eq!(Dimension::POWER * Dimension::TIME, Dimension::ENERGY);
        assert_eq!(Dimension::VOLTAGE / Dimension::CURRENT, Dimension::RESISTANCE);
        assert_eq!(Dimension::CHARGE / Dimension::VOLTAGE, Dimension::CAPACITANCE);
        assert_eq!(Dimension::LENGTH.powi(3), Dimension::VOLUME);
    }

    #[test]
    fn test_dimensionless() {
        assert!((Dimension::LENGTH / Dimension::LENGTH).is_dimensionless());
        assert!(!Dimension::ANGLE.is_dimensionless());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimension::LENGTH.to_string(), "[length]");
        assert_eq!(Dimension::VELOCITY.to_string(), "[length] / [time]");
        assert_eq!(Dimension::ACCELERATION.to_string(), "[length] / [time] ** 2");
        assert_eq!(Dimension::DENSITY.to_string(), "[mass] / [length] ** 3");
        assert_eq!(Dimension::FREQUENCY.to_string(), "1 / [time]");
        assert_eq!(Dimension::DIMENSIONLESS.to_string(), "dimensionless");
    }

    #[test]
    fn test_exponent_overflow() {
        let min = Dimension::LENGTH.checked_powi(i32::MIN).unwrap();
        assert_eq!(min.checked_powi(-1), None);
        assert_eq!(Dimension::AREA.checked_powi(i32::MAX), None);
        let huge = Dimension::LENGTH.powi(i32::MAX);
        assert_eq!(huge.checked_mul(Dimension::LENGTH), None);
        assert_eq!(
            Dimension::LENGTH.powi(i32::MIN).to_string(),
            "1 / [length] ** 2147483648"
        );
    }
}
