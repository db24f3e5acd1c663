//! Unit definitions, SI prefixes and the builtin unit table.
//!
//! Linear units are stored as a scale factor to the coherent SI unit of their
//! dimension. Temperature scales additionally carry an exact rational affine
//! map to kelvin so that fixed points such as `0 degC == 32 degF` survive
//! floating-point evaluation.

use std::f64::consts::PI;
use std::ops::{Div, Mul, Sub};

use super::dimension::Dimension;

/// Exact rational number used for affine temperature maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    num: i128,
    den: i128,
}

impl Ratio {
    pub const ZERO: Ratio = Ratio::new(0, 1);
    pub const ONE: Ratio = Ratio::new(1, 1);

    pub const fn new(num: i128, den: i128) -> Self {
        Self { num, den }
    }

    fn normalized(num: i128, den: i128) -> Self {
        let g = gcd(num.abs(), den.abs()).max(1);
        let sign = if den < 0 { -1 } else { 1 };
        Self {
            num: sign * num / g,
            den: sign * den / g,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Mul for Ratio {
    type Output = Ratio;

    fn mul(self, rhs: Ratio) -> Ratio {
        Ratio::normalized(self.num * rhs.num, self.den * rhs.den)
    }
}

impl Div for Ratio {
    type Output = Ratio;

    fn div(self, rhs: Ratio) -> Ratio {
        Ratio::normalized(self.num * rhs.den, self.den * rhs.num)
    }
}

impl Sub for Ratio {
    type Output = Ratio;

    fn sub(self, rhs: Ratio) -> Ratio {
        Ratio::normalized(self.num * rhs.den - rhs.num * self.den, self.den * rhs.den)
    }
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// `kelvin = scale * value + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affine {
    pub scale: Ratio,
    pub offset: Ratio,
}

impl Affine {
    /// Coefficients `(m, c)` such that `target = m * value + c`.
    pub fn to(&self, target: &Affine) -> (f64, f64) {
        let m = self.scale / target.scale;
        let c = (self.offset - target.offset) / target.scale;
        (m.to_f64(), c.to_f64())
    }

    pub fn has_offset(&self) -> bool {
        !self.offset.is_zero()
    }
}

/// One registered unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDef {
    /// Preferred symbol, used when formatting results.
    pub symbol: String,
    /// Alternate names accepted on input.
    pub names: Vec<String>,
    /// Factor to the coherent SI unit of `dimension`.
    pub scale: f64,
    pub dimension: Dimension,
    pub affine: Option<Affine>,
    /// Whether SI prefixes may be attached.
    pub prefixable: bool,
}

impl UnitDef {
    pub fn linear(symbol: &str, names: &[&str], scale: f64, dimension: Dimension) -> Self {
        Self {
            symbol: symbol.to_string(),
            names: names.iter().map(|n| n.to_string()).collect(),
            scale,
            dimension,
            affine: None,
            prefixable: false,
        }
    }

    pub fn prefixable(mut self) -> Self {
        self.prefixable = true;
        self
    }

    fn temperature(symbol: &str, names: &[&str], scale: Ratio, offset: Ratio) -> Self {
        Self {
            symbol: symbol.to_string(),
            names: names.iter().map(|n| n.to_string()).collect(),
            scale: scale.to_f64(),
            dimension: Dimension::TEMPERATURE,
            affine: Some(Affine { scale, offset }),
            prefixable: false,
        }
    }
}

/// `(symbol, long name, factor)`, longest symbols first so `da` wins over `d`.
pub const PREFIXES: &[(&str, &str, f64)] = &[
    ("da", "deca", 1e1),
    ("Y", "yotta", 1e24),
    ("Z", "zetta", 1e21),
    ("E", "exa", 1e18),
    ("P", "peta", 1e15),
    ("T", "tera", 1e12),
    ("G", "giga", 1e9),
    ("M", "mega", 1e6),
    ("k", "kilo", 1e3),
    ("h", "hecto", 1e2),
    ("d", "deci", 1e-1),
    ("c", "centi", 1e-2),
    ("m", "milli", 1e-3),
    ("u", "micro", 1e-6),
    ("µ", "micro", 1e-6),
    ("n", "nano", 1e-9),
    ("p", "pico", 1e-12),
    ("f", "femto", 1e-15),
    ("a", "atto", 1e-18),
];

const FOOT: f64 = 0.3048;
const POUND: f64 = 0.45359237;
const GALLON: f64 = 3.785411784e-3;
const STANDARD_GRAVITY: f64 = 9.80665;

/// The builtin unit table.
pub fn builtin_units() -> Vec<UnitDef> {
    use Dimension as D;

    vec![
        // SI base and coherent derived units
        UnitDef::linear("m", &["meter", "meters", "metre", "metres"], 1.0, D::LENGTH).prefixable(),
        UnitDef::linear("g", &["gram", "grams", "gramme"], 1e-3, D::MASS).prefixable(),
        UnitDef::linear("s", &["second", "seconds", "sec"], 1.0, D::TIME).prefixable(),
        UnitDef::linear("A", &["ampere", "amperes", "amp", "amps"], 1.0, D::CURRENT).prefixable(),
        UnitDef::linear("mol", &["mole", "moles"], 1.0, D::SUBSTANCE).prefixable(),
        UnitDef::linear("cd", &["candela", "candelas"], 1.0, D::LUMINOSITY).prefixable(),
        UnitDef::linear("rad", &["radian", "radians"], 1.0, D::ANGLE).prefixable(),
        UnitDef::linear("N", &["newton", "newtons"], 1.0, D::FORCE).prefixable(),
        UnitDef::linear("Pa", &["pascal", "pascals"], 1.0, D::PRESSURE).prefixable(),
        UnitDef::linear("J", &["joule", "joules"], 1.0, D::ENERGY).prefixable(),
        UnitDef::linear("W", &["watt", "watts"], 1.0, D::POWER).prefixable(),
        UnitDef::linear("C", &["coulomb", "coulombs"], 1.0, D::CHARGE).prefixable(),
        UnitDef::linear("V", &["volt", "volts"], 1.0, D::VOLTAGE).prefixable(),
        UnitDef::linear("ohm", &["ohms", "Ω"], 1.0, D::RESISTANCE).prefixable(),
        UnitDef::linear("F", &["farad", "farads"], 1.0, D::CAPACITANCE).prefixable(),
        UnitDef::linear("Hz", &["hertz"], 1.0, D::FREQUENCY).prefixable(),
        // Accepted alongside SI
        UnitDef::linear("L", &["liter", "liters", "litre", "litres", "l"], 1e-3, D::VOLUME).prefixable(),
        UnitDef::linear("tonne", &["tonnes", "metric_ton", "t"], 1e3, D::MASS),
        UnitDef::linear("bar", &["bars"], 1e5, D::PRESSURE).prefixable(),
        UnitDef::linear("Wh", &["watt_hour", "watthour"], 3600.0, D::ENERGY).prefixable(),
        UnitDef::linear("eV", &["electronvolt", "electronvolts"], 1.602176634e-19, D::ENERGY).prefixable(),
        UnitDef::linear("cal", &["calorie", "calories"], 4.184, D::ENERGY).prefixable(),
        UnitDef::linear("deg", &["degree", "degrees", "°"], PI / 180.0, D::ANGLE),
        UnitDef::linear("dB", &["decibel", "decibels"], 1.0, D::LOGARITHMIC),
        UnitDef::linear("hectare", &["hectares", "ha"], 1e4, D::AREA),
        // Time
        UnitDef::linear("min", &["minute", "minutes"], 60.0, D::TIME),
        UnitDef::linear("h", &["hour", "hours", "hr"], 3600.0, D::TIME),
        UnitDef::linear("day", &["days", "d"], 86_400.0, D::TIME),
        UnitDef::linear("week", &["weeks"], 604_800.0, D::TIME),
        UnitDef::linear("year", &["years", "yr", "julian_year"], 31_557_600.0, D::TIME),
        // Imperial / US customary
        UnitDef::linear("in", &["inch", "inches"], FOOT / 12.0, D::LENGTH),
        UnitDef::linear("ft", &["foot", "feet"], FOOT, D::LENGTH),
        UnitDef::linear("yd", &["yard", "yards"], 3.0 * FOOT, D::LENGTH),
        UnitDef::linear("mi", &["mile", "miles"], 5280.0 * FOOT, D::LENGTH),
        UnitDef::linear("nmi", &["nautical_mile", "nautical_miles"], 1852.0, D::LENGTH),
        UnitDef::linear("lb", &["pound", "pounds", "lbs"], POUND, D::MASS),
        UnitDef::linear("oz", &["ounce", "ounces"], POUND / 16.0, D::MASS),
        UnitDef::linear("ton", &["tons", "short_ton"], 2000.0 * POUND, D::MASS),
        UnitDef::linear("gal", &["gallon", "gallons"], GALLON, D::VOLUME),
        UnitDef::linear("qt", &["quart", "quarts"], GALLON / 4.0, D::VOLUME),
        UnitDef::linear("pt", &["pint", "pints"], GALLON / 8.0, D::VOLUME),
        UnitDef::linear("cup", &["cups"], GALLON / 16.0, D::VOLUME),
        UnitDef::linear("fl_oz", &["fluid_ounce", "fluid_ounces", "floz"], GALLON / 128.0, D::VOLUME),
        UnitDef::linear("acre", &["acres"], 4046.8564224, D::AREA),
        UnitDef::linear("mph", &["mile_per_hour", "miles_per_hour"], 5280.0 * FOOT / 3600.0, D::VELOCITY),
        UnitDef::linear("knot", &["knots", "kt"], 1852.0 / 3600.0, D::VELOCITY),
        UnitDef::linear("CFM", &["cubic_feet_per_minute", "cfm"], FOOT * FOOT * FOOT / 60.0, D::FLOW),
        UnitDef::linear("lbf", &["pound_force"], POUND * STANDARD_GRAVITY, D::FORCE),
        UnitDef::linear("psi", &["pound_force_per_square_inch"], POUND * STANDARD_GRAVITY / (FOOT / 12.0 * FOOT / 12.0), D::PRESSURE),
        UnitDef::linear("atm", &["atmosphere", "atmospheres"], 101_325.0, D::PRESSURE),
        UnitDef::linear("torr", &["Torr"], 101_325.0 / 760.0, D::PRESSURE),
        UnitDef::linear("mmHg", &["millimeter_Hg", "millimeters_Hg"], 133.322387415, D::PRESSURE),
        UnitDef::linear("BTU", &["Btu", "british_thermal_unit"], 1055.05585262, D::ENERGY),
        UnitDef::linear("hp", &["horsepower"], 550.0 * FOOT * POUND * STANDARD_GRAVITY, D::POWER),
        // Temperature scales
        UnitDef::temperature("K", &["kelvin"], Ratio::ONE, Ratio::ZERO),
        UnitDef::temperature("degC", &["celsius", "degree_Celsius", "°C"], Ratio::ONE, Ratio::new(5463, 20)),
        UnitDef::temperature("degF", &["fahrenheit", "degree_Fahrenheit", "°F"], Ratio::new(5, 9), Ratio::new(45967, 180)),
        UnitDef::temperature("degR", &["rankine", "degree_Rankine", "°R"], Ratio::new(5, 9), Ratio::ZERO),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_are_unique() {
        let mut seen = HashSet::new();
        for def in builtin_units() {
            assert!(seen.insert(def.symbol.clone()), "duplicate {}", def.symbol);
            for name in &def.names {
                assert!(seen.insert(name.clone()), "duplicate {}", name);
            }
        }
    }

    #[test]
    fn test_ratio_arithmetic() {
        let a = Ratio::new(5463, 20);
        let b = Ratio::new(45967, 180);
        assert_eq!(a - b, Ratio::new(160, 9));
        assert_eq!(Ratio::new(160, 9) / Ratio::new(5, 9), Ratio::new(32, 1));
        assert_eq!(Ratio::new(2, -4) * Ratio::ONE, Ratio::new(-1, 2));
    }

    #[test]
    fn test_celsius_to_fahrenheit_coefficients_are_exact() {
        let units = builtin_units();
        let affine = |s: &str| units.iter().find(|u| u.symbol == s).unwrap().affine.unwrap();
        let (m, c) = affine("degC").to(&affine("degF"));
        assert_eq!(m, 1.8);
        assert_eq!(c, 32.0);
        let (m, c) = affine("K").to(&affine("degC"));
        assert_eq!(m, 1.0);
        assert_relative_eq!(c, -273.15);
    }

    #[test]
    fn test_customary_definitions() {
        let units = builtin_units();
        let scale = |s: &str| units.iter().find(|u| u.symbol == s).unwrap().scale;
        assert_relative_eq!(scale("in"), 0.0254, max_relative = 1e-15);
        assert_relative_eq!(scale("psi"), 6894.757293168361, max_relative = 1e-12);
        assert_relative_eq!(scale("hp"), 745.6998715822702, max_relative = 1e-12);
        assert_relative_eq!(scale("lbf"), 4.4482216152605, max_relative = 1e-12);
    }
}
