//! Builtin catalog tables.
//!
//! Only preferred symbols appear in [`UNITS`]; every alternate spelling lives in
//! [`ALIASES`] so that no unit is ever listed twice.

use super::UnitCategory::{self, *};

/// `(canonical symbol, category, display name)`.
pub const UNITS: &[(&str, UnitCategory, &str)] = &[
    // Length
    ("mm", Length, "millimeter"),
    ("cm", Length, "centimeter"),
    ("m", Length, "meter"),
    ("km", Length, "kilometer"),
    ("in", Length, "inch"),
    ("ft", Length, "foot"),
    ("yd", Length, "yard"),
    ("mi", Length, "mile"),
    ("nm", Length, "nanometer"),
    ("um", Length, "micrometer"),
    // Mass
    ("g", Mass, "gram"),
    ("kg", Mass, "kilogram"),
    ("mg", Mass, "milligram"),
    ("lb", Mass, "pound"),
    ("oz", Mass, "ounce"),
    ("ton", Mass, "ton"),
    ("tonne", Mass, "metric ton"),
    // Temperature
    ("degC", Temperature, "Celsius"),
    ("degF", Temperature, "Fahrenheit"),
    ("K", Temperature, "Kelvin"),
    ("degR", Temperature, "Rankine"),
    // Pressure
    ("Pa", Pressure, "pascal"),
    ("kPa", Pressure, "kilopascal"),
    ("bar", Pressure, "bar"),
    ("psi", Pressure, "pound per square inch"),
    ("atm", Pressure, "atmosphere"),
    ("mmHg", Pressure, "millimeter of mercury"),
    ("torr", Pressure, "torr"),
    // Volume
    ("L", Volume, "liter"),
    ("mL", Volume, "milliliter"),
    ("gal", Volume, "gallon"),
    ("qt", Volume, "quart"),
    ("cup", Volume, "cup"),
    ("fl_oz", Volume, "fluid ounce"),
    ("m3", Volume, "cubic meter"),
    ("cm3", Volume, "cubic centimeter"),
    // Flow
    ("CFM", Flow, "cubic feet per minute"),
    ("L/s", Flow, "liters per second"),
    ("m3/s", Flow, "cubic meters per second"),
    ("gal/min", Flow, "gallons per minute"),
    // Velocity
    ("m/s", Velocity, "meters per second"),
    ("km/h", Velocity, "kilometers per hour"),
    ("mph", Velocity, "miles per hour"),
    ("ft/s", Velocity, "feet per second"),
    ("knot", Velocity, "knot"),
    // Acceleration
    ("m/s2", Acceleration, "meters per second squared"),
    ("ft/s2", Acceleration, "feet per second squared"),
    // Force
    ("N", Force, "newton"),
    ("kN", Force, "kilonewton"),
    ("lbf", Force, "pound-force"),
    // Energy
    ("J", Energy, "joule"),
    ("kJ", Energy, "kilojoule"),
    ("MJ", Energy, "megajoule"),
    ("cal", Energy, "calorie"),
    ("kcal", Energy, "kilocalorie"),
    ("Wh", Energy, "watt-hour"),
    ("kWh", Energy, "kilowatt-hour"),
    ("BTU", Energy, "British thermal unit"),
    ("eV", Energy, "electronvolt"),
    // Power
    ("W", Power, "watt"),
    ("kW", Power, "kilowatt"),
    ("MW", Power, "megawatt"),
    ("hp", Power, "horsepower"),
    // Electrical
    ("A", ElectricalCurrent, "ampere"),
    ("mA", ElectricalCurrent, "milliampere"),
    ("uA", ElectricalCurrent, "microampere"),
    ("V", ElectricalPotential, "volt"),
    ("mV", ElectricalPotential, "millivolt"),
    ("kV", ElectricalPotential, "kilovolt"),
    ("ohm", ElectricalResistance, "ohm"),
    ("kohm", ElectricalResistance, "kiloohm"),
    ("Mohm", ElectricalResistance, "megaohm"),
    ("F", ElectricalCapacitance, "farad"),
    ("uF", ElectricalCapacitance, "microfarad"),
    ("nF", ElectricalCapacitance, "nanofarad"),
    ("pF", ElectricalCapacitance, "picofarad"),
    // Frequency
    ("Hz", Frequency, "hertz"),
    ("kHz", Frequency, "kilohertz"),
    ("MHz", Frequency, "megahertz"),
    ("GHz", Frequency, "gigahertz"),
    // Angle
    ("rad", Angle, "radian"),
    ("deg", Angle, "degree"),
    // Time
    ("s", Time, "second"),
    ("ms", Time, "millisecond"),
    ("min", Time, "minute"),
    ("h", Time, "hour"),
    ("day", Time, "day"),
    ("week", Time, "week"),
    ("year", Time, "year"),
    // Area
    ("m2", Area, "square meter"),
    ("cm2", Area, "square centimeter"),
    ("km2", Area, "square kilometer"),
    ("ft2", Area, "square foot"),
    ("in2", Area, "square inch"),
    ("acre", Area, "acre"),
    ("hectare", Area, "hectare"),
    // Density
    ("kg/m3", Density, "kilogram per cubic meter"),
    ("g/cm3", Density, "gram per cubic centimeter"),
    ("lb/ft3", Density, "pound per cubic foot"),
    // Acoustics
    ("dB", Acoustics, "decibel"),
];

/// `(alias, canonical symbol)`. Lookup only, never displayed.
pub const ALIASES: &[(&str, &str)] = &[
    ("millimeter", "mm"),
    ("centimeter", "cm"),
    ("meter", "m"),
    ("kilometer", "km"),
    ("inch", "in"),
    ("foot", "ft"),
    ("yard", "yd"),
    ("mile", "mi"),
    ("nanometer", "nm"),
    ("micrometer", "um"),
    ("gram", "g"),
    ("kilogram", "kg"),
    ("milligram", "mg"),
    ("pound", "lb"),
    ("ounce", "oz"),
    ("celsius", "degC"),
    ("fahrenheit", "degF"),
    ("kelvin", "K"),
    ("rankine", "degR"),
    ("pascal", "Pa"),
    ("atmosphere", "atm"),
    ("liter", "L"),
    ("milliliter", "mL"),
    ("gallon", "gal"),
    ("quart", "qt"),
    ("newton", "N"),
    ("joule", "J"),
    ("calorie", "cal"),
    ("watt", "W"),
    ("horsepower", "hp"),
    ("ampere", "A"),
    ("volt", "V"),
    ("farad", "F"),
    ("hertz", "Hz"),
    ("radian", "rad"),
    ("degree", "deg"),
    ("second", "s"),
    ("minute", "min"),
    ("hour", "h"),
    ("decibel", "dB"),
    // Legacy upper-case symbols accepted by earlier API versions.
    ("DEG_C", "degC"),
    ("DEG_F", "degF"),
];
