//! Unit categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dimensional class of a catalog unit.
///
/// Two catalog units are mutually convertible only when they share a category.
/// The declaration order is the order categories are listed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    Length,
    Mass,
    Temperature,
    Pressure,
    Volume,
    Flow,
    Velocity,
    Acceleration,
    Force,
    Energy,
    Power,
    ElectricalCurrent,
    ElectricalPotential,
    ElectricalResistance,
    ElectricalCapacitance,
    Frequency,
    Angle,
    Time,
    Area,
    Density,
    Acoustics,
}

impl UnitCategory {
    /// Every category, in declaration order.
    pub const ALL: [UnitCategory; 21] = [
        UnitCategory::Length,
        UnitCategory::Mass,
        UnitCategory::Temperature,
        UnitCategory::Pressure,
        UnitCategory::Volume,
        UnitCategory::Flow,
        UnitCategory::Velocity,
        UnitCategory::Acceleration,
        UnitCategory::Force,
        UnitCategory::Energy,
        UnitCategory::Power,
        UnitCategory::ElectricalCurrent,
        UnitCategory::ElectricalPotential,
        UnitCategory::ElectricalResistance,
        UnitCategory::ElectricalCapacitance,
        UnitCategory::Frequency,
        UnitCategory::Angle,
        UnitCategory::Time,
        UnitCategory::Area,
        UnitCategory::Density,
        UnitCategory::Acoustics,
    ];

    /// Wire name of the category (`"electrical_current"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Length => "length",
            UnitCategory::Mass => "mass",
            UnitCategory::Temperature => "temperature",
            UnitCategory::Pressure => "pressure",
            UnitCategory::Volume => "volume",
            UnitCategory::Flow => "flow",
            UnitCategory::Velocity => "velocity",
            UnitCategory::Acceleration => "acceleration",
            UnitCategory::Force => "force",
            UnitCategory::Energy => "energy",
            UnitCategory::Power => "power",
            UnitCategory::ElectricalCurrent => "electrical_current",
            UnitCategory::ElectricalPotential => "electrical_potential",
            UnitCategory::ElectricalResistance => "electrical_resistance",
            UnitCategory::ElectricalCapacitance => "electrical_capacitance",
            UnitCategory::Frequency => "frequency",
            UnitCategory::Angle => "angle",
            UnitCategory::Time => "time",
            UnitCategory::Area => "area",
            UnitCategory::Density => "density",
            UnitCategory::Acoustics => "acoustics",
        }
    }

    /// A unit whose dimensionality defines the category.
    ///
    /// Used to validate custom unit definitions against their declared category.
    pub fn reference_unit(&self) -> &'static str {
        match self {
            UnitCategory::Length => "m",
            UnitCategory::Mass => "kg",
            UnitCategory::Temperature => "K",
            UnitCategory::Pressure => "Pa",
            UnitCategory::Volume => "m3",
            UnitCategory::Flow => "m3/s",
            UnitCategory::Velocity => "m/s",
            UnitCategory::Acceleration => "m/s2",
            UnitCategory::Force => "N",
            UnitCategory::Energy => "J",
            UnitCategory::Power => "W",
            UnitCategory::ElectricalCurrent => "A",
            UnitCategory::ElectricalPotential => "V",
            UnitCategory::ElectricalResistance => "ohm",
            UnitCategory::ElectricalCapacitance => "F",
            UnitCategory::Frequency => "Hz",
            UnitCategory::Angle => "rad",
            UnitCategory::Time => "s",
            UnitCategory::Area => "m2",
            UnitCategory::Density => "kg/m3",
            UnitCategory::Acoustics => "dB",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}
