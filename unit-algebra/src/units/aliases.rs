//! Alias families: each stands for a composite of base families.

use super::base::{LENGTH, MASS, TIME};
use unit_algebra_core::unit_family;

unit_family! {
    /// Mass · length / time².
    pub family FORCE: ForceUnit = "Force" {
        si: NEWTON,
        aliased: MASS * LENGTH / TIME.pow(2.0),
        units: { NEWTON = "N", DYNE = "dyn" }
    }
}

unit_family! {
    /// Mass / length / time².
    pub family PRESSURE: PressureUnit = "Pressure" {
        si: PASCAL,
        aliased: MASS / LENGTH / TIME.pow(2.0),
        units: {
            MILLIBAR = "mbar",
            BAR = "bar",
            PSI = "psi",
            PASCAL = "Pa",
            KILOPASCAL = "kPa",
            MEGAPASCAL = "MPa",
        }
    }
}

unit_family! {
    /// Mass · length² / time².
    pub family ENERGY: EnergyUnit = "Energy" {
        si: JOULE,
        aliased: MASS * LENGTH.pow(2.0) / TIME.pow(2.0),
        units: {
            JOULE = "J",
            KILOJOULE = "kJ",
            MEGAJOULE = "MJ",
            GIGAJOULE = "GJ",
            CALORIE = "cal",
            KILOCALORIE = "kcal",
            BTU = "Btu",
            ELECTRONVOLT = "eV",
            WATTHOUR = "Wh",
            KILOWATTHOUR = "kWh",
        }
    }
}

unit_family! {
    /// Mass · length² / time³.
    pub family POWER: PowerUnit = "Power" {
        si: WATT,
        aliased: MASS * LENGTH.pow(2.0) / TIME.pow(3.0),
        units: { WATT = "W", KILOWATT = "kW", MEGAWATT = "MW", GIGAWATT = "GW" }
    }
}
