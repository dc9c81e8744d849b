//! Families shared by the unit tests of this crate.

use crate::converter::{AbsoluteConverter, RelativeConverter};
use crate::registry::ConverterRegistry;

crate::unit_family! {
    pub family NON_DIMENSIONAL: NonDimensionalUnit = "NonDimensional" {
        si: UNITLESS,
        non_dimensional: true,
        units: { UNITLESS = "" }
    }
}

crate::unit_family! {
    pub family LENGTH: LengthUnit = "Length" {
        si: METER,
        units: { CENTIMETER = "cm", METER = "m", KILOMETER = "km", INCH = "in", FOOT = "ft" }
    }
}

crate::unit_family! {
    pub family MASS: MassUnit = "Mass" {
        si: KILOGRAM,
        units: { GRAM = "g", KILOGRAM = "kg" }
    }
}

crate::unit_family! {
    pub family TIME: TimeUnit = "Time" {
        si: SECOND,
        units: { SECOND = "s", MINUTE = "min", HOUR = "hr" }
    }
}

crate::unit_family! {
    pub family RELATIVE_TEMPERATURE: RelativeTemperatureUnit = "RelativeTemperature" {
        si: KELVIN,
        counterpart: ABSOLUTE_TEMPERATURE,
        units: { CELSIUS = "°C", FAHRENHEIT = "°F" }
    }
}

crate::unit_family! {
    pub family ABSOLUTE_TEMPERATURE: AbsoluteTemperatureUnit = "AbsoluteTemperature" {
        si: KELVIN,
        counterpart: RELATIVE_TEMPERATURE,
        units: { KELVIN = "K", RANKINE = "°R" }
    }
}

crate::unit_family! {
    pub family FORCE: ForceUnit = "Force" {
        si: NEWTON,
        aliased: MASS * LENGTH / TIME.pow(2.0),
        units: { NEWTON = "N", DYNE = "dyn" }
    }
}

crate::unit_family! {
    pub family PRESSURE: PressureUnit = "Pressure" {
        si: PASCAL,
        aliased: MASS / LENGTH / TIME.pow(2.0),
        units: { PASCAL = "Pa", KILOPASCAL = "kPa", BAR = "bar" }
    }
}

crate::unit_family! {
    pub family ENERGY: EnergyUnit = "Energy" {
        si: JOULE,
        aliased: FORCE * LENGTH,
        units: { JOULE = "J", KILOJOULE = "kJ" }
    }
}

/// Registry with absolute converters for length, mass, time, absolute temperature, force,
/// pressure and energy plus a relative temperature converter.
pub fn registry() -> ConverterRegistry {
    let registry = ConverterRegistry::new();
    let absolute = [
        AbsoluteConverter::new(
            LENGTH,
            METER,
            [
                (CENTIMETER, 100.0),
                (METER, 1.0),
                (KILOMETER, 1e-3),
                (INCH, 100.0 / 2.54),
                (FOOT, 100.0 / 30.48),
            ],
        ),
        AbsoluteConverter::new(MASS, KILOGRAM, [(GRAM, 1000.0), (KILOGRAM, 1.0)]),
        AbsoluteConverter::new(
            TIME,
            SECOND,
            [(SECOND, 1.0), (MINUTE, 1.0 / 60.0), (HOUR, 1.0 / 3600.0)],
        ),
        AbsoluteConverter::new(
            ABSOLUTE_TEMPERATURE,
            KELVIN,
            [(KELVIN, 1.0), (RANKINE, 1.8)],
        ),
        AbsoluteConverter::new(FORCE, NEWTON, [(NEWTON, 1.0), (DYNE, 1e5)]),
        AbsoluteConverter::new(
            PRESSURE,
            BAR,
            [(PASCAL, 1e5), (KILOPASCAL, 100.0), (BAR, 1.0)],
        ),
        AbsoluteConverter::new(ENERGY, JOULE, [(JOULE, 1.0), (KILOJOULE, 1e-3)]),
    ];
    for converter in absolute {
        registry.register(converter).unwrap();
    }
    registry.register(relative_temperature()).unwrap();
    registry
}

pub fn relative_temperature() -> RelativeConverter {
    RelativeConverter::new(
        RELATIVE_TEMPERATURE,
        CELSIUS,
        &[
            (CELSIUS, |t| t),
            (FAHRENHEIT, |t| (t - 32.0) / 1.8),
            (KELVIN, |t| t - 273.15),
            (RANKINE, |t| t / 1.8 - 273.15),
        ],
        &[
            (CELSIUS, |t| t),
            (FAHRENHEIT, |t| t * 1.8 + 32.0),
            (KELVIN, |t| t + 273.15),
            (RANKINE, |t| (t + 273.15) * 1.8),
        ],
    )
}
