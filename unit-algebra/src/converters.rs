//! Built-in converters for the unit catalogue and the registration pass.
//!
//! Absolute conversion tables hold how many of each unit make one reference unit.
//! Registration order matters only for readability of the logs: base families first, then
//! exponentiated shapes, then composite shapes; composite and exponentiated converters resolve
//! their dependencies lazily at conversion time.

use crate::prefix::UnitPrefix;
use crate::units::*;
use unit_algebra_core::{
    AbsoluteConverter, CompositeConverter, ConversionResult, ConverterKind, ConverterRegistry,
    ExponentiatedConverter, Family, GenericDescriptor, RelativeConverter, UnitConverter,
    UnitDescriptor,
};

// =============================================================================
// Absolute tables
// =============================================================================

const SECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;

pub fn non_dimensional() -> AbsoluteConverter {
    AbsoluteConverter::new(NON_DIMENSIONAL, UNITLESS, [(UNITLESS, 1.0)])
}

pub fn length() -> AbsoluteConverter {
    AbsoluteConverter::new(
        LENGTH,
        METER,
        [
            (MILLIMETER, UnitPrefix::Milli.inverse()),
            (CENTIMETER, UnitPrefix::Centi.inverse()),
            (METER, 1.0),
            (KILOMETER, UnitPrefix::Kilo.inverse()),
            (INCH, 1.0 / 0.0254),
            (FOOT, 1.0 / 0.3048),
            (YARD, 1.0 / 0.9144),
            (MILE, 1.0 / 1609.344),
            (NAUTICAL_MILE, 1.0 / 1852.0),
        ],
    )
}

pub fn mass() -> AbsoluteConverter {
    AbsoluteConverter::new(
        MASS,
        KILOGRAM,
        [
            (MILLIGRAM, UnitPrefix::Kilo.value() * UnitPrefix::Milli.inverse()),
            (GRAM, UnitPrefix::Kilo.value()),
            (KILOGRAM, 1.0),
            (METRIC_TONNE, UnitPrefix::Kilo.inverse()),
            (POUND, 1.0 / 0.453_592_37),
        ],
    )
}

pub fn amount() -> AbsoluteConverter {
    AbsoluteConverter::new(
        AMOUNT,
        MOL,
        [(MOL, 1.0), (KILOMOL, UnitPrefix::Kilo.inverse())],
    )
}

pub fn time() -> AbsoluteConverter {
    AbsoluteConverter::new(
        TIME,
        SECOND,
        [
            (MILLISECOND, UnitPrefix::Milli.inverse()),
            (SECOND, 1.0),
            (MINUTE, 1.0 / 60.0),
            (HOUR, 1.0 / 3600.0),
            (DAY, 1.0 / SECONDS_PER_DAY),
            (WEEK, 1.0 / (SECONDS_PER_DAY * 7.0)),
            (MONTH, 1.0 / (SECONDS_PER_DAY * 365.0 / 12.0)),
            (YEAR, 1.0 / (SECONDS_PER_DAY * 365.0)),
        ],
    )
}

pub fn electric_current() -> AbsoluteConverter {
    AbsoluteConverter::new(
        ELECTRIC_CURRENT,
        AMPERE,
        [
            (MILLIAMPERE, UnitPrefix::Milli.inverse()),
            (AMPERE, 1.0),
            (KILOAMPERE, UnitPrefix::Kilo.inverse()),
        ],
    )
}

pub fn force() -> AbsoluteConverter {
    AbsoluteConverter::new(FORCE, NEWTON, [(NEWTON, 1.0), (DYNE, 1e5)])
}

pub fn pressure() -> AbsoluteConverter {
    AbsoluteConverter::new(
        PRESSURE,
        BAR,
        [
            (MILLIBAR, UnitPrefix::Milli.inverse()),
            (BAR, 1.0),
            (PSI, 1e5 / 6_894.757_293_168),
            (PASCAL, 1e5),
            (KILOPASCAL, 1e2),
            (MEGAPASCAL, 0.1),
        ],
    )
}

pub fn energy() -> AbsoluteConverter {
    AbsoluteConverter::new(
        ENERGY,
        JOULE,
        [
            (JOULE, 1.0),
            (KILOJOULE, UnitPrefix::Kilo.inverse()),
            (MEGAJOULE, UnitPrefix::Mega.inverse()),
            (GIGAJOULE, UnitPrefix::Giga.inverse()),
            (CALORIE, 1.0 / 4.184),
            (KILOCALORIE, 1.0 / 4.184 * UnitPrefix::Kilo.inverse()),
            (BTU, 1.0 / 1_055.055_852_62),
            (ELECTRONVOLT, 1.0 / 1.602_176_634e-19),
            (WATTHOUR, 1.0 / 3600.0),
            (KILOWATTHOUR, 1.0 / 3600.0 * UnitPrefix::Kilo.inverse()),
        ],
    )
}

pub fn power() -> AbsoluteConverter {
    AbsoluteConverter::new(
        POWER,
        WATT,
        [
            (WATT, 1.0),
            (KILOWATT, UnitPrefix::Kilo.inverse()),
            (MEGAWATT, UnitPrefix::Mega.inverse()),
            (GIGAWATT, UnitPrefix::Giga.inverse()),
        ],
    )
}

// =============================================================================
// Temperature
// =============================================================================

/// Affine converter between every temperature unit, with °C as reference.
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

/// Absolute temperature converter.
///
/// Factors between K and °R come from an absolute table, so absolute temperatures can take
/// part in composites (`J / K`). Values with a relative temperature on either side are
/// handed over to the relative temperature converter.
#[derive(Clone, Debug)]
pub struct AbsoluteTemperatureConverter {
    inner: AbsoluteConverter,
}

impl AbsoluteTemperatureConverter {
    pub fn new() -> Self {
        Self {
            inner: AbsoluteConverter::new(
                ABSOLUTE_TEMPERATURE,
                KELVIN,
                [(KELVIN, 1.0), (RANKINE, 1.8)],
            ),
        }
    }

    fn is_relative(descriptor: &UnitDescriptor) -> bool {
        descriptor.lone_member().is_some_and(|member| {
            member.power == 1.0 && member.unit.family() == RELATIVE_TEMPERATURE
        })
    }
}

impl Default for AbsoluteTemperatureConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitConverter for AbsoluteTemperatureConverter {
    fn generic(&self) -> &GenericDescriptor {
        self.inner.generic()
    }

    fn kind(&self) -> ConverterKind {
        ConverterKind::Absolute
    }

    fn get_factor(
        &self,
        registry: &ConverterRegistry,
        from: &UnitDescriptor,
        to: &UnitDescriptor,
    ) -> ConversionResult<f64> {
        self.inner.get_factor(registry, from, to)
    }

    fn convert(
        &self,
        registry: &ConverterRegistry,
        value: f64,
        from: &UnitDescriptor,
        to: &UnitDescriptor,
    ) -> ConversionResult<f64> {
        if Self::is_relative(from) || Self::is_relative(to) {
            log::trace!("Delegating {} -> {} to the relative converter", from, to);
            return registry
                .get(&RELATIVE_TEMPERATURE.into())?
                .convert(registry, value, from, to);
        }
        Ok(value * self.get_factor(registry, from, to)?)
    }
}

// =============================================================================
// Registration
// =============================================================================

/// Families whose aliased shapes get an explicit composite converter.
const ALIAS_FAMILIES: [Family; 4] = [FORCE, PRESSURE, ENERGY, POWER];

/// Registers every built-in converter into `registry`.
///
/// Fails with a registration conflict if any of the shapes already has a converter.
pub fn register_builtin(registry: &ConverterRegistry) -> ConversionResult<()> {
    let absolute = [
        non_dimensional(),
        length(),
        mass(),
        amount(),
        time(),
        electric_current(),
        force(),
        pressure(),
        energy(),
        power(),
    ];
    for converter in absolute {
        registry.register(converter)?;
    }
    registry.register(relative_temperature())?;
    registry.register(AbsoluteTemperatureConverter::new())?;

    // area and volume
    for exponent in [2.0, 3.0] {
        registry.register(ExponentiatedConverter::new(LENGTH.pow(exponent)))?;
    }

    for family in ALIAS_FAMILIES {
        if let Some(shape) = family.aliased_generic_descriptor() {
            registry.register(CompositeConverter::new(shape.into_composite()))?;
        }
    }

    log::debug!("Registered {} built-in converters", registry.len());
    Ok(())
}
