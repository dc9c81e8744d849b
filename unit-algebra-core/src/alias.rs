//! Conversion between descriptors that are only equivalent through alias families.
//!
//! An alias family (force, pressure, energy, ...) is defined by the generic shape it stands for.
//! A value in an alias unit is converted in stages:
//!
//! 1. alias unit to the family's SI unit, with the family's own converter;
//! 2. the SI unit *is* the SI expansion (1 N = 1 kg·m/s²), so no factor is needed;
//! 3. SI expansion to the target, with the converter of the target's shape.
//!
//! The reverse direction mirrors the stages. Descriptors with no lone alias member on either
//! side (e.g. `N·m` against `kg·m²/s²`) are both reduced to SI member by member.

use crate::concrete::{Dimension, UnitDescriptor};
use crate::converter::absolute_dependency;
use crate::error::{ConversionError, ConversionResult};
use crate::generic::GenericDescriptor;
use crate::registry::ConverterRegistry;

/// The descriptor used for one stage of an alias conversion.
///
/// Always the bare member (unit or dimension), never a composite wrapping it, so that the stage
/// resolves to the alias family's own converter.
fn member_descriptor(member: Dimension) -> UnitDescriptor {
    if member.power == 1.0 {
        member.unit.into()
    } else {
        member.into()
    }
}

/// SI unit of the member's family at the member's power.
fn member_si(member: Dimension) -> UnitDescriptor {
    member_descriptor(Dimension::new(member.unit.si(), member.power))
}

/// SI expansion of an alias member, e.g. `kJ^2` gives `(kg^2) * (m^4) / (s^4)`.
fn member_expansion(
    member: Dimension,
    from: &UnitDescriptor,
    to: &UnitDescriptor,
) -> ConversionResult<UnitDescriptor> {
    let aliased = member.unit.family().aliased_generic_descriptor().ok_or_else(|| {
        ConversionError::unit_conversion(
            from,
            to,
            format!("{} is not an alias family", member.unit.family()),
        )
    })?;
    Ok(aliased.pow(member.power).to_si())
}

/// Multiplication factor from `from` to `to` through alias expansion or SI reduction.
///
/// Both descriptors must already be known to be equivalent; the callers are the converters'
/// `get_factor` implementations when an operand is equivalent but not an exact instance.
pub fn staged_factor(
    registry: &ConverterRegistry,
    from: &UnitDescriptor,
    to: &UnitDescriptor,
) -> ConversionResult<f64> {
    if let Some(member) = from.lone_alias() {
        let expansion = member_expansion(member, from, to)?;
        log::debug!("Staged conversion {} -> {} through {}", from, to, expansion);
        let to_si = registry.get_factor(&member_descriptor(member), &member_si(member))?;
        let from_expansion = registry.get_factor(&expansion, to)?;
        return Ok(to_si * from_expansion);
    }

    if let Some(member) = to.lone_alias() {
        let expansion = member_expansion(member, from, to)?;
        log::debug!("Staged conversion {} -> {} through {}", from, to, expansion);
        let to_expansion = registry.get_factor(from, &expansion)?;
        let from_si = registry.get_factor(&member_si(member), &member_descriptor(member))?;
        return Ok(to_expansion * from_si);
    }

    log::debug!("Converting {} -> {} through SI reduction", from, to);
    Ok(si_factor(registry, from)? / si_factor(registry, to)?)
}

/// Factor taking a value in `descriptor` to the SI units of its members.
///
/// Every dimensional member must have an absolute converter registered for its family.
pub fn si_factor(
    registry: &ConverterRegistry,
    descriptor: &UnitDescriptor,
) -> ConversionResult<f64> {
    let generic: GenericDescriptor = descriptor.to_generic();
    let composite = descriptor.clone().into_composite();

    let mut factor = 1.0;
    for member in &composite.numerator {
        factor *= member_si_factor(registry, &generic, member)?;
    }
    for member in &composite.denominator {
        factor /= member_si_factor(registry, &generic, member)?;
    }
    Ok(factor)
}

fn member_si_factor(
    registry: &ConverterRegistry,
    dependent: &GenericDescriptor,
    member: &Dimension,
) -> ConversionResult<f64> {
    if member.unit.is_non_dimensional() {
        return Ok(1.0);
    }
    let converter = absolute_dependency(registry, dependent, member.unit.family())?;
    let factor = converter.get_factor(registry, &member.unit.into(), &member.unit.si().into())?;
    Ok(factor.powf(member.power))
}
