//! Conversion strategies.
//!
//! Every converter is registered under one generic descriptor and converts between concrete
//! descriptors that are instances of it:
//!
//! | Strategy                     | Generic          | Conversion                               |
//! |------------------------------|------------------|------------------------------------------|
//! | [`AbsoluteConverter`]        | family           | `value * factor[to] / factor[from]`      |
//! | [`RelativeConverter`]        | family           | `from_reference[to](to_reference[from](value))` |
//! | [`ExponentiatedConverter`]   | family^power     | base factor raised to the power          |
//! | [`CompositeConverter`]       | composite        | product of per-member factors            |
//!
//! Operands that are only *equivalent* to the converter's generic (through alias families, or
//! grouped differently) are converted by [`alias::staged_factor`](crate::alias::staged_factor).

mod absolute;
mod composite;
mod exponentiated;
mod relative;

pub use absolute::AbsoluteConverter;
pub use composite::CompositeConverter;
pub use exponentiated::ExponentiatedConverter;
pub use relative::{ConversionFn, RelativeConverter};

use crate::concrete::UnitDescriptor;
use crate::error::{ConversionError, ConversionResult};
use crate::family::Family;
use crate::generic::GenericDescriptor;
use crate::registry::ConverterRegistry;
use core::fmt;
use std::sync::Arc;

/// The four conversion strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConverterKind {
    Absolute,
    Relative,
    Exponentiated,
    Composite,
}

/// A conversion strategy registered under a generic descriptor.
pub trait UnitConverter: Send + Sync + fmt::Debug {
    /// The generic descriptor this converter is registered under.
    fn generic(&self) -> &GenericDescriptor;

    fn kind(&self) -> ConverterKind;

    /// Multiplication factor converting a value in `from` units into `to` units.
    ///
    /// Dependency converters (base families, composite members, alias stages) are resolved
    /// through `registry`.
    fn get_factor(
        &self,
        registry: &ConverterRegistry,
        from: &UnitDescriptor,
        to: &UnitDescriptor,
    ) -> ConversionResult<f64>;

    /// Converts `value` from `from` units into `to` units.
    fn convert(
        &self,
        registry: &ConverterRegistry,
        value: f64,
        from: &UnitDescriptor,
        to: &UnitDescriptor,
    ) -> ConversionResult<f64> {
        Ok(value * self.get_factor(registry, from, to)?)
    }
}

/// Fails unless both operands are instance-equivalent to `generic`.
///
/// Returns `true` when both are exact instances and the converter's direct path applies.
pub(crate) fn check_operands(
    generic: &GenericDescriptor,
    from: &UnitDescriptor,
    to: &UnitDescriptor,
) -> ConversionResult<bool> {
    if !from.isinstance_equivalent(generic) {
        return Err(ConversionError::unit_conversion(
            from,
            to,
            format!("'from' is not an instance of {}", generic),
        ));
    }
    if !to.isinstance_equivalent(generic) {
        return Err(ConversionError::unit_conversion(
            from,
            to,
            format!("'to' is not an instance of {}", generic),
        ));
    }
    Ok(from.isinstance(generic) && to.isinstance(generic))
}

/// Resolves the absolute converter of `family` on behalf of the converter for `dependent`.
pub(crate) fn absolute_dependency(
    registry: &ConverterRegistry,
    dependent: &GenericDescriptor,
    family: Family,
) -> ConversionResult<Arc<dyn UnitConverter>> {
    let converter = registry
        .get(&GenericDescriptor::Family(family))
        .map_err(|_| ConversionError::MissingDependency {
            converter: dependent.to_string(),
            dependency: family.to_string(),
        })?;
    if converter.kind() != ConverterKind::Absolute {
        return Err(ConversionError::Unsupported {
            converter: dependent.to_string(),
            reason: format!(
                "{} is not an absolute unit family; only absolute units can be combined",
                family
            ),
        });
    }
    Ok(converter)
}
