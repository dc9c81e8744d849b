use super::{check_operands, ConverterKind, UnitConverter};
use crate::alias;
use crate::concrete::UnitDescriptor;
use crate::error::{ConversionError, ConversionResult};
use crate::family::{Family, Unit};
use crate::generic::GenericDescriptor;
use crate::registry::ConverterRegistry;
use std::collections::HashMap;

/// Converter for families whose units differ by a constant factor.
///
/// The conversion map holds how many of each unit make one reference unit, e.g. with metre as
/// reference: `cm -> 100`, `km -> 0.001`.
#[derive(Clone, Debug)]
pub struct AbsoluteConverter {
    generic: GenericDescriptor,
    reference: Unit,
    factors: HashMap<Unit, f64>,
}

impl AbsoluteConverter {
    pub fn new(
        family: Family,
        reference: Unit,
        factors: impl IntoIterator<Item = (Unit, f64)>,
    ) -> Self {
        Self {
            generic: GenericDescriptor::Family(family),
            reference,
            factors: factors.into_iter().collect(),
        }
    }

    pub fn reference(&self) -> Unit {
        self.reference
    }

    /// Units of the reference per `unit`'s factor entry.
    pub fn factor_of(&self, unit: Unit) -> Option<f64> {
        self.factors.get(&unit).copied()
    }

    /// Factor between two member units.
    pub fn unit_factor(&self, from: Unit, to: Unit) -> ConversionResult<f64> {
        let from_factor = self.factor_of(from).ok_or_else(|| {
            ConversionError::unit_conversion(
                from,
                to,
                format!("{} is not registered in the conversion map of {}", from, self.generic),
            )
        })?;
        let to_factor = self.factor_of(to).ok_or_else(|| {
            ConversionError::unit_conversion(
                from,
                to,
                format!("{} is not registered in the conversion map of {}", to, self.generic),
            )
        })?;
        Ok((1.0 / from_factor) * to_factor)
    }
}

impl UnitConverter for AbsoluteConverter {
    fn generic(&self) -> &GenericDescriptor {
        &self.generic
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
        if !check_operands(&self.generic, from, to)? {
            return alias::staged_factor(registry, from, to);
        }
        let from_unit = Unit::try_from(from)
            .map_err(|e| ConversionError::unit_conversion(from, to, e.to_string()))?;
        let to_unit = Unit::try_from(to)
            .map_err(|e| ConversionError::unit_conversion(from, to, e.to_string()))?;
        self.unit_factor(from_unit, to_unit)
    }
}
