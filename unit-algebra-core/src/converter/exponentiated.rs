use super::{absolute_dependency, check_operands, ConverterKind, UnitConverter};
use crate::alias;
use crate::concrete::{Dimension, UnitDescriptor};
use crate::error::{ConversionError, ConversionResult};
use crate::generic::{GenericDescriptor, GenericDimension};
use crate::registry::ConverterRegistry;

/// Converter for an absolute family raised to a power (area, volume, ...).
///
/// Requires an absolute converter for the base family; the factor is the base factor raised to
/// the power.
#[derive(Clone, Debug)]
pub struct ExponentiatedConverter {
    generic: GenericDescriptor,
    dimension: GenericDimension,
}

impl ExponentiatedConverter {
    pub fn new(dimension: GenericDimension) -> Self {
        Self {
            generic: GenericDescriptor::Dimension(dimension),
            dimension,
        }
    }

    pub fn dimension(&self) -> GenericDimension {
        self.dimension
    }
}

impl UnitConverter for ExponentiatedConverter {
    fn generic(&self) -> &GenericDescriptor {
        &self.generic
    }

    fn kind(&self) -> ConverterKind {
        ConverterKind::Exponentiated
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
        let from_dimension = Dimension::try_from(from)
            .map_err(|e| ConversionError::unit_conversion(from, to, e.to_string()))?;
        let to_dimension = Dimension::try_from(to)
            .map_err(|e| ConversionError::unit_conversion(from, to, e.to_string()))?;

        let base = absolute_dependency(registry, &self.generic, self.dimension.family)?;
        let factor = base.get_factor(
            registry,
            &from_dimension.unit.into(),
            &to_dimension.unit.into(),
        )?;
        Ok(factor.powf(to_dimension.power))
    }
}
