use super::{absolute_dependency, check_operands, ConverterKind, UnitConverter};
use crate::alias;
use crate::concrete::{CompositeDimension, Dimension, UnitDescriptor};
use crate::error::{ConversionError, ConversionResult};
use crate::generic::{GenericCompositeDimension, GenericDescriptor};
use crate::registry::ConverterRegistry;

/// Converter for products/quotients of absolute families.
///
/// Each `from` member is paired with an unused `to` member of the same shape on the same side
/// and converted with its family's absolute converter; the factor is the numerator product over
/// the denominator product.
#[derive(Clone, Debug)]
pub struct CompositeConverter {
    generic: GenericDescriptor,
}

impl CompositeConverter {
    pub fn new(composite: GenericCompositeDimension) -> Self {
        Self {
            generic: GenericDescriptor::Composite(composite),
        }
    }

    /// Product of the member factors of one side.
    ///
    /// Each target member is paired with at most one source member, so `m * cm` maps onto
    /// `km * in` member by member instead of collapsing onto the first match.
    fn side_factor(
        &self,
        registry: &ConverterRegistry,
        members: &[Dimension],
        targets: &[Dimension],
        from: &CompositeDimension,
        to: &CompositeDimension,
    ) -> ConversionResult<f64> {
        let mut used = vec![false; targets.len()];
        let mut factor = 1.0;
        for member in members {
            let generic = GenericDescriptor::from(member.to_generic());
            let index = targets
                .iter()
                .zip(&used)
                .position(|(target, &taken)| !taken && target.isinstance(&generic))
                .ok_or_else(|| {
                    ConversionError::unit_conversion(
                        from,
                        to,
                        format!("no member of {} matches {}", to, member),
                    )
                })?;
            used[index] = true;
            let target = targets[index];
            let converter = absolute_dependency(registry, &self.generic, member.unit.family())?;
            factor *= converter
                .get_factor(registry, &member.unit.into(), &target.unit.into())?
                .powf(member.power);
        }
        Ok(factor)
    }
}

impl UnitConverter for CompositeConverter {
    fn generic(&self) -> &GenericDescriptor {
        &self.generic
    }

    fn kind(&self) -> ConverterKind {
        ConverterKind::Composite
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
        let from = CompositeDimension::from(from.clone());
        let to = CompositeDimension::from(to.clone());

        let numerator = self.side_factor(registry, &from.numerator, &to.numerator, &from, &to)?;
        let denominator =
            self.side_factor(registry, &from.denominator, &to.denominator, &from, &to)?;
        Ok(numerator / denominator)
    }
}
