use super::{ConverterKind, UnitConverter};
use crate::concrete::UnitDescriptor;
use crate::error::{ConversionError, ConversionResult};
use crate::family::{Family, Unit};
use crate::generic::GenericDescriptor;
use crate::registry::ConverterRegistry;
use std::collections::HashMap;
use std::panic;

/// Conversion function of a relative converter.
pub type ConversionFn = fn(f64) -> f64;

/// Converter for families whose units are related by affine functions (temperature scales).
///
/// `to_reference` maps each unit to a function taking a value in that unit to the reference
/// unit; `from_reference` maps each unit to the function taking a reference value back. Units
/// of the family's counterpart may appear in both tables.
///
/// Relative units have no multiplication factor: [`get_factor`](UnitConverter::get_factor)
/// always fails with [`ConversionError::Unsupported`].
#[derive(Clone, Debug)]
pub struct RelativeConverter {
    generic: GenericDescriptor,
    reference: Unit,
    to_reference: HashMap<Unit, ConversionFn>,
    from_reference: HashMap<Unit, ConversionFn>,
}

impl RelativeConverter {
    pub fn new(
        family: Family,
        reference: Unit,
        to_reference: &[(Unit, ConversionFn)],
        from_reference: &[(Unit, ConversionFn)],
    ) -> Self {
        Self {
            generic: GenericDescriptor::Family(family),
            reference,
            to_reference: to_reference.iter().copied().collect(),
            from_reference: from_reference.iter().copied().collect(),
        }
    }

    pub fn reference(&self) -> Unit {
        self.reference
    }

    fn unit_of(
        &self,
        descriptor: &UnitDescriptor,
        from: &UnitDescriptor,
        to: &UnitDescriptor,
    ) -> ConversionResult<Unit> {
        if !descriptor.isinstance(&self.generic) {
            return Err(ConversionError::unit_conversion(
                from,
                to,
                format!("{} is not an instance of {}", descriptor, self.generic),
            ));
        }
        Unit::try_from(descriptor)
            .map_err(|e| ConversionError::unit_conversion(from, to, e.to_string()))
    }

    /// Runs a table function, turning panics and non-finite results of finite inputs into
    /// [`ConversionError::ConversionFunction`].
    fn apply(&self, function: ConversionFn, value: f64) -> ConversionResult<f64> {
        match panic::catch_unwind(|| function(value)) {
            Ok(result) if result.is_finite() || !value.is_finite() => Ok(result),
            Ok(result) => {
                log::warn!(
                    "Conversion function of {} returned {} for {}",
                    self.generic,
                    result,
                    value
                );
                Err(ConversionError::ConversionFunction {
                    converter: self.generic.to_string(),
                    reason: format!("non-finite result {} for input {}", result, value),
                })
            }
            Err(_) => {
                log::warn!("Conversion function of {} panicked for {}", self.generic, value);
                Err(ConversionError::ConversionFunction {
                    converter: self.generic.to_string(),
                    reason: format!("function panicked for input {}", value),
                })
            }
        }
    }
}

impl UnitConverter for RelativeConverter {
    fn generic(&self) -> &GenericDescriptor {
        &self.generic
    }

    fn kind(&self) -> ConverterKind {
        ConverterKind::Relative
    }

    fn get_factor(
        &self,
        _registry: &ConverterRegistry,
        _from: &UnitDescriptor,
        _to: &UnitDescriptor,
    ) -> ConversionResult<f64> {
        Err(ConversionError::Unsupported {
            converter: self.generic.to_string(),
            reason: "relative units cannot be converted with a multiplication factor".to_string(),
        })
    }

    fn convert(
        &self,
        _registry: &ConverterRegistry,
        value: f64,
        from: &UnitDescriptor,
        to: &UnitDescriptor,
    ) -> ConversionResult<f64> {
        let from_unit = self.unit_of(from, from, to)?;
        let to_unit = self.unit_of(to, from, to)?;

        let to_reference = self.to_reference.get(&from_unit).copied().ok_or_else(|| {
            ConversionError::unit_conversion(
                from,
                to,
                format!("{} is not in the conversion map of {}", from_unit, self.generic),
            )
        })?;
        let from_reference = self.from_reference.get(&to_unit).copied().ok_or_else(|| {
            ConversionError::unit_conversion(
                from,
                to,
                format!("{} is not in the reference conversion map of {}", to_unit, self.generic),
            )
        })?;

        let reference_value = self.apply(to_reference, value)?;
        self.apply(from_reference, reference_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        let registry = ConverterRegistry::new();
        let value = relative_temperature()
            .convert(&registry, 100.0, &CELSIUS.into(), &FAHRENHEIT.into())
            .unwrap();
        assert_relative_eq!(value, 212.0, epsilon = 1e-9);
    }

    #[test]
    fn test_counterpart_units() {
        let registry = ConverterRegistry::new();
        let converter = relative_temperature();
        let kelvin = converter
            .convert(&registry, 25.0, &CELSIUS.into(), &KELVIN.into())
            .unwrap();
        assert_relative_eq!(kelvin, 298.15, epsilon = 1e-9);
        let rankine = converter
            .convert(&registry, 10.0, &KELVIN.into(), &RANKINE.into())
            .unwrap();
        assert_relative_eq!(rankine, 18.0, epsilon = 1e-9);
    }

    #[test]
    fn test_get_factor_is_unsupported() {
        let registry = ConverterRegistry::new();
        let err = relative_temperature()
            .get_factor(&registry, &CELSIUS.into(), &FAHRENHEIT.into())
            .unwrap_err();
        assert!(matches!(err, ConversionError::Unsupported { .. }));
    }

    #[test]
    fn test_rejects_other_families() {
        let registry = ConverterRegistry::new();
        let err = relative_temperature()
            .convert(&registry, 1.0, &METER.into(), &CELSIUS.into())
            .unwrap_err();
        assert!(matches!(err, ConversionError::UnitConversion { .. }));
    }

    #[test]
    fn test_missing_table_entry() {
        let registry = ConverterRegistry::new();
        let converter = RelativeConverter::new(
            RELATIVE_TEMPERATURE,
            CELSIUS,
            &[(CELSIUS, |t| t)],
            &[(CELSIUS, |t| t)],
        );
        let err = converter
            .convert(&registry, 1.0, &FAHRENHEIT.into(), &CELSIUS.into())
            .unwrap_err();
        assert!(matches!(err, ConversionError::UnitConversion { .. }));
    }

    #[test]
    fn test_misbehaving_functions() {
        let registry = ConverterRegistry::new();
        let converter = RelativeConverter::new(
            RELATIVE_TEMPERATURE,
            CELSIUS,
            &[(CELSIUS, |t| t), (FAHRENHEIT, |_| panic!("broken table"))],
            &[(CELSIUS, |t| t), (FAHRENHEIT, |t| t / 0.0)],
        );
        let err = converter
            .convert(&registry, 1.0, &FAHRENHEIT.into(), &CELSIUS.into())
            .unwrap_err();
        assert!(matches!(err, ConversionError::ConversionFunction { .. }));

        let err = converter
            .convert(&registry, 1.0, &CELSIUS.into(), &FAHRENHEIT.into())
            .unwrap_err();
        assert!(matches!(err, ConversionError::ConversionFunction { .. }));
    }

    proptest! {
        #[test]
        fn prop_celsius_kelvin_roundtrip(value in -273.15f64..1e6) {
            let registry = ConverterRegistry::new();
            let converter = relative_temperature();
            let kelvin = converter.convert(&registry, value, &CELSIUS.into(), &KELVIN.into()).unwrap();
            let back = converter.convert(&registry, kelvin, &KELVIN.into(), &CELSIUS.into()).unwrap();
            prop_assert!((back - value).abs() <= 1e-9 * value.abs().max(1.0));
        }
    }
}
