//! Registry of unit converters keyed by generic descriptor.
//!
//! Converters are registered once per generic shape and shared as `Arc<dyn UnitConverter>`.
//! With synthesis enabled (the default), lookups for an unregistered exponentiated family
//! (`Length^2`) or composite (`Mass * Length / (Time^2)`) build and cache an
//! [`ExponentiatedConverter`] or [`CompositeConverter`] on first use.
//!
//! Lookups of a power-1 dimension resolve to the family's converter: the two generic forms
//! compare and hash equal.

use crate::concrete::UnitDescriptor;
use crate::converter::{CompositeConverter, ExponentiatedConverter, UnitConverter};
use crate::error::{ConversionError, ConversionResult};
use crate::generic::GenericDescriptor;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type ConverterMap = HashMap<GenericDescriptor, Arc<dyn UnitConverter>>;

/// Thread-safe map from generic descriptors to converters.
///
/// No lock is held while a converter runs, so converters may resolve their dependencies
/// through the same registry.
pub struct ConverterRegistry {
    converters: RwLock<ConverterMap>,
    synthesize: bool,
}

impl ConverterRegistry {
    /// Creates an empty registry that synthesizes missing exponentiated and composite
    /// converters.
    pub fn new() -> Self {
        Self::with_synthesis(true)
    }

    /// Creates an empty registry; `synthesize` controls on-demand converter synthesis.
    pub fn with_synthesis(synthesize: bool) -> Self {
        Self {
            converters: RwLock::new(HashMap::new()),
            synthesize,
        }
    }

    pub fn synthesizes(&self) -> bool {
        self.synthesize
    }

    fn read(&self) -> RwLockReadGuard<'_, ConverterMap> {
        self.converters.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ConverterMap> {
        self.converters.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `converter` under its generic descriptor.
    ///
    /// Fails with [`ConversionError::RegistrationConflict`] if a converter is already
    /// registered for an equal descriptor.
    pub fn register(&self, converter: impl UnitConverter + 'static) -> ConversionResult<()> {
        self.register_arc(Arc::new(converter))
    }

    /// Registers an already shared converter.
    pub fn register_arc(&self, converter: Arc<dyn UnitConverter>) -> ConversionResult<()> {
        let generic = converter.generic().clone();
        match self.write().entry(generic) {
            Entry::Occupied(entry) => Err(ConversionError::RegistrationConflict(
                entry.key().to_string(),
            )),
            Entry::Vacant(entry) => {
                log::debug!(
                    "Registered {:?} converter for {}",
                    converter.kind(),
                    entry.key()
                );
                entry.insert(converter);
                Ok(())
            }
        }
    }

    /// Returns the converter registered for `generic`, synthesizing it if allowed.
    pub fn get(&self, generic: &GenericDescriptor) -> ConversionResult<Arc<dyn UnitConverter>> {
        log::trace!("Looking up converter for {}", generic);
        if let Some(converter) = self.read().get(generic) {
            return Ok(Arc::clone(converter));
        }

        let synthesized = match self.synthesize.then(|| Self::synthesized(generic)).flatten() {
            Some(converter) => converter,
            None => return Err(ConversionError::UndefinedConverter(generic.to_string())),
        };

        // Another thread may have won the race; keep whichever converter landed first.
        let converter = self
            .write()
            .entry(generic.clone())
            .or_insert_with(|| {
                log::debug!(
                    "Synthesized {:?} converter for {}",
                    synthesized.kind(),
                    generic
                );
                synthesized
            })
            .clone();
        Ok(converter)
    }

    fn synthesized(generic: &GenericDescriptor) -> Option<Arc<dyn UnitConverter>> {
        match generic {
            GenericDescriptor::Composite(composite) => Some(
                Arc::new(CompositeConverter::new(composite.clone())) as Arc<dyn UnitConverter>
            ),
            other => other
                .as_dimension()
                .filter(|dimension| dimension.power != 1.0)
                .map(|dimension| {
                    Arc::new(ExponentiatedConverter::new(dimension)) as Arc<dyn UnitConverter>
                }),
        }
    }

    pub fn contains(&self, generic: &GenericDescriptor) -> bool {
        self.read().contains_key(generic)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Multiplication factor from `from` to `to`, using the converter of `to`'s shape.
    pub fn get_factor(&self, from: &UnitDescriptor, to: &UnitDescriptor) -> ConversionResult<f64> {
        self.get(&to.to_generic())?.get_factor(self, from, to)
    }

    /// Converts `value` from `from` units to `to` units, using the converter of `to`'s shape.
    pub fn convert(
        &self,
        value: f64,
        from: &UnitDescriptor,
        to: &UnitDescriptor,
    ) -> ConversionResult<f64> {
        self.get(&to.to_generic())?.convert(self, value, from, to)
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converters = self.read();
        let mut keys: Vec<String> = converters.keys().map(ToString::to_string).collect();
        keys.sort();
        f.debug_struct("ConverterRegistry")
            .field("converters", &keys)
            .field("synthesize", &self.synthesize)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::{AbsoluteConverter, ConverterKind};
    use crate::fixtures::*;
    use approx::assert_relative_eq;
    use std::thread;

    #[test]
    fn test_register_and_get() {
        let registry = ConverterRegistry::new();
        assert!(registry.is_empty());
        registry
            .register(AbsoluteConverter::new(LENGTH, METER, [(METER, 1.0)]))
            .unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&LENGTH.into()));
        assert_eq!(
            registry.get(&LENGTH.into()).unwrap().kind(),
            ConverterKind::Absolute
        );
    }

    #[test]
    fn test_double_registration_conflicts() {
        let registry = ConverterRegistry::new();
        registry
            .register(AbsoluteConverter::new(LENGTH, METER, [(METER, 1.0)]))
            .unwrap();
        let err = registry
            .register(AbsoluteConverter::new(LENGTH, METER, [(METER, 1.0)]))
            .unwrap_err();
        assert_eq!(err, ConversionError::RegistrationConflict("Length".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_undefined_family() {
        let registry = ConverterRegistry::new();
        let err = registry.get(&MASS.into()).unwrap_err();
        assert_eq!(err, ConversionError::UndefinedConverter("Mass".to_string()));
    }

    #[test]
    fn test_power_one_dimension_resolves_to_family() {
        let registry = registry();
        let converter = registry.get(&LENGTH.pow(1.0).into()).unwrap();
        assert_eq!(converter.kind(), ConverterKind::Absolute);
        assert_eq!(*converter.generic(), GenericDescriptor::from(LENGTH));
    }

    #[test]
    fn test_synthesis_is_cached() {
        let registry = registry();
        let before = registry.len();
        let generic: GenericDescriptor = FORCE.pow(2.5).into();
        let first = registry.get(&generic).unwrap();
        let second = registry.get(&generic).unwrap();
        assert_eq!(first.kind(), ConverterKind::Exponentiated);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), before + 1);

        let composite: GenericDescriptor = (MASS / TIME).into();
        assert_eq!(registry.get(&composite).unwrap().kind(), ConverterKind::Composite);
        assert!(registry.contains(&composite));
    }

    #[test]
    fn test_synthesis_disabled() {
        let registry = ConverterRegistry::with_synthesis(false);
        registry
            .register(AbsoluteConverter::new(LENGTH, METER, [(METER, 1.0)]))
            .unwrap();
        assert!(matches!(
            registry.get(&LENGTH.pow(2.0).into()),
            Err(ConversionError::UndefinedConverter(_))
        ));
        assert!(matches!(
            registry.get(&(LENGTH / TIME).into()),
            Err(ConversionError::UndefinedConverter(_))
        ));
    }

    #[test]
    fn test_convert_uses_target_shape() {
        let registry = registry();
        let value = registry
            .convert(2.0, &KILOMETER.into(), &METER.into())
            .unwrap();
        assert_relative_eq!(value, 2000.0, max_relative = 1e-12);
        let value = registry
            .convert(1.0, &(METER / SECOND).into(), &(KILOMETER / HOUR).into())
            .unwrap();
        assert_relative_eq!(value, 3.6, max_relative = 1e-12);
    }

    #[test]
    fn test_convert_wrong_family() {
        let registry = registry();
        let err = registry
            .convert(1.0, &SECOND.into(), &METER.into())
            .unwrap_err();
        assert!(matches!(err, ConversionError::UnitConversion { .. }));
    }

    #[test]
    fn test_concurrent_lookups() {
        let registry = Arc::new(registry());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    registry
                        .convert(1.0, &METER.pow(2.0).into(), &CENTIMETER.pow(2.0).into())
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_relative_eq!(handle.join().unwrap(), 1e4, max_relative = 1e-12);
        }
        let first = registry.get(&LENGTH.pow(2.0).into()).unwrap();
        let second = registry.get(&LENGTH.pow(2.0).into()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
