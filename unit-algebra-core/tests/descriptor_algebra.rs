//! End-to-end tests for families declared outside the crate.

use approx::assert_relative_eq;
use unit_algebra_core::{
    unit_family, AbsoluteConverter, AnyDescriptor, CompositeDimension, ConversionError,
    ConverterKind, ConverterRegistry, DescriptorError, GenericCompositeDimension,
    GenericDescriptor, RelativeConverter, UnitDescriptor,
};

unit_family! {
    /// Distances.
    pub family DISTANCE: DistanceUnit = "Distance" {
        si: METRE,
        units: { MILLIMETRE = "mm", METRE = "m", KILOMETRE = "km" }
    }
}

unit_family! {
    pub family WEIGHT: WeightUnit = "Weight" {
        si: KILO,
        units: { GRAMME = "g", KILO = "kg" }
    }
}

unit_family! {
    pub family DURATION: DurationUnit = "Duration" {
        si: SEC,
        units: { SEC = "s", HR = "hr" }
    }
}

unit_family! {
    pub family CELSIUS_SCALE: CelsiusScale = "CelsiusScale" {
        si: KELV,
        counterpart: KELVIN_SCALE,
        units: { DEG_C = "°C" }
    }
}

unit_family! {
    pub family KELVIN_SCALE: KelvinScale = "KelvinScale" {
        si: KELV,
        counterpart: CELSIUS_SCALE,
        units: { KELV = "K" }
    }
}

unit_family! {
    /// Mass times acceleration.
    pub family THRUST: ThrustUnit = "Thrust" {
        si: NEWTON,
        aliased: WEIGHT * DISTANCE / DURATION.pow(2.0),
        units: { NEWTON = "N", KILONEWTON = "kN" }
    }
}

unit_family! {
    pub family WORK: WorkUnit = "Work" {
        si: JOULE,
        aliased: THRUST * DISTANCE,
        units: { JOULE = "J" }
    }
}

fn registry() -> ConverterRegistry {
    let registry = ConverterRegistry::new();
    registry
        .register(AbsoluteConverter::new(
            DISTANCE,
            METRE,
            [(MILLIMETRE, 1000.0), (METRE, 1.0), (KILOMETRE, 1e-3)],
        ))
        .unwrap();
    registry
        .register(AbsoluteConverter::new(
            WEIGHT,
            KILO,
            [(GRAMME, 1000.0), (KILO, 1.0)],
        ))
        .unwrap();
    registry
        .register(AbsoluteConverter::new(
            DURATION,
            SEC,
            [(SEC, 1.0), (HR, 1.0 / 3600.0)],
        ))
        .unwrap();
    registry
        .register(AbsoluteConverter::new(
            THRUST,
            NEWTON,
            [(NEWTON, 1.0), (KILONEWTON, 1e-3)],
        ))
        .unwrap();
    registry
        .register(AbsoluteConverter::new(WORK, JOULE, [(JOULE, 1.0)]))
        .unwrap();
    registry
        .register(RelativeConverter::new(
            CELSIUS_SCALE,
            DEG_C,
            &[(DEG_C, |t| t), (KELV, |t| t - 273.15)],
            &[(DEG_C, |t| t), (KELV, |t| t + 273.15)],
        ))
        .unwrap();
    registry
}

// =============================================================================
// Algebra
// =============================================================================

#[test]
fn test_rendering() {
    let generic = WEIGHT * DISTANCE / DURATION.pow(2.0);
    assert_eq!(generic.to_string(), "Distance * Weight / (Duration^2)");

    let concrete = KILO * METRE / SEC.pow(2.0) / HR;
    assert_eq!(concrete.to_string(), "kg * m / (s^2) / hr");
}

#[test]
fn test_alias_equivalence() {
    let thrust = GenericDescriptor::from(THRUST);
    let expansion = GenericDescriptor::from(WEIGHT * DISTANCE / DURATION.pow(2.0));
    assert!(thrust.is_equivalent(&expansion));
    assert!(expansion.is_equivalent(&thrust));
    assert_ne!(thrust, expansion);

    let work = GenericDescriptor::from(WORK);
    let nested = GenericDescriptor::from(WEIGHT * DISTANCE.pow(2.0) / DURATION.pow(2.0));
    assert!(work.is_equivalent(&nested));
    assert!(nested.is_equivalent(&work));
}

#[test]
fn test_simplification_merges_and_cancels() {
    let composite = METRE * METRE * KILO / METRE / KILO;
    let simplified = composite.simplified();
    assert_eq!(simplified, CompositeDimension::new(vec![METRE.pow(1.0)], vec![]));

    let generic: GenericCompositeDimension = DISTANCE.pow(2.0) / DISTANCE;
    assert_eq!(
        generic.simplified(),
        GenericCompositeDimension::new(vec![DISTANCE.pow(1.0)], vec![])
    );
}

#[test]
fn test_mixed_descriptors_are_rejected() {
    let generic = AnyDescriptor::from(GenericDescriptor::from(DISTANCE));
    let concrete = AnyDescriptor::from(UnitDescriptor::from(METRE));
    assert!(matches!(
        generic.checked_mul(&concrete),
        Err(DescriptorError::BinaryOperation { .. })
    ));
    assert!(matches!(
        concrete.checked_pow(f64::NAN),
        Err(DescriptorError::InvalidExponent(_))
    ));
}

#[test]
fn test_counterpart_instances() {
    assert!(DEG_C.isinstance(&KELVIN_SCALE.into()));
    assert!(KELV.isinstance(&CELSIUS_SCALE.into()));
    assert!(!KELV.isinstance(&DISTANCE.into()));
}

// =============================================================================
// Conversion
// =============================================================================

#[test]
fn test_composite_conversion() {
    let value = registry()
        .convert(36.0, &(KILOMETRE / HR).into(), &(METRE / SEC).into())
        .unwrap();
    assert_relative_eq!(value, 10.0, max_relative = 1e-12);
}

#[test]
fn test_alias_conversion() {
    let registry = registry();
    let value = registry
        .convert(
            2.0,
            &KILONEWTON.into(),
            &(GRAMME * MILLIMETRE / SEC.pow(2.0)).into(),
        )
        .unwrap();
    assert_relative_eq!(value, 2e9, max_relative = 1e-12);

    let value = registry
        .convert(1.0, &JOULE.into(), &(GRAMME * METRE.pow(2.0) / SEC.pow(2.0)).into())
        .unwrap();
    assert_relative_eq!(value, 1000.0, max_relative = 1e-12);
}

#[test]
fn test_relative_conversion() {
    // KelvinScale has no converter of its own
    let err = registry()
        .convert(0.0, &DEG_C.into(), &KELV.into())
        .unwrap_err();
    assert!(matches!(err, ConversionError::UndefinedConverter(_)));

    let registry = registry();
    let converter = registry.get(&CELSIUS_SCALE.into()).unwrap();
    assert_eq!(converter.kind(), ConverterKind::Relative);
    let kelvin = converter
        .convert(&registry, 0.0, &DEG_C.into(), &KELV.into())
        .unwrap();
    assert_relative_eq!(kelvin, 273.15, max_relative = 1e-12);
}

#[test]
fn test_volume_synthesis() {
    let registry = registry();
    assert!(!registry.contains(&DISTANCE.pow(3.0).into()));
    let value = registry
        .convert(1.0, &METRE.pow(3.0).into(), &MILLIMETRE.pow(3.0).into())
        .unwrap();
    assert_relative_eq!(value, 1e9, max_relative = 1e-12);
    assert!(registry.contains(&DISTANCE.pow(3.0).into()));
}

#[test]
fn test_incompatible_shapes() {
    let err = registry()
        .convert(1.0, &KILO.into(), &(METRE / SEC).into())
        .unwrap_err();
    assert!(matches!(err, ConversionError::UnitConversion { .. }));
}
