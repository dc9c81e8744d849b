//! Core unit-descriptor algebra for dimensional analysis.
//!
//! `unit-algebra-core` models measurement units at two levels:
//!
//! - **Generic descriptors** describe the *shape* of a unit: a bare [`Family`] (e.g. length),
//!   a family raised to a power ([`GenericDimension`], e.g. length²) or a product/quotient of
//!   several ([`GenericCompositeDimension`], e.g. mass·length/time²).
//! - **Concrete descriptors** pick a specific member of each family: a [`Unit`] (e.g. metre),
//!   a [`Dimension`] (e.g. m²) or a [`CompositeDimension`] (e.g. kg·m/s²).
//!
//! On top of the algebra sits the [`ConverterRegistry`], which maps generic descriptors to
//! conversion strategies ([`converter`]) and synthesizes converters for exponentiated and
//! composite shapes on demand.
//!
//! Most users should depend on `unit-algebra` (the facade crate), which ships a unit catalogue
//! and a process-wide registry. This crate is useful on its own when declaring custom families.
//!
//! # What this crate solves
//!
//! - Building unit expressions with `*`, `/` and [`pow`](Family::pow).
//! - Deciding equality (structural) and equivalence (through alias units) of unit shapes.
//! - Simplifying composites deterministically (merge repeated factors, cancel zero exponents).
//! - Converting values between any two descriptors of equivalent shape.
//!
//! # What this crate does not try to solve
//!
//! - Parsing unit strings.
//! - Precision beyond `f64`.
//! - Compile-time dimension checking; shapes are tracked at runtime.
//!
//! # Quick start
//!
//! ```rust
//! use unit_algebra_core::{unit_family, AbsoluteConverter, ConverterRegistry};
//!
//! unit_family! {
//!     /// Length units.
//!     pub family LENGTH: LengthUnit = "Length" {
//!         si: METER,
//!         units: { CENTIMETER = "cm", METER = "m", INCH = "in" }
//!     }
//! }
//!
//! unit_family! {
//!     /// Time units.
//!     pub family TIME: TimeUnit = "Time" {
//!         si: SECOND,
//!         units: { SECOND = "s", MINUTE = "min" }
//!     }
//! }
//!
//! let registry = ConverterRegistry::new();
//! registry
//!     .register(AbsoluteConverter::new(LENGTH, METER, [(CENTIMETER, 100.0), (METER, 1.0), (INCH, 39.37)]))
//!     .unwrap();
//! registry
//!     .register(AbsoluteConverter::new(TIME, SECOND, [(SECOND, 1.0), (MINUTE, 1.0 / 60.0)]))
//!     .unwrap();
//!
//! // velocity: the composite converter is synthesized on first use
//! let value = registry
//!     .convert(1.0, &(METER / SECOND).into(), &(CENTIMETER / MINUTE).into())
//!     .unwrap();
//! assert!((value - 6000.0).abs() < 1e-9);
//! ```

pub mod alias;
pub mod any;
pub mod concrete;
pub mod converter;
pub mod error;
pub mod family;
pub mod generic;
mod macros;
pub mod registry;

#[cfg(test)]
pub(crate) mod fixtures;

pub use any::AnyDescriptor;
pub use concrete::{CompositeDimension, Dimension, UnitDescriptor};
pub use converter::{
    AbsoluteConverter, CompositeConverter, ConversionFn, ConverterKind, ExponentiatedConverter,
    RelativeConverter, UnitConverter,
};
pub use error::{ConversionError, ConversionResult, DescriptorError, DescriptorResult};
pub use family::{Family, Unit, UnitFamily};
pub use generic::{GenericCompositeDimension, GenericDescriptor, GenericDimension};
pub use registry::ConverterRegistry;
