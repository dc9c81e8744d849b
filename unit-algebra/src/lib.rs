//! Physical quantities with unit arithmetic and conversion.
//!
//! `unit-algebra` ships a unit catalogue ([`units`]), the built-in converters
//! ([`converters`]), a process-wide [`registry`](registry::registry), and the [`Quantity`]
//! wrapper on top of the descriptor algebra of `unit-algebra-core`.
//!
//! # Quick start
//!
//! ```rust
//! use unit_algebra::units::{BAR, CENTIMETER, GRAM, KILOGRAM, KILOPASCAL, METER, SECOND};
//! use unit_algebra::Quantity;
//!
//! // alias units convert like any other unit
//! let pressure = Quantity::new(2.0, BAR).to_unit(KILOPASCAL).unwrap();
//! assert!((pressure.value() - 200.0).abs() < 1e-9);
//!
//! // composites convert member by member
//! let force = Quantity::new(100.0, KILOGRAM * CENTIMETER / SECOND.pow(2.0))
//!     .to_unit(GRAM * METER / SECOND.pow(2.0))
//!     .unwrap();
//! assert!((force.value() - 1000.0).abs() < 1e-9);
//! ```
//!
//! Custom families are declared with [`unit_family!`] and registered into a private
//! [`ConverterRegistry`]; see `unit-algebra-core` for the algebra itself.

pub mod config;
pub mod constants;
pub mod converters;
pub mod error;
pub mod prefix;
pub mod quantity;
pub mod registry;
pub mod units;
pub mod validated;

pub use config::{ComparisonSettings, RegistrySettings, Settings};
pub use error::{ConfigError, ConfigResult, QuantityError, QuantityResult};
pub use prefix::UnitPrefix;
pub use quantity::Quantity;
pub use registry::{build_registry, init_registry, registry};
pub use validated::{Validated, ValidatedQuantity};

pub use unit_algebra_core::{
    unit_family, AnyDescriptor, CompositeDimension, ConversionError, ConversionResult,
    ConverterKind, ConverterRegistry, DescriptorError, DescriptorResult, Dimension, Family,
    GenericCompositeDimension, GenericDescriptor, GenericDimension, Unit, UnitConverter,
    UnitDescriptor, UnitFamily,
};
