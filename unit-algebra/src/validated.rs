//! Quantities restricted to one shape.
//!
//! A [`ValidatedQuantity`] names a generic descriptor and optionally default units and a value
//! check. [`Validated<V>`] only ever holds quantities whose unit is an instance of that
//! descriptor and whose value passes the check.
//!
//! ```rust
//! use unit_algebra::units::{KILOMETER, LENGTH, METER};
//! use unit_algebra::validated::{Validated, ValidatedQuantity};
//! use unit_algebra::GenericDescriptor;
//!
//! struct Distance;
//!
//! impl ValidatedQuantity for Distance {
//!     const NAME: &'static str = "Distance";
//!
//!     fn generic() -> GenericDescriptor {
//!         LENGTH.into()
//!     }
//! }
//!
//! let leg = Validated::<Distance>::new(1200.0).unwrap();
//! assert_eq!(leg.to_string(), "1200 m");
//! assert!(Validated::<Distance>::with_unit(3.0, KILOMETER).is_ok());
//! assert!(Validated::<Distance>::with_unit(3.0, METER / METER).is_err());
//! ```

use crate::error::{QuantityError, QuantityResult};
use crate::quantity::Quantity;
use std::fmt;
use std::marker::PhantomData;
use unit_algebra_core::{GenericDescriptor, UnitDescriptor};

pub trait ValidatedQuantity {
    /// Name used in validation errors.
    const NAME: &'static str;

    fn generic() -> GenericDescriptor;

    /// Units used by [`Validated::new`]; the SI units of [`generic`](Self::generic) when `None`.
    fn default_units() -> Option<UnitDescriptor> {
        None
    }

    fn validate_value(_value: f64) -> QuantityResult<()> {
        Ok(())
    }
}

/// A quantity checked against `V`.
pub struct Validated<V: ValidatedQuantity> {
    quantity: Quantity,
    marker: PhantomData<V>,
}

impl<V: ValidatedQuantity> Validated<V> {
    /// A quantity in the default units of `V`.
    pub fn new(value: f64) -> QuantityResult<Self> {
        let unit = V::default_units().unwrap_or_else(|| V::generic().to_si());
        Self::with_unit(value, unit)
    }

    pub fn with_unit(value: f64, unit: impl Into<UnitDescriptor>) -> QuantityResult<Self> {
        let unit = unit.into();
        let generic = V::generic();
        if !unit.isinstance(&generic) {
            return Err(QuantityError::Validation(format!(
                "{} expects units of {}, got {}",
                V::NAME,
                generic,
                unit
            )));
        }
        V::validate_value(value)?;
        Ok(Self {
            quantity: Quantity::new(value, unit),
            marker: PhantomData,
        })
    }

    #[inline]
    pub fn quantity(&self) -> &Quantity {
        &self.quantity
    }

    pub fn into_quantity(self) -> Quantity {
        self.quantity
    }

    /// Converts to other units of the same shape, validating the converted value again.
    pub fn to_unit(&self, unit: impl Into<UnitDescriptor>) -> QuantityResult<Self> {
        let converted = self.quantity.to_unit(unit)?;
        Self::with_unit(converted.value(), converted.unit().clone())
    }
}

impl<V: ValidatedQuantity> Clone for Validated<V> {
    fn clone(&self) -> Self {
        Self {
            quantity: self.quantity.clone(),
            marker: PhantomData,
        }
    }
}

impl<V: ValidatedQuantity> fmt::Debug for Validated<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(V::NAME)
            .field("quantity", &self.quantity)
            .finish()
    }
}

impl<V: ValidatedQuantity> fmt::Display for Validated<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.quantity, f)
    }
}

impl<V: ValidatedQuantity> From<Validated<V>> for Quantity {
    fn from(validated: Validated<V>) -> Self {
        validated.quantity
    }
}
