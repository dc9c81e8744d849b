//! Values tagged with a unit.

use crate::config::ComparisonSettings;
use crate::error::{QuantityError, QuantityResult};
use crate::registry::registry;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Mul, Neg};
use unit_algebra_core::{ConverterRegistry, UnitDescriptor};

/// A value with a concrete unit.
///
/// Multiplication is infallible and available as operators. Division, addition and
/// subtraction can fail (division by zero, incompatible units) and are exposed as `checked_*`
/// methods instead.
///
/// ```rust
/// use unit_algebra::units::{METER, MINUTE, SECOND};
/// use unit_algebra::Quantity;
///
/// let lap = Quantity::new(400.0, METER);
/// let time = Quantity::new(2.0, MINUTE);
/// let speed = lap.checked_div(&time).unwrap().to_unit(METER / SECOND).unwrap();
/// assert!((speed.value() - 400.0 / 120.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct Quantity {
    value: f64,
    unit: UnitDescriptor,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<UnitDescriptor>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn unit(&self) -> &UnitDescriptor {
        &self.unit
    }

    /// The same quantity expressed in the SI units of its shape.
    pub fn to_si(&self) -> QuantityResult<Quantity> {
        self.to_unit(self.unit.si())
    }

    /// Converts to `unit` through the process-wide registry.
    pub fn to_unit(&self, unit: impl Into<UnitDescriptor>) -> QuantityResult<Quantity> {
        self.to_unit_in(unit, registry()?)
    }

    /// Converts to `unit` through `registry`.
    ///
    /// `unit` must be instance-equivalent to the shape of the current unit.
    pub fn to_unit_in(
        &self,
        unit: impl Into<UnitDescriptor>,
        registry: &ConverterRegistry,
    ) -> QuantityResult<Quantity> {
        let unit = unit.into();
        let generic = self.unit.to_generic();
        if !unit.isinstance_equivalent(&generic) {
            return Err(QuantityError::IncompatibleUnits {
                quantity: self.to_string(),
                unit: unit.to_string(),
                expected: generic.to_string(),
            });
        }
        if unit == self.unit {
            return Ok(Quantity::new(self.value, unit));
        }
        let value = registry.convert(self.value, &self.unit, &unit)?;
        Ok(Quantity::new(value, unit))
    }

    /// Value of `other` expressed in this quantity's unit.
    fn aligned(&self, other: &Quantity, operation: &'static str) -> QuantityResult<f64> {
        other
            .to_unit(&self.unit)
            .map(|converted| converted.value)
            .map_err(|err| QuantityError::BinaryOperation {
                operation,
                left: self.to_string(),
                right: other.to_string(),
                reason: err.to_string(),
            })
    }

    fn division_by_zero(&self, divisor: impl fmt::Display) -> QuantityError {
        QuantityError::BinaryOperation {
            operation: "divide",
            left: self.to_string(),
            right: divisor.to_string(),
            reason: "division by zero".to_string(),
        }
    }

    /// Sum in this quantity's unit; `other` is converted first.
    pub fn checked_add(&self, other: &Quantity) -> QuantityResult<Quantity> {
        let other = self.aligned(other, "add")?;
        Ok(Quantity::new(self.value + other, self.unit.clone()))
    }

    /// Difference in this quantity's unit; `other` is converted first.
    pub fn checked_sub(&self, other: &Quantity) -> QuantityResult<Quantity> {
        let other = self.aligned(other, "subtract")?;
        Ok(Quantity::new(self.value - other, self.unit.clone()))
    }

    /// Quotient of two quantities; the unit is the simplified quotient of both units.
    pub fn checked_div(&self, other: &Quantity) -> QuantityResult<Quantity> {
        if other.value == 0.0 {
            return Err(self.division_by_zero(other));
        }
        let unit = (&self.unit / &other.unit).simplified();
        Ok(Quantity::new(self.value / other.value, unit))
    }

    pub fn checked_div_scalar(&self, divisor: f64) -> QuantityResult<Quantity> {
        if divisor == 0.0 {
            return Err(self.division_by_zero(divisor));
        }
        Ok(Quantity::new(self.value / divisor, self.unit.clone()))
    }

    /// `numerator / self`, carrying the inverse unit.
    pub fn checked_rdiv(&self, numerator: f64) -> QuantityResult<Quantity> {
        if self.value == 0.0 {
            return Err(QuantityError::BinaryOperation {
                operation: "divide",
                left: numerator.to_string(),
                right: self.to_string(),
                reason: "division by zero".to_string(),
            });
        }
        Ok(Quantity::new(numerator / self.value, self.unit.inverse()))
    }

    /// Raises both the value and the unit to `power`.
    pub fn pow(&self, power: f64) -> QuantityResult<Quantity> {
        let unit = self.unit.checked_pow(power)?;
        Ok(Quantity::new(self.value.powf(power), unit))
    }

    /// Approximate equality with the default tolerances.
    pub fn approx_eq(&self, other: &Quantity) -> bool {
        self.approx_eq_with(other, &ComparisonSettings::default())
    }

    /// Approximate equality after converting `other` to this quantity's unit.
    ///
    /// Holds when `|a - b| <= max(relative_tolerance * max(|a|, |b|), absolute_tolerance)`.
    /// Quantities that cannot be converted are never equal.
    pub fn approx_eq_with(&self, other: &Quantity, settings: &ComparisonSettings) -> bool {
        match self.aligned(other, "compare") {
            Ok(other) => {
                let scale = self.value.abs().max(other.abs());
                let tolerance =
                    (settings.relative_tolerance * scale).max(settings.absolute_tolerance);
                (self.value - other).abs() <= tolerance
            }
            Err(_) => false,
        }
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.aligned(other, "compare")
            .is_ok_and(|other| self.value == other)
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let other = self.aligned(other, "compare").ok()?;
        self.value.partial_cmp(&other)
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity::new(-self.value, self.unit)
    }
}

impl Neg for &Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity::new(-self.value, self.unit.clone())
    }
}

impl Mul for &Quantity {
    type Output = Quantity;

    fn mul(self, rhs: &Quantity) -> Quantity {
        let unit = (&self.unit * &rhs.unit).simplified();
        Quantity::new(self.value * rhs.value, unit)
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        &self * &rhs
    }
}

impl Mul<f64> for &Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.value * rhs, self.unit.clone())
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.value * rhs, self.unit)
    }
}

impl Mul<&Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: &Quantity) -> Quantity {
        rhs * self
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
