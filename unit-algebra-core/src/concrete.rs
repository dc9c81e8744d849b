//! Concrete unit descriptors.
//!
//! Concrete descriptors mirror the generic ones with a chosen member per family:
//! [`Unit`] (e.g. `m`), [`Dimension`] (e.g. `(m^2)`) and [`CompositeDimension`]
//! (e.g. `kg * m / (s^2)`). [`UnitDescriptor`] is the closed sum of the three.
//!
//! Every concrete descriptor projects to its shape with `to_generic()`, and answers two
//! membership questions:
//!
//! - `isinstance(generic)`: the descriptor has exactly that shape;
//! - `isinstance_equivalent(generic)`: the descriptor's shape is equivalent to `generic`,
//!   possibly through alias families.
//!
//! ```rust
//! use unit_algebra_core::{unit_family, UnitDescriptor};
//!
//! unit_family! { pub family LENGTH: LengthUnit = "Length" { si: METER, units: { METER = "m", FOOT = "ft" } } }
//! unit_family! { pub family TIME: TimeUnit = "Time" { si: SECOND, units: { SECOND = "s" } } }
//!
//! let velocity = METER / SECOND;
//! assert!(velocity.isinstance(&(LENGTH / TIME).into()));
//!
//! // merging only happens between identical units
//! let mixed = (METER * FOOT * METER / SECOND).simplified();
//! assert_eq!(mixed.to_string(), "(m^2) * ft / s");
//! ```

use crate::error::{DescriptorError, DescriptorResult};
use crate::family::{Family, Unit};
use crate::generic::{
    check_exponent, fmt_fraction, fmt_power, multiset_eq, net_exponents, power_bits,
    GenericCompositeDimension, GenericDescriptor, GenericDimension,
};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Div, Mul};

// =============================================================================
// Unit operations
// =============================================================================

impl Unit {
    /// Raises the unit to `power`. Non-dimensional units stay at power 1.
    pub fn pow(self, power: f64) -> Dimension {
        if self.is_non_dimensional() {
            Dimension::new(self, 1.0)
        } else {
            Dimension::new(self, power)
        }
    }

    pub fn checked_pow(self, power: f64) -> DescriptorResult<Dimension> {
        Ok(self.pow(check_exponent(power)?))
    }

    #[inline]
    pub fn to_generic(&self) -> Family {
        self.family()
    }

    pub fn inverse(self) -> CompositeDimension {
        CompositeDimension::new(Vec::new(), vec![Dimension::new(self, 1.0)])
    }

    /// Returns `true` if `generic` is this unit's family (or the family's counterpart).
    pub fn isinstance(&self, generic: &GenericDescriptor) -> bool {
        self.family().accepts(generic)
    }

    /// Returns `true` if this unit's family is equivalent to `generic`.
    pub fn isinstance_equivalent(&self, generic: &GenericDescriptor) -> bool {
        GenericDescriptor::Family(self.family()).is_equivalent(generic) || self.isinstance(generic)
    }

    #[inline]
    pub fn has_no_units(&self) -> bool {
        false
    }
}

// =============================================================================
// Dimension
// =============================================================================

/// A unit raised to a power.
#[derive(Clone, Copy, Debug)]
pub struct Dimension {
    pub unit: Unit,
    pub power: f64,
}

impl Dimension {
    pub const fn new(unit: Unit, power: f64) -> Self {
        Self { unit, power }
    }

    /// Same power, SI unit of the family.
    pub fn si(&self) -> Dimension {
        Dimension::new(self.unit.si(), self.power)
    }

    #[inline]
    pub fn to_generic(&self) -> GenericDimension {
        GenericDimension::new(self.unit.family(), self.power)
    }

    /// Multiplies the current power by `power`. Non-dimensional units keep their power.
    pub fn pow(&self, power: f64) -> Dimension {
        if self.unit.is_non_dimensional() {
            *self
        } else {
            Dimension::new(self.unit, self.power * power)
        }
    }

    pub fn checked_pow(&self, power: f64) -> DescriptorResult<Dimension> {
        Ok(self.pow(check_exponent(power)?))
    }

    pub fn inverse(&self) -> CompositeDimension {
        CompositeDimension::new(Vec::new(), vec![*self])
    }

    /// Returns `true` if `generic` is this dimension's family at the same power.
    pub fn isinstance(&self, generic: &GenericDescriptor) -> bool {
        if self.power == 1.0 {
            return self.unit.isinstance(generic);
        }
        generic.as_dimension() == Some(self.to_generic())
    }

    pub fn isinstance_equivalent(&self, generic: &GenericDescriptor) -> bool {
        GenericDescriptor::Dimension(self.to_generic()).is_equivalent(generic)
            || self.isinstance(generic)
    }

    #[inline]
    pub fn has_no_units(&self) -> bool {
        false
    }
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.power == other.power
    }
}

impl Eq for Dimension {}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unit.hash(state);
        power_bits(self.power).hash(state);
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_power(f, self.unit.symbol(), self.power)
    }
}

// =============================================================================
// CompositeDimension
// =============================================================================

/// Product/quotient of concrete dimensions.
#[derive(Clone, Debug, Default)]
pub struct CompositeDimension {
    pub numerator: Vec<Dimension>,
    pub denominator: Vec<Dimension>,
}

impl CompositeDimension {
    pub fn new(numerator: Vec<Dimension>, denominator: Vec<Dimension>) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Every member projected to its family's SI unit. Not simplified.
    pub fn si(&self) -> CompositeDimension {
        CompositeDimension::new(
            self.numerator.iter().map(Dimension::si).collect(),
            self.denominator.iter().map(Dimension::si).collect(),
        )
    }

    pub fn to_generic(&self) -> GenericCompositeDimension {
        GenericCompositeDimension::new(
            self.numerator.iter().map(Dimension::to_generic).collect(),
            self.denominator.iter().map(Dimension::to_generic).collect(),
        )
    }

    pub fn pow(&self, power: f64) -> CompositeDimension {
        CompositeDimension::new(
            self.numerator.iter().map(|d| d.pow(power)).collect(),
            self.denominator.iter().map(|d| d.pow(power)).collect(),
        )
    }

    pub fn checked_pow(&self, power: f64) -> DescriptorResult<CompositeDimension> {
        Ok(self.pow(check_exponent(power)?))
    }

    /// Swaps numerator and denominator.
    pub fn inverse(&self) -> CompositeDimension {
        CompositeDimension::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Merges members with the same unit instance.
    ///
    /// Different members of one family (metre and foot) are not merged. Net-zero and
    /// non-dimensional members are dropped.
    pub fn simplify(&mut self) {
        let exponents = net_exponents(
            self.numerator.iter().map(|d| (d.unit, d.power)),
            self.denominator.iter().map(|d| (d.unit, d.power)),
        );
        self.numerator.clear();
        self.denominator.clear();
        for (unit, power) in exponents {
            if unit.is_non_dimensional() {
                continue;
            }
            if power > 0.0 {
                self.numerator.push(Dimension::new(unit, power));
            } else if power < 0.0 {
                self.denominator.push(Dimension::new(unit, -power));
            }
        }
    }

    /// Returns a simplified copy, leaving `self` untouched.
    pub fn simplified(&self) -> CompositeDimension {
        let mut copy = self.clone();
        copy.simplify();
        copy
    }

    /// Returns `true` if this composite's shape equals `generic`.
    pub fn isinstance(&self, generic: &GenericDescriptor) -> bool {
        GenericDescriptor::Composite(self.to_generic()) == *generic
    }

    pub fn isinstance_equivalent(&self, generic: &GenericDescriptor) -> bool {
        GenericDescriptor::Composite(self.to_generic()).is_equivalent(generic)
            || self.isinstance(generic)
    }

    /// First numerator member that is an instance of `generic`.
    pub fn get_numerator(&self, generic: &GenericDescriptor) -> Option<&Dimension> {
        self.numerator.iter().find(|d| d.isinstance(generic))
    }

    /// First denominator member that is an instance of `generic`.
    pub fn get_denominator(&self, generic: &GenericDescriptor) -> Option<&Dimension> {
        self.denominator.iter().find(|d| d.isinstance(generic))
    }

    pub fn has_no_units(&self) -> bool {
        self.numerator.is_empty() && self.denominator.is_empty()
    }

    fn multiplied(mut self, other: CompositeDimension) -> CompositeDimension {
        self.numerator.extend(other.numerator);
        self.denominator.extend(other.denominator);
        self
    }

    fn divided(mut self, other: CompositeDimension) -> CompositeDimension {
        self.numerator.extend(other.denominator);
        self.denominator.extend(other.numerator);
        self
    }
}

fn sorted_keys(dimensions: &[Dimension]) -> Vec<(&'static str, &'static str, u64)> {
    let mut keys: Vec<_> = dimensions
        .iter()
        .map(|d| (d.unit.family().name(), d.unit.symbol(), power_bits(d.power)))
        .collect();
    keys.sort_unstable();
    keys
}

impl PartialEq for CompositeDimension {
    fn eq(&self, other: &Self) -> bool {
        multiset_eq(&self.numerator, &other.numerator)
            && multiset_eq(&self.denominator, &other.denominator)
    }
}

impl Eq for CompositeDimension {}

impl Hash for CompositeDimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        sorted_keys(&self.numerator).hash(state);
        sorted_keys(&self.denominator).hash(state);
    }
}

impl fmt::Display for CompositeDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_fraction(f, &self.numerator, &self.denominator)
    }
}

// =============================================================================
// UnitDescriptor
// =============================================================================

/// Any concrete descriptor.
#[derive(Clone, Debug)]
pub enum UnitDescriptor {
    Unit(Unit),
    Dimension(Dimension),
    Composite(CompositeDimension),
}

impl UnitDescriptor {
    /// The unit-at-power form of a bare unit or dimension.
    pub fn as_dimension(&self) -> Option<Dimension> {
        match self {
            UnitDescriptor::Unit(unit) => Some(Dimension::new(*unit, 1.0)),
            UnitDescriptor::Dimension(dimension) => Some(*dimension),
            UnitDescriptor::Composite(_) => None,
        }
    }

    /// The single factor of this descriptor: the dimension form of a unit or dimension, or the
    /// only member of a numerator-only composite.
    pub fn lone_member(&self) -> Option<Dimension> {
        match self {
            UnitDescriptor::Composite(composite)
                if composite.numerator.len() == 1 && composite.denominator.is_empty() =>
            {
                Some(composite.numerator[0])
            }
            _ => self.as_dimension(),
        }
    }

    /// The lone member, if its family is an alias family.
    pub fn lone_alias(&self) -> Option<Dimension> {
        self.lone_member().filter(|member| member.unit.is_alias())
    }

    /// Wraps the descriptor into composite form.
    pub fn into_composite(self) -> CompositeDimension {
        match self {
            UnitDescriptor::Unit(unit) => {
                CompositeDimension::new(vec![Dimension::new(unit, 1.0)], Vec::new())
            }
            UnitDescriptor::Dimension(dimension) => {
                CompositeDimension::new(vec![dimension], Vec::new())
            }
            UnitDescriptor::Composite(composite) => composite,
        }
    }

    pub fn si(&self) -> UnitDescriptor {
        match self {
            UnitDescriptor::Unit(unit) => unit.si().into(),
            UnitDescriptor::Dimension(dimension) => dimension.si().into(),
            UnitDescriptor::Composite(composite) => composite.si().into(),
        }
    }

    pub fn to_generic(&self) -> GenericDescriptor {
        match self {
            UnitDescriptor::Unit(unit) => unit.to_generic().into(),
            UnitDescriptor::Dimension(dimension) => dimension.to_generic().into(),
            UnitDescriptor::Composite(composite) => composite.to_generic().into(),
        }
    }

    pub fn isinstance(&self, generic: &GenericDescriptor) -> bool {
        match self {
            UnitDescriptor::Unit(unit) => unit.isinstance(generic),
            UnitDescriptor::Dimension(dimension) => dimension.isinstance(generic),
            UnitDescriptor::Composite(composite) => composite.isinstance(generic),
        }
    }

    pub fn isinstance_equivalent(&self, generic: &GenericDescriptor) -> bool {
        match self {
            UnitDescriptor::Unit(unit) => unit.isinstance_equivalent(generic),
            UnitDescriptor::Dimension(dimension) => dimension.isinstance_equivalent(generic),
            UnitDescriptor::Composite(composite) => composite.isinstance_equivalent(generic),
        }
    }

    pub fn pow(&self, power: f64) -> UnitDescriptor {
        match self {
            UnitDescriptor::Unit(unit) => unit.pow(power).into(),
            UnitDescriptor::Dimension(dimension) => dimension.pow(power).into(),
            UnitDescriptor::Composite(composite) => composite.pow(power).into(),
        }
    }

    pub fn checked_pow(&self, power: f64) -> DescriptorResult<UnitDescriptor> {
        Ok(self.pow(check_exponent(power)?))
    }

    pub fn inverse(&self) -> CompositeDimension {
        self.clone().into_composite().inverse()
    }

    /// Simplified copy; only composites change.
    pub fn simplified(&self) -> UnitDescriptor {
        match self {
            UnitDescriptor::Composite(composite) => composite.simplified().into(),
            other => other.clone(),
        }
    }

    pub fn has_no_units(&self) -> bool {
        match self {
            UnitDescriptor::Composite(composite) => composite.has_no_units(),
            _ => false,
        }
    }
}

impl PartialEq for UnitDescriptor {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (UnitDescriptor::Composite(a), UnitDescriptor::Composite(b)) => a == b,
            _ => match (self.as_dimension(), other.as_dimension()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl Eq for UnitDescriptor {}

impl Hash for UnitDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match (self, self.as_dimension()) {
            (UnitDescriptor::Composite(composite), _) => {
                1u8.hash(state);
                composite.hash(state);
            }
            (_, Some(dimension)) => {
                0u8.hash(state);
                dimension.hash(state);
            }
            (_, None) => {}
        }
    }
}

impl fmt::Display for UnitDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitDescriptor::Unit(unit) => fmt::Display::fmt(unit, f),
            UnitDescriptor::Dimension(dimension) => fmt::Display::fmt(dimension, f),
            UnitDescriptor::Composite(composite) => fmt::Display::fmt(composite, f),
        }
    }
}

impl From<Unit> for UnitDescriptor {
    fn from(unit: Unit) -> Self {
        UnitDescriptor::Unit(unit)
    }
}

impl From<Dimension> for UnitDescriptor {
    fn from(dimension: Dimension) -> Self {
        UnitDescriptor::Dimension(dimension)
    }
}

impl From<CompositeDimension> for UnitDescriptor {
    fn from(composite: CompositeDimension) -> Self {
        UnitDescriptor::Composite(composite)
    }
}

impl From<&CompositeDimension> for UnitDescriptor {
    fn from(composite: &CompositeDimension) -> Self {
        UnitDescriptor::Composite(composite.clone())
    }
}

impl From<&UnitDescriptor> for UnitDescriptor {
    fn from(descriptor: &UnitDescriptor) -> Self {
        descriptor.clone()
    }
}

impl From<UnitDescriptor> for CompositeDimension {
    fn from(descriptor: UnitDescriptor) -> Self {
        descriptor.into_composite()
    }
}

impl TryFrom<&UnitDescriptor> for Unit {
    type Error = DescriptorError;

    /// Accepts a unit, a power-1 dimension or a composite holding only that.
    fn try_from(descriptor: &UnitDescriptor) -> DescriptorResult<Unit> {
        match descriptor.lone_member() {
            Some(member) if member.power == 1.0 => Ok(member.unit),
            _ => Err(DescriptorError::WrongDescriptorType {
                expected: "Unit",
                descriptor: descriptor.to_string(),
            }),
        }
    }
}

impl TryFrom<&UnitDescriptor> for Dimension {
    type Error = DescriptorError;

    /// Accepts a unit, a dimension or a composite holding a single numerator member.
    fn try_from(descriptor: &UnitDescriptor) -> DescriptorResult<Dimension> {
        descriptor
            .lone_member()
            .ok_or_else(|| DescriptorError::WrongDescriptorType {
                expected: "Dimension",
                descriptor: descriptor.to_string(),
            })
    }
}

// =============================================================================
// Operator implementations
// =============================================================================

macro_rules! impl_concrete_ops {
    ($($lhs:ty),+ $(,)?) => {
        $(
            impl<R: Into<UnitDescriptor>> Mul<R> for $lhs {
                type Output = CompositeDimension;
                fn mul(self, rhs: R) -> CompositeDimension {
                    UnitDescriptor::from(self)
                        .into_composite()
                        .multiplied(rhs.into().into_composite())
                }
            }

            impl<R: Into<UnitDescriptor>> Div<R> for $lhs {
                type Output = CompositeDimension;
                fn div(self, rhs: R) -> CompositeDimension {
                    UnitDescriptor::from(self)
                        .into_composite()
                        .divided(rhs.into().into_composite())
                }
            }
        )+
    };
}

impl_concrete_ops!(
    Unit,
    Dimension,
    CompositeDimension,
    &CompositeDimension,
    UnitDescriptor,
    &UnitDescriptor,
);
