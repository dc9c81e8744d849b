//! Unit families and unit instances.
//!
//! A *family* is the closed set of interchangeable units for one physical quantity
//! (all length units, all mass units, ...). A [`Unit`] is one member of a family.
//!
//! Families are declared as zero-sized marker types implementing [`UnitFamily`] and are
//! handled through the copyable [`Family`] handle. The [`unit_family!`](crate::unit_family)
//! macro generates the marker, the handle constant and one constant per unit.

use crate::generic::GenericDescriptor;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Trait implemented by every unit-family marker type.
///
/// # Invariants
///
/// - [`name`](UnitFamily::name) is unique among all families of a program; family identity is
///   decided by name.
/// - Alias graphs declared through [`aliased_generic_descriptor`](UnitFamily::aliased_generic_descriptor)
///   are acyclic. Equivalence and analysis recurse through aliases without a cycle guard.
pub trait UnitFamily: Send + Sync + 'static {
    /// Printable family name, also used as its identity.
    fn name(&self) -> &'static str;

    /// Symbols of every member unit.
    fn symbols(&self) -> &'static [&'static str];

    /// The SI unit of this family.
    fn si(&self) -> Unit;

    /// The generic descriptor this family stands for, if it is an alias family.
    fn aliased_generic_descriptor(&self) -> Option<GenericDescriptor> {
        None
    }

    /// Non-dimensional units never change power and vanish from simplified composites.
    fn is_non_dimensional(&self) -> bool {
        false
    }

    /// A family whose generic shape also accepts this family's units as instances.
    ///
    /// Used for quantities measured on two interchangeable scales, such as relative and
    /// absolute temperature.
    fn counterpart(&self) -> Option<Family> {
        None
    }
}

// =============================================================================
// Family handle
// =============================================================================

/// Copyable handle to a unit family.
#[derive(Clone, Copy)]
pub struct Family(&'static dyn UnitFamily);

impl Family {
    /// Wraps a family marker.
    pub const fn of(family: &'static dyn UnitFamily) -> Self {
        Self(family)
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// The SI unit of this family.
    #[inline]
    pub fn si(&self) -> Unit {
        self.0.si()
    }

    /// Alias for [`Family::si`], named after the generic-to-concrete projection.
    #[inline]
    pub fn to_si(&self) -> Unit {
        self.si()
    }

    pub fn aliased_generic_descriptor(&self) -> Option<GenericDescriptor> {
        self.0.aliased_generic_descriptor()
    }

    #[inline]
    pub fn is_alias(&self) -> bool {
        self.aliased_generic_descriptor().is_some()
    }

    #[inline]
    pub fn is_non_dimensional(&self) -> bool {
        self.0.is_non_dimensional()
    }

    #[inline]
    pub fn counterpart(&self) -> Option<Family> {
        self.0.counterpart()
    }

    /// Iterates over every member unit of this family.
    pub fn units(self) -> impl Iterator<Item = Unit> {
        self.0
            .symbols()
            .iter()
            .map(move |&symbol| Unit::new(self, symbol))
    }

    /// Looks up a member unit by symbol.
    pub fn unit(self, symbol: &str) -> Option<Unit> {
        self.units().find(|unit| unit.symbol() == symbol)
    }

    /// Returns `true` if `generic` is this family (or its power-1 dimension) or this family's
    /// counterpart.
    pub fn accepts(&self, generic: &GenericDescriptor) -> bool {
        *generic == GenericDescriptor::Family(*self)
            || self
                .counterpart()
                .is_some_and(|other| *generic == GenericDescriptor::Family(other))
    }
}

impl PartialEq for Family {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Family {}

impl Hash for Family {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Debug for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Family({})", self.name())
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Unit instance
// =============================================================================

/// One concrete member of a unit family.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit {
    family: Family,
    symbol: &'static str,
}

impl Unit {
    /// Creates a unit of `family` printed as `symbol`.
    pub const fn new(family: Family, symbol: &'static str) -> Self {
        Self { family, symbol }
    }

    #[inline]
    pub const fn family(&self) -> Family {
        self.family
    }

    #[inline]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// The SI unit of this unit's family.
    #[inline]
    pub fn si(&self) -> Unit {
        self.family.si()
    }

    #[inline]
    pub fn is_non_dimensional(&self) -> bool {
        self.family.is_non_dimensional()
    }

    /// Returns `true` if this unit's family is an alias family.
    #[inline]
    pub fn is_alias(&self) -> bool {
        self.family.is_alias()
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit({}: {})", self.family.name(), self.symbol)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}
