//! Generic unit descriptors.
//!
//! A generic descriptor describes the *shape* of a unit without choosing members:
//!
//! - a bare [`Family`] (e.g. `Length`);
//! - a [`GenericDimension`], a family raised to a power (e.g. `(Length^2)`);
//! - a [`GenericCompositeDimension`], a product/quotient of generic dimensions
//!   (e.g. `Length * Mass / (Time^2)`).
//!
//! [`GenericDescriptor`] is the closed sum of the three and is what the converter registry is
//! keyed by. A power-1 [`GenericDimension`] and its bare family compare and hash equal.
//!
//! # Equality and equivalence
//!
//! `==` is structural: composites compare numerator and denominator as multisets, without
//! cancelling factors or expanding aliases. [`GenericDescriptor::is_equivalent`] is weaker: it
//! expands alias families (e.g. `Force` ≡ `Mass * Length / (Time^2)`) and simplifies before
//! comparing.
//!
//! ```rust
//! use unit_algebra_core::{unit_family, GenericDescriptor};
//!
//! unit_family! { pub family LENGTH: LengthUnit = "Length" { si: METER, units: { METER = "m" } } }
//! unit_family! { pub family TIME: TimeUnit = "Time" { si: SECOND, units: { SECOND = "s" } } }
//!
//! let acceleration = LENGTH / TIME.pow(2.0);
//! assert_eq!(acceleration.to_string(), "Length / (Time^2)");
//!
//! let mut redundant = LENGTH * TIME / TIME.pow(3.0);
//! redundant.simplify();
//! assert_eq!(redundant, acceleration);
//! ```

use crate::concrete::{CompositeDimension, Dimension, UnitDescriptor};
use crate::error::{DescriptorError, DescriptorResult};
use crate::family::Family;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Div, Mul};

// =============================================================================
// Shared helpers
// =============================================================================

/// Bit pattern of a power with `-0.0` folded into `0.0`, so that equal powers hash equally.
pub(crate) fn power_bits(power: f64) -> u64 {
    if power == 0.0 {
        0.0f64.to_bits()
    } else {
        power.to_bits()
    }
}

/// Renders `symbol` or `(symbol^power)`.
pub(crate) fn fmt_power(f: &mut fmt::Formatter<'_>, symbol: &str, power: f64) -> fmt::Result {
    if power != 1.0 {
        write!(f, "({}^{})", symbol, power)
    } else {
        f.write_str(symbol)
    }
}

/// Renders composite factors: sorted numerators joined by ` * `, then ` / ` and the sorted
/// denominators joined by ` / `.
pub(crate) fn fmt_fraction<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    numerator: &[T],
    denominator: &[T],
) -> fmt::Result {
    let mut numerators: Vec<String> = numerator.iter().map(ToString::to_string).collect();
    numerators.sort();
    let mut denominators: Vec<String> = denominator.iter().map(ToString::to_string).collect();
    denominators.sort();

    f.write_str(&numerators.join(" * "))?;
    if !denominators.is_empty() {
        write!(f, " / {}", denominators.join(" / "))?;
    }
    Ok(())
}

/// Multiset equality of two slices.
pub(crate) fn multiset_eq<T: PartialEq>(left: &[T], right: &[T]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut matched = vec![false; right.len()];
    for item in left {
        match (0..right.len()).find(|&i| !matched[i] && right[i] == *item) {
            Some(i) => matched[i] = true,
            None => return false,
        }
    }
    true
}

/// Sums exponents per key in first-seen order; denominator entries count negatively.
pub(crate) fn net_exponents<K: PartialEq + Copy>(
    numerator: impl IntoIterator<Item = (K, f64)>,
    denominator: impl IntoIterator<Item = (K, f64)>,
) -> Vec<(K, f64)> {
    let mut exponents: Vec<(K, f64)> = Vec::new();
    let signed = numerator
        .into_iter()
        .chain(denominator.into_iter().map(|(key, power)| (key, -power)));
    for (key, power) in signed {
        match exponents.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, total)) => *total += power,
            None => exponents.push((key, power)),
        }
    }
    exponents
}

pub(crate) fn check_exponent(power: f64) -> DescriptorResult<f64> {
    if power.is_finite() {
        Ok(power)
    } else {
        Err(DescriptorError::InvalidExponent(power))
    }
}

// =============================================================================
// Family operations
// =============================================================================

impl Family {
    /// Raises the family to `power`.
    #[inline]
    pub fn pow(self, power: f64) -> GenericDimension {
        GenericDimension::new(self, power)
    }

    /// Like [`Family::pow`], rejecting non-finite exponents.
    pub fn checked_pow(self, power: f64) -> DescriptorResult<GenericDimension> {
        Ok(self.pow(check_exponent(power)?))
    }

    pub fn inverse_generic(self) -> GenericCompositeDimension {
        GenericCompositeDimension::new(Vec::new(), vec![GenericDimension::new(self, 1.0)])
    }

    /// See [`GenericDescriptor::is_equivalent`].
    pub fn is_equivalent(self, other: impl Into<GenericDescriptor>) -> bool {
        GenericDescriptor::Family(self).is_equivalent(&other.into())
    }

    #[inline]
    pub fn has_no_units(&self) -> bool {
        false
    }
}

// =============================================================================
// GenericDimension
// =============================================================================

/// A unit family raised to a power.
#[derive(Clone, Copy, Debug)]
pub struct GenericDimension {
    pub family: Family,
    pub power: f64,
}

impl GenericDimension {
    pub const fn new(family: Family, power: f64) -> Self {
        Self { family, power }
    }

    /// Projects the family to its SI unit, keeping the power.
    pub fn to_si(&self) -> Dimension {
        Dimension::new(self.family.si(), self.power)
    }

    /// Multiplies the current power by `power`.
    #[inline]
    pub fn pow(&self, power: f64) -> Self {
        Self::new(self.family, self.power * power)
    }

    pub fn checked_pow(&self, power: f64) -> DescriptorResult<Self> {
        Ok(self.pow(check_exponent(power)?))
    }

    pub fn inverse_generic(&self) -> GenericCompositeDimension {
        GenericCompositeDimension::new(Vec::new(), vec![*self])
    }

    /// See [`GenericDescriptor::is_equivalent`].
    pub fn is_equivalent(&self, other: impl Into<GenericDescriptor>) -> bool {
        GenericDescriptor::Dimension(*self).is_equivalent(&other.into())
    }

    #[inline]
    pub fn has_no_units(&self) -> bool {
        false
    }
}

impl PartialEq for GenericDimension {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family && self.power == other.power
    }
}

// Powers are finite wherever descriptors are built through checked operations.
impl Eq for GenericDimension {}

impl Hash for GenericDimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        power_bits(self.power).hash(state);
    }
}

impl fmt::Display for GenericDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_power(f, self.family.name(), self.power)
    }
}

// =============================================================================
// GenericCompositeDimension
// =============================================================================

/// Product/quotient of generic dimensions.
///
/// Factors keep insertion order; equality compares numerator and denominator as multisets.
/// Nothing is simplified at construction.
#[derive(Clone, Debug, Default)]
pub struct GenericCompositeDimension {
    pub numerator: Vec<GenericDimension>,
    pub denominator: Vec<GenericDimension>,
}

impl GenericCompositeDimension {
    pub fn new(numerator: Vec<GenericDimension>, denominator: Vec<GenericDimension>) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Projects every family to its SI unit, preserving structure and powers.
    pub fn to_si(&self) -> CompositeDimension {
        CompositeDimension::new(
            self.numerator.iter().map(GenericDimension::to_si).collect(),
            self.denominator.iter().map(GenericDimension::to_si).collect(),
        )
    }

    /// Raises every factor to `power` independently.
    pub fn pow(&self, power: f64) -> Self {
        Self::new(
            self.numerator.iter().map(|d| d.pow(power)).collect(),
            self.denominator.iter().map(|d| d.pow(power)).collect(),
        )
    }

    pub fn checked_pow(&self, power: f64) -> DescriptorResult<Self> {
        Ok(self.pow(check_exponent(power)?))
    }

    /// Swaps numerator and denominator.
    pub fn inverse_generic(&self) -> Self {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Merges factors of the same family, cancelling numerator against denominator.
    ///
    /// Net-zero and non-dimensional factors are dropped; positive net powers land in the
    /// numerator and negative ones in the denominator, in first-seen order.
    pub fn simplify(&mut self) {
        let exponents = net_exponents(
            self.numerator.iter().map(|d| (d.family, d.power)),
            self.denominator.iter().map(|d| (d.family, d.power)),
        );
        self.numerator.clear();
        self.denominator.clear();
        for (family, power) in exponents {
            if family.is_non_dimensional() {
                continue;
            }
            if power > 0.0 {
                self.numerator.push(GenericDimension::new(family, power));
            } else if power < 0.0 {
                self.denominator.push(GenericDimension::new(family, -power));
            }
        }
    }

    /// Returns a simplified copy, leaving `self` untouched.
    pub fn simplified(&self) -> Self {
        let mut copy = self.clone();
        copy.simplify();
        copy
    }

    /// Replaces every alias factor by its aliased descriptor raised to the factor's power.
    ///
    /// Expansions are spliced recursively; an alias in the denominator contributes its
    /// expansion with numerator and denominator swapped.
    pub fn analyse(&mut self) {
        let mut numerator = Vec::with_capacity(self.numerator.len());
        let mut denominator = Vec::with_capacity(self.denominator.len());
        for member in self.numerator.drain(..) {
            expand_into(member, &mut numerator, &mut denominator);
        }
        for member in self.denominator.drain(..) {
            expand_into(member, &mut denominator, &mut numerator);
        }
        self.numerator = numerator;
        self.denominator = denominator;
    }

    /// Returns an analysed copy, leaving `self` untouched.
    pub fn analysed(&self) -> Self {
        let mut copy = self.clone();
        copy.analyse();
        copy
    }

    /// See [`GenericDescriptor::is_equivalent`].
    pub fn is_equivalent(&self, other: impl Into<GenericDescriptor>) -> bool {
        GenericDescriptor::Composite(self.clone()).is_equivalent(&other.into())
    }

    pub fn has_no_units(&self) -> bool {
        self.numerator.is_empty() && self.denominator.is_empty()
    }

    fn multiplied(mut self, other: Self) -> Self {
        self.numerator.extend(other.numerator);
        self.denominator.extend(other.denominator);
        self
    }

    fn divided(mut self, other: Self) -> Self {
        self.numerator.extend(other.denominator);
        self.denominator.extend(other.numerator);
        self
    }
}

fn expand_into(
    member: GenericDimension,
    same: &mut Vec<GenericDimension>,
    opposite: &mut Vec<GenericDimension>,
) {
    match member.family.aliased_generic_descriptor() {
        None => same.push(member),
        Some(aliased) => {
            let expansion = aliased.pow(member.power).into_composite();
            for inner in expansion.numerator {
                expand_into(inner, same, opposite);
            }
            for inner in expansion.denominator {
                expand_into(inner, opposite, same);
            }
        }
    }
}

fn sorted_keys(dimensions: &[GenericDimension]) -> Vec<(&'static str, u64)> {
    let mut keys: Vec<_> = dimensions
        .iter()
        .map(|d| (d.family.name(), power_bits(d.power)))
        .collect();
    keys.sort_unstable();
    keys
}

impl PartialEq for GenericCompositeDimension {
    fn eq(&self, other: &Self) -> bool {
        multiset_eq(&self.numerator, &other.numerator)
            && multiset_eq(&self.denominator, &other.denominator)
    }
}

impl Eq for GenericCompositeDimension {}

impl Hash for GenericCompositeDimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        sorted_keys(&self.numerator).hash(state);
        sorted_keys(&self.denominator).hash(state);
    }
}

impl fmt::Display for GenericCompositeDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_fraction(f, &self.numerator, &self.denominator)
    }
}

// =============================================================================
// GenericDescriptor
// =============================================================================

/// Any generic descriptor.
#[derive(Clone, Debug)]
pub enum GenericDescriptor {
    Family(Family),
    Dimension(GenericDimension),
    Composite(GenericCompositeDimension),
}

impl GenericDescriptor {
    /// The family-at-power form of a bare family or dimension.
    pub fn as_dimension(&self) -> Option<GenericDimension> {
        match self {
            GenericDescriptor::Family(family) => Some(GenericDimension::new(*family, 1.0)),
            GenericDescriptor::Dimension(dimension) => Some(*dimension),
            GenericDescriptor::Composite(_) => None,
        }
    }

    /// The single factor of this descriptor: the dimension form of a family or dimension, or
    /// the only member of a numerator-only composite.
    pub fn lone_member(&self) -> Option<GenericDimension> {
        match self {
            GenericDescriptor::Composite(composite)
                if composite.numerator.len() == 1 && composite.denominator.is_empty() =>
            {
                Some(composite.numerator[0])
            }
            _ => self.as_dimension(),
        }
    }

    /// Wraps the descriptor into composite form.
    pub fn into_composite(self) -> GenericCompositeDimension {
        match self {
            GenericDescriptor::Family(family) => {
                GenericCompositeDimension::new(vec![GenericDimension::new(family, 1.0)], Vec::new())
            }
            GenericDescriptor::Dimension(dimension) => {
                GenericCompositeDimension::new(vec![dimension], Vec::new())
            }
            GenericDescriptor::Composite(composite) => composite,
        }
    }

    pub fn to_si(&self) -> UnitDescriptor {
        match self {
            GenericDescriptor::Family(family) => UnitDescriptor::Unit(family.si()),
            GenericDescriptor::Dimension(dimension) => UnitDescriptor::Dimension(dimension.to_si()),
            GenericDescriptor::Composite(composite) => UnitDescriptor::Composite(composite.to_si()),
        }
    }

    pub fn pow(&self, power: f64) -> GenericDescriptor {
        match self {
            GenericDescriptor::Family(family) => family.pow(power).into(),
            GenericDescriptor::Dimension(dimension) => dimension.pow(power).into(),
            GenericDescriptor::Composite(composite) => composite.pow(power).into(),
        }
    }

    pub fn checked_pow(&self, power: f64) -> DescriptorResult<GenericDescriptor> {
        Ok(self.pow(check_exponent(power)?))
    }

    pub fn inverse_generic(&self) -> GenericCompositeDimension {
        self.clone().into_composite().inverse_generic()
    }

    /// Simplified copy; only composites change.
    pub fn simplified(&self) -> GenericDescriptor {
        match self {
            GenericDescriptor::Composite(composite) => composite.simplified().into(),
            other => other.clone(),
        }
    }

    /// Returns `true` if the two descriptors describe the same physical shape.
    ///
    /// Rules, first match wins:
    ///
    /// 1. structural equality, also matching a lone numerator-only member against a bare
    ///    family or dimension;
    /// 2. if `other` is a lone alias member, its expansion raised to its power is compared
    ///    against `self`;
    /// 3. the same for `self`;
    /// 4. if either side is a composite or a power-0 dimension, both are analysed and
    ///    simplified and compared as multisets. Power-0 factors simplify away, so every
    ///    `X^0` is equivalent to every other `Y^0` and to the empty composite.
    ///
    /// The relation is symmetric.
    pub fn is_equivalent(&self, other: &GenericDescriptor) -> bool {
        if self == other {
            return true;
        }

        let mine = self.lone_member();
        let theirs = other.lone_member();
        if let (Some(a), Some(b)) = (mine, theirs) {
            if a == b {
                return true;
            }
        }

        if let Some(expanded) = theirs.and_then(alias_expansion) {
            return self.is_equivalent(&expanded);
        }
        if let Some(expanded) = mine.and_then(alias_expansion) {
            return expanded.is_equivalent(other);
        }

        let dimensionless = |member: Option<GenericDimension>| {
            member.is_some_and(|member| member.power == 0.0)
        };
        if matches!(self, GenericDescriptor::Composite(_))
            || matches!(other, GenericDescriptor::Composite(_))
            || dimensionless(mine)
            || dimensionless(theirs)
        {
            let mine = self.clone().into_composite().analysed().simplified();
            let theirs = other.clone().into_composite().analysed().simplified();
            return mine == theirs;
        }

        false
    }

    pub fn has_no_units(&self) -> bool {
        match self {
            GenericDescriptor::Composite(composite) => composite.has_no_units(),
            _ => false,
        }
    }
}

fn alias_expansion(member: GenericDimension) -> Option<GenericDescriptor> {
    member
        .family
        .aliased_generic_descriptor()
        .map(|aliased| aliased.pow(member.power))
}

impl PartialEq for GenericDescriptor {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (GenericDescriptor::Composite(a), GenericDescriptor::Composite(b)) => a == b,
            _ => match (self.as_dimension(), other.as_dimension()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl Eq for GenericDescriptor {}

impl Hash for GenericDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match (self, self.as_dimension()) {
            (GenericDescriptor::Composite(composite), _) => {
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

impl fmt::Display for GenericDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericDescriptor::Family(family) => fmt::Display::fmt(family, f),
            GenericDescriptor::Dimension(dimension) => fmt::Display::fmt(dimension, f),
            GenericDescriptor::Composite(composite) => fmt::Display::fmt(composite, f),
        }
    }
}

impl From<Family> for GenericDescriptor {
    fn from(family: Family) -> Self {
        GenericDescriptor::Family(family)
    }
}

impl From<GenericDimension> for GenericDescriptor {
    fn from(dimension: GenericDimension) -> Self {
        GenericDescriptor::Dimension(dimension)
    }
}

impl From<GenericCompositeDimension> for GenericDescriptor {
    fn from(composite: GenericCompositeDimension) -> Self {
        GenericDescriptor::Composite(composite)
    }
}

impl From<&GenericCompositeDimension> for GenericDescriptor {
    fn from(composite: &GenericCompositeDimension) -> Self {
        GenericDescriptor::Composite(composite.clone())
    }
}

impl From<&GenericDescriptor> for GenericDescriptor {
    fn from(descriptor: &GenericDescriptor) -> Self {
        descriptor.clone()
    }
}

// =============================================================================
// Operator implementations
// =============================================================================

macro_rules! impl_generic_ops {
    ($($lhs:ty),+ $(,)?) => {
        $(
            impl<R: Into<GenericDescriptor>> Mul<R> for $lhs {
                type Output = GenericCompositeDimension;
                fn mul(self, rhs: R) -> GenericCompositeDimension {
                    GenericDescriptor::from(self)
                        .into_composite()
                        .multiplied(rhs.into().into_composite())
                }
            }

            impl<R: Into<GenericDescriptor>> Div<R> for $lhs {
                type Output = GenericCompositeDimension;
                fn div(self, rhs: R) -> GenericCompositeDimension {
                    GenericDescriptor::from(self)
                        .into_composite()
                        .divided(rhs.into().into_composite())
                }
            }
        )+
    };
}

impl_generic_ops!(
    Family,
    GenericDimension,
    GenericCompositeDimension,
    &GenericCompositeDimension,
    GenericDescriptor,
    &GenericDescriptor,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    // =========================================================================
    // Construction and display
    // =========================================================================

    #[test]
    fn test_operators_build_composites() {
        let velocity = LENGTH / TIME;
        assert_eq!(velocity.numerator, vec![LENGTH.pow(1.0)]);
        assert_eq!(velocity.denominator, vec![TIME.pow(1.0)]);

        let force = MASS * LENGTH / TIME.pow(2.0);
        assert_eq!(force.numerator.len(), 2);
        assert_eq!(force.denominator, vec![TIME.pow(2.0)]);

        let nested = LENGTH / (MASS / TIME);
        assert_eq!(nested, LENGTH * TIME / MASS);
    }

    #[test]
    fn test_operators_do_not_mutate_operands() {
        let velocity = LENGTH / TIME;
        let _ = &velocity * MASS;
        let _ = &velocity / MASS;
        assert_eq!(velocity, LENGTH / TIME);
    }

    #[test]
    fn test_display() {
        assert_eq!(LENGTH.pow(2.0).to_string(), "(Length^2)");
        assert_eq!(LENGTH.pow(1.0).to_string(), "Length");
        assert_eq!(
            (MASS * LENGTH / TIME.pow(2.0)).to_string(),
            "Length * Mass / (Time^2)"
        );
        assert_eq!(
            (LENGTH / TIME / MASS).to_string(),
            "Length / Mass / Time"
        );
        assert_eq!((LENGTH * TIME.pow(-0.5)).to_string(), "(Time^-0.5) * Length");
    }

    // =========================================================================
    // Exponentiation and SI projection
    // =========================================================================

    #[test]
    fn test_pow_multiplies_powers() {
        assert_eq!(LENGTH.pow(2.0).pow(3.0), LENGTH.pow(6.0));
        let composite = (MASS / TIME.pow(2.0)).pow(2.0);
        assert_eq!(composite, MASS.pow(2.0) / TIME.pow(4.0));
    }

    #[test]
    fn test_checked_pow_rejects_non_finite() {
        assert!(matches!(
            LENGTH.checked_pow(f64::NAN),
            Err(DescriptorError::InvalidExponent(_))
        ));
        assert!(matches!(
            (LENGTH / TIME).checked_pow(f64::INFINITY),
            Err(DescriptorError::InvalidExponent(_))
        ));
        assert!(GenericDescriptor::from(MASS).checked_pow(2.0).is_ok());
    }

    #[test]
    fn test_to_si() {
        assert_eq!(LENGTH.pow(3.0).to_si(), Dimension::new(METER, 3.0));
        let si = (MASS / TIME).to_si();
        assert_eq!(si, KILOGRAM / SECOND);
    }

    // =========================================================================
    // Equality and hashing
    // =========================================================================

    #[test]
    fn test_power_one_dimension_equals_family() {
        let family = GenericDescriptor::from(LENGTH);
        let dimension = GenericDescriptor::from(LENGTH.pow(1.0));
        assert_eq!(family, dimension);
        assert_eq!(hash_of(&family), hash_of(&dimension));
        assert_ne!(family, GenericDescriptor::from(LENGTH.pow(2.0)));
    }

    #[test]
    fn test_composite_equality_is_multiset() {
        assert_eq!(MASS * LENGTH / TIME, LENGTH * MASS / TIME);
        assert_eq!(
            hash_of(&(MASS * LENGTH / TIME)),
            hash_of(&(LENGTH * MASS / TIME))
        );
        assert_ne!(LENGTH * LENGTH, LENGTH.pow(2.0) * NON_DIMENSIONAL);
        assert_ne!(LENGTH * LENGTH / LENGTH, GenericDescriptor::from(LENGTH).into_composite());
    }

    // =========================================================================
    // Simplification and analysis
    // =========================================================================

    #[test]
    fn test_simplify_cancels_denominator() {
        let simplified = (LENGTH.pow(2.0) / LENGTH).simplified();
        assert_eq!(simplified.numerator, vec![LENGTH.pow(1.0)]);
        assert!(simplified.denominator.is_empty());
    }

    #[test]
    fn test_simplify_drops_zero_sum() {
        let simplified = (LENGTH.pow(2.0) * LENGTH.pow(-2.0) / MASS).simplified();
        assert!(simplified.numerator.is_empty());
        assert_eq!(simplified.denominator, vec![MASS.pow(1.0)]);
    }

    #[test]
    fn test_simplify_moves_negative_powers() {
        let simplified = (PRESSURE.pow(-2.0) / TIME.pow(-1.0)).simplified();
        assert_eq!(simplified.to_string(), "Time / (Pressure^2)");
    }

    #[test]
    fn test_simplify_drops_non_dimensional() {
        let simplified = (LENGTH * NON_DIMENSIONAL / TIME).simplified();
        assert_eq!(simplified, LENGTH / TIME);
    }

    #[test]
    fn test_simplified_leaves_original_untouched() {
        let composite = LENGTH * LENGTH;
        let _ = composite.simplified();
        assert_eq!(composite.numerator.len(), 2);
    }

    #[test]
    fn test_analyse_expands_aliases() {
        let analysed = (FORCE / LENGTH.pow(2.0)).analysed();
        assert_eq!(analysed.simplified(), pressure_shape());

        // alias in the denominator contributes its expansion inverted
        let analysed = (LENGTH / PRESSURE).analysed().simplified();
        assert_eq!(analysed, LENGTH.pow(2.0) * TIME.pow(2.0) / MASS);
    }

    #[test]
    fn test_analyse_is_recursive() {
        let analysed = (ENERGY / TIME).analysed().simplified();
        assert_eq!(analysed, MASS * LENGTH.pow(2.0) / TIME.pow(3.0));
    }

    fn pressure_shape() -> GenericCompositeDimension {
        MASS / LENGTH / TIME.pow(2.0)
    }

    // =========================================================================
    // Equivalence
    // =========================================================================

    #[test]
    fn test_alias_is_equivalent_to_expansion() {
        let shape: GenericDescriptor = (MASS * LENGTH / TIME.pow(2.0)).into();
        assert!(GenericDescriptor::from(FORCE).is_equivalent(&shape));
        assert!(shape.is_equivalent(&FORCE.into()));
        assert_ne!(GenericDescriptor::from(FORCE), shape);
    }

    #[test]
    fn test_nested_alias_equivalence() {
        assert!(ENERGY.is_equivalent(MASS * LENGTH.pow(2.0) / TIME.pow(2.0)));
        assert!(ENERGY.is_equivalent(FORCE * LENGTH));
        assert!(ENERGY.is_equivalent(PRESSURE * LENGTH.pow(3.0)));
    }

    #[test]
    fn test_alias_power_equivalence() {
        assert!(PRESSURE.pow(2.0).is_equivalent(pressure_shape().pow(2.0)));
        assert!(!PRESSURE.pow(2.0).is_equivalent(pressure_shape()));
    }

    #[test]
    fn test_lone_member_composite_is_equivalent() {
        let lone = GenericDescriptor::from(LENGTH).into_composite();
        assert!(lone.is_equivalent(LENGTH));
        assert!(LENGTH.is_equivalent(lone));
        assert!((LENGTH * LENGTH).is_equivalent(LENGTH.pow(2.0)));
    }

    #[test]
    fn test_zero_powers_are_dimensionless() {
        assert!(LENGTH.pow(0.0).is_equivalent(MASS.pow(0.0)));
        assert!(PRESSURE.pow(0.0).is_equivalent(LENGTH.pow(0.0)));
        assert!(LENGTH.pow(0.0).is_equivalent(PRESSURE.pow(0.0)));
        assert!(TIME.pow(0.0).is_equivalent(GenericCompositeDimension::default()));
        assert!(!LENGTH.pow(0.0).is_equivalent(LENGTH));
    }

    #[test]
    fn test_non_equivalent_shapes() {
        assert!(!LENGTH.pow(2.0).is_equivalent(LENGTH));
        assert!(!LENGTH.is_equivalent(MASS));
        assert!(!FORCE.is_equivalent(PRESSURE));
        assert!(!(LENGTH / TIME).is_equivalent(TIME / LENGTH));
    }

    #[test]
    fn test_has_no_units() {
        assert!(GenericCompositeDimension::default().has_no_units());
        assert!(!(LENGTH / TIME).has_no_units());
        assert!(!LENGTH.has_no_units());
    }

    // =========================================================================
    // Properties
    // =========================================================================

    const FAMILIES: [Family; 4] = [LENGTH, MASS, TIME, PRESSURE];

    fn composite_strategy() -> impl Strategy<Value = GenericCompositeDimension> {
        let factors = prop::collection::vec((0usize..FAMILIES.len(), -3i32..=3), 0..6);
        (factors.clone(), factors).prop_map(|(numerator, denominator)| {
            let build = |factors: Vec<(usize, i32)>| {
                factors
                    .into_iter()
                    .map(|(i, power)| FAMILIES[i].pow(f64::from(power)))
                    .collect()
            };
            GenericCompositeDimension::new(build(numerator), build(denominator))
        })
    }

    proptest! {
        #[test]
        fn prop_to_si_preserves_power(power in -10i32..=10) {
            let power = f64::from(power);
            let si = LENGTH.pow(power).to_si();
            prop_assert_eq!(si, Dimension::new(METER, power));
        }

        #[test]
        fn prop_simplification_is_idempotent(composite in composite_strategy()) {
            let once = composite.simplified();
            prop_assert_eq!(once.simplified(), once);
        }

        #[test]
        fn prop_inverse_round_trip(composite in composite_strategy()) {
            prop_assert_eq!(composite.inverse_generic().inverse_generic(), composite);
        }

        #[test]
        fn prop_equivalence_is_symmetric(a in composite_strategy(), b in composite_strategy()) {
            let (a, b) = (GenericDescriptor::from(a), GenericDescriptor::from(b));
            prop_assert_eq!(a.is_equivalent(&b), b.is_equivalent(&a));
        }
    }
}
