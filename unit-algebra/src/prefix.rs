//! Decimal unit prefixes.

use std::fmt;
use std::ops::Mul;

/// SI decimal prefixes, handy when filling conversion tables or rescaling raw values.
///
/// ```rust
/// use unit_algebra::prefix::UnitPrefix;
///
/// let meters: f64 = 225.0 * UnitPrefix::Centi;
/// assert!((meters - 2.25).abs() < 1e-12);
///
/// let centimeters: f64 = 50.26 * UnitPrefix::Centi.inverse();
/// assert!((centimeters - 5026.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitPrefix {
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
}

impl UnitPrefix {
    pub const ALL: [UnitPrefix; 12] = [
        UnitPrefix::Pico,
        UnitPrefix::Nano,
        UnitPrefix::Micro,
        UnitPrefix::Milli,
        UnitPrefix::Centi,
        UnitPrefix::Deci,
        UnitPrefix::Deca,
        UnitPrefix::Hecto,
        UnitPrefix::Kilo,
        UnitPrefix::Mega,
        UnitPrefix::Giga,
        UnitPrefix::Tera,
    ];

    /// Multiplier of the prefix, e.g. `1e-2` for centi.
    pub const fn value(self) -> f64 {
        match self {
            UnitPrefix::Pico => 1e-12,
            UnitPrefix::Nano => 1e-9,
            UnitPrefix::Micro => 1e-6,
            UnitPrefix::Milli => 1e-3,
            UnitPrefix::Centi => 1e-2,
            UnitPrefix::Deci => 1e-1,
            UnitPrefix::Deca => 1e1,
            UnitPrefix::Hecto => 1e2,
            UnitPrefix::Kilo => 1e3,
            UnitPrefix::Mega => 1e6,
            UnitPrefix::Giga => 1e9,
            UnitPrefix::Tera => 1e12,
        }
    }

    /// Reciprocal of the multiplier; use it to go from the base unit to the prefixed one.
    pub fn inverse(self) -> f64 {
        1.0 / self.value()
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            UnitPrefix::Pico => "p",
            UnitPrefix::Nano => "n",
            UnitPrefix::Micro => "µ",
            UnitPrefix::Milli => "m",
            UnitPrefix::Centi => "c",
            UnitPrefix::Deci => "d",
            UnitPrefix::Deca => "da",
            UnitPrefix::Hecto => "h",
            UnitPrefix::Kilo => "k",
            UnitPrefix::Mega => "M",
            UnitPrefix::Giga => "G",
            UnitPrefix::Tera => "T",
        }
    }
}

impl Mul<UnitPrefix> for f64 {
    type Output = f64;

    fn mul(self, prefix: UnitPrefix) -> f64 {
        self * prefix.value()
    }
}

impl fmt::Display for UnitPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
