//! Physical constants (CODATA 2018 exact or recommended values).

use crate::quantity::Quantity;
use crate::units::{JOULE, KELVIN, METER, MOL, SECOND};
use once_cell::sync::Lazy;

/// Molar gas constant, J / mol / K.
pub static GAS_CONSTANT: Lazy<Quantity> =
    Lazy::new(|| Quantity::new(8.314_462_618_153_24, JOULE / MOL / KELVIN));

/// Boltzmann constant, J / K.
pub static BOLTZMANN_CONSTANT: Lazy<Quantity> =
    Lazy::new(|| Quantity::new(1.380_649e-23, JOULE / KELVIN));

pub static SPEED_OF_LIGHT: Lazy<Quantity> =
    Lazy::new(|| Quantity::new(299_792_458.0, METER / SECOND));

/// Avogadro number, 1 / mol.
pub static AVOGADRO_NUMBER: Lazy<Quantity> =
    Lazy::new(|| Quantity::new(6.022_140_76e23, MOL.inverse()));

/// Planck constant, J · s.
pub static PLANCK_CONSTANT: Lazy<Quantity> =
    Lazy::new(|| Quantity::new(6.626_070_15e-34, JOULE * SECOND));

/// Reduced Planck constant (h / 2π), J · s.
pub static REDUCED_PLANCK_CONSTANT: Lazy<Quantity> =
    Lazy::new(|| Quantity::new(1.054_571_817e-34, JOULE * SECOND));
