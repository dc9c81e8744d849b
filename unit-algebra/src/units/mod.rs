//! Unit catalogue.
//!
//! Every family is a zero-sized marker with a [`Family`](unit_algebra_core::Family) constant
//! and one [`Unit`](unit_algebra_core::Unit) constant per member:
//!
//! | Family                 | Units                                                     | SI  |
//! |------------------------|-----------------------------------------------------------|-----|
//! | `NonDimensional`       | (unitless)                                                |     |
//! | `RelativeTemperature`  | °C, °F                                                    | K   |
//! | `AbsoluteTemperature`  | K, °R                                                     | K   |
//! | `Length`               | mm, cm, m, km, in, ft, yd, mi, NM                         | m   |
//! | `Mass`                 | mg, g, kg, MT, lb                                         | kg  |
//! | `Amount`               | mol, kmol                                                 | mol |
//! | `Time`                 | ms, s, min, hr, d, week, month, yr                        | s   |
//! | `ElectricCurrent`      | mA, A, kA                                                 | A   |
//! | `Force` (alias)        | N, dyn                                                    | N   |
//! | `Pressure` (alias)     | mbar, bar, psi, Pa, kPa, MPa                              | Pa  |
//! | `Energy` (alias)       | J, kJ, MJ, GJ, cal, kcal, Btu, eV, Wh, kWh                | J   |
//! | `Power` (alias)        | W, kW, MW, GW                                             | W   |

mod aliases;
mod base;
mod temperature;

pub use aliases::*;
pub use base::*;
pub use temperature::*;
