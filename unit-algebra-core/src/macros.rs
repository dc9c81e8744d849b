//! Macros for declaring unit families.

/// Declares a unit family: a zero-sized marker implementing [`UnitFamily`](crate::UnitFamily),
/// a [`Family`](crate::Family) constant and one [`Unit`](crate::Unit) constant per member.
///
/// Optional clauses, in this order:
///
/// - `aliased: <expr>` makes the family an alias for a generic descriptor;
/// - `counterpart: <expr>` names a family whose shape also accepts these units;
/// - `non_dimensional: true` marks the family as non-dimensional.
///
/// ```rust
/// use unit_algebra_core::{unit_family, GenericDescriptor};
///
/// unit_family! {
///     pub family LENGTH: LengthUnit = "Length" {
///         si: METER,
///         units: { METER = "m", FOOT = "ft" }
///     }
/// }
///
/// unit_family! {
///     /// Area is kept as its own family, aliased to length².
///     pub family AREA: AreaUnit = "Area" {
///         si: SQUARE_METER,
///         aliased: LENGTH.pow(2.0),
///         units: { SQUARE_METER = "m2", ACRE = "acre" }
///     }
/// }
///
/// assert_eq!(FOOT.family(), LENGTH);
/// assert!(AREA.is_alias());
/// assert!(GenericDescriptor::from(AREA).is_equivalent(&LENGTH.pow(2.0).into()));
/// ```
#[macro_export]
macro_rules! unit_family {
    (
        $(#[$meta:meta])*
        $vis:vis family $family:ident : $marker:ident = $name:literal {
            si: $si:expr,
            $(aliased: $aliased:expr,)?
            $(counterpart: $counterpart:expr,)?
            $(non_dimensional: $non_dimensional:literal,)?
            units: { $( $(#[$unit_meta:meta])* $unit:ident = $symbol:literal ),+ $(,)? } $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $marker;

        impl $crate::UnitFamily for $marker {
            fn name(&self) -> &'static str {
                $name
            }

            fn symbols(&self) -> &'static [&'static str] {
                &[$($symbol),+]
            }

            fn si(&self) -> $crate::Unit {
                $si
            }

            $(
                fn aliased_generic_descriptor(&self) -> Option<$crate::GenericDescriptor> {
                    Some($crate::GenericDescriptor::from($aliased))
                }
            )?

            $(
                fn counterpart(&self) -> Option<$crate::Family> {
                    Some($counterpart)
                }
            )?

            $(
                fn is_non_dimensional(&self) -> bool {
                    $non_dimensional
                }
            )?
        }

        #[doc = concat!("The ", $name, " family.")]
        $vis const $family: $crate::Family = $crate::Family::of(&$marker);

        $(
            $(#[$unit_meta])*
            $vis const $unit: $crate::Unit = $crate::Unit::new($family, $symbol);
        )+
    };
}
