use unit_algebra_core::unit_family;

unit_family! {
    /// Quantities without a unit of measurement.
    pub family NON_DIMENSIONAL: NonDimensionalUnit = "NonDimensional" {
        si: UNITLESS,
        non_dimensional: true,
        units: { UNITLESS = "" }
    }
}

unit_family! {
    pub family LENGTH: LengthUnit = "Length" {
        si: METER,
        units: {
            MILLIMETER = "mm",
            CENTIMETER = "cm",
            METER = "m",
            KILOMETER = "km",
            INCH = "in",
            FOOT = "ft",
            YARD = "yd",
            /// International (statute) mile.
            MILE = "mi",
            NAUTICAL_MILE = "NM",
        }
    }
}

unit_family! {
    pub family MASS: MassUnit = "Mass" {
        si: KILOGRAM,
        units: {
            MILLIGRAM = "mg",
            GRAM = "g",
            KILOGRAM = "kg",
            METRIC_TONNE = "MT",
            POUND = "lb",
        }
    }
}

unit_family! {
    pub family AMOUNT: AmountUnit = "Amount" {
        si: MOL,
        units: { MOL = "mol", KILOMOL = "kmol" }
    }
}

unit_family! {
    pub family TIME: TimeUnit = "Time" {
        si: SECOND,
        units: {
            MILLISECOND = "ms",
            SECOND = "s",
            MINUTE = "min",
            HOUR = "hr",
            DAY = "d",
            WEEK = "week",
            /// A twelfth of a 365-day year.
            MONTH = "month",
            /// 365 days.
            YEAR = "yr",
        }
    }
}

unit_family! {
    pub family ELECTRIC_CURRENT: ElectricCurrentUnit = "ElectricCurrent" {
        si: AMPERE,
        units: { MILLIAMPERE = "mA", AMPERE = "A", KILOAMPERE = "kA" }
    }
}
