use unit_algebra_core::unit_family;

unit_family! {
    /// Temperature scales with an offset zero. Their units also count as instances of
    /// [`ABSOLUTE_TEMPERATURE`] and are converted by affine functions.
    pub family RELATIVE_TEMPERATURE: RelativeTemperatureUnit = "RelativeTemperature" {
        si: KELVIN,
        counterpart: ABSOLUTE_TEMPERATURE,
        units: { CELSIUS = "°C", FAHRENHEIT = "°F" }
    }
}

unit_family! {
    /// Thermodynamic temperature.
    pub family ABSOLUTE_TEMPERATURE: AbsoluteTemperatureUnit = "AbsoluteTemperature" {
        si: KELVIN,
        counterpart: RELATIVE_TEMPERATURE,
        units: { KELVIN = "K", RANKINE = "°R" }
    }
}
