//! Process-wide converter registry.

use crate::config::RegistrySettings;
use crate::converters::register_builtin;
use once_cell::sync::OnceCell;
use unit_algebra_core::{ConversionResult, ConverterRegistry};

static REGISTRY: OnceCell<ConverterRegistry> = OnceCell::new();

/// Build a fresh registry holding every built-in converter.
pub fn build_registry(settings: &RegistrySettings) -> ConversionResult<ConverterRegistry> {
    let registry = ConverterRegistry::with_synthesis(settings.synthesize_defaults);
    register_builtin(&registry)?;
    Ok(registry)
}

/// The process-wide registry, built with default settings on first access.
pub fn registry() -> ConversionResult<&'static ConverterRegistry> {
    init_registry(&RegistrySettings::default())
}

/// Builds the process-wide registry from `settings`, typically the `[registry]` table of
/// loaded [`Settings`](crate::Settings).
///
/// Only the first initialisation applies: once the registry exists (through this function or
/// [`registry`]) it is returned unchanged and `settings` is ignored.
pub fn init_registry(settings: &RegistrySettings) -> ConversionResult<&'static ConverterRegistry> {
    REGISTRY.get_or_try_init(|| {
        log::debug!(
            "Initializing the process-wide converter registry (synthesis: {})",
            settings.synthesize_defaults
        );
        build_registry(settings)
    })
}
