//! Host context wiring for render settings and platform capabilities.
//!
//! Hosts provide the context exactly once, inside the render root and before
//! any shared page mounts, so every component observes the same configuration
//! for the process lifetime.

use std::rc::Rc;

use host_contract::{FormFactorService, NoopFormFactorService, RenderModeSettings};
use leptos::{provide_context, use_context};

#[derive(Clone)]
/// Leptos context carrying the per-host configuration the shared pages read.
pub struct HostUiContext {
    /// Startup-constructed render-mode configuration for this host.
    pub render_settings: RenderModeSettings,
    /// Bound platform form-factor capability.
    pub form_factor: Rc<dyn FormFactorService>,
}

/// Provides [`HostUiContext`] to the descendant component tree.
pub fn provide_host_context(settings: RenderModeSettings, form_factor: Rc<dyn FormFactorService>) {
    provide_context(HostUiContext {
        render_settings: settings,
        form_factor,
    });
}

/// Reads the render-mode settings for the current host.
///
/// Falls back to the framework defaults (every channel enabled) when no host
/// provided a context, matching the unconfigured-host invariant.
pub fn use_render_settings() -> RenderModeSettings {
    use_context::<HostUiContext>()
        .map(|ctx| ctx.render_settings)
        .unwrap_or_default()
}

/// Resolves the bound form-factor capability for the current host.
///
/// Falls back to the no-op probe when no host provided a context.
pub fn use_form_factor() -> Rc<dyn FormFactorService> {
    use_context::<HostUiContext>()
        .map(|ctx| ctx.form_factor)
        .unwrap_or_else(|| Rc::new(NoopFormFactorService))
}

#[cfg(test)]
mod tests {
    use host_contract::{FormFactorDescriptor, FormFactorKind};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fallbacks_apply_without_a_provider() {
        let runtime = leptos::create_runtime();
        assert_eq!(use_render_settings(), RenderModeSettings::default());
        assert_eq!(
            use_form_factor().form_factor(),
            FormFactorDescriptor::unknown()
        );
        runtime.dispose();
    }

    #[test]
    fn provided_context_is_observed_by_accessors() {
        let runtime = leptos::create_runtime();
        let descriptor = FormFactorDescriptor::new(FormFactorKind::Desktop, "linux");
        provide_host_context(
            RenderModeSettings::static_shell(),
            Rc::new(host_contract::FixedFormFactorService::new(descriptor.clone())),
        );

        assert_eq!(use_render_settings(), RenderModeSettings::static_shell());
        assert_eq!(use_form_factor().form_factor(), descriptor);
        runtime.dispose();
    }
}
