//! Shared page components rendered by every host.

use host_contract::{FormFactorDescriptor, RenderModeToken};
use leptos::*;

use crate::context::{use_form_factor, use_render_settings};

fn channel_row(label: &'static str, token: Option<RenderModeToken>) -> impl IntoView {
    let state = match token {
        Some(token) => token.as_str(),
        None => "disabled",
    };
    view! {
        <li class="channel-row">
            <span class="channel-name">{label}</span>
            <span class="channel-state">{state}</span>
        </li>
    }
}

#[component]
/// Landing page: greets and lists the interactivity channels this host enabled.
pub fn HomePage() -> impl IntoView {
    let settings = use_render_settings();

    view! {
        <section class="page page-home">
            <h1>"Hello, world!"</h1>
            <p>"Welcome to your new app, running the shared component library."</p>
            <ul class="channel-list">
                {channel_row("server", settings.interactive_server)}
                {channel_row("auto", settings.interactive_auto)}
                {channel_row("webassembly", settings.interactive_webassembly)}
            </ul>
        </section>
    }
}

#[component]
/// Counter page: interactive when the host enables any channel, static otherwise.
pub fn CounterPage() -> impl IntoView {
    let settings = use_render_settings();
    let (count, set_count) = create_signal(0i64);

    let control = if settings.any_interactive() {
        view! {
            <button class="counter-button" on:click=move |_| set_count.update(|n| *n += 1)>
                "Click me"
            </button>
        }
        .into_view()
    } else {
        view! {
            <p class="render-note">
                "Interactivity is disabled on this host; the counter renders statically."
            </p>
        }
        .into_view()
    };

    view! {
        <section class="page page-counter">
            <h1>"Counter"</h1>
            <p class="counter-value">"Current count: " {count}</p>
            {control}
        </section>
    }
}

#[component]
/// Read-only rendering of a probed form-factor descriptor.
pub fn DeviceSummary(
    /// Descriptor produced by the host's bound form-factor capability.
    descriptor: FormFactorDescriptor,
) -> impl IntoView {
    view! {
        <dl class="device-summary">
            <dt>"Form factor"</dt>
            <dd class="device-kind">{descriptor.kind.as_str()}</dd>
            <dt>"Platform"</dt>
            <dd class="device-platform">{descriptor.platform}</dd>
        </dl>
    }
}

#[component]
/// Device page: probes the bound form-factor capability and shows the result.
pub fn DevicePage() -> impl IntoView {
    let descriptor = use_form_factor().form_factor();

    view! {
        <section class="page page-device">
            <h1>"Device"</h1>
            <DeviceSummary descriptor=descriptor />
        </section>
    }
}

#[component]
/// Error page shown for failed or unmatched requests outside development.
pub fn ErrorPage() -> impl IntoView {
    view! {
        <section class="page page-error">
            <h1>"Error"</h1>
            <p>"An error occurred while processing your request."</p>
            <p><a href="/">"Return home"</a></p>
        </section>
    }
}
