//! Shared Leptos component library consumed by every host composition.
//!
//! The crate owns the page components, the application chrome, and the host
//! context layer through which each bootstrap injects its render-mode
//! configuration and platform capability before anything mounts. Host wiring
//! (routing, mounting, serving) stays in the host crates.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod context;
mod pages;
mod shell;

pub use context::{provide_host_context, use_form_factor, use_render_settings, HostUiContext};
pub use pages::{CounterPage, DevicePage, DeviceSummary, ErrorPage, HomePage};
pub use shell::AppShell;
