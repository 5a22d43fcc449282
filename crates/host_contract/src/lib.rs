//! Shared contracts between the host bootstraps and the shared UI crate.
//!
//! This crate is the API-first boundary for host composition: the render-mode
//! model every bootstrap constructs before mounting components, and the
//! form-factor capability each host binds to its own platform probe. Concrete
//! probes live in the host crates (`host_browser`, `host_server`); this crate
//! only defines the contracts and baseline implementations.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod form_factor;
pub mod render;

pub use form_factor::{
    FixedFormFactorService, FormFactorDescriptor, FormFactorKind, FormFactorService,
    NoopFormFactorService,
};
pub use render::{GlobalRenderMode, RenderModeSettings, RenderModeToken};
