//! Platform form-factor capability contracts.
//!
//! Each host binds exactly one [`FormFactorService`] implementation during
//! bootstrap; shared components consume it through the UI context layer
//! without knowing which concrete platform provides it.

use serde::{Deserialize, Serialize};

/// Broad device class reported by a host's form-factor probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormFactorKind {
    /// Native desktop shell.
    Desktop,
    /// Native mobile shell.
    Mobile,
    /// Stand-alone browser client.
    Browser,
    /// Server-side rendering process.
    Server,
    /// No probe bound, or the probe could not classify the platform.
    Unknown,
}

impl FormFactorKind {
    /// Returns a stable string token for diagnostics and display.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
            Self::Browser => "browser",
            Self::Server => "server",
            Self::Unknown => "unknown",
        }
    }
}

/// Host-specific description of the executing platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFactorDescriptor {
    /// Broad device class.
    pub kind: FormFactorKind,
    /// Short platform label (operating system or user-agent derived).
    pub platform: String,
}

impl FormFactorDescriptor {
    /// Builds a descriptor from a kind and platform label.
    pub fn new(kind: FormFactorKind, platform: impl Into<String>) -> Self {
        Self {
            kind,
            platform: platform.into(),
        }
    }

    /// Descriptor reported when no probe is bound.
    pub fn unknown() -> Self {
        Self::new(FormFactorKind::Unknown, "unknown")
    }
}

/// Capability interface describing the current platform's form factor.
pub trait FormFactorService {
    /// Describes the platform the component tree is executing on.
    fn form_factor(&self) -> FormFactorDescriptor;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op form-factor service for targets without a probe.
pub struct NoopFormFactorService;

impl FormFactorService for NoopFormFactorService {
    fn form_factor(&self) -> FormFactorDescriptor {
        FormFactorDescriptor::unknown()
    }
}

#[derive(Debug, Clone)]
/// Form-factor service returning a descriptor captured ahead of time.
///
/// Used where the probe runs once during bootstrap and the result is replayed
/// into per-render contexts, as the server host does.
pub struct FixedFormFactorService(FormFactorDescriptor);

impl FixedFormFactorService {
    /// Wraps a previously probed descriptor.
    pub fn new(descriptor: FormFactorDescriptor) -> Self {
        Self(descriptor)
    }
}

impl FormFactorService for FixedFormFactorService {
    fn form_factor(&self) -> FormFactorDescriptor {
        self.0.clone()
    }
}
