//! Visitor capabilities and session state.
//!
//! The routing core does not implement authentication. It consults these
//! traits and leaves policy to the embedding application.

/// Capability gating whole-site visibility.
pub const VIEW_SITE: &str = "view_site";

/// The current visitor's capability set.
pub trait Visitor {
    /// Whether the visitor holds the named capability.
    fn can(&self, capability: &str) -> bool;
}

/// A visitor with every capability. Suitable for public sites.
#[derive(Debug, Clone, Copy, Default)]
pub struct Everyone;

impl Visitor for Everyone {
    fn can(&self, _capability: &str) -> bool {
        true
    }
}

/// Session-equivalent state the dispatcher persists into.
pub trait Session {
    /// Record where the visitor should return after logging in.
    fn set_redirect(&mut self, url: &str);
}

/// In-process session store.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    redirect_to: Option<String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded post-login redirect target, if any.
    pub fn redirect(&self) -> Option<&str> {
        self.redirect_to.as_deref()
    }
}

impl Session for MemorySession {
    fn set_redirect(&mut self, url: &str) {
        self.redirect_to = Some(url.to_string());
    }
}
