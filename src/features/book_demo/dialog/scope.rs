use std::fmt;
use std::sync::Arc;

/// Callback fired when the user presses Escape
pub type EscapeHandler = Arc<dyn Fn() + Send + Sync>;

/// A page side effect that is undone when the guard is dropped
pub struct ScopedEffect {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl ScopedEffect {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Guard with nothing to undo
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for ScopedEffect {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for ScopedEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedEffect")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// Page-level effects an open dialog needs from its host document
pub trait PageHost: Send + Sync {
    /// Hide background scrolling until the guard drops
    fn suppress_scroll(&self) -> ScopedEffect;

    /// Listen for the Escape key until the guard drops
    fn on_escape(&self, handler: EscapeHandler) -> ScopedEffect;
}

/// Host without a document (server-side rendering, CLIs)
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessPageHost;

impl PageHost for HeadlessPageHost {
    fn suppress_scroll(&self) -> ScopedEffect {
        ScopedEffect::noop()
    }

    fn on_escape(&self, _handler: EscapeHandler) -> ScopedEffect {
        ScopedEffect::noop()
    }
}

/// Effects held for as long as the dialog is open
#[derive(Debug)]
pub(crate) struct DialogScope {
    _scroll: ScopedEffect,
    _escape: ScopedEffect,
}

impl DialogScope {
    pub(crate) fn acquire(host: &dyn PageHost, on_escape: EscapeHandler) -> Self {
        Self {
            _scroll: host.suppress_scroll(),
            _escape: host.on_escape(on_escape),
        }
    }
}
