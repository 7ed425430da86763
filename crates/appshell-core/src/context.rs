//! Shared session context for the application shell.

use std::sync::{
    RwLock,
    atomic::{AtomicBool, Ordering},
};

/// Mutable state shared between the shell and its collaborators.
///
/// Replaces the ambient globals of a classic page shell (request token,
/// unload bookkeeping) with one injected object. All mutation happens
/// from the shell's single logical thread of control; the locks only
/// guard against torn reads from spawned continuations.
#[derive(Debug, Default)]
pub struct SessionContext {
    request_token: RwLock<String>,
    unload_started: AtomicBool,
    navigating_away: AtomicBool,
}

impl SessionContext {
    /// Create a context seeded with the token from the initial page load.
    #[must_use]
    pub fn new(request_token: impl Into<String>) -> Self {
        Self {
            request_token: RwLock::new(request_token.into()),
            unload_started: AtomicBool::new(false),
            navigating_away: AtomicBool::new(false),
        }
    }

    /// Current anti-forgery token.
    #[must_use]
    pub fn request_token(&self) -> String {
        self.request_token.read().unwrap().clone()
    }

    /// Replace the anti-forgery token.
    ///
    /// The newest *arriving* value wins; callers racing each other get
    /// last-write-wins semantics.
    pub fn set_request_token(&self, token: impl Into<String>) {
        *self.request_token.write().unwrap() = token.into();
    }

    /// Whether a page unload has actually begun.
    #[must_use]
    pub fn unload_started(&self) -> bool {
        self.unload_started.load(Ordering::Relaxed)
    }

    /// Mark the unload as begun. Never cleared within a page lifetime.
    pub fn mark_unload_started(&self) {
        self.unload_started.store(true, Ordering::Relaxed);
    }

    /// Whether the user is (probably) navigating away right now.
    #[must_use]
    pub fn navigating_away(&self) -> bool {
        self.navigating_away.load(Ordering::Relaxed)
    }

    /// Set or clear the navigating-away flag.
    pub fn set_navigating_away(&self, value: bool) {
        self.navigating_away.store(value, Ordering::Relaxed);
    }
}
