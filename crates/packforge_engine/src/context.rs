//! Ambient, thread-scoped resolution behaviors a build must not see.
//!
//! The proxy cache and language-fallback layers are active by default for
//! every thread; a build job runs with both suppressed.

use std::cell::Cell;

thread_local! {
    static PROXY_CACHE: Cell<bool> = const { Cell::new(true) };
    static LANGUAGE_FALLBACK: Cell<bool> = const { Cell::new(true) };
}

/// Whether the proxy cache is active on the current thread.
pub fn proxy_cache_enabled() -> bool {
    PROXY_CACHE.with(Cell::get)
}

/// Whether language-fallback resolution is active on the current thread.
pub fn language_fallback_enabled() -> bool {
    LANGUAGE_FALLBACK.with(Cell::get)
}

/// Disables both layers for the current thread until dropped.
///
/// Restoration happens in `Drop`, so it holds on every exit path out of
/// the scoped call, including unwinds.
#[derive(Debug)]
pub struct SuppressionScope {
    prev_proxy_cache: bool,
    prev_language_fallback: bool,
}

impl SuppressionScope {
    pub fn enter() -> Self {
        Self {
            prev_proxy_cache: PROXY_CACHE.with(|flag| flag.replace(false)),
            prev_language_fallback: LANGUAGE_FALLBACK.with(|flag| flag.replace(false)),
        }
    }
}

impl Drop for SuppressionScope {
    fn drop(&mut self) {
        PROXY_CACHE.with(|flag| flag.set(self.prev_proxy_cache));
        LANGUAGE_FALLBACK.with(|flag| flag.set(self.prev_language_fallback));
    }
}
