//! Helpers shared by unit tests.

/// Helper to safely set env var in tests
pub(crate) fn set_env(key: &str, value: &str) {
    // SAFETY: callers are #[serial] tests, no concurrent env access
    unsafe { std::env::set_var(key, value); }
}

/// Helper to safely remove env var in tests
pub(crate) fn remove_env(key: &str) {
    // SAFETY: callers are #[serial] tests, no concurrent env access
    unsafe { std::env::remove_var(key); }
}
