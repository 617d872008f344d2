//! Scoped process environment changes for integration tests.

use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Holds the environment lock and restores the touched variables on drop.
pub struct EnvScope {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvScope {
    /// Applies `vars`, removing each variable whose value is `None`.
    pub fn new(vars: &[(&'static str, Option<&str>)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let saved = vars
            .iter()
            .map(|&(name, value)| {
                let previous = env::var(name).ok();
                apply(name, value);
                (name, previous)
            })
            .collect();
        Self { saved, _lock: lock }
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        for (name, previous) in self.saved.drain(..) {
            apply(name, previous.as_deref());
        }
    }
}

fn apply(name: &str, value: Option<&str>) {
    // SAFETY: ENV_LOCK serializes every environment mutation in this test binary.
    unsafe {
        match value {
            Some(text) => env::set_var(name, text),
            None => env::remove_var(name),
        }
    }
}
