//! Deduplicated engine warnings.
//!
//! Components report unsupported or inconsistent input through [`warn_once`].
//! Each unique `(component, message)` pair is forwarded to the [`log`] facade
//! exactly once per process (or until [`clear_warnings`] is called), so a
//! dump over a large tree never floods the log with the same complaint.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key_for(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about unsupported or inconsistent input (emitted once per unique message).
///
/// The record is logged at `warn` level with target `koala::<component>`.
///
/// # Example
/// ```ignore
/// warn_once("Dump", "layout box references missing DOM node NodeId(7)");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let first_time = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key_for(component, message));

    if first_time {
        let target = format!("koala::{}", component.to_ascii_lowercase());
        log::warn!(target: target.as_str(), "[Koala {component}] {message}");
    }
}

/// Returns `true` if this exact warning has been emitted since the last clear.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key_for(component, message)))
}

/// Forget every recorded warning, so each may be emitted again.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
