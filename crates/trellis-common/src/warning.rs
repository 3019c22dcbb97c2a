//! Recovery warnings with colored terminal output.
//!
//! The parser never fails on incomplete markup (a missing closing tag, a
//! stray `</br>`); it recovers and reports what it did here instead.
//! Each distinct message is printed once until [`clear_warnings`] is called.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// When set, warnings are still recorded but never printed.
static QUIET: AtomicBool = AtomicBool::new(false);

/// Report a recovery (prints once per unique message).
///
/// # Example
/// ```
/// use trellis_common::warning::warn_once;
///
/// warn_once("HTML", "implicitly closed <p> before </div>");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let first_time = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if first_time && !QUIET.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[trellis {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call before parsing an unrelated document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Suppress (or re-enable) printing of warnings to stderr.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Number of distinct warnings recorded since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map_or(0, HashSet::len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_deduplicates() {
        set_quiet(true);
        let before = warning_count();
        warn_once("TEST", "dedup check");
        warn_once("TEST", "dedup check");
        assert_eq!(warning_count(), before + 1);
        warn_once("OTHER", "dedup check");
        assert_eq!(warning_count(), before + 2);
        clear_warnings();
        assert_eq!(warning_count(), 0);
    }
}
