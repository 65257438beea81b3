//! Debug logging for route construction and filling.
//!
//! Logging is off by default and can be enabled via `TYPED_ROUTES_DEBUG=1`
//! to trace how a route template is assembled and how parameter values are
//! substituted into it.
//!
//! # Usage
//!
//! Enable debug logging in one of two ways:
//!
//! 1. Environment variable: `TYPED_ROUTES_DEBUG=1`
//! 2. Programmatically: `debug::enable_debug()`
//!
//! ```rust,ignore
//! use typed_routes_core::{debug_build, debug_fill, debug_log};
//!
//! debug_log!("General debug message");
//! debug_build!("append segment {:?}", segment);
//! debug_fill!("{} values pending", pending);
//! ```

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag for debug logging.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Global flag to track if init() has been called.
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Name of the environment variable read by [`init`].
pub const DEBUG_ENV_VAR: &str = "TYPED_ROUTES_DEBUG";

/// Initialize debug logging from environment.
///
/// Called automatically on first use of any debug macro.
///
/// | Variable | Effect |
/// |----------|--------|
/// | `TYPED_ROUTES_DEBUG=1` | Enable all debug logging |
/// | `TYPED_ROUTES_DEBUG=true` | Enable all debug logging |
/// | Unset/other | Debug logging disabled |
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let enabled = env::var(DEBUG_ENV_VAR)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);

    if enabled {
        eprintln!("[TYPED_ROUTES] Debug logging enabled");
    }
}

/// Check if debug logging is enabled, initializing from the environment
/// on first call.
#[must_use]
pub fn is_debug_enabled() -> bool {
    if !INITIALIZED.load(Ordering::SeqCst) {
        init();
    }
    DEBUG_ENABLED.load(Ordering::SeqCst)
}

/// Enable debug logging programmatically.
pub fn enable_debug() {
    INITIALIZED.store(true, Ordering::SeqCst);
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Disable debug logging programmatically.
pub fn disable_debug() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Reset the debug state so `init()` re-reads the environment.
#[doc(hidden)]
pub fn reset_for_test() {
    INITIALIZED.store(false, Ordering::SeqCst);
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Log a general debug message if debug logging is enabled.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!("[TYPED_ROUTES] {}", format!($($arg)*));
        }
    };
}

/// Log route construction (segment and parameter appends).
#[macro_export]
macro_rules! debug_build {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!("[TYPED_ROUTES:BUILD] {}", format!($($arg)*));
        }
    };
}

/// Log value substitution into a template.
#[macro_export]
macro_rules! debug_fill {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!("[TYPED_ROUTES:FILL] {}", format!($($arg)*));
        }
    };
}
