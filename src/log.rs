use std::env;

use once_cell::sync::Lazy;

use crate::constants::config::DEBUG_ENV;

pub static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var(DEBUG_ENV).map_or(false, |log_level| log_level.eq("true") || log_level.eq("1"))
});

/// Logs a debug message with optional formatted arguments.
///
/// Messages go to stderr so they never mix with the converted document.
///
/// # Arguments
///
/// * `fmt` - The format string for the debug message.
/// * `args` - Optional arguments to be formatted into the message.
///
/// # Examples
///
/// ```
/// use man2md::debug;
///
/// // Printed in yellow only when MAN2MD_DEBUG is set to "true" or "1"
/// debug!("Conversion completed");
/// debug!("Unknown macro .{} at line {}", "XY", 12);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", nu_ansi_term::Color::Yellow.paint(format!("{}", $fmt)));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", nu_ansi_term::Color::Yellow.paint(format!($fmt, $($arg)*)));
        }
    };
}
