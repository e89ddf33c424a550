//! Diagnostic output levels.
//!
//! The report itself always goes to stdout. Everything else is a diagnostic
//! on stderr, filtered by the level chosen on the command line:
//! - `-q`: nothing but fatal errors
//! - default: anomaly warnings (`wprintln!`)
//! - `-v`: warnings plus decode details and timings (`vprintln!`, [`Timer`])

use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Instant;

/// Diagnostic level, ordered from least to most output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Quiet,
    Warn,
    Debug,
}

impl Level {
    fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, true) => Self::Debug,
            (false, false) => Self::Warn,
        }
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(Level::Warn as u8);

/// Sets the process-wide level from the `-q`/`-v` flags.
pub fn init(quiet: bool, verbose: bool) {
    LEVEL.store(Level::from_flags(quiet, verbose) as u8, Ordering::Relaxed);
}

/// Returns `true` if diagnostics at `level` should be printed.
pub fn enabled(level: Level) -> bool {
    LEVEL.load(Ordering::Relaxed) >= level as u8
}

/// `eprintln!` that only prints with `-v`.
macro_rules! vprintln {
    ($($arg:tt)*) => {
        if $crate::verbose::enabled($crate::verbose::Level::Debug) {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use vprintln;

/// `eprintln!` that is silenced by `-q`.
macro_rules! wprintln {
    ($($arg:tt)*) => {
        if $crate::verbose::enabled($crate::verbose::Level::Warn) {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use wprintln;

/// Prints how long a decode step took when dropped, in `-v` mode.
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// Starts timing `label`.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        vprintln!("  {}: {:.1?}", self.label, self.start.elapsed());
    }
}
