//! Process-wide quiet flag.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Turn quiet mode on or off (suppresses warnings and confirmations).
pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether stdin is a terminal.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

/// Skip prompts when quiet or when nobody can answer them.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
