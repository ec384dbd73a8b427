//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::ClipboardError;

/// Confirmation shown after a successful copy.
pub const COPIED: &str = "Password copied!";

/// Anything a password can be copied into.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard via copypasta.
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let ctx = ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { ctx })
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        // Reading back forces some backends to take ownership; scrub our copy.
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

/// Clipboard that is opened on first use, so the TUI can start on machines
/// without a display server and only report the failure when copying.
#[derive(Default)]
pub struct LazyClipboard {
    inner: Option<SystemClipboard>,
}

impl Clipboard for LazyClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            self.inner = Some(SystemClipboard::new()?);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard.copy(text),
            None => Err(ClipboardError::Unavailable("not initialised".into())),
        }
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;

    /// In-memory clipboard for tests.
    #[derive(Default)]
    pub struct FakeClipboard {
        pub contents: Option<String>,
        pub fail: bool,
    }

    impl Clipboard for FakeClipboard {
        fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Write("no display".into()));
            }
            self.contents = Some(text.to_owned());
            Ok(())
        }
    }
}
