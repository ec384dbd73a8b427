//! One-shot command line mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::parse;

/// Run with the given arguments (program name first).
pub fn run(args: Vec<String>) -> ExitCode {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::usage_hint();
            return ExitCode::from(2);
        }
    };

    match ctx.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Done(code)) => code,
    }
}
