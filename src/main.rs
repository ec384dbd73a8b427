use std::env;
use std::process::ExitCode;

mod app;
mod cli;
mod clipboard;
mod error;
mod logging;
mod pass;
mod settings;
mod terminal;
mod tui;
mod validate;

fn main() -> ExitCode {
    logging::init();
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 if cli::quiet::is_interactive() => {
            tui::run();
            ExitCode::SUCCESS
        }
        _ => cli::run(args),
    }
}
