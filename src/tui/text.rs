use crate::terminal::Frame;
use crate::validate::{MAX_LENGTH, MIN_LENGTH};

pub fn help() -> Frame {
    let mut f = Frame::new();
    f.top("Passgen")
        .line_center("Password generator")
        .line("")
        .line("MODES:")
        .line("  1) Interactive: run without arguments.")
        .line("  2) Client: pass flags (e.g. -l 12 -n 3).")
        .line("")
        .line("USAGE:")
        .line("  passgen [OPTIONS]")
        .line("")
        .line(" Password:")
        .opt(
            "  -l, --length <N>",
            &format!("Characters per password ({MIN_LENGTH}-{MAX_LENGTH}, default: 8)"),
        )
        .opt("  -n, --number <N>", "How many to generate (default: 1)")
        .opt("      --no-upper", "Leave out A-Z")
        .opt("      --no-lower", "Leave out a-z")
        .opt("      --no-numbers", "Leave out 0-9")
        .opt("      --no-symbols", "Leave out !@#$%^&*()")
        .line("")
        .line(" Output:")
        .opt("  -b, --board", "Copy to clipboard instead of printing")
        .opt("  -q, --quiet", "Suppress all output except passwords")
        .line("")
        .line(" Settings:")
        .opt("  -s, --saved", "Start from saved settings")
        .opt("      --save", "Save length and toggles as settings")
        .line("")
        .line(" Info:")
        .opt("  -h, --help", "Display this help message")
        .opt("  -v, --version", "Display version")
        .line("")
        .line("With every class turned off, all four are used.")
        .line("")
        .line("EXAMPLES:")
        .line("  passgen -l 16             16 characters")
        .line("  passgen -l 12 -n 3        Three passwords")
        .line("  passgen --no-symbols -b  No symbols, copied")
        .bottom();
    f
}

pub fn print_help() {
    help().print();
}
