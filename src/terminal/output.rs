//! Terminal output utilities.
//!
//! Box drawing and ANSI helpers. Boxes are built into a [`Frame`] so the same
//! drawing code works in raw mode (which needs `\r\n`) and cooked mode.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const REVERSE: &str = "\x1b[7m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[33m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 52;

const EOL: &str = "\r\n";

/// A block of box-drawn lines, rendered in one write.
#[derive(Debug, Default)]
pub struct Frame {
    buf: String,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// ┌─ Title ──────────┐
    pub fn top(&mut self, title: &str) -> &mut Self {
        if title.is_empty() {
            self.raw(&format!("┌{}┐", "─".repeat(BOX_WIDTH - 2)))
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
            self.raw(&format!("┌{}{}┐", title_part, "─".repeat(remaining)))
        }
    }

    /// │ content          │
    pub fn line(&mut self, content: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let padding = inner_width.saturating_sub(console_width(content));
        self.raw(&format!("│ {}{} │", content, " ".repeat(padding)))
    }

    /// │     content      │
    pub fn line_center(&mut self, content: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let total_padding = inner_width.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.raw(&format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ))
    }

    /// ├──────────────────┤
    pub fn rule(&mut self) -> &mut Self {
        self.raw(&format!("├{}┤", "─".repeat(BOX_WIDTH - 2)))
    }

    /// └──────────────────┘
    pub fn bottom(&mut self) -> &mut Self {
        self.raw(&format!("└{}┘", "─".repeat(BOX_WIDTH - 2)))
    }

    /// Help option with flag and description, wrapping the description.
    pub fn opt(&mut self, flag: &str, desc: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let flag_col = 22;
        let desc_col = inner_width - flag_col;

        let flag_padded = format!("{:<width$}", flag, width = flag_col);

        let mut lines: Vec<String> = Vec::new();
        let mut current_line = String::new();
        for word in desc.split_whitespace() {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.len() + 1 + word.len() <= desc_col {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current_line));
                current_line = word.to_string();
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }

        let first = lines.first().map(String::as_str).unwrap_or("");
        self.line(&format!("{}{}", flag_padded, first));

        let indent = " ".repeat(flag_col);
        for line in lines.iter().skip(1) {
            self.line(&format!("{}{}", indent, line));
        }
        self
    }

    /// Unboxed line.
    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self.buf.push_str(EOL);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Write the frame to stdout.
    pub fn print(&self) {
        print!("{}", self.as_str());
        flush();
    }
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
