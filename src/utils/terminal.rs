//! Terminal utilities for title setting

use std::io::{IsTerminal, Write};

/// Sets the terminal title to the specified text
///
/// Does nothing when stdout is redirected, so piped output only carries
/// log lines and the summary table.
pub fn set_terminal_title(title: &str) {
    let mut stdout = std::io::stdout();
    if !stdout.is_terminal() {
        return;
    }
    // ANSI escape sequence to set terminal title
    let _ = write!(stdout, "\x1b]0;{title}\x07");
}

/// Sets the terminal title and ensures it's flushed to the terminal
pub fn set_terminal_title_and_flush(title: &str) {
    set_terminal_title(title);
    // Flush stdout - ignore errors as this is non-critical
    let _ = std::io::stdout().flush();
}
