//! Colored prefixes for diagnostics printed by the binary.

use owo_colors::OwoColorize;

/// Whether stderr/stdout may carry ANSI colors.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if colors_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if colors_enabled() {
        "note:".bright_black().to_string()
    } else {
        "note:".to_string()
    }
}
