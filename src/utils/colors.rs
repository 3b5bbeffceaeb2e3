/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Balance color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_balance(hours: f64) -> &'static str {
    let minutes = (hours * 60.0).round() as i64;
    if minutes > 0 {
        GREEN
    } else if minutes < 0 {
        RED
    } else {
        RESET
    }
}

/// Grey out placeholder values ("", "-", "0:00").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "-" || v == "0:00" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
