//! ANSI color helper utilities for terminal output.
use crate::models::TimebankResult;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Timebank color:
/// surplus → green
/// deficit → red
/// zero → reset
pub fn color_for_timebank(tb: &TimebankResult) -> &'static str {
    if tb.is_surplus() {
        GREEN
    } else if tb.is_deficit() {
        RED
    } else {
        RESET
    }
}

/// The formatted delta wrapped in its timebank color.
pub fn colorize_timebank(tb: &TimebankResult) -> String {
    format!("{}{}{}", color_for_timebank(tb), tb.formatted, RESET)
}

/// Grey out placeholders such as `--:--`.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timebank_color_follows_sign() {
        assert_eq!(color_for_timebank(&TimebankResult::from_minutes(5)), GREEN);
        assert_eq!(color_for_timebank(&TimebankResult::from_minutes(-5)), RED);
        assert_eq!(color_for_timebank(&TimebankResult::zero()), RESET);
    }

    #[test]
    fn colorized_timebank_keeps_formatted_text() {
        let tb = TimebankResult::from_minutes(-90);
        assert_eq!(colorize_timebank(&tb), format!("{RED}-01:30{RESET}"));
    }

    #[test]
    fn placeholders_are_greyed() {
        assert_eq!(colorize_optional("--:--"), format!("{GREY}--:--{RESET}"));
        assert_eq!(colorize_optional("09:00"), "09:00");
    }
}
