//! ANSI color escapes used for terminal highlighting

pub const GREY: &str = "\x1b[30;1m";
pub const RED: &str = "\x1b[31;1m";
pub const GREEN: &str = "\x1b[32;1m";
pub const YELLOW: &str = "\x1b[33;1m";
pub const BLUE: &str = "\x1b[34;1m";
pub const MAGENTA: &str = "\x1b[35;1m";
pub const CYAN: &str = "\x1b[36;1m";
pub const WHITE: &str = "\x1b[37;1m";
pub const RESET: &str = "\x1b[0m";

/// Wrap `text` in `color` followed by a reset
pub fn paint(color: &str, text: impl std::fmt::Display) -> String {
    format!("{}{}{}", color, text, RESET)
}

/// Remove every `ESC [ ... m` sequence from `text`.
///
/// Handy for comparing colored output against plain expectations.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }

    out
}
