//! Inline `key=value` field formatting

use super::color::{paint, GREY, YELLOW};
use std::fmt::{Display, Write};

/// Render alternating keys and values as `key=value` pairs.
///
/// Keys are painted grey, values yellow, pairs are separated by one space.
/// A trailing key without a value is dropped.
///
/// # Examples
///
/// ```
/// use stderr_logger::core::{color::strip_ansi, fields::fields};
///
/// let rendered = fields(&[&"k1", &1, &"k2", &"two"]);
/// assert_eq!(strip_ansi(&rendered), "k1=1 k2=two");
///
/// let dangling = fields(&[&"k1", &1, &"k2"]);
/// assert_eq!(strip_ansi(&dangling), "k1=1");
/// ```
pub fn fields(args: &[&dyn Display]) -> String {
    let mut out = String::new();

    for (idx, pair) in args.chunks_exact(2).enumerate() {
        if idx != 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{}={}", paint(GREY, pair[0]), paint(YELLOW, pair[1]));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::strip_ansi;

    #[test]
    fn test_exact_bytes() {
        let rendered = fields(&[&"port", &8080]);
        assert_eq!(rendered, "\x1b[30;1mport\x1b[0m=\x1b[33;1m8080\x1b[0m");
    }

    #[test]
    fn test_pairs_joined_by_single_space() {
        let rendered = fields(&[&"k1", &1, &"k2", &"two"]);
        assert_eq!(strip_ansi(&rendered), "k1=1 k2=two");
        assert!(!rendered.ends_with(' '));
    }

    #[test]
    fn test_dangling_key_dropped() {
        assert_eq!(fields(&[&"k1", &1, &"k2"]), fields(&[&"k1", &1]));
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(fields(&[]), "");
        assert_eq!(fields(&[&"lonely"]), "");
    }
}
