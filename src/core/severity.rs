//! Severity definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log line.
///
/// Severities carry no ordering; they only pick the letter that is printed
/// and whether the line is colored and annotated with its call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "I")]
    Info,
    #[serde(rename = "W")]
    Warning,
    #[serde(rename = "E")]
    Error,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Warning, Severity::Error];

    /// Single-letter code printed at the start of every line
    pub const fn letter(&self) -> &'static str {
        match self {
            Severity::Info => "I",
            Severity::Warning => "W",
            Severity::Error => "E",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Whether lines of this severity are highlighted and carry a `file(line):` tag
    pub const fn is_annotated(&self) -> bool {
        matches!(self, Severity::Warning | Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "i" | "info" => Ok(Severity::Info),
            "w" | "warn" | "warning" => Ok(Severity::Warning),
            "e" | "error" => Ok(Severity::Error),
            _ => Err(LoggerError::invalid_severity(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_are_stable() {
        assert_eq!(Severity::Info.letter(), "I");
        assert_eq!(Severity::Warning.letter(), "W");
        assert_eq!(Severity::Error.letter(), "E");
    }

    #[test]
    fn test_annotation() {
        assert!(!Severity::Info.is_annotated());
        assert!(Severity::Warning.is_annotated());
        assert!(Severity::Error.is_annotated());
    }

    #[test]
    fn test_parse() {
        assert_eq!("I".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("e".parse::<Severity>().unwrap(), Severity::Error);
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn test_serde_uses_letters() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"W\"");

        let parsed: Severity = serde_json::from_str("\"E\"").unwrap();
        assert_eq!(parsed, Severity::Error);
    }
}
