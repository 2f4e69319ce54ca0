//! Literal values for script fields, conditions, and effects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A literal value carried by entity fields and script expressions.
///
/// The script grammar only produces booleans, integers, and text, so the
/// value space stays deliberately small.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean value (`true` / `false`, case-insensitive in scripts).
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// Text value (quoted or bare in scripts).
    Text(String),
}

impl Value {
    /// Parses a script literal token.
    ///
    /// - `true` / `false` (any case) become [`Value::Bool`]
    /// - integers become [`Value::Int`]
    /// - `"quoted text"` loses its quotes
    /// - anything else is kept as bare text
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token.eq_ignore_ascii_case("true") {
            return Self::Bool(true);
        }
        if token.eq_ignore_ascii_case("false") {
            return Self::Bool(false);
        }
        if let Ok(n) = token.parse::<i64>() {
            return Self::Int(n);
        }
        if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
            return Self::Text(token[1..token.len() - 1].to_string());
        }
        Self::Text(token.to_string())
    }

    /// Returns the boolean payload, if any.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the text payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Renders the value as a script literal token.
    ///
    /// Text is quoted so that [`Value::parse`] round-trips it.
    #[must_use]
    pub fn script_literal(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Text(s) => format!("\"{s}\""),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
