//! Sort keys derived from cell text.

use std::cmp::Ordering;

use crate::config::SortConfig;
use crate::order::Direction;

/// Comparable value derived from a cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Cell text starting with an integer, or the placeholder (as zero).
    Number(i64),
    /// Any other cell, lower-cased.
    Text(String),
}

impl SortKey {
    /// Derives the key for a cell.
    ///
    /// Text that starts with an integer (after leading whitespace, with an
    /// optional sign) is numeric; anything after the digits is ignored, so
    /// `"12 km"` is `12`. The configured placeholder maps to `0`. Everything
    /// else is compared as lower-cased text.
    pub fn parse(text: &str, config: &SortConfig) -> Self {
        if let Some(value) = leading_integer(text) {
            return Self::Number(value);
        }
        let lowered = text.to_lowercase();
        if lowered == config.placeholder.to_lowercase() {
            Self::Number(0)
        } else {
            Self::Text(lowered)
        }
    }

    /// Returns true for [`SortKey::Number`].
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Whether `self` (the upper row) and `next` must be swapped.
    ///
    /// A numeric key followed by a text key always swaps, whatever the
    /// direction, and a text key followed by a numeric key never does.
    pub fn needs_swap(&self, next: &SortKey, direction: Direction) -> bool {
        let ordering = match (self, next) {
            (Self::Number(_), Self::Text(_)) => return true,
            (Self::Text(_), Self::Number(_)) => return false,
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
        };
        match direction {
            Direction::Asc => ordering == Ordering::Greater,
            Direction::Desc => ordering == Ordering::Less,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Parses the integer at the start of `text`, saturating at the `i64` bounds.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let digits = &rest[..len];
    let value = if negative {
        format!("-{}", digits).parse::<i64>().unwrap_or(i64::MIN)
    } else {
        digits.parse::<i64>().unwrap_or(i64::MAX)
    };
    Some(value)
}
