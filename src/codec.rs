//! Raw Google query-parameter values to and from structured selections.
//!
//! Google accepts several spellings for `lr`/`cr` style parameters:
//!
//! - `""` (unset)
//! - `code` (single value)
//! - `code|code|...` (any of)
//! - `-code` (exclude one)
//! - `-(code|code|...)` (exclude several)
//!
//! [`parse`] never fails: malformed input yields best-effort values, possibly
//! containing empty tokens from consecutive `|` separators.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use tracing::instrument;

/// Structured form of a raw parameter value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedParam {
    /// Pipe-delimited tokens in their original order, duplicates kept.
    pub values: Vec<String>,
    /// Raw value started with `-`.
    pub is_exclude: bool,
}

impl ParsedParam {
    /// Create from owned values.
    pub fn new<I, S>(values: I, is_exclude: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            is_exclude,
        }
    }

    /// Whether a plain single-value dropdown cannot represent this value.
    pub fn is_advanced(&self) -> bool {
        self.is_exclude || self.values.len() > 1
    }

    /// Whether no values are selected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for ParsedParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

impl From<&str> for ParsedParam {
    fn from(raw: &str) -> Self {
        parse(raw)
    }
}

/// Parse a raw parameter value.
///
/// A leading `-` marks an exclusion and is stripped. One layer of parentheses
/// is then removed if the opening `(` is closed by the final character. The
/// remainder is split on `|`.
///
/// `parse("-")` yields `is_exclude: true` with no values.
#[cfg_attr(debug_assertions, instrument(level = "trace"))]
pub fn parse(raw: &str) -> ParsedParam {
    if raw.is_empty() {
        return ParsedParam::default();
    }

    let (is_exclude, body) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    let body = strip_group(body);

    let values = if body.is_empty() {
        Vec::new()
    } else {
        body.split('|').map(str::to_owned).collect()
    };

    ParsedParam { values, is_exclude }
}

/// Encode a structured value back to its raw form.
///
/// An exclusion with no values is not representable and encodes to `""`.
pub fn encode(parsed: &ParsedParam) -> String {
    match (parsed.is_exclude, parsed.values.as_slice()) {
        (_, []) => String::new(),
        (false, values) => values.join("|"),
        (true, [single]) => format!("-{single}"),
        (true, values) => format!("-({})", values.join("|")),
    }
}

/// Remove one pair of parentheses when they enclose the whole string.
///
/// `(a|b)` becomes `a|b`; `(a)|(b)` and `((a)` are left alone.
fn strip_group(body: &str) -> &str {
    let Some(inner) = body.strip_prefix('(').and_then(|b| b.strip_suffix(')')) else {
        return body;
    };

    let mut depth = 0usize;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                // The leading '(' closes before the end
                None => return body,
            },
            _ => {}
        }
    }

    if depth == 0 { inner } else { body }
}
