//! Parse the `Display` form `Point [ X=<x>, Y=<y> ]` back into a `Point`.
//!
//! Whitespace around the brackets, commas and `=` is optional.

use std::error::Error;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::Point;

/// Errors from parsing a `Point` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePointError {
    /// Not of the shape `Point [ … ]`, or trailing fields after `Y`.
    Malformed,
    /// The named field (`X` or `Y`) is absent or not followed by `=`.
    MissingField(&'static str),
    /// The named field has a value that is not an `i32`.
    BadNumber {
        field: &'static str,
        source: ParseIntError,
    },
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePointError::Malformed => write!(f, "expected `Point [ X=<x>, Y=<y> ]`"),
            ParsePointError::MissingField(name) => write!(f, "missing field `{name}=`"),
            ParsePointError::BadNumber { field, source } => {
                write!(f, "field `{field}` is not a 32-bit integer: {source}")
            }
        }
    }
}

impl Error for ParsePointError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParsePointError::BadNumber { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix("Point")
            .map(str::trim)
            .and_then(|r| r.strip_prefix('['))
            .and_then(|r| r.strip_suffix(']'))
            .ok_or(ParsePointError::Malformed)?;
        let mut parts = body.split(',');
        let x = field(parts.next(), "X")?;
        let y = field(parts.next(), "Y")?;
        if parts.next().is_some() {
            return Err(ParsePointError::Malformed);
        }
        Ok(Point::new(x, y))
    }
}

fn field(part: Option<&str>, name: &'static str) -> Result<i32, ParsePointError> {
    let value = part
        .map(str::trim)
        .and_then(|p| p.strip_prefix(name))
        .and_then(|r| r.trim_start().strip_prefix('='))
        .ok_or(ParsePointError::MissingField(name))?;
    value
        .trim()
        .parse()
        .map_err(|source| ParsePointError::BadNumber {
            field: name,
            source,
        })
}
