//! # Textual representation
//!
//! The canonical string form is `"<numerator>/<denominator>"`, unreduced,
//! with both parts always present. Strict parsing accepts exactly that
//! grammar. Lenient parsing additionally accepts a bare integer (implicit
//! denominator 1) and trims plain spaces from each `/` separated part. One
//! routine implements both grammars, so they can not drift apart.
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::fraction::Fraction;

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = ParseFractionError;

    /// Parse the strict grammar: exactly two `/` separated parts, both plain
    /// integers, nonzero denominator.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse(text, Leniency::Strict)
    }
}

impl Fraction {
    /// Parse the lenient grammar.
    ///
    /// On top of the strict grammar this accepts a bare integer, read with
    /// denominator 1, and ignores plain space characters at the ends of each
    /// `/` separated part. Only the space character is ignored, not other
    /// whitespace, and only within each part: the input is split on `/`
    /// before any trimming happens.
    pub fn from_str_lenient(text: &str) -> Result<Self, ParseFractionError> {
        parse(text, Leniency::Lenient)
    }
}

#[derive(Clone, Copy, Eq, PartialEq)]
enum Leniency {
    Strict,
    Lenient,
}

fn parse(text: &str, leniency: Leniency) -> Result<Fraction, ParseFractionError> {
    let integer = |part: &str| {
        let part = match leniency {
            Leniency::Strict => part,
            Leniency::Lenient => part.trim_matches(' '),
        };

        part.parse::<i64>()
            .map_err(|_| ParseFractionError { kind: ErrorKind::InvalidInteger })
    };

    let parts = text.split('/').collect::<Vec<_>>();
    let (numerator, denominator) = match *parts.as_slice() {
        [sole] if leniency == Leniency::Lenient => (integer(sole)?, 1),
        [numerator, denominator] => (integer(numerator)?, integer(denominator)?),
        _ => return Err(ParseFractionError { kind: ErrorKind::Malformed }),
    };

    Fraction::new(numerator, denominator)
        .ok_or(ParseFractionError { kind: ErrorKind::ZeroDenominator })
}

/// Error produced when a string does not parse as a [`Fraction`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParseFractionError {
    kind: ErrorKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ErrorKind {
    /// Not two `/` separated parts (or one, leniently).
    Malformed,
    /// A part is not an integer.
    InvalidInteger,
    /// The denominator part is zero.
    ZeroDenominator,
}

impl Display for ParseFractionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self.kind {
            ErrorKind::Malformed => {
                "expected \"<numerator>/<denominator>\" with exactly one \"/\""
            },
            ErrorKind::InvalidInteger => "the numerator or denominator is not an integer",
            ErrorKind::ZeroDenominator => "the denominator is zero",
        })
    }
}

impl Error for ParseFractionError {}
