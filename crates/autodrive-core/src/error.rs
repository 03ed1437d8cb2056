//! Error types for reading core values from text.

use std::error::Error;
use std::fmt;

/// Errors from parsing headings and command sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The heading is not one of `N`, `E`, `S`, `W`.
    InvalidHeading {
        /// The rejected input.
        value: String,
    },
    /// A command token is not one of `L`, `R`, `F`.
    InvalidCommand {
        /// The rejected character.
        token: char,
        /// Zero-based character index within the sequence.
        index: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHeading { value } => {
                write!(f, "invalid heading '{value}', expected one of N, E, S, W")
            }
            Self::InvalidCommand { token, index } => {
                write!(
                    f,
                    "invalid command '{token}' at position {index}, expected one of L, R, F"
                )
            }
        }
    }
}

impl Error for ParseError {}
