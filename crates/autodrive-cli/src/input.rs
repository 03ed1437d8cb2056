//! Parsing of the driver's free-text answers.

use std::fmt;

/// A line the user typed could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Wrong number of whitespace-separated values.
    WrongArity {
        /// What the prompt asked for, e.g. `x y`.
        expected: &'static str,
        /// How many values were given.
        got: usize,
    },
    /// A value that should be an integer is not.
    NotANumber {
        /// The offending text.
        value: String,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongArity { expected, got } => {
                write!(f, "expected '{expected}', got {got} value(s)")
            }
            Self::NotANumber { value } => write!(f, "'{value}' is not an integer"),
        }
    }
}

impl std::error::Error for InputError {}

fn int(s: &str) -> Result<i32, InputError> {
    s.parse().map_err(|_| InputError::NotANumber {
        value: s.to_string(),
    })
}

/// Parse `"W H"` into a field size. Positivity is checked by the engine.
pub fn dimensions(line: &str) -> Result<(i32, i32), InputError> {
    match line.split_whitespace().collect::<Vec<_>>().as_slice() {
        [w, h] => Ok((int(w)?, int(h)?)),
        other => Err(InputError::WrongArity {
            expected: "x y",
            got: other.len(),
        }),
    }
}

/// Parse `"X Y D"` into a starting cell and an unvalidated heading.
pub fn placement(line: &str) -> Result<(i32, i32, &str), InputError> {
    match line.split_whitespace().collect::<Vec<_>>().as_slice() {
        [x, y, d] => Ok((int(x)?, int(y)?, d)),
        other => Err(InputError::WrongArity {
            expected: "x y Direction",
            got: other.len(),
        }),
    }
}
