//! Field configuration, validation, and error types.
//!
//! [`FieldConfig`] is the builder-input for constructing a [`Field`](crate::Field).
//! [`validate()`](FieldConfig::validate) checks structural invariants
//! before any grid or registry is allocated.

use std::error::Error;
use std::fmt;

use autodrive_space::{Grid, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`FieldConfig::validate()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid could not be built (non-positive width or height).
    Space(SpaceError),
    /// `width * height` does not fit in `usize` on this target.
    CellCountOverflow {
        /// The configured width.
        width: i32,
        /// The configured height.
        height: i32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::CellCountOverflow { width, height } => {
                write!(f, "cell count {width} x {height} exceeds usize::MAX")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::CellCountOverflow { .. } => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── FieldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    /// Number of columns. Must be positive.
    pub width: i32,
    /// Number of rows. Must be positive.
    pub height: i32,
}

impl FieldConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_grid().map(|_| ())
    }

    /// Validate and build the grid this configuration describes.
    pub(crate) fn build_grid(&self) -> Result<Grid, ConfigError> {
        // 1. Both dimensions positive.
        let grid = Grid::new(self.width, self.height)?;
        // 2. Cell count addressable (only reachable on 32-bit targets).
        if (grid.width() as usize)
            .checked_mul(grid.height() as usize)
            .is_none()
        {
            return Err(ConfigError::CellCountOverflow {
                width: self.width,
                height: self.height,
            });
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> FieldConfig {
        FieldConfig {
            width: 10,
            height: 10,
        }
    }

    #[test]
    fn validate_valid_config_succeeds() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_zero_width_fails() {
        let cfg = FieldConfig {
            width: 0,
            ..valid_config()
        };
        match cfg.validate() {
            Err(ConfigError::Space(SpaceError::InvalidDimensions { width: 0, .. })) => {}
            other => panic!("expected Space(InvalidDimensions), got {other:?}"),
        }
    }

    #[test]
    fn validate_negative_height_fails() {
        let cfg = FieldConfig {
            height: -4,
            ..valid_config()
        };
        match cfg.validate() {
            Err(ConfigError::Space(SpaceError::InvalidDimensions { height: -4, .. })) => {}
            other => panic!("expected Space(InvalidDimensions), got {other:?}"),
        }
    }

    #[test]
    fn config_error_display_and_source() {
        let err = ConfigError::from(SpaceError::InvalidDimensions {
            width: 0,
            height: 3,
        });
        let msg = format!("{err}");
        assert!(msg.contains("positive"));
        assert!(err.source().is_some());
    }
}
