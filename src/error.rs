//! Error types for grasp generation and panel configuration.

use crate::types::BoxDimensions;
use thiserror::Error;

/// Errors produced while generating grasp candidates or handling panel state.
#[derive(Debug, Error)]
pub enum GraspError {
    /// A box dimension is zero, negative or not finite.
    #[error("invalid box dimensions ({dx}, {dy}, {dz}): all must be positive")]
    InvalidDimensions {
        /// Size along local X.
        dx: f64,
        /// Size along local Y.
        dy: f64,
        /// Size along local Z.
        dz: f64,
    },

    /// No object with this name is registered.
    #[error("object not found: {0}")]
    NotFound(String),

    /// The panel has no named frame with this name.
    #[error("unknown frame: {0}")]
    UnknownFrame(String),

    /// A property value lies outside its allowed range.
    #[error("{property} value {value} outside [{min}, {max}]")]
    OutOfRange {
        /// Property name.
        property: String,
        /// Offending value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// A named frame has an unusable position, step or name.
    #[error("invalid frame {name:?}: {reason}")]
    InvalidFrame {
        /// Frame name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl GraspError {
    /// Creates an invalid-dimensions error for a box.
    #[must_use]
    pub fn invalid_dimensions(dims: &BoxDimensions) -> Self {
        Self::InvalidDimensions {
            dx: dims.dx,
            dy: dims.dy,
            dz: dims.dz,
        }
    }

    /// Creates an invalid-frame error.
    #[must_use]
    pub fn invalid_frame(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFrame {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates an out-of-range error.
    #[must_use]
    pub fn out_of_range(property: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            property: property.into(),
            value,
            min,
            max,
        }
    }
}

pub type Result<T> = std::result::Result<T, GraspError>;
