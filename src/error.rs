//! Error types for sampling, parsing and rendering.
//!
//! - `InvoluteError` is raised by the sampler.
//! - `ParseError` is raised when form text is not a complete number.
//! - `RenderError` is raised by renderers.
use crate::form::FieldKind;
use crate::NativeFloat;

/// Failures of the numeric core.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum InvoluteError {
    /// The value under the square root of a parameter sample is negative (or NaN).
    #[error("coefficient {coefficient} puts {radicand} under the square root")]
    Domain {
        coefficient: NativeFloat,
        radicand: NativeFloat,
    },

    /// A fixed-capacity buffer cannot hold the requested number of points.
    #[error("{requested} points requested but the buffer holds {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },
}

/// Field text that passed the keystroke gate but is not a complete number.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{field} is empty")]
    Empty { field: FieldKind },

    #[error("{field} is not a number: {text:?}")]
    Invalid { field: FieldKind, text: String },
}

impl ParseError {
    /// The field that failed to parse.
    pub fn field(&self) -> FieldKind {
        match self {
            ParseError::Empty { field } | ParseError::Invalid { field, .. } => *field,
        }
    }
}

/// Failures while drawing a curve.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// The radius or one of the points is NaN or infinite.
    #[error("cannot draw non-finite geometry")]
    NonFinite,

    /// Error reported by the plotting backend.
    #[error("plotting backend error: {0}")]
    Backend(String),
}

impl RenderError {
    pub fn backend(err: impl core::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}

/// Anything a calculate action can fail with before the no-op.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CalculateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Involute(#[from] InvoluteError),

    /// Sampling succeeded but some coordinates overflowed the float range.
    #[error("calculation produced non-finite geometry")]
    NonFinite,
}
