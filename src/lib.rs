//! Sampling, validation and plotting of circular involutes.
//!
//! A curve is described by three numbers: the radius `r` of the base circle,
//! the radial distance coefficient `a` and a point count `n`. Sample `k`
//! (1-based) sits at the unwinding angle `t_k = sqrt(4 pi k a)` and is mapped
//! to `(r cos t + t r sin t, r sin t - t r cos t)`.
//!
//! ```rust
//! use involute::{generate_involute_curve, CurveParameters};
//!
//! let curve = generate_involute_curve(&CurveParameters::new(1.0, 1.0, 3)).unwrap();
//! assert_eq!(curve.len(), 3);
//! ```
//!
//! Modules:
//! - `sampler`: parameter samples and coordinate mapping
//! - `curve`: `CurveParameters` and the sampled `InvoluteCurve`
//! - `validate`: keystroke gates for float and integer text fields
//! - `form`: headless three-field form with the calculate action
//! - `render`: `Renderer` trait and the plotters based `SvgRenderer`
use core::ops::{Add, Sub, Mul};

extern crate num_traits;
pub use tinyvec::ArrayVec;

pub mod point;
pub mod point2;
pub mod error;
pub mod involute;
pub mod sampler;
pub mod curve;
pub mod validate;
pub mod form;
pub mod render;

pub use point::Point;
pub use point2::Point2;
pub use error::{CalculateError, InvoluteError, ParseError, RenderError};
pub use involute::Involute;
pub use sampler::{coordinates, parameter_samples, parameter_samples_fixed, Axis};
pub use curve::{generate_involute_curve, CurveParameters, InvoluteCurve};
pub use validate::{is_valid_float_text, is_valid_int_text};
pub use form::{Calculation, FieldKind, Form};
pub use render::{PlotStyle, Renderer, SvgRenderer};

/// Scalar type used for all curve computations
pub type NativeFloat = f64;

/// Tolerance for comparisons of computed geometry
pub const EPSILON: NativeFloat = 1e-12;
