//! Parameter sampling and coordinate mapping for the involute.
//!
//! Available functions:
//! - `parameter_samples()` and its fixed-capacity twin `parameter_samples_fixed()`
//! - `coordinates()`
use core::f64::consts::PI;

use super::*;

/// Coordinate axis selector for `coordinates()`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Parameter value of the 1-based sample index `n`: t_n = sqrt(4 pi n a).
/// Fails when the radicand is negative or NaN.
pub(crate) fn sample(n: usize, coefficient: NativeFloat) -> Result<NativeFloat, InvoluteError> {
    let radicand = 4.0 * PI * n as NativeFloat * coefficient;
    // NaN fails this comparison as well
    if !(radicand >= 0.0) {
        return Err(InvoluteError::Domain { coefficient, radicand });
    }
    Ok(radicand.sqrt())
}

/// Returns the parameter samples t_1..t_n with t_n = sqrt(4 pi n a) for n = 1..=point_count.
/// The samples are in ascending index order, which is the order the polyline is drawn in.
/// `point_count == 0` always yields an empty vector, even for a negative coefficient.
pub fn parameter_samples(
    point_count: usize,
    coefficient: NativeFloat,
) -> Result<Vec<NativeFloat>, InvoluteError> {
    (1..=point_count).map(|n| sample(n, coefficient)).collect()
}

/// Same as `parameter_samples()` but writes into a fixed-capacity `ArrayVec` without allocating.
pub fn parameter_samples_fixed<A>(
    point_count: usize,
    coefficient: NativeFloat,
) -> Result<ArrayVec<A>, InvoluteError>
where
    A: tinyvec::Array<Item = NativeFloat>,
{
    let mut samples: ArrayVec<A> = ArrayVec::new();
    if point_count > samples.capacity() {
        return Err(InvoluteError::CapacityExceeded {
            requested: point_count,
            capacity: samples.capacity(),
        });
    }
    for n in 1..=point_count {
        samples.push(sample(n, coefficient)?);
    }
    Ok(samples)
}

/// Map every sample t to one coordinate of the involute with base radius `radius`.
/// - `Axis::X`: r cos(t) + t r sin(t)
/// - `Axis::Y`: r sin(t) - t r cos(t)
///
/// Order and length of `samples` are preserved. Non-finite samples give non-finite
/// coordinates, nothing is clamped.
pub fn coordinates(radius: NativeFloat, samples: &[NativeFloat], axis: Axis) -> Vec<NativeFloat> {
    let involute = Involute::new(radius);
    match axis {
        Axis::X => samples.iter().map(|&t| involute.x(t)).collect(),
        Axis::Y => samples.iter().map(|&t| involute.y(t)).collect(),
    }
}
