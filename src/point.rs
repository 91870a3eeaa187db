use core::ops::{Add, Sub};

/// Trait defined over generic 2D points which themselves are generic over a scalar.
/// Plotting backends and geometry libraries bring their own point types, so the
/// curve code only relies on this small surface to read them back out.
pub trait Point: Add + Sub + Copy + PartialEq + Default
{
    type Scalar;

    /// Number of axes of the point.
    const DIM: usize;

    // Returns the component of the Point on its axis corresponding to index e.g. [0, 1] -> [x, y]
    fn axis(&self, index: usize) -> Self::Scalar;

    // Returns the distance between the two Points self and other
    fn distance(&self, other: Self) -> Self::Scalar;

    // Returns the L2 Norm of the Point interpreted as a Vector
    fn abs(&self) -> Self::Scalar;
}
