use super::*;
use num_traits::Float;
use super::point::Point;

/// Two dimensional point on the involute (or on its reference circle).
#[derive(Debug, Copy, Clone, Default)]
pub struct Point2<T>
{
    pub(crate) x: T,
    pub(crate) y: T,
}

impl<T> Point2<T>
where T: Float
    {
    /// Creates a new Point2<T> from its two coordinates
    pub fn new(x: T, y: T) -> Self {
        Point2 {
            x,
            y,
        }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    /// True if both coordinates are neither NaN nor infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// The point as a plain `(x, y)` tuple, which is what plotting backends consume
    pub fn to_tuple(&self) -> (T, T) {
        (self.x, self.y)
    }
}


impl<T> PartialEq for Point2<T>
where T: PartialOrd {
    fn eq(&self, other: &Self) -> bool {
        (self.x == other.x) && (self.y == other.y)
    }
}


impl<T> Add for Point2<T>
where
    T: Add<Output=T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y
        }
    }
}



impl<T> Sub for Point2<T>
where
    T: Sub<Output=T>
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T,U> Mul<U> for Point2<T>
where
    // T * U => T, the point is always the left operand
    T: Mul<U,Output=T> + Copy,
    U: Clone,
{
    type Output = Point2<T>;

    fn mul(self, rhs: U) -> Point2<T> {
        Point2{x: self.x * rhs.clone(), y: self.y * rhs}
    }
}



impl<T> Point for Point2<T>
where T: Float + Default
{
    type Scalar = T;
    const DIM: usize = 2;

    fn axis(&self, index: usize) -> Self::Scalar {
        match index {
            0 => self.x,
            1 => self.y,
            _ => T::nan(),
        }
    }

    /// Returns the distance between self and other
    fn distance(&self, other: Self) -> Self::Scalar {
        ( ((self.x - other.x) * (self.x - other.x))
            + ((self.y - other.y) * (self.y - other.y)) ) .sqrt()
    }

    /// Interprets the Point2 as a vector and returns its norm (distance from origin)
    fn abs(&self) -> Self::Scalar {
        ((self.x * self.x) + (self.y * self.y) ).sqrt()
    }

}
