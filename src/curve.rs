use core::slice;

use super::*;
use crate::sampler::{coordinates, parameter_samples, sample, Axis};

/// Input of one calculation: base circle radius, radial distance coefficient and number of points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CurveParameters {
    pub radius: NativeFloat,
    pub coefficient: NativeFloat,
    pub point_count: usize,
}

impl CurveParameters {
    pub fn new(radius: NativeFloat, coefficient: NativeFloat, point_count: usize) -> Self {
        CurveParameters {
            radius,
            coefficient,
            point_count,
        }
    }
}

/// The sampled involute: an ordered polyline together with the radius of its reference circle.
/// Values of this type are never mutated, a new calculation produces a new curve.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoluteCurve {
    radius: NativeFloat,
    points: Vec<Point2<NativeFloat>>,
}

impl InvoluteCurve {
    /// Sample the curve described by `params`.
    /// Computes the parameter samples, then all x and all y coordinates, and zips them into points.
    pub fn generate(params: &CurveParameters) -> Result<Self, InvoluteError> {
        let samples = parameter_samples(params.point_count, params.coefficient)?;
        let xs = coordinates(params.radius, &samples, Axis::X);
        let ys = coordinates(params.radius, &samples, Axis::Y);
        let points = xs
            .into_iter()
            .zip(ys)
            .map(|(x, y)| Point2::new(x, y))
            .collect();

        Ok(InvoluteCurve {
            radius: params.radius,
            points,
        })
    }

    /// Same points as `generate()` but written into a fixed-capacity `ArrayVec`.
    pub fn points_fixed<A>(params: &CurveParameters) -> Result<ArrayVec<A>, InvoluteError>
    where
        A: tinyvec::Array<Item = Point2<NativeFloat>>,
    {
        let mut points: ArrayVec<A> = ArrayVec::new();
        if params.point_count > points.capacity() {
            return Err(InvoluteError::CapacityExceeded {
                requested: params.point_count,
                capacity: points.capacity(),
            });
        }
        let involute = Involute::new(params.radius);
        for n in 1..=params.point_count {
            points.push(involute.eval(sample(n, params.coefficient)?));
        }
        Ok(points)
    }

    pub fn radius(&self) -> NativeFloat {
        self.radius
    }

    pub fn points(&self) -> &[Point2<NativeFloat>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Point2<NativeFloat>> {
        self.points.iter()
    }

    /// All x coordinates in drawing order.
    pub fn xs(&self) -> Vec<NativeFloat> {
        self.points.iter().map(|p| p.x()).collect()
    }

    /// All y coordinates in drawing order.
    pub fn ys(&self) -> Vec<NativeFloat> {
        self.points.iter().map(|p| p.y()).collect()
    }

    /// Return the bounding box of the points as ((xmin, ymin), (xmax, ymax)). Returns None for empty curves.
    pub fn bounding_box(&self) -> Option<((NativeFloat, NativeFloat), (NativeFloat, NativeFloat))> {
        let mut iter = self.points.iter();
        let first = iter.next()?;
        let mut min = (first.x(), first.y());
        let mut max = min;
        for p in iter {
            min.0 = min.0.min(p.x());
            min.1 = min.1.min(p.y());
            max.0 = max.0.max(p.x());
            max.1 = max.1.max(p.y());
        }
        Some((min, max))
    }

    /// Length of the polyline through all points (0 for fewer than two points).
    pub fn polyline_length(&self) -> NativeFloat {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }
}

impl<'a> IntoIterator for &'a InvoluteCurve {
    type Item = &'a Point2<NativeFloat>;
    type IntoIter = slice::Iter<'a, Point2<NativeFloat>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Free function form of `InvoluteCurve::generate()`.
pub fn generate_involute_curve(params: &CurveParameters) -> Result<InvoluteCurve, InvoluteError> {
    InvoluteCurve::generate(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_points_gives_empty_curve() {
        for (radius, coefficient) in [(1.0, 1.0), (-4.0, 0.0), (0.0, -2.0), (12.5, 3.3)] {
            let curve = generate_involute_curve(&CurveParameters::new(radius, coefficient, 0)).unwrap();
            assert!(curve.is_empty());
            assert_eq!(curve.len(), 0);
            assert!(curve.bounding_box().is_none());
            assert_eq!(curve.polyline_length(), 0.0);
        }
    }

    #[test]
    fn unit_scenario() {
        let curve = generate_involute_curve(&CurveParameters::new(1.0, 1.0, 1)).unwrap();
        assert_eq!(curve.len(), 1);
        let p = curve.points()[0];
        assert!((p.x() - -2.3110).abs() < 1e-4);
        assert!((p.y() - 2.8680).abs() < 1e-4);
        assert_eq!(curve.radius(), 1.0);
    }

    #[test]
    fn generation_is_deterministic() {
        let params = CurveParameters::new(2.0, 0.37, 500);
        let first = generate_involute_curve(&params).unwrap();
        let second = generate_involute_curve(&params).unwrap();
        assert_eq!(first, second);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.x().to_bits(), b.x().to_bits());
            assert_eq!(a.y().to_bits(), b.y().to_bits());
        }
    }

    #[test]
    fn points_zip_the_axis_coordinates() {
        let params = CurveParameters::new(1.5, 0.5, 25);
        let curve = generate_involute_curve(&params).unwrap();
        let samples = parameter_samples(25, 0.5).unwrap();
        assert_eq!(curve.xs(), coordinates(1.5, &samples, Axis::X));
        assert_eq!(curve.ys(), coordinates(1.5, &samples, Axis::Y));
    }

    #[test]
    fn points_leave_the_base_circle() {
        // every sampled point lies at distance r sqrt(1 + t^2) from the origin
        let params = CurveParameters::new(3.0, 0.2, 40);
        let curve = generate_involute_curve(&params).unwrap();
        let samples = parameter_samples(40, 0.2).unwrap();
        for (p, t) in curve.iter().zip(samples) {
            assert!((p.abs() - 3.0 * (1.0 + t * t).sqrt()).abs() < 1e-9);
        }
    }

    #[test]
    fn negative_coefficient_fails() {
        let err = generate_involute_curve(&CurveParameters::new(1.0, -1.0, 3)).unwrap_err();
        assert!(matches!(err, InvoluteError::Domain { .. }));
    }

    #[test]
    fn negative_radius_mirrors_through_origin() {
        let pos = generate_involute_curve(&CurveParameters::new(2.0, 1.0, 10)).unwrap();
        let neg = generate_involute_curve(&CurveParameters::new(-2.0, 1.0, 10)).unwrap();
        for (a, b) in pos.iter().zip(neg.iter()) {
            assert!((a.x() + b.x()).abs() < EPSILON);
            assert!((a.y() + b.y()).abs() < EPSILON);
        }
    }

    #[test]
    fn bounding_box_contains_all_points() {
        let curve = generate_involute_curve(&CurveParameters::new(1.0, 0.3, 60)).unwrap();
        let ((xmin, ymin), (xmax, ymax)) = curve.bounding_box().unwrap();
        for p in &curve {
            assert!(p.x() >= xmin && p.x() <= xmax);
            assert!(p.y() >= ymin && p.y() <= ymax);
        }
    }

    #[test]
    fn polyline_is_shorter_than_the_arc() {
        let params = CurveParameters::new(1.0, 0.05, 100);
        let curve = generate_involute_curve(&params).unwrap();
        let samples = parameter_samples(100, 0.05).unwrap();
        let arc = Involute::new(1.0).arclen(samples[0], samples[99]);
        let chord = curve.polyline_length();
        assert!(chord > 0.0);
        assert!(chord <= arc + EPSILON);
    }

    #[test]
    fn fixed_points_match_heap_points() {
        let params = CurveParameters::new(1.25, 0.8, 12);
        let curve = generate_involute_curve(&params).unwrap();
        let fixed = InvoluteCurve::points_fixed::<[Point2<NativeFloat>; 16]>(&params).unwrap();
        assert_eq!(fixed.len(), 12);
        assert_eq!(curve.points(), fixed.as_slice());
    }

    #[test]
    fn fixed_points_reject_overflow() {
        let params = CurveParameters::new(1.0, 1.0, 9);
        let err = InvoluteCurve::points_fixed::<[Point2<NativeFloat>; 8]>(&params).unwrap_err();
        assert_eq!(err, InvoluteError::CapacityExceeded { requested: 9, capacity: 8 });
    }
}
