use super::*;

/// Involute of a circle with base radius `radius` centred on the origin.
/// The parameter `t` is the unwinding angle in radians: at `t = 0` the string
/// still lies on the circle at `(radius, 0)`, and with growing `t` the curve
/// spirals outwards counter-clockwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Involute {
    radius: NativeFloat,
}

impl Involute {
    pub fn new(radius: NativeFloat) -> Self {
        Involute { radius }
    }

    pub fn radius(&self) -> NativeFloat {
        self.radius
    }

    /// Sample the x coordinate of the curve at t.
    pub fn x(&self, t: NativeFloat) -> NativeFloat {
        self.radius * t.cos() + t * self.radius * t.sin()
    }

    /// Sample the y coordinate of the curve at t.
    pub fn y(&self, t: NativeFloat) -> NativeFloat {
        self.radius * t.sin() - t * self.radius * t.cos()
    }

    /// Evaluate the point on the curve at t.
    pub fn eval(&self, t: NativeFloat) -> Point2<NativeFloat> {
        Point2::new(self.x(t), self.y(t))
    }

    /// Returns the tangent vector dP/dt = (r t cos t, r t sin t) at t.
    /// Its length r|t| is the arc length element, so the exact length of the
    /// involute from 0 to t is r t^2 / 2.
    pub fn derivative(&self, t: NativeFloat) -> Point2<NativeFloat> {
        Point2::new(self.radius * t * t.cos(), self.radius * t * t.sin())
    }

    /// Exact arc length of the curve between the parameters `t0` and `t1` (t0 <= t1, both >= 0).
    pub fn arclen(&self, t0: NativeFloat, t1: NativeFloat) -> NativeFloat {
        self.radius.abs() * (t1 * t1 - t0 * t0) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_base_circle() {
        let inv = Involute::new(2.5);
        let p = inv.eval(0.0);
        assert!((p.x() - 2.5).abs() < EPSILON);
        assert!(p.y().abs() < EPSILON);
    }

    #[test]
    fn distance_from_origin() {
        // |P(t)|^2 = r^2 (1 + t^2)
        let inv = Involute::new(1.5);
        let nsteps: usize = 1000;
        for i in 0..=nsteps {
            let t = i as NativeFloat * 10.0 / nsteps as NativeFloat;
            let p = inv.eval(t);
            let expected = 1.5 * (1.0 + t * t).sqrt();
            assert!((p.abs() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let inv = Involute::new(0.8);
        let h = 1e-6;
        for i in 1..50 {
            let t = i as NativeFloat * 0.2;
            let numeric = (inv.eval(t + h) - inv.eval(t - h)) * (1.0 / (2.0 * h));
            let err = numeric - inv.derivative(t);
            assert!(err.abs() < 1e-5);
        }
    }

    #[test]
    fn arclen_matches_flattened_curve() {
        let inv = Involute::new(1.0);
        let nsteps: usize = 10_000;
        let t_end = 6.0;
        let mut flattened = 0.0;
        for i in 0..nsteps {
            let t0 = i as NativeFloat * t_end / nsteps as NativeFloat;
            let t1 = (i + 1) as NativeFloat * t_end / nsteps as NativeFloat;
            flattened += inv.eval(t0).distance(inv.eval(t1));
        }
        assert!((flattened - inv.arclen(0.0, t_end)).abs() < 1e-3);
    }
}
