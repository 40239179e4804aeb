//! Exponential smoothing of a noisy 2D input toward its latest target.
//!
//! Each [`PointerSmoother::step`] moves `current` a fixed fraction of the
//! remaining distance, so the trajectory converges without overshooting.

/// Smallest accepted ease factor; `0` would never move.
pub const MIN_EASE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Clamp an ease factor into `(0, 1]`.
pub fn clamp_ease(ease: f64) -> f64 {
    if ease.is_nan() {
        MIN_EASE
    } else {
        ease.clamp(MIN_EASE, 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct PointerSmoother {
    target: Point,
    current: Point,
    ease: f64,
}

impl PointerSmoother {
    pub fn new(ease: f64) -> Self {
        Self {
            target: Point::ORIGIN,
            current: Point::ORIGIN,
            ease: clamp_ease(ease),
        }
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// Store the latest raw sample as the new target. Non-finite samples are
    /// dropped.
    pub fn update(&mut self, raw: Point) {
        if raw.is_finite() {
            self.target = raw;
        }
    }

    /// Advance one frame toward the target.
    pub fn step(&mut self) -> Point {
        if self.ease >= 1.0 {
            self.current = self.target;
        } else {
            self.current.x += (self.target.x - self.current.x) * self.ease;
            self.current.y += (self.target.y - self.current.y) * self.ease;
        }
        self.current
    }

    pub fn is_settled(&self, epsilon: f64) -> bool {
        self.current.distance(&self.target) <= epsilon
    }
}

/// Pointer offset relative to the viewport centre, scaled by `sensitivity`.
pub fn pointer_target(client: Point, viewport: Point, sensitivity: f64) -> Point {
    Point::new(
        (client.x - viewport.x / 2.0) * sensitivity,
        (client.y - viewport.y / 2.0) * sensitivity,
    )
}

/// Device tilt mapped onto the viewport. `beta` is front-to-back and `gamma`
/// left-to-right tilt in degrees; readings where either is missing or exactly
/// zero are ignored.
pub fn orientation_target(
    beta: Option<f64>,
    gamma: Option<f64>,
    viewport: Point,
    sensitivity: f64,
) -> Option<Point> {
    let beta = beta.filter(|b| *b != 0.0)?;
    let gamma = gamma.filter(|g| *g != 0.0)?;
    Some(Point::new(
        (gamma / 90.0) * viewport.x * sensitivity * 0.5,
        (beta / 90.0) * viewport.y * sensitivity * 0.5,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converges_without_overshoot() {
        let mut smoother = PointerSmoother::new(0.1);
        let target = Point::new(120.0, -80.0);
        smoother.update(target);

        let initial = smoother.current.distance(&target);
        let mut previous = initial;
        let mut steps_to_one_percent = None;

        for step in 1..=200 {
            let current = smoother.step();
            let distance = current.distance(&target);

            assert!(distance < previous, "distance grew at step {}", step);
            assert!(distance <= initial);
            // Each axis stays on the starting side of the target
            assert!(current.x <= target.x);
            assert!(current.y >= target.y);

            if steps_to_one_percent.is_none() && distance <= initial * 0.01 {
                steps_to_one_percent = Some(step);
            }
            previous = distance;
            if distance == 0.0 {
                break;
            }
        }

        // 0.9^44 < 0.01
        assert_eq!(steps_to_one_percent, Some(44));
    }

    #[test]
    fn test_ease_one_snaps() {
        let mut smoother = PointerSmoother::new(1.0);
        smoother.update(Point::new(0.1, 0.3));
        assert_eq!(smoother.step(), Point::new(0.1, 0.3));
        assert!(smoother.is_settled(0.0));
    }

    #[test]
    fn test_ease_is_clamped() {
        assert_eq!(PointerSmoother::new(4.0).ease, 1.0);
        assert_eq!(PointerSmoother::new(0.0).ease, MIN_EASE);
        assert_eq!(PointerSmoother::new(-2.0).ease, MIN_EASE);
        assert_eq!(PointerSmoother::new(f64::NAN).ease, MIN_EASE);
    }

    #[test]
    fn test_retargets_to_latest_sample() {
        let mut smoother = PointerSmoother::new(0.5);
        smoother.update(Point::new(10.0, 10.0));
        smoother.step();
        smoother.update(Point::new(-10.0, 0.0));
        assert_eq!(smoother.target(), Point::new(-10.0, 0.0));
        assert_eq!(smoother.step(), Point::new(-2.5, 2.5));
    }

    #[test]
    fn test_non_finite_samples_dropped() {
        let mut smoother = PointerSmoother::new(0.5);
        smoother.update(Point::new(4.0, 4.0));
        smoother.update(Point::new(f64::NAN, 1.0));
        assert_eq!(smoother.target(), Point::new(4.0, 4.0));
    }

    #[test]
    fn test_pointer_target_is_centred() {
        let viewport = Point::new(1000.0, 800.0);
        assert_eq!(pointer_target(Point::new(500.0, 400.0), viewport, 0.05), Point::ORIGIN);
        assert_eq!(
            pointer_target(Point::new(1000.0, 0.0), viewport, 0.1),
            Point::new(50.0, -40.0)
        );
    }

    #[test]
    fn test_orientation_target() {
        let viewport = Point::new(400.0, 800.0);
        let p = orientation_target(Some(45.0), Some(-90.0), viewport, 0.1).unwrap();
        assert!((p.x - -20.0).abs() < 1e-9);
        assert!((p.y - 20.0).abs() < 1e-9);

        assert_eq!(orientation_target(None, Some(10.0), viewport, 0.1), None);
        assert_eq!(orientation_target(Some(0.0), Some(10.0), viewport, 0.1), None);
    }
}
