//! Easing curves and the time-based tween used for smooth anchor scrolling.

/// Progress curves mapping `[0, 1]` onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    EaseInOut,
    EaseIn,
    EaseOut,
    #[default]
    Cubic,
}

impl Easing {
    /// Pick a curve from a CSS-ish name. Anything mentioning `cubic-bezier`
    /// gets the cubic curve; unknown names fall back to ease-in-out.
    pub fn from_css(name: &str) -> Self {
        let name = name.trim();
        if name.contains("cubic-bezier") {
            Easing::Cubic
        } else {
            match name {
                "ease-in" => Easing::EaseIn,
                "ease-out" => Easing::EaseOut,
                _ => Easing::EaseInOut,
            }
        }
    }

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::Cubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSample {
    pub position: f64,
    pub done: bool,
}

/// Scroll position tween anchored to the first frame timestamp it sees.
#[derive(Debug, Clone)]
pub struct ScrollTween {
    start: f64,
    distance: f64,
    duration_ms: f64,
    easing: Easing,
    started_at: Option<f64>,
}

impl ScrollTween {
    pub fn new(start: f64, target: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            start,
            distance: target - start,
            duration_ms: duration_ms.max(0.0),
            easing,
            started_at: None,
        }
    }

    pub fn target(&self) -> f64 {
        self.start + self.distance
    }

    /// Position at frame time `now_ms`.
    pub fn sample(&mut self, now_ms: f64) -> TweenSample {
        let started_at = *self.started_at.get_or_insert(now_ms);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - started_at) / self.duration_ms).min(1.0)
        };

        if progress >= 1.0 {
            return TweenSample {
                position: self.target(),
                done: true,
            };
        }

        TweenSample {
            position: self.start + self.distance * self.easing.apply(progress),
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [Easing::EaseInOut, Easing::EaseIn, Easing::EaseOut, Easing::Cubic];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-9, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at t=1", easing);
            assert!((easing.apply(2.0) - 1.0).abs() < 1e-9, "{:?} past end", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_from_css() {
        assert_eq!(
            Easing::from_css("cubic-bezier(0.25, 0.46, 0.45, 0.94)"),
            Easing::Cubic
        );
        assert_eq!(Easing::from_css("ease-in"), Easing::EaseIn);
        assert_eq!(Easing::from_css("linear"), Easing::EaseInOut);
    }

    #[test]
    fn test_tween_runs_to_target() {
        let mut tween = ScrollTween::new(100.0, 500.0, 1000.0, Easing::Cubic);

        let first = tween.sample(2000.0);
        assert_eq!(first, TweenSample { position: 100.0, done: false });

        let halfway = tween.sample(2500.0);
        assert!((halfway.position - 300.0).abs() < 1e-9);
        assert!(!halfway.done);

        let end = tween.sample(3200.0);
        assert_eq!(end, TweenSample { position: 500.0, done: true });
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut tween = ScrollTween::new(0.0, -40.0, 0.0, Easing::EaseOut);
        assert_eq!(tween.sample(16.0), TweenSample { position: -40.0, done: true });
    }
}
