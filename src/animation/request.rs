use crate::config;

use super::variant::{AnimationKind, SpringConfig};

/// How a repeatable animation times its visible transition when the element
/// scrolls back into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReentryTiming {
    /// Replay the full transition, delay included, on every entry.
    #[default]
    Restart,
    /// Apply the delay on the first entry only; later entries continue from
    /// wherever the element currently is.
    Resume,
}

/// Per-element animation configuration. Values are sanitized on the way in
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRequest {
    kind: AnimationKind,
    duration_secs: f64,
    delay_secs: f64,
    threshold: f64,
    trigger_once: bool,
    spring: Option<SpringConfig>,
    reentry: ReentryTiming,
}

impl Default for AnimationRequest {
    fn default() -> Self {
        Self {
            kind: AnimationKind::FadeIn,
            duration_secs: config::DEFAULT_ANIMATION_DURATION_SECS,
            delay_secs: config::DEFAULT_ANIMATION_DELAY_SECS,
            threshold: config::DEFAULT_VISIBILITY_THRESHOLD,
            trigger_once: true,
            spring: None,
            reentry: ReentryTiming::Restart,
        }
    }
}

impl AnimationRequest {
    pub fn new(kind: AnimationKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_duration(mut self, secs: f64) -> Self {
        self.duration_secs = non_negative(secs, config::DEFAULT_ANIMATION_DURATION_SECS);
        self
    }

    pub fn with_delay(mut self, secs: f64) -> Self {
        self.delay_secs = non_negative(secs, config::DEFAULT_ANIMATION_DELAY_SECS);
        self
    }

    /// Fraction of the element that must be in view, clamped to `[0, 1]`.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = clamp_threshold(threshold);
        self
    }

    pub fn with_trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }

    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = Some(SpringConfig::new(spring.damping, spring.stiffness, spring.mass));
        self
    }

    pub fn with_reentry(mut self, reentry: ReentryTiming) -> Self {
        self.reentry = reentry;
        self
    }

    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn delay_secs(&self) -> f64 {
        self.delay_secs
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn trigger_once(&self) -> bool {
        self.trigger_once
    }

    pub fn spring(&self) -> Option<SpringConfig> {
        self.spring
    }

    pub fn reentry(&self) -> ReentryTiming {
        self.reentry
    }
}

pub fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        config::DEFAULT_VISIBILITY_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

fn non_negative(value: f64, fallback: f64) -> f64 {
    if !value.is_finite() {
        fallback
    } else {
        value.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = AnimationRequest::default();
        assert_eq!(request.kind(), AnimationKind::FadeIn);
        assert!((request.duration_secs() - 0.8).abs() < 1e-9);
        assert_eq!(request.delay_secs(), 0.0);
        assert!((request.threshold() - 0.1).abs() < 1e-9);
        assert!(request.trigger_once());
        assert_eq!(request.spring(), None);
        assert_eq!(request.reentry(), ReentryTiming::Restart);
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(AnimationRequest::default().with_threshold(1.7).threshold(), 1.0);
        assert_eq!(AnimationRequest::default().with_threshold(-0.3).threshold(), 0.0);
        assert!(
            (AnimationRequest::default().with_threshold(f64::NAN).threshold() - 0.1).abs() < 1e-9
        );
    }

    #[test]
    fn test_negative_timing_is_clamped() {
        let request = AnimationRequest::default()
            .with_duration(-1.0)
            .with_delay(-0.5);
        assert_eq!(request.duration_secs(), 0.0);
        assert_eq!(request.delay_secs(), 0.0);

        let request = AnimationRequest::default().with_duration(f64::INFINITY);
        assert!((request.duration_secs() - 0.8).abs() < 1e-9);
    }
}
