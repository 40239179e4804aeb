//! Hidden/Visible state machine driven by viewport intersection samples.
//!
//! The controller is browser-agnostic: the observer binding feeds it
//! [`VisibilitySample`]s and forwards the returned [`PhaseSignal`]s to the
//! component, which re-renders with [`AnimationController::style`].

use log::debug;

use super::request::{AnimationRequest, ReentryTiming};
use super::variant::{resolve_variant, Props, Transition, Variant};

/// Whether an observation should keep delivering samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchControl {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    #[default]
    Hidden,
    Visible,
}

/// One intersection notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilitySample {
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub ratio: f64,
}

impl VisibilitySample {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
        }
    }

    pub fn is_visible(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

/// Emitted when the phase changes: play the visible or hidden animation now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseSignal {
    StartVisible,
    StartHidden,
}

impl PhaseSignal {
    pub fn phase(self) -> AnimationPhase {
        match self {
            PhaseSignal::StartVisible => AnimationPhase::Visible,
            PhaseSignal::StartHidden => AnimationPhase::Hidden,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnimationController {
    request: AnimationRequest,
    variant: Variant,
    phase: AnimationPhase,
    attached: bool,
    /// Number of Hidden -> Visible transitions so far
    entries: u32,
    /// Shown without animation because the element could not be observed
    is_static: bool,
}

impl AnimationController {
    pub fn new(request: AnimationRequest) -> Self {
        let variant = resolve_variant(request.kind(), &request);
        Self {
            request,
            variant,
            phase: AnimationPhase::Hidden,
            attached: false,
            entries: 0,
            is_static: false,
        }
    }

    pub fn request(&self) -> &AnimationRequest {
        &self.request
    }

    /// Start accepting samples.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stop accepting samples. Returns `false` (and does nothing) when the
    /// controller was never attached.
    pub fn detach(&mut self) -> bool {
        std::mem::replace(&mut self.attached, false)
    }

    /// Render the element in its final state with no animation, for when it
    /// cannot be observed. Later samples are ignored.
    pub fn show_static(&mut self) {
        debug!("Scroll animation unavailable, showing element as-is");
        self.attached = false;
        self.is_static = true;
        self.phase = AnimationPhase::Visible;
    }

    /// A trigger-once animation that has played can never change phase again.
    pub fn is_closed(&self) -> bool {
        self.is_static || (self.request.trigger_once() && self.phase == AnimationPhase::Visible)
    }

    /// Apply one visibility sample and report a phase change, if any.
    pub fn observe(&mut self, sample: VisibilitySample) -> Option<PhaseSignal> {
        if !self.attached {
            debug!("Ignoring visibility sample for detached animation");
            return None;
        }

        let visible = sample.is_visible(self.request.threshold());
        match (self.phase, visible) {
            (AnimationPhase::Hidden, true) => {
                self.phase = AnimationPhase::Visible;
                self.entries = self.entries.saturating_add(1);
                Some(PhaseSignal::StartVisible)
            }
            (AnimationPhase::Visible, false) if !self.request.trigger_once() => {
                self.phase = AnimationPhase::Hidden;
                Some(PhaseSignal::StartHidden)
            }
            _ => None,
        }
    }

    /// Apply only the most recent sample of a batch; earlier ones are stale.
    pub fn observe_latest<I>(&mut self, samples: I) -> Option<PhaseSignal>
    where
        I: IntoIterator<Item = VisibilitySample>,
    {
        samples.into_iter().last().and_then(|sample| self.observe(sample))
    }

    /// Handle one batch of samples from the observer: the phase change to
    /// play, if any, and whether observation should go on. Once detached or
    /// closed the answer is always `Stop`.
    pub fn apply<I>(&mut self, samples: I) -> (Option<PhaseSignal>, WatchControl)
    where
        I: IntoIterator<Item = VisibilitySample>,
    {
        let signal = self.observe_latest(samples);
        let control = if self.attached && !self.is_closed() {
            WatchControl::Continue
        } else {
            WatchControl::Stop
        };
        (signal, control)
    }

    /// Transition to use for the current phase.
    pub fn transition(&self) -> Transition {
        match self.phase {
            AnimationPhase::Visible => {
                let resumed = self.request.reentry() == ReentryTiming::Resume && self.entries > 1;
                if resumed {
                    self.variant.transition.without_delay()
                } else {
                    self.variant.transition
                }
            }
            AnimationPhase::Hidden => self.variant.transition.without_delay(),
        }
    }

    pub fn props(&self) -> &Props {
        match self.phase {
            AnimationPhase::Hidden => &self.variant.hidden,
            AnimationPhase::Visible => &self.variant.visible,
        }
    }

    /// Inline style for the element in its current phase.
    pub fn style(&self) -> String {
        let props = self.props();
        if self.is_static || props.is_identity() {
            return String::new();
        }
        format!("{}{}", props.to_css(), self.transition().to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::variant::AnimationKind;

    fn attached(request: AnimationRequest) -> AnimationController {
        let mut controller = AnimationController::new(request);
        controller.attach();
        controller
    }

    fn seen(ratio: f64) -> VisibilitySample {
        VisibilitySample::new(ratio > 0.0, ratio)
    }

    #[test]
    fn test_starts_hidden() {
        let controller = AnimationController::new(AnimationRequest::default());
        assert_eq!(controller.phase, AnimationPhase::Hidden);
        assert!(!controller.attached);
    }

    #[test]
    fn test_trigger_once_never_reverts() {
        let mut controller = attached(AnimationRequest::default().with_trigger_once(true));

        assert_eq!(controller.observe(seen(0.5)), Some(PhaseSignal::StartVisible));
        for ratio in [0.0, 0.05, 0.0, 0.7, 0.0] {
            assert_eq!(controller.observe(seen(ratio)), None);
            assert_eq!(controller.phase, AnimationPhase::Visible);
        }
        assert!(controller.is_closed());
        assert_eq!(controller.entries, 1);
    }

    #[test]
    fn test_repeatable_tracks_latest_visibility() {
        let mut controller = attached(AnimationRequest::default().with_trigger_once(false));
        let threshold = controller.request.threshold();

        let samples = [0.5, 0.5, 0.0, 0.0, 0.3, 0.02, 1.0];
        for ratio in samples {
            let before = controller.phase;
            let signal = controller.observe(seen(ratio));
            let expected = if seen(ratio).is_visible(threshold) {
                AnimationPhase::Visible
            } else {
                AnimationPhase::Hidden
            };
            assert_eq!(controller.phase, expected);
            // Re-applying the same state must not emit a signal
            assert_eq!(signal.is_some(), before != expected);
        }
        assert!(!controller.is_closed());
        assert_eq!(controller.entries, 3);
    }

    #[test]
    fn test_hidden_signal_only_when_repeatable() {
        let mut controller = attached(AnimationRequest::default().with_trigger_once(false));
        controller.observe(seen(1.0));
        assert_eq!(controller.observe(seen(0.0)), Some(PhaseSignal::StartHidden));
        assert_eq!(controller.observe(seen(0.0)), None);
    }

    #[test]
    fn test_enter_at_fifteen_percent_then_leave() {
        let mut controller = attached(
            AnimationRequest::new(AnimationKind::SlideUp)
                .with_threshold(0.1)
                .with_trigger_once(true),
        );

        let mut signals = Vec::new();
        for ratio in [0.0, 0.05, 0.15, 0.4, 1.0, 0.4, 0.0] {
            signals.extend(controller.observe(seen(ratio)));
        }
        assert_eq!(signals, vec![PhaseSignal::StartVisible]);
        assert_eq!(controller.phase, AnimationPhase::Visible);
    }

    #[test]
    fn test_intersecting_below_threshold_is_not_visible() {
        let mut controller = attached(AnimationRequest::default().with_threshold(0.5));
        assert_eq!(controller.observe(VisibilitySample::new(true, 0.3)), None);
        assert_eq!(controller.phase, AnimationPhase::Hidden);
        // Ratio alone is not enough
        assert_eq!(controller.observe(VisibilitySample::new(false, 0.9)), None);
    }

    #[test]
    fn test_detached_ignores_samples() {
        let mut controller = AnimationController::new(AnimationRequest::default());
        assert_eq!(controller.observe(seen(1.0)), None);
        assert_eq!(controller.phase, AnimationPhase::Hidden);

        // Detaching something never attached is a no-op
        assert!(!controller.detach());

        controller.attach();
        assert!(controller.detach());
        assert_eq!(controller.observe(seen(1.0)), None);
    }

    #[test]
    fn test_observe_latest_skips_stale_samples() {
        let mut controller = attached(AnimationRequest::default().with_trigger_once(false));
        let batch = [seen(1.0), seen(0.0)];
        assert_eq!(controller.observe_latest(batch), None);
        assert_eq!(controller.phase, AnimationPhase::Hidden);

        let batch = [seen(0.0), seen(1.0)];
        assert_eq!(controller.observe_latest(batch), Some(PhaseSignal::StartVisible));
        assert_eq!(controller.observe_latest(Vec::new()), None);
    }

    #[test]
    fn test_resume_drops_delay_after_first_entry() {
        let request = AnimationRequest::new(AnimationKind::FadeIn)
            .with_delay(0.5)
            .with_trigger_once(false)
            .with_reentry(ReentryTiming::Resume);
        let mut controller = attached(request);

        controller.observe(seen(1.0));
        assert!((controller.transition().delay() - 0.5).abs() < 1e-9);

        controller.observe(seen(0.0));
        assert_eq!(controller.transition().delay(), 0.0);

        controller.observe(seen(1.0));
        assert_eq!(controller.transition().delay(), 0.0);
    }

    #[test]
    fn test_restart_keeps_delay_on_reentry() {
        let request = AnimationRequest::new(AnimationKind::FadeIn)
            .with_delay(0.5)
            .with_trigger_once(false);
        let mut controller = attached(request);

        controller.observe(seen(1.0));
        controller.observe(seen(0.0));
        controller.observe(seen(1.0));
        assert_eq!(controller.entries, 2);
        assert!((controller.transition().delay() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_style_follows_phase() {
        let mut controller = attached(AnimationRequest::new(AnimationKind::SlideUp));
        let hidden = controller.style();
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translate(0px, 60px)"));

        controller.observe(seen(1.0));
        let visible = controller.style();
        assert!(visible.contains("opacity: 1;"));
        assert!(visible.contains("translate(0px, 0px)"));
        assert!(visible.contains("transition: all 0.800s"));
    }

    #[test]
    fn test_apply_stops_once_trigger_once_has_played() {
        let mut controller = attached(AnimationRequest::default().with_trigger_once(true));

        assert_eq!(controller.apply([seen(0.0)]), (None, WatchControl::Continue));
        assert_eq!(
            controller.apply([seen(1.0)]),
            (Some(PhaseSignal::StartVisible), WatchControl::Stop)
        );
        // A straggling batch after closing changes nothing
        assert_eq!(controller.apply([seen(0.0), seen(1.0)]), (None, WatchControl::Stop));
        assert_eq!(controller.entries, 1);
    }

    #[test]
    fn test_apply_keeps_repeatable_watch_running() {
        let mut controller = attached(AnimationRequest::default().with_trigger_once(false));

        assert_eq!(
            controller.apply([seen(0.0), seen(1.0)]),
            (Some(PhaseSignal::StartVisible), WatchControl::Continue)
        );
        assert_eq!(
            controller.apply([seen(1.0), seen(0.0)]),
            (Some(PhaseSignal::StartHidden), WatchControl::Continue)
        );
        assert_eq!(controller.apply(Vec::new()), (None, WatchControl::Continue));
    }

    #[test]
    fn test_apply_after_detach_signals_nothing() {
        let mut controller = attached(AnimationRequest::default().with_trigger_once(false));
        controller.apply([seen(1.0)]);
        assert!(controller.detach());

        for batch in [vec![seen(0.0)], vec![seen(1.0)], Vec::new()] {
            assert_eq!(controller.apply(batch), (None, WatchControl::Stop));
        }
        assert_eq!(controller.phase, AnimationPhase::Visible);
        assert_eq!(controller.entries, 1);
    }

    #[test]
    fn test_static_fallback_is_visible_without_style() {
        let mut controller = AnimationController::new(AnimationRequest::new(AnimationKind::SlideUp));
        assert!(controller.style().contains("opacity: 0;"));

        // Never attached: the element could not be observed
        controller.show_static();
        assert_eq!(controller.phase, AnimationPhase::Visible);
        assert_eq!(controller.style(), "");
        assert!(controller.is_closed());

        assert_eq!(controller.apply([seen(0.0)]), (None, WatchControl::Stop));
        assert_eq!(controller.phase, AnimationPhase::Visible);
        assert_eq!(controller.style(), "");
    }

    #[test]
    fn test_none_kind_has_no_style() {
        let mut controller = attached(AnimationRequest::new(AnimationKind::None));
        assert_eq!(controller.style(), "");
        controller.observe(seen(1.0));
        assert_eq!(controller.style(), "");
    }
}
