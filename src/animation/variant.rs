//! Animation kinds and the before/after property sets they resolve to.
//!
//! A [`Variant`] is purely declarative: the hidden props, the visible props and
//! the transition used to move between them. Rendering to inline CSS lives here
//! too so the browser's transition engine can play it back.

use std::fmt::Write;

use super::request::AnimationRequest;

/// Closed set of scroll animation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationKind {
    #[default]
    FadeIn,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    Zoom,
    ZoomOut,
    FlipX,
    FlipY,
    RotateIn,
    BounceIn,
    Elastic,
    Wave,
    Blur,
    None,
}

impl AnimationKind {
    #[cfg(test)]
    pub const ALL: [AnimationKind; 15] = [
        AnimationKind::FadeIn,
        AnimationKind::SlideUp,
        AnimationKind::SlideDown,
        AnimationKind::SlideLeft,
        AnimationKind::SlideRight,
        AnimationKind::Zoom,
        AnimationKind::ZoomOut,
        AnimationKind::FlipX,
        AnimationKind::FlipY,
        AnimationKind::RotateIn,
        AnimationKind::BounceIn,
        AnimationKind::Elastic,
        AnimationKind::Wave,
        AnimationKind::Blur,
        AnimationKind::None,
    ];

    /// Parse a kind name. Case, `-` and `_` are ignored, so `slide-up`,
    /// `slideUp` and `SLIDE_UP` are all accepted. Unknown names map to
    /// [`AnimationKind::None`].
    pub fn parse(name: &str) -> Self {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "fade" | "fadein" => AnimationKind::FadeIn,
            "slideup" => AnimationKind::SlideUp,
            "slidedown" => AnimationKind::SlideDown,
            "slideleft" => AnimationKind::SlideLeft,
            "slideright" => AnimationKind::SlideRight,
            "zoom" | "zoomin" => AnimationKind::Zoom,
            "zoomout" => AnimationKind::ZoomOut,
            "flipx" => AnimationKind::FlipX,
            "flipy" => AnimationKind::FlipY,
            "rotatein" => AnimationKind::RotateIn,
            "bouncein" => AnimationKind::BounceIn,
            "elastic" => AnimationKind::Elastic,
            "wave" => AnimationKind::Wave,
            "blur" => AnimationKind::Blur,
            _ => AnimationKind::None,
        }
    }

    /// Spring that bounce-in and elastic always use, whatever the request says.
    pub fn own_spring(self) -> Option<SpringConfig> {
        match self {
            AnimationKind::BounceIn => Some(SpringConfig::BOUNCE),
            AnimationKind::Elastic => Some(SpringConfig::ELASTIC),
            _ => None,
        }
    }
}

/// Visual properties of one end of an animation. `None` leaves the property
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Props {
    pub opacity: Option<f64>,
    /// Horizontal translation in px.
    pub x: Option<f64>,
    /// Vertical translation in px.
    pub y: Option<f64>,
    pub scale: Option<f64>,
    /// Degrees.
    pub rotate: Option<f64>,
    pub rotate_x: Option<f64>,
    pub rotate_y: Option<f64>,
    pub skew_y: Option<f64>,
    /// Blur radius in px.
    pub blur: Option<f64>,
    /// Perspective distance in px, only meaningful with 3D rotations.
    pub perspective: Option<f64>,
}

impl Props {
    pub fn is_identity(&self) -> bool {
        *self == Props::default()
    }

    fn transform(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(p) = self.perspective {
            parts.push(format!("perspective({}px)", p));
        }
        if self.x.is_some() || self.y.is_some() {
            parts.push(format!(
                "translate({}px, {}px)",
                self.x.unwrap_or(0.0),
                self.y.unwrap_or(0.0)
            ));
        }
        if let Some(s) = self.scale {
            parts.push(format!("scale({})", s));
        }
        if let Some(r) = self.rotate {
            parts.push(format!("rotate({}deg)", r));
        }
        if let Some(r) = self.rotate_x {
            parts.push(format!("rotateX({}deg)", r));
        }
        if let Some(r) = self.rotate_y {
            parts.push(format!("rotateY({}deg)", r));
        }
        if let Some(s) = self.skew_y {
            parts.push(format!("skewY({}deg)", s));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Inline CSS declarations for these props.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(o) = self.opacity {
            let _ = write!(css, "opacity: {};", o);
        }
        if let Some(t) = self.transform() {
            let _ = write!(css, "transform: {};", t);
        }
        if let Some(b) = self.blur {
            let _ = write!(css, "filter: blur({}px);", b);
        }
        css
    }
}

/// Timing curve for tween transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    CubicBezier(f64, f64, f64, f64),
    EaseOut,
}

impl Ease {
    pub const SMOOTH: Ease = Ease::CubicBezier(0.25, 0.1, 0.25, 1.0);

    fn to_css(self) -> String {
        match self {
            Ease::CubicBezier(a, b, c, d) => format!("cubic-bezier({}, {}, {}, {})", a, b, c, d),
            Ease::EaseOut => "ease-out".to_string(),
        }
    }
}

/// Physical spring description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 25.0,
            stiffness: 120.0,
            mass: 1.0,
        }
    }
}

impl SpringConfig {
    const MIN_COMPONENT: f64 = 0.01;
    // Settle time bounds for the CSS approximation, seconds
    const MIN_SETTLE: f64 = 0.2;
    const MAX_SETTLE: f64 = 2.0;

    pub const BOUNCE: SpringConfig = SpringConfig {
        damping: 10.0,
        stiffness: 100.0,
        mass: 1.0,
    };

    pub const ELASTIC: SpringConfig = SpringConfig {
        damping: 8.0,
        stiffness: 100.0,
        mass: 1.0,
    };

    pub fn new(damping: f64, stiffness: f64, mass: f64) -> Self {
        let positive = |v: f64, fallback: f64| {
            if v.is_nan() {
                fallback
            } else {
                v.max(Self::MIN_COMPONENT)
            }
        };
        let defaults = Self::default();
        Self {
            damping: positive(damping, defaults.damping),
            stiffness: positive(stiffness, defaults.stiffness),
            mass: positive(mass, defaults.mass),
        }
    }

    /// Damping ratio ζ = c / (2·√(k·m)).
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio() < 1.0
    }

    /// Approximate time to settle: 4 / (ζ·ω₀), which reduces to 8m / c.
    pub fn settle_time(&self) -> f64 {
        (8.0 * self.mass / self.damping).clamp(Self::MIN_SETTLE, Self::MAX_SETTLE)
    }

    fn css_ease(&self) -> Ease {
        if self.is_underdamped() {
            Ease::CubicBezier(0.34, 1.56, 0.64, 1.0)
        } else {
            Ease::CubicBezier(0.22, 1.0, 0.36, 1.0)
        }
    }
}

/// How the element moves between its hidden and visible props.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Instant,
    Tween { duration: f64, delay: f64, ease: Ease },
    Spring { spring: SpringConfig, delay: f64 },
}

impl Transition {
    #[cfg(test)]
    pub fn delay(&self) -> f64 {
        match *self {
            Transition::Instant => 0.0,
            Transition::Tween { delay, .. } | Transition::Spring { delay, .. } => delay,
        }
    }

    pub fn without_delay(self) -> Self {
        match self {
            Transition::Instant => Transition::Instant,
            Transition::Tween { duration, ease, .. } => Transition::Tween {
                duration,
                delay: 0.0,
                ease,
            },
            Transition::Spring { spring, .. } => Transition::Spring { spring, delay: 0.0 },
        }
    }

    /// CSS `transition` declaration. Springs are approximated by their
    /// settle time and an overshooting curve when under-damped.
    pub fn to_css(&self) -> String {
        match *self {
            Transition::Instant => "transition: none;".to_string(),
            Transition::Tween { duration, delay, ease } => format!(
                "transition: all {:.3}s {} {:.3}s;",
                duration,
                ease.to_css(),
                delay
            ),
            Transition::Spring { spring, delay } => format!(
                "transition: all {:.3}s {} {:.3}s;",
                spring.settle_time(),
                spring.css_ease().to_css(),
                delay
            ),
        }
    }
}

/// Before/after property set plus the timing curve of one animation kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub hidden: Props,
    pub visible: Props,
    pub transition: Transition,
}

impl Variant {
    pub fn identity() -> Self {
        Self {
            hidden: Props::default(),
            visible: Props::default(),
            transition: Transition::Instant,
        }
    }
}

/// Resolve `kind` into its variant using the timing in `request`.
///
/// Bounce-in and elastic always use their own spring; every other kind uses
/// the request's spring override if present, otherwise a tween on the smooth
/// cubic-bezier curve.
pub fn resolve_variant(kind: AnimationKind, request: &AnimationRequest) -> Variant {
    let duration = request.duration_secs();
    let delay = request.delay_secs();

    let transition = match kind.own_spring().or(request.spring()) {
        Some(spring) => Transition::Spring { spring, delay },
        None => Transition::Tween {
            duration,
            delay,
            ease: Ease::SMOOTH,
        },
    };

    let visible_base = Props {
        opacity: Some(1.0),
        ..Props::default()
    };

    match kind {
        AnimationKind::FadeIn => Variant {
            hidden: Props {
                opacity: Some(0.0),
                blur: Some(2.0),
                ..Props::default()
            },
            visible: Props {
                blur: Some(0.0),
                ..visible_base
            },
            transition,
        },
        AnimationKind::SlideUp | AnimationKind::SlideDown => {
            let offset = if kind == AnimationKind::SlideUp { 60.0 } else { -60.0 };
            Variant {
                hidden: Props {
                    opacity: Some(0.0),
                    y: Some(offset),
                    blur: Some(4.0),
                    ..Props::default()
                },
                visible: Props {
                    y: Some(0.0),
                    blur: Some(0.0),
                    ..visible_base
                },
                transition,
            }
        }
        AnimationKind::SlideLeft | AnimationKind::SlideRight => {
            let offset = if kind == AnimationKind::SlideLeft { 80.0 } else { -80.0 };
            Variant {
                hidden: Props {
                    opacity: Some(0.0),
                    x: Some(offset),
                    blur: Some(6.0),
                    ..Props::default()
                },
                visible: Props {
                    x: Some(0.0),
                    blur: Some(0.0),
                    ..visible_base
                },
                transition,
            }
        }
        AnimationKind::Zoom | AnimationKind::ZoomOut => {
            let (scale, blur) = if kind == AnimationKind::Zoom {
                (0.6, 8.0)
            } else {
                (1.4, 10.0)
            };
            Variant {
                hidden: Props {
                    opacity: Some(0.0),
                    scale: Some(scale),
                    blur: Some(blur),
                    ..Props::default()
                },
                visible: Props {
                    scale: Some(1.0),
                    blur: Some(0.0),
                    ..visible_base
                },
                transition,
            }
        }
        AnimationKind::FlipX => Variant {
            hidden: Props {
                opacity: Some(0.0),
                rotate_x: Some(90.0),
                perspective: Some(1000.0),
                ..Props::default()
            },
            visible: Props {
                rotate_x: Some(0.0),
                perspective: Some(1000.0),
                ..visible_base
            },
            transition,
        },
        AnimationKind::FlipY => Variant {
            hidden: Props {
                opacity: Some(0.0),
                rotate_y: Some(90.0),
                perspective: Some(1000.0),
                ..Props::default()
            },
            visible: Props {
                rotate_y: Some(0.0),
                perspective: Some(1000.0),
                ..visible_base
            },
            transition,
        },
        AnimationKind::RotateIn => Variant {
            hidden: Props {
                opacity: Some(0.0),
                rotate: Some(-180.0),
                scale: Some(0.5),
                ..Props::default()
            },
            visible: Props {
                rotate: Some(0.0),
                scale: Some(1.0),
                ..visible_base
            },
            transition,
        },
        AnimationKind::BounceIn => Variant {
            hidden: Props {
                opacity: Some(0.0),
                scale: Some(0.3),
                y: Some(-30.0),
                ..Props::default()
            },
            visible: Props {
                scale: Some(1.0),
                y: Some(0.0),
                ..visible_base
            },
            transition,
        },
        AnimationKind::Elastic => Variant {
            hidden: Props {
                opacity: Some(0.0),
                scale: Some(0.0),
                rotate: Some(-180.0),
                ..Props::default()
            },
            visible: Props {
                scale: Some(1.0),
                rotate: Some(0.0),
                ..visible_base
            },
            transition,
        },
        AnimationKind::Wave => Variant {
            hidden: Props {
                opacity: Some(0.0),
                y: Some(20.0),
                skew_y: Some(5.0),
                ..Props::default()
            },
            visible: Props {
                y: Some(0.0),
                skew_y: Some(0.0),
                ..visible_base
            },
            transition,
        },
        AnimationKind::Blur => Variant {
            hidden: Props {
                opacity: Some(0.0),
                blur: Some(20.0),
                scale: Some(1.1),
                ..Props::default()
            },
            visible: Props {
                blur: Some(0.0),
                scale: Some(1.0),
                ..visible_base
            },
            transition: Transition::Tween {
                duration: duration * 1.2,
                delay,
                ease: Ease::EaseOut,
            },
        },
        AnimationKind::None => Variant::identity(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_kind_matches_none() {
        let request = AnimationRequest::default();
        let unknown = resolve_variant(AnimationKind::parse("bogus-kind"), &request);
        assert_eq!(unknown, resolve_variant(AnimationKind::parse("none"), &request));
        assert_eq!(unknown, Variant::identity());
    }

    #[test]
    fn test_parse_accepts_spellings() {
        assert_eq!(AnimationKind::parse("slideUp"), AnimationKind::SlideUp);
        assert_eq!(AnimationKind::parse("slide-up"), AnimationKind::SlideUp);
        assert_eq!(AnimationKind::parse("SLIDE_LEFT"), AnimationKind::SlideLeft);
        assert_eq!(AnimationKind::parse("fade"), AnimationKind::FadeIn);
        assert_eq!(AnimationKind::parse("zoom-in"), AnimationKind::Zoom);
        assert_eq!(AnimationKind::parse("rotate-in"), AnimationKind::RotateIn);
        assert_eq!(AnimationKind::parse(""), AnimationKind::None);
    }

    #[test]
    fn test_spring_kinds_ignore_duration_and_override() {
        let request = AnimationRequest::new(AnimationKind::BounceIn)
            .with_duration(3.0)
            .with_delay(0.4)
            .with_spring(SpringConfig::new(40.0, 300.0, 2.0));

        let bounce = resolve_variant(AnimationKind::BounceIn, &request);
        assert_eq!(
            bounce.transition,
            Transition::Spring {
                spring: SpringConfig::BOUNCE,
                delay: 0.4
            }
        );

        let elastic = resolve_variant(AnimationKind::Elastic, &request);
        assert_eq!(
            elastic.transition,
            Transition::Spring {
                spring: SpringConfig::ELASTIC,
                delay: 0.4
            }
        );
    }

    #[test]
    fn test_spring_override_replaces_tween() {
        let spring = SpringConfig::new(20.0, 200.0, 1.0);
        let request = AnimationRequest::new(AnimationKind::SlideUp).with_spring(spring);
        let variant = resolve_variant(AnimationKind::SlideUp, &request);
        assert_eq!(variant.transition, Transition::Spring { spring, delay: 0.0 });
    }

    #[test]
    fn test_tween_uses_request_timing() {
        let request = AnimationRequest::new(AnimationKind::SlideUp)
            .with_duration(0.6)
            .with_delay(0.2);
        let variant = resolve_variant(AnimationKind::SlideUp, &request);
        assert_eq!(
            variant.transition,
            Transition::Tween {
                duration: 0.6,
                delay: 0.2,
                ease: Ease::SMOOTH
            }
        );
        assert_eq!(variant.hidden.y, Some(60.0));
        assert_eq!(variant.visible.y, Some(0.0));
    }

    #[test]
    fn test_blur_stretches_duration() {
        let request = AnimationRequest::new(AnimationKind::Blur).with_duration(1.0);
        match resolve_variant(AnimationKind::Blur, &request).transition {
            Transition::Tween { duration, ease, .. } => {
                assert!((duration - 1.2).abs() < 1e-9);
                assert_eq!(ease, Ease::EaseOut);
            }
            other => panic!("expected tween, got {:?}", other),
        }
    }

    #[test]
    fn test_every_visible_state_is_opaque() {
        let request = AnimationRequest::default();
        for kind in AnimationKind::ALL {
            let variant = resolve_variant(kind, &request);
            if kind == AnimationKind::None {
                assert!(variant.visible.is_identity());
            } else {
                assert_eq!(variant.visible.opacity, Some(1.0), "{:?}", kind);
                assert_eq!(variant.hidden.opacity, Some(0.0), "{:?}", kind);
            }
        }
    }

    #[test]
    fn test_props_css() {
        let props = Props {
            opacity: Some(0.0),
            y: Some(60.0),
            blur: Some(4.0),
            ..Props::default()
        };
        assert_eq!(
            props.to_css(),
            "opacity: 0;transform: translate(0px, 60px);filter: blur(4px);"
        );
        assert_eq!(Props::default().to_css(), "");
    }

    #[test]
    fn test_transition_css() {
        let tween = Transition::Tween {
            duration: 0.8,
            delay: 0.2,
            ease: Ease::SMOOTH,
        };
        assert_eq!(
            tween.to_css(),
            "transition: all 0.800s cubic-bezier(0.25, 0.1, 0.25, 1) 0.200s;"
        );
        assert_eq!(Transition::Instant.to_css(), "transition: none;");
    }

    #[test]
    fn test_spring_approximation() {
        assert!(SpringConfig::BOUNCE.is_underdamped());
        assert!(!SpringConfig::default().is_underdamped());
        assert!((SpringConfig::BOUNCE.settle_time() - 0.8).abs() < 1e-9);
        assert!((SpringConfig::ELASTIC.settle_time() - 1.0).abs() < 1e-9);

        let sloppy = SpringConfig::new(-5.0, f64::NAN, 0.0);
        assert!(sloppy.damping > 0.0);
        assert_eq!(sloppy.stiffness, SpringConfig::default().stiffness);
        assert!(sloppy.mass > 0.0);
    }
}
