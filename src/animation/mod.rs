//! Scroll-triggered animation and parallax primitives.
//!
//! `request`, `variant`, `controller`, `smoother`, `parallax` and `easing`
//! are plain Rust and unit tested natively. `observer` and `frame` bind them
//! to `IntersectionObserver` and `requestAnimationFrame`.

pub mod controller;
pub mod easing;
pub mod parallax;
pub mod request;
pub mod smoother;
pub mod variant;

pub mod frame;
pub mod observer;

pub use controller::{AnimationController, AnimationPhase, PhaseSignal};
pub use easing::{Easing, ScrollTween};
pub use parallax::{ParallaxConfig, ParallaxDirection};
pub use request::{AnimationRequest, ReentryTiming};
pub use smoother::{Point, PointerSmoother};
pub use variant::{AnimationKind, SpringConfig};
