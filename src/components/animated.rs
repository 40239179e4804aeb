use yew::html::IntoPropValue;
use yew::prelude::*;

use crate::animation::{AnimationKind, AnimationPhase, AnimationRequest, ReentryTiming, SpringConfig};
use crate::config;
use crate::hooks::use_scroll_animation;

/// Lets markup name kinds the way stylesheets do: `kind="slide-up"`.
/// Unknown names play no animation.
impl IntoPropValue<AnimationKind> for &'static str {
    fn into_prop_value(self) -> AnimationKind {
        AnimationKind::parse(self)
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedProps {
    #[prop_or_default]
    pub kind: AnimationKind,
    #[prop_or(config::DEFAULT_ANIMATION_DURATION_SECS)]
    pub duration: f64,
    #[prop_or(config::DEFAULT_ANIMATION_DELAY_SECS)]
    pub delay: f64,
    #[prop_or(config::DEFAULT_VISIBILITY_THRESHOLD)]
    pub threshold: f64,
    #[prop_or(true)]
    pub trigger_once: bool,
    #[prop_or_default]
    pub spring: Option<SpringConfig>,
    #[prop_or_default]
    pub reentry: ReentryTiming,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Block wrapper that plays a scroll animation on its children.
#[function_component(Animated)]
pub fn animated(props: &AnimatedProps) -> Html {
    let mut request = AnimationRequest::new(props.kind)
        .with_duration(props.duration)
        .with_delay(props.delay)
        .with_threshold(props.threshold)
        .with_trigger_once(props.trigger_once)
        .with_reentry(props.reentry);
    if let Some(spring) = props.spring {
        request = request.with_spring(spring);
    }

    let animation = use_scroll_animation(request);
    let visible = animation.phase == AnimationPhase::Visible;

    html! {
        <div
            ref={animation.node_ref.clone()}
            class={classes!("animated", visible.then_some("is-visible"), props.class.clone())}
            style={animation.style.clone()}
        >
            { props.children.clone() }
        </div>
    }
}
