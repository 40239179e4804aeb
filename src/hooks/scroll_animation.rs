use web_sys::Element;
use yew::prelude::*;

use crate::animation::observer;
use crate::animation::{AnimationController, AnimationPhase, AnimationRequest, PhaseSignal};

pub struct ScrollAnimation {
    /// Attach to the element that should animate.
    pub node_ref: NodeRef,
    pub phase: AnimationPhase,
    /// Inline style for the current phase.
    pub style: String,
}

/// Animate an element in when it scrolls into view.
///
/// The request is read once on mount; each hook instance owns its own
/// controller.
#[hook]
pub fn use_scroll_animation(request: AnimationRequest) -> ScrollAnimation {
    let node_ref = use_node_ref();
    let phase = use_state_eq(AnimationPhase::default);
    let controller = use_mut_ref(move || AnimationController::new(request));

    {
        let controller = controller.clone();
        let phase = phase.clone();
        use_effect_with_deps(
            move |node_ref: &NodeRef| {
                let element = node_ref.cast::<Element>();
                let on_signal = {
                    let phase = phase.clone();
                    Callback::from(move |signal: PhaseSignal| phase.set(signal.phase()))
                };
                let handle = observer::attach(element.as_ref(), controller.clone(), on_signal);
                if handle.is_none() {
                    // Never leave content stuck in its hidden pose
                    controller.borrow_mut().show_static();
                    phase.set(AnimationPhase::Visible);
                }
                move || drop(handle)
            },
            node_ref.clone(),
        );
    }

    let style = controller.borrow().style();
    ScrollAnimation {
        node_ref,
        phase: *phase,
        style,
    }
}
