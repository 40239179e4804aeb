use yew::prelude::*;

use crate::components::animated::Animated;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub subtitle: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: AttrValue,
}

/// Centered section title shared by every page section.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <Animated kind="slide-up" class="section-heading">
            <h2>
                { props.subtitle.clone() }{" "}
                <span class="gradient-text">{ props.title.clone() }</span>
            </h2>
            {
                if !props.description.is_empty() {
                    html! { <p class="section-description">{ props.description.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </Animated>
    }
}
