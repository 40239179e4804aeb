use yew::prelude::*;
use yew_hooks::use_interval;

use crate::carousel::Carousel;
use crate::components::animated::Animated;
use crate::components::section_heading::SectionHeading;
use crate::config::TESTIMONIAL_AUTOPLAY_MS;
use crate::content::TESTIMONIALS;
use crate::i18n::use_language;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let lang = use_language();
    let carousel = use_state_eq(|| Carousel::new(TESTIMONIALS.len()));
    let hovered = use_state_eq(|| false);

    {
        let carousel = carousel.clone();
        // An interval of 0 stops autoplay
        let millis = if *hovered { 0 } else { TESTIMONIAL_AUTOPLAY_MS };
        use_interval(move || carousel.set(carousel.next()), millis);
    }

    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.prev()))
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next()))
    };
    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let index = carousel.index();
    // Slides move the other way in right-to-left layouts
    let direction = if lang.is_rtl() { 1.0 } else { -1.0 };
    let track_style = format!("transform: translateX({}%);", direction * 100.0 * index as f64);

    let dots = (0..carousel.len()).map(|i| {
        let onclick = {
            let carousel = carousel.clone();
            Callback::from(move |_: MouseEvent| carousel.set(carousel.go_to(i)))
        };
        html! {
            <button
                class={classes!("carousel-dot", (i == index).then_some("active"))}
                onclick={onclick}
                aria-label={format!("{}", i + 1)}
            ></button>
        }
    });

    html! {
        <section id="testimonials" class="section">
            <SectionHeading
                subtitle={lang.t("testimonials.subtitle")}
                title={lang.t("testimonials.title")}
                description={lang.t("testimonials.description")}
            />
            <Animated kind="fade-in" duration={1.0}>
                <div class="carousel" onmouseenter={on_enter} onmouseleave={on_leave}>
                    <div class="carousel-viewport">
                        <div class="carousel-track" style={track_style}>
                            {
                                for TESTIMONIALS.iter().map(|t| html! {
                                    <figure class="carousel-slide">
                                        <blockquote>{ format!("\u{201C}{}\u{201D}", t.quote) }</blockquote>
                                        <figcaption>
                                            <strong>{ t.name }</strong>
                                            <span>{ format!("{}, {}", t.role, t.company) }</span>
                                        </figcaption>
                                    </figure>
                                })
                            }
                        </div>
                    </div>
                    <div class="carousel-controls">
                        <button class="icon-button" onclick={prev} aria-label={lang.t("testimonials.previous")}>{"‹"}</button>
                        <div class="carousel-dots">{ for dots }</div>
                        <button class="icon-button" onclick={next} aria-label={lang.t("testimonials.next")}>{"›"}</button>
                    </div>
                </div>
            </Animated>
            <style>
                {r#"
                .carousel {
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .carousel-viewport {
                    overflow: hidden;
                }
                .carousel-track {
                    display: flex;
                    transition: transform 0.5s ease;
                }
                .carousel-slide {
                    flex: 0 0 100%;
                    margin: 0;
                    padding: 2rem;
                    text-align: center;
                }
                .carousel-slide blockquote {
                    font-size: 1.25rem;
                    line-height: 1.7;
                    margin: 0 0 1.5rem;
                }
                .carousel-slide figcaption {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                    color: var(--muted);
                }
                .carousel-slide strong {
                    color: var(--text);
                }
                .carousel-controls {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }
                .carousel-dots {
                    display: flex;
                    gap: 0.5rem;
                }
                .carousel-dot {
                    width: 0.6rem;
                    height: 0.6rem;
                    border-radius: 50%;
                    border: none;
                    background: var(--border);
                    cursor: pointer;
                    padding: 0;
                }
                .carousel-dot.active {
                    background: var(--primary);
                    width: 1.5rem;
                    border-radius: 999px;
                }
                "#}
            </style>
        </section>
    }
}
