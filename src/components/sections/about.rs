use yew::prelude::*;

use crate::animation::{AnimationKind, ParallaxConfig, ParallaxDirection};
use crate::components::animated::Animated;
use crate::components::section_heading::SectionHeading;
use crate::content::{STATS, VALUES};
use crate::hooks::use_parallax;
use crate::i18n::{use_language, Language};

/// The story slides in from the reading side.
fn story_kind(language: Language) -> AnimationKind {
    if language.is_rtl() {
        AnimationKind::SlideLeft
    } else {
        AnimationKind::SlideRight
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let lang = use_language();
    let backdrop = use_parallax(ParallaxConfig::new(0.2, ParallaxDirection::Vertical, false));
    let accent = use_parallax(ParallaxConfig::new(0.4, ParallaxDirection::Both, true));

    let story_slide = story_kind(lang.language);

    html! {
        <section id="about" class="section about">
            <div
                ref={backdrop.node_ref.clone()}
                class="about-backdrop"
                style={format!("transform: {};", backdrop.transform)}
            ></div>

            <SectionHeading
                subtitle={lang.t("about.subtitle")}
                title={lang.t("about.title")}
                description={lang.t("about.description")}
            />

            <div class="about-body">
                // Keyed on the language so a switch replays the slide from the mirrored side
                <Animated key={lang.language.code()} kind={story_slide} duration={1.0}>
                    <p class="about-story">{ lang.t("about.story") }</p>
                </Animated>
                <div
                    key="accent"
                    ref={accent.node_ref.clone()}
                    class="about-accent"
                    style={format!("transform: {};", accent.transform)}
                ></div>
            </div>

            <div class="stats-grid">
                {
                    for STATS.iter().enumerate().map(|(i, stat)| html! {
                        <Animated kind="bounce-in" delay={0.1 * i as f64}>
                            <div class="stat">
                                <span class="stat-value gradient-text">{ stat.value }</span>
                                <span class="stat-label">{ lang.t(stat.label_key) }</span>
                            </div>
                        </Animated>
                    })
                }
            </div>

            <div class="card-grid values-grid">
                {
                    for VALUES.iter().enumerate().map(|(i, value)| html! {
                        <Animated kind="flip-y" delay={0.15 * i as f64}>
                            <article class="card">
                                <h3>{ lang.t(value.title_key) }</h3>
                                <p class="card-text">{ lang.t(value.description_key) }</p>
                            </article>
                        </Animated>
                    })
                }
            </div>
            <style>
                {r#"
                .about {
                    position: relative;
                    overflow: hidden;
                }
                .about-backdrop {
                    position: absolute;
                    top: 10%;
                    left: -10%;
                    width: 40rem;
                    height: 40rem;
                    border-radius: 50%;
                    background: radial-gradient(circle, var(--primary-soft), transparent 70%);
                    z-index: -1;
                    will-change: transform;
                }
                .about-body {
                    position: relative;
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                }
                .about-story {
                    font-size: 1.1rem;
                    line-height: 1.8;
                    color: var(--muted);
                }
                .about-accent {
                    position: absolute;
                    top: -2rem;
                    right: -4rem;
                    width: 8rem;
                    height: 8rem;
                    border-radius: 1.5rem;
                    background: var(--accent-soft);
                    z-index: -1;
                    will-change: transform;
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                    text-align: center;
                }
                .stat {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                }
                .stat-value {
                    font-size: 2.5rem;
                    font-weight: 700;
                }
                .stat-label {
                    color: var(--muted);
                }
                .values-grid {
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_mirrors_with_language() {
        assert_eq!(story_kind(Language::En), AnimationKind::SlideRight);
        assert_eq!(story_kind(Language::Ar), AnimationKind::SlideLeft);
        // The story is keyed on the code, so a switch remounts it with the new kind
        assert_ne!(Language::En.code(), Language::Ar.code());
    }
}
