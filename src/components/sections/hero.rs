use yew::prelude::*;

use crate::components::animated::Animated;
use crate::hooks::{use_mouse_move, MouseMoveConfig};
use crate::i18n::use_language;

const HERO_POINTER_SENSITIVITY: f64 = 0.02;

#[function_component(Hero)]
pub fn hero() -> Html {
    let lang = use_language();
    let pointer = use_mouse_move(MouseMoveConfig {
        sensitivity: HERO_POINTER_SENSITIVITY,
        ..MouseMoveConfig::default()
    });
    let position = pointer.position;

    // The gradient has its own CSS transition, so it follows the raw target
    let gradient_style = format!(
        "background-position: {:.2}% {:.2}%;",
        50.0 + pointer.raw.x * 2.0,
        50.0 + pointer.raw.y * 2.0
    );
    let blob_a = format!(
        "transform: translate({:.2}px, {:.2}px);",
        position.x * -0.5,
        position.y * -0.5
    );
    let blob_b = format!(
        "transform: translate({:.2}px, {:.2}px);",
        position.x * 0.2,
        position.y * 0.2
    );

    html! {
        <section id="home" class={classes!("hero", pointer.is_touch_device.then_some("hero-touch"))}>
            <div class="hero-gradient" style={gradient_style}></div>
            <div class="hero-grid"></div>
            <div class="hero-blob hero-blob-a" style={blob_a}></div>
            <div class="hero-blob hero-blob-b" style={blob_b}></div>

            <div class="hero-content">
                <Animated kind="blur" duration={1.2} delay={0.2}>
                    <h1 class="hero-title">
                        { lang.t("hero.title") }
                        <span class="gradient-text">
                            { format!("{} {}", lang.t("hero.subtitle"), lang.t("hero.highlight")) }
                        </span>
                    </h1>
                </Animated>
                <Animated kind="wave" duration={1.0} delay={0.5}>
                    <p class="hero-description">{ lang.t("hero.description") }</p>
                </Animated>
                <Animated kind="elastic" duration={0.8} delay={0.8}>
                    <div class="hero-actions">
                        <a href="#contact" class="button button-primary">{ lang.t("hero.cta.primary") }</a>
                        <a href="#projects" class="button button-outline">{ lang.t("hero.cta.secondary") }</a>
                    </div>
                </Animated>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    padding-top: 5rem;
                    overflow: hidden;
                }
                .hero-gradient {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle, var(--primary-soft) 0%, transparent 60%);
                    background-size: 150% 150%;
                    transition: background-position 0.3s ease-out;
                }
                .hero-grid {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                    background-image:
                        linear-gradient(var(--border) 1px, transparent 1px),
                        linear-gradient(90deg, var(--border) 1px, transparent 1px);
                    background-size: 40px 40px;
                }
                .hero-blob {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    transition: transform 0.1s linear;
                }
                .hero-touch .hero-blob {
                    transition-duration: 0.4s;
                }
                .hero-blob-a {
                    top: 5rem;
                    right: 20%;
                    width: 16rem;
                    height: 16rem;
                    background: var(--accent-soft);
                }
                .hero-blob-b {
                    bottom: 5rem;
                    left: 10%;
                    width: 24rem;
                    height: 24rem;
                    background: var(--primary-soft);
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 2.5rem 1.5rem 0;
                    text-align: center;
                }
                .hero-title {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }
                .hero-title .gradient-text {
                    display: block;
                }
                .hero-description {
                    font-size: 1.2rem;
                    color: var(--muted);
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }
                "#}
            </style>
        </section>
    }
}
