use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::config::HEADER_SCROLL_OFFSET;
use crate::dom;
use crate::hooks::{use_smooth_scroll, ScrollTarget, SmoothScrollOptions};
use crate::i18n::use_language;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Page chrome: header, footer and the shared stylesheet.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let lang = use_language();
    let mounted = use_state_eq(|| false);

    // Anchor clicks anywhere in the page scroll smoothly below the fixed header
    let smooth_scroll_to = use_smooth_scroll(SmoothScrollOptions {
        offset: HEADER_SCROLL_OFFSET,
        ..SmoothScrollOptions::default()
    });
    let back_to_top = smooth_scroll_to.reform(|_: MouseEvent| ScrollTarget::Position(0.0));

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                dom::scroll_to_y(0.0);
                mounted.set(true);
                || ()
            },
            (),
        );
    }

    html! {
        <div class="layout">
            <Header />
            <div class={classes!("page", (*mounted).then_some("page-ready"))}>
                { props.children.clone() }
            </div>
            <Footer />
            <button class="icon-button back-to-top" onclick={back_to_top} aria-label={lang.t("footer.backToTop")}>
                {"↑"}
            </button>
            <style>
                {r#"
                :root {
                    --bg: #ffffff;
                    --surface: #ffffff;
                    --surface-hover: rgba(15, 23, 42, 0.05);
                    --surface-blur: rgba(255, 255, 255, 0.8);
                    --text: #0f172a;
                    --muted: #64748b;
                    --border: rgba(15, 23, 42, 0.12);
                    --primary: #6d28d9;
                    --primary-soft: rgba(109, 40, 217, 0.12);
                    --accent: #0ea5e9;
                    --accent-soft: rgba(14, 165, 233, 0.12);
                    --danger: #dc2626;
                }
                :root.dark {
                    --bg: #0b1120;
                    --surface: #111827;
                    --surface-hover: rgba(255, 255, 255, 0.06);
                    --surface-blur: rgba(11, 17, 32, 0.8);
                    --text: #f1f5f9;
                    --muted: #94a3b8;
                    --border: rgba(255, 255, 255, 0.12);
                    --primary: #a78bfa;
                    --primary-soft: rgba(167, 139, 250, 0.15);
                    --accent: #38bdf8;
                    --accent-soft: rgba(56, 189, 248, 0.15);
                    --danger: #f87171;
                }
                body {
                    margin: 0;
                    font-family: 'Inter', system-ui, sans-serif;
                    background: var(--bg);
                    color: var(--text);
                    transition: background 0.3s ease, color 0.3s ease;
                }
                [dir="rtl"] body {
                    font-family: 'Cairo', 'Inter', system-ui, sans-serif;
                }
                .layout {
                    display: flex;
                    flex-direction: column;
                    min-height: 100vh;
                }
                .page {
                    flex-grow: 1;
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .page.page-ready {
                    opacity: 1;
                }
                .back-to-top {
                    position: fixed;
                    bottom: 1.5rem;
                    inset-inline-end: 1.5rem;
                    z-index: 40;
                }
                .section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 3.5rem;
                }
                .section-heading h2 {
                    font-size: clamp(1.9rem, 4vw, 2.6rem);
                    margin: 0 0 1rem;
                }
                .section-description {
                    color: var(--muted);
                    max-width: 40rem;
                    margin: 0 auto;
                }
                .gradient-text {
                    background: linear-gradient(90deg, var(--primary), var(--accent));
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .card-grid {
                    display: grid;
                    gap: 1.5rem;
                }
                .card {
                    height: 100%;
                    box-sizing: border-box;
                    padding: 1.75rem;
                    border-radius: 1rem;
                    border: 1px solid var(--border);
                    background: var(--surface);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.08);
                }
                .card-text {
                    color: var(--muted);
                    line-height: 1.6;
                }
                .tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.4rem;
                }
                .tag {
                    padding: 0.2rem 0.6rem;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    background: var(--primary-soft);
                    color: var(--primary);
                }
                .link {
                    color: var(--primary);
                    text-decoration: none;
                    font-weight: 600;
                }
                .button {
                    display: inline-block;
                    padding: 0.8rem 1.6rem;
                    border-radius: 999px;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                    border: 1px solid transparent;
                    font: inherit;
                }
                .button-primary {
                    background: linear-gradient(90deg, var(--primary), var(--accent));
                    color: #fff;
                }
                .button-outline {
                    border-color: var(--primary);
                    color: var(--primary);
                    background: transparent;
                }
                "#}
            </style>
        </div>
    }
}
