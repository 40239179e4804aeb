use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::language_switcher::LanguageSwitcher;
use crate::config::HEADER_SCROLLED_AFTER_PX;
use crate::dom;
use crate::i18n::use_language;
use crate::theme::{use_theme, Theme};

const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "nav.home"),
    ("services", "nav.services"),
    ("projects", "nav.projects"),
    ("about", "nav.about"),
    ("team", "nav.team"),
    ("testimonials", "nav.testimonials"),
    ("contact", "nav.contact"),
];

/// Fraction of the page scrolled, in `[0, 1]`. Pages shorter than the
/// viewport report 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct ScrollState {
    progress: f64,
    is_scrolled: bool,
}

fn read_scroll_state() -> ScrollState {
    let top = dom::scroll_y();
    ScrollState {
        progress: scroll_progress(top, dom::document_height(), dom::viewport_size().y),
        is_scrolled: top > HEADER_SCROLLED_AFTER_PX,
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let lang = use_language();
    let theme = use_theme();
    let menu_open = use_state(|| false);
    let scroll = use_state_eq(ScrollState::default);

    {
        let scroll = scroll.clone();
        use_event_with_window("scroll", move |_: Event| {
            scroll.set(read_scroll_state());
        });
    }

    {
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |_| {
                scroll.set(read_scroll_state());
                || ()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Links keep their default action so the smooth scroll handler sees them
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let toggle_theme = {
        let set_theme = theme.set_theme.clone();
        let next = theme.theme.toggled();
        Callback::from(move |_: MouseEvent| set_theme.emit(next))
    };

    let theme_icon = match theme.theme {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    };

    let progress_style = format!("transform: scaleX({:.4});", scroll.progress);

    html! {
        <header class={classes!("top-nav", scroll.is_scrolled.then_some("scrolled"))}>
            <div class="scroll-progress" style={progress_style}></div>
            <div class="nav-content">
                <a href="#home" class="nav-logo">{"Lovable"}<span>{"Tech"}</span></a>

                <nav class={classes!("nav-links", (*menu_open).then_some("mobile-menu-open"))}>
                    {
                        for NAV_LINKS.iter().map(|(id, key)| html! {
                            <a
                                href={format!("#{}", id)}
                                class="nav-link"
                                onclick={close_menu.clone()}
                            >
                                { lang.t(key) }
                            </a>
                        })
                    }
                </nav>

                <div class="nav-actions">
                    <LanguageSwitcher />
                    <button
                        class="icon-button"
                        onclick={toggle_theme}
                        aria-label={lang.t("nav.toggleTheme")}
                    >
                        { theme_icon }
                    </button>
                    <a href="#contact" class="nav-cta">{ lang.t("nav.getStarted") }</a>
                    <button
                        class={classes!("burger-menu", (*menu_open).then_some("open"))}
                        onclick={toggle_menu}
                        aria-label={lang.t("nav.toggleMenu")}
                        aria-expanded={menu_open.to_string()}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.25rem 0;
                    transition: padding 0.3s ease, background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.6rem 0;
                    background: var(--surface-blur);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 1px 0 var(--border);
                }
                .scroll-progress {
                    position: absolute;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 3px;
                    transform-origin: 0 50%;
                    background: linear-gradient(90deg, var(--primary), var(--accent));
                }
                [dir="rtl"] .scroll-progress {
                    transform-origin: 100% 50%;
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .nav-logo {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: var(--text);
                    text-decoration: none;
                }
                .nav-logo span {
                    color: var(--primary);
                }
                .nav-links {
                    display: flex;
                    gap: 1.25rem;
                }
                .nav-link {
                    color: var(--muted);
                    text-decoration: none;
                    font-size: 0.95rem;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: var(--primary);
                }
                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .icon-button {
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 50%;
                    border: 1px solid var(--border);
                    background: transparent;
                    color: inherit;
                    cursor: pointer;
                }
                .nav-cta {
                    padding: 0.5rem 1.1rem;
                    border-radius: 999px;
                    background: linear-gradient(90deg, var(--primary), var(--accent));
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.25rem;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: var(--text);
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .burger-menu.open span:nth-child(1) {
                    transform: translateY(6px) rotate(45deg);
                }
                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }
                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-6px) rotate(-45deg);
                }
                @media (max-width: 900px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-cta {
                        display: none;
                    }
                    .nav-links {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1rem 1.5rem;
                        background: var(--surface);
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
                        display: none;
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_at_ends() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert!((scroll_progress(500.0, 3000.0, 1000.0) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_progress_clamped() {
        // Overscroll bounce on touch devices
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_short_page_has_no_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 3000.0, 1000.0), 0.0);
    }
}
