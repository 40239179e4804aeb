use yew::prelude::*;

use crate::i18n::use_language;

#[function_component(Footer)]
pub fn footer() -> Html {
    let lang = use_language();
    let year = web_sys::js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <a href="#home" class="nav-logo">{"Lovable"}<span>{"Tech"}</span></a>
                <p class="footer-tagline">{ lang.t("footer.company") }</p>
                <div class="footer-links">
                    <a href="#services">{ lang.t("nav.services") }</a>
                    <a href="#projects">{ lang.t("nav.projects") }</a>
                    <a href="#about">{ lang.t("nav.about") }</a>
                    <a href="#contact">{ lang.t("nav.contact") }</a>
                </div>
                <p class="footer-copyright">
                    { format!("© {} Lovable Tech. {}", year, lang.t("footer.rights")) }
                </p>
            </div>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid var(--border);
                    padding: 3rem 1.5rem 2rem;
                    margin-top: 4rem;
                }
                .footer-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                    text-align: center;
                }
                .footer-tagline {
                    color: var(--muted);
                    max-width: 480px;
                }
                .footer-links {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .footer-links a {
                    color: var(--muted);
                    text-decoration: none;
                }
                .footer-links a:hover {
                    color: var(--primary);
                }
                .footer-copyright {
                    font-size: 0.85rem;
                    color: var(--muted);
                }
                "#}
            </style>
        </footer>
    }
}
