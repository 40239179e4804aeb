use web_sys::MouseEvent;
use yew::prelude::*;

use crate::i18n::use_language;

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let lang = use_language();

    let toggle = {
        let set_language = lang.set_language.clone();
        let next = lang.language.toggled();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            set_language.emit(next);
        })
    };

    html! {
        <button
            class="language-switcher"
            onclick={toggle}
            aria-label={lang.t("nav.otherLanguage")}
            title={lang.t("nav.otherLanguage")}
        >
            <span class="language-code">{ lang.language.toggled().code().to_uppercase() }</span>
            <style>
                {r#"
                .language-switcher {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.25rem;
                    padding: 0.4rem 0.75rem;
                    border-radius: 999px;
                    border: 1px solid var(--border);
                    background: transparent;
                    color: inherit;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .language-switcher:hover {
                    background: var(--surface-hover);
                }
                "#}
            </style>
        </button>
    }
}
