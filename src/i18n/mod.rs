//! English/Arabic text lookup with a persisted language choice.
//!
//! The current language is loaded once by [`LanguageProvider`] and handed to
//! components through context. Changing it persists the choice and flips the
//! document direction.

mod translations;

use log::{info, warn};
use yew::prelude::*;

use crate::config::LANGUAGE_STORAGE_KEY;
use crate::{dom, storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Language::Ar
    }

    pub fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => translations::EN,
            Language::Ar => translations::AR,
        }
    }
}

/// Look up `key` for `language`, falling back to the key itself.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    language
        .table()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
        .unwrap_or(key)
}

/// Persisted language, or the default when nothing valid is stored.
pub fn load_language() -> Language {
    storage::load(LANGUAGE_STORAGE_KEY)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

/// Persist `language` and point the document at its `lang`/`dir`.
pub fn apply_language(language: Language) {
    storage::save(LANGUAGE_STORAGE_KEY, language.code());
    if let Some(root) = dom::document_element() {
        let _ = root.set_attribute("lang", language.code());
        let _ = root.set_attribute("dir", language.dir());
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub set_language: Callback<Language>,
}

impl LanguageContext {
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.language, key)
    }

    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }

    fn detached() -> Self {
        Self {
            language: Language::default(),
            set_language: Callback::from(|_| warn!("set_language called without a LanguageProvider")),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let language = use_state_eq(load_language);

    use_effect_with_deps(
        |language: &Language| {
            info!("Language set to {}", language.code());
            apply_language(*language);
            || ()
        },
        *language,
    );

    let set_language = {
        let language = language.clone();
        Callback::from(move |next: Language| language.set(next))
    };

    let context = LanguageContext {
        language: *language,
        set_language,
    };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            { props.children.clone() }
        </ContextProvider<LanguageContext>>
    }
}

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_else(|| {
        warn!("use_language called outside LanguageProvider, using defaults");
        LanguageContext::detached()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_fallback() {
        assert_eq!(translate(Language::En, "nav.home"), "Home");
        assert_eq!(translate(Language::Ar, "nav.home"), "الرئيسية");
        assert_eq!(translate(Language::Ar, "missing.key"), "missing.key");
    }

    #[test]
    fn test_direction() {
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::Ar.dir(), "rtl");
        assert!(Language::Ar.is_rtl());
        assert_eq!(Language::En.toggled(), Language::Ar);
        assert_eq!(Language::Ar.toggled(), Language::En);
    }

    #[test]
    fn test_codes_round_trip() {
        assert_eq!(Language::from_code("ar"), Some(Language::Ar));
        assert_eq!(Language::from_code(" en "), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_tables_cover_same_keys() {
        let en: Vec<&str> = translations::EN.iter().map(|(k, _)| *k).collect();
        let ar: Vec<&str> = translations::AR.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, ar);

        let mut unique = en.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), en.len(), "duplicate translation key");
    }
}
