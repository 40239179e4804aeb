use log::{info, warn};
use yew::prelude::*;

use crate::config::THEME_STORAGE_KEY;
use crate::{dom, storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn code(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub fn load_theme() -> Theme {
    storage::load(THEME_STORAGE_KEY)
        .and_then(|code| Theme::from_code(&code))
        .unwrap_or_default()
}

pub fn apply_theme(theme: Theme) {
    storage::save(THEME_STORAGE_KEY, theme.code());
    if let Some(root) = dom::document_element() {
        let _ = root
            .class_list()
            .toggle_with_force("dark", theme == Theme::Dark);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub set_theme: Callback<Theme>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state_eq(load_theme);

    use_effect_with_deps(
        |theme: &Theme| {
            info!("Theme set to {}", theme.code());
            apply_theme(*theme);
            || ()
        },
        *theme,
    );

    let set_theme = {
        let theme = theme.clone();
        Callback::from(move |next: Theme| theme.set(next))
    };

    html! {
        <ContextProvider<ThemeContext> context={ThemeContext { theme: *theme, set_theme }}>
            { props.children.clone() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| {
        warn!("use_theme called outside ThemeProvider, using defaults");
        ThemeContext {
            theme: Theme::default(),
            set_theme: Callback::noop(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Theme::from_code("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_code("sepia"), None);
        assert_eq!(Theme::Dark.code(), "dark");
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
