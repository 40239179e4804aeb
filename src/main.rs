use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod carousel;
mod config;
mod contact;
mod content;
mod dom;
mod hooks;
mod i18n;
mod storage;
mod theme;
mod components {
    pub mod animated;
    pub mod footer;
    pub mod header;
    pub mod language_switcher;
    pub mod layout;
    pub mod section_heading;
    pub mod sections {
        pub mod about;
        pub mod contact;
        pub mod hero;
        pub mod projects;
        pub mod services;
        pub mod team;
        pub mod testimonials;
    }
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::layout::Layout;
use i18n::LanguageProvider;
use pages::{home::Home, not_found::NotFound};
use theme::ThemeProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <LanguageProvider>
                <BrowserRouter>
                    <Layout>
                        <Switch<Route> render={switch} />
                    </Layout>
                </BrowserRouter>
            </LanguageProvider>
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        error!("error initializing log: {}", err);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
