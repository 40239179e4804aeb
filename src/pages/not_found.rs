use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated::Animated;
use crate::i18n::use_language;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let lang = use_language();
    let location = use_location();

    {
        let path = location.map(|l| l.path().to_string()).unwrap_or_default();
        use_effect_with_deps(
            move |path: &String| {
                warn!("404: no route for {}", path);
                || ()
            },
            path,
        );
    }

    html! {
        <main class="not-found">
            <Animated kind="zoom">
                <h1 class="gradient-text">{"404"}</h1>
                <p>{ lang.t("notFound.title") }</p>
                <Link<Route> to={Route::Home} classes="button button-primary">
                    { lang.t("notFound.back") }
                </Link<Route>>
            </Animated>
            <style>
                {r#"
                .not-found {
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding-top: 5rem;
                }
                .not-found h1 {
                    font-size: 6rem;
                    margin: 0;
                }
                .not-found p {
                    font-size: 1.25rem;
                    color: var(--muted);
                    margin-bottom: 2rem;
                }
                "#}
            </style>
        </main>
    }
}
