use yew::prelude::*;

use crate::components::animated::Animated;
use crate::components::section_heading::SectionHeading;
use crate::content::SERVICES;
use crate::i18n::use_language;

#[function_component(Services)]
pub fn services() -> Html {
    let lang = use_language();

    html! {
        <section id="services" class="section">
            <SectionHeading
                subtitle={lang.t("services.subtitle")}
                title={lang.t("services.title")}
                description={lang.t("services.description")}
            />
            <div class="card-grid services-grid">
                {
                    for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <Animated kind="slide-up" delay={0.1 * i as f64}>
                            <article class="card service-card">
                                <div class="service-icon">{ service.icon }</div>
                                <h3>{ lang.t(service.title_key) }</h3>
                                <p class="card-text">{ lang.t(service.description_key) }</p>
                                <ul class="service-features">
                                    { for service.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                                </ul>
                            </article>
                        </Animated>
                    })
                }
            </div>
            <style>
                {r#"
                .services-grid {
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                }
                .service-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--primary-soft);
                    color: var(--primary);
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .service-features {
                    list-style: none;
                    padding: 0;
                    margin: 1rem 0 0;
                    display: grid;
                    gap: 0.4rem;
                    font-size: 0.9rem;
                }
                .service-features li::before {
                    content: "✓ ";
                    color: var(--primary);
                }
                "#}
            </style>
        </section>
    }
}
