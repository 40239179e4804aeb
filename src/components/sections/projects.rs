use yew::prelude::*;

use crate::components::animated::Animated;
use crate::components::section_heading::SectionHeading;
use crate::content::{projects_in, ProjectCategory};
use crate::i18n::use_language;

#[function_component(Projects)]
pub fn projects() -> Html {
    let lang = use_language();
    let category = use_state_eq(ProjectCategory::default);

    let tabs = ProjectCategory::ALL.iter().map(|&tab| {
        let onclick = {
            let category = category.clone();
            Callback::from(move |_: MouseEvent| category.set(tab))
        };
        html! {
            <button
                class={classes!("filter-tab", (*category == tab).then_some("active"))}
                onclick={onclick}
            >
                { lang.t(tab.label_key()) }
            </button>
        }
    });

    html! {
        <section id="projects" class="section">
            <SectionHeading
                subtitle={lang.t("projects.subtitle")}
                title={lang.t("projects.title")}
                description={lang.t("projects.description")}
            />
            <div class="filter-tabs">{ for tabs }</div>
            // Keyed by category so cards re-animate when the filter changes
            <div class="projects-body">
                <div class="card-grid projects-grid" key={category.label_key()}>
                    {
                        for projects_in(*category).enumerate().map(|(i, project)| html! {
                            <Animated kind="zoom" delay={0.1 * i as f64} key={project.title}>
                                <article class="card project-card">
                                    <div class="project-image">{ project.title.chars().next().map(String::from).unwrap_or_default() }</div>
                                    <h3>{ project.title }</h3>
                                    <p class="card-text">{ project.description }</p>
                                    <div class="tags">
                                        { for project.technologies.iter().map(|t| html! { <span class="tag">{ *t }</span> }) }
                                    </div>
                                    <div class="project-links">
                                        <a href={project.link} class="link">{ lang.t("projects.viewProject") }</a>
                                        {
                                            if let Some(github) = project.github {
                                                html! { <a href={github} class="link">{ lang.t("projects.viewCode") }</a> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                </article>
                            </Animated>
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                .filter-tabs {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-bottom: 2.5rem;
                }
                .filter-tab {
                    padding: 0.45rem 1.1rem;
                    border-radius: 999px;
                    border: 1px solid var(--border);
                    background: transparent;
                    color: inherit;
                    cursor: pointer;
                    transition: background 0.2s ease, color 0.2s ease;
                }
                .filter-tab.active {
                    background: var(--primary);
                    border-color: var(--primary);
                    color: #fff;
                }
                .projects-grid {
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                }
                .project-image {
                    height: 10rem;
                    border-radius: 0.75rem;
                    margin-bottom: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 3rem;
                    font-weight: 700;
                    color: var(--primary);
                    background: linear-gradient(135deg, var(--primary-soft), var(--accent-soft));
                }
                .project-links {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1rem;
                }
                "#}
            </style>
        </section>
    }
}
