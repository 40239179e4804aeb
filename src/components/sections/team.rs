use yew::prelude::*;

use crate::components::animated::Animated;
use crate::components::section_heading::SectionHeading;
use crate::content::{TeamMember, TEAM};
use crate::i18n::use_language;

fn social_links(member: &TeamMember) -> Html {
    let links = [
        ("LinkedIn", member.linkedin.map(str::to_string)),
        ("Twitter", member.twitter.map(str::to_string)),
        ("GitHub", member.github.map(str::to_string)),
        ("Email", member.email.map(|address| format!("mailto:{}", address))),
    ];

    html! {
        <div class="team-social">
            {
                for links.into_iter().filter_map(|(label, href)| {
                    href.map(|href| html! {
                        <a href={href} class="link" aria-label={label}>{ label }</a>
                    })
                })
            }
        </div>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    let lang = use_language();

    html! {
        <section id="team" class="section">
            <SectionHeading
                subtitle={lang.t("team.subtitle")}
                title={lang.t("team.title")}
                description={lang.t("team.description")}
            />
            <div class="card-grid team-grid">
                {
                    for TEAM.iter().enumerate().map(|(i, member)| html! {
                        <Animated kind="slide-up" delay={0.1 * i as f64}>
                            <article class="card team-card">
                                <div class="team-avatar">{ member.initials() }</div>
                                <h3>{ member.name }</h3>
                                <p class="team-role">{ member.role }</p>
                                <p class="card-text">{ member.bio }</p>
                                { social_links(member) }
                            </article>
                        </Animated>
                    })
                }
            </div>
            <style>
                {r#"
                .team-grid {
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                }
                .team-card {
                    text-align: center;
                }
                .team-avatar {
                    width: 5rem;
                    height: 5rem;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    background: linear-gradient(135deg, var(--primary), var(--accent));
                }
                .team-role {
                    color: var(--primary);
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                }
                .team-social {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-top: 1rem;
                    font-size: 0.85rem;
                }
                "#}
            </style>
        </section>
    }
}
