use yew::prelude::*;

use crate::components::sections::{
    about::About, contact::Contact, hero::Hero, projects::Projects, services::Services,
    team::Team, testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <Hero />
            <Services />
            <Projects />
            <About />
            <Team />
            <Testimonials />
            <Contact />
        </main>
    }
}
