use yew::prelude::*;

use crate::components::{
    about::About,
    contact::Contact,
    hero::Hero,
    map::Map,
    services::Services,
    why_choose_us::WhyChooseUs,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <Hero />
            <Services />
            <About />
            <WhyChooseUs />
            <Contact />
            <Map />
        </main>
    }
}
