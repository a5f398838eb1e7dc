use yew::prelude::*;

use crate::components::careers::Careers;

#[function_component(CareersPage)]
pub fn careers_page() -> Html {
    html! {
        <main class="careers-page">
            <Careers />
            <style>
                {r#"
                .careers-page {
                    padding-top: 80px;
                }
                "#}
            </style>
        </main>
    }
}
