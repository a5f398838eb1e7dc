use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod navigation;
mod contact {
    pub mod validation;
    pub mod compose;
    pub mod flow;
}
mod components {
    pub mod navbar;
    pub mod hero;
    pub mod services;
    pub mod about;
    pub mod why_choose_us;
    pub mod careers;
    pub mod contact;
    pub mod map;
    pub mod footer;
    pub mod floating_actions;
    pub mod toast;
}
mod pages {
    pub mod home;
    pub mod careers;
}

use components::{
    navbar::Navbar,
    footer::Footer,
    floating_actions::FloatingActions,
};
use pages::{
    home::Home,
    careers::CareersPage,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/careers")]
    Careers,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Careers => {
            info!("Rendering Careers page");
            html! { <CareersPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <main class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="btn-hero-primary">
                        {"Back to home"}
                    </Link<Route>>
                </main>
            }
        },
    }
}

/// Jumps back to the top whenever the path changes.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let path = use_location().map(|location| location.path().to_string());
    use_effect_with_deps(
        move |_| {
            navigation::scroll_to_top();
            || ()
        },
        path,
    );
    html! {}
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="site">
                <ScrollToTop />
                <Navbar />
                <Switch<Route> render={switch} />
                <Footer />
                <FloatingActions />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting {} site", config::PHARMACY_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_site_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/careers"), Some(Route::Careers));
    }

    #[test]
    fn nav_route_links_resolve() {
        for link in content::NAV_LINKS.iter().chain(content::QUICK_LINKS) {
            if let navigation::NavTarget::Route(path) = navigation::NavTarget::parse(link.href) {
                assert_eq!(Route::recognize(path), Some(Route::Careers), "{}", link.name);
            }
        }
    }
}
