use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod animation;
mod config;
mod dom;
mod error;
mod inquiry;
mod components {
    pub mod active_nav;
    pub mod contact;
    pub mod faq;
    pub mod hero;
    pub mod navbar;
    pub mod reveal;
    pub mod smooth_scroll;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{
    home::Home,
    not_found::NotFound,
};

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
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting ComidApp landing");
    yew::Renderer::<App>::new().render();
}
