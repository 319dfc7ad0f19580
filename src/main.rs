use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod hero {
    pub mod config;
    pub mod icons;
    pub mod view;
    pub mod component;
    pub mod style;
}
mod motion {
    pub mod spring;
    pub mod transform;
    pub mod parallax;
    pub mod scroll;
}
mod effects {
    pub mod countdown;
    pub mod typewriter;
    pub mod particles;
    pub mod smooth_scroll;
    pub mod navigation;
}
mod pages {
    pub mod home;
    pub mod placeholder;
}

use pages::{
    home::Home,
    placeholder::{Demo, NotFound, Signup},
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signup")]
    Signup,
    #[at("/demo")]
    Demo,
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
        Route::Signup => {
            info!("Rendering Signup page");
            html! { <Signup /> }
        },
        Route::Demo => {
            info!("Rendering Demo page");
            html! { <Demo /> }
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

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
