use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod hooks;
mod particles;
mod scroll;
mod theme;

mod components {
    pub mod cyber_button;
    pub mod game_nav;
    pub mod loading_screen;
    pub mod particle_grid;
    pub mod section_header;
    pub mod section_page;
    pub mod xp_progress_bar;
}

mod sections {
    pub mod achievements;
    pub mod booking;
    pub mod character;
    pub mod contact;
    pub mod experiences;
    pub mod gallery;
    pub mod hero;
    pub mod missions;
    pub mod power_ups;
    pub mod pricing;
    pub mod skill_tree;
    pub mod testimonials;
}

mod pages {
    pub mod gallery;
    pub mod home;
    pub mod not_found;
    pub mod portfolio;
}

use pages::{gallery::GalleryPage, home::Home, not_found::NotFound, portfolio::Portfolio};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/portfolio")]
    Portfolio,
    #[at("/gallery")]
    Gallery,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        }
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <GalleryPage /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <style>{ theme::GLOBAL_CSS }</style>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::get_log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
