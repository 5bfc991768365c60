use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod state {
    pub mod carousel;
    pub mod contact;
    pub mod modal;
    pub mod reveal;
    pub mod sections;
    pub mod theme;
}
mod components {
    pub mod dialog;
    pub mod header;
    pub mod loading;
    pub mod reveal;
    pub mod scroll_spy;
    pub mod scroll_top;
    pub mod toast;
}
mod sections {
    pub mod about;
    pub mod banner;
    pub mod contact;
    pub mod projects;
    pub mod recommendations;
    pub mod services;
    pub mod skills;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

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
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
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
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
