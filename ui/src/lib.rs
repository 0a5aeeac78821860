use payloads::APIClient;
use secrecy::SecretBox;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod contexts;
pub mod hooks;
mod logs;
pub mod pages;
pub mod state;

use components::MainLayout;
use pages::{NotFoundPage, SearchPage};

const DEFAULT_API_URL: &str = "https://www.omdbapi.com";

// Movie API client - address and key are baked in at build time
pub fn get_api_client() -> APIClient {
    let address = option_env!("MOVIE_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .to_string();
    let api_key = option_env!("MOVIE_API_KEY").unwrap_or_default().to_string();

    APIClient {
        address,
        api_key: SecretBox::new(Box::new(api_key)),
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

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
        Route::Home => html! { <MainLayout><SearchPage /></MainLayout> },
        Route::NotFound => html! { <MainLayout><NotFoundPage /></MainLayout> },
    }
}

/// Set up console logging and mount the app on the document body.
pub fn run() {
    logs::init_logging();
    yew::Renderer::<App>::new().render();
}
