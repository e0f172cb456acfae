mod config;
mod download;
mod env_variable_utils;
mod logger;
mod router;
mod search;

use crate::config::AppConfig;
use crate::env_variable_utils::is_debug_mode;
use crate::logger::init_logger;
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    html! {
        <BrowserRouter>
            <Switch<Route> render={move |route: Route| switch(route, &config)} />
        </BrowserRouter>
    }
}

fn main() {
    init_logger(is_debug_mode());
    let config = AppConfig::from_env();

    log::info!(
        "NAME: \"{}\", API KEY: {}, DEBUG: \"{}\"",
        config.app_name,
        if config.client.is_ok() { "set" } else { "missing" },
        config.debug
    );
    if let Err(e) = &config.client {
        log::error!("{e}; searches will fail until it is provided");
    }

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
