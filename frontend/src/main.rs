mod components;
mod config;
mod pages;
mod router;
mod services;

use yew::prelude::*;
use yew_router::{BrowserRouter, Switch};

use crate::config::AppConfig;
use crate::router::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::load());

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <BrowserRouter>
                <div id="app">
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
