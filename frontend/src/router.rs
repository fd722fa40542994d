use portal_shared::Page;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{login::Login, not_found::NotFound, status::AuthStatus};

#[derive(Debug, Clone, Copy, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/auth/success")]
    Status,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Login => Route::Login,
            Page::Status => Route::Status,
        }
    }
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Login => html! { <Login /> },
        Route::Status => html! { <AuthStatus /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
