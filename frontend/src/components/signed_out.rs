use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct SignedOutProps {
    pub title: AttrValue,
    pub detail: AttrValue,
}

/// Panel shown when no session could be established, with a way back to login.
#[function_component(SignedOut)]
pub fn signed_out(props: &SignedOutProps) -> Html {
    html! {
        <div class="empty-state">
            <div class="empty-icon">{ "👤" }</div>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.detail.clone() }</p>
            <Link<Route> to={Route::Login}>
                <button class="btn btn-primary">{ "Go to Login" }</button>
            </Link<Route>>
        </div>
    }
}
