use portal_shared::begin_login;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::services::web::WebBrowser;

#[function_component(Login)]
pub fn login() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();

    let on_login = Callback::from(move |_: MouseEvent| {
        begin_login(&WebBrowser::new(None), &config.login_url);
    });

    html! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-title">{ "Google Login Portal" }</h1>
                <p class="login-subtitle">{ "Sign in using your Google account" }</p>
                <button class="btn btn-primary btn-login" onclick={on_login}>
                    { "Login with Google" }
                </button>
                <p class="login-footer">{ "Secure OAuth • Rust • Yew" }</p>
            </div>
        </div>
    }
}
