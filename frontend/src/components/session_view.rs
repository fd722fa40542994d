use portal_shared::{SessionState, SessionStatus};
use yew::prelude::*;

use crate::components::profile_card::ProfileCard;
use crate::components::signed_out::SignedOut;
use crate::components::status_banner::StatusBanner;

#[derive(Properties, PartialEq)]
pub struct SessionViewProps {
    pub state: SessionState,
    #[prop_or_default]
    pub on_logout: Callback<MouseEvent>,
    #[prop_or_default]
    pub logging_out: bool,
}

/// Renders one resolved (or resolving) session state.
#[function_component(SessionView)]
pub fn session_view(props: &SessionViewProps) -> Html {
    let state = &props.state;

    let body = match &state.status {
        SessionStatus::Loading => html! {
            <div class="loading">
                <div class="spinner"></div>
                <p>{ "Verifying your session..." }</p>
                <p class="hint">{ "Please wait a moment" }</p>
            </div>
        },
        SessionStatus::Authenticated(user) => html! {
            <ProfileCard
                user={user.clone()}
                on_logout={props.on_logout.clone()}
                logging_out={props.logging_out}
            />
        },
        SessionStatus::UnauthenticatedError(_) => html! {
            <SignedOut
                title="No Active Session"
                detail="You are not currently authenticated. Please log in to access your account."
            />
        },
        SessionStatus::Cancelled(_) => html! {
            <SignedOut
                title="Login Cancelled"
                detail="Google sign-in was cancelled before it completed. You can try again at any time."
            />
        },
    };

    html! {
        <div class="status-page">
            <div class="container">
                <header class="status-header">
                    <div>
                        <h1>{ "Authentication Status" }</h1>
                        <p class="subtitle">{ "Secure Google OAuth 2.0 with HttpOnly Cookies" }</p>
                    </div>
                    <StatusBanner tone={state.tone()} message={state.message()} />
                </header>

                <div class="card">
                    { body }
                    <footer class="card-footer">
                        <p>{ "Built with Rust & Yew" }</p>
                        <p>{ format!("Session: {}", if state.is_active() { "Active" } else { "Inactive" }) }</p>
                    </footer>
                </div>

                if state.is_active() {
                    <p class="note">
                        { "Your session is secured with HttpOnly cookies. These cookies cannot be accessed by client-side scripts." }
                    </p>
                }
            </div>
        </div>
    }
}
