use portal_shared::UserProfile;
use yew::prelude::*;

use crate::components::avatar::Avatar;

#[derive(Properties, PartialEq)]
pub struct ProfileCardProps {
    pub user: UserProfile,
    pub on_logout: Callback<MouseEvent>,
    /// Disables the logout button while a logout request is in flight
    #[prop_or_default]
    pub logging_out: bool,
}

#[function_component(ProfileCard)]
pub fn profile_card(props: &ProfileCardProps) -> Html {
    let user = &props.user;

    html! {
        <div class="profile">
            <div class="profile-header">
                <Avatar user={user.clone()} />
                <div class="profile-info">
                    <h2 class="profile-name">{ &user.name }</h2>
                    <div class="profile-email">{ &user.email }</div>
                    <div class="profile-badges">
                        <span class="badge badge-provider">{ "Google OAuth" }</span>
                        <span class="badge badge-session">{ "Secure Session" }</span>
                    </div>
                </div>
                <button
                    class="btn btn-secondary btn-logout"
                    onclick={props.on_logout.clone()}
                    disabled={props.logging_out}
                >
                    { if props.logging_out { "Logging out..." } else { "Logout" } }
                </button>
            </div>

            <div class="session-details">
                <h3>{ "Session Information" }</h3>
                <div class="details-grid">
                    <div class="detail-card">
                        <h4>{ "User ID" }</h4>
                        <p class="mono">{ &user.sub }</p>
                    </div>
                    <div class="detail-card">
                        <h4>{ "Security Features" }</h4>
                        <ul>
                            <li>{ "HttpOnly Secure Cookies" }</li>
                            <li>{ "Server-side Token Validation" }</li>
                            <li>{ "OAuth 2.0 Compliance" }</li>
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
