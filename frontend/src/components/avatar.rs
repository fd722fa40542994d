use portal_shared::{Avatar as AvatarKind, UserProfile};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub user: UserProfile,
}

/// Profile picture, or the user's initials when there is none.
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let user = &props.user;

    html! {
        <div class="avatar">
            {match user.avatar() {
                AvatarKind::Picture(src) => html! {
                    <img class="avatar-img" src={src} alt={user.name.clone()} />
                },
                AvatarKind::Initials(initials) => html! {
                    <div class="avatar-initials">
                        <span>{ initials }</span>
                    </div>
                },
            }}
            <span class="avatar-check">{ "✓" }</span>
        </div>
    }
}
