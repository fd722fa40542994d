use yew::prelude::*;

use crate::components::signed_out::SignedOut;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container">
            <SignedOut
                title="404 - Page Not Found"
                detail="The page you're looking for doesn't exist."
            />
        </div>
    }
}
