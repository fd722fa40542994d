use portal_shared::Tone;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub tone: Tone,
    pub message: AttrValue,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    let icon = match props.tone {
        Tone::Pending => html! { <span class="banner-spinner"></span> },
        Tone::Success => html! { <span class="banner-icon">{ "✓" }</span> },
        Tone::Error => html! { <span class="banner-icon">{ "✕" }</span> },
        Tone::Warning => html! { <span class="banner-icon">{ "!" }</span> },
    };

    html! {
        <div class={classes!("status-banner", format!("status-{}", props.tone.as_str()))}>
            { icon }
            <span class="status-message">{ props.message.clone() }</span>
        </div>
    }
}
