use portal_shared::{MountGuard, SessionRunner, SessionState};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::session_view::SessionView;
use crate::config::AppConfig;
use crate::services::web::WebBrowser;

/// OAuth callback page: resolves the session for each query string it is
/// shown with and renders the result.
#[function_component(AuthStatus)]
pub fn auth_status() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let navigator = use_navigator();
    let query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();
    let state = use_state(SessionState::default);
    let logging_out = use_state(|| false);
    let mount = use_memo((), |_| MountGuard::new());

    // Released on unmount; gates logout results
    {
        let mount = (*mount).clone();
        use_effect_with((), move |_| move || mount.release());
    }

    // Resolve the session, again whenever the query changes
    {
        let state = state.clone();
        let runner = SessionRunner::new(
            WebBrowser::new(navigator.clone()),
            config.api_base_url.clone(),
        );

        use_effect_with(query, move |query| {
            tracing::debug!("Resolving session for query {:?}", query);
            if !state.is_loading() {
                state.set(SessionState::default());
            }

            let resolution = MountGuard::new();
            let task_guard = resolution.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(resolved) = runner.resolve(&task_guard).await {
                    tracing::info!("Session resolved: {}", resolved.message());
                    state.set(resolved);
                }
            });
            move || resolution.release()
        });
    }

    let on_logout = {
        let state = state.clone();
        let logging_out = logging_out.clone();
        let mount = (*mount).clone();
        let api_base_url = config.api_base_url.clone();
        Callback::from(move |_: MouseEvent| {
            if *logging_out {
                return;
            }
            let state = state.clone();
            let logging_out = logging_out.clone();
            let mount = mount.clone();
            let runner = SessionRunner::new(WebBrowser::new(navigator.clone()), api_base_url.clone());
            let current = (*state).clone();

            logging_out.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(next) = runner.logout(current, &mount).await {
                    logging_out.set(false);
                    state.set(next);
                }
            });
        })
    };

    html! {
        <SessionView state={(*state).clone()} on_logout={on_logout} logging_out={*logging_out} />
    }
}
