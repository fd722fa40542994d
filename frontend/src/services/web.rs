use async_trait::async_trait;
use gloo::utils::window;
use gloo_net::http::Request;
use portal_shared::{
    Browser, CredentialedRequest, HttpResponse, Method, Navigation, TransportError,
};
use web_sys::RequestCredentials;
use yew_router::prelude::Navigator;

use crate::router::Route;

/// [`Browser`] backed by `window.location` and `fetch` with
/// `credentials: "include"`, so the backend's HttpOnly cookie rides along.
#[derive(Clone)]
pub struct WebBrowser {
    navigator: Option<Navigator>,
}

impl WebBrowser {
    /// Internal navigation goes through `navigator` when one is available and
    /// falls back to a full page load otherwise.
    pub fn new(navigator: Option<Navigator>) -> Self {
        Self { navigator }
    }
}

#[async_trait(?Send)]
impl Browser for WebBrowser {
    fn current_url(&self) -> String {
        window().location().href().unwrap_or_else(|e| {
            tracing::error!("Failed to read location: {:?}", e);
            String::new()
        })
    }

    fn navigate(&self, to: Navigation) {
        match to {
            Navigation::External(url) => set_href(&url),
            Navigation::Internal(page) => match &self.navigator {
                Some(navigator) => navigator.push(&Route::from(page)),
                None => set_href(page.path()),
            },
        }
    }

    async fn send(&self, request: CredentialedRequest) -> Result<HttpResponse, TransportError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };

        let response = builder
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

fn set_href(url: &str) {
    if let Err(e) = window().location().set_href(url) {
        tracing::error!("Failed to navigate to {}: {:?}", url, e);
    }
}
