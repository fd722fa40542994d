use crate::api::{self, ErrorResponse, LogoutResponse, MeResponse, LOGOUT_PATH, ME_PATH};
use crate::browser::{Browser, CredentialedRequest, Navigation};
use crate::error::{AuthFailure, LogoutError};
use crate::models::UserProfile;

use super::guard::MountGuard;
use super::machine::{transition, CallbackParams, Effect, Event, SessionState, SessionStatus};

/// Send the whole browser to the backend's login endpoint.
pub fn begin_login<B: Browser + ?Sized>(browser: &B, login_url: &str) {
    tracing::info!("Redirecting to login: {}", login_url);
    browser.navigate(Navigation::External(login_url.to_string()));
}

/// Executes the effects requested by [`transition`] against a [`Browser`].
pub struct SessionRunner<B> {
    browser: B,
    api_base_url: String,
}

impl<B: Browser> SessionRunner<B> {
    pub fn new(browser: B, api_base_url: impl Into<String>) -> Self {
        Self {
            browser,
            api_base_url: api_base_url.into(),
        }
    }

    /// Resolve the status for a fresh mount of the status view.
    ///
    /// Issues at most one session check. Returns `None` when the view was
    /// unmounted before the check completed.
    pub async fn resolve(&self, guard: &MountGuard) -> Option<SessionState> {
        let params = CallbackParams::from_url(&self.browser.current_url());
        let (state, effect) = transition(SessionState::default(), Event::Mounted(params));

        if effect != Some(Effect::CheckSession) {
            if let SessionStatus::Cancelled(cancellation) = &state.status {
                tracing::info!("Login cancelled (reason: {:?})", cancellation.reason);
            }
            return guard.is_live().then_some(state);
        }

        let outcome = self.check_session().await;
        if !guard.is_live() {
            tracing::debug!("Status view unmounted, discarding session check result");
            return None;
        }

        let (state, _) = transition(state, Event::SessionChecked(outcome));
        Some(state)
    }

    /// Log out of an authenticated session.
    ///
    /// On confirmation the browser is sent to the login page and `None` is
    /// returned since the view is going away. On failure the returned state is
    /// still authenticated and carries the logout error.
    pub async fn logout(&self, state: SessionState, guard: &MountGuard) -> Option<SessionState> {
        let (state, effect) = transition(state, Event::LogoutRequested);
        if effect != Some(Effect::Logout) {
            return Some(state);
        }

        let outcome = self.request_logout().await;
        if !guard.is_live() {
            tracing::debug!("Status view unmounted, discarding logout result");
            return None;
        }

        match transition(state, Event::LogoutFinished(outcome)) {
            (_, Some(Effect::Navigate(page))) => {
                self.browser.navigate(Navigation::Internal(page));
                None
            }
            (state, _) => Some(state),
        }
    }

    async fn check_session(&self) -> Result<UserProfile, AuthFailure> {
        let url = api::endpoint(&self.api_base_url, ME_PATH);
        let response = self
            .browser
            .send(CredentialedRequest::get(url))
            .await
            .map_err(|e| {
                tracing::error!("Session check failed: {}", e);
                AuthFailure::from(e)
            })?;

        if !response.is_success() {
            match serde_json::from_str::<ErrorResponse>(&response.body) {
                Ok(body) => tracing::warn!(
                    "Session check rejected: {} ({})",
                    response.status,
                    body.error
                ),
                Err(_) => tracing::warn!("Session check rejected: {}", response.status),
            }
            return Err(AuthFailure::Rejected {
                status: response.status,
            });
        }

        let body: MeResponse = serde_json::from_str(&response.body).map_err(|e| {
            tracing::error!("Failed to parse session response: {}", e);
            AuthFailure::Network {
                detail: format!("malformed session response: {}", e),
            }
        })?;

        tracing::info!("Session active for {}", body.user.email);
        Ok(body.user)
    }

    async fn request_logout(&self) -> Result<(), LogoutError> {
        let url = api::endpoint(&self.api_base_url, LOGOUT_PATH);
        let response = self
            .browser
            .send(CredentialedRequest::post(url))
            .await
            .map_err(|e| {
                tracing::error!("Logout request failed: {}", e);
                LogoutError::from(e)
            })?;

        if !response.is_success() {
            tracing::warn!("Logout rejected: {}", response.status);
            return Err(LogoutError::Rejected {
                status: response.status,
            });
        }

        if let Ok(body) = serde_json::from_str::<LogoutResponse>(&response.body) {
            tracing::debug!("Logout confirmed: {:?}", body.msg);
        }
        Ok(())
    }
}
