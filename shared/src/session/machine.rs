use std::borrow::Cow;

use url::{form_urlencoded, Url};

use crate::api::{REASON_PARAM, STATUS_CANCELLED, STATUS_PARAM};
use crate::browser::Page;
use crate::error::{AuthFailure, LogoutError};
use crate::models::UserProfile;

// ============================================================================
// Callback parameters
// ============================================================================

/// Query parameters the backend appends when redirecting to the status page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub status: Option<String>,
    pub reason: Option<String>,
}

impl CallbackParams {
    /// Read the parameters from a full URL. An unparseable URL carries none.
    pub fn from_url(url: &str) -> Self {
        match Url::parse(url) {
            Ok(parsed) => Self::from_pairs(parsed.query_pairs()),
            Err(e) => {
                tracing::debug!("Could not parse current url {:?}: {}", url, e);
                Self::default()
            }
        }
    }

    /// Read the parameters from a bare query string, with or without `?`.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    // First occurrence wins, like URLSearchParams.get
    fn from_pairs<'a>(pairs: impl Iterator<Item = (Cow<'a, str>, Cow<'a, str>)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                STATUS_PARAM if params.status.is_none() => params.status = Some(value.into_owned()),
                REASON_PARAM if params.reason.is_none() => params.reason = Some(value.into_owned()),
                _ => {}
            }
        }
        params
    }

    /// `Some` when the backend marked the login as cancelled.
    pub fn cancellation(&self) -> Option<Cancellation> {
        (self.status.as_deref() == Some(STATUS_CANCELLED)).then(|| Cancellation {
            reason: self.reason.clone(),
        })
    }
}

/// The user aborted the provider's consent screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cancellation {
    /// Provider error code forwarded by the backend, e.g. `access_denied`
    pub reason: Option<String>,
}

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Authenticated(UserProfile),
    UnauthenticatedError(AuthFailure),
    Cancelled(Cancellation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub status: SessionStatus,
    /// Set when the backend did not confirm a logout; only while authenticated
    pub logout_error: Option<LogoutError>,
}

/// Visual tone of the status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Pending,
    Success,
    Error,
    Warning,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionStatus::Loading.into()
    }
}

impl From<SessionStatus> for SessionState {
    fn from(status: SessionStatus) -> Self {
        Self {
            status,
            logout_error: None,
        }
    }
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, SessionStatus::Loading)
    }

    /// True while a signed-in user is shown.
    pub fn is_active(&self) -> bool {
        matches!(self.status, SessionStatus::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match &self.status {
            SessionStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn message(&self) -> &'static str {
        if let Some(err) = &self.logout_error {
            return err.message();
        }
        match &self.status {
            SessionStatus::Loading => "Checking authentication...",
            SessionStatus::Authenticated(_) => "Successfully authenticated",
            SessionStatus::UnauthenticatedError(failure) => failure.message(),
            SessionStatus::Cancelled(_) => "Login was cancelled",
        }
    }

    pub fn tone(&self) -> Tone {
        if self.logout_error.is_some() {
            return Tone::Error;
        }
        match &self.status {
            SessionStatus::Loading => Tone::Pending,
            SessionStatus::Authenticated(_) => Tone::Success,
            SessionStatus::UnauthenticatedError(_) => Tone::Error,
            SessionStatus::Cancelled(_) => Tone::Warning,
        }
    }
}

// ============================================================================
// Transitions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The status view mounted on a URL carrying these parameters
    Mounted(CallbackParams),
    SessionChecked(Result<UserProfile, AuthFailure>),
    LogoutRequested,
    LogoutFinished(Result<(), LogoutError>),
}

/// Side effect the runner must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CheckSession,
    Logout,
    Navigate(Page),
}

/// Apply one event. Events that do not fit the current state leave it as is.
pub fn transition(state: SessionState, event: Event) -> (SessionState, Option<Effect>) {
    match event {
        Event::Mounted(params) if state.is_loading() => match params.cancellation() {
            Some(cancellation) => (SessionStatus::Cancelled(cancellation).into(), None),
            None => (state, Some(Effect::CheckSession)),
        },
        Event::SessionChecked(outcome) if state.is_loading() => match outcome {
            Ok(user) => (SessionStatus::Authenticated(user).into(), None),
            Err(failure) => (SessionStatus::UnauthenticatedError(failure).into(), None),
        },
        Event::LogoutRequested if state.is_active() => (
            SessionState {
                logout_error: None,
                ..state
            },
            Some(Effect::Logout),
        ),
        Event::LogoutFinished(Ok(())) if state.is_active() => {
            (state, Some(Effect::Navigate(Page::Login)))
        }
        Event::LogoutFinished(Err(err)) if state.is_active() => (
            SessionState {
                logout_error: Some(err),
                ..state
            },
            None,
        ),
        event => {
            tracing::debug!("Ignoring {:?} in state {:?}", event, state.status);
            (state, None)
        }
    }
}
