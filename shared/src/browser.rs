//! The capability seam between the session flow and the browser.
//!
//! The web build implements [`Browser`] with `window.location` and a
//! credentialed `fetch`; tests implement it with an in-memory fake.

use async_trait::async_trait;

use crate::error::TransportError;

/// Client-side pages the session flow can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Status,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Status => "/auth/success",
        }
    }
}

/// Where to send the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Full page load of a URL outside this application
    External(String),
    /// Client-side route change
    Internal(Page),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request sent with the browser's cookies attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialedRequest {
    pub method: Method,
    pub url: String,
}

impl CredentialedRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Ambient browser state the session flow depends on.
#[async_trait(?Send)]
pub trait Browser {
    /// Full URL of the current page, query string included.
    fn current_url(&self) -> String;

    fn navigate(&self, to: Navigation);

    /// Perform a request that carries the session cookie.
    async fn send(&self, request: CredentialedRequest) -> Result<HttpResponse, TransportError>;
}
