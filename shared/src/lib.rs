//! Platform-neutral core of the sign-in portal.
//!
//! Everything here compiles and tests without a browser: the wire types the
//! backend speaks, the user profile model, and the session state machine
//! together with the effect runner that drives it through the [`Browser`]
//! capability trait.

pub mod api;
pub mod browser;
pub mod error;
pub mod models;
pub mod session;

pub use browser::{Browser, CredentialedRequest, HttpResponse, Method, Navigation, Page};
pub use error::{AuthFailure, LogoutError, TransportError};
pub use models::{Avatar, UserProfile};
pub use session::{
    begin_login, transition, CallbackParams, Cancellation, Effect, Event, MountGuard,
    SessionRunner, SessionState, SessionStatus, Tone,
};
