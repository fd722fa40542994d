//! Session status flow of the callback page.
//!
//! [`machine`] is the pure transition function, [`runner`] executes the
//! effects it asks for against a [`Browser`](crate::Browser), and [`guard`]
//! ties async results to the view mount that started them.

pub mod guard;
pub mod machine;
pub mod runner;

pub use guard::MountGuard;
pub use machine::{
    transition, CallbackParams, Cancellation, Effect, Event, SessionState, SessionStatus, Tone,
};
pub use runner::{begin_login, SessionRunner};
