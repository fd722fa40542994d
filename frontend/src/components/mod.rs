pub mod avatar;
pub mod profile_card;
pub mod session_view;
pub mod signed_out;
pub mod status_banner;
