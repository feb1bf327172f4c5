//! Authentication UI: the session context provider plus the login form and
//! user menu built on it.

mod context;
mod login_form;
mod user_menu;

pub use context::{
    SessionContext, SessionState, provide_session_context, use_session_context,
};
pub use login_form::LoginForm;
pub use user_menu::UserMenu;
