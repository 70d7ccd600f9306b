//! View routing gated by the current session

use crate::session::Session;

/// Screen of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Home,
    Profile,
    Admin,
    NotFound,
}

impl View {
    /// Screen to show for `path`
    ///
    /// Protected screens fall back to the login screen without a session,
    /// the login screen forwards signed-in users to their landing screen,
    /// and the admin screen sends non-admin users home.
    pub fn resolve(path: &str, session: Option<&Session>) -> View {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match (path, session) {
            ("/" | "/login", None) => View::Login,
            ("/" | "/login", Some(session)) => session.landing(),
            ("/home" | "/profile" | "/admin", None) => View::Login,
            ("/home", Some(_)) => View::Home,
            ("/profile", Some(_)) => View::Profile,
            ("/admin", Some(session)) if session.is_admin() => View::Admin,
            ("/admin", Some(_)) => View::Home,
            _ => View::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            View::Login => "/login",
            View::Home => "/home",
            View::Profile => "/profile",
            View::Admin => "/admin",
            View::NotFound => "/404",
        }
    }
}
