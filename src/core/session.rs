use crate::errors::{AppError, AppResult};
use crate::models::user::AuthUser;

/// Authentication state of the interactive shell.
///
/// The session is an explicit value owned by the shell loop; every core
/// operation receives the authenticated user as an argument. Nothing reads
/// ambient "current user" state.
#[derive(Debug, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(AuthUser),
}

impl Session {
    pub fn login(&mut self, user: AuthUser) {
        *self = Session::Authenticated(user);
    }

    pub fn logout(&mut self) {
        *self = Session::Anonymous;
    }

    /// The authenticated user, or NotLoggedIn while anonymous.
    pub fn current(&self) -> AppResult<&AuthUser> {
        match self {
            Session::Authenticated(user) => Ok(user),
            Session::Anonymous => Err(AppError::NotLoggedIn),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}
