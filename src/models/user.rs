use serde::Serialize;

/// An authenticated account. Threaded explicitly into every catalog,
/// recorder and analytics call; nothing below the shell keeps ambient
/// session state.
#[derive(Debug, Clone, Serialize)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
}
