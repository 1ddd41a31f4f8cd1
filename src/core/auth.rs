use crate::db::log::ltlog;
use crate::db::pool::DbPool;
use crate::db::queries::{find_user_credentials, insert_user};
use crate::errors::{AppError, AppResult};
use crate::models::user::AuthUser;
use sha2::{Digest, Sha256};

/// Account registration and login.
pub struct AuthLogic;

impl AuthLogic {
    /// Hex-encoded SHA-256 digest of the UTF-8 password text.
    /// Only digests are ever stored or compared.
    pub fn hash_password(password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        hex::encode(hasher.finalize())
    }

    pub fn username_taken(pool: &mut DbPool, username: &str) -> AppResult<bool> {
        Ok(find_user_credentials(&pool.conn, username.trim())?.is_some())
    }

    pub fn register(pool: &mut DbPool, username: &str, password: &str) -> AppResult<AuthUser> {
        let username = username.trim();

        if username.is_empty() {
            return Err(AppError::InvalidInput("username cannot be empty".into()));
        }
        if password.is_empty() {
            return Err(AppError::InvalidInput("password cannot be empty".into()));
        }
        if find_user_credentials(&pool.conn, username)?.is_some() {
            return Err(AppError::DuplicateName(format!("username '{}'", username)));
        }

        let id = insert_user(&pool.conn, username, &Self::hash_password(password))?;

        ltlog(
            &pool.conn,
            "register",
            username,
            &format!("Account created for '{}'", username),
        )?;

        Ok(AuthUser {
            id,
            username: username.to_string(),
        })
    }

    /// Credential check by digest comparison.
    ///
    /// A wrong password and an unknown username both return None: callers
    /// cannot tell which field was wrong, and neither can an attacker.
    pub fn login(pool: &mut DbPool, username: &str, password: &str) -> AppResult<Option<AuthUser>> {
        let username = username.trim();

        let Some((id, stored_hash)) = find_user_credentials(&pool.conn, username)? else {
            return Ok(None);
        };

        if stored_hash != Self::hash_password(password) {
            return Ok(None);
        }

        Ok(Some(AuthUser {
            id,
            username: username.to_string(),
        }))
    }
}
