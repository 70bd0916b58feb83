//! First-start admin provisioning.

use bellhop_core::roles::ROLE_ADMIN;
use bellhop_db::models::user::CreateUser;
use bellhop_db::repositories::UserRepo;
use bellhop_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};

/// Ensure the configured admin account exists.
///
/// Idempotent: an existing user with the same username is left untouched,
/// including its password. Returns `true` when a user was created.
pub async fn ensure_admin(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<bool> {
    if UserRepo::find_by_username(pool, &admin.username)
        .await?
        .is_some()
    {
        tracing::debug!(username = %admin.username, "Bootstrap admin already present");
        return Ok(false);
    }

    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: admin.username.clone(),
            password_hash,
            role: ROLE_ADMIN.to_string(),
            hotel_id: admin.hotel_id,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, hotel_id = user.hotel_id, "Bootstrap admin created");
    Ok(true)
}
