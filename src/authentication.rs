// Browser-facing, session-based authentication only: the JSON API stays
// public (the original exposed its procedures publicly and only the posting
// form was gated), so there is no token or header scheme here.

mod middleware;

use anyhow::Context;
use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordVerifier;
pub use middleware::reject_anonymous_users;
pub use middleware::UserId;
use secrecy::ExposeSecret;
use secrecy::Secret;
use sqlx::PgPool;
use uuid::Uuid;

use crate::telemetry::spawn_blocking_with_tracing;

pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials(#[source] anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

/// Look up the PHC-format password hash stored for `username`. Users are
/// provisioned out-of-band (see the users migration); there is no self-serve
/// registration to race against.
#[tracing::instrument(name = "Getting stored credentials", skip(username, pool))]
async fn get_stored_credentials(
    username: &str,
    pool: &PgPool,
) -> Result<Option<(Uuid, Secret<String>)>, anyhow::Error> {
    let row = sqlx::query_as::<_, (Uuid, String)>(
        "
    SELECT user_id, password_hash FROM users
    WHERE username = $1
",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
    .context("Failed to query the users table")?
    .map(|(user_id, password_hash)| (user_id, Secret::new(password_hash)));
    Ok(row)
}

/// Argon2 verification; CPU-bound and slow on purpose, so callers run it on
/// the blocking pool
fn verify_password(
    supplied_password: Secret<String>,
    stored_password_hash: Secret<String>,
) -> Result<(), AuthError> {
    let stored_password_hash = PasswordHash::new(stored_password_hash.expose_secret())
        .context("Failed to parse stored PHC string")
        .map_err(AuthError::UnexpectedError)?;
    Argon2::default()
        .verify_password(
            supplied_password.expose_secret().as_bytes(),
            &stored_password_hash,
        )
        .context("Invalid password")
        .map_err(AuthError::InvalidCredentials)
}

/// Check `creds` against the `users` table, returning the user's id.
///
/// An unknown username still runs a full verification against a dummy hash
/// (same parameters as real ones), so the response time does not reveal
/// which usernames exist.
#[tracing::instrument(name = "Validating credentials", skip(creds, pool))]
pub async fn validate_credentials(
    creds: Credentials,
    pool: &PgPool,
) -> Result<Uuid, AuthError> {
    let (user_id, stored_password_hash) = match get_stored_credentials(&creds.username, pool)
        .await?
    {
        Some((user_id, hash)) => (Some(user_id), hash),
        None => (
            None,
            Secret::new(
                "$argon2id$v=19$m=19456,t=2,p=1\
                $c3RhcnR1cGJsdXJic2FsdA\
                $c3RhcnR1cGJsdXJiZHVtbXloYXNodmFsdWUzMmJ5dGU"
                    .to_string(),
            ),
        ),
    };

    spawn_blocking_with_tracing(move || verify_password(creds.password, stored_password_hash))
        .await
        .context("Failed to spawn blocking verification task")
        .map_err(AuthError::UnexpectedError)??;

    // can only be `None` when the dummy verification somehow passed
    user_id.ok_or_else(|| AuthError::InvalidCredentials(anyhow::anyhow!("Unknown username")))
}

/// Username for a signed-in user's id; the form page greets them with it
#[tracing::instrument(name = "Getting username", skip(pool))]
pub async fn get_username(
    user_id: Uuid,
    pool: &PgPool,
) -> Result<String, anyhow::Error> {
    let (username,): (String,) = sqlx::query_as(
        "
    SELECT username FROM users
    WHERE user_id = $1
",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
    .context(format!("No user found with id {user_id}"))?;
    Ok(username)
}
