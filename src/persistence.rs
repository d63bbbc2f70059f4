use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::NewProject;

// The three operations below are deliberately pass-through: one query each,
// no business logic, errors propagated to the caller. Both the browser flow
// and the JSON API go through them.
//
// The runtime query API (`query`/`query_as` + `bind`) is used instead of the
// `query!` macros, which would tie every build to a live DATABASE_URL or a
// prepared-query cache.

/// A stored pitch, as selected from the `projects` table. Serialises
/// directly as the API representation.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub bio: String,
    /// Canonical use-case token; parsed on the way in, so re-parsing on the
    /// way out should only fail if the table was edited by hand
    pub use_case: String,
    pub authority: String,
    pub metrics: String,
    pub created_at: DateTime<Utc>,
}

/// `INSERT` a parsed submission under a fresh v4 uuid, returning the stored
/// row (the caller redirects to, or responds with, the new record).
#[tracing::instrument(name = "INSERTing new project into db", skip(pool, new_project))]
pub async fn insert_project(
    pool: &PgPool,
    new_project: &NewProject,
) -> Result<Project, sqlx::Error> {
    let project = Project {
        id: Uuid::new_v4(),
        name: new_project.name.as_ref().to_owned(),
        bio: new_project.bio.as_ref().to_owned(),
        use_case: new_project.use_case.as_str().to_owned(),
        authority: new_project.authority.as_ref().to_owned(),
        metrics: new_project.metrics.as_ref().to_owned(),
        created_at: Utc::now(),
    };

    sqlx::query(
        "
    INSERT INTO projects (id, name, bio, use_case, authority, metrics, created_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
",
    )
    .bind(project.id)
    .bind(&project.name)
    .bind(&project.bio)
    .bind(&project.use_case)
    .bind(&project.authority)
    .bind(&project.metrics)
    .bind(project.created_at)
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("bad query: {e:?}");
        e
    })?;

    Ok(project)
}

/// `SELECT` one row by id. Absence is a normal outcome (`None`), not an
/// error; the callers turn it into a 404.
#[tracing::instrument(name = "SELECTing project from db", skip(pool))]
pub async fn find_project(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "
    SELECT id, name, bio, use_case, authority, metrics, created_at
    FROM projects WHERE id = $1
",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        tracing::error!("bad query: {e:?}");
        e
    })
}

/// `DELETE` one row by id. Returns whether a row was actually removed, so
/// the caller can distinguish a no-op from a deletion.
#[tracing::instrument(name = "DELETEing project from db", skip(pool))]
pub async fn delete_project(
    pool: &PgPool,
    id: Uuid,
) -> Result<bool, sqlx::Error> {
    let done = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            tracing::error!("bad query: {e:?}");
            e
        })?;
    Ok(done.rows_affected() > 0)
}
