use actix_web::web;
use actix_web::HttpResponse;
use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use super::ApiError;
use crate::domain::NewProject;
use crate::persistence;
use crate::routes::ProjectInput;

// The API is deliberately unauthenticated, like the original procedures it
// replaces; only the browser form requires a session.

/// `POST /api/projects`
///
/// 201 with the stored record (id and timestamp included) on success, 400
/// with the first failing field's message otherwise
#[tracing::instrument(name = "Creating a project over the API", skip(input, pool))]
pub async fn create_project(
    input: web::Json<ProjectInput>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let new_project: NewProject = input.0.try_into().map_err(ApiError::ValidationError)?;
    let project = persistence::insert_project(&pool, &new_project)
        .await
        .context("Failed to store the new project")?;
    Ok(HttpResponse::Created().json(project))
}

/// `GET /api/projects/{id}`
#[tracing::instrument(name = "Fetching a project over the API", skip(pool))]
pub async fn project_by_id(
    id: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let project = persistence::find_project(&pool, id)
        .await
        .context("Failed to query the projects table")?
        .ok_or(ApiError::NotFound(id))?;
    Ok(HttpResponse::Ok().json(project))
}

/// `DELETE /api/projects/{id}`
///
/// 204 once the row is gone; deleting an id that never existed (or was
/// already deleted) is a 404, not a silent success
#[tracing::instrument(name = "Deleting a project over the API", skip(pool))]
pub async fn delete_project(
    id: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let deleted = persistence::delete_project(&pool, id)
        .await
        .context("Failed to delete from the projects table")?;
    match deleted {
        true => Ok(HttpResponse::NoContent().finish()),
        false => Err(ApiError::NotFound(id)),
    }
}
