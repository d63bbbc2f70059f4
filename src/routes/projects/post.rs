use actix_web::web;
use actix_web::HttpResponse;
use actix_web_flash_messages::FlashMessage;
use sqlx::PgPool;

use crate::authentication::UserId;
use crate::domain::NewProject;
use crate::persistence::insert_project;
use crate::routes::ProjectInput;
use crate::utils::error_500;
use crate::utils::redirect;

/// `POST /projects`
///
/// The browser half of project creation; `reject_anonymous_users` has
/// already bounced anyone without a session, so `UserId` is always present.
///
/// A rejected field sends the submitter back to the form with the parse
/// message as a flash; a stored project redirects to its blurb page.
#[tracing::instrument(
    name = "Posting a new project",
    skip(form, pool, user_id),
    fields(posted_by=tracing::field::Empty)
)]
pub async fn submit_project(
    form: web::Form<ProjectInput>,
    pool: web::Data<PgPool>,
    user_id: web::ReqData<UserId>,
) -> Result<HttpResponse, actix_web::Error> {
    let user_id = user_id.into_inner();
    tracing::Span::current().record("posted_by", tracing::field::display(user_id));

    let new_project: NewProject = match form.0.try_into() {
        Ok(new_project) => new_project,
        Err(msg) => {
            FlashMessage::error(msg).send();
            return Ok(redirect("/"));
        }
    };

    let project = insert_project(&pool, &new_project)
        .await
        .map_err(error_500)?;

    FlashMessage::info("Your blurb is ready.").send();
    Ok(redirect(&format!("/projects/{}", project.id)))
}
