use actix_web::http::header::ContentType;
use actix_web::web;
use actix_web::HttpResponse;
use actix_web_flash_messages::IncomingFlashMessages;
use sqlx::PgPool;
use uuid::Uuid;

use crate::blurb::compose_blurb;
use crate::domain::UseCase;
use crate::persistence::find_project;
use crate::utils::error_500;

/// `GET /projects/{id}`
///
/// Public read of one blurb. An id that matches nothing (including one that
/// used to exist before a `DELETE`) gets a plain 404 page.
pub async fn project_page(
    id: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    flash_messages: IncomingFlashMessages,
) -> Result<HttpResponse, actix_web::Error> {
    let id = id.into_inner();

    let project = match find_project(&pool, id).await.map_err(error_500)? {
        Some(project) => project,
        None => {
            return Ok(HttpResponse::NotFound()
                .content_type(ContentType::html())
                .body(format!(
                    r#"<!doctype html>
<html lang="en">
  <head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8" />
    <title>Not found</title>
  </head>
  <body>
    <p>No project with id {id}.</p>
    <p><a href="/">Back to the form</a></p>
  </body>
</html>
"#
                )));
        }
    };

    // the confirmation flash from `POST /projects` lands here
    let mut notices = String::new();
    for msg in flash_messages.iter() {
        notices.push_str(&format!(
            "<p><i>{}</i></p>\n",
            htmlescape::encode_minimal(msg.content())
        ));
    }

    // tolerate a hand-edited row rather than hiding the whole page
    let use_case = match UseCase::parse(&project.use_case) {
        Ok(use_case) => use_case.label(),
        Err(_) => project.use_case.clone(),
    };

    let body = format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8" />
    <title>{title}</title>
  </head>
  <body>
    {notices}
    <h1>{title}</h1>
    <p>{blurb}</p>
    <p><i>Use case: {use_case}</i></p>
    <p><a href="/">Post another</a></p>
  </body>
</html>
"#,
        title = htmlescape::encode_minimal(&project.name),
        blurb = htmlescape::encode_minimal(&compose_blurb(&project)),
        use_case = htmlescape::encode_minimal(&use_case),
    );

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
