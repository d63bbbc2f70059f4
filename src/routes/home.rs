use actix_web::http::header::ContentType;
use actix_web::web;
use actix_web::HttpResponse;
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use sqlx::PgPool;

use crate::authentication::get_username;
use crate::domain::UseCase;
use crate::domain::AUTHORITY_MAX_CHARS;
use crate::domain::AUTHORITY_MIN_CHARS;
use crate::domain::BIO_MIN_CHARS;
use crate::domain::METRICS_MAX_CHARS;
use crate::domain::METRICS_MIN_CHARS;
use crate::domain::NAME_MAX_CHARS;
use crate::domain::NAME_MIN_CHARS;
use crate::session_state::TypedSession;
use crate::utils::error_500;

/// Shown for the authority field until a use case has been picked
const DEFAULT_AUTHORITY_GUIDANCE: &str = "write something impressive about your project";

#[derive(Deserialize)]
pub struct HomeQuery {
    /// Canonical use case token; anything else falls back to no selection
    use_case: Option<String>,
}

/// `GET /`
///
/// The submission form. `?use_case=FUNDRAISING` (or `RECRUITING`) preselects
/// the dropdown and swaps in the matching guidance, so links can deep-link a
/// use case. Signed-in visitors are greeted by name; everyone else gets a
/// login link (the form itself is visible to all, only `POST /projects` is
/// gated).
pub async fn home(
    query: web::Query<HomeQuery>,
    session: TypedSession,
    pool: web::Data<PgPool>,
    flash_messages: IncomingFlashMessages,
) -> Result<HttpResponse, actix_web::Error> {
    let selected = query
        .0
        .use_case
        .as_deref()
        .and_then(|token| UseCase::parse(token).ok());

    let username = match session.get_user_id().map_err(error_500)? {
        Some(user_id) => Some(get_username(user_id, &pool).await.map_err(error_500)?),
        None => None,
    };

    // validation rejections and the logout confirmation land here
    let mut notices = String::new();
    for msg in flash_messages.iter() {
        notices.push_str(&format!(
            "<p><i>{}</i></p>\n",
            htmlescape::encode_minimal(msg.content())
        ));
    }

    let body = render_form_page(selected, username.as_deref(), &notices);

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

/// Build the form page. The `minlength`/`maxlength` attributes are rendered
/// from the same constants `parse` checks against, so the browser-side and
/// server-side limits cannot drift apart.
fn render_form_page(
    selected: Option<UseCase>,
    username: Option<&str>,
    notices: &str,
) -> String {
    let mut options = format!(
        r#"<option value="" disabled{}>Choose a use case</option>"#,
        if selected.is_none() { " selected" } else { "" }
    );
    for use_case in UseCase::ALL {
        let marker = if selected == Some(use_case) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "\n          <option value=\"{}\"{marker}>{}</option>",
            use_case.as_str(),
            use_case.label(),
        ));
    }

    let authority_guidance = htmlescape::encode_attribute(
        selected
            .map(|use_case| use_case.authority_placeholder())
            .unwrap_or(DEFAULT_AUTHORITY_GUIDANCE),
    );

    let account = match username {
        Some(username) => format!(
            r#"<p>Signed in as {}.</p>
    <form name="logoutForm" action="/logout" method="post">
      <input type="submit" value="Sign out" />
    </form>"#,
            htmlescape::encode_minimal(username)
        ),
        None => r#"<p><a href="/login">Sign in</a> to post your project.</p>"#.to_owned(),
    };

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8" />
    <title>Startup Blurb</title>
  </head>
  <body>
    {account}
    {notices}
    <form action="/projects" method="post">
      <h2>The one-line elevator pitch</h2>
      <p>We'll start out with the most important part of your blurb: The
      sentence about what you do. If the recipient doesn't understand what
      you do—the rest of your blurb is useless.</p>
      <label>
        The Name of your project or product
        <input type="text" name="name" minlength="{NAME_MIN_CHARS}" maxlength="{NAME_MAX_CHARS}" required />
      </label>
      <label>
        What does your product offer?
        <textarea name="bio" minlength="{BIO_MIN_CHARS}" required></textarea>
      </label>
      <h2>Context</h2>
      <p>Let's add some authority to your blurb.</p>
      <label>
        What is the occasion for reaching out?
        <select name="use_case" required>
          {options}
        </select>
      </label>
      <label>
        What's impressive about your project?
        <textarea name="authority" minlength="{AUTHORITY_MIN_CHARS}" maxlength="{AUTHORITY_MAX_CHARS}" required placeholder="{authority_guidance}"></textarea>
      </label>
      <h2>Relevant Metrics/Data</h2>
      <p>This normally gives a strong boost to reply rate. Your data should
      be very easy to digest.</p>
      <ul>
        <li>How many people use your product / service?</li>
        <li>At what volume do those people use your product?</li>
        <li>Any notable people involved?</li>
      </ul>
      <label>
        Which metrics stand out right now?
        <textarea name="metrics" minlength="{METRICS_MIN_CHARS}" maxlength="{METRICS_MAX_CHARS}" required placeholder="Data varies from startup to startup. Don't be afraid to share metrics that stand out"></textarea>
      </label>
      <button type="submit">Post it</button>
    </form>
  </body>
</html>
"#
    )
}
