use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use actix_web_flash_messages::IncomingFlashMessages;

/// `GET /login`
///
/// Plain form, no params. A failed `POST /login` redirects back here with the
/// rejection stored in a flash cookie rather than in the query string, so
/// there is nothing to HMAC-verify and nothing for a visitor to tamper with.
pub async fn login_form(flash_messages: IncomingFlashMessages) -> HttpResponse {
    let mut error_msg = String::new();
    for msg in flash_messages.iter() {
        error_msg.push_str(&format!(
            "<p><i>{}</i></p>\n",
            htmlescape::encode_minimal(msg.content())
        ));
    }

    let body = format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8" />
    <title>Login</title>
  </head>
  <body>
    {error_msg}
    <p>Sign in to post a project. Accounts are provisioned by the operators;
    there is no self-serve signup.</p>
    <!-- must POST; a GET form would put the credentials in the URL -->
    <form action="/login" method="post">
      <label>
        Username
        <input type="text" placeholder="Enter Username" name="username" />
      </label>
      <label>
        Password
        <input type="password" placeholder="Enter Password" name="password" />
      </label>
      <button type="submit">Login</button>
    </form>
  </body>
</html>
"#,
    );

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}
