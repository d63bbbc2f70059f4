use crate::helpers::check_redirect;
use crate::helpers::spawn_app;

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn login_invalid() {
    let app = spawn_app().await;
    let login_body = serde_json::json!({
        "username": "username",
        "password": "password",
    });
    let resp = app.post_login(&login_body).await;
    check_redirect(&resp, "/login");

    // the rejection travels in a flash cookie and shows exactly once
    let html = app.get_login_html().await;
    assert!(html.contains("<p><i>Authentication failed</i></p>"));

    let html = app.get_login_html().await;
    assert!(!html.contains("<p><i>Authentication failed</i></p>"));
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn login_with_a_wrong_password_is_rejected() {
    let app = spawn_app().await;
    let login_body = serde_json::json!({
        "username": app.test_user.username,
        "password": "definitely-not-it",
    });
    let resp = app.post_login(&login_body).await;
    check_redirect(&resp, "/login");
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn login_ok() {
    let app = spawn_app().await;
    let login_body = serde_json::json!({
        "username": app.test_user.username,
        "password": app.test_user.password,
    });
    let resp = app.post_login(&login_body).await;
    check_redirect(&resp, "/");

    let html = app.get_home_html("/").await;
    assert!(html.contains(&format!("Signed in as {}", app.test_user.username)));
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn logout_clears_the_session() {
    let app = spawn_app().await;
    app.test_user.login(&app).await;

    let resp = app.post_logout().await;
    check_redirect(&resp, "/");

    let html = app.get_home_html("/").await;
    assert!(html.contains("You have signed out."));
    assert!(html.contains(r#"<a href="/login">"#));
    assert!(!html.contains("Signed in as"));
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn logout_without_a_session_just_redirects() {
    let app = spawn_app().await;
    let resp = app.post_logout().await;
    check_redirect(&resp, "/");
}
