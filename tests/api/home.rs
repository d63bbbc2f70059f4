use crate::helpers::spawn_app;

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn the_form_page_is_served() {
    let app = spawn_app().await;

    let html = app.get_home_html("/").await;
    assert!(html.contains(r#"<form action="/projects" method="post">"#));
    assert!(html.contains(r#"name="use_case""#));
    // anonymous visitors see the login link, not a greeting
    assert!(html.contains(r#"<a href="/login">"#));
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn the_use_case_query_switches_the_guidance() {
    let app = spawn_app().await;

    let html = app.get_home_html("/?use_case=FUNDRAISING").await;
    assert!(html.contains("Sequoia"));
    assert!(html.contains(r#"<option value="FUNDRAISING" selected>"#));

    let html = app.get_home_html("/?use_case=RECRUITING").await;
    assert!(html.contains("Facebook"));

    // an unknown token is not an error, just the default guidance
    let html = app.get_home_html("/?use_case=LLAMAS").await;
    assert!(html.contains("something"));
    assert!(!html.contains("Sequoia"));
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn signed_in_visitors_are_greeted_by_name() {
    let app = spawn_app().await;
    app.test_user.login(&app).await;

    let html = app.get_home_html("/").await;
    assert!(html.contains(&format!("Signed in as {}", app.test_user.username)));
    assert!(html.contains(r#"action="/logout""#));
}
