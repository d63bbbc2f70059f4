use crate::helpers::check_redirect;
use crate::helpers::project_id_from_location;
use crate::helpers::spawn_app;

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Pigeon Post",
        "bio": "Carrier pigeons with GPS trackers, for the discerning luddite.",
        "use_case": "RECRUITING",
        "authority": "Built by a team of ex-zookeepers.",
        "metrics": "Ten thousand pigeons deployed so far.",
    })
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn posting_requires_a_session() {
    let app = spawn_app().await;

    let resp = app.post_project(&valid_body()).await;
    check_redirect(&resp, "/login");

    // nothing was stored
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn a_valid_submission_lands_on_its_blurb_page() {
    let app = spawn_app().await;
    app.test_user.login(&app).await;

    let resp = app.post_project(&valid_body()).await;
    assert_eq!(resp.status().as_u16(), 303);
    let id = project_id_from_location(&resp);

    let page = app.get_project_page(&id).await;
    assert!(page.status().is_success());
    let html = page.text().await.unwrap();
    // the blurb opens with "name: bio" and carries the other two sentences
    assert!(html.contains("Pigeon Post: Carrier pigeons with GPS trackers"));
    assert!(html.contains("ex-zookeepers"));
    assert!(html.contains("Your blurb is ready."));

    let (name, use_case): (String, String) =
        sqlx::query_as("SELECT name, use_case FROM projects")
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(name, "Pigeon Post");
    assert_eq!(use_case, "RECRUITING");
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn the_confirmation_flash_shows_once() {
    let app = spawn_app().await;
    app.test_user.login(&app).await;

    let resp = app.post_project(&valid_body()).await;
    let id = project_id_from_location(&resp);

    let html = app.get_project_page(&id).await.text().await.unwrap();
    assert!(html.contains("Your blurb is ready."));

    let html = app.get_project_page(&id).await.text().await.unwrap();
    assert!(!html.contains("Your blurb is ready."));
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn an_invalid_submission_bounces_back_with_the_reason() {
    let app = spawn_app().await;
    app.test_user.login(&app).await;

    let mut body = valid_body();
    body["bio"] = serde_json::json!("Too short.");
    let resp = app.post_project(&body).await;
    check_redirect(&resp, "/");

    let html = app.get_home_html("/").await;
    assert!(html.contains("at least 50 characters"));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn a_missing_blurb_page_is_a_404() {
    let app = spawn_app().await;

    let resp = app
        .get_project_page("00000000-0000-0000-0000-000000000000")
        .await;
    assert_eq!(resp.status().as_u16(), 404);
}
