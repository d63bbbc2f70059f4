use crate::helpers::spawn_app;

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn health_check_works() {
    let app = spawn_app().await;

    let resp = app
        .api_client
        .get(format!("{}/health_check", app.addr))
        .send()
        .await
        .expect("execute request");

    assert!(resp.status().is_success());
    assert_eq!(resp.content_length(), Some(0));
}
