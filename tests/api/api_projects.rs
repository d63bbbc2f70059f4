//! The `/api` surface is public by design, so none of these log in

use uuid::Uuid;

use crate::helpers::spawn_app;

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Pigeon Post",
        "bio": "Carrier pigeons with GPS trackers, for the discerning luddite.",
        "use_case": "FUNDRAISING",
        "authority": "Built by a team of ex-zookeepers.",
        "metrics": "Ten thousand pigeons deployed so far.",
    })
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn create_returns_the_stored_record() {
    let app = spawn_app().await;

    let resp = app.api_create_project(&valid_body()).await;
    assert_eq!(resp.status().as_u16(), 201);

    let created: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(created["name"], "Pigeon Post");
    assert_eq!(created["use_case"], "FUNDRAISING");
    // the server assigns both of these
    assert!(Uuid::parse_str(created["id"].as_str().unwrap()).is_ok());
    assert!(created["created_at"].is_string());

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn create_rejects_out_of_schema_fields() {
    let app = spawn_app().await;

    let cases = vec![
        ("name", serde_json::json!("P"), "at least 2"),
        ("bio", serde_json::json!("Too short."), "at least 50"),
        (
            "use_case",
            serde_json::json!("recruiting"),
            "not a known use case",
        ),
        ("authority", serde_json::json!("x".repeat(51)), "at most 50"),
        ("metrics", serde_json::json!("tiny"), "at least 10"),
    ];

    for (field, value, msg_fragment) in cases {
        let mut body = valid_body();
        body[field] = value;

        let resp = app.api_create_project(&body).await;
        assert_eq!(
            resp.status().as_u16(),
            400,
            "a bad `{field}` was not rejected"
        );

        let err: serde_json::Value = resp.json().await.unwrap();
        assert!(
            err["error"].as_str().unwrap().contains(msg_fragment),
            "unexpected message for a bad `{field}`: {err}"
        );
    }

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn a_missing_field_is_still_a_400() {
    let app = spawn_app().await;

    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("metrics");

    // rejected by deserialization, before the schema even runs
    let resp = app.api_create_project(&body).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn read_returns_what_create_stored() {
    let app = spawn_app().await;

    let created: serde_json::Value = app
        .api_create_project(&valid_body())
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let resp = app.api_get_project(id).await;
    assert_eq!(resp.status().as_u16(), 200);
    let fetched: serde_json::Value = resp.json().await.unwrap();
    // created_at is excluded: postgres keeps microseconds, the create
    // response still had nanoseconds
    for field in ["id", "name", "bio", "use_case", "authority", "metrics"] {
        assert_eq!(fetched[field], created[field], "`{field}` changed");
    }
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn reading_an_unknown_id_is_a_404() {
    let app = spawn_app().await;

    let id = Uuid::new_v4().to_string();
    let resp = app.api_get_project(&id).await;
    assert_eq!(resp.status().as_u16(), 404);

    let err: serde_json::Value = resp.json().await.unwrap();
    assert!(err["error"].as_str().unwrap().contains(&id));
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn a_malformed_id_is_a_404() {
    let app = spawn_app().await;

    let resp = app.api_get_project("not-a-uuid").await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn delete_removes_the_record() {
    let app = spawn_app().await;

    let created: serde_json::Value = app
        .api_create_project(&valid_body())
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let resp = app.api_delete_project(id).await;
    assert_eq!(resp.status().as_u16(), 204);

    let resp = app.api_get_project(id).await;
    assert_eq!(resp.status().as_u16(), 404);

    // deleting what is already gone reports the miss
    let resp = app.api_delete_project(id).await;
    assert_eq!(resp.status().as_u16(), 404);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance (scripts/init_db.sh)"]
async fn deleting_an_unknown_id_is_a_404() {
    let app = spawn_app().await;

    let resp = app.api_delete_project(&Uuid::new_v4().to_string()).await;
    assert_eq!(resp.status().as_u16(), 404);
}
