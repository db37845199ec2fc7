//! HTTP-level integration tests for the director and film endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router
//! without an actual TCP listener. Each test gets a fresh database from
//! `#[sqlx::test]`, migrated from `crates/db/migrations`.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, build_test_app, delete, get, post_json};
use films_db::repositories::{DirectorRepo, FilmRepo};
use serde_json::json;
use sqlx::PgPool;

/// Create a director through the API and return its id from the database.
async fn create_director(pool: &PgPool, name: &str, birthday: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/directors",
        json!({"name": name, "birthday": birthday}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    DirectorRepo::list(pool, None)
        .await
        .unwrap()
        .last()
        .expect("director row should exist")
        .id
}

// ---------------------------------------------------------------------------
// Directors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_director_returns_201_with_empty_body(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/directors",
        json!({"name": "alFred hitchCoCK", "birthday": "1899-08-13"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_bytes(response).await.is_empty());

    let rows = DirectorRepo::list(&pool, None).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Alfred Hitchcock");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn fifty_char_name_starting_with_sharp_s_is_stored(pool: PgPool) {
    let name = format!("ß{}", "a".repeat(49));
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/directors",
        json!({"name": name, "birthday": "1900-01-01"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let rows = DirectorRepo::list(&pool, None).await.unwrap();
    assert_eq!(rows[0].name, format!("S{}", "a".repeat(49)));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn wrongly_typed_values_are_coerced_like_form_input(pool: PgPool) {
    let director_id = create_director(&pool, "Alfred Hitchcock", "1899-08-13").await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/films",
        json!({
            "title": "Vertigo",
            "release": "1958-05-09",
            "runtime": "128",
            "director": director_id.to_string()
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let films = FilmRepo::list(&pool, Some(director_id)).await.unwrap();
    assert_eq!(films.len(), 1);
    assert_eq!(films[0].runtime, 128);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_director_creates_no_row(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/directors", json!({"name": "Fritz Lang"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(DirectorRepo::list(&pool, None).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_directors_without_filter_returns_all(pool: PgPool) {
    create_director(&pool, "Akira Kurosawa", "1910-03-23").await;
    create_director(&pool, "Yasujiro Ozu", "1903-12-12").await;

    let app = build_test_app(pool);
    let response = get(app, "/api/directors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!([
            {"name": "Akira Kurosawa", "birthday": "1910-03-23"},
            {"name": "Yasujiro Ozu", "birthday": "1903-12-12"},
        ])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_directors_filters_by_exact_name(pool: PgPool) {
    create_director(&pool, "Akira Kurosawa", "1910-03-23").await;
    create_director(&pool, "Yasujiro Ozu", "1903-12-12").await;

    let app = build_test_app(pool.clone());
    let response = get(app, "/api/directors?item=Yasujiro%20Ozu").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!([{"name": "Yasujiro Ozu", "birthday": "1903-12-12"}]));

    let app = build_test_app(pool.clone());
    let response = get(app, "/api/directors?item=Ozu").await;
    assert_eq!(body_json(response).await, json!([]));

    // An empty filter is ignored.
    let app = build_test_app(pool);
    let response = get(app, "/api/directors?item=").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_director_by_id(pool: PgPool) {
    let id = create_director(&pool, "Fritz Lang", "1890-12-05").await;

    let app = build_test_app(pool);
    let response = get(app, &format!("/api/directors/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, json!({"name": "Fritz Lang", "birthday": "1890-12-05"}));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_director_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/directors/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_director_cascades_to_films(pool: PgPool) {
    let id = create_director(&pool, "Alfred Hitchcock", "1899-08-13").await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/films",
        json!({"title": "Vertigo", "release": "1958-05-09", "runtime": 128, "director": id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(FilmRepo::list(&pool, Some(id)).await.unwrap().len(), 1);

    let app = build_test_app(pool.clone());
    let response = delete(app, &format!("/api/directors/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(FilmRepo::list(&pool, Some(id)).await.unwrap().is_empty());

    let app = build_test_app(pool);
    let response = delete(app, &format!("/api/directors/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_database_ok(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}

// ---------------------------------------------------------------------------
// Films
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_and_fetch_film(pool: PgPool) {
    let id = create_director(&pool, "Fritz Lang", "1890-12-05").await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/films",
        json!({"title": "Metropolis", "release": "1927-01-10", "runtime": 153, "director": id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let film_id = FilmRepo::list(&pool, None).await.unwrap()[0].id;

    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/api/films/{film_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"title": "Metropolis", "release": "1927-01-10", "runtime": 153, "director": id})
    );

    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/api/directors/{id}/films")).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let app = build_test_app(pool);
    let response = get(app, &format!("/api/films?director={id}")).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn film_for_unknown_director_returns_field_error(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/films",
        json!({"title": "Orphan", "release": "2000-01-01", "runtime": 90, "director": 999999}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["fields"]["director"][0],
        "Invalid pk \"999999\" - object does not exist."
    );
    assert!(FilmRepo::list(&pool, None).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn films_of_unknown_director_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/directors/999999/films").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
