#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use roster_kernel::domain::config::{ApiConfig, UsersConfig};
use roster_kernel::server::ApiState;
use roster_users::router::users_router;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(seed: bool) -> Router {
    let slice = roster_users::init(&UsersConfig { seed }).unwrap();
    let state = ApiState::builder().config(ApiConfig::default()).register_slice(slice).build().unwrap();
    let (router, _) = users_router().with_state(state).split_for_parts();
    router
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        },
        None => Body::empty(),
    };

    let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn get_then_delete_seeded_user() {
    let app = app(true);

    let (status, body) = call(&app, Method::GET, "/users/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 2, "name": "Ana" }));

    let (status, body) = call(&app, Method::DELETE, "/users/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Usuario eliminado" }));

    let (status, body) = call(&app, Method::GET, "/users/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Usuario no encontrado" }));

    let (status, body) = call(&app, Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": 1, "name": "Miguel" }, { "id": 3, "name": "Carlos" }]));
}

#[tokio::test]
async fn create_assigns_fresh_id() {
    let app = app(true);

    let (status, created) = call(&app, Method::POST, "/users", Some(json!({ "name": "Lucia" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Lucia");

    let id = created["id"].as_u64().expect("numeric id");
    assert!(![1, 2, 3].contains(&id));

    let (status, fetched) = call(&app, Method::GET, &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, json!({ "id": id, "name": "Lucia" }));
}

#[tokio::test]
async fn update_replaces_name() {
    let app = app(true);

    let (status, body) = call(&app, Method::PUT, "/users/1", Some(json!({ "name": "Miguel Ángel" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Miguel Ángel" }));

    let (_, list) = call(&app, Method::GET, "/users", None).await;
    assert_eq!(list[0]["name"], "Miguel Ángel");
}

#[tokio::test]
async fn missing_ids_are_not_found() {
    let app = app(true);

    for (method, body) in [
        (Method::GET, None),
        (Method::PUT, Some(json!({ "name": "x" }))),
        (Method::DELETE, None),
    ] {
        let (status, response) = call(&app, method.clone(), "/users/999", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
        assert_eq!(response, json!({ "error": "Usuario no encontrado" }));
    }

    let (_, list) = call(&app, Method::GET, "/users", None).await;
    assert_eq!(list.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn non_numeric_ids_are_not_found() {
    let app = app(true);

    let (status, body) = call(&app, Method::GET, "/users/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Usuario no encontrado" }));

    let (status, _) = call(&app, Method::DELETE, "/users/1.0", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn padded_or_signed_ids_do_not_match() {
    let app = app(true);

    for uri in ["/users/+2", "/users/%202", "/users/2%20", "/users/02"] {
        let (status, body) = call(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({ "error": "Usuario no encontrado" }), "{uri}");
    }

    let (status, _) = call(&app, Method::PUT, "/users/+2", Some(json!({ "name": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, ana) = call(&app, Method::GET, "/users/2", None).await;
    assert_eq!(ana, json!({ "id": 2, "name": "Ana" }));
}

#[tokio::test]
async fn absent_name_is_accepted() {
    let app = app(false);

    let (status, created) = call(&app, Method::POST, "/users", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({ "id": 1 }));

    let (status, created) = call(&app, Method::POST, "/users", Some(json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({ "id": 2 }));

    let (status, updated) = call(&app, Method::PUT, "/users/1", Some(json!({ "nombre": "Ana" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({ "id": 1, "name": "Ana" }));
}

#[tokio::test]
async fn non_json_bodies_are_ignored() {
    let app = app(false);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("Lucia"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let created: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(created, json!({ "id": 1 }));
}

#[tokio::test]
async fn non_string_name_is_rejected_with_error_body() {
    let app = app(false);

    let (status, body) = call(&app, Method::POST, "/users", Some(json!({ "name": 42 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "error": "Cuerpo de la petición inválido" }));

    let (_, list) = call(&app, Method::GET, "/users", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn malformed_json_is_rejected_with_error_body() {
    let app = app(true);

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/users/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Cuerpo de la petición inválido" }));

    let (_, miguel) = call(&app, Method::GET, "/users/1", None).await;
    assert_eq!(miguel, json!({ "id": 1, "name": "Miguel" }));
}

#[tokio::test]
async fn missing_slice_is_an_internal_error() {
    let state = ApiState::builder().config(ApiConfig::default()).build().unwrap();
    let (app, _): (Router, _) = users_router().with_state(state).split_for_parts();

    let (status, body) = call(&app, Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error interno del servidor" }));
}

#[test]
fn openapi_lists_user_operations() {
    let (_, api): (Router<ApiState>, _) = users_router().split_for_parts();

    let list = api.paths.paths.get("/users").expect("/users");
    assert!(list.get.is_some() && list.post.is_some());

    let item = api.paths.paths.get("/users/{id}").expect("/users/{id}");
    assert!(item.get.is_some() && item.put.is_some() && item.delete.is_some());

    let schemas = &api.components.as_ref().expect("components").schemas;
    for name in ["User", "UserPayload", "ErrorBody", "MessageBody"] {
        assert!(schemas.contains_key(name), "missing schema {name}");
    }
}
