use axum::routing::get;
use axum::{Json, Router};
use roster::domain::constants::{API_DESCRIPTION, API_TITLE, API_VERSION, SYSTEM_TAG, USERS_TAG};
use roster::domain::config::ServerConfig;
use roster::kernel::prelude::ApiState;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa::openapi::InfoBuilder;
use utoipa::openapi::server::Server;
use utoipa::openapi::tag::TagBuilder;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
struct ApiDoc;

/// Base URL advertised to documentation clients; a wildcard bind address is shown as `localhost`.
fn server_url(cfg: &ServerConfig) -> String {
    if cfg.address.is_unspecified() {
        format!("http://localhost:{}", cfg.port)
    } else {
        format!("http://{}", SocketAddr::new(cfg.address, cfg.port))
    }
}

fn api_doc(server: &ServerConfig) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info = InfoBuilder::new()
        .title(API_TITLE)
        .version(API_VERSION)
        .description(Some(API_DESCRIPTION))
        .build();
    doc.tags = Some(vec![
        TagBuilder::new().name(USERS_TAG).description(Some("User records")).build(),
        TagBuilder::new().name(SYSTEM_TAG).description(Some("Operational endpoints")).build(),
    ]);
    doc.servers = Some(vec![Server::new(server_url(server))]);
    doc
}

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let docs = state.config.docs.clone();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, openapi): (Router, _) = OpenApiRouter::with_openapi(api_doc(&state.config.server))
        .merge(roster::server::router::api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let router = Router::new().merge(openapi_routes);
    if !docs.enabled {
        return router;
    }

    let openapi_json = {
        let doc = openapi.clone();
        move || {
            let doc = doc.clone();
            async move { Json(doc) }
        }
    };

    router
        .route(&docs.openapi_path(), get(openapi_json))
        .merge(Scalar::with_url(docs.path, openapi))
}
