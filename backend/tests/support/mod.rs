//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use unitconv::adapter::EngineAdapter;
use unitconv::catalog::UnitCatalog;
use unitconv::resolver::UnitResolver;
use unitconv::services::{CatalogService, ConversionService};

pub fn catalog() -> Arc<UnitCatalog> {
    Arc::new(UnitCatalog::builtin().expect("builtin catalog is valid"))
}

pub fn conversion_service() -> ConversionService {
    ConversionService::new(
        UnitResolver::new(catalog()),
        Arc::new(EngineAdapter::builtin()),
    )
}

pub fn catalog_service() -> CatalogService {
    CatalogService::new(catalog(), Arc::new(EngineAdapter::builtin()))
}

#[cfg(feature = "http-server")]
pub mod http {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    use unitconv::http::{create_router, AppState};

    pub fn app() -> Router {
        create_router(AppState::builtin().expect("builtin state"))
    }

    pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        send(app, request).await
    }

    pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }
}
