//! API routes
//!
//! - [`health`] - liveness and database check
//! - [`zones`] - zone management

pub mod health;
pub mod zones;

use std::time::Duration;

use axum::{Router, middleware};
use tower_http::timeout::TimeoutLayer;

use crate::core::ServerState;
use crate::middleware::logging_middleware;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppResult};

/// Full application router with request timeout and logging applied
pub fn build_router(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    Router::new()
        .merge(health::router())
        .merge(zones::router())
        .layer(middleware::from_fn(logging_middleware))
        .layer(timeout_layer(timeout))
        .with_state(state)
}

/// Requests running longer than `timeout` are answered with 408
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(http::StatusCode::REQUEST_TIMEOUT, timeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::core::Config;

    async fn app() -> Router {
        let state = ServerState::in_memory(Config::default()).await.unwrap();
        build_router(state)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        };
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();

        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/api/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["status"], "ok");
        assert_eq!(body["data"]["database"], "ok");
    }

    #[tokio::test]
    async fn test_slow_request_times_out_with_408() {
        let app: Router = Router::new()
            .route(
                "/slow",
                axum::routing::get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "done"
                }),
            )
            .layer(timeout_layer(Duration::from_millis(20)));

        let req = Request::builder().uri("/slow").body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_zone_lifecycle() {
        let app = app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/zones",
            Some(json!({"name": "Europe", "enabled": true})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = body["data"]["id"].as_i64().unwrap();

        let (_, body) = send(&app, Method::GET, &format!("/api/zones/{id}"), None).await;
        assert_eq!(body["data"], json!({"zone_id": id, "name": "Europe", "enabled": true}));

        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/zones/{id}"),
            Some(json!({"name": "Europe (EU)"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Europe (EU)");
        assert_eq!(body["data"]["enabled"], true);

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/api/zones/{id}/status"),
            Some(json!({"enabled": false})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, "/api/zones", None).await;
        assert_eq!(body["data"][0]["active"], false);

        let (status, _) = send(&app, Method::DELETE, &format!("/api/zones/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, Method::GET, &format!("/api/zones/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 7001);
    }

    #[tokio::test]
    async fn test_create_with_blank_name_lists_missing_fields() {
        let app = app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/zones",
            Some(json!({"name": "   ", "enabled": true})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 7);
        assert_eq!(body["details"]["fields"], json!(["name"]));
        assert_eq!(
            body["message"],
            "One or more required fields for zone are missing. Missing fields are: name"
        );
    }

    #[tokio::test]
    async fn test_create_without_name_lists_missing_fields() {
        let app = app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/zones",
            Some(json!({"enabled": true})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 7);
        assert_eq!(body["details"]["fields"], json!(["name"]));

        let (_, body) = send(&app, Method::GET, "/api/zones", None).await;
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_invalid_zone_id_is_rejected() {
        let app = app().await;

        let (status, body) = send(&app, Method::GET, "/api/zones/0", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 7002);
    }

    #[tokio::test]
    async fn test_bulk_delete_reports_failed_ids() {
        let app = app().await;
        let (_, body) = send(
            &app,
            Method::POST,
            "/api/zones",
            Some(json!({"name": "Asia"})),
        )
        .await;
        let id = body["data"]["id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/zones/bulk/delete",
            Some(json!({"zone_ids": [id, 4242]})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], 7005);
        assert_eq!(body["details"]["zone_ids"], json!([4242]));

        let (_, body) = send(&app, Method::GET, "/api/zones", None).await;
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_bulk_status_route_is_not_shadowed_by_id_route() {
        let app = app().await;
        for name in ["Asia", "Africa"] {
            send(&app, Method::POST, "/api/zones", Some(json!({"name": name}))).await;
        }

        let (_, body) = send(&app, Method::GET, "/api/zones", None).await;
        let ids: Vec<i64> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|z| z["id"].as_i64().unwrap())
            .collect();

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/zones/bulk/status",
            Some(json!({"zone_ids": ids, "enabled": true})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, "/api/zones", None).await;
        for zone in body["data"].as_array().unwrap() {
            assert_eq!(zone["active"], true);
        }
    }
}
