// HTTP surface: three JSON routes over the shared catalog plus optional
// static frontend serving.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::advisor::advise;
use crate::catalog::{HeroCatalog, MapTable};
use crate::protocol::{AdviceRequest, AdviceResponse};

/// Shared read-only state, loaded once at startup.
pub struct AppState {
    pub catalog: HeroCatalog,
    pub maps: MapTable,
}

/// Assemble the application router. When `static_dir` is set, anything
/// that misses the API routes is served from that directory.
pub fn build_router(state: Arc<AppState>, static_dir: Option<&str>) -> Router {
    let mut router = Router::new()
        .route("/api/heroes", get(list_heroes))
        .route("/api/maps", get(list_maps))
        .route("/api/recommendations", post(recommendations))
        .with_state(state);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn list_heroes(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let heroes: Vec<serde_json::Value> = state.catalog.iter().map(|h| h.to_wire()).collect();
    Json(serde_json::Value::Array(heroes))
}

async fn list_maps(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({ "maps": state.maps.names() }))
}

async fn recommendations(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AdviceRequest>,
) -> Json<AdviceResponse> {
    Json(advise(&state.catalog, &state.maps, &req))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::hero::HeroRecord;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::collections::HashMap;
    use tower::ServiceExt;

    fn test_state() -> Arc<AppState> {
        let mut stonewall = HeroRecord::new("stonewall", "Stonewall");
        stonewall.roles = vec!["Tank".to_string()];
        stonewall.provides = vec!["Frontline".to_string(), "Engage".to_string()];

        let mut lumen = HeroRecord::new("lumen", "Lumen");
        lumen.roles = vec!["Healer".to_string()];
        lumen.provides = vec!["Save".to_string()];

        let maps = HashMap::from([(
            "Sunken Bastion".to_string(),
            HashMap::from([("Waveclear".to_string(), 1.4)]),
        )]);

        Arc::new(AppState {
            catalog: HeroCatalog::new(vec![stonewall, lumen]),
            maps: MapTable::new(maps),
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn heroes_route_returns_catalog() {
        let router = build_router(test_state(), None);
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/heroes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let heroes = json.as_array().unwrap();
        assert_eq!(heroes.len(), 2);
        assert_eq!(heroes[0]["hero_id"], "stonewall");
        assert_eq!(heroes[0]["hero_name"], "Stonewall");
        assert_eq!(heroes[0]["role"], serde_json::json!(["Tank"]));
        assert!(heroes[0].get("id").is_none());
    }

    #[tokio::test]
    async fn maps_route_returns_sorted_names() {
        let router = build_router(test_state(), None);
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/maps")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["maps"], serde_json::json!(["Sunken Bastion"]));
    }

    #[tokio::test]
    async fn recommendations_route_accepts_empty_payload() {
        let router = build_router(test_state(), None);
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/recommendations")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["phase"], "pick");
        assert_eq!(json["sideToAct"], "ally");
        assert!(json["recommendations"].as_array().is_some());
        assert_eq!(json["endPlan"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn recommendations_route_echoes_ban_phase() {
        let router = build_router(test_state(), None);
        let body = r#"{"draft": {"phase": "ban"}, "settings": {"rankPreset": "Gold"}}"#;
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/recommendations")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["phase"], "ban");
        let recs = json["recommendations"].as_array().unwrap();
        assert!(!recs.is_empty());
        assert!(recs[0].get("teamScoreAfter").is_none());
    }
}
