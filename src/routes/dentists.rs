use crate::core::{RelayError, SearchRelay};
use crate::models::{ErrorResponse, HealthResponse, SearchRequest, TestSearchQuery};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub relay: SearchRelay,
}

/// Configure all relay routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/api/dentists", web::post().to(search_dentists))
        .route("/test", web::get().to(test_search));
}

/// Health check endpoint. No dependencies; always reports ok.
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { ok: true })
}

/// Dentist search endpoint
///
/// POST /api/dentists
///
/// Request body:
/// ```json
/// {
///   "lat": 52.3676,
///   "lng": 4.9041,
///   "radiusKm": 3,
///   "openNow": true,
///   "lang": "en"
/// }
/// ```
async fn search_dentists(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::invalid_coords());
    }

    run_search(&state, &req).await
}

/// Browser-testable variant of the search endpoint
///
/// GET /test?lat=&lng=&km=&openNow=&lang=
///
/// Missing parameters fall back to demo defaults (Amsterdam, 10 km).
async fn test_search(
    state: web::Data<AppState>,
    query: web::Query<TestSearchQuery>,
) -> impl Responder {
    let req: SearchRequest = query.into_inner().into();
    run_search(&state, &req).await
}

/// Shared tail of both search handlers: run the relay pipeline and map
/// each error kind to its HTTP shape.
async fn run_search(state: &web::Data<AppState>, req: &SearchRequest) -> HttpResponse {
    match state.relay.handle_search(req).await {
        Ok(places) => {
            tracing::info!("Returning {} places", places.len());
            HttpResponse::Ok().json(places)
        }
        Err(RelayError::InvalidCoordinates) => {
            tracing::info!("Rejected search request: missing or invalid coordinates");
            HttpResponse::BadRequest().json(ErrorResponse::invalid_coords())
        }
        Err(RelayError::Upstream { status, body }) => {
            // Provider detail is intentionally passed through; it aids
            // debugging of provider integration issues.
            tracing::warn!("Upstream error {}: {}", status, body);
            HttpResponse::build(
                actix_web::http::StatusCode::from_u16(status)
                    .unwrap_or(actix_web::http::StatusCode::BAD_GATEWAY),
            )
            .content_type("application/json")
            .body(body)
        }
        Err(RelayError::Internal(cause)) => {
            tracing::error!("Internal error handling search: {}", cause);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::PlacesClient;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn app_state(endpoint: &str) -> AppState {
        AppState {
            relay: SearchRelay::new(Arc::new(PlacesClient::new(
                endpoint.to_string(),
                "test_key".to_string(),
                5,
            ))),
        }
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state("http://localhost:1/")))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!({ "ok": true }));
    }

    #[actix_web::test]
    async fn test_search_missing_coords_returns_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state("http://localhost:1/")))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/dentists")
            .set_json(serde_json::json!({ "radiusKm": 3 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "INVALID_COORDS");
    }

    #[actix_web::test]
    async fn test_search_string_typed_lat_returns_invalid_coords() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/places:searchText")
            .expect(0)
            .with_status(200)
            .with_body(r#"{"places":[]}"#)
            .create_async()
            .await;

        let endpoint = format!("{}/places:searchText", server.url());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state(&endpoint)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/dentists")
            .set_json(serde_json::json!({ "lat": "52.3", "lng": 4.9 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "INVALID_COORDS");

        mock.assert_async().await;
    }

    #[actix_web::test]
    async fn test_search_negative_radius_clamps_to_floor() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/places:searchText")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "locationRestriction": { "circle": { "radius": 500.0 } }
            })))
            .with_status(200)
            .with_body(r#"{"places":[]}"#)
            .create_async()
            .await;

        let endpoint = format!("{}/places:searchText", server.url());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state(&endpoint)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/dentists")
            .set_json(serde_json::json!({ "lat": 52.3676, "lng": 4.9041, "radiusKm": -5 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        mock.assert_async().await;
    }

    #[actix_web::test]
    async fn test_search_out_of_range_lat_returns_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state("http://localhost:1/")))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/dentists")
            .set_json(serde_json::json!({ "lat": 120.0, "lng": 4.9 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_search_success_returns_places_array() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/places:searchText")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"places":[{"displayName":{"text":"Clinic A"}}]}"#)
            .create_async()
            .await;

        let endpoint = format!("{}/places:searchText", server.url());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state(&endpoint)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/dentists")
            .set_json(serde_json::json!({
                "lat": 52.3676, "lng": 4.9041, "radiusKm": 3, "openNow": true, "lang": "en"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!([{ "displayName": { "text": "Clinic A" } }])
        );

        mock.assert_async().await;
    }

    #[actix_web::test]
    async fn test_upstream_error_passes_status_and_body_through() {
        let mut server = mockito::Server::new_async().await;
        let upstream_body = r#"{"error":{"message":"bad key"}}"#;
        let _mock = server
            .mock("POST", "/places:searchText")
            .with_status(403)
            .with_body(upstream_body)
            .create_async()
            .await;

        let endpoint = format!("{}/places:searchText", server.url());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state(&endpoint)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/dentists")
            .set_json(serde_json::json!({ "lat": 52.3676, "lng": 4.9041 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);

        let body = test::read_body(resp).await;
        assert_eq!(body, upstream_body.as_bytes());
    }

    #[actix_web::test]
    async fn test_get_test_endpoint_uses_defaults() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/places:searchText")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "openNow": false,
                "languageCode": "en",
                "locationRestriction": {
                    "circle": {
                        "center": { "latitude": 52.3676, "longitude": 4.9041 },
                        "radius": 10000.0
                    }
                }
            })))
            .with_status(200)
            .with_body(r#"{"places":[]}"#)
            .create_async()
            .await;

        let endpoint = format!("{}/places:searchText", server.url());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state(&endpoint)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/test").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        mock.assert_async().await;
    }
}
