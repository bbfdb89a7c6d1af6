use crate::api::error::{ApiError, ApiResult};
use crate::api::types::*;
use crate::engine::simulate;
use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/simulate", post(run_simulation))
}

async fn health_check() -> &'static str {
    "OK"
}

/// Each request gets its own engine and channel on a blocking worker, so
/// concurrent simulations never share state.
async fn run_simulation(
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> ApiResult<Json<SimulationResponse>> {
    let Json(req) = payload?;
    let result = tokio::task::spawn_blocking(move || simulate(&req))
        .await
        .map_err(|e| ApiError::InternalError(format!("Simulation task failed: {e}")))??;

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EventKind;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::Service;

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/simulate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let mut app = router();

        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app.call(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_simulate_reliable_channel() {
        let mut app = router();

        let response = app
            .call(post_json(
                r#"{"message": "HI", "loss_rate": 0, "corruption_rate": 0, "ack_loss_rate": 0}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let result: SimulationResponse = serde_json::from_slice(&body).unwrap();

        let kinds: Vec<EventKind> = result.events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::SendPacket,
                EventKind::PacketReceived,
                EventKind::DeliverData,
                EventKind::SendAck,
                EventKind::AckReceived,
            ]
        );
        assert_eq!(result.final_data, "HI");
        assert_eq!(result.config_used.packet_size, 4);
        assert_eq!(result.config_used.max_retries_per_packet, 20);
    }

    #[tokio::test]
    async fn test_simulate_response_shape() {
        let mut app = router();

        let response = app
            .call(post_json(r#"{"message": "Hello world", "seed": 5}"#))
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        for key in ["events", "final_data", "stats", "config_used"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["config_used"]["seed"], 5);
        assert_eq!(json["stats"]["total_packets"], 3);
        assert_eq!(json["events"][0]["type"], "send_packet");
        assert_eq!(json["events"][0]["who"], "sender");
    }

    #[tokio::test]
    async fn test_simulate_invalid_config() {
        let mut app = router();

        let response = app
            .call(post_json(r#"{"message": "HI", "packet_size": 0}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_CONFIG");
        assert!(error.error.contains("packet size"));
    }

    async fn assert_invalid_config(body: &str) {
        let mut app = router();

        let response = app.call(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_CONFIG");
        assert!(error.error.starts_with("Invalid configuration"));
    }

    #[tokio::test]
    async fn test_simulate_rejects_malformed_body() {
        assert_invalid_config(r#"{"packet_size": "four"}"#).await;
        assert_invalid_config(r#"{"message": "HI", "packet_size": -1}"#).await;
        assert_invalid_config(r#"{"message": "HI", "loss_rate": "x"}"#).await;
        assert_invalid_config(r#"{"message": "HI""#).await;
    }
}
