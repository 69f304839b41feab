//! API handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::AppState;
use crate::types::{BoundingBox, BusQuery, PingResponse, TileserverResponse, VehicleList};
use crate::Error;

/// Vehicles currently inside the requested bounding box
pub async fn realtime_buses(
    State(state): State<AppState>,
    Query(query): Query<BusQuery>,
) -> Result<Json<VehicleList>, ApiError> {
    let raw = query
        .bbox
        .ok_or_else(|| Error::invalid_request("missing required query parameter 'bbox'"))?;
    let bbox = BoundingBox::new(raw)?;

    let vehicles = state.source.vehicles(&bbox).await?;
    tracing::info!(%bbox, vehicles = vehicles.len(), "Relayed vehicle positions");

    Ok(Json(vehicles))
}

/// Liveness probe
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { msg: "pong" })
}

/// Map style used by the frontend
pub async fn tileserver_url(State(state): State<AppState>) -> Json<TileserverResponse> {
    Json(TileserverResponse {
        style: state.style_url.to_string(),
    })
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        // Upstream detail stays in the logs; clients only see a fixed message.
        let (status, message) = match &err {
            Error::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::UpstreamTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "upstream timed out".to_string(),
            ),
            Error::UpstreamUnavailable(_) | Error::UpstreamStatus { .. } => (
                StatusCode::BAD_GATEWAY,
                "upstream unavailable".to_string(),
            ),
            Error::UpstreamMalformed(_) => (
                StatusCode::BAD_GATEWAY,
                "upstream returned an unexpected response".to_string(),
            ),
            Error::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %err, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %err, "Request rejected");
        }

        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.message,
        }));
        (self.status, body).into_response()
    }
}
