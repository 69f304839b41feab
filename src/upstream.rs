//! Client for the real-time vehicle location service

use async_trait::async_trait;
use reqwest::Client;

use crate::config::UpstreamSection;
use crate::types::{BoundingBox, UpstreamResponse, VehicleList};
use crate::{Error, Result};

/// Upper bound on how much of a failed upstream body is kept for logging.
const MAX_ERROR_BODY_BYTES: usize = 512;

/// Anything that can list the vehicles inside a bounding box
#[async_trait]
pub trait VehicleSource: Send + Sync {
    async fn vehicles(&self, bbox: &BoundingBox) -> Result<VehicleList>;
}

/// HTTP client for the TriMet vehicles endpoint.
pub struct VehicleClient {
    client: Client,
    base_url: String,
    app_id: String,
    has_trip_id: bool,
}

impl VehicleClient {
    pub fn new(config: &UpstreamSection) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_id: config.app_id.clone(),
            has_trip_id: config.has_trip_id,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/hasTripId/{}", self.base_url, self.has_trip_id)
    }
}

#[async_trait]
impl VehicleSource for VehicleClient {
    async fn vehicles(&self, bbox: &BoundingBox) -> Result<VehicleList> {
        let url = self.endpoint();
        tracing::debug!(%url, %bbox, "Requesting vehicles from upstream");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("json", "true"),
                ("appId", self.app_id.as_str()),
                ("bbox", bbox.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                let err = Error::from(e);
                tracing::warn!(%url, error = %err, "Upstream request failed");
                err
            })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body = truncate(&text, MAX_ERROR_BODY_BYTES);
            tracing::warn!(%url, status = status.as_u16(), %body, "Upstream returned non-success status");
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: UpstreamResponse = serde_json::from_str(&text).map_err(|e| {
            let body = truncate(&text, MAX_ERROR_BODY_BYTES);
            tracing::error!(%url, error = %e, %body, "Failed to parse upstream response");
            Error::malformed(e.to_string())
        })?;

        if let Some(err) = body.error() {
            tracing::warn!(%bbox, upstream_error = %err, "Upstream reported an error");
        }

        let vehicles = body.into_vehicles();
        tracing::debug!(%bbox, vehicles = vehicles.len(), "Upstream vehicles received");
        Ok(vehicles)
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 16), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        // 'é' is two bytes; cutting at 2 would split it
        assert_eq!(truncate("aé", 2), "a...");
    }
}
