//! Request and upstream payload types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Opaque vehicle-state records, in upstream order.
pub type VehicleList = Vec<Value>;

/// Raw `minLon,minLat,maxLon,maxLat` string.
///
/// Only presence is checked: a missing or blank value is rejected, anything else is
/// forwarded to the upstream untouched, so a malformed box is the upstream's to reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundingBox(String);

impl BoundingBox {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(Error::invalid_request("bbox must not be empty"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Query string of `GET /realtime-buses`.
#[derive(Debug, Deserialize)]
pub struct BusQuery {
    pub bbox: Option<String>,
}

/// Top-level body returned by the vehicles service.
///
/// Both levels are optional; a missing or `null` key at either step means no vehicles.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamResponse {
    #[serde(rename = "resultSet", default)]
    pub result_set: Option<ResultSet>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub vehicle: Option<VehicleList>,

    /// Set by the service when it refuses a query (bad appId, bad bbox).
    #[serde(default)]
    pub error: Option<Value>,
}

impl UpstreamResponse {
    /// Upstream-reported error, if any.
    pub fn error(&self) -> Option<&Value> {
        self.result_set.as_ref().and_then(|rs| rs.error.as_ref())
    }

    /// `resultSet.vehicle`, defaulting to an empty list.
    pub fn into_vehicles(self) -> VehicleList {
        self.result_set
            .and_then(|rs| rs.vehicle)
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub msg: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TileserverResponse {
    pub style: String,
}
