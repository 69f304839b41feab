//! API server state

use std::sync::Arc;

use crate::upstream::VehicleSource;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Where vehicle lists come from
    pub source: Arc<dyn VehicleSource>,

    /// Map style URL handed to the browser
    pub style_url: Arc<str>,
}

impl AppState {
    pub fn new(source: Arc<dyn VehicleSource>, style_url: impl Into<Arc<str>>) -> Self {
        Self {
            source,
            style_url: style_url.into(),
        }
    }
}
