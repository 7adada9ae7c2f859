use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{IdentificationRequest, PlantIdentifier, UpstreamIdentification};

// Stub identifier that records every request and replays a canned response.
#[derive(Clone)]
pub(crate) struct RecordingIdentifier {
    requests: Arc<Mutex<Vec<IdentificationRequest>>>,
    response: Option<serde_json::Value>,
}

impl RecordingIdentifier {
    pub(crate) fn new(response: serde_json::Value) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: Some(response),
        }
    }

    // Every call fails as if the network were down.
    pub(crate) fn failing() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: None,
        }
    }

    pub(crate) fn requests(&self) -> Vec<IdentificationRequest> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl PlantIdentifier for RecordingIdentifier {
    async fn identify(
        &self,
        req: IdentificationRequest,
    ) -> Result<UpstreamIdentification, Box<dyn std::error::Error + Send + Sync>> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .push(req);

        match &self.response {
            Some(value) => Ok(serde_json::from_value(value.clone())?),
            None => Err("connection refused".into()),
        }
    }
}
