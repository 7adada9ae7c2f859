use crate::domain::{IdentificationRequest, PlantIdentifier, UpstreamIdentification};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Duration;

// Header carrying the pre-shared key expected by the identification service.
const API_KEY_HEADER: &str = "Api-Key";

// Thin wrapper around reqwest for identification calls.
#[derive(Clone)]
pub struct PlantIdClient {
    http: Client,
    api_url: String,
    api_key: String,
}

#[derive(Debug)]
pub enum PlantIdClientError {
    Transport(reqwest::Error),
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },
    Decode(reqwest::Error),
}

impl fmt::Display for PlantIdClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlantIdClientError::Transport(err) => write!(f, "plant id transport error: {err}"),
            PlantIdClientError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "plant id upstream error {status}: {message}")
                } else {
                    write!(f, "plant id upstream error {status}")
                }
            }
            PlantIdClientError::Decode(err) => write!(f, "plant id response decode error: {err}"),
        }
    }
}

impl std::error::Error for PlantIdClientError {}

impl PlantIdClient {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl PlantIdentifier for PlantIdClient {
    async fn identify(
        &self,
        req: IdentificationRequest,
    ) -> Result<UpstreamIdentification, Box<dyn std::error::Error + Send + Sync>> {
        let res = self
            .http
            .post(&self.api_url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&req)
            .send()
            .await
            .map_err(PlantIdClientError::Transport)?;
        let status = res.status();

        // Keep the upstream body text for the logs; the client never sees it.
        if !status.is_success() {
            let message = res.text().await.ok().filter(|body| !body.is_empty());
            return Err(Box::new(PlantIdClientError::Upstream { status, message }));
        }

        res.json::<UpstreamIdentification>()
            .await
            .map_err(|err| {
                Box::new(PlantIdClientError::Decode(err)) as Box<dyn std::error::Error + Send + Sync>
            })
    }
}
