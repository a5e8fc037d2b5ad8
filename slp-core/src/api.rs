//! Native client for the analysis service.

use crate::endpoint::{AnalysisRequest, ApiConfig, Endpoint, LoadPlan};
use crate::error::{parse_body, FetchError};
use crate::load_state::PanelState;
use crate::sample;
use futures::future::join_all;
use log::{info, warn};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
    config: ApiConfig,
}

impl AnalysisClient {
    /// Build a client. `timeout` of `None` waits as long as the service takes.
    pub fn new(config: ApiConfig, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// POST `{"idea": ...}` to one endpoint and return the JSON body verbatim.
    pub async fn fetch(&self, endpoint: Endpoint, idea: &str) -> Result<Value, FetchError> {
        let url = self.config.url(endpoint);
        info!("Requesting {} analysis from {}", endpoint, url);

        let response = self
            .client
            .post(&url)
            .json(&AnalysisRequest::new(idea))
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", url, e);
                FetchError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Bad response status for {}: {}", endpoint, status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;
        parse_body(&body)
    }

    /// Resolve one endpoint the way a panel does: sample data in demo mode,
    /// otherwise a single request.
    pub async fn resolve(&self, endpoint: Endpoint, idea: &str, demo: bool) -> PanelState {
        match LoadPlan::choose(idea, demo) {
            LoadPlan::Sample => PanelState::Loaded(sample::sample(endpoint)),
            LoadPlan::Idle => PanelState::Loading,
            LoadPlan::Fetch => match self.fetch(endpoint, idea).await {
                Ok(value) => PanelState::Loaded(value),
                Err(e) => PanelState::Failed(e),
            },
        }
    }

    /// Resolve every endpoint concurrently. A failing endpoint does not
    /// affect the others. Results come back in [`Endpoint::ALL`] order.
    pub async fn resolve_all(&self, idea: &str, demo: bool) -> Vec<(Endpoint, PanelState)> {
        join_all(Endpoint::ALL.into_iter().map(|endpoint| async move {
            (endpoint, self.resolve(endpoint, idea, demo).await)
        }))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_resolves_without_network() {
        // Nothing listens here; demo mode must never try.
        let client = AnalysisClient::new(ApiConfig::new("http://127.0.0.1:9"), None).unwrap();
        let results = client.resolve_all("anything", true).await;
        assert_eq!(results.len(), Endpoint::ALL.len());
        for (endpoint, state) in results {
            assert!(matches!(state, PanelState::Loaded(_)), "{}", endpoint);
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_fails_every_panel() {
        let client = AnalysisClient::new(
            ApiConfig::new("http://127.0.0.1:9"),
            Some(Duration::from_secs(5)),
        )
        .unwrap();
        let results = client.resolve_all("honey coffee", false).await;
        let order: Vec<Endpoint> = results.iter().map(|(e, _)| *e).collect();
        assert_eq!(order, Endpoint::ALL.to_vec());
        for (_, state) in results {
            assert!(matches!(state, PanelState::Failed(FetchError::Network(_))));
        }
    }

    #[tokio::test]
    async fn test_empty_idea_stays_idle() {
        let client = AnalysisClient::new(ApiConfig::default(), None).unwrap();
        assert_eq!(client.resolve(Endpoint::Market, "", false).await, PanelState::Loading);
    }
}
