//! DeepLoL stats client.

use super::{BuildResponse, LaneBuild, StatsProvider};
use crate::build::LookupError;
use crate::config::StatsConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the DeepLoL champion build endpoint:
/// `GET {base_url}/champion/build?platform_id=..&champion_id=..&game_version=..&tier=..`
pub struct DeepLolClient {
    base_url: String,
    platform_id: String,
    game_version: String,
    tier: String,
    timeout: Duration,
    /// Shared HTTP client for connection pooling
    client: Arc<Client>,
}

impl DeepLolClient {
    pub fn new(config: &StatsConfig, client: Arc<Client>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            platform_id: config.platform_id.clone(),
            game_version: config.game_version.clone(),
            tier: config.tier.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
            client,
        }
    }
}

#[async_trait]
impl StatsProvider for DeepLolClient {
    async fn fetch_build(
        &self,
        champion_id: u32,
        lane: &str,
    ) -> Result<Option<LaneBuild>, LookupError> {
        let url = format!("{}/champion/build", self.base_url);
        let champion_id = champion_id.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("platform_id", self.platform_id.as_str()),
                ("champion_id", champion_id.as_str()),
                ("game_version", self.game_version.as_str()),
                ("tier", self.tier.as_str()),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LookupError::ProviderUnavailable(format!(
                        "Request timeout after {}ms",
                        self.timeout.as_millis()
                    ))
                } else {
                    LookupError::ProviderUnavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::ProviderUnavailable(format!(
                "Failed to fetch build data: {}",
                status
            )));
        }

        let mut body: BuildResponse = response.json().await.map_err(|e| {
            LookupError::ProviderUnavailable(format!("Failed to parse build response: {}", e))
        })?;

        tracing::debug!(
            champion_id = %champion_id,
            lane = %lane,
            lanes = body.build_by_lane.len(),
            "Fetched build data"
        );

        Ok(body.build_by_lane.remove(lane))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn test_client(base_url: String) -> DeepLolClient {
        let config = StatsConfig {
            base_url,
            ..StatsConfig::default()
        };
        DeepLolClient::new(&config, Arc::new(Client::new()))
    }

    #[tokio::test]
    async fn test_fetch_build_sends_query_and_selects_lane() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/champion/build")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("platform_id".into(), "KR".into()),
                Matcher::UrlEncoded("champion_id".into(), "103".into()),
                Matcher::UrlEncoded("game_version".into(), "14.24".into()),
                Matcher::UrlEncoded("tier".into(), "Emerald+".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"build_by_lane":{"Middle":{"build_lst":[{"win_rate":0.5,"pick_rate":0.1}],"ban_rate":0.02}}}"#,
            )
            .create_async()
            .await;

        let client = test_client(server.url());
        let lane = client.fetch_build(103, "Middle").await.unwrap().unwrap();

        mock.assert_async().await;
        assert_eq!(lane.build_lst.len(), 1);
        assert_eq!(lane.ban_rate, Some(0.02));
    }

    #[tokio::test]
    async fn test_fetch_build_missing_lane() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/champion/build")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"build_by_lane":{"Top":{"build_lst":[]}}}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        assert!(client.fetch_build(103, "Bot").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_build_upstream_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/champion/build")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let client = test_client(server.url());
        let result = client.fetch_build(103, "Middle").await;
        assert!(matches!(result, Err(LookupError::ProviderUnavailable(_))));
    }

    #[tokio::test]
    async fn test_fetch_build_invalid_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/champion/build")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = test_client(server.url());
        let result = client.fetch_build(103, "Middle").await;
        assert!(matches!(result, Err(LookupError::ProviderUnavailable(_))));
    }

    #[tokio::test]
    async fn test_network_error() {
        let client = test_client("http://invalid:9999".to_string());
        let result = client.fetch_build(103, "Middle").await;
        assert!(matches!(result, Err(LookupError::ProviderUnavailable(_))));
    }
}
