use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Result, RtbError};
use super::{Creative, RemoveTargetedPublishersRequest};

const DEFAULT_ENDPOINT: &str = "https://realtimebidding.googleapis.com";

/// A thin client over the Real-time Bidding REST API. One instance per
/// invocation; no caching, no local retry. Responses are returned as opaque
/// JSON values and never validated here.
pub struct RealtimeBiddingClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl RealtimeBiddingClient {
    pub fn new(access_token: String) -> Result<Self> {
        Self::with_base_url(access_token, DEFAULT_ENDPOINT.to_string())
    }

    /// Build a client against a non-default endpoint. Used by tests to point
    /// at a stub server.
    pub fn with_base_url(access_token: String, base_url: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("adx-rtb/0.1.0")
            .build()
            .map_err(RtbError::HttpError)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        })
    }

    /// Remove publisher IDs from a pretargeting configuration's publisher
    /// targeting. `config_name` is a full resource name of the form
    /// `bidders/{account_id}/pretargetingConfigs/{config_id}`.
    pub async fn remove_targeted_publishers(
        &self,
        config_name: &str,
        publisher_ids: &[String],
    ) -> Result<Value> {
        let url = format!("{}/v1/{}:removeTargetedPublishers", self.base_url, config_name);
        let body = RemoveTargetedPublishersRequest {
            publisher_ids: publisher_ids.to_vec(),
        };
        info!("POST {}", url);
        self.post_json(&url, &body).await
    }

    /// Create a creative under a buyer account. `parent` is a resource name
    /// of the form `buyers/{account_id}`.
    pub async fn create_creative(&self, parent: &str, creative: &Creative) -> Result<Value> {
        let url = format!("{}/v1/{}/creatives", self.base_url, parent);
        info!("POST {}", url);
        self.post_json(&url, creative).await
    }

    async fn post_json<B: serde::Serialize>(&self, url: &str, body: &B) -> Result<Value> {
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RtbError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("HTTP {}", status);
        let value = response.json::<Value>().await?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RealtimeBiddingClient::new("test-token".to_string()).unwrap();
        assert_eq!(client.base_url, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = RealtimeBiddingClient::with_base_url(
            "test-token".to_string(),
            "http://127.0.0.1:8080/".to_string(),
        )
        .unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:8080");
    }
}
