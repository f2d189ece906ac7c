//! HTTP client implementation for the API Ninjas endpoints.
//!
//! This module provides a reqwest-based implementation of the [`NinjasClient`](crate::NinjasClient) trait.

use crate::config::Config;
use crate::{CalorieEstimate, ExerciseInfo, NinjasClient, NinjasError};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

const API_KEY_HEADER: &str = "X-Api-Key";

/// Client for the API Ninjas service using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestNinjasClient {
    base_url: String,
    api_key: SecretString,
    client: reqwest::Client,
}

impl ReqwestNinjasClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the service (e.g., "https://api.api-ninjas.com")
    /// * `api_key` - Key sent in the `X-Api-Key` header
    /// * `timeout` - Upper bound for each request, connect through body
    pub fn new(
        base_url: &str,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, NinjasError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, NinjasError> {
        Self::new(&config.base_url, config.api_key.clone(), config.timeout)
    }

    /// Build an authenticated GET request.
    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
    }

    /// Execute a request whose response is a JSON list and keep only the
    /// first element.
    async fn execute_first<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Option<T>, NinjasError> {
        let resp = request.send().await?;
        if !resp.status().is_success() {
            return Err(self.error_from_response(resp).await);
        }
        let items: Vec<T> = resp.json().await?;
        Ok(items.into_iter().next())
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> NinjasError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();
        NinjasError::Status {
            status,
            body: body_snippet,
        }
    }
}

#[async_trait]
impl NinjasClient for ReqwestNinjasClient {
    async fn fetch_calories(
        &self,
        activity: &str,
        weight: Option<u32>,
        duration: Option<u32>,
    ) -> Result<Option<CalorieEstimate>, NinjasError> {
        let url = format!("{}/v1/caloriesburned", self.base_url);
        let mut pairs: Vec<(&str, String)> = vec![("activity", activity.to_string())];
        if let Some(w) = weight {
            pairs.push(("weight", w.to_string()));
        }
        if let Some(d) = duration {
            pairs.push(("duration", d.to_string()));
        }
        tracing::debug!(activity, ?weight, ?duration, "fetching calorie estimate");
        self.execute_first(self.get_request(&url).query(&pairs))
            .await
    }

    async fn fetch_exercise_info(
        &self,
        activity: &str,
    ) -> Result<Option<ExerciseInfo>, NinjasError> {
        let url = format!("{}/v1/exercises", self.base_url);
        tracing::debug!(activity, "fetching exercise info");
        self.execute_first(self.get_request(&url).query(&[("name", activity)]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash() {
        let client = ReqwestNinjasClient::new(
            "http://localhost/",
            SecretString::new("key".into()),
            Duration::from_secs(1),
        )
        .expect("client");
        assert_eq!(client.base_url, "http://localhost");
    }

    #[test]
    fn from_config_uses_config_values() {
        let cfg = Config::from_env_with(|k| match k {
            "NINJAS_API_KEY" => Some("key".into()),
            "NINJAS_BASE_URL" => Some("http://example.test".into()),
            _ => None,
        })
        .expect("cfg");
        let client = ReqwestNinjasClient::from_config(&cfg).expect("client");
        assert_eq!(client.base_url, "http://example.test");
    }
}
