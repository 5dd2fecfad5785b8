//! Analytics API Client
//!
//! A thin reqwest client for the read-only analytics endpoints.

use crate::api::DashboardApi;
use crate::api::error::ApiError;
use crate::api::resource::Resource;
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("seller-dash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request(
        &self,
        endpoint: &str,
        query: &[(&'static str, String)],
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }
}

#[async_trait::async_trait]
impl DashboardApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn fetch(&self, resource: &Resource) -> Result<serde_json::Value, ApiError> {
        log::debug!("GET {}", resource);
        self.get_request(&resource.path(), &resource.query()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_without_double_slashes() {
        let client = ApiClient::new(Environment::Custom {
            api_url: "https://api.example.com/".to_string(),
        })
        .unwrap();
        assert_eq!(
            client.build_url("/api/sellers"),
            "https://api.example.com/api/sellers"
        );
    }

    #[tokio::test]
    #[ignore] // Requires a running analytics backend.
    async fn fetches_seller_directory_from_local_backend() {
        let client = ApiClient::new(Environment::Local).unwrap();
        let value = client.fetch(&Resource::Sellers).await.unwrap();
        assert!(value.is_array());
    }
}
