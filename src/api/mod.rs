use crate::api::error::ApiError;
use crate::api::resource::Resource;
use crate::environment::Environment;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;
pub mod resource;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Performs the GET request described by `resource` and returns the parsed JSON body.
    async fn fetch(&self, resource: &Resource) -> Result<serde_json::Value, ApiError>;
}
