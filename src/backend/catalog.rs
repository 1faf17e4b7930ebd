use reqwest::blocking::Client;

use crate::backend::{
    api::{self, FetchError},
    descriptor::AppDescriptor,
};

/// Reads the app list from one catalog endpoint.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    endpoint: String,
    http: Client,
}

impl CatalogClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self::with_http(endpoint, api::client()?))
    }

    pub fn with_http(endpoint: impl Into<String>, http: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn fetch(&self) -> Result<Vec<AppDescriptor>, FetchError> {
        api::get_json::<Vec<AppDescriptor>>(&self.http, &self.endpoint)
    }

    pub async fn fetch_in_background(&self) -> Result<Vec<AppDescriptor>, FetchError> {
        let catalog = self.clone();
        api::run_blocking(move || catalog.fetch()).await?
    }
}
