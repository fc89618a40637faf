use crate::error::{Error, Result};
use dg_core::server::payload::outline_request::OutlineRequest;
use dg_core::server::payload::slide_content_request::SlideContentRequest;
use dg_core::server::payload::writing_request::WritingRequest;
use dg_core::server::routes::{ServiceApi, ToolsApi};
use reqwest::{Client, Response};

pub struct CliClient {
    client: Client,
    base_url: String,
}

impl CliClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::new();
        CliClient {
            client,
            base_url: base_url.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_send_error(&self, err: reqwest::Error) -> Error {
        if err.is_connect() {
            Error::ConnectionRefused(self.base_url.clone())
        } else {
            Error::Http(err)
        }
    }

    async fn post_streaming<T: serde::Serialize>(&self, path: &str, json: &T) -> Result<Response> {
        let result = self
            .client
            .post(self.url(path))
            .json(json)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?
            .error_for_status()?;
        Ok(result)
    }

    pub async fn generate_outline(&self, request: &OutlineRequest) -> Result<Response> {
        self.post_streaming(ToolsApi::Outline.path().as_str(), request)
            .await
    }

    pub async fn generate_slides(&self, request: &SlideContentRequest) -> Result<Response> {
        self.post_streaming(ToolsApi::SlideContent.path().as_str(), request)
            .await
    }

    pub async fn rewrite(&self, request: &WritingRequest) -> Result<Response> {
        self.post_streaming(ToolsApi::Writing.path().as_str(), request)
            .await
    }

    pub async fn health(&self) -> Result<String> {
        let result = self
            .client
            .get(self.url(ServiceApi::Health.path().as_str()))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?
            .error_for_status()?;
        Ok(result.text().await?)
    }
}
