use crate::clients::models::common::ChatMessage;
use crate::clients::models::requests::ChatCompletionRequest;
use crate::clients::models::responses::ChatCompletionResponse;
use crate::config::Config;
use crate::error::GatewayError;
use anyhow::Result;
use reqwest::{Client, Url};

/// OpenAI-compatible chat completion gateway.
#[derive(Clone)]
pub struct GatewayClient {
    http: Client,
    url: Url,
    api_key: String,
    model: String,
}

impl GatewayClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            url: Url::parse(&config.gateway_url)?,
            api_key: config.gateway_api_key.clone(),
            model: config.gateway_model.clone(),
        })
    }

    pub async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
        };
        let json_body = serde_json::to_string(&request).map_err(anyhow::Error::from)?;

        let response = self
            .http
            .post(self.url.clone())
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .body(json_body)
            .send()
            .await
            .map_err(anyhow::Error::from)?;

        let status = response.status();
        let body = response.text().await.map_err(anyhow::Error::from)?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "gateway.request_failed");
            return Err(GatewayError::from_status(status.as_u16(), body));
        }

        tracing::debug!(response_body = %body, "gateway.response");

        let api_response: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("Failed to parse gateway response: {}", e))?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GatewayError::EmptyResponse)
    }
}
