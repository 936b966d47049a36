use std::env;

const DEFAULT_GATEWAY_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_GATEWAY_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone)]
pub struct Config {
    pub store_url: String,
    pub store_service_key: String,
    pub gateway_url: String,
    pub gateway_api_key: String,
    pub gateway_model: String,
    pub api_token: String,
    pub port: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let store_url = env::var("STORE_URL")?;
        let store_service_key = env::var("STORE_SERVICE_KEY")?;
        let gateway_api_key = env::var("GATEWAY_API_KEY")?;
        let api_token = env::var("API_TOKEN")?;
        let port = env::var("PORT")?;
        let gateway_url =
            env::var("GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        let gateway_model =
            env::var("GATEWAY_MODEL").unwrap_or_else(|_| DEFAULT_GATEWAY_MODEL.to_string());

        Ok(Self {
            store_url,
            store_service_key,
            gateway_url,
            gateway_api_key,
            gateway_model,
            api_token,
            port,
        })
    }
}
