use crate::api::AppState;
use crate::clients::gateway::GatewayClient;
use crate::clients::store::StoreClient;
use crate::config::Config;
use crate::services::personal_plan::PersonalPlanService;

mod api;
mod clients;
mod config;
mod error;
mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let store_client = StoreClient::new(&config)?;
    let gateway_client = GatewayClient::new(&config)?;
    let personal_plan_service = PersonalPlanService::new(gateway_client, store_client.clone());

    let state = AppState {
        config: config.clone(),
        store_client,
        personal_plan_service,
    };

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = %config.port, model = %config.gateway_model, "server.listening");
    axum::serve(listener, app).await?;
    Ok(())
}
