use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, header::AUTHORIZATION},
};
use crate::clients::models::requests::PersonalPlanRequest;
use crate::clients::models::responses::OnboardingRow;
use crate::error::{ApiError, GatewayError};
use crate::services::personal_plan::PersonalPlanResponse;
use crate::services::profile::UserProfile;
use crate::services::recommendation::{RecommendationPlan, derive_plan};

use super::AppState;

pub(crate) fn authenticate_request(headers: &HeaderMap, state: &AppState) -> Result<(), ApiError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(ApiError::Unauthorized)?;

    if token != state.config.api_token {
        return Err(ApiError::Unauthorized);
    }

    Ok(())
}

pub(crate) fn parse_body<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedPayload(e.to_string()))
}

/// Pure engine call: the body is raw onboarding answers.
pub async fn recommend_from_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<RecommendationPlan>, ApiError> {
    authenticate_request(&headers, &state)?;

    let profile: UserProfile = parse_body(&body)?;
    let plan = derive_plan(&profile);

    tracing::info!(workouts = plan.suggested_workouts.len(), "recommendation.derived");
    Ok(Json(plan))
}

pub async fn recommend_for_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Result<Json<RecommendationPlan>, ApiError> {
    authenticate_request(&headers, &state)?;

    let profile = state
        .personal_plan_service
        .load_profile(&user_id)
        .await
        .inspect_err(|e| tracing::error!(error = %e, %user_id, "failed to load onboarding"))?;

    tracing::info!(%user_id, "recommendation.derived");
    Ok(Json(derive_plan(&profile)))
}

/// Replaces the stored onboarding answers and returns the plan they produce.
pub async fn update_onboarding(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    body: Bytes,
) -> Result<Json<RecommendationPlan>, ApiError> {
    authenticate_request(&headers, &state)?;

    let profile: UserProfile = parse_body(&body)?;
    let mut changes = OnboardingRow::from(&profile);
    changes.user_id = Some(user_id.clone());

    state
        .store_client
        .save_onboarding(&changes)
        .await
        .inspect_err(|e| tracing::error!(error = %e, %user_id, "failed to save onboarding"))?;

    tracing::info!(%user_id, "onboarding.saved");
    Ok(Json(derive_plan(&profile)))
}

pub async fn generate_personal_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<PersonalPlanResponse>, ApiError> {
    authenticate_request(&headers, &state)?;

    let request: PersonalPlanRequest = parse_body(&body)?;
    let user_id = request.user_id;

    tracing::info!(%user_id, "personal_plan.requested");

    let response = state
        .personal_plan_service
        .generate(&user_id)
        .await
        .inspect_err(|e| match e {
            ApiError::Gateway(GatewayError::RateLimited) => {
                tracing::warn!(%user_id, "gateway.rate_limited")
            }
            ApiError::Gateway(GatewayError::PaymentRequired) => {
                tracing::warn!(%user_id, "gateway.payment_required")
            }
            _ => tracing::error!(error = %e, %user_id, "failed to generate personal plan"),
        })?;

    tracing::info!(%user_id, source = ?response.source, "personal_plan.completed");
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    use crate::clients::gateway::GatewayClient;
    use crate::clients::store::StoreClient;
    use crate::config::Config;
    use crate::services::personal_plan::PersonalPlanService;
    use crate::services::profile::FitnessGoal;

    fn state() -> AppState {
        let config = Config {
            store_url: "http://localhost:54321".to_string(),
            store_service_key: "service-key".to_string(),
            gateway_url: "http://localhost:8080/v1/chat/completions".to_string(),
            gateway_api_key: "gateway-key".to_string(),
            gateway_model: "test-model".to_string(),
            api_token: "secret".to_string(),
            port: "0".to_string(),
        };
        let store_client = StoreClient::new(&config).unwrap();
        let gateway_client = GatewayClient::new(&config).unwrap();

        AppState {
            personal_plan_service: PersonalPlanService::new(gateway_client, store_client.clone()),
            store_client,
            config,
        }
    }

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_authenticate_request() {
        let state = state();

        assert!(authenticate_request(&headers("Bearer secret"), &state).is_ok());
        assert!(authenticate_request(&headers("Bearer wrong"), &state).is_err());
        assert!(authenticate_request(&headers("secret"), &state).is_err());
        assert!(authenticate_request(&HeaderMap::new(), &state).is_err());
    }

    #[test]
    fn test_parse_body() {
        let profile: UserProfile =
            parse_body(&Bytes::from_static(br#"{"fitness_goal": "build_muscle"}"#)).unwrap();
        assert_eq!(profile.fitness_goal, Some(FitnessGoal::BuildMuscle));

        let malformed = parse_body::<UserProfile>(&Bytes::from_static(b"not json"));
        assert!(matches!(malformed, Err(ApiError::MalformedPayload(_))));

        let missing_user = parse_body::<PersonalPlanRequest>(&Bytes::from_static(b"{}"));
        assert!(missing_user.is_err());
    }

    #[tokio::test]
    async fn test_recommend_from_profile() {
        let body = Bytes::from_static(
            br#"{"fitness_goal": "lose_fat", "dietary_preference": "intermittent_fasting"}"#,
        );

        let Json(plan) = recommend_from_profile(State(state()), headers("Bearer secret"), body)
            .await
            .unwrap();

        assert_eq!(plan.suggested_meals[0].meal, "First Meal (12pm)");
        assert_eq!(plan.suggested_workouts[0].name, "Metabolic Conditioning");
    }
}
