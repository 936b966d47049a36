use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;

use crate::clients::store::StoreClient;
use crate::config::Config;
use crate::services::personal_plan::PersonalPlanService;

pub mod logs;
pub mod plans;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store_client: StoreClient,
    pub personal_plan_service: PersonalPlanService,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/recommendations", post(plans::recommend_from_profile))
        .route(
            "/users/{user_id}/recommendations",
            get(plans::recommend_for_user),
        )
        .route(
            "/users/{user_id}/onboarding",
            put(plans::update_onboarding),
        )
        .route("/generate-personal-plan", post(plans::generate_personal_plan))
        .route(
            "/users/{user_id}/meal-logs",
            get(logs::list_meal_logs).post(logs::create_meal_log),
        )
        .route(
            "/users/{user_id}/meal-logs/{id}",
            delete(logs::delete_meal_log),
        )
        .route(
            "/users/{user_id}/workout-logs",
            get(logs::list_workout_logs).post(logs::create_workout_log),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
