use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::clients::gateway::GatewayClient;
use crate::clients::models::common::ChatMessage;
use crate::clients::models::responses::OnboardingRow;
use crate::clients::store::StoreClient;
use crate::error::{ApiError, GatewayError};
use crate::services::fasting::FastingProtocol;
use crate::services::profile::UserProfile;
use crate::services::recommendation::{RecommendationPlan, derive_plan};
use crate::services::signals::{self, LiveSignals, SignalSources};
use crate::services::{plan_parser, plan_prompt};

const SIGNAL_ROW_LIMIT: u32 = 30;
const FASTING_ROW_LIMIT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    Ai,
    Fallback,
}

#[derive(Debug, Serialize)]
pub struct PersonalPlanResponse {
    pub plan: RecommendationPlan,
    pub source: PlanSource,
    pub signals: LiveSignals,
}

#[derive(Clone)]
pub struct PersonalPlanService {
    gateway_client: GatewayClient,
    store_client: StoreClient,
}

impl PersonalPlanService {
    pub fn new(gateway_client: GatewayClient, store_client: StoreClient) -> Self {
        Self {
            gateway_client,
            store_client,
        }
    }

    /// A user who has not finished onboarding gets an empty row.
    pub async fn load_onboarding(&self, user_id: &str) -> Result<OnboardingRow> {
        let row = self.store_client.get_onboarding(user_id).await?;
        if row.is_none() {
            info!(%user_id, "onboarding.not_found");
        }
        Ok(row.unwrap_or_default())
    }

    pub async fn load_profile(&self, user_id: &str) -> Result<UserProfile> {
        Ok(UserProfile::from(self.load_onboarding(user_id).await?))
    }

    /// Errors only for store failures loading the profile and for gateway
    /// failures; an unusable gateway reply falls back to the rule-based plan.
    pub async fn generate(&self, user_id: &str) -> Result<PersonalPlanResponse, ApiError> {
        let row = self.load_onboarding(user_id).await?;
        let protocol = row
            .fasting_protocol
            .as_deref()
            .and_then(FastingProtocol::parse);
        let profile = UserProfile::from(row);
        let sources = self.fetch_signal_sources(user_id).await;
        let live_signals = signals::aggregate(&sources, Utc::now());
        let baseline = derive_plan(&profile);

        let prompt =
            plan_prompt::build_personal_plan_prompt(&profile, protocol, &live_signals, &baseline);
        debug!(prompt = %prompt, "gateway.prompt");

        let content = self
            .gateway_client
            .complete(vec![
                ChatMessage::system(plan_prompt::SYSTEM_PROMPT),
                ChatMessage::user(prompt),
            ])
            .await;

        let content = match content {
            Ok(content) => content,
            Err(GatewayError::EmptyResponse) => {
                warn!(%user_id, "gateway.empty_response");
                return Ok(fallback(baseline, live_signals));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(resolve_plan(&content, baseline, live_signals))
    }

    async fn fetch_signal_sources(&self, user_id: &str) -> SignalSources {
        let (workouts, meals, sleep, fasting) = tokio::join!(
            self.store_client.recent_workout_logs(user_id, SIGNAL_ROW_LIMIT),
            self.store_client.recent_meal_logs(user_id, SIGNAL_ROW_LIMIT),
            self.store_client.recent_sleep_logs(user_id, SIGNAL_ROW_LIMIT),
            self.store_client.recent_fasting_sessions(user_id, FASTING_ROW_LIMIT),
        );

        SignalSources {
            workouts: rows_or_empty(workouts, "workout_logs"),
            meals: rows_or_empty(meals, "meal_logs"),
            sleep: rows_or_empty(sleep, "sleep_logs"),
            fasting: rows_or_empty(fasting, "fasting_sessions"),
        }
    }
}

fn rows_or_empty<T>(rows: Result<Vec<T>>, table: &str) -> Vec<T> {
    rows.unwrap_or_else(|e| {
        warn!(error = %e, table, "signals.fetch_failed");
        Vec::new()
    })
}

fn fallback(baseline: RecommendationPlan, signals: LiveSignals) -> PersonalPlanResponse {
    PersonalPlanResponse {
        plan: baseline,
        source: PlanSource::Fallback,
        signals,
    }
}

fn resolve_plan(
    content: &str,
    baseline: RecommendationPlan,
    signals: LiveSignals,
) -> PersonalPlanResponse {
    match plan_parser::parse_plan_response(content, &baseline) {
        Ok(plan) => {
            info!(workouts = plan.suggested_workouts.len(), "plan.generated");
            PersonalPlanResponse {
                plan,
                source: PlanSource::Ai,
                signals,
            }
        }
        Err(e) => {
            warn!(error = %e, "plan.parse_failed_using_fallback");
            fallback(baseline, signals)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::profile::{FitnessGoal, WorkoutFrequency};

    fn baseline() -> RecommendationPlan {
        derive_plan(&UserProfile {
            fitness_goal: Some(FitnessGoal::BuildMuscle),
            workout_frequency: Some(WorkoutFrequency::ThreeToFour),
            ..UserProfile::default()
        })
    }

    #[test]
    fn test_unparseable_reply_falls_back() {
        let response = resolve_plan("Sorry, try again", baseline(), LiveSignals::default());

        assert_eq!(response.source, PlanSource::Fallback);
        assert_eq!(response.plan, baseline());
    }

    #[test]
    fn test_valid_reply_is_used() {
        let mut ai_plan = baseline();
        ai_plan.primary_focus = "Deload this week".to_string();
        let content = format!("```json\n{}\n```", serde_json::to_string(&ai_plan).unwrap());

        let response = resolve_plan(&content, baseline(), LiveSignals::default());

        assert_eq!(response.source, PlanSource::Ai);
        assert_eq!(response.plan.primary_focus, "Deload this week");
    }

    #[test]
    fn test_fetch_failure_is_empty() {
        let rows: Vec<u32> = rows_or_empty(Err(anyhow::anyhow!("timeout")), "sleep_logs");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_response_serialization() {
        let value = serde_json::to_value(fallback(baseline(), LiveSignals::default())).unwrap();

        assert_eq!(value["source"], "fallback");
        assert!(value["plan"]["weeklySchedule"].is_array());
        assert_eq!(value["signals"]["workouts_last_7_days"], 0);
    }
}
