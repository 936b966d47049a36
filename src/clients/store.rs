use crate::clients::models::common::{Filter, Query};
use crate::clients::models::requests::{NewMealLog, NewWorkoutLog};
use crate::clients::models::responses::{
    FastingSession, MealLog, OnboardingRow, SleepLog, WorkoutLog,
};
use crate::config::Config;
use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

const REST_ENDPOINT: &str = "/rest/v1/";

pub const ONBOARDING_TABLE: &str = "user_onboarding";
pub const MEAL_LOGS_TABLE: &str = "meal_logs";
pub const WORKOUT_LOGS_TABLE: &str = "workout_logs";
pub const SLEEP_LOGS_TABLE: &str = "sleep_logs";
pub const FASTING_SESSIONS_TABLE: &str = "fasting_sessions";

/// REST client for the managed Postgres tables. Row-level security and
/// conflict handling live on the store side.
#[derive(Clone)]
pub struct StoreClient {
    http: Client,
    base: Url,
    service_key: String,
}

impl StoreClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            base: Url::parse(&config.store_url)?,
            service_key: config.store_service_key.clone(),
        })
    }

    fn table_url(&self, table: &str, query: &Query) -> Result<Url> {
        let mut url = self.base.join(&format!("{}{}", REST_ENDPOINT, table))?;
        url.query_pairs_mut().extend_pairs(query.to_pairs());
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    async fn read_body(response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "API request failed with status {}: {}",
                status,
                body
            ));
        }

        Ok(body)
    }

    pub async fn select<T: DeserializeOwned>(&self, table: &str, query: &Query) -> Result<Vec<T>> {
        let url = self.table_url(table, query)?;
        let response = self.authorized(self.http.get(url)).send().await?;
        let body = Self::read_body(response).await?;

        serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("Failed to parse {} rows: {}", table, e))
    }

    pub async fn insert<B: Serialize, T: DeserializeOwned>(&self, table: &str, row: &B) -> Result<T> {
        self.post_row(table, &Query::default(), "return=representation", row)
            .await
    }

    /// Inserts `row`, or merges it into the existing row with the same
    /// `conflict_column` value.
    pub async fn upsert<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        conflict_column: &'static str,
        row: &B,
    ) -> Result<T> {
        self.post_row(
            table,
            &Query::default().merge_on(conflict_column),
            "resolution=merge-duplicates,return=representation",
            row,
        )
        .await
    }

    async fn post_row<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
        prefer: &str,
        row: &B,
    ) -> Result<T> {
        let url = self.table_url(table, query)?;
        let json_body = serde_json::to_string(row)?;

        tracing::debug!(table, request_body = %json_body, "store.insert.request");

        let response = self
            .authorized(self.http.post(url))
            .header("Content-Type", "application/json")
            .header("Prefer", prefer)
            .body(json_body)
            .send()
            .await?;
        let body = Self::read_body(response).await?;

        let rows: Vec<T> = serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("Failed to parse inserted {} row: {}", table, e))?;
        rows.into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("API returned empty {} array", table))
    }

    pub async fn delete(&self, table: &str, query: &Query) -> Result<()> {
        let url = self.table_url(table, query)?;
        let response = self.authorized(self.http.delete(url)).send().await?;
        Self::read_body(response).await?;
        Ok(())
    }

    pub async fn get_onboarding(&self, user_id: &str) -> Result<Option<OnboardingRow>> {
        let rows: Vec<OnboardingRow> = self
            .select(ONBOARDING_TABLE, &Query::for_user(user_id).limit(1))
            .await?;
        Ok(rows.into_iter().next())
    }

    pub async fn save_onboarding(&self, row: &OnboardingRow) -> Result<OnboardingRow> {
        self.upsert(ONBOARDING_TABLE, "user_id", row).await
    }

    pub async fn recent_meal_logs(&self, user_id: &str, limit: u32) -> Result<Vec<MealLog>> {
        let query = Query::for_user(user_id)
            .newest_first("logged_at")
            .limit(limit);
        self.select(MEAL_LOGS_TABLE, &query).await
    }

    pub async fn insert_meal_log(&self, log: &NewMealLog) -> Result<MealLog> {
        self.insert(MEAL_LOGS_TABLE, log).await
    }

    pub async fn delete_meal_log(&self, user_id: &str, id: &str) -> Result<()> {
        let query = Query::for_user(user_id).and(Filter::eq("id", id));
        self.delete(MEAL_LOGS_TABLE, &query).await
    }

    pub async fn recent_workout_logs(&self, user_id: &str, limit: u32) -> Result<Vec<WorkoutLog>> {
        let query = Query::for_user(user_id)
            .newest_first("completed_at")
            .limit(limit);
        self.select(WORKOUT_LOGS_TABLE, &query).await
    }

    pub async fn insert_workout_log(&self, log: &NewWorkoutLog) -> Result<WorkoutLog> {
        self.insert(WORKOUT_LOGS_TABLE, log).await
    }

    pub async fn recent_sleep_logs(&self, user_id: &str, limit: u32) -> Result<Vec<SleepLog>> {
        let query = Query::for_user(user_id)
            .newest_first("created_at")
            .limit(limit);
        self.select(SLEEP_LOGS_TABLE, &query).await
    }

    pub async fn recent_fasting_sessions(
        &self,
        user_id: &str,
        limit: u32,
    ) -> Result<Vec<FastingSession>> {
        let query = Query::for_user(user_id)
            .newest_first("started_at")
            .limit(limit);
        self.select(FASTING_SESSIONS_TABLE, &query).await
    }
}
