use serde::{Deserialize, Serialize};

use crate::clients::models::common::ChatMessage;

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMealLog {
    #[serde(default, skip_deserializing)]
    pub user_id: String,
    pub meal_type: String,
    pub name: String,
    pub calories: Option<i32>,
    pub protein: Option<f32>,
    pub carbs: Option<f32>,
    pub fat: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logged_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkoutLog {
    #[serde(default, skip_deserializing)]
    pub user_id: String,
    pub name: String,
    pub workout_type: Option<String>,
    pub duration_minutes: Option<i32>,
    pub intensity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PersonalPlanRequest {
    pub user_id: String,
}
