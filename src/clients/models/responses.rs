use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One row of `user_onboarding`. Values are kept as raw strings; see
/// `services::profile` for the typed view. A field of the wrong JSON type
/// reads as absent instead of failing the whole row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingRow {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_string"
    )]
    pub user_id: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub fitness_goal: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub experience_level: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_strings")]
    pub available_equipment: Option<Vec<String>>,
    #[serde(deserialize_with = "deserialize_lenient_strings")]
    pub current_challenges: Option<Vec<String>>,
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub dietary_preference: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub workout_frequency: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_strings")]
    pub focus_areas: Option<Vec<String>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_string"
    )]
    pub fasting_protocol: Option<String>,
}

/// Anything but a JSON string becomes `None`.
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(value)) => Some(value),
        _ => None,
    })
}

/// Keeps the string members of an array; a non-array becomes `None`.
fn deserialize_lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(value) => Some(value),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealLog {
    pub id: String,
    pub user_id: String,
    pub meal_type: String,
    pub name: String,
    pub calories: Option<i32>,
    pub protein: Option<f32>,
    pub carbs: Option<f32>,
    pub fat: Option<f32>,
    pub photo_url: Option<String>,
    pub logged_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub workout_type: Option<String>,
    pub duration_minutes: Option<i32>,
    pub intensity: Option<String>,
    pub notes: Option<String>,
    pub completed_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepLog {
    pub id: String,
    pub user_id: String,
    pub hours: f32,
    pub quality: Option<i32>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FastingSession {
    pub id: String,
    pub user_id: String,
    pub protocol: Option<String>,
    pub started_at: String,
    pub ended_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}
