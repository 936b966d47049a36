use serde::{Deserialize, Serialize};

use crate::services::profile::{Challenge, Equipment, FitnessGoal, UserProfile};
use crate::services::{meals, schedule, workouts};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPlan {
    pub primary_focus: String,
    pub nutrition_tip: String,
    pub recovery_priority: String,
    pub workout_type: String,
    #[serde(default)]
    pub supplement_suggestions: Vec<String>,
    #[serde(default)]
    pub suggested_workouts: Vec<WorkoutTemplate>,
    #[serde(default)]
    pub suggested_meals: Vec<MealTemplate>,
    #[serde(default)]
    pub weekly_schedule: Vec<ScheduleDay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub name: String,
    pub description: String,
    pub duration: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseTemplate {
    pub name: String,
    pub sets: String,
    pub reps: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTemplate {
    pub meal: String,
    pub name: String,
    pub description: String,
    pub macros: Macros,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    None,
    Low,
    Moderate,
    High,
}

/// Every weekly schedule lists these days, in this order.
pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub day: String,
    pub focus: String,
    pub intensity: Intensity,
}

struct GoalGuidance {
    primary_focus: &'static str,
    nutrition_tip: &'static str,
    supplements: &'static [&'static str],
}

/// Checked top to bottom, first match wins:
/// full_gym > home_weights > resistance_bands, bodyweight otherwise.
const WORKOUT_TYPE_PRIORITY: [(Equipment, &str); 3] = [
    (
        Equipment::FullGym,
        "Gym-based compound training with progressive overload",
    ),
    (
        Equipment::HomeWeights,
        "Dumbbell-focused home training with full-body supersets",
    ),
    (
        Equipment::ResistanceBands,
        "Resistance band circuits with time-under-tension emphasis",
    ),
];

const BODYWEIGHT_WORKOUT_TYPE: &str = "Bodyweight training with calisthenics progressions";

/// Checked top to bottom, first match wins: recovery > mobility > energy.
const RECOVERY_PRIORITY: [(Challenge, &str); 3] = [
    (
        Challenge::Recovery,
        "Protect recovery: 7-9 hours of sleep, a full rest day between hard sessions, and deload every 4th week",
    ),
    (
        Challenge::Mobility,
        "Daily 10-minute mobility flow targeting hips, thoracic spine and shoulders",
    ),
    (
        Challenge::Energy,
        "Stabilise energy with consistent sleep and wake times and light movement on rest days",
    ),
];

const DEFAULT_RECOVERY_PRIORITY: &str =
    "Keep at least one full rest day per week and aim for 7-8 hours of sleep";

/// Derives the full plan for a profile. Total and deterministic: every
/// dispatch has a default arm and nothing here reads time or randomness.
pub fn derive_plan(profile: &UserProfile) -> RecommendationPlan {
    let guidance = goal_guidance(profile.fitness_goal);

    RecommendationPlan {
        primary_focus: guidance.primary_focus.to_string(),
        nutrition_tip: guidance.nutrition_tip.to_string(),
        recovery_priority: recovery_priority(profile).to_string(),
        workout_type: workout_type(profile).to_string(),
        supplement_suggestions: guidance
            .supplements
            .iter()
            .map(|name| name.to_string())
            .collect(),
        suggested_workouts: workouts::suggested_workouts(profile),
        suggested_meals: meals::suggested_meals(profile),
        weekly_schedule: schedule::weekly_schedule(profile),
    }
}

fn goal_guidance(goal: Option<FitnessGoal>) -> GoalGuidance {
    match goal {
        Some(FitnessGoal::BuildMuscle) => GoalGuidance {
            primary_focus: "Progressive overload with compound lifts to build lean muscle",
            nutrition_tip: "Eat in a slight calorie surplus with 1.6-2.2g of protein per kg of bodyweight",
            supplements: &["Creatine Monohydrate", "Whey Protein", "Vitamin D3"],
        },
        Some(FitnessGoal::LoseFat) => GoalGuidance {
            primary_focus: "Preserve muscle while creating a sustainable calorie deficit",
            nutrition_tip: "Run a 300-500 kcal daily deficit and keep protein high to protect muscle",
            supplements: &["Whey Protein", "Green Tea Extract", "Fiber Supplement"],
        },
        Some(FitnessGoal::ImproveHealth) => GoalGuidance {
            primary_focus: "Build consistent habits across movement, nutrition and sleep",
            nutrition_tip: "Fill half your plate with vegetables and favour whole, minimally processed foods",
            supplements: &["Omega-3 Fish Oil", "Vitamin D3", "Magnesium"],
        },
        Some(FitnessGoal::IncreaseEnergy) => GoalGuidance {
            primary_focus: "Boost daily energy through balanced training and recovery",
            nutrition_tip: "Eat balanced meals every 3-4 hours and pair carbs with protein to avoid energy crashes",
            supplements: &["B-Complex", "Iron (if deficient)", "CoQ10"],
        },
        None => GoalGuidance {
            primary_focus: "Build a sustainable foundation of regular training",
            nutrition_tip: "Focus on whole foods, adequate protein and staying hydrated",
            supplements: &["Multivitamin", "Vitamin D3"],
        },
    }
}

pub(crate) fn workout_type(profile: &UserProfile) -> &'static str {
    WORKOUT_TYPE_PRIORITY
        .iter()
        .find(|(equipment, _)| profile.has_equipment(*equipment))
        .map(|(_, label)| *label)
        .unwrap_or(BODYWEIGHT_WORKOUT_TYPE)
}

fn recovery_priority(profile: &UserProfile) -> &'static str {
    RECOVERY_PRIORITY
        .iter()
        .find(|(challenge, _)| profile.has_challenge(*challenge))
        .map(|(_, text)| *text)
        .unwrap_or(DEFAULT_RECOVERY_PRIORITY)
}
