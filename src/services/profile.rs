use serde::{Deserialize, Serialize};

use crate::clients::models::responses::OnboardingRow;

const MAX_FOCUS_AREAS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    BuildMuscle,
    LoseFat,
    ImproveHealth,
    IncreaseEnergy,
}

impl FitnessGoal {
    #[cfg(test)]
    pub const ALL: [FitnessGoal; 4] = [
        FitnessGoal::BuildMuscle,
        FitnessGoal::LoseFat,
        FitnessGoal::ImproveHealth,
        FitnessGoal::IncreaseEnergy,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "build_muscle" => Some(FitnessGoal::BuildMuscle),
            "lose_fat" => Some(FitnessGoal::LoseFat),
            "improve_health" => Some(FitnessGoal::ImproveHealth),
            "increase_energy" => Some(FitnessGoal::IncreaseEnergy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::BuildMuscle => "build_muscle",
            FitnessGoal::LoseFat => "lose_fat",
            FitnessGoal::ImproveHealth => "improve_health",
            FitnessGoal::IncreaseEnergy => "increase_energy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    #[cfg(test)]
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "beginner" => Some(ExperienceLevel::Beginner),
            "intermediate" => Some(ExperienceLevel::Intermediate),
            "advanced" => Some(ExperienceLevel::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    FullGym,
    HomeWeights,
    ResistanceBands,
    Bodyweight,
    CardioEquipment,
}

impl Equipment {
    #[cfg(test)]
    pub const ALL: [Equipment; 5] = [
        Equipment::FullGym,
        Equipment::HomeWeights,
        Equipment::ResistanceBands,
        Equipment::Bodyweight,
        Equipment::CardioEquipment,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "full_gym" => Some(Equipment::FullGym),
            "home_weights" => Some(Equipment::HomeWeights),
            "resistance_bands" => Some(Equipment::ResistanceBands),
            "bodyweight" => Some(Equipment::Bodyweight),
            "cardio_equipment" => Some(Equipment::CardioEquipment),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::FullGym => "full_gym",
            Equipment::HomeWeights => "home_weights",
            Equipment::ResistanceBands => "resistance_bands",
            Equipment::Bodyweight => "bodyweight",
            Equipment::CardioEquipment => "cardio_equipment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Challenge {
    Recovery,
    Mobility,
    Energy,
    Motivation,
    Time,
    Injuries,
}

impl Challenge {
    #[cfg(test)]
    pub const ALL: [Challenge; 6] = [
        Challenge::Recovery,
        Challenge::Mobility,
        Challenge::Energy,
        Challenge::Motivation,
        Challenge::Time,
        Challenge::Injuries,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "recovery" => Some(Challenge::Recovery),
            "mobility" => Some(Challenge::Mobility),
            "energy" => Some(Challenge::Energy),
            "motivation" => Some(Challenge::Motivation),
            "time" => Some(Challenge::Time),
            "injuries" => Some(Challenge::Injuries),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Challenge::Recovery => "recovery",
            Challenge::Mobility => "mobility",
            Challenge::Energy => "energy",
            Challenge::Motivation => "motivation",
            Challenge::Time => "time",
            Challenge::Injuries => "injuries",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    NoRestrictions,
    LowCarb,
    Vegetarian,
    Mediterranean,
    IntermittentFasting,
}

impl DietaryPreference {
    #[cfg(test)]
    pub const ALL: [DietaryPreference; 5] = [
        DietaryPreference::NoRestrictions,
        DietaryPreference::LowCarb,
        DietaryPreference::Vegetarian,
        DietaryPreference::Mediterranean,
        DietaryPreference::IntermittentFasting,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "no_restrictions" => Some(DietaryPreference::NoRestrictions),
            "low_carb" => Some(DietaryPreference::LowCarb),
            "vegetarian" => Some(DietaryPreference::Vegetarian),
            "mediterranean" => Some(DietaryPreference::Mediterranean),
            "intermittent_fasting" => Some(DietaryPreference::IntermittentFasting),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryPreference::NoRestrictions => "no_restrictions",
            DietaryPreference::LowCarb => "low_carb",
            DietaryPreference::Vegetarian => "vegetarian",
            DietaryPreference::Mediterranean => "mediterranean",
            DietaryPreference::IntermittentFasting => "intermittent_fasting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkoutFrequency {
    #[serde(rename = "1-2")]
    OneToTwo,
    #[serde(rename = "3-4")]
    ThreeToFour,
    #[serde(rename = "5-6")]
    FiveToSix,
}

impl WorkoutFrequency {
    #[cfg(test)]
    pub const ALL: [WorkoutFrequency; 3] = [
        WorkoutFrequency::OneToTwo,
        WorkoutFrequency::ThreeToFour,
        WorkoutFrequency::FiveToSix,
    ];

    /// Accepts the wire form ("3-4") and tolerates whitespace around the dash.
    pub fn parse(value: &str) -> Option<Self> {
        let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
        match compact.as_str() {
            "1-2" => Some(WorkoutFrequency::OneToTwo),
            "3-4" => Some(WorkoutFrequency::ThreeToFour),
            "5-6" => Some(WorkoutFrequency::FiveToSix),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutFrequency::OneToTwo => "1-2",
            WorkoutFrequency::ThreeToFour => "3-4",
            WorkoutFrequency::FiveToSix => "5-6",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    Strength,
    Cardio,
    Flexibility,
    Nutrition,
    Sleep,
    Stress,
    Hormones,
}

impl FocusArea {
    #[cfg(test)]
    pub const ALL: [FocusArea; 7] = [
        FocusArea::Strength,
        FocusArea::Cardio,
        FocusArea::Flexibility,
        FocusArea::Nutrition,
        FocusArea::Sleep,
        FocusArea::Stress,
        FocusArea::Hormones,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "strength" => Some(FocusArea::Strength),
            "cardio" => Some(FocusArea::Cardio),
            "flexibility" => Some(FocusArea::Flexibility),
            "nutrition" => Some(FocusArea::Nutrition),
            "sleep" => Some(FocusArea::Sleep),
            "stress" => Some(FocusArea::Stress),
            "hormones" => Some(FocusArea::Hormones),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FocusArea::Strength => "strength",
            FocusArea::Cardio => "cardio",
            FocusArea::Flexibility => "flexibility",
            FocusArea::Nutrition => "nutrition",
            FocusArea::Sleep => "sleep",
            FocusArea::Stress => "stress",
            FocusArea::Hormones => "hormones",
        }
    }
}

/// Typed onboarding answers. Deserializes from the raw row shape, so
/// unknown strings never reach the engine; they are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OnboardingRow")]
pub struct UserProfile {
    pub fitness_goal: Option<FitnessGoal>,
    pub experience_level: Option<ExperienceLevel>,
    pub available_equipment: Vec<Equipment>,
    pub current_challenges: Vec<Challenge>,
    pub dietary_preference: Option<DietaryPreference>,
    pub workout_frequency: Option<WorkoutFrequency>,
    pub focus_areas: Vec<FocusArea>,
}

impl UserProfile {
    pub fn has_equipment(&self, equipment: Equipment) -> bool {
        self.available_equipment.contains(&equipment)
    }

    pub fn has_challenge(&self, challenge: Challenge) -> bool {
        self.current_challenges.contains(&challenge)
    }

    pub fn has_focus(&self, focus: FocusArea) -> bool {
        self.focus_areas.contains(&focus)
    }

    pub fn is_goal(&self, goal: FitnessGoal) -> bool {
        self.fitness_goal == Some(goal)
    }

    pub fn is_beginner(&self) -> bool {
        self.experience_level == Some(ExperienceLevel::Beginner)
    }
}

impl From<OnboardingRow> for UserProfile {
    fn from(row: OnboardingRow) -> Self {
        let mut focus_areas = parse_set(row.focus_areas.as_deref(), FocusArea::parse);
        focus_areas.truncate(MAX_FOCUS_AREAS);

        Self {
            fitness_goal: row.fitness_goal.as_deref().and_then(FitnessGoal::parse),
            experience_level: row
                .experience_level
                .as_deref()
                .and_then(ExperienceLevel::parse),
            available_equipment: parse_set(row.available_equipment.as_deref(), Equipment::parse),
            current_challenges: parse_set(row.current_challenges.as_deref(), Challenge::parse),
            dietary_preference: row
                .dietary_preference
                .as_deref()
                .and_then(DietaryPreference::parse),
            workout_frequency: row
                .workout_frequency
                .as_deref()
                .and_then(WorkoutFrequency::parse),
            focus_areas,
        }
    }
}

impl From<&UserProfile> for OnboardingRow {
    fn from(profile: &UserProfile) -> Self {
        Self {
            user_id: None,
            fitness_goal: profile.fitness_goal.map(|g| g.as_str().to_string()),
            experience_level: profile.experience_level.map(|e| e.as_str().to_string()),
            available_equipment: Some(
                profile
                    .available_equipment
                    .iter()
                    .map(|e| e.as_str().to_string())
                    .collect(),
            ),
            current_challenges: Some(
                profile
                    .current_challenges
                    .iter()
                    .map(|c| c.as_str().to_string())
                    .collect(),
            ),
            dietary_preference: profile.dietary_preference.map(|d| d.as_str().to_string()),
            workout_frequency: profile.workout_frequency.map(|f| f.as_str().to_string()),
            focus_areas: Some(
                profile
                    .focus_areas
                    .iter()
                    .map(|f| f.as_str().to_string())
                    .collect(),
            ),
            fasting_protocol: None,
        }
    }
}

/// Keeps first-seen order, drops unknown values and duplicates.
fn parse_set<T: PartialEq>(values: Option<&[String]>, parse: fn(&str) -> Option<T>) -> Vec<T> {
    let mut parsed = Vec::new();
    for value in values.unwrap_or_default() {
        if let Some(item) = parse(value.as_str())
            && !parsed.contains(&item)
        {
            parsed.push(item);
        }
    }
    parsed
}
