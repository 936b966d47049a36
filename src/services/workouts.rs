use crate::services::profile::{Challenge, Equipment, FitnessGoal, FocusArea, UserProfile};
use crate::services::recommendation::{ExerciseTemplate, WorkoutTemplate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrengthTier {
    Gym,
    HomeWeights,
    Bodyweight,
}

/// Exercise selection only distinguishes gym and home weights. Resistance
/// bands and cardio equipment fall through to the bodyweight set.
const STRENGTH_TIER_PRIORITY: [(Equipment, StrengthTier); 2] = [
    (Equipment::FullGym, StrengthTier::Gym),
    (Equipment::HomeWeights, StrengthTier::HomeWeights),
];

/// Templates are appended in a fixed order: strength, conditioning, mobility.
pub fn suggested_workouts(profile: &UserProfile) -> Vec<WorkoutTemplate> {
    let mut workouts = Vec::new();

    if profile.is_goal(FitnessGoal::BuildMuscle) || profile.has_focus(FocusArea::Strength) {
        let tier = strength_tier(profile);
        workouts.push(upper_body(profile, tier));
        workouts.push(lower_body(profile, tier));
    }

    if profile.is_goal(FitnessGoal::LoseFat) || profile.has_focus(FocusArea::Cardio) {
        workouts.push(metabolic_conditioning());
    }

    if profile.has_challenge(Challenge::Mobility) || profile.has_focus(FocusArea::Flexibility) {
        workouts.push(mobility_recovery());
    }

    workouts
}

fn strength_tier(profile: &UserProfile) -> StrengthTier {
    STRENGTH_TIER_PRIORITY
        .iter()
        .find(|(equipment, _)| profile.has_equipment(*equipment))
        .map(|(_, tier)| *tier)
        .unwrap_or(StrengthTier::Bodyweight)
}

fn exercise(name: &str, sets: &str, reps: &str, notes: Option<&str>) -> ExerciseTemplate {
    ExerciseTemplate {
        name: name.to_string(),
        sets: sets.to_string(),
        reps: reps.to_string(),
        notes: notes.map(|n| n.to_string()),
    }
}

fn upper_body(profile: &UserProfile, tier: StrengthTier) -> WorkoutTemplate {
    let main_sets = if profile.is_beginner() { "3" } else { "4" };

    let mut exercises = match tier {
        StrengthTier::Gym => vec![
            exercise("Barbell Bench Press", main_sets, "6-8", Some("Rest 2-3 min between sets")),
            exercise("Barbell Row", main_sets, "6-8", None),
            exercise("Overhead Press", "3", "8-10", None),
            exercise("Lat Pulldown", "3", "10-12", None),
            exercise("Cable Tricep Pushdown", "2", "12-15", None),
        ],
        StrengthTier::HomeWeights => vec![
            exercise("Dumbbell Bench Press", main_sets, "8-10", Some("Use the floor if no bench")),
            exercise("Single-Arm Dumbbell Row", main_sets, "10 each", None),
            exercise("Dumbbell Shoulder Press", "3", "10-12", None),
            exercise("Dumbbell Bicep Curl", "2", "12-15", None),
        ],
        StrengthTier::Bodyweight => vec![
            exercise("Push-Ups", main_sets, "10-15", Some("Elevate hands to regress, feet to progress")),
            exercise("Inverted Rows", main_sets, "8-12", Some("Use a sturdy table edge")),
            exercise("Pike Push-Ups", "3", "8-10", None),
            exercise("Chair Dips", "3", "10-12", None),
        ],
    };

    if profile.has_challenge(Challenge::Mobility) {
        exercises.push(exercise(
            "Band Pull-Aparts",
            "2",
            "15-20",
            Some("Keeps shoulders healthy between pressing sets"),
        ));
    }

    WorkoutTemplate {
        name: "Upper Body Strength".to_string(),
        description: "Push and pull compound movements for chest, back, shoulders and arms"
            .to_string(),
        duration: "45-60 min".to_string(),
        exercises,
    }
}

fn lower_body(profile: &UserProfile, tier: StrengthTier) -> WorkoutTemplate {
    let main_sets = if profile.is_beginner() { "3" } else { "4" };

    let exercises = match tier {
        StrengthTier::Gym => vec![
            exercise("Barbell Back Squat", main_sets, "6-8", Some("Rest 2-3 min between sets")),
            exercise("Romanian Deadlift", main_sets, "8-10", None),
            exercise("Leg Press", "3", "10-12", None),
            exercise("Walking Lunges", "3", "10 each", None),
            exercise("Standing Calf Raise", "3", "12-15", None),
        ],
        StrengthTier::HomeWeights => vec![
            exercise("Goblet Squat", main_sets, "10-12", None),
            exercise("Dumbbell Romanian Deadlift", main_sets, "10-12", None),
            exercise("Dumbbell Reverse Lunge", "3", "10 each", None),
            exercise("Single-Leg Calf Raise", "3", "15 each", None),
        ],
        StrengthTier::Bodyweight => vec![
            exercise("Bodyweight Squat", main_sets, "15-20", Some("Pause 2 seconds at the bottom")),
            exercise("Bulgarian Split Squat", main_sets, "10 each", None),
            exercise("Glute Bridge", "3", "15-20", None),
            exercise("Wall Sit", "3", "30-45 sec", None),
        ],
    };

    WorkoutTemplate {
        name: "Lower Body Strength".to_string(),
        description: "Squat and hinge patterns for legs and glutes".to_string(),
        duration: "45-60 min".to_string(),
        exercises,
    }
}

fn metabolic_conditioning() -> WorkoutTemplate {
    WorkoutTemplate {
        name: "Metabolic Conditioning".to_string(),
        description: "High-intensity intervals to raise heart rate and burn calories".to_string(),
        duration: "20-30 min".to_string(),
        exercises: vec![
            exercise("Jumping Jacks", "3", "45 sec", Some("15 sec rest")),
            exercise("Mountain Climbers", "3", "30 sec", None),
            exercise("Burpees", "3", "10", None),
            exercise("Kettlebell or Dumbbell Swings", "3", "15", None),
            exercise("High Knees", "3", "30 sec", Some("Finish with a 5 min walk")),
        ],
    }
}

fn mobility_recovery() -> WorkoutTemplate {
    WorkoutTemplate {
        name: "Mobility & Recovery".to_string(),
        description: "Joint mobility and stretching to improve range of motion".to_string(),
        duration: "15-20 min".to_string(),
        exercises: vec![
            exercise("Cat-Cow", "2", "10", None),
            exercise("World's Greatest Stretch", "2", "5 each", None),
            exercise("90/90 Hip Switch", "2", "8 each", None),
            exercise("Thoracic Spine Rotation", "2", "8 each", None),
            exercise("Child's Pose", "1", "60 sec", Some("Slow nasal breathing")),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::profile::ExperienceLevel;

    fn names(workouts: &[WorkoutTemplate]) -> Vec<&str> {
        workouts.iter().map(|w| w.name.as_str()).collect()
    }

    #[test]
    fn test_no_goal_no_focus_no_workouts() {
        assert!(suggested_workouts(&UserProfile::default()).is_empty());
    }

    #[test]
    fn test_templates_follow_check_order() {
        let profile = UserProfile {
            fitness_goal: Some(FitnessGoal::LoseFat),
            focus_areas: vec![FocusArea::Flexibility, FocusArea::Strength],
            ..UserProfile::default()
        };

        assert_eq!(
            names(&suggested_workouts(&profile)),
            vec![
                "Upper Body Strength",
                "Lower Body Strength",
                "Metabolic Conditioning",
                "Mobility & Recovery"
            ]
        );
    }

    #[test]
    fn test_beginner_gets_fewer_sets() {
        let squat_sets = |level| {
            let profile = UserProfile {
                fitness_goal: Some(FitnessGoal::BuildMuscle),
                experience_level: Some(level),
                available_equipment: vec![Equipment::FullGym],
                ..UserProfile::default()
            };
            suggested_workouts(&profile)[1].exercises[0].sets.clone()
        };

        assert_eq!(squat_sets(ExperienceLevel::Beginner), "3");
        assert_eq!(squat_sets(ExperienceLevel::Intermediate), "4");
        assert_eq!(squat_sets(ExperienceLevel::Advanced), "4");
    }

    #[test]
    fn test_mobility_challenge_extends_upper_body() {
        let base = UserProfile {
            fitness_goal: Some(FitnessGoal::BuildMuscle),
            available_equipment: vec![Equipment::HomeWeights],
            ..UserProfile::default()
        };
        let with_mobility = UserProfile {
            current_challenges: vec![Challenge::Mobility],
            ..base.clone()
        };

        let plain = suggested_workouts(&base);
        let extended = suggested_workouts(&with_mobility);

        assert_eq!(extended[0].exercises.len(), plain[0].exercises.len() + 1);
        assert_eq!(
            extended[0].exercises.last().map(|e| e.name.as_str()),
            Some("Band Pull-Aparts")
        );
        assert_eq!(extended[1], plain[1]);
        assert_eq!(names(&extended).last(), Some(&"Mobility & Recovery"));
    }

    #[test]
    fn test_resistance_bands_only_routes_to_bodyweight_exercises() {
        let bands = UserProfile {
            focus_areas: vec![FocusArea::Strength],
            available_equipment: vec![Equipment::ResistanceBands],
            ..UserProfile::default()
        };
        let bodyweight = UserProfile {
            available_equipment: vec![Equipment::Bodyweight],
            ..bands.clone()
        };

        assert_eq!(suggested_workouts(&bands), suggested_workouts(&bodyweight));
        assert_eq!(suggested_workouts(&bands)[0].exercises[0].name, "Push-Ups");
    }

    #[test]
    fn test_home_weights_beat_bodyweight() {
        let profile = UserProfile {
            focus_areas: vec![FocusArea::Strength],
            available_equipment: vec![Equipment::Bodyweight, Equipment::HomeWeights],
            ..UserProfile::default()
        };

        assert_eq!(strength_tier(&profile), StrengthTier::HomeWeights);
        assert_eq!(
            suggested_workouts(&profile)[1].exercises[0].name,
            "Goblet Squat"
        );
    }
}
