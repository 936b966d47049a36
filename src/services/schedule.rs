use crate::services::profile::{Challenge, UserProfile, WorkoutFrequency};
use crate::services::recommendation::{Intensity, ScheduleDay, WEEK_DAYS};

type Week = [(&'static str, Intensity); 7];

const ONE_TO_TWO: Week = [
    ("Full Body Strength", Intensity::High),
    ("Active Recovery Walk", Intensity::Low),
    ("Rest", Intensity::None),
    ("Full Body Strength", Intensity::High),
    ("Rest", Intensity::None),
    ("Light Cardio", Intensity::Low),
    ("Rest", Intensity::None),
];

const THREE_TO_FOUR: Week = [
    ("Upper Body Strength", Intensity::High),
    ("Cardio & Core", Intensity::Moderate),
    ("Lower Body Strength", Intensity::High),
    ("Active Recovery", Intensity::Low),
    ("Full Body Strength", Intensity::High),
    ("Mobility & Stretching", Intensity::Low),
    ("Rest", Intensity::None),
];

const FIVE_TO_SIX: Week = [
    ("Push (Chest, Shoulders, Triceps)", Intensity::High),
    ("Pull (Back, Biceps)", Intensity::High),
    ("Legs", Intensity::High),
    ("Cardio Intervals", Intensity::Moderate),
    ("Upper Body Hypertrophy", Intensity::High),
    ("Lower Body & Core", Intensity::Moderate),
    ("Rest", Intensity::None),
];

const DEFAULT_WEEK: Week = [
    ("Full Body Workout", Intensity::Moderate),
    ("Walk or Light Cardio", Intensity::Low),
    ("Full Body Workout", Intensity::Moderate),
    ("Rest", Intensity::None),
    ("Full Body Workout", Intensity::Moderate),
    ("Active Recovery", Intensity::Low),
    ("Rest", Intensity::None),
];

/// Seven entries, Monday through Sunday, for any frequency.
pub fn weekly_schedule(profile: &UserProfile) -> Vec<ScheduleDay> {
    let (week, downgradable) = match profile.workout_frequency {
        Some(WorkoutFrequency::OneToTwo) => (&ONE_TO_TWO, false),
        Some(WorkoutFrequency::ThreeToFour) => (&THREE_TO_FOUR, true),
        Some(WorkoutFrequency::FiveToSix) => (&FIVE_TO_SIX, true),
        None => (&DEFAULT_WEEK, false),
    };

    let mut schedule: Vec<ScheduleDay> = WEEK_DAYS
        .iter()
        .zip(week.iter())
        .map(|(day, (focus, intensity))| ScheduleDay {
            day: day.to_string(),
            focus: focus.to_string(),
            intensity: *intensity,
        })
        .collect();

    if downgradable && profile.has_challenge(Challenge::Recovery) {
        downgrade_high_days(&mut schedule);
    }

    schedule
}

fn downgrade_high_days(schedule: &mut [ScheduleDay]) {
    for day in schedule.iter_mut() {
        if day.intensity == Intensity::High {
            day.intensity = Intensity::Moderate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule_for(
        frequency: Option<WorkoutFrequency>,
        challenges: Vec<Challenge>,
    ) -> Vec<ScheduleDay> {
        weekly_schedule(&UserProfile {
            workout_frequency: frequency,
            current_challenges: challenges,
            ..UserProfile::default()
        })
    }

    #[test]
    fn test_every_branch_is_monday_to_sunday() {
        for frequency in WorkoutFrequency::ALL.map(Some).into_iter().chain([None]) {
            let days: Vec<String> = schedule_for(frequency, vec![])
                .into_iter()
                .map(|d| d.day)
                .collect();

            assert_eq!(days, WEEK_DAYS);
        }
    }

    #[test]
    fn test_recovery_downgrades_high_days() {
        let schedule = schedule_for(Some(WorkoutFrequency::FiveToSix), vec![Challenge::Recovery]);

        assert!(schedule.iter().all(|d| d.intensity != Intensity::High));
        assert_eq!(schedule[0].intensity, Intensity::Moderate);
        assert_eq!(schedule[6].intensity, Intensity::None);

        let schedule = schedule_for(
            Some(WorkoutFrequency::ThreeToFour),
            vec![Challenge::Mobility, Challenge::Recovery],
        );
        assert!(schedule.iter().all(|d| d.intensity != Intensity::High));
    }

    #[test]
    fn test_recovery_leaves_low_frequency_untouched() {
        let schedule = schedule_for(Some(WorkoutFrequency::OneToTwo), vec![Challenge::Recovery]);

        assert_eq!(schedule[0].intensity, Intensity::High);
        assert_eq!(schedule, schedule_for(Some(WorkoutFrequency::OneToTwo), vec![]));
    }

    #[test]
    fn test_without_recovery_high_days_remain() {
        let schedule = schedule_for(Some(WorkoutFrequency::FiveToSix), vec![Challenge::Energy]);

        let high_days = schedule
            .iter()
            .filter(|d| d.intensity == Intensity::High)
            .count();
        assert_eq!(high_days, 4);
    }
}
