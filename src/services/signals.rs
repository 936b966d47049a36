use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::clients::models::responses::{FastingSession, MealLog, SleepLog, WorkoutLog};
use crate::services::fasting::{self, FastingProtocol};
use crate::services::recommendation::Intensity;

const SLEEP_AVERAGE_WINDOW: usize = 7;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LiveSignals {
    pub workouts_last_7_days: u32,
    pub minutes_last_7_days: u32,
    pub calories_today: i64,
    pub protein_today: f32,
    pub last_sleep_hours: Option<f32>,
    pub avg_sleep_hours: Option<f32>,
    pub active_fast: Option<ActiveFast>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveFast {
    pub protocol: Option<FastingProtocol>,
    pub elapsed_hours: f64,
    pub phase: &'static str,
    pub max_intensity: Intensity,
}

#[derive(Debug, Default)]
pub struct SignalSources {
    pub workouts: Vec<WorkoutLog>,
    pub meals: Vec<MealLog>,
    /// Newest first.
    pub sleep: Vec<SleepLog>,
    pub fasting: Vec<FastingSession>,
}

pub fn aggregate(sources: &SignalSources, now: DateTime<Utc>) -> LiveSignals {
    let week_ago = now - Duration::days(7);

    let recent_workouts: Vec<&WorkoutLog> = sources
        .workouts
        .iter()
        .filter(|w| {
            parse_timestamp(&w.completed_at)
                .map(|at| at > week_ago && at <= now)
                .unwrap_or(false)
        })
        .collect();

    let minutes_last_7_days: u32 = recent_workouts
        .iter()
        .filter_map(|w| w.duration_minutes)
        .map(|m| m.max(0) as u32)
        .sum();

    let today = now.date_naive();
    let meals_today: Vec<&MealLog> = sources
        .meals
        .iter()
        .filter(|m| {
            parse_timestamp(&m.logged_at)
                .map(|at| at.date_naive() == today)
                .unwrap_or(false)
        })
        .collect();

    let sleep_hours: Vec<f32> = sources
        .sleep
        .iter()
        .take(SLEEP_AVERAGE_WINDOW)
        .map(|s| s.hours)
        .collect();

    let avg_sleep_hours = if sleep_hours.is_empty() {
        None
    } else {
        Some(sleep_hours.iter().sum::<f32>() / sleep_hours.len() as f32)
    };

    LiveSignals {
        workouts_last_7_days: recent_workouts.len() as u32,
        minutes_last_7_days,
        calories_today: meals_today
            .iter()
            .filter_map(|m| m.calories)
            .map(i64::from)
            .sum(),
        protein_today: meals_today.iter().filter_map(|m| m.protein).sum(),
        last_sleep_hours: sleep_hours.first().copied(),
        avg_sleep_hours,
        active_fast: active_fast(&sources.fasting, now),
    }
}

fn active_fast(sessions: &[FastingSession], now: DateTime<Utc>) -> Option<ActiveFast> {
    let (session, started) = sessions
        .iter()
        .filter(|s| s.ended_at.is_none())
        .filter_map(|s| parse_timestamp(&s.started_at).map(|started| (s, started)))
        .filter(|(_, started)| *started <= now)
        .max_by_key(|(_, started)| *started)?;

    let elapsed_hours = (now - started).num_minutes() as f64 / 60.0;

    Some(ActiveFast {
        protocol: session.protocol.as_deref().and_then(FastingProtocol::parse),
        elapsed_hours,
        phase: fasting::fasting_phase(elapsed_hours),
        max_intensity: fasting::training_intensity_for_fasting_hours(elapsed_hours),
    })
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|at| at.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-12T18:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn workout(completed_at: &str, minutes: i32) -> WorkoutLog {
        WorkoutLog {
            id: completed_at.to_string(),
            user_id: "u-1".to_string(),
            name: "Session".to_string(),
            workout_type: None,
            duration_minutes: Some(minutes),
            intensity: None,
            notes: None,
            completed_at: completed_at.to_string(),
        }
    }

    fn meal_log(logged_at: &str, calories: i32, protein: f32) -> MealLog {
        MealLog {
            id: logged_at.to_string(),
            user_id: "u-1".to_string(),
            meal_type: "lunch".to_string(),
            name: "Bowl".to_string(),
            calories: Some(calories),
            protein: Some(protein),
            carbs: None,
            fat: None,
            photo_url: None,
            logged_at: logged_at.to_string(),
        }
    }

    fn sleep(hours: f32) -> SleepLog {
        SleepLog {
            id: hours.to_string(),
            user_id: "u-1".to_string(),
            hours,
            quality: None,
            created_at: "2025-03-12T07:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_empty_sources() {
        assert_eq!(aggregate(&SignalSources::default(), now()), LiveSignals::default());
    }

    #[test]
    fn test_workout_window() {
        let sources = SignalSources {
            workouts: vec![
                workout("2025-03-12T07:00:00Z", 45),
                workout("2025-03-06T07:00:00Z", 30),
                workout("2025-03-01T07:00:00Z", 60),
                workout("not a date", 90),
            ],
            ..SignalSources::default()
        };

        let signals = aggregate(&sources, now());

        assert_eq!(signals.workouts_last_7_days, 2);
        assert_eq!(signals.minutes_last_7_days, 75);
    }

    #[test]
    fn test_meals_counted_for_today_only() {
        let sources = SignalSources {
            meals: vec![
                meal_log("2025-03-12T08:00:00Z", 400, 30.0),
                meal_log("2025-03-12T13:00:00+01:00", 600, 42.5),
                meal_log("2025-03-11T23:30:00Z", 900, 10.0),
            ],
            ..SignalSources::default()
        };

        let signals = aggregate(&sources, now());

        assert_eq!(signals.calories_today, 1000);
        assert_eq!(signals.protein_today, 72.5);
    }

    #[test]
    fn test_large_calorie_rows_do_not_overflow() {
        let sources = SignalSources {
            meals: vec![
                meal_log("2025-03-12T08:00:00Z", i32::MAX, 0.0),
                meal_log("2025-03-12T09:00:00Z", i32::MAX, 0.0),
            ],
            ..SignalSources::default()
        };

        let signals = aggregate(&sources, now());

        assert_eq!(signals.calories_today, 2 * i64::from(i32::MAX));
    }

    #[test]
    fn test_sleep_average_uses_latest_week() {
        let mut sleep_logs = vec![sleep(6.0), sleep(8.0)];
        sleep_logs.extend((0..10).map(|_| sleep(7.0)));

        let sources = SignalSources {
            sleep: sleep_logs,
            ..SignalSources::default()
        };

        let signals = aggregate(&sources, now());

        assert_eq!(signals.last_sleep_hours, Some(6.0));
        assert_eq!(signals.avg_sleep_hours, Some(7.0));
    }

    #[test]
    fn test_active_fast() {
        let sources = SignalSources {
            fasting: vec![
                FastingSession {
                    id: "old".to_string(),
                    user_id: "u-1".to_string(),
                    protocol: Some("16:8".to_string()),
                    started_at: "2025-03-10T20:00:00Z".to_string(),
                    ended_at: Some("2025-03-11T12:00:00Z".to_string()),
                },
                FastingSession {
                    id: "current".to_string(),
                    user_id: "u-1".to_string(),
                    protocol: Some("18:6".to_string()),
                    started_at: "2025-03-12T01:00:00Z".to_string(),
                    ended_at: None,
                },
            ],
            ..SignalSources::default()
        };

        let fast = aggregate(&sources, now()).active_fast.unwrap();

        assert_eq!(fast.protocol, Some(FastingProtocol::EighteenSix));
        assert_eq!(fast.elapsed_hours, 17.0);
        assert_eq!(fast.phase, "Fat Burning");
        assert_eq!(fast.max_intensity, Intensity::Low);
    }
}
