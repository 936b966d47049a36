use anyhow::Result;
use serde_json::Value;

use crate::services::recommendation::{RecommendationPlan, ScheduleDay, WEEK_DAYS};

/// Parses the gateway's reply into a plan. `baseline` replaces a weekly
/// schedule that is not exactly Monday through Sunday.
pub fn parse_plan_response(response: &str, baseline: &RecommendationPlan) -> Result<RecommendationPlan> {
    let json_content = extract_json_object(response)
        .ok_or_else(|| anyhow::anyhow!("No JSON object found in response"))?;
    let parsed_json: Value = serde_json::from_str(json_content)
        .map_err(|e| anyhow::anyhow!("Failed to parse JSON response: {}", e))?;

    let mut plan: RecommendationPlan = serde_json::from_value(parsed_json)
        .map_err(|e| anyhow::anyhow!("Failed to parse plan object: {}", e))?;

    if !is_full_week(&plan.weekly_schedule) {
        tracing::warn!(
            days = plan.weekly_schedule.len(),
            "plan.schedule_replaced_with_baseline"
        );
        plan.weekly_schedule = baseline.weekly_schedule.clone();
    }

    Ok(plan)
}

fn is_full_week(schedule: &[ScheduleDay]) -> bool {
    schedule.iter().map(|d| d.day.as_str()).eq(WEEK_DAYS)
}

/// Returns the first balanced `{...}` span. Braces inside string literals
/// (including escaped quotes) are ignored, so surrounding prose and code
/// fences do not matter.
pub fn extract_json_object(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in response[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&response[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::profile::UserProfile;
    use crate::services::recommendation::derive_plan;

    fn baseline() -> RecommendationPlan {
        derive_plan(&UserProfile::default())
    }

    #[test]
    fn test_extract_ignores_prose_and_fences() {
        let response = "Here is your plan:\n```json\n{\"a\": {\"b\": 1}}\n```\nEnjoy {not json}";
        assert_eq!(extract_json_object(response), Some("{\"a\": {\"b\": 1}}"));
    }

    #[test]
    fn test_extract_ignores_braces_in_strings() {
        let response = r#"{"tip": "use {braces} and \"quotes\" }", "n": 2} trailing"#;
        assert_eq!(
            extract_json_object(response),
            Some(r#"{"tip": "use {braces} and \"quotes\" }", "n": 2}"#)
        );
    }

    #[test]
    fn test_extract_unbalanced() {
        assert_eq!(extract_json_object("{\"a\": 1"), None);
        assert_eq!(extract_json_object("no json here"), None);
    }

    #[test]
    fn test_parse_full_plan() {
        let expected = baseline();
        let response = format!(
            "Sure! {}",
            serde_json::to_string(&expected).unwrap()
        );

        assert_eq!(parse_plan_response(&response, &baseline()).unwrap(), expected);
    }

    #[test]
    fn test_missing_lists_default_and_short_schedule_replaced() {
        let response = r#"{
            "primaryFocus": "Sleep more",
            "nutritionTip": "Eat protein",
            "recoveryPriority": "Rest",
            "workoutType": "Walking",
            "weeklySchedule": [{"day": "Monday", "focus": "Walk", "intensity": "Low"}]
        }"#;

        let plan = parse_plan_response(response, &baseline()).unwrap();

        assert_eq!(plan.primary_focus, "Sleep more");
        assert!(plan.supplement_suggestions.is_empty());
        assert!(plan.suggested_meals.is_empty());
        assert_eq!(plan.weekly_schedule, baseline().weekly_schedule);
    }

    #[test]
    fn test_misordered_week_replaced() {
        let mut ai_plan = baseline();
        ai_plan.primary_focus = "Rebuild".to_string();
        for day in ai_plan.weekly_schedule.iter_mut() {
            day.day = "Monday".to_string();
        }
        let repeated = serde_json::to_string(&ai_plan).unwrap();

        let plan = parse_plan_response(&repeated, &baseline()).unwrap();
        assert_eq!(plan.primary_focus, "Rebuild");
        assert_eq!(plan.weekly_schedule, baseline().weekly_schedule);

        let mut ai_plan = baseline();
        ai_plan.weekly_schedule.swap(0, 6);
        let swapped = serde_json::to_string(&ai_plan).unwrap();

        let plan = parse_plan_response(&swapped, &baseline()).unwrap();
        let days: Vec<&str> = plan.weekly_schedule.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, WEEK_DAYS);
    }

    #[test]
    fn test_invalid_plan_is_error() {
        assert!(parse_plan_response("I cannot help with that.", &baseline()).is_err());
        assert!(parse_plan_response("{\"primaryFocus\": 3}", &baseline()).is_err());

        let bad_intensity = r#"{"primaryFocus": "a", "nutritionTip": "b",
            "recoveryPriority": "c", "workoutType": "d",
            "weeklySchedule": [{"day": "Monday", "focus": "x", "intensity": "Extreme"}]}"#;
        assert!(parse_plan_response(bad_intensity, &baseline()).is_err());
    }
}
