use crate::services::fasting::FastingProtocol;
use crate::services::profile::UserProfile;
use crate::services::recommendation::{Intensity, RecommendationPlan};
use crate::services::signals::LiveSignals;

pub const SYSTEM_PROMPT: &str = "You are an expert fitness and nutrition coach. You create safe, \
personalised weekly training and nutrition plans and always answer with a single JSON object.";

fn list_or_none<T>(items: &[T], label: fn(&T) -> &'static str) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.iter().map(label).collect::<Vec<_>>().join(", ")
    }
}

fn or_unknown(value: Option<&'static str>) -> &'static str {
    value.unwrap_or("not specified")
}

pub fn format_profile_for_prompt(profile: &UserProfile) -> String {
    let mut output = format!(
        "Fitness goal: {}\n",
        or_unknown(profile.fitness_goal.map(|g| g.as_str()))
    );
    output.push_str(&format!(
        "Experience level: {}\n",
        or_unknown(profile.experience_level.map(|e| e.as_str()))
    ));
    output.push_str(&format!(
        "Available equipment: {}\n",
        list_or_none(&profile.available_equipment, |e| e.as_str())
    ));
    output.push_str(&format!(
        "Current challenges: {}\n",
        list_or_none(&profile.current_challenges, |c| c.as_str())
    ));
    output.push_str(&format!(
        "Dietary preference: {}\n",
        or_unknown(profile.dietary_preference.map(|d| d.as_str()))
    ));
    output.push_str(&format!(
        "Workouts per week: {}\n",
        or_unknown(profile.workout_frequency.map(|f| f.as_str()))
    ));
    output.push_str(&format!(
        "Focus areas: {}\n",
        list_or_none(&profile.focus_areas, |f| f.as_str())
    ));
    output
}

pub fn format_signals_for_prompt(signals: &LiveSignals) -> String {
    let mut output = format!(
        "Workouts in the last 7 days: {} ({} min)\n",
        signals.workouts_last_7_days, signals.minutes_last_7_days
    );
    output.push_str(&format!(
        "Logged today: {} kcal, {:.0}g protein\n",
        signals.calories_today, signals.protein_today
    ));
    output.push_str(&format!(
        "Last night's sleep: {}\n",
        format_hours(signals.last_sleep_hours)
    ));
    output.push_str(&format!(
        "7-day average sleep: {}\n",
        format_hours(signals.avg_sleep_hours)
    ));

    match &signals.active_fast {
        Some(fast) => output.push_str(&format!(
            "Currently fasting: {:.1}h ({}), keep training intensity at or below {}\n",
            fast.elapsed_hours,
            fast.phase,
            intensity_label(fast.max_intensity)
        )),
        None => output.push_str("Currently fasting: no\n"),
    }

    output
}

fn format_hours(hours: Option<f32>) -> String {
    hours
        .map(|value| format!("{:.1}h", value))
        .unwrap_or_else(|| "not logged".to_string())
}

fn intensity_label(intensity: Intensity) -> &'static str {
    match intensity {
        Intensity::None => "None",
        Intensity::Low => "Low",
        Intensity::Moderate => "Moderate",
        Intensity::High => "High",
    }
}

pub fn format_protocol_for_prompt(protocol: Option<FastingProtocol>) -> String {
    match protocol {
        Some(protocol) => format!(
            "Fasting protocol: {} ({}h fast, {}h eating window, {})\n",
            protocol.as_str(),
            protocol.fasting_hours(),
            protocol.eating_window_hours(),
            protocol.difficulty().as_str()
        ),
        None => String::new(),
    }
}

pub fn build_personal_plan_prompt(
    profile: &UserProfile,
    protocol: Option<FastingProtocol>,
    signals: &LiveSignals,
    baseline: &RecommendationPlan,
) -> String {
    let baseline_json =
        serde_json::to_string_pretty(baseline).unwrap_or_else(|_| "{}".to_string());

    format!(
        r#"Create a personalised plan for this user for the coming week.

USER PROFILE:
{}{}
LIVE SIGNALS:
{}
BASELINE PLAN (rule-based, adjust it to the live signals):
{}

RULES:
1. Respect the available equipment and dietary preference
2. If sleep is below 7 hours or the user is fasting, lower training intensity
3. Keep exactly 7 weeklySchedule entries, Monday to Sunday
4. intensity must be one of "None", "Low", "Moderate", "High"
5. Macros are whole numbers

OUTPUT FORMAT:
Return ONLY a JSON object with this exact structure:
{{
    "primaryFocus": "string",
    "nutritionTip": "string",
    "recoveryPriority": "string",
    "workoutType": "string",
    "supplementSuggestions": ["string"],
    "suggestedWorkouts": [
        {{
            "name": "string",
            "description": "string",
            "duration": "30-45 min",
            "exercises": [{{ "name": "string", "sets": "3", "reps": "8-10", "notes": "optional" }}]
        }}
    ],
    "suggestedMeals": [
        {{
            "meal": "Breakfast",
            "name": "string",
            "description": "string",
            "macros": {{ "calories": 400, "protein": 30, "carbs": 40, "fat": 12 }}
        }}
    ],
    "weeklySchedule": [{{ "day": "Monday", "focus": "string", "intensity": "High" }}]
}}"#,
        format_profile_for_prompt(profile),
        format_protocol_for_prompt(protocol),
        format_signals_for_prompt(signals),
        baseline_json
    )
}
