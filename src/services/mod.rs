pub mod fasting;
pub mod meals;
pub mod personal_plan;
pub mod plan_parser;
pub mod plan_prompt;
pub mod profile;
pub mod recommendation;
pub mod schedule;
pub mod signals;
pub mod workouts;
