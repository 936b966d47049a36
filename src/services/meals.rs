use crate::services::profile::{DietaryPreference, UserProfile};
use crate::services::recommendation::{Macros, MealTemplate};

// Breakfast, lunch and dinner each carry their own dispatch. They are not
// interchangeable: mediterranean only changes lunch, vegetarian only dinner.

/// Always four slots: first meal, lunch, dinner, post-workout snack.
pub fn suggested_meals(profile: &UserProfile) -> Vec<MealTemplate> {
    let preference = profile.dietary_preference;

    vec![
        first_meal(preference),
        lunch(preference),
        dinner(preference),
        post_workout_snack(),
    ]
}

fn meal(slot: &str, name: &str, description: &str, macros: Macros) -> MealTemplate {
    MealTemplate {
        meal: slot.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        macros,
    }
}

fn macros(calories: i32, protein: i32, carbs: i32, fat: i32) -> Macros {
    Macros {
        calories,
        protein,
        carbs,
        fat,
    }
}

fn first_meal(preference: Option<DietaryPreference>) -> MealTemplate {
    match preference {
        Some(DietaryPreference::IntermittentFasting) => meal(
            "First Meal (12pm)",
            "Protein Power Bowl",
            "Grilled chicken, quinoa, roasted vegetables and tahini to break the fast with a large, protein-dense meal",
            macros(750, 50, 65, 28),
        ),
        Some(DietaryPreference::LowCarb) => meal(
            "Breakfast",
            "Veggie Omelette with Avocado",
            "Three-egg omelette with spinach, peppers and feta, served with half an avocado",
            macros(450, 28, 10, 34),
        ),
        _ => meal(
            "Breakfast",
            "Greek Yogurt Parfait",
            "Greek yogurt layered with oats, mixed berries and a drizzle of honey",
            macros(400, 30, 50, 9),
        ),
    }
}

fn lunch(preference: Option<DietaryPreference>) -> MealTemplate {
    match preference {
        Some(DietaryPreference::LowCarb) => meal(
            "Lunch",
            "Grilled Chicken Caesar Salad",
            "Romaine, grilled chicken, parmesan and olive-oil Caesar dressing, no croutons",
            macros(520, 45, 12, 32),
        ),
        Some(DietaryPreference::Mediterranean) => meal(
            "Lunch",
            "Mediterranean Chickpea Bowl",
            "Chickpeas, cucumber, tomato, olives, feta and bulgur with lemon-olive oil dressing",
            macros(580, 24, 68, 22),
        ),
        _ => meal(
            "Lunch",
            "Turkey and Quinoa Bowl",
            "Lean ground turkey over quinoa with black beans, corn and salsa",
            macros(600, 42, 65, 16),
        ),
    }
}

fn dinner(preference: Option<DietaryPreference>) -> MealTemplate {
    match preference {
        Some(DietaryPreference::LowCarb) => meal(
            "Dinner",
            "Baked Salmon with Asparagus",
            "Oven-baked salmon fillet with roasted asparagus and garlic butter",
            macros(550, 40, 10, 38),
        ),
        Some(DietaryPreference::Vegetarian) => meal(
            "Dinner",
            "Tofu and Vegetable Stir-Fry",
            "Extra-firm tofu with broccoli, snap peas and peppers over brown rice",
            macros(560, 30, 60, 20),
        ),
        _ => meal(
            "Dinner",
            "Lean Beef with Sweet Potato",
            "Grilled sirloin with roasted sweet potato and steamed green beans",
            macros(650, 48, 55, 22),
        ),
    }
}

fn post_workout_snack() -> MealTemplate {
    meal(
        "Post-Workout Snack",
        "Protein Smoothie",
        "Whey or plant protein blended with a banana, spinach and almond milk",
        macros(300, 30, 35, 5),
    )
}
