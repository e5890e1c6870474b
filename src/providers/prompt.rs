use crate::config::DietaryPreferences;
use chrono::NaiveDate;

/// The nutritionist prompt template.
///
/// Loaded from `prompt.txt` at compile time. Contains `{{DATE}}`,
/// `{{DIET_TYPE}}`, `{{CALORIES}}`, `{{ALLERGIES}}`, `{{EXCLUDED_FOODS}}`,
/// `{{MEAL_COMPLEXITY}}` and `{{PROTEIN_FOCUS}}` placeholders that are filled
/// in by [`build_diet_prompt`].
pub const DIET_PLAN_PROMPT: &str = include_str!("prompt.txt");

/// Date as written in prompts and subjects, e.g. "Monday, October 19, 2026"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %d, %Y").to_string()
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

/// Fill the prompt template for one day.
pub fn build_diet_prompt(preferences: &DietaryPreferences, date: NaiveDate) -> String {
    DIET_PLAN_PROMPT
        .replace("{{DATE}}", &long_date(date))
        .replace("{{DIET_TYPE}}", &preferences.diet_type)
        .replace("{{CALORIES}}", &preferences.calories_per_day.to_string())
        .replace("{{ALLERGIES}}", &join_or_none(&preferences.allergies))
        .replace("{{EXCLUDED_FOODS}}", &join_or_none(&preferences.excluded_foods))
        .replace("{{MEAL_COMPLEXITY}}", &preferences.meal_complexity)
        .replace("{{PROTEIN_FOCUS}}", &preferences.protein_focus)
}
