//! Wraps a formatted plan into the full email document.

use crate::config::{AlertConfig, DietaryPreferences, ThemeConfig};
use crate::formatter::format_plan;
use crate::providers::long_date;
use chrono::NaiveDate;
use html_escape::encode_text;

/// Document template, loaded at compile time. Placeholders use `{{NAME}}`.
pub const EMAIL_TEMPLATE: &str = include_str!("template.html");

/// A message ready to hand to a delivery channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub subject: String,
    pub html: String,
    /// Plain-text alternative, the plan as generated
    pub text: String,
}

/// Builds subject lines and HTML bodies for daily plans
#[derive(Debug, Clone)]
pub struct EmailComposer {
    subject_template: String,
    theme: ThemeConfig,
    preferences: DietaryPreferences,
}

impl EmailComposer {
    pub fn new(
        subject_template: impl Into<String>,
        theme: ThemeConfig,
        preferences: DietaryPreferences,
    ) -> Self {
        Self {
            subject_template: subject_template.into(),
            theme,
            preferences,
        }
    }

    pub fn from_config(config: &AlertConfig) -> Self {
        Self::new(
            config.email.subject_template.clone(),
            config.theme.clone(),
            config.preferences.clone(),
        )
    }

    pub fn subject(&self, date: NaiveDate) -> String {
        self.subject_from_long_date(&long_date(date))
    }

    /// Render the complete HTML document for a plan.
    pub fn render_document(&self, plan: &str, date: NaiveDate) -> String {
        let calories = self.preferences.calories_per_day;
        let protein_target = calories / 16; // 25% of calories at 4 kcal/g
        let carbs_target = calories / 8; // 50% of calories at 4 kcal/g
        let date = long_date(date);

        // The plan goes in last so template markers inside model text stay untouched
        EMAIL_TEMPLATE
            .replace("{{TITLE}}", &encode_text(&self.subject_from_long_date(&date)))
            .replace("{{PRIMARY_COLOR}}", &self.theme.primary_color)
            .replace("{{SECONDARY_COLOR}}", &self.theme.secondary_color)
            .replace("{{DATE}}", &date)
            .replace("{{CALORIES}}", &calories.to_string())
            .replace("{{PROTEIN_TARGET}}", &protein_target.to_string())
            .replace("{{CARBS_TARGET}}", &carbs_target.to_string())
            .replace(
                "{{DIET_TYPE}}",
                &encode_text(&title_case(&self.preferences.diet_type)),
            )
            .replace("{{PLAN}}", &format_plan(plan))
    }

    pub fn compose(&self, plan: &str, date: NaiveDate) -> OutgoingEmail {
        OutgoingEmail {
            subject: self.subject(date),
            html: self.render_document(plan, date),
            text: plan.to_string(),
        }
    }

    fn subject_from_long_date(&self, date: &str) -> String {
        self.subject_template.replace("{date}", date)
    }
}

/// Upper-case the first letter of every word and lower-case the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}
