use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Top-level agent configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AlertConfig {
    /// Provider used to generate the plan
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Map of provider name to provider configuration
    #[serde(default = "default_providers")]
    pub providers: HashMap<String, ProviderConfig>,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub preferences: DietaryPreferences,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Configuration for a specific AI provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Whether this provider is enabled
    pub enabled: bool,
    /// Model identifier (e.g., "llama-3.3-70b-versatile", "gpt-4.1-mini")
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
}

/// SMTP relay and message settings
#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    /// Sender address, also used as the SMTP login
    #[serde(default)]
    pub sender: String,
    /// SMTP password (an app password for Gmail)
    #[serde(default)]
    pub password: String,
    /// Recipient address
    #[serde(default)]
    pub receiver: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// 465 uses implicit TLS, any other port uses STARTTLS
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// Subject line; `{date}` is replaced with the plan date
    #[serde(default = "default_subject_template")]
    pub subject_template: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            sender: String::new(),
            password: String::new(),
            receiver: String::new(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            subject_template: default_subject_template(),
        }
    }
}

/// When the daily plan goes out
#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
    /// Local time of day in `HH:MM`
    #[serde(default = "default_send_time")]
    pub daily_send_time: String,
    /// Send one plan immediately when the scheduler starts
    #[serde(default = "default_true")]
    pub run_on_start: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            daily_send_time: default_send_time(),
            run_on_start: true,
        }
    }
}

/// Dietary preferences passed into the prompt and the email summary
#[derive(Debug, Deserialize, Clone)]
pub struct DietaryPreferences {
    #[serde(default = "default_diet_type")]
    pub diet_type: String,
    #[serde(default = "default_calories")]
    pub calories_per_day: u32,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub excluded_foods: Vec<String>,
    #[serde(default = "default_meal_complexity")]
    pub meal_complexity: String,
    #[serde(default = "default_protein_focus")]
    pub protein_focus: String,
}

impl Default for DietaryPreferences {
    fn default() -> Self {
        Self {
            diet_type: default_diet_type(),
            calories_per_day: default_calories(),
            allergies: Vec::new(),
            excluded_foods: Vec::new(),
            meal_complexity: default_meal_complexity(),
            protein_focus: default_protein_focus(),
        }
    }
}

/// Email colors
#[derive(Debug, Deserialize, Clone)]
pub struct ThemeConfig {
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
        }
    }
}

// Default value functions
fn default_provider() -> String {
    "groq".to_string()
}

fn default_providers() -> HashMap<String, ProviderConfig> {
    let mut providers = HashMap::new();
    providers.insert(
        "groq".to_string(),
        ProviderConfig {
            enabled: true,
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        },
    );
    providers
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_timeout() -> u64 {
    60
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_subject_template() -> String {
    "Your Daily Nutrition Plan - {date}".to_string()
}

fn default_send_time() -> String {
    "06:00".to_string()
}

fn default_true() -> bool {
    true
}

fn default_diet_type() -> String {
    "balanced".to_string()
}

fn default_calories() -> u32 {
    2000
}

fn default_meal_complexity() -> String {
    "medium".to_string()
}

fn default_protein_focus() -> String {
    "balanced".to_string()
}

fn default_primary_color() -> String {
    "#1e8a3e".to_string()
}

fn default_secondary_color() -> String {
    "#4285f4".to_string()
}

impl AlertConfig {
    /// Load configuration from `config.toml` (optional) and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with NUTRITION__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: NUTRITION__EMAIL__PASSWORD
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        load_config(Some(path))
    }
}

/// Load configuration from a file and environment variables
///
/// Without an explicit path the `config.toml` in the working directory is
/// used when present.
pub fn load_config(path: Option<&Path>) -> Result<AlertConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("config").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: NUTRITION__PROVIDERS__GROQ__API_KEY
        .add_source(
            Environment::with_prefix("NUTRITION")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
