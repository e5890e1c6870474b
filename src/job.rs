use crate::config::{AlertConfig, DietaryPreferences};
use crate::delivery::{DeliveryChannel, SmtpChannel};
use crate::email::EmailComposer;
use crate::providers::{build_diet_prompt, LlmProvider, ProviderFactory};
use crate::AlertError;
use chrono::{Local, NaiveDate};
use log::{error, info};

/// One generate, compose and send cycle
pub struct DeliveryJob {
    provider: Box<dyn LlmProvider>,
    channel: Box<dyn DeliveryChannel>,
    composer: EmailComposer,
    preferences: DietaryPreferences,
}

impl DeliveryJob {
    pub fn new(
        provider: Box<dyn LlmProvider>,
        channel: Box<dyn DeliveryChannel>,
        composer: EmailComposer,
        preferences: DietaryPreferences,
    ) -> Self {
        Self {
            provider,
            channel,
            composer,
            preferences,
        }
    }

    /// Wire the configured provider to an SMTP channel
    pub fn from_config(config: &AlertConfig) -> Result<Self, AlertError> {
        Ok(Self::new(
            ProviderFactory::get_default_provider(config)?,
            Box::new(SmtpChannel::new(&config.email)?),
            EmailComposer::from_config(config),
            config.preferences.clone(),
        ))
    }

    /// Run the cycle for a given date, stopping at the first failure.
    pub async fn run_for(&self, date: NaiveDate) -> Result<(), AlertError> {
        info!(
            "Generating daily nutrition plan with {}...",
            self.provider.provider_name()
        );
        let prompt = build_diet_prompt(&self.preferences, date);
        let plan = self
            .provider
            .generate(&prompt)
            .await
            .map_err(|e| AlertError::Generation(e.to_string()))?;

        info!(
            "Sending nutrition plan via {}...",
            self.channel.channel_name()
        );
        let email = self.composer.compose(&plan, date);
        self.channel.deliver(&email).await
    }

    /// Run the cycle for today and log the outcome. Returns true on success.
    pub async fn run(&self) -> bool {
        match self.run_for(Local::now().date_naive()).await {
            Ok(()) => {
                info!("Daily nutrition plan delivered successfully!");
                true
            }
            Err(e) => {
                error!("Failed to deliver nutrition plan: {}", e);
                false
            }
        }
    }
}
