//! App creation

use super::super::DeckApp;
use crate::app::config::{DeckConfig, GeneratorConfig};
use crate::app::draft::{GeminiClient, TextGenerator};
use crate::{log_error, log_info, log_warn};
use eframe::egui;
use std::sync::Arc;

impl DeckApp {
    /// Create the app from the eframe creation context and the loaded config
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: DeckConfig,
        config_error: Option<String>,
    ) -> Self {
        let mut app = Self::from_config(config, config_error);
        app.apply_theme(&cc.egui_ctx);
        app.theme_applied = true;
        app
    }

    /// Wire the text-generation client from configuration. A generator that
    /// cannot be built falls back to the default settings and the problem is
    /// surfaced in the status bar.
    pub fn from_config(config: DeckConfig, config_error: Option<String>) -> Self {
        let mut config_error = config_error;
        let api_key = config.generator.api_key();
        if api_key.is_none() {
            log_warn!(
                "{} is not set; draft generation will fail until it is",
                config.generator.api_key_env
            );
        }

        let client = match GeminiClient::from_config(&config.generator, api_key.clone()) {
            Ok(client) => client,
            Err(e) => {
                log_error!("Invalid generator settings, using defaults: {:#}", e);
                config_error.get_or_insert_with(|| format!("{:#}", e));
                match GeminiClient::from_config(&GeneratorConfig::default(), api_key) {
                    Ok(client) => client,
                    Err(e) => {
                        // Only an HTTP client that fails to build ends up here
                        log_error!("Could not build the text-generation client: {:#}", e);
                        return Self::without_generator(config, config_error, format!("{:#}", e));
                    }
                }
            }
        };

        log_info!("Text-generation client ready: {:?}", client);
        let ready = client.has_api_key();
        let mut app = Self::with_generator(Arc::new(client), config.theme, ready);
        app.config_error = config_error;
        app
    }

    fn without_generator(config: DeckConfig, config_error: Option<String>, reason: String) -> Self {
        let mut app = Self::with_generator(
            Arc::new(Unavailable { reason: reason.clone() }),
            config.theme,
            false,
        );
        app.config_error = config_error.or(Some(reason));
        app
    }

    pub(super) fn request_close(&self, ctx: &egui::Context) {
        log_info!("Quit requested");
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

/// Stand-in used when no HTTP client could be created
struct Unavailable {
    reason: String,
}

#[async_trait::async_trait]
impl TextGenerator for Unavailable {
    async fn generate(&self, _prompt: &str) -> Result<String, crate::app::draft::DraftError> {
        Err(crate::app::draft::DraftError::Transport(self.reason.clone()))
    }
}
