use std::sync::Arc;

use iced::Application;
use log::error;

use prompt_enhancer::client::config::ClientConfig;
use prompt_enhancer::client::gui::app::{AppFlags, PromptApp};
use prompt_enhancer::client::services::gemini_client::GeminiClient;
use prompt_enhancer::utils::logger;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    if let Err(e) = logger::init() {
        eprintln!("logger already initialized: {}", e);
    }

    let config = match ClientConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    let client = match GeminiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create model client: {:#}", e);
            std::process::exit(1);
        }
    };

    PromptApp::run(iced::Settings::with_flags(AppFlags { model: Arc::new(client) }))
}
