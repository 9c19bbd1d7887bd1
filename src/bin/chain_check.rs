// Headless run of both chained calls against the configured model.
// Usage: chain_check "<base prompt>" "<input>"
use std::sync::Arc;

use anyhow::{bail, Context};
use log::info;

use prompt_enhancer::client::config::ClientConfig;
use prompt_enhancer::client::models::app_state::{ChainStage, PromptChainState};
use prompt_enhancer::client::models::messages::Message;
use prompt_enhancer::client::services::gemini_client::GeminiClient;
use prompt_enhancer::client::services::generation_service::{run_generation, GenerativeModel};
use prompt_enhancer::utils::logger;

const USAGE: &str = "usage: chain_check \"<base prompt>\" \"<input>\"";

async fn run_stage(state: &mut PromptChainState, model: &Arc<dyn GenerativeModel>, stage: ChainStage) -> anyhow::Result<()> {
    let prompt = match stage {
        ChainStage::Enhance => state.begin_enhance(),
        ChainStage::Generate => state.begin_generate(),
    }
    .with_context(|| format!("{} stage cannot start", stage))?;

    let Message::GenerationFinished { stage, result } = run_generation(model.clone(), stage, prompt).await else {
        bail!("{} call produced no result", stage);
    };
    if let Err(e) = &result {
        bail!("{} call failed: {}", stage, e);
    }
    state.finish(stage, result);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    logger::init()?;

    let mut args = std::env::args().skip(1);
    let base_prompt = args.next().context(USAGE)?;
    let user_input = args.next().context(USAGE)?;

    let config = ClientConfig::from_env()?;
    let model: Arc<dyn GenerativeModel> = Arc::new(GeminiClient::new(&config)?);
    info!("Using model {}", model.model_name());

    let mut state = PromptChainState::default();
    state.base_prompt = base_prompt;

    run_stage(&mut state, &model, ChainStage::Enhance).await?;
    println!("ENHANCED -> {}", state.enhanced_prompt);

    state.user_input = user_input;
    run_stage(&mut state, &model, ChainStage::Generate).await?;
    println!("OUTPUT -> {}", state.api_output);

    Ok(())
}
