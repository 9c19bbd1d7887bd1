use std::fmt;
use std::sync::Arc;

use iced::Command;
use log::{debug, error, warn};

use crate::client::models::messages::Message;
use crate::client::services::generation_service::{run_generation, GenerativeModel};
use crate::client::services::prompts;

/// Which of the two chained calls a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStage {
    Enhance,
    Generate,
}

impl fmt::Display for ChainStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChainStage::Enhance => "enhance",
            ChainStage::Generate => "generate",
        };
        write!(f, "{}", s)
    }
}

/// Form state for one window: base prompt, enhanced prompt, input, output.
///
/// At most one call is in flight; `in_flight` records which one. The second
/// stage is reachable only once `enhanced_prompt` is non-empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptChainState {
    pub base_prompt: String,
    pub enhanced_prompt: String,
    pub user_input: String,
    pub api_output: String,
    in_flight: Option<ChainStage>,
}

impl PromptChainState {
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<ChainStage> {
        self.in_flight
    }

    pub fn can_enhance(&self) -> bool {
        !self.is_loading() && !self.base_prompt.is_empty()
    }

    pub fn can_generate(&self) -> bool {
        !self.is_loading() && self.shows_second_stage() && !self.user_input.is_empty()
    }

    pub fn shows_second_stage(&self) -> bool {
        !self.enhanced_prompt.is_empty()
    }

    pub fn shows_output(&self) -> bool {
        !self.api_output.is_empty()
    }

    /// Starts the first call. Returns the prompt to send, or `None` if the
    /// enhance form cannot be submitted right now.
    pub fn begin_enhance(&mut self) -> Option<String> {
        if !self.can_enhance() {
            return None;
        }
        self.in_flight = Some(ChainStage::Enhance);
        Some(prompts::enhance_prompt(&self.base_prompt))
    }

    /// Starts the second call. Returns the prompt to send, or `None` if there
    /// is no enhanced prompt yet, no input, or a call is already running.
    pub fn begin_generate(&mut self) -> Option<String> {
        if !self.can_generate() {
            return None;
        }
        self.in_flight = Some(ChainStage::Generate);
        Some(prompts::generate_output(&self.enhanced_prompt, &self.user_input))
    }

    /// Applies the outcome of a call. A failure only clears the loading flag.
    pub fn finish(&mut self, stage: ChainStage, result: Result<String, String>) {
        if self.in_flight != Some(stage) {
            warn!("[STATE] ignoring {} result, in flight: {:?}", stage, self.in_flight);
            return;
        }
        self.in_flight = None;

        match (stage, result) {
            (ChainStage::Enhance, Ok(text)) => {
                self.enhanced_prompt = text;
                self.user_input.clear();
                self.api_output.clear();
            }
            (ChainStage::Generate, Ok(text)) => {
                self.api_output = text;
            }
            (ChainStage::Enhance, Err(e)) => error!("Error enhancing prompt: {}", e),
            (ChainStage::Generate, Err(e)) => error!("Error generating output: {}", e),
        }
    }

    pub fn update(&mut self, message: Message, model: &Arc<dyn GenerativeModel>) -> Command<Message> {
        match message {
            Message::None => {}
            Message::BasePromptEdited(_) => debug!("[STATE] editor action reached the state directly"),
            Message::BasePromptChanged(text) => {
                self.base_prompt = text;
            }
            Message::UserInputChanged(text) => {
                self.user_input = text;
            }
            Message::SubmitBasePrompt => match self.begin_enhance() {
                Some(prompt) => {
                    return Command::perform(run_generation(model.clone(), ChainStage::Enhance, prompt), |msg| msg);
                }
                None => debug!("[STATE] enhance submit ignored"),
            },
            Message::SubmitUserInput => match self.begin_generate() {
                Some(prompt) => {
                    return Command::perform(run_generation(model.clone(), ChainStage::Generate, prompt), |msg| msg);
                }
                None => debug!("[STATE] generate submit ignored"),
            },
            Message::GenerationFinished { stage, result } => {
                self.finish(stage, result);
            }
        }
        Command::none()
    }
}
