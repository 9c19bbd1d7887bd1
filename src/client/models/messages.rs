use iced::widget::text_editor;

use crate::client::models::app_state::ChainStage;

#[derive(Debug, Clone)]
pub enum Message {
    // Used where a message is required but nothing should happen
    None,
    // Raw edit on the multi-line base prompt editor, applied by the window
    BasePromptEdited(text_editor::Action),
    BasePromptChanged(String),
    UserInputChanged(String),
    SubmitBasePrompt,
    SubmitUserInput,
    // Completion of a generation call; the error is already stringified for logging
    GenerationFinished { stage: ChainStage, result: Result<String, String> },
}
