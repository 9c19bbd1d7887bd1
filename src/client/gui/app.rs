use std::sync::Arc;

use iced::widget::{text_editor, Column, Container, Scrollable, Text};
use iced::{Alignment, Application, Command, Element, Length, Theme};

use crate::client::gui::theme::{self, bg_main_appearance, CONTENT_WIDTH, TEXT_PRIMARY};
use crate::client::gui::views;
use crate::client::models::app_state::PromptChainState;
use crate::client::models::messages::Message;
use crate::client::services::generation_service::GenerativeModel;

pub const APP_TITLE: &str = "Gemini Prompt Enhancer";

pub struct AppFlags {
    pub model: Arc<dyn GenerativeModel>,
}

pub struct PromptApp {
    pub state: PromptChainState,
    pub model: Arc<dyn GenerativeModel>,
    // Backs the multi-line base prompt; its text is mirrored into `state`
    base_editor: text_editor::Content,
}

impl Application for PromptApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        log::info!("[APP] Using model {}", flags.model.model_name());
        (
            PromptApp {
                state: PromptChainState::default(),
                model: flags.model,
                base_editor: text_editor::Content::new(),
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::BasePromptEdited(action) => {
                self.base_editor.perform(action);
                let text = views::base_prompt::editor_text(&self.base_editor.text());
                self.state.update(Message::BasePromptChanged(text), &self.model)
            }
            other => self.state.update(other, &self.model),
        }
    }

    fn view(&self) -> Element<Message> {
        let mut content = Column::new()
            .width(Length::Fill)
            .max_width(CONTENT_WIDTH)
            .spacing(32)
            .padding(32)
            .align_items(Alignment::Center)
            .push(Text::new(APP_TITLE).size(36).font(theme::BOLD_FONT).style(TEXT_PRIMARY))
            .push(views::base_prompt::view(&self.state, &self.base_editor));

        if self.state.shows_second_stage() {
            content = content.push(views::enhanced_prompt::view(&self.state));
        }
        if self.state.shows_output() {
            content = content.push(views::output::view(&self.state));
        }

        let centered = Container::new(content).width(Length::Fill).center_x();

        Container::new(Scrollable::new(centered))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::container_style(bg_main_appearance))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use iced::widget::text_editor::{Action, Edit};

    use crate::common::error::GenerationError;

    struct Idle;

    #[async_trait]
    impl GenerativeModel for Idle {
        fn model_name(&self) -> &str {
            "idle"
        }

        async fn generate_text(&self, _prompt: &str) -> Result<String, GenerationError> {
            Err(GenerationError::EmptyResponse)
        }
    }

    fn app() -> PromptApp {
        PromptApp::new(AppFlags { model: Arc::new(Idle) }).0
    }

    #[test]
    fn base_prompt_accepts_multiple_lines() {
        let mut app = app();
        assert!(!app.state.can_enhance());

        for edit in [Edit::Insert('a'), Edit::Enter, Edit::Insert('b')] {
            let _ = app.update(Message::BasePromptEdited(Action::Edit(edit)));
        }
        assert_eq!(app.state.base_prompt, "a\nb");
        assert!(app.state.can_enhance());
    }

    #[test]
    fn clearing_the_editor_disables_enhance() {
        let mut app = app();
        let _ = app.update(Message::BasePromptEdited(Action::Edit(Edit::Insert('x'))));
        assert!(app.state.can_enhance());

        let _ = app.update(Message::BasePromptEdited(Action::Edit(Edit::Backspace)));
        assert_eq!(app.state.base_prompt, "");
        assert!(!app.state.can_enhance());
    }
}
