use iced::widget::{text_editor, Button, Column, Container, Text, TextEditor};
use iced::{Element, Length};

use crate::client::gui::theme::{self, input_appearance, TEXT_SECONDARY};
use crate::client::models::app_state::{ChainStage, PromptChainState};
use crate::client::models::messages::Message;

pub fn submit_label(state: &PromptChainState) -> &'static str {
    if state.in_flight() == Some(ChainStage::Enhance) {
        "Enhancing..."
    } else {
        "Enhance Prompt"
    }
}

/// The editor always reports a trailing newline; drop one so an untouched
/// editor reads as empty and the prompt is sent as typed.
pub fn editor_text(raw: &str) -> String {
    raw.strip_suffix('\n').unwrap_or(raw).to_string()
}

/// Stage one: the multi-line seed prompt and its submit button
pub fn view<'a>(state: &'a PromptChainState, editor: &'a text_editor::Content) -> Element<'a, Message> {
    let field = Column::new()
        .spacing(8)
        .push(Text::new("Enter Base Prompt:").size(14).style(TEXT_SECONDARY))
        .push(
            Container::new(
                TextEditor::new(editor)
                    .on_action(Message::BasePromptEdited)
                    .height(Length::Fixed(120.0))
                    .padding(12),
            )
            .style(theme::container_style(input_appearance)),
        );

    let mut submit = Button::new(Text::new(submit_label(state)).font(theme::BOLD_FONT).size(15))
        .style(theme::submit_button_style())
        .padding([12, 24]);
    if state.can_enhance() {
        submit = submit.on_press(Message::SubmitBasePrompt);
    }

    Column::new()
        .width(Length::Fill)
        .spacing(16)
        .push(field)
        .push(submit)
        .into()
}
