use iced::widget::{Button, Column, Container, Text, TextInput};
use iced::{Element, Length};

use crate::client::gui::theme::{self, input_appearance, panel_appearance, TEXT_SECONDARY};
use crate::client::models::app_state::{ChainStage, PromptChainState};
use crate::client::models::messages::Message;

pub fn submit_label(state: &PromptChainState) -> &'static str {
    if state.in_flight() == Some(ChainStage::Generate) {
        "Generating..."
    } else {
        "Generate Output"
    }
}

/// Stage two: the enhanced prompt and the input form. Only built when there
/// is an enhanced prompt to show.
pub fn view(state: &PromptChainState) -> Element<Message> {
    let panel = Container::new(Text::new(&state.enhanced_prompt).size(15))
        .width(Length::Fill)
        .padding(16)
        .style(theme::container_style(panel_appearance));

    let field = Column::new()
        .spacing(8)
        .push(Text::new("Your Input:").size(14).style(TEXT_SECONDARY))
        .push(
            Container::new(
                TextInput::new("Enter your specific input...", &state.user_input)
                    .on_input(Message::UserInputChanged)
                    .on_submit(Message::SubmitUserInput)
                    .width(Length::Fill)
                    .padding(12)
                    .size(15),
            )
            .style(theme::container_style(input_appearance)),
        );

    let mut submit = Button::new(Text::new(submit_label(state)).font(theme::BOLD_FONT).size(15))
        .style(theme::submit_button_style())
        .padding([12, 24]);
    if state.can_generate() {
        submit = submit.on_press(Message::SubmitUserInput);
    }

    Column::new()
        .width(Length::Fill)
        .spacing(16)
        .push(Text::new("Enhanced Prompt:").size(24).font(theme::BOLD_FONT))
        .push(panel)
        .push(field)
        .push(submit)
        .into()
}
