use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

use crate::client::gui::theme::{self, panel_appearance};
use crate::client::models::app_state::PromptChainState;
use crate::client::models::messages::Message;

pub fn view(state: &PromptChainState) -> Element<Message> {
    Column::new()
        .width(Length::Fill)
        .spacing(16)
        .push(Text::new("Output:").size(24).font(theme::BOLD_FONT))
        .push(
            Container::new(Text::new(&state.api_output).size(15))
                .width(Length::Fill)
                .padding(16)
                .style(theme::container_style(panel_appearance)),
        )
        .into()
}
