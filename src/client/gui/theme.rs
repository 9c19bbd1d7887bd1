// Shared palette and widget appearances for the form
use iced::widget::{button, container};
use iced::{Background, Border, Color, Font, Shadow, Theme, Vector};

pub const BG_MAIN: Color = Color::from_rgb(0.14, 0.14, 0.14);
pub const PANEL_BG: Color = Color::from_rgb(0.94, 0.94, 0.94); // #f0f0f0
pub const INPUT_BORDER: Color = Color::from_rgb(0.8, 0.8, 0.8); // #ccc
pub const ACCENT: Color = Color::from_rgb(0.392, 0.424, 1.0); // #646cff
pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.75, 0.75, 0.75);
pub const TEXT_ON_PANEL: Color = Color::BLACK;

pub const CONTENT_WIDTH: f32 = 800.0;

pub const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

pub fn bg_main_appearance(_: &Theme) -> container::Appearance {
    container::Appearance {
        background: Some(Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Light read-only panel used for the enhanced prompt and the output
pub fn panel_appearance(_: &Theme) -> container::Appearance {
    container::Appearance {
        background: Some(Background::Color(PANEL_BG)),
        text_color: Some(TEXT_ON_PANEL),
        border: Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
    }
}

pub fn input_appearance(_: &Theme) -> container::Appearance {
    container::Appearance {
        background: None,
        text_color: None,
        border: Border {
            width: 1.0,
            color: INPUT_BORDER,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Accent submit button; drawn at 70% opacity while disabled
pub struct SubmitButton;

impl button::StyleSheet for SubmitButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            shadow_offset: Vector::new(0.0, 0.0),
            background: Some(Background::Color(ACCENT)),
            text_color: Color::WHITE,
            border: Border {
                width: 0.0,
                color: Color::TRANSPARENT,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(Color { a: 0.7, ..ACCENT })),
            text_color: Color { a: 0.7, ..active.text_color },
            ..active
        }
    }
}

pub fn submit_button_style() -> iced::theme::Button {
    iced::theme::Button::Custom(Box::new(SubmitButton))
}

pub fn container_style(f: fn(&Theme) -> container::Appearance) -> iced::theme::Container {
    iced::theme::Container::Custom(Box::new(f))
}
