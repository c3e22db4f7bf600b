use iced::widget::{Space, button, column, container, row, text};
use iced::{Background, Border, Element, Length, Padding};

use crate::app::{App, Message};
use crate::style::{self, ButtonKind};

impl App {
    /// Error or info box with a single dismiss button.
    pub fn view_message_modal<'a>(
        &self,
        title: &'a str,
        message: &'a str,
        is_error: bool,
    ) -> Element<'a, Message> {
        let p = self.palette;
        let title_color = if is_error { p.danger } else { p.text_primary };

        let modal_content = column![
            text(title).size(16).color(title_color),
            Space::with_height(12),
            text(message).size(13).color(p.text_secondary),
            Space::with_height(16),
            row![
                Space::with_width(Length::Fill),
                button(text("OK").size(13))
                    .padding(Padding::from([8, 20]))
                    .style(style::action_button(p, ButtonKind::Accent))
                    .on_press(Message::CloseDialog),
            ]
            .align_y(iced::Alignment::Center),
        ]
        .padding(24)
        .width(Length::Fixed(380.0));

        self.modal_frame(modal_content.into())
    }

    pub fn view_about_modal(&self) -> Element<'_, Message> {
        let p = self.palette;

        let modal_content = column![
            text("Matrix Operations Tool").size(16).color(p.text_primary),
            Space::with_height(12),
            text("Add, subtract and multiply two matrices, or transpose one and take its determinant.")
                .size(13)
                .color(p.text_secondary),
            Space::with_height(4),
            text("Supports CSV load/save").size(13).color(p.text_secondary),
            Space::with_height(8),
            text(format!("Version {}", env!("CARGO_PKG_VERSION")))
                .size(11)
                .color(p.text_muted),
            Space::with_height(16),
            row![
                Space::with_width(Length::Fill),
                button(text("Close").size(13))
                    .padding(Padding::from([8, 20]))
                    .style(style::action_button(p, ButtonKind::Light))
                    .on_press(Message::CloseDialog),
            ],
        ]
        .padding(24)
        .width(Length::Fixed(380.0));

        self.modal_frame(modal_content.into())
    }

    fn modal_frame<'a>(&self, content: Element<'a, Message>) -> Element<'a, Message> {
        let p = self.palette;

        container(container(content).style(move |_| container::Style {
            background: Some(Background::Color(p.bg_medium)),
            border: Border {
                color: p.border,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}
