pub mod dialogs;
pub mod inputs;
pub mod menu;
pub mod result;

use iced::widget::{Space, column, container, mouse_area, row, stack, text};
use iced::{Background, Border, Color, Element, Length, Padding};
use matrixtool_core::Status;

use crate::app::{App, Dialog, Message};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let p = self.palette;

        let content = column![
            self.view_toolbar(),
            row![
                container(self.view_inputs())
                    .width(Length::FillPortion(1))
                    .height(Length::Fill),
                container(self.view_result_panel())
                    .width(Length::FillPortion(1))
                    .height(Length::Fill),
            ]
            .spacing(1)
            .height(Length::Fill),
            self.view_status_bar(),
        ];

        let main_view: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(p.bg_dark)),
                ..Default::default()
            })
            .into();

        if let Some(dialog) = &self.dialog {
            let modal = match dialog {
                Dialog::Error(message) => self.view_message_modal("Error", message, true),
                Dialog::Info(message) => self.view_message_modal("Info", message, false),
                Dialog::About => self.view_about_modal(),
            };
            stack![
                main_view,
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .style(|_| container::Style {
                            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
                            ..Default::default()
                        })
                )
                .on_press(Message::CloseDialog),
                modal,
            ]
            .into()
        } else if self.active_menu.is_some() {
            stack![
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                )
                .on_press(Message::CloseTopMenu),
                main_view,
                self.view_menu_dropdown(),
            ]
            .into()
        } else {
            main_view
        }
    }

    pub fn view_status_bar(&self) -> Element<'_, Message> {
        let p = self.palette;
        let status = self.session.status();
        let color = match status {
            Status::Error(_) => p.danger,
            _ => p.text_secondary,
        };

        container(
            row![text(status.to_string()).size(12).color(color)]
                .padding(Padding::from([6, 12]))
                .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(28)
        .style(move |_| container::Style {
            background: Some(Background::Color(p.bg_medium)),
            border: Border {
                color: p.border,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
    }
}
