use iced::widget::{Column, Row, Space, button, column, container, horizontal_space, row, text};
use iced::{Background, Border, Element, Length, Padding, Theme};
use matrixtool_core::Operand;

use crate::app::{App, Message, TopMenu};
use crate::style;

impl App {
    pub fn view_toolbar(&self) -> Element<'_, Message> {
        let p = self.palette;
        let mut menu_items: Vec<Element<'_, Message>> = Vec::new();

        for menu in TopMenu::ALL {
            let is_active = self.active_menu == Some(menu);

            let menu_btn = button(
                text(menu.label()).size(12).color(if is_active {
                    p.text_primary
                } else {
                    p.text_secondary
                }),
            )
            .padding(Padding::from([6, 10]))
            .style(move |_: &Theme, status: button::Status| {
                let bg = if is_active {
                    p.bg_active
                } else {
                    match status {
                        button::Status::Hovered => p.bg_hover,
                        _ => p.bg_medium,
                    }
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: p.text_primary,
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            })
            .on_press(Message::ToggleTopMenu(menu));

            menu_items.push(menu_btn.into());
        }

        menu_items.push(horizontal_space().into());
        menu_items.push(text(self.title()).size(12).color(p.text_muted).into());

        let toolbar = Row::with_children(menu_items)
            .spacing(2)
            .padding(Padding::from([4, 8]))
            .align_y(iced::Alignment::Center);

        container(toolbar)
            .width(Length::Fill)
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

    pub fn menu_item<'a>(&self, label: &'a str, shortcut: &'a str, msg: Message) -> Element<'a, Message> {
        let p = self.palette;
        button(
            row![
                text(label).size(12).color(p.text_primary),
                horizontal_space(),
                text(shortcut).size(11).color(p.text_muted),
            ]
            .width(Length::Fill)
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([6, 16]))
        .style(style::menu_button(p))
        .on_press(msg)
        .into()
    }

    pub fn menu_separator<'a>(&self) -> Element<'a, Message> {
        container(Space::new(Length::Fill, 1))
            .padding(Padding::from([4, 8]))
            .style(style::separator(self.palette))
            .into()
    }

    pub fn view_menu_dropdown(&self) -> Element<'_, Message> {
        let menu = match self.active_menu {
            Some(m) => m,
            None => return Space::new(0, 0).into(),
        };

        let mut items: Vec<Element<'_, Message>> = Vec::new();

        match menu {
            TopMenu::File => {
                items.push(self.menu_item("Load Matrix A...", "Ctrl+O", Message::LoadInto(Operand::A)));
                items.push(self.menu_item("Load Matrix B...", "Ctrl+Shift+O", Message::LoadInto(Operand::B)));
                items.push(self.menu_separator());
                items.push(self.menu_item("Save Result as CSV...", "Ctrl+S", Message::SaveResult));
                items.push(self.menu_item("Copy Result", "Ctrl+Shift+C", Message::CopyResult));
                items.push(self.menu_separator());
                items.push(self.menu_item("Exit", "Ctrl+Q", Message::CloseWindow));
            }
            TopMenu::Help => {
                items.push(self.menu_item("About", "", Message::ShowAbout));
            }
        }

        let menu_content = Column::with_children(items)
            .width(Length::Fixed(260.0))
            .padding(4);

        let menu_offset_x = match menu {
            TopMenu::File => 8.0,
            TopMenu::Help => 48.0,
        };

        let menu_box = container(menu_content).style(style::panel(self.palette, 6.0));

        column![
            Space::with_height(Length::Fixed(32.0)),
            row![
                Space::with_width(Length::Fixed(menu_offset_x)),
                menu_box,
            ],
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
