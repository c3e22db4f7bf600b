use iced::widget::{button, column, container, horizontal_space, radio, row, text, text_editor};
use iced::{Background, Border, Element, Font, Length, Padding, Theme};
use matrixtool_core::{Operand, Operation};

use crate::app::{App, Message};
use crate::style::{self, ButtonKind};

impl App {
    /// Left pane: the two input areas and the operation toolbar.
    pub fn view_inputs(&self) -> Element<'_, Message> {
        let p = self.palette;

        column![
            text("Matrices (paste rows; values sep by space/comma)")
                .size(13)
                .font(Font {
                    weight: iced::font::Weight::Bold,
                    ..Font::DEFAULT
                })
                .color(p.text_primary),
            self.view_matrix_input(Operand::A),
            self.view_matrix_input(Operand::B),
            self.view_operation_bar(),
        ]
        .spacing(6)
        .padding(6)
        .height(Length::Fill)
        .into()
    }

    fn view_matrix_input(&self, operand: Operand) -> Element<'_, Message> {
        let p = self.palette;

        let editor = text_editor(self.content(operand))
            .placeholder("1 2 3\n4 5 6")
            .on_action(move |action| Message::EditorAction(operand, action))
            .height(Length::Fill)
            .padding(8)
            .font(Font::MONOSPACE)
            .size(self.font_size)
            .style(move |_: &Theme, status: text_editor::Status| {
                let border_color = match status {
                    text_editor::Status::Focused => p.accent,
                    _ => p.border,
                };
                text_editor::Style {
                    background: Background::Color(p.bg_light),
                    border: Border {
                        color: border_color,
                        width: 1.0,
                        radius: 4.0.into(),
                    },
                    icon: p.text_muted,
                    placeholder: p.text_muted,
                    value: p.text_primary,
                    selection: p.accent.scale_alpha(0.35),
                }
            });

        container(
            column![
                text(format!("Matrix {operand}")).size(12).color(p.text_secondary),
                editor,
            ]
            .spacing(4),
        )
        .padding(6)
        .height(Length::FillPortion(1))
        .style(style::panel(p, 6.0))
        .into()
    }

    fn view_operation_bar(&self) -> Element<'_, Message> {
        let binary = row![
            self.action_button("Add A + B", ButtonKind::Success, Message::Run(Operation::Add)),
            self.action_button("A - B", ButtonKind::Info, Message::Run(Operation::Subtract)),
            self.action_button("A × B", ButtonKind::Primary, Message::Run(Operation::Multiply)),
            horizontal_space(),
            self.action_button("Clear", ButtonKind::Light, Message::ClearAll),
            self.action_button("Example", ButtonKind::Light, Message::FillExample),
        ]
        .spacing(6)
        .align_y(iced::Alignment::Center);

        let unary = row![
            self.operand_choice(Operand::A),
            self.operand_choice(Operand::B),
            self.action_button("Transpose", ButtonKind::Secondary, Message::Run(Operation::Transpose)),
            self.action_button("Determinant", ButtonKind::Warning, Message::Run(Operation::Determinant)),
        ]
        .spacing(6)
        .align_y(iced::Alignment::Center);

        column![binary, unary].spacing(6).into()
    }

    fn action_button(&self, label: &'static str, kind: ButtonKind, msg: Message) -> Element<'static, Message> {
        button(text(label).size(13))
            .padding(Padding::from([6, 12]))
            .style(style::action_button(self.palette, kind))
            .on_press(msg)
            .into()
    }

    fn operand_choice(&self, operand: Operand) -> Element<'static, Message> {
        radio(
            format!("Use {operand}"),
            operand,
            Some(self.selected),
            Message::SelectOperand,
        )
        .size(14)
        .text_size(13)
        .into()
    }
}
