use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{Column, Row, button, column, container, row, scrollable, text};
use iced::{Background, Border, Element, Font, Length, Padding};
use matrixtool_core::{Grid, Outcome, format_value};

use crate::app::{App, Message};
use crate::style::{self, ButtonKind};

const CELL_WIDTH: f32 = 80.0;

impl App {
    /// Right pane: the current result and the copy/save actions.
    pub fn view_result_panel(&self) -> Element<'_, Message> {
        let p = self.palette;

        let body: Element<'_, Message> = match self.session.current() {
            None => container(text("No result yet").size(14).color(p.text_muted))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
            Some(Outcome::Matrix(grid)) => self.view_grid(grid),
            Some(Outcome::Scalar(value)) => container(
                text(format!("Determinant: {}", format_value(*value)))
                    .size(self.font_size + 4.0)
                    .color(p.text_primary),
            )
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        };

        let actions = row![
            button(text("Copy Result").size(13))
                .padding(Padding::from([6, 12]))
                .style(style::action_button(p, ButtonKind::Secondary))
                .on_press(Message::CopyResult),
            button(text("Save Result as CSV").size(13))
                .padding(Padding::from([6, 12]))
                .style(style::action_button(p, ButtonKind::Secondary))
                .on_press(Message::SaveResult),
        ]
        .spacing(6);

        column![
            text("Result")
                .size(13)
                .font(Font {
                    weight: iced::font::Weight::Bold,
                    ..Font::DEFAULT
                })
                .color(p.text_primary),
            container(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(6)
                .style(style::panel(p, 6.0)),
            actions,
        ]
        .spacing(6)
        .padding(6)
        .height(Length::Fill)
        .into()
    }

    /// Table with one `Col n` heading per column.
    fn view_grid(&self, grid: &Grid) -> Element<'_, Message> {
        let p = self.palette;
        let size = self.font_size - 1.0;

        let cell = move |label: String, heading: bool| -> Element<'static, Message> {
            let color = if heading { p.text_secondary } else { p.text_primary };
            container(text(label).size(size).color(color).font(Font::MONOSPACE))
                .width(Length::Fixed(CELL_WIDTH))
                .padding(Padding::from([4, 2]))
                .center_x(Length::Fixed(CELL_WIDTH))
                .into()
        };

        let header = Row::with_children((0..grid.cols()).map(|i| cell(format!("Col {i}"), true)));
        let header = container(header).style(move |_| container::Style {
            background: Some(Background::Color(p.bg_light)),
            border: Border {
                color: p.border,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        });

        let mut lines: Vec<Element<'_, Message>> = vec![header.into()];
        for values in grid.iter_rows() {
            lines.push(Row::with_children(values.into_iter().map(|v| cell(format_value(v), false))).into());
        }

        let table = Column::with_children(lines);

        scrollable(table)
            .direction(Direction::Both {
                vertical: Scrollbar::default(),
                horizontal: Scrollbar::default(),
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
