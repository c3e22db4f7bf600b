use iced::widget::text_editor;
use iced::{Size, Subscription, Task, keyboard};
use matrixtool_core::{Config, Operand, Session};

pub mod file_ops;
pub mod messages;
pub mod types;
pub mod update;
pub mod view;

pub use messages::*;
pub use types::*;

use crate::theme::{Palette, Theme};

pub struct App {
    pub a_content: text_editor::Content,
    pub b_content: text_editor::Content,
    pub selected: Operand,
    pub session: Session,
    pub dialog: Option<Dialog>,
    pub active_menu: Option<TopMenu>,
    pub config: Config,
    pub font_size: f32,
    pub theme: Theme,
    pub palette: Palette,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = flags.config;
        let theme = Theme::from_config(&config.ui);

        let app = Self {
            a_content: text_editor::Content::new(),
            b_content: text_editor::Content::new(),
            selected: config.session.default_operand,
            session: Session::new(),
            dialog: None,
            active_menu: None,
            font_size: config.ui.font_size,
            palette: theme.palette(),
            theme,
            config,
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        "Matrix Operations Tool".to_string()
    }

    pub fn iced_theme(&self) -> iced::Theme {
        self.theme.iced_theme()
    }

    pub fn content(&self, operand: Operand) -> &text_editor::Content {
        match operand {
            Operand::A => &self.a_content,
            Operand::B => &self.b_content,
        }
    }

    pub fn content_mut(&mut self, operand: Operand) -> &mut text_editor::Content {
        match operand {
            Operand::A => &mut self.a_content,
            Operand::B => &mut self.b_content,
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| Some(Message::KeyPressed(key, modifiers)))
    }
}

pub fn run(flags: Flags) -> iced::Result {
    let window_size = Size::new(
        flags.config.ui.window_width,
        flags.config.ui.window_height,
    );

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(window_size)
        .theme(App::iced_theme)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
