use iced::widget::text_editor;
use iced::{Task, keyboard};
use matrixtool_core::{Operand, Operation};
use tracing::{debug, info};

use super::{App, Dialog, Message};
use crate::clipboard::copy_to_clipboard;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EditorAction(operand, action) => {
                self.active_menu = None;
                self.content_mut(operand).perform(action);
            }

            Message::SelectOperand(operand) => {
                self.selected = operand;
            }

            Message::Run(operation) => {
                self.active_menu = None;
                self.run_operation(operation);
            }

            Message::FillExample => {
                self.active_menu = None;
                self.a_content = text_editor::Content::with_text(&self.config.session.example_a);
                self.b_content = text_editor::Content::with_text(&self.config.session.example_b);
                self.session.mark_example_filled();
            }

            Message::ClearAll => {
                self.active_menu = None;
                self.a_content = text_editor::Content::new();
                self.b_content = text_editor::Content::new();
                self.session.clear();
            }

            Message::CopyResult => {
                self.active_menu = None;
                match self.session.copy_text() {
                    None => self.dialog = Some(Dialog::Info("No result to copy".to_string())),
                    Some(text) => match copy_to_clipboard(&text) {
                        Ok(()) => self.session.mark_copied(),
                        Err(e) => {
                            let e = self.session.fail(e);
                            self.dialog = Some(Dialog::Error(e.to_string()));
                        }
                    },
                }
            }

            Message::SaveResult => {
                self.active_menu = None;
                if self.session.current().is_none() {
                    self.dialog = Some(Dialog::Info("No result to save".to_string()));
                } else {
                    return Self::pick_save_path();
                }
            }

            Message::SavePathChosen(path) => {
                let Some(path) = path else {
                    debug!("Save cancelled");
                    return Task::none();
                };
                match self.session.save(&path) {
                    Ok(true) => info!("Saved result to {}", path.display()),
                    Ok(false) => {
                        self.dialog = Some(Dialog::Info("No result to save".to_string()));
                    }
                    Err(e) => self.dialog = Some(Dialog::Error(e.to_string())),
                }
            }

            Message::LoadInto(operand) => {
                self.active_menu = None;
                return Self::pick_load_path(operand);
            }

            Message::LoadPathChosen(operand, path) => {
                let Some(path) = path else {
                    debug!("Load into {} cancelled", operand);
                    return Task::none();
                };
                match self.session.load(operand, &path) {
                    Ok(text) => {
                        *self.content_mut(operand) = text_editor::Content::with_text(&text);
                    }
                    Err(e) => self.dialog = Some(Dialog::Error(e.to_string())),
                }
            }

            Message::ToggleTopMenu(menu) => {
                if self.active_menu == Some(menu) {
                    self.active_menu = None;
                } else {
                    self.active_menu = Some(menu);
                }
            }

            Message::CloseTopMenu => {
                self.active_menu = None;
            }

            Message::ShowAbout => {
                self.active_menu = None;
                self.dialog = Some(Dialog::About);
            }

            Message::CloseDialog => {
                self.dialog = None;
            }

            Message::CloseWindow => {
                self.active_menu = None;
                return iced::exit();
            }

            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_pressed(key, modifiers);
            }
        }
        Task::none()
    }

    /// Re-parses both input areas and runs an operation on them.
    pub fn run_operation(&mut self, operation: Operation) {
        let a_text = self.a_content.text();
        let b_text = self.b_content.text();
        if let Err(e) = self
            .session
            .run(operation, &a_text, &b_text, self.selected)
        {
            self.dialog = Some(Dialog::Error(e.to_string()));
        }
    }

    pub fn handle_key_pressed(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        if matches!(key, keyboard::Key::Named(keyboard::key::Named::Escape)) {
            if self.dialog.is_some() {
                return self.update(Message::CloseDialog);
            }
            return self.update(Message::CloseTopMenu);
        }

        if !modifiers.control() || self.dialog.is_some() {
            return Task::none();
        }

        let keyboard::Key::Character(c) = &key else {
            return Task::none();
        };

        match (c.to_lowercase().as_str(), modifiers.shift()) {
            ("o", false) => self.update(Message::LoadInto(Operand::A)),
            ("o", true) => self.update(Message::LoadInto(Operand::B)),
            ("s", false) => self.update(Message::SaveResult),
            ("c", true) => self.update(Message::CopyResult),
            ("l", false) => self.update(Message::ClearAll),
            ("e", false) => self.update(Message::FillExample),
            ("q", false) => self.update(Message::CloseWindow),
            _ => Task::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Flags, TopMenu};
    use matrixtool_core::{Outcome, Status, parse};

    fn app() -> App {
        App::new(Flags::default()).0
    }

    #[test]
    fn test_example_then_multiply() {
        let mut app = app();
        let _ = app.update(Message::FillExample);
        assert_eq!(app.session.status(), &Status::ExampleFilled);

        let _ = app.update(Message::Run(Operation::Multiply));
        let expected = parse("30 24 18\n84 69 54\n138 114 90").unwrap();
        assert_eq!(app.session.current(), Some(&Outcome::Matrix(expected)));
        assert!(app.dialog.is_none());
    }

    #[test]
    fn test_failed_operation_opens_error_dialog() {
        let mut app = app();
        let _ = app.update(Message::Run(Operation::Add));
        assert_eq!(
            app.dialog,
            Some(Dialog::Error(
                "Both matrices A and B are required for addition".to_string()
            ))
        );
        assert_eq!(
            app.session.status().to_string(),
            "Error: Both matrices A and B are required for addition"
        );

        let _ = app.handle_key_pressed(
            keyboard::Key::Named(keyboard::key::Named::Escape),
            keyboard::Modifiers::default(),
        );
        assert!(app.dialog.is_none());
    }

    #[test]
    fn test_selected_operand_drives_unary_operations() {
        let mut app = app();
        let _ = app.update(Message::FillExample);
        let _ = app.update(Message::SelectOperand(Operand::B));
        let _ = app.update(Message::Run(Operation::Transpose));
        let expected = parse("9 6 3\n8 5 2\n7 4 1").unwrap();
        assert_eq!(app.session.current(), Some(&Outcome::Matrix(expected)));
    }

    #[test]
    fn test_clear_resets_inputs_and_result() {
        let mut app = app();
        let _ = app.update(Message::FillExample);
        let _ = app.update(Message::Run(Operation::Add));
        let _ = app.update(Message::ClearAll);

        assert!(app.session.current().is_none());
        assert!(app.a_content.text().trim().is_empty());
        assert!(app.b_content.text().trim().is_empty());
        assert_eq!(app.session.status(), &Status::Cleared);
    }

    #[test]
    fn test_copy_and_save_without_result_inform() {
        let mut app = app();
        let _ = app.update(Message::CopyResult);
        assert_eq!(app.dialog, Some(Dialog::Info("No result to copy".to_string())));

        let _ = app.update(Message::CloseDialog);
        let _ = app.update(Message::SaveResult);
        assert_eq!(app.dialog, Some(Dialog::Info("No result to save".to_string())));
    }

    #[test]
    fn test_loaded_file_replaces_input_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("b.csv");
        std::fs::write(&path, "1.5,2\n3,4\n").unwrap();

        let mut app = app();
        let _ = app.update(Message::LoadPathChosen(Operand::B, Some(path.clone())));
        assert_eq!(app.b_content.text().trim_end(), "1.5 2\n3 4");
        assert_eq!(app.session.status(), &Status::Loaded(Operand::B, path));
    }

    #[test]
    fn test_cancelled_dialogs_change_nothing() {
        let mut app = app();
        let _ = app.update(Message::LoadPathChosen(Operand::A, None));
        let _ = app.update(Message::SavePathChosen(None));
        assert_eq!(app.session.status(), &Status::Ready);
        assert!(app.dialog.is_none());
    }

    #[test]
    fn test_top_menu_toggles() {
        let mut app = app();
        let _ = app.update(Message::ToggleTopMenu(TopMenu::File));
        assert_eq!(app.active_menu, Some(TopMenu::File));
        let _ = app.update(Message::ToggleTopMenu(TopMenu::File));
        assert_eq!(app.active_menu, None);
    }
}
