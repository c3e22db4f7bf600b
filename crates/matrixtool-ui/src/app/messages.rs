use iced::keyboard;
use iced::widget::text_editor;
use matrixtool_core::{Operand, Operation};
use std::path::PathBuf;

use crate::app::types::TopMenu;

#[derive(Debug, Clone)]
pub enum Message {
    // Input areas
    EditorAction(Operand, text_editor::Action),
    SelectOperand(Operand),

    // Operations
    Run(Operation),
    FillExample,
    ClearAll,

    // Result actions
    CopyResult,
    SaveResult,

    // File operations
    LoadInto(Operand),

    // Top menu bar
    ToggleTopMenu(TopMenu),
    CloseTopMenu,

    // Dialogs
    ShowAbout,
    CloseDialog,

    // Window operations
    CloseWindow,
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    // Async results
    LoadPathChosen(Operand, Option<PathBuf>),
    SavePathChosen(Option<PathBuf>),
}
