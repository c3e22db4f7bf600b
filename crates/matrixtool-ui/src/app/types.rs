use matrixtool_core::Config;

/// Startup parameters handed to [`crate::run`].
#[derive(Debug, Default)]
pub struct Flags {
    pub config: Config,
}

/// Modal dialog currently shown over the main view.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// A failed action, with the error's message.
    Error(String),
    /// Informational notice, e.g. nothing to copy.
    Info(String),
    About,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopMenu {
    File,
    Help,
}

impl TopMenu {
    pub const ALL: [TopMenu; 2] = [TopMenu::File, TopMenu::Help];

    pub fn label(&self) -> &'static str {
        match self {
            TopMenu::File => "File",
            TopMenu::Help => "Help",
        }
    }
}
