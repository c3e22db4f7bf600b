//! Theme system for the application.
//!
//! A [`Theme`] is plain serializable data so users can ship their own as a
//! JSON file. Views never read it directly; they work with the flattened,
//! `Copy` [`Palette`] of iced colors, which is cheap to move into style
//! closures.

use matrixtool_core::config::{ThemeKind, UiConfig};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Color representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to iced Color.
    pub fn to_iced(&self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

/// Application theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: String,

    /// Is this a dark theme?
    pub is_dark: bool,

    /// Background colors
    pub background: BackgroundColors,

    /// Foreground (text) colors
    pub foreground: ForegroundColors,

    /// Border color
    pub border: Color,

    /// Action button colors
    pub actions: ActionColors,
}

/// Background colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundColors {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub hover: Color,
    pub active: Color,
}

/// Foreground (text) colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForegroundColors {
    pub primary: Color,
    pub secondary: Color,
    pub muted: Color,
    pub accent: Color,
}

/// Colors of the operation buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionColors {
    pub success: Color,
    pub info: Color,
    pub primary: Color,
    pub secondary: Color,
    pub warning: Color,
    pub danger: Color,
}

impl Theme {
    /// Creates the default dark theme.
    pub fn dark() -> Self {
        Self {
            name: "Matrix Dark".to_string(),
            is_dark: true,
            background: BackgroundColors {
                primary: Color::rgb(0.11, 0.11, 0.13),
                secondary: Color::rgb(0.14, 0.14, 0.16),
                tertiary: Color::rgb(0.18, 0.18, 0.20),
                hover: Color::rgb(0.22, 0.22, 0.25),
                active: Color::rgb(0.25, 0.25, 0.28),
            },
            foreground: ForegroundColors {
                primary: Color::rgb(0.93, 0.93, 0.93),
                secondary: Color::rgb(0.65, 0.65, 0.68),
                muted: Color::rgb(0.45, 0.45, 0.48),
                accent: Color::rgb(0.36, 0.54, 0.90),
            },
            border: Color::rgb(0.25, 0.25, 0.28),
            actions: ActionColors {
                success: Color::rgb(0.00, 0.74, 0.55),
                info: Color::rgb(0.20, 0.60, 0.86),
                primary: Color::rgb(0.22, 0.35, 0.55),
                secondary: Color::rgb(0.27, 0.31, 0.37),
                warning: Color::rgb(0.95, 0.61, 0.07),
                danger: Color::rgb(0.75, 0.22, 0.22),
            },
        }
    }

    /// Creates a light theme.
    pub fn light() -> Self {
        Self {
            name: "Matrix Light".to_string(),
            is_dark: false,
            background: BackgroundColors {
                primary: Color::rgb(1.0, 1.0, 1.0),
                secondary: Color::rgb(0.96, 0.96, 0.97),
                tertiary: Color::rgb(0.92, 0.92, 0.93),
                hover: Color::rgb(0.88, 0.88, 0.90),
                active: Color::rgb(0.84, 0.84, 0.86),
            },
            foreground: ForegroundColors {
                primary: Color::rgb(0.1, 0.1, 0.1),
                secondary: Color::rgb(0.3, 0.3, 0.3),
                muted: Color::rgb(0.5, 0.5, 0.5),
                accent: Color::rgb(0.2, 0.4, 0.8),
            },
            border: Color::rgb(0.85, 0.85, 0.85),
            actions: ActionColors {
                success: Color::rgb(0.16, 0.65, 0.27),
                info: Color::rgb(0.09, 0.64, 0.72),
                primary: Color::rgb(0.05, 0.43, 0.99),
                secondary: Color::rgb(0.42, 0.46, 0.49),
                warning: Color::rgb(1.0, 0.76, 0.03),
                danger: Color::rgb(0.86, 0.21, 0.27),
            },
        }
    }

    /// Picks the theme described by the UI configuration.
    ///
    /// A custom theme file that cannot be read falls back to the built-in
    /// theme named by `theme`.
    pub fn from_config(config: &UiConfig) -> Self {
        let builtin = match config.theme {
            ThemeKind::Dark => Self::dark(),
            ThemeKind::Light => Self::light(),
        };

        match &config.custom_theme {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                warn!("Failed to load theme {}: {}", path.display(), e);
                builtin
            }),
            None => builtin,
        }
    }

    /// Loads a theme from a file.
    pub fn load(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Saves the theme to a file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Flattens the theme into iced colors for the views.
    pub fn palette(&self) -> Palette {
        Palette {
            bg_dark: self.background.primary.to_iced(),
            bg_medium: self.background.secondary.to_iced(),
            bg_light: self.background.tertiary.to_iced(),
            bg_hover: self.background.hover.to_iced(),
            bg_active: self.background.active.to_iced(),
            text_primary: self.foreground.primary.to_iced(),
            text_secondary: self.foreground.secondary.to_iced(),
            text_muted: self.foreground.muted.to_iced(),
            accent: self.foreground.accent.to_iced(),
            border: self.border.to_iced(),
            success: self.actions.success.to_iced(),
            info: self.actions.info.to_iced(),
            primary: self.actions.primary.to_iced(),
            secondary: self.actions.secondary.to_iced(),
            warning: self.actions.warning.to_iced(),
            danger: self.actions.danger.to_iced(),
        }
    }

    /// The built-in iced theme matching this one, used for widget defaults.
    pub fn iced_theme(&self) -> iced::Theme {
        if self.is_dark {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Resolved colors used by the views.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: iced::Color,
    pub bg_medium: iced::Color,
    pub bg_light: iced::Color,
    pub bg_hover: iced::Color,
    pub bg_active: iced::Color,
    pub text_primary: iced::Color,
    pub text_secondary: iced::Color,
    pub text_muted: iced::Color,
    pub accent: iced::Color,
    pub border: iced::Color,
    pub success: iced::Color,
    pub info: iced::Color,
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub warning: iced::Color,
    pub danger: iced::Color,
}
