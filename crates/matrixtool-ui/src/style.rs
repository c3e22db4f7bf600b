//! Style definitions for UI components.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

use crate::theme::Palette;

/// Visual weight of a button, one per action group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Success,
    Info,
    Primary,
    Secondary,
    Warning,
    Light,
    Accent,
}

/// Style closure for a filled action button.
pub fn action_button(
    palette: Palette,
    kind: ButtonKind,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_: &Theme, status: button::Status| {
        let (base, text_color) = match kind {
            ButtonKind::Success => (palette.success, Color::WHITE),
            ButtonKind::Info => (palette.info, Color::WHITE),
            ButtonKind::Primary => (palette.primary, Color::WHITE),
            ButtonKind::Secondary => (palette.secondary, Color::WHITE),
            ButtonKind::Warning => (palette.warning, Color::BLACK),
            ButtonKind::Light => (palette.bg_light, palette.text_primary),
            ButtonKind::Accent => (palette.accent, Color::WHITE),
        };
        let bg = match status {
            button::Status::Hovered => lighten(base, 0.08),
            button::Status::Pressed => lighten(base, -0.06),
            button::Status::Disabled => base.scale_alpha(0.5),
            button::Status::Active => base,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color,
            border: Border {
                color: palette.border,
                width: if kind == ButtonKind::Light { 1.0 } else { 0.0 },
                radius: 4.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Style closure for flat menu entries.
pub fn menu_button(palette: Palette) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_: &Theme, status: button::Status| {
        let bg = match status {
            button::Status::Hovered => palette.bg_hover,
            _ => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: palette.text_primary,
            border: Border::default(),
            ..Default::default()
        }
    }
}

/// Bordered panel used for modals, dropdowns and the result area.
pub fn panel(palette: Palette, radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_: &Theme| container::Style {
        background: Some(Background::Color(palette.bg_medium)),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: radius.into(),
        },
        ..Default::default()
    }
}

/// One-pixel horizontal rule.
pub fn separator(palette: Palette) -> impl Fn(&Theme) -> container::Style {
    move |_: &Theme| container::Style {
        background: Some(Background::Color(palette.border)),
        ..Default::default()
    }
}

fn lighten(color: Color, amount: f32) -> Color {
    Color {
        r: (color.r + amount).clamp(0.0, 1.0),
        g: (color.g + amount).clamp(0.0, 1.0),
        b: (color.b + amount).clamp(0.0, 1.0),
        a: color.a,
    }
}
