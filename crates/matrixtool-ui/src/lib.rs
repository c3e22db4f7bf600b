//! # Matrixtool UI
//!
//! Desktop front end for the matrix operations tool, built on iced.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`App`] holds the two input areas, the selected operand and a
//!   [`matrixtool_core::Session`]
//! - **Message**: every button, menu entry, shortcut and dialog result
//! - **Update**: parses, computes and records the outcome through the session
//! - **View**: input panes, result table, status bar and modal dialogs
//!
//! All matrix logic lives in `matrixtool-core`; this crate only turns
//! messages into core calls and core state into widgets.

pub mod app;
pub mod clipboard;
pub mod style;
pub mod theme;

pub use app::{App, Flags, run};
pub use theme::Theme;
