//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Terminal rendering and layout
//! - Light and dark palettes
//! - Styling helpers shared by the widgets

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub use render::render;
pub use theme::{Theme, ThemeMode};
