//! Colours shared by the views

use crate::state::Status;
use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(255, 122, 31);
pub const ACCENT_SOFT: Color = Color::Rgb(255, 237, 213);
pub const MUTED: Color = Color::DarkGray;

/// Colour for the status line and input border
pub fn status_color(status: &Status) -> Color {
    match status {
        Status::Idle => ACCENT,
        Status::Loading(_) => MUTED,
        Status::Error(_) => Color::Red,
        Status::Success(_) => Color::Green,
    }
}
