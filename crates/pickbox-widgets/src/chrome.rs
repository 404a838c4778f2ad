//! Border helpers shared by hosts laying out several dropdowns.

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};

/// A titled, dark gray bordered block for a dropdown trigger.
///
/// Pass it to [`Select::with_block`](crate::select::Select::with_block); the
/// select recolors the border with
/// [`SelectStyle::focused_border`](crate::select::SelectStyle::focused_border)
/// while it has focus.
pub fn trigger_block(title: &str) -> Block<'static> {
    Block::new()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(Color::DarkGray))
}

/// The plain bordered block used around an open menu.
pub fn menu_block() -> Block<'static> {
    Block::new()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}
