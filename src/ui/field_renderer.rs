//! Input rendering for the active step

use super::theme;
use crate::state::{FieldSpec, Status};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the active field's input and place the terminal cursor in it
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldSpec, value: &str, status: &Status) {
    let border_style = Style::default().fg(theme::status_color(status));

    let content = if value.is_empty() {
        Line::from(Span::styled(
            field.placeholder,
            Style::default()
                .fg(theme::MUTED)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(value.to_string())
    };

    let block = Block::default()
        .title(format!(" {} ", field.kind.label()))
        .borders(Borders::BOTTOM | Borders::TOP)
        .border_style(border_style);

    // Keep the tail of long values visible. Widths are terminal cells, not chars.
    let inner_width = area.width.saturating_sub(1);
    let value_width = u16::try_from(Line::from(value).width()).unwrap_or(u16::MAX);
    let scroll = value_width.saturating_sub(inner_width);

    frame.render_widget(Paragraph::new(content).block(block).scroll((0, scroll)), area);

    if !status.is_loading() && area.height >= 3 {
        let x = area.x + value_width.min(inner_width);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::signup_steps;
    use ratatui::{backend::TestBackend, Terminal};

    fn cursor_after(value: &str, status: &Status) -> (Terminal<TestBackend>, Position) {
        let field = signup_steps().remove(0);
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|frame| draw_field(frame, Rect::new(0, 0, 20, 3), &field, value, status))
            .unwrap();
        let position = terminal.get_cursor_position().unwrap();
        (terminal, position)
    }

    #[test]
    fn test_cursor_follows_ascii_value() {
        let (_, position) = cursor_after("Asha", &Status::Idle);
        assert_eq!(position, Position::new(4, 1));
    }

    #[test]
    fn test_cursor_counts_wide_characters_as_two_cells() {
        let (terminal, position) = cursor_after("李明华", &Status::Idle);
        assert_eq!(terminal.backend().buffer()[(0, 1)].symbol(), "李");
        assert_eq!(terminal.backend().buffer()[(4, 1)].symbol(), "华");
        assert_eq!(position, Position::new(6, 1));
    }

    #[test]
    fn test_long_value_scrolls_and_pins_cursor_to_edge() {
        let (terminal, position) = cursor_after("abcdefghijklmnopqrstuvwxyz", &Status::Idle);
        assert_eq!(position, Position::new(19, 1));
        assert_eq!(terminal.backend().buffer()[(18, 1)].symbol(), "z");
    }
}
