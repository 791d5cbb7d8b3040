//! Shown once the signup is stored

use super::theme;
use crate::state::FormRecord;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, record: &FormRecord) {
    let lines = vec![
        Line::from(Span::styled(
            "You're on the list!",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("We'll reach out to ", Style::default().fg(theme::MUTED)),
            Span::styled(
                record.email.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" soon.", Style::default().fg(theme::MUTED)),
        ]),
        Line::from(Span::styled(
            format!("Welcome to Mentoreo, {}.", record.first_name()),
            Style::default().fg(theme::MUTED),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", Style::default().fg(theme::ACCENT)),
            Span::raw(" to exit"),
        ]),
    ];

    let height = lines.len() as u16;
    let top = area.y + area.height.saturating_sub(height) / 2;
    let centered = Rect {
        y: top,
        height: height.min(area.height),
        ..area
    };

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}
