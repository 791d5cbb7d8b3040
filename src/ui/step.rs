//! Stepped form view: progress, question, input, status and controls

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use super::theme;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Wrap},
    Frame,
};

/// Rows used by the question block
const CONTENT_HEIGHT: u16 = 16;
/// Widest the question block gets
const CONTENT_WIDTH: u16 = 64;

/// Draw the active step
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let [progress_area, header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_progress(frame, progress_area, app);
    draw_header(frame, header_area, app);
    draw_question(frame, content_area(body_area, app), app);
    draw_footer(frame, footer_area, app);
}

fn draw_progress(frame: &mut Frame, area: Rect, app: &App) {
    let ratio = app.session.flow().progress().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme::ACCENT).bg(theme::ACCENT_SOFT))
        .ratio(ratio)
        .label("")
        .use_unicode(true);
    frame.render_widget(gauge, area);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let flow = app.session.flow();
    let brand = Paragraph::new(Span::styled(
        " Mentoreo",
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    ));
    let counter = Paragraph::new(Span::styled(
        format!("{} / {} ", flow.current_step() + 1, flow.num_steps()),
        Style::default().fg(theme::MUTED),
    ))
    .alignment(Alignment::Right);

    frame.render_widget(brand, area);
    frame.render_widget(counter, area);
}

/// Centre the question block and apply the slide offset without clipping
fn content_area(body: Rect, app: &App) -> Rect {
    let width = CONTENT_WIDTH.min(body.width);
    let height = CONTENT_HEIGHT.min(body.height);
    let x = body.x + (body.width - width) / 2;

    let slack = body.height - height;
    let above = slack / 2;
    let below = slack - above;
    let offset = app
        .slide
        .offset(slack.max(1))
        .clamp(-i32::from(above), i32::from(below));
    let y = (i32::from(body.y + above) + offset) as u16;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn draw_question(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    let flow = session.flow();
    let field = session.active_field();
    let status = flow.status();

    let [number_area, prompt_area, hint_area, input_area, status_area, button_area, enter_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(area);

    let number = Line::from(vec![
        Span::styled(
            format!(" {} ", flow.current_step() + 1),
            Style::default()
                .fg(ratatui::style::Color::White)
                .bg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" →", Style::default().fg(theme::ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(number), number_area);

    let prompt = Paragraph::new(Span::styled(
        field.prompt,
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(prompt, prompt_area);

    let hint = Paragraph::new(Span::styled(field.hint, Style::default().fg(theme::MUTED)))
        .wrap(Wrap { trim: true });
    frame.render_widget(hint, hint_area);

    draw_field(frame, input_area, field, session.active_value(), status);

    let status_style = Style::default().fg(theme::status_color(status));
    if let Some(error) = flow.error_message() {
        let line = Paragraph::new(Line::from(vec![
            Span::styled("⚠ ", status_style.add_modifier(Modifier::BOLD)),
            Span::styled(error, status_style),
        ]));
        frame.render_widget(line, status_area);
    } else if let Some(message) = status.message() {
        frame.render_widget(Paragraph::new(Span::styled(message, status_style)), status_area);
    }

    let label = if status.is_loading() {
        "Working…"
    } else if session.is_last_step() {
        "Submit ✓"
    } else {
        "OK ✓"
    };
    render_button(frame, button_area, label, !flow.is_busy());

    let enter = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(theme::MUTED)),
        Span::styled("Enter ↵", Style::default().fg(theme::ACCENT)),
        Span::styled(" to continue", Style::default().fg(theme::MUTED)),
    ]));
    frame.render_widget(enter, enter_area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let flow = app.session.flow();
    let prev_style = if flow.current_step() == 0 || flow.is_busy() {
        Style::default().fg(theme::MUTED)
    } else {
        Style::default().fg(theme::ACCENT)
    };

    let help = Line::from(vec![
        Span::styled("↑", prev_style),
        Span::raw(": back  "),
        Span::styled("↓", Style::default().fg(theme::ACCENT)),
        Span::raw(": next  "),
        Span::styled("Ctrl+U", Style::default().fg(theme::ACCENT)),
        Span::raw(": clear  "),
        Span::styled("Esc", Style::default().fg(theme::ACCENT)),
        Span::raw(": quit "),
    ]);
    frame.render_widget(
        Paragraph::new(help)
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme::MUTED)),
        area,
    );
}
