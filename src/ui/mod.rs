//! UI module for rendering the TUI

mod components;
mod confirmation;
mod field_renderer;
mod step;
mod theme;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.session.flow().is_submitted() {
        confirmation::draw(frame, area, &app.session.record);
    } else {
        step::draw(frame, area, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockSignupStore;
    use crate::pipeline::SubmissionPipeline;
    use crate::state::FlowEvent;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> App {
        App::with_pipeline(SubmissionPipeline::new(Arc::new(MockSignupStore::new())))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_first_step_shows_prompt_and_counter() {
        let screen = render(&app());
        assert!(screen.contains("What is your full name?"));
        assert!(screen.contains("1 / 5"));
        assert!(screen.contains("OK ✓"));
    }

    #[test]
    fn test_empty_input_shows_placeholder() {
        let screen = render(&app());
        assert!(screen.contains("Type your answer here..."));
    }

    #[test]
    fn test_error_is_rendered() {
        let mut app = app();
        app.session
            .apply(FlowEvent::Reject("Please enter your full name.".into()));
        let screen = render(&app);
        assert!(screen.contains("⚠ Please enter your full name."));
    }

    #[test]
    fn test_success_message_has_no_warning_marker() {
        let mut app = app();
        app.session
            .apply(FlowEvent::Affirm("✓ Valid academic email!".into()));
        let screen = render(&app);
        assert!(screen.contains("✓ Valid academic email!"));
        assert!(!screen.contains("⚠"));
    }

    #[test]
    fn test_last_step_offers_submit() {
        let mut app = app();
        for _ in 0..4 {
            app.session.advance();
        }
        let screen = render(&app);
        assert!(screen.contains("What's your branch or major?"));
        assert!(screen.contains("Submit ✓"));
        assert!(screen.contains("5 / 5"));
    }

    #[test]
    fn test_loading_shows_working() {
        let mut app = app();
        app.session.apply(FlowEvent::Busy("Saving your details…".into()));
        let screen = render(&app);
        assert!(screen.contains("Working…"));
        assert!(screen.contains("Saving your details…"));
    }

    #[test]
    fn test_confirmation_after_submission() {
        let mut app = app();
        app.session.record.name = "Asha Rao".into();
        app.session.record.email = "asha@pec.edu.in".into();
        app.session.apply(FlowEvent::Submitted);
        let screen = render(&app);
        assert!(screen.contains("You're on the list!"));
        assert!(screen.contains("asha@pec.edu.in"));
        assert!(screen.contains("Welcome to Mentoreo, Asha."));
    }
}
