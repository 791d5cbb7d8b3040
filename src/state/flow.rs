//! Flow state machine for the stepped signup form
//!
//! `FlowState` is a plain value; every change goes through
//! [`FlowState::transition`], which takes the old state and an event and
//! returns the new state. Nothing here knows about terminals or networks.

/// Which way the last step change went, used to pick the slide animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Outcome of the latest validation or persistence attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    /// A remote check or the final save is in flight
    Loading(String),
    Error(String),
    /// Brief affirmative message before moving on
    Success(String),
}

impl Status {
    /// Text for the status line, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Loading(m) | Self::Error(m) | Self::Success(m) => Some(m),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// The active field's value changed
    Edited,
    /// Move to the next step (caller has validated the active field)
    Advance,
    /// Move to the previous step
    Retreat,
    /// Validation or persistence failed with a user-facing reason
    Reject(String),
    /// Asynchronous work started
    Busy(String),
    /// Asynchronous check passed
    Affirm(String),
    /// The record was stored; the flow is finished
    Submitted,
}

/// Transient per-session state of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowState {
    current_step: usize,
    num_steps: usize,
    direction: Direction,
    status: Status,
    submitted: bool,
    /// Bumped on every step change so the renderer can restart animations
    /// and move focus even when the index lands on the same value twice
    render_token: u64,
}

impl FlowState {
    /// A flow over `num_steps` steps, never fewer than one
    pub fn new(num_steps: usize) -> Self {
        Self {
            current_step: 0,
            num_steps: num_steps.max(1),
            direction: Direction::Forward,
            status: Status::Idle,
            submitted: false,
            render_token: 0,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn render_token(&self) -> u64 {
        self.render_token
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 == self.num_steps
    }

    /// Present only while the status is `Error`
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            Status::Error(m) => Some(m),
            _ => None,
        }
    }

    /// True while work is in flight or a success message is being shown
    pub fn is_busy(&self) -> bool {
        matches!(self.status, Status::Loading(_) | Status::Success(_))
    }

    /// Fraction of the flow completed, `current_step / num_steps`.
    ///
    /// Never reaches 1.0 while the form is shown.
    pub fn progress(&self) -> f64 {
        self.current_step as f64 / self.num_steps as f64
    }

    /// Pure transition: old state + event -> new state
    pub fn transition(mut self, event: FlowEvent) -> Self {
        if self.submitted {
            return self;
        }

        match event {
            FlowEvent::Edited => {
                if self.status.is_error() {
                    self.status = Status::Idle;
                }
            }
            FlowEvent::Advance => {
                if !self.status.is_loading() && !self.is_last_step() {
                    self.move_to(self.current_step + 1, Direction::Forward);
                }
            }
            FlowEvent::Retreat => {
                if !self.is_busy() && self.current_step > 0 {
                    self.move_to(self.current_step - 1, Direction::Backward);
                }
            }
            FlowEvent::Reject(reason) => self.status = Status::Error(reason),
            FlowEvent::Busy(message) => self.status = Status::Loading(message),
            FlowEvent::Affirm(message) => self.status = Status::Success(message),
            FlowEvent::Submitted => {
                self.submitted = true;
                self.status = Status::Idle;
            }
        }

        self
    }

    fn move_to(&mut self, step: usize, direction: Direction) {
        self.current_step = step;
        self.direction = direction;
        self.status = Status::Idle;
        self.render_token = self.render_token.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_step(step: usize) -> FlowState {
        (0..step).fold(FlowState::new(5), |s, _| s.transition(FlowEvent::Advance))
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_new_starts_at_first_step() {
            let state = FlowState::new(5);
            assert_eq!(state.current_step(), 0);
            assert_eq!(state.status(), &Status::Idle);
            assert!(!state.is_submitted());
        }

        #[test]
        fn test_advance_moves_forward() {
            let state = FlowState::new(5).transition(FlowEvent::Advance);
            assert_eq!(state.current_step(), 1);
            assert_eq!(state.direction(), Direction::Forward);
            assert_eq!(state.render_token(), 1);
        }

        #[test]
        fn test_advance_on_last_step_is_noop() {
            let state = at_step(4);
            assert!(state.is_last_step());
            let next = state.clone().transition(FlowEvent::Advance);
            assert_eq!(next, state);
        }

        #[test]
        fn test_advance_while_loading_is_noop() {
            let state = FlowState::new(5).transition(FlowEvent::Busy("Working".into()));
            let next = state.clone().transition(FlowEvent::Advance);
            assert_eq!(next.current_step(), 0);
        }

        #[test]
        fn test_advance_after_affirmation_clears_message() {
            let state = at_step(2)
                .transition(FlowEvent::Affirm("ok".into()))
                .transition(FlowEvent::Advance);
            assert_eq!(state.current_step(), 3);
            assert_eq!(state.status(), &Status::Idle);
        }

        #[test]
        fn test_retreat_from_first_step_is_noop() {
            let state = FlowState::new(5).transition(FlowEvent::Retreat);
            assert_eq!(state.current_step(), 0);
            assert_eq!(state.render_token(), 0);
        }

        #[test]
        fn test_retreat_moves_backward_and_clears_error() {
            let state = at_step(2)
                .transition(FlowEvent::Reject("bad".into()))
                .transition(FlowEvent::Retreat);
            assert_eq!(state.current_step(), 1);
            assert_eq!(state.direction(), Direction::Backward);
            assert!(state.error_message().is_none());
        }

        #[test]
        fn test_retreat_while_busy_is_noop() {
            let state = at_step(4).transition(FlowEvent::Busy("Saving".into()));
            let next = state.clone().transition(FlowEvent::Retreat);
            assert_eq!(next, state);
        }
    }

    mod status {
        use super::*;

        #[test]
        fn test_reject_sets_error_message() {
            let state = FlowState::new(5).transition(FlowEvent::Reject("nope".into()));
            assert_eq!(state.error_message(), Some("nope"));
            assert_eq!(state.current_step(), 0);
        }

        #[test]
        fn test_edit_after_error_resets_to_idle() {
            let state = at_step(1)
                .transition(FlowEvent::Reject("nope".into()))
                .transition(FlowEvent::Edited);
            assert_eq!(state.status(), &Status::Idle);
            assert!(state.error_message().is_none());
            assert_eq!(state.current_step(), 1);
        }

        #[test]
        fn test_edit_does_not_clear_loading() {
            let state = FlowState::new(5)
                .transition(FlowEvent::Busy("Saving".into()))
                .transition(FlowEvent::Edited);
            assert!(state.status().is_loading());
        }

        #[test]
        fn test_error_message_only_present_for_errors() {
            let state = FlowState::new(5).transition(FlowEvent::Busy("Saving".into()));
            assert_eq!(state.status().message(), Some("Saving"));
            assert!(state.error_message().is_none());
        }

        #[test]
        fn test_busy_covers_loading_and_success() {
            let state = FlowState::new(5);
            assert!(!state.is_busy());
            assert!(state.clone().transition(FlowEvent::Busy("x".into())).is_busy());
            assert!(state.clone().transition(FlowEvent::Affirm("x".into())).is_busy());
            assert!(!state.transition(FlowEvent::Reject("x".into())).is_busy());
        }
    }

    mod submitted {
        use super::*;

        #[test]
        fn test_submitted_latches() {
            let state = at_step(4)
                .transition(FlowEvent::Busy("Saving".into()))
                .transition(FlowEvent::Submitted);
            assert!(state.is_submitted());
        }

        #[test]
        fn test_terminal_state_ignores_every_event() {
            let done = at_step(4).transition(FlowEvent::Submitted);
            for event in [
                FlowEvent::Edited,
                FlowEvent::Advance,
                FlowEvent::Retreat,
                FlowEvent::Reject("x".into()),
                FlowEvent::Busy("x".into()),
                FlowEvent::Affirm("x".into()),
                FlowEvent::Submitted,
            ] {
                assert_eq!(done.clone().transition(event), done);
            }
        }
    }

    mod progress {
        use super::*;

        #[test]
        fn test_zero_steps_is_clamped_to_one() {
            let state = FlowState::new(0);
            assert_eq!(state.num_steps(), 1);
            assert!(state.is_last_step());
            assert_eq!(state.progress(), 0.0);

            let advanced = state.clone().transition(FlowEvent::Advance);
            assert_eq!(advanced, state);
        }

        #[test]
        fn test_progress_is_zero_on_first_step() {
            assert_eq!(FlowState::new(5).progress(), 0.0);
        }

        #[test]
        fn test_progress_uses_index_over_count() {
            assert_eq!(at_step(2).progress(), 2.0 / 5.0);
        }

        #[test]
        fn test_progress_below_full_on_last_step() {
            let state = at_step(4);
            assert_eq!(state.progress(), 0.8);
            assert!(state.progress() < 1.0);
        }
    }
}
