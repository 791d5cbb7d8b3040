//! One signup session: the steps, the record being built and the flow state

use super::field::{signup_steps, FieldSpec};
use super::flow::{FlowEvent, FlowState};
use super::record::FormRecord;

/// Step sequencer plus the record it fills in
#[derive(Debug, Clone)]
pub struct SignupSession {
    steps: Vec<FieldSpec>,
    pub record: FormRecord,
    flow: FlowState,
}

impl SignupSession {
    /// Only built from the fixed signup steps, so `steps` is never empty
    fn from_steps(steps: Vec<FieldSpec>) -> Self {
        let flow = FlowState::new(steps.len());
        Self {
            steps,
            record: FormRecord::default(),
            flow,
        }
    }

    pub fn flow(&self) -> &FlowState {
        &self.flow
    }

    /// The step currently shown. Available synchronously after every
    /// transition so the UI can move focus without waiting on anything.
    pub fn active_field(&self) -> &FieldSpec {
        &self.steps[self.flow.current_step()]
    }

    pub fn active_value(&self) -> &str {
        self.record.get(self.active_field().id)
    }

    pub fn is_last_step(&self) -> bool {
        self.flow.is_last_step()
    }

    /// Feed an event through the state machine
    pub fn apply(&mut self, event: FlowEvent) {
        self.flow = self.flow.clone().transition(event);
    }

    pub fn advance(&mut self) {
        self.apply(FlowEvent::Advance);
    }

    pub fn retreat(&mut self) {
        self.apply(FlowEvent::Retreat);
    }

    /// Replace the active field's value. Clears a standing error.
    ///
    /// Ignored while work is in flight or after submission.
    pub fn set_active_value(&mut self, value: impl Into<String>) {
        if !self.accepts_input() {
            return;
        }
        let id = self.active_field().id;
        self.record.set(id, value);
        self.apply(FlowEvent::Edited);
    }

    pub fn input_char(&mut self, c: char) {
        if !self.accepts_input() {
            return;
        }
        let id = self.active_field().id;
        self.record.get_mut(id).push(c);
        self.apply(FlowEvent::Edited);
    }

    pub fn backspace(&mut self) {
        if !self.accepts_input() {
            return;
        }
        let id = self.active_field().id;
        self.record.get_mut(id).pop();
        self.apply(FlowEvent::Edited);
    }

    fn accepts_input(&self) -> bool {
        !self.flow.is_submitted() && !self.flow.is_busy()
    }
}

impl Default for SignupSession {
    fn default() -> Self {
        Self::from_steps(signup_steps())
    }
}
