//! Step transition animation state

use super::flow::{Direction, FlowState};
use std::time::{Duration, Instant};

/// Slide-in animation for the active step
#[derive(Debug, Clone)]
pub struct SlideState {
    token: u64,
    direction: Direction,
    started: Option<Instant>,
}

impl SlideState {
    /// Duration of the slide-in
    const DURATION: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self {
            token: 0,
            direction: Direction::Forward,
            started: None,
        }
    }

    /// Restart the animation when the flow's render token moved
    pub fn sync(&mut self, flow: &FlowState) {
        if flow.render_token() != self.token {
            self.token = flow.render_token();
            self.direction = flow.direction();
            self.started = Some(Instant::now());
        }
    }

    fn elapsed(&self) -> Duration {
        self.started
            .map(|s| s.elapsed())
            .unwrap_or(Self::DURATION)
    }

    pub fn is_animating(&self) -> bool {
        self.elapsed() < Self::DURATION
    }

    /// Current vertical offset in rows for a slide of `distance` rows
    pub fn offset(&self, distance: u16) -> i32 {
        self.offset_at(self.elapsed(), distance)
    }

    /// Forward slides come up from below (positive), backward from above
    pub fn offset_at(&self, elapsed: Duration, distance: u16) -> i32 {
        let progress = (elapsed.as_secs_f32() / Self::DURATION.as_secs_f32()).min(1.0);
        // Cubic ease-out: fast start, gentle landing
        let eased = simple_easing::cubic_out(progress);
        let remaining = ((1.0 - eased) * distance as f32).round() as i32;
        match self.direction {
            Direction::Forward => remaining,
            Direction::Backward => -remaining,
        }
    }
}

impl Default for SlideState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FlowEvent;

    #[test]
    fn test_new_is_settled() {
        let slide = SlideState::new();
        assert!(!slide.is_animating());
        assert_eq!(slide.offset(6), 0);
    }

    #[test]
    fn test_sync_starts_on_token_change() {
        let mut slide = SlideState::new();
        let flow = FlowState::new(5);
        slide.sync(&flow);
        assert!(!slide.is_animating());

        let flow = flow.transition(FlowEvent::Advance);
        slide.sync(&flow);
        assert!(slide.is_animating());
    }

    #[test]
    fn test_forward_starts_below() {
        let mut slide = SlideState::new();
        slide.sync(&FlowState::new(5).transition(FlowEvent::Advance));
        assert_eq!(slide.offset_at(Duration::ZERO, 6), 6);
        assert_eq!(slide.offset_at(SlideState::DURATION, 6), 0);
    }

    #[test]
    fn test_backward_starts_above() {
        let mut slide = SlideState::new();
        let flow = FlowState::new(5)
            .transition(FlowEvent::Advance)
            .transition(FlowEvent::Retreat);
        slide.sync(&flow);
        assert_eq!(slide.offset_at(Duration::ZERO, 4), -4);
    }

    #[test]
    fn test_offset_shrinks_over_time() {
        let mut slide = SlideState::new();
        slide.sync(&FlowState::new(5).transition(FlowEvent::Advance));
        let early = slide.offset_at(Duration::from_millis(25), 10);
        let late = slide.offset_at(Duration::from_millis(200), 10);
        assert!(early > late);
        assert!(late >= 0);
    }
}
