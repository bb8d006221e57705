use glam::Vec2;
use web_time::{Duration, Instant};

use crate::orientation::Zone;

const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(400);
const CONTEXT_DOUBLE_THRESHOLD: Duration = Duration::from_millis(350);

/// Result of processing a mouse-up event through the click state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClickResult {
    /// Drag, mismatched down/up, or a release over the background.
    NoAction,
    /// First click on a zone.
    SingleClick(Zone),
    /// Second click on the same zone within the threshold.
    DoubleClick(Zone),
}

/// Tracks cursor position, drag state and click timing.
#[derive(Debug, Clone, Default)]
pub(crate) struct InputState {
    mouse_pos: Option<Vec2>,
    pub(crate) mouse_down_zone: Option<Zone>,
    pub(crate) is_dragging: bool,
    last_click: Option<(Instant, Zone)>,
    last_context_click: Option<(Instant, Zone)>,
}

impl InputState {
    /// Record what zone (if any) is under the cursor at mouse-down.
    pub(crate) fn handle_mouse_down(&mut self, hovered: Option<Zone>) {
        self.mouse_down_zone = hovered;
        self.is_dragging = false;
    }

    /// Mark that a drag occurred (significant movement while pressed).
    pub(crate) fn mark_dragging(&mut self) {
        self.is_dragging = true;
    }

    /// Update cursor position and return the movement since the last one.
    pub(crate) fn handle_mouse_position(&mut self, x: f32, y: f32) -> Vec2 {
        let pos = Vec2::new(x, y);
        let delta = self.mouse_pos.map_or(Vec2::ZERO, |last| pos - last);
        self.mouse_pos = Some(pos);
        delta
    }

    /// Process a left-button release over `hovered` at `now`.
    pub(crate) fn process_mouse_up(
        &mut self,
        hovered: Option<Zone>,
        now: Instant,
    ) -> ClickResult {
        let down = self.mouse_down_zone.take();
        let was_dragging = std::mem::take(&mut self.is_dragging);

        let zone = match (down, hovered) {
            (Some(down), Some(up)) if down == up && !was_dragging => up,
            _ => {
                self.last_click = None;
                return ClickResult::NoAction;
            }
        };

        let repeat = self.last_click.is_some_and(|(at, last)| {
            last == zone
                && now.saturating_duration_since(at) < DOUBLE_CLICK_THRESHOLD
        });
        if repeat {
            self.last_click = None;
            ClickResult::DoubleClick(zone)
        } else {
            self.last_click = Some((now, zone));
            ClickResult::SingleClick(zone)
        }
    }

    /// Process a context-menu click on `zone`. Returns `true` when it is
    /// the second one on the same zone within the threshold.
    pub(crate) fn process_context_click(
        &mut self,
        zone: Zone,
        now: Instant,
    ) -> bool {
        let repeat = self.last_context_click.is_some_and(|(at, last)| {
            last == zone
                && now.saturating_duration_since(at) < CONTEXT_DOUBLE_THRESHOLD
        });
        self.last_context_click = if repeat { None } else { Some((now, zone)) };
        repeat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn click(state: &mut InputState, zone: Zone, at: Instant) -> ClickResult {
        state.handle_mouse_down(Some(zone));
        state.process_mouse_up(Some(zone), at)
    }

    #[test]
    fn two_quick_clicks_make_a_double_click() {
        let start = Instant::now();
        let mut state = InputState::default();
        assert_eq!(
            click(&mut state, Zone::Top, start),
            ClickResult::SingleClick(Zone::Top)
        );
        assert_eq!(
            click(&mut state, Zone::Top, start + ms(200)),
            ClickResult::DoubleClick(Zone::Top)
        );
        assert_eq!(
            click(&mut state, Zone::Top, start + ms(300)),
            ClickResult::SingleClick(Zone::Top)
        );
    }

    #[test]
    fn slow_or_different_clicks_stay_single() {
        let start = Instant::now();
        let mut state = InputState::default();
        let _ = click(&mut state, Zone::Top, start);
        assert_eq!(
            click(&mut state, Zone::Top, start + ms(450)),
            ClickResult::SingleClick(Zone::Top)
        );
        assert_eq!(
            click(&mut state, Zone::East, start + ms(500)),
            ClickResult::SingleClick(Zone::East)
        );
    }

    #[test]
    fn drags_and_mismatches_are_no_action() {
        let start = Instant::now();
        let mut state = InputState::default();
        state.handle_mouse_down(Some(Zone::North));
        state.mark_dragging();
        assert_eq!(
            state.process_mouse_up(Some(Zone::North), start),
            ClickResult::NoAction
        );

        state.handle_mouse_down(Some(Zone::North));
        assert_eq!(
            state.process_mouse_up(Some(Zone::South), start),
            ClickResult::NoAction
        );

        state.handle_mouse_down(None);
        assert_eq!(state.process_mouse_up(None, start), ClickResult::NoAction);
    }

    #[test]
    fn context_double_click_window() {
        let start = Instant::now();
        let mut state = InputState::default();
        assert!(!state.process_context_click(Zone::Top, start));
        assert!(state.process_context_click(Zone::Top, start + ms(300)));
        assert!(!state.process_context_click(Zone::Top, start + ms(400)));
        assert!(!state.process_context_click(Zone::Top, start + ms(800)));
    }

    #[test]
    fn cursor_deltas() {
        let mut state = InputState::default();
        assert_eq!(state.handle_mouse_position(10.0, 10.0), Vec2::ZERO);
        assert_eq!(
            state.handle_mouse_position(14.0, 7.0),
            Vec2::new(4.0, -3.0)
        );
    }
}
