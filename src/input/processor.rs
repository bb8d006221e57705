//! Converts raw platform events into engine commands.
//!
//! One `InputProcessor` sits in front of each viewport. It owns all
//! transient input state (cursor tracking, drag detection, click timing,
//! modifier keys) and is the only thing between raw window events and
//! [`ViewCubeEngine::execute`](crate::engine::ViewCubeEngine::execute).

use glam::Vec2;
use web_time::Instant;

use super::event::{InputEvent, MouseButton};
use super::mouse::{ClickResult, InputState};
use crate::engine::command::CubeCommand;
use crate::orientation::Zone;
use crate::sync::ViewportRole;

/// Squared pixel distance beyond which a press turns into a drag.
const DRAG_THRESHOLD_SQ: f32 = 1.0;

/// Converts raw window events for one viewport into [`CubeCommand`]s.
///
/// On the primary viewport a left drag rotates, a shift-drag pans and the
/// wheel zooms. On the orientation cube a press on a zone grabs the cube
/// (rotation enabled until release), a double click selects the zone, and
/// two quick context clicks reset the primary pivot.
///
/// ```ignore
/// for cmd in cube_input.handle_event(event, hovered_zone, now) {
///     let _ = engine.execute(cmd, now);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    role: ViewportRole,
    state: InputState,
    mouse_pressed: bool,
    shift_pressed: bool,
}

impl InputProcessor {
    /// Processor for the given viewport.
    #[must_use]
    pub fn new(role: ViewportRole) -> Self {
        Self {
            role,
            state: InputState::default(),
            mouse_pressed: false,
            shift_pressed: false,
        }
    }

    /// The viewport whose events this processor interprets.
    #[must_use]
    pub fn role(&self) -> ViewportRole {
        self.role
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Process a raw input event and return the resulting commands.
    ///
    /// `hovered` is the zone under the cursor (always `None` on the
    /// primary viewport).
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        hovered: Option<Zone>,
        now: Instant,
    ) -> Vec<CubeCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(x, y).into_iter().collect()
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed, hovered, now)
            }
            InputEvent::Scroll { delta } => vec![CubeCommand::Zoom {
                viewport: self.role,
                delta,
            }],
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                Vec::new()
            }
        }
    }

    /// Cursor moved: compute delta, possibly produce a camera command.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<CubeCommand> {
        let delta = self.state.handle_mouse_position(x, y);
        if !self.mouse_pressed || delta == Vec2::ZERO {
            return None;
        }
        if self.role == ViewportRole::OrientationCube
            && self.state.mouse_down_zone.is_none()
        {
            return None;
        }
        if delta.length_squared() > DRAG_THRESHOLD_SQ {
            self.state.mark_dragging();
        }

        let viewport = self.role;
        Some(if self.shift_pressed {
            CubeCommand::Pan { viewport, delta }
        } else {
            CubeCommand::Rotate { viewport, delta }
        })
    }

    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        hovered: Option<Zone>,
        now: Instant,
    ) -> Vec<CubeCommand> {
        match (button, pressed) {
            (MouseButton::Left, true) => {
                self.mouse_pressed = true;
                self.state.handle_mouse_down(hovered);
                let on_cube = self.role == ViewportRole::OrientationCube;
                if on_cube && hovered.is_some() {
                    return vec![CubeCommand::SetCubeRotation {
                        enabled: true,
                    }];
                }
                Vec::new()
            }
            (MouseButton::Left, false) => {
                self.mouse_pressed = false;
                let grabbed = self.state.mouse_down_zone.is_some();
                let click = self.state.process_mouse_up(hovered, now);
                if self.role != ViewportRole::OrientationCube {
                    return Vec::new();
                }

                let mut commands = Vec::new();
                if grabbed {
                    commands
                        .push(CubeCommand::SetCubeRotation { enabled: false });
                }
                if let ClickResult::DoubleClick(zone) = click {
                    commands.push(CubeCommand::SelectZone { zone });
                }
                commands
            }
            (MouseButton::Right, true) => match hovered {
                Some(zone)
                    if self.role == ViewportRole::OrientationCube
                        && self.state.process_context_click(zone, now) =>
                {
                    vec![CubeCommand::ResetTarget]
                }
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: true,
        }
    }

    fn release(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: false,
        }
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    #[test]
    fn primary_drag_rotates_and_shift_drag_pans() {
        let now = Instant::now();
        let mut input = InputProcessor::new(ViewportRole::Primary);
        let _ = input.handle_event(moved(10.0, 10.0), None, now);
        let _ = input.handle_event(press(MouseButton::Left), None, now);

        assert!(input.mouse_pressed());

        let rotate = input.handle_event(moved(15.0, 12.0), None, now);
        assert_eq!(
            rotate,
            vec![CubeCommand::Rotate {
                viewport: ViewportRole::Primary,
                delta: Vec2::new(5.0, 2.0),
            }]
        );

        let _ = input.handle_event(
            InputEvent::ModifiersChanged { shift: true },
            None,
            now,
        );
        assert!(input.shift_pressed());
        let pan = input.handle_event(moved(16.0, 12.0), None, now);
        assert!(matches!(pan.as_slice(), [CubeCommand::Pan { .. }]));

        let _ = input.handle_event(release(MouseButton::Left), None, now);
        assert!(!input.mouse_pressed());
        assert!(input.handle_event(moved(30.0, 30.0), None, now).is_empty());
    }

    #[test]
    fn scroll_zooms_own_viewport() {
        let mut input = InputProcessor::new(ViewportRole::OrientationCube);
        let cmds = input.handle_event(
            InputEvent::Scroll { delta: 2.0 },
            None,
            Instant::now(),
        );
        assert_eq!(
            cmds,
            vec![CubeCommand::Zoom {
                viewport: ViewportRole::OrientationCube,
                delta: 2.0,
            }]
        );
    }

    #[test]
    fn grabbing_the_cube_gates_rotation() {
        let now = Instant::now();
        let zone = Some(Zone::North);
        let mut input = InputProcessor::new(ViewportRole::OrientationCube);
        let _ = input.handle_event(moved(0.0, 0.0), zone, now);

        assert_eq!(
            input.handle_event(press(MouseButton::Left), zone, now),
            vec![CubeCommand::SetCubeRotation { enabled: true }]
        );
        let drag = input.handle_event(moved(8.0, 0.0), zone, now);
        assert!(matches!(drag.as_slice(), [CubeCommand::Rotate { .. }]));
        assert_eq!(
            input.handle_event(release(MouseButton::Left), zone, now),
            vec![CubeCommand::SetCubeRotation { enabled: false }]
        );
    }

    #[test]
    fn pressing_beside_the_cube_does_nothing() {
        let now = Instant::now();
        let mut input = InputProcessor::new(ViewportRole::OrientationCube);
        let _ = input.handle_event(moved(0.0, 0.0), None, now);
        assert!(input
            .handle_event(press(MouseButton::Left), None, now)
            .is_empty());
        assert!(input.handle_event(moved(9.0, 9.0), None, now).is_empty());
        assert!(input
            .handle_event(release(MouseButton::Left), None, now)
            .is_empty());
    }

    #[test]
    fn double_click_selects_zone() {
        let start = Instant::now();
        let zone = Some(Zone::TopEast);
        let mut input = InputProcessor::new(ViewportRole::OrientationCube);

        let _ = input.handle_event(press(MouseButton::Left), zone, start);
        let first = input.handle_event(release(MouseButton::Left), zone, start);
        assert!(!first.contains(&CubeCommand::SelectZone {
            zone: Zone::TopEast
        }));

        let later = start + Duration::from_millis(150);
        let _ = input.handle_event(press(MouseButton::Left), zone, later);
        let second =
            input.handle_event(release(MouseButton::Left), zone, later);
        assert_eq!(
            second,
            vec![
                CubeCommand::SetCubeRotation { enabled: false },
                CubeCommand::SelectZone {
                    zone: Zone::TopEast
                },
            ]
        );
    }

    #[test]
    fn two_context_clicks_reset_the_pivot() {
        let start = Instant::now();
        let zone = Some(Zone::Bottom);
        let mut input = InputProcessor::new(ViewportRole::OrientationCube);

        assert!(input
            .handle_event(press(MouseButton::Right), zone, start)
            .is_empty());
        let second = input.handle_event(
            press(MouseButton::Right),
            zone,
            start + Duration::from_millis(200),
        );
        assert_eq!(second, vec![CubeCommand::ResetTarget]);
    }

    #[test]
    fn primary_viewport_ignores_zone_gestures() {
        let now = Instant::now();
        let mut input = InputProcessor::new(ViewportRole::Primary);
        for _ in 0..2 {
            let _ = input.handle_event(press(MouseButton::Right), None, now);
            let _ = input.handle_event(press(MouseButton::Left), None, now);
            let cmds =
                input.handle_event(release(MouseButton::Left), None, now);
            assert!(cmds.is_empty());
        }
    }
}
