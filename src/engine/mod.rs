//! The orientation cube engine: two linked viewports, zone selection and
//! the per-frame transition driver.

/// The command vocabulary.
pub mod command;
mod options;
/// Per-viewport context objects.
pub mod viewport;

use glam::Vec3;
use web_time::Instant;

use self::command::CubeCommand;
use self::viewport::Viewport;
use crate::animation::TransitionAnimator;
use crate::camera::{CameraHandle, OrbitController};
use crate::error::CubeError;
use crate::options::{Options, SyncMode};
use crate::orientation::{layout, OrientationTable, Zone, ZonePanel};
use crate::sync::{CameraLink, SyncOutcome, ViewportRole};

/// Owns both viewports, the zone table and the transition animator.
///
/// The host forwards user interaction as [`CubeCommand`]s, calls
/// [`update`](Self::update) once per frame, and keeps scheduling frames
/// while it returns `true`.
///
/// ```ignore
/// let mut engine = ViewCubeEngine::new(options, Some(primary_controller));
/// for cmd in cube_input.handle_event(event, hovered_zone, now) {
///     let _ = engine.execute(cmd, now);
/// }
/// if engine.update(now) {
///     request_redraw();
/// }
/// ```
#[derive(Debug)]
pub struct ViewCubeEngine {
    options: Options,
    table: OrientationTable,
    primary: Viewport,
    cube: Viewport,
    animator: TransitionAnimator,
}

impl ViewCubeEngine {
    /// Build the engine.
    ///
    /// The cube viewport always gets its own controller on the canonical
    /// sphere. Without a `primary` controller both links stay idle until
    /// one is attached with [`attach_primary`](Self::attach_primary).
    #[must_use]
    pub fn new(options: Options, primary: Option<OrbitController>) -> Self {
        let radius = options.cube.radius;
        let frequency = options.sync.frequency_ms;
        let cube_controller =
            OrbitController::orientation_cube(radius, &options.camera);

        if primary.is_none() {
            log::warn!(
                "{}",
                CubeError::MissingController(ViewportRole::Primary)
            );
        }

        log::info!(
            "viewcube engine: radius {radius}, sync {} every {frequency} ms, \
             mode {:?}",
            if options.sync.enabled { "on" } else { "off" },
            options.sync.mode,
        );

        Self {
            table: OrientationTable::new(radius),
            primary: Viewport::new(ViewportRole::Primary, primary, frequency),
            cube: Viewport::new(
                ViewportRole::OrientationCube,
                Some(cube_controller),
                frequency,
            ),
            animator: TransitionAnimator::new(
                options.transition.duration(),
                options.transition.easing,
            ),
            options,
        }
    }

    /// Attach the primary viewport's controller after construction.
    pub fn attach_primary(&mut self, controller: OrbitController) {
        self.primary.attach(controller);
    }

    /// The controller of one viewport.
    ///
    /// # Errors
    ///
    /// [`CubeError::MissingController`] if nothing is attached there.
    pub fn camera(
        &self,
        role: ViewportRole,
    ) -> Result<&OrbitController, CubeError> {
        self.viewport(role).require_controller()
    }

    /// The zone → position table.
    #[must_use]
    pub fn table(&self) -> &OrientationTable {
        &self.table
    }

    /// The transition driver.
    #[must_use]
    pub fn animator(&self) -> &TransitionAnimator {
        &self.animator
    }

    /// Panels the renderer should draw for the current options.
    #[must_use]
    pub fn layout(&self) -> Vec<ZonePanel> {
        layout::generate(
            self.options.cube.cube_size(),
            self.options.style.text.offset,
            self.options.cube.toggles(),
        )
    }

    /// Label to draw on `zone`'s panels, `None` when labels of its kind are
    /// hidden.
    #[must_use]
    pub fn label(&self, zone: Zone) -> Option<String> {
        self.options
            .style
            .shows_label(zone.kind())
            .then(|| self.options.locale.label(zone))
    }

    /// Whether a transition is still running.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.animator.is_animating()
    }

    /// Apply one command. Returns `true` when a camera moved.
    pub fn execute(&mut self, command: CubeCommand, now: Instant) -> bool {
        match command {
            CubeCommand::Rotate { viewport, delta } => self
                .interact(viewport, now, |controller| controller.rotate(delta)),
            CubeCommand::Pan { viewport, delta } => self
                .interact(viewport, now, |controller| controller.pan(delta)),
            CubeCommand::Zoom { viewport, delta } => self
                .interact(viewport, now, |controller| controller.zoom(delta)),
            CubeCommand::SetCubeRotation { enabled } => {
                if let Some(cube) = self.cube.controller_mut() {
                    cube.set_rotate_enabled(enabled);
                }
                false
            }
            CubeCommand::SelectZone { zone } => self.select_zone(zone, now),
            CubeCommand::ResetTarget => self.reset_primary_target(now),
        }
    }

    /// Run a user interaction on one viewport and, when it moved the
    /// camera, raise that viewport's change notification.
    fn interact(
        &mut self,
        role: ViewportRole,
        now: Instant,
        action: impl FnOnce(&mut OrbitController) -> bool,
    ) -> bool {
        let Some(controller) = self.viewport_mut(role).controller_mut() else {
            return false;
        };
        if !action(controller) {
            return false;
        }
        let _ = self.notify_changed(role, now);
        true
    }

    /// "View changed" notification from `origin`'s orbit control.
    ///
    /// Goes through `origin`'s throttle and then the link toward the other
    /// viewport. Returns `true` when the other camera was moved.
    pub fn notify_changed(
        &mut self,
        origin: ViewportRole,
        now: Instant,
    ) -> bool {
        if !self.options.sync.enabled || !self.links_ready() {
            return false;
        }
        if !self.viewport_mut(origin).throttle_mut().admit(now) {
            return false;
        }
        self.sync_from(origin).is_applied()
    }

    /// Start the animated move to `zone`'s canonical orientation.
    ///
    /// The cube camera is animated; every frame of that animation is
    /// mirrored to the primary camera by [`update`](Self::update). Returns
    /// `false` when nothing was started: the zone's kind is disabled, the
    /// sync mode is free rotation, or the cube is already there.
    pub fn select_zone(&mut self, zone: Zone, now: Instant) -> bool {
        if !self.options.cube.toggles().enabled(zone.kind()) {
            log::debug!(
                "zone {zone} ignored: {:?} zones disabled",
                zone.kind()
            );
            return false;
        }
        if self.options.sync.mode == SyncMode::FreeRotation {
            log::debug!("zone {zone} ignored in free rotation mode");
            return false;
        }

        let target = self.table.position(zone);
        let Some(cube) = self.cube.controller() else {
            return false;
        };
        log::debug!("zone {zone} selected, heading to {target}");
        self.animator.start_transition(cube, target, now)
    }

    /// [`select_zone`](Self::select_zone) by identifier. Unknown names are
    /// logged and ignored.
    pub fn select_zone_by_name(&mut self, name: &str, now: Instant) -> bool {
        match name.parse::<Zone>() {
            Ok(zone) => self.select_zone(zone, now),
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    /// Move the primary orbit pivot to the origin, keeping the camera
    /// position. The cube follows the resulting change of direction.
    pub fn reset_primary_target(&mut self, now: Instant) -> bool {
        let Some(primary) = self.primary.controller_mut() else {
            return false;
        };
        if primary.target() == Vec3::ZERO {
            return false;
        }
        primary.set_target(Vec3::ZERO);
        let _ = self.notify_changed(ViewportRole::Primary, now);
        true
    }

    /// Advance the running transition by one frame.
    ///
    /// Writes the cube camera and mirrors it to the primary camera. The
    /// mirror skips the throttle's window count so the final snap always
    /// lands, but a disabled throttle (frequency 0) still turns it off.
    /// Returns whether another frame is needed.
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.animator.is_animating() {
            return false;
        }
        let Some(cube) = self.cube.controller_mut() else {
            return false;
        };
        let more = self.animator.tick(cube, now);
        if self.options.sync.enabled && self.cube.throttle().is_enabled() {
            let _ = self.sync_from(ViewportRole::OrientationCube);
        }
        more
    }

    fn links_ready(&self) -> bool {
        self.primary.controller().is_some() && self.cube.controller().is_some()
    }

    fn sync_from(&mut self, origin: ViewportRole) -> SyncOutcome {
        let link = CameraLink::from_origin(origin);
        let (from, to) = match origin {
            ViewportRole::Primary => {
                (self.primary.controller(), self.cube.controller_mut())
            }
            ViewportRole::OrientationCube => {
                (self.cube.controller(), self.primary.controller_mut())
            }
        };
        match (from, to) {
            (Some(from), Some(to)) => link.apply(from, to),
            _ => SyncOutcome::Unchanged,
        }
    }

    fn viewport(&self, role: ViewportRole) -> &Viewport {
        match role {
            ViewportRole::Primary => &self.primary,
            ViewportRole::OrientationCube => &self.cube,
        }
    }

    fn viewport_mut(&mut self, role: ViewportRole) -> &mut Viewport {
        match role {
            ViewportRole::Primary => &mut self.primary,
            ViewportRole::OrientationCube => &mut self.cube,
        }
    }
}
