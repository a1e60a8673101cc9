/// Character locomotion
///
/// Three mutually exclusive movement modes driven by input events:
/// keyboard movement relative to the active camera, walking straight toward a
/// clicked ground point, and standing idle. A single vertical velocity is
/// integrated under gravity in every mode.

use glam::{Vec2, Vec3};

use crate::config::LocomotionConfig;
use crate::constants::locomotion::{
    GROUNDED_VERTICAL_VELOCITY, PROXIMITY_THRESHOLD, TURN_RATE, TURN_STOP_DISTANCE,
};
use crate::environment::{ActiveCamera, CharacterMotor, GroundProbe};
use crate::transform::{turn_toward, Transform, TransformHandle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementMode {
    Idle,
    KeyboardDirected,
    /// Walking toward `target`; the only mode that carries a target
    TargetSeeking { target: Vec3 },
}

#[derive(Debug)]
pub struct Locomotor {
    pub(super) settings: LocomotionConfig,
    body: TransformHandle,
    vertical_velocity: f32,
    pub(super) mode: MovementMode,
    move_axis: Vec2,
}

/// Ground-plane movement direction for a keyboard axis, relative to the camera.
/// Not normalized: a diagonal axis moves faster than a cardinal one.
pub fn keyboard_direction(camera: &dyn ActiveCamera, axis: Vec2) -> Vec3 {
    let mut forward = camera.forward();
    let mut right = camera.right();
    forward.y = 0.0;
    right.y = 0.0;
    forward.normalize_or_zero() * axis.y + right.normalize_or_zero() * axis.x
}

impl Locomotor {
    /// Take over movement of the entity behind `body`, starting from its current transform
    pub fn new(settings: LocomotionConfig, body: TransformHandle) -> Self {
        Self {
            settings,
            body,
            vertical_velocity: 0.0,
            mode: MovementMode::Idle,
            move_axis: Vec2::ZERO,
        }
    }

    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    pub fn navigation_target(&self) -> Option<Vec3> {
        match self.mode {
            MovementMode::TargetSeeking { target } => Some(target),
            _ => None,
        }
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    pub fn move_axis(&self) -> Vec2 {
        self.move_axis
    }

    pub fn transform(&self) -> Transform {
        self.body.get()
    }

    /// Handle to the controlled entity, for followers such as the camera
    pub fn body(&self) -> &TransformHandle {
        &self.body
    }

    pub fn settings(&self) -> &LocomotionConfig {
        &self.settings
    }

    /// Report a keyboard movement axis. Every report ends a navigation in
    /// progress: a non-zero axis takes over, a zero axis stops the character.
    pub fn set_move_axis(&mut self, axis: Vec2) {
        self.move_axis = axis;
        let next = if axis != Vec2::ZERO {
            MovementMode::KeyboardDirected
        } else {
            MovementMode::Idle
        };
        if self.mode != next {
            log::debug!("[Locomotor] {:?} -> {:?}", self.mode, next);
        }
        self.mode = next;
    }

    /// Advance one frame: integrate gravity, move according to the current mode
    /// through `body`, and commit the result to the shared transform.
    pub fn update<B>(&mut self, dt: f32, body: &mut B, camera: &dyn ActiveCamera) -> Transform
    where
        B: GroundProbe + CharacterMotor + ?Sized,
    {
        self.vertical_velocity = if body.is_grounded() {
            GROUNDED_VERTICAL_VELOCITY
        } else {
            self.vertical_velocity + self.settings.gravity * dt
        };

        let mut transform = self.body.get();
        let fall = Vec3::new(0.0, self.vertical_velocity * dt, 0.0);

        let displacement = match self.mode {
            MovementMode::TargetSeeking { target } => {
                let mut delta = target - transform.position;
                delta.y = 0.0;
                let remaining = delta.length();
                if remaining < PROXIMITY_THRESHOLD {
                    // A key still held resumes keyboard motion on the next frame
                    self.mode = if self.move_axis != Vec2::ZERO {
                        MovementMode::KeyboardDirected
                    } else {
                        MovementMode::Idle
                    };
                    log::debug!("[Locomotor] Reached target {:?} -> {:?}", target, self.mode);
                    None
                } else {
                    let heading = delta / remaining;
                    let mut step = heading * self.settings.move_speed * dt;
                    if self.settings.clamp_arrival && step.length() > remaining {
                        step = delta;
                    }
                    if remaining > TURN_STOP_DISTANCE {
                        transform.rotation = turn_toward(transform.rotation, heading, dt * TURN_RATE);
                    }
                    Some(step + fall)
                }
            }
            MovementMode::KeyboardDirected => {
                let direction = keyboard_direction(camera, self.move_axis);
                if direction != Vec3::ZERO {
                    transform.rotation = turn_toward(transform.rotation, direction, dt * TURN_RATE);
                }
                Some(direction * self.settings.move_speed * dt + fall)
            }
            MovementMode::Idle => Some(fall),
        };

        if let Some(displacement) = displacement {
            transform.position = body.move_by(transform.position, displacement);
        }
        self.body.set(transform);

        log::trace!(
            "[Locomotor] mode={:?} pos=({:.2}, {:.2}, {:.2}) vy={:.2}",
            self.mode,
            transform.position.x,
            transform.position.y,
            transform.position.z,
            self.vertical_velocity
        );
        transform
    }
}
