/// Shared world transforms
///
/// Local axes follow the convention used throughout the crate:
/// +X right, +Y up, +Z forward.

use std::cell::Cell;
use std::rc::Rc;

use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::camera::LOOK_EPSILON_SQ;

/// Position and orientation of an entity in world space
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_position(Vec3::ZERO)
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

/// Rotation whose forward axis points along `direction` with world up kept as
/// close to +Y as possible. Returns `None` for a zero direction or one parallel
/// to the up axis.
pub fn look_rotation(direction: Vec3) -> Option<Quat> {
    if direction.length_squared() < LOOK_EPSILON_SQ {
        return None;
    }
    let forward = direction.normalize();
    let right = Vec3::Y.cross(forward);
    if right.length_squared() < LOOK_EPSILON_SQ {
        return None;
    }
    let right = right.normalize();
    let up = forward.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)).normalize())
}

/// Step `current` toward facing `direction` by a slerp factor clamped to [0, 1]
pub fn turn_toward(current: Quat, direction: Vec3, factor: f32) -> Quat {
    match look_rotation(direction) {
        Some(target) => current.slerp(target, factor.clamp(0.0, 1.0)).normalize(),
        None => current,
    }
}

/// Shared handle to an entity transform.
///
/// One owner writes (the locomotor for its character), any number of readers
/// observe the latest value within the same frame.
#[derive(Clone, Debug, Default)]
pub struct TransformHandle(Rc<Cell<Transform>>);

impl TransformHandle {
    pub fn new(transform: Transform) -> Self {
        Self(Rc::new(Cell::new(transform)))
    }

    pub fn at(position: Vec3) -> Self {
        Self::new(Transform::from_position(position))
    }

    pub fn get(&self) -> Transform {
        self.0.get()
    }

    pub fn position(&self) -> Vec3 {
        self.0.get().position
    }

    pub fn set(&self, transform: Transform) {
        self.0.set(transform);
    }

    pub fn set_position(&self, position: Vec3) {
        let mut transform = self.0.get();
        transform.position = position;
        self.0.set(transform);
    }

    /// True when both handles refer to the same entity
    pub fn same_entity(&self, other: &TransformHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
