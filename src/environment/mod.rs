//! Collaborator interfaces the motion core talks to
//!
//! The core never ray casts, resolves collisions or instantiates effects on its
//! own. Hosts implement these traits; `GroundPlane`, `EffectQueue` and
//! `TagDirectory` are small reference implementations used by the demo binary
//! and the tests.

pub mod effects;
pub mod ground_plane;
pub mod scene_tags;

pub use effects::{EffectQueue, SpawnedEffect};
pub use ground_plane::{GroundPlane, Viewport};
pub use scene_tags::TagDirectory;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::EffectError;
use crate::transform::{Transform, TransformHandle};

/// Bit set of collision layers
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const DEFAULT: LayerMask = LayerMask(1);
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Mask containing only `layer`. Layers are 0..32; anything outside that
    /// range yields `LayerMask::NONE`.
    pub const fn layer(layer: u32) -> LayerMask {
        match 1u32.checked_shl(layer) {
            Some(bits) => LayerMask(bits),
            None => LayerMask::NONE,
        }
    }

    /// Out-of-range layers are never contained, not even in `LayerMask::ALL`
    pub const fn contains_layer(self, layer: u32) -> bool {
        match 1u32.checked_shl(layer) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    pub point: Vec3,
    pub distance: f32,
}

/// Ground and collision queries
pub trait GroundProbe {
    /// Whether the character is currently supported by ground
    fn is_grounded(&self) -> bool;

    /// Resolve a screen point seen from `view` to a world point on ground
    /// belonging to one of `layers`
    fn resolve_screen_point(&self, view: &Transform, screen: Vec2, layers: LayerMask) -> Option<Vec3>;
}

/// Kinematic movement with collision resolution
pub trait CharacterMotor {
    /// Move from `from` by `displacement`, returning the resolved position
    fn move_by(&mut self, from: Vec3, displacement: Vec3) -> Vec3;
}

/// Spawns a visual cue at a world point
pub trait EffectSpawner {
    fn spawn(&mut self, point: Vec3) -> Result<(), EffectError>;
}

/// Camera basis used for keyboard-relative movement
pub trait ActiveCamera {
    fn forward(&self) -> Vec3;
    fn right(&self) -> Vec3;
}

impl ActiveCamera for Transform {
    fn forward(&self) -> Vec3 {
        Transform::forward(self)
    }

    fn right(&self) -> Vec3 {
        Transform::right(self)
    }
}

/// Startup-time lookup of tagged scene entities
pub trait SceneDirectory {
    fn find_tagged(&self, tag: &str) -> Option<TransformHandle>;
}
