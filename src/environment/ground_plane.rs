/// Flat ground reference collaborator
///
/// An infinite horizontal plane on a single collision layer. Acts as the
/// character's kinematic motor (stops downward motion at the surface) and as
/// the screen-point resolver for click navigation.

use glam::{Vec2, Vec3};

use super::{CharacterMotor, GroundProbe, LayerMask, Ray, RaycastHit};
use crate::constants::ground::{CONTACT_TOLERANCE, PARALLEL_EPSILON};
use crate::transform::Transform;

/// Pinhole projection used to turn screen points into world rays.
/// Screen coordinates are in pixels with the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub vertical_fov_degrees: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            vertical_fov_degrees: 60.0,
        }
    }
}

impl Viewport {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// World-space ray through `screen` as seen from `view`
    pub fn screen_ray(&self, view: &Transform, screen: Vec2) -> Ray {
        let ndc_x = (2.0 * screen.x / self.width) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen.y / self.height);
        let half_height = (self.vertical_fov_degrees.to_radians() * 0.5).tan();
        let half_width = half_height * (self.width / self.height);

        let direction = view.forward()
            + view.right() * (ndc_x * half_width)
            + view.up() * (ndc_y * half_height);
        Ray::new(view.position, direction)
    }
}

#[derive(Debug, Clone)]
pub struct GroundPlane {
    pub height: f32,
    pub layer: u32,
    pub viewport: Viewport,
    grounded: bool,
}

impl GroundPlane {
    pub fn new(height: f32, layer: u32, viewport: Viewport) -> Self {
        Self {
            height,
            layer,
            viewport,
            grounded: false,
        }
    }

    /// Start out already reporting ground contact
    pub fn with_grounded(mut self, grounded: bool) -> Self {
        self.grounded = grounded;
        self
    }

    /// Intersect `ray` with the plane if it is on one of `layers`
    pub fn raycast(&self, ray: &Ray, layers: LayerMask) -> Option<RaycastHit> {
        if !layers.contains_layer(self.layer) {
            return None;
        }
        if ray.direction.y.abs() < PARALLEL_EPSILON {
            return None;
        }
        let distance = (self.height - ray.origin.y) / ray.direction.y;
        if distance < 0.0 {
            return None;
        }
        Some(RaycastHit {
            point: ray.at(distance),
            distance,
        })
    }
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self::new(0.0, 0, Viewport::default())
    }
}

impl GroundProbe for GroundPlane {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn resolve_screen_point(&self, view: &Transform, screen: Vec2, layers: LayerMask) -> Option<Vec3> {
        let ray = self.viewport.screen_ray(view, screen);
        self.raycast(&ray, layers).map(|hit| hit.point)
    }
}

impl CharacterMotor for GroundPlane {
    fn move_by(&mut self, from: Vec3, displacement: Vec3) -> Vec3 {
        let mut next = from + displacement;
        if next.y <= self.height + CONTACT_TOLERANCE {
            next.y = self.height;
            self.grounded = displacement.y <= 0.0;
        } else {
            self.grounded = false;
        }
        next
    }
}
