/// Camera Module
///
/// Orbit follow-camera that tracks a shared subject transform.

pub mod orbit_camera;

pub use orbit_camera::{orbit_direction, CameraPose, OrbitCamera};
