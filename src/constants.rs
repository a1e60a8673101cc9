// Motion constants
//
// Fixed tuning values shared by the camera and locomotion code.
// Configurable values live in `config`; these are not meant to be tuned per scene.

/// Orbit camera constants
pub mod camera {
    /// Tag looked up when no subject is bound explicitly
    pub const DEFAULT_SUBJECT_TAG: &str = "CameraLookAtTarget";

    /// Minimum squared length of a look direction before orientation is recomputed
    pub const LOOK_EPSILON_SQ: f32 = 1e-8;
}

/// Locomotion constants
pub mod locomotion {
    /// Horizontal distance below which a navigation target counts as reached
    pub const PROXIMITY_THRESHOLD: f32 = 0.1;

    /// Turning toward a navigation target stops inside this horizontal distance
    pub const TURN_STOP_DISTANCE: f32 = 0.5;

    /// Orientation slerp rate (factor per second, clamped to 1 per frame)
    pub const TURN_RATE: f32 = 10.0;

    /// Vertical velocity held while grounded. Slightly negative so the
    /// character stays pressed onto slopes.
    pub const GROUNDED_VERTICAL_VELOCITY: f32 = -2.0;
}

/// Ground probe constants
pub mod ground {
    /// Height tolerance for the reference ground plane's grounded check
    pub const CONTACT_TOLERANCE: f32 = 1e-4;

    /// Rays more parallel to the ground than this never hit it
    pub const PARALLEL_EPSILON: f32 = 1e-6;
}
