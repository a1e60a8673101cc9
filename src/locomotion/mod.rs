//! Character locomotion: movement modes, gravity and click navigation

pub mod locomotor;
pub mod navigation;

pub use locomotor::{keyboard_direction, Locomotor, MovementMode};
