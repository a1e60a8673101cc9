pub mod camera;
pub mod config;
pub mod constants;
pub mod environment;
pub mod error;
pub mod input;
pub mod locomotion;
pub mod scene;
pub mod transform;

pub use camera::{CameraPose, OrbitCamera};
pub use config::{LocomotionConfig, MotionConfig, OrbitCameraConfig, SceneConfig};
pub use environment::{
    ActiveCamera, CharacterMotor, EffectQueue, EffectSpawner, GroundPlane, GroundProbe, LayerMask,
    SceneDirectory, TagDirectory, Viewport,
};
pub use error::{EffectError, MotionError, MotionResult};
pub use input::{CameraInput, InputEvent, InputState};
pub use locomotion::{Locomotor, MovementMode};
pub use scene::{FrameReport, MotionScene, SceneBuilder};
pub use transform::{Transform, TransformHandle};
