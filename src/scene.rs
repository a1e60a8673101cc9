//! Scene wiring and the per-frame tick
//!
//! `SceneBuilder` resolves bindings once at startup; `MotionScene::tick` runs
//! one frame with the locomotor strictly before the camera, so the camera
//! always frames the character's position from the same frame.

use serde::Serialize;

use crate::camera::{CameraPose, OrbitCamera};
use crate::config::MotionConfig;
use crate::environment::{CharacterMotor, EffectSpawner, GroundProbe, SceneDirectory};
use crate::error::{missing_binding, MotionResult};
use crate::input::{InputEvent, InputState, LocomotionIntent};
use crate::locomotion::{Locomotor, MovementMode};
use crate::transform::{Transform, TransformHandle};

/// Summary of a finished frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    pub camera: CameraPose,
    pub character: Transform,
    pub mode: &'static str,
}

pub struct SceneBuilder<'a> {
    config: MotionConfig,
    character: TransformHandle,
    subject: Option<TransformHandle>,
    directory: Option<&'a dyn SceneDirectory>,
}

impl<'a> SceneBuilder<'a> {
    /// Start wiring a scene around the character the locomotor will drive
    pub fn new(config: MotionConfig, character: TransformHandle) -> Self {
        Self {
            config,
            character,
            subject: None,
            directory: None,
        }
    }

    /// Follow this subject explicitly
    pub fn subject(mut self, subject: TransformHandle) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Search `directory` for the configured subject tag when no explicit subject is given
    pub fn discover_subject(mut self, directory: &'a dyn SceneDirectory) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn build(self) -> MotionResult<MotionScene> {
        self.config.validate()?;

        let tag = self.config.scene.subject_tag.as_str();
        let subject = match (self.subject, self.directory) {
            (Some(subject), _) => Some(subject),
            (None, Some(directory)) => directory.find_tagged(tag),
            (None, None) => None,
        };

        if subject.is_none() {
            if self.config.scene.require_subject {
                return Err(missing_binding("camera subject", tag));
            }
            log::warn!(
                "[MotionScene] No camera subject assigned and nothing tagged '{}'; camera stays inert",
                tag
            );
        }

        let mut camera = OrbitCamera::new(self.config.camera.clone(), subject);
        if !camera.has_subject() {
            camera.suppress_unbound_warning();
        }
        let locomotor = Locomotor::new(self.config.locomotion.clone(), self.character);
        log::info!(
            "[MotionScene] Ready (subject bound: {}, character at {:?})",
            camera.has_subject(),
            locomotor.transform().position
        );

        Ok(MotionScene {
            camera,
            locomotor,
            input: InputState::new(),
            frame: 0,
        })
    }
}

/// Orbit camera and character locomotion driven by one host frame loop
#[derive(Debug)]
pub struct MotionScene {
    camera: OrbitCamera,
    locomotor: Locomotor,
    input: InputState,
    frame: u64,
}

impl MotionScene {
    /// Queue an input event for the next tick
    pub fn push_event(&mut self, event: InputEvent) {
        self.input.process_event(event);
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn locomotor(&self) -> &Locomotor {
        &self.locomotor
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one frame.
    ///
    /// Order: locomotion intents in arrival order, locomotor update, camera update.
    /// Click resolution and keyboard basis use the camera pose of the previous frame.
    pub fn tick<G>(&mut self, dt: f32, ground: &mut G, effects: &mut dyn EffectSpawner) -> FrameReport
    where
        G: GroundProbe + CharacterMotor,
    {
        let view = self.camera.pose();
        for intent in self.input.take_locomotion_intents() {
            match intent {
                LocomotionIntent::Move(axis) => self.locomotor.set_move_axis(axis),
                LocomotionIntent::NavigateTo(screen) => {
                    self.locomotor.handle_click(screen, &view, &*ground, effects);
                }
            }
        }

        let character = self.locomotor.update(dt, ground, &view);
        let camera = self.camera.update(&self.input.camera_input(), dt);
        self.input.end_frame();
        self.frame += 1;

        FrameReport {
            frame: self.frame,
            camera,
            character,
            mode: mode_name(self.locomotor.mode()),
        }
    }
}

fn mode_name(mode: MovementMode) -> &'static str {
    match mode {
        MovementMode::Idle => "idle",
        MovementMode::KeyboardDirected => "keyboard",
        MovementMode::TargetSeeking { .. } => "seeking",
    }
}
