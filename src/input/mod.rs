//! Per-frame input sampling
//!
//! The host's input source pushes `InputEvent`s as they arrive; the scene reads
//! one synchronous snapshot per frame and then calls `end_frame` to reset the
//! per-frame deltas.

use glam::Vec2;

/// Discrete and analog input delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Scroll wheel delta; positive zooms in
    Zoom(f32),
    /// Orbit button pressed or released
    OrbitToggle(bool),
    /// Pointer delta, only meaningful while orbiting
    Look(Vec2),
    /// Keyboard movement axis (x = strafe, y = forward)
    MoveAxis(Vec2),
    /// Primary button at a screen position
    PrimaryClick { pressed: bool, screen: Vec2 },
}

/// Locomotion requests in the order they were reported this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocomotionIntent {
    Move(Vec2),
    NavigateTo(Vec2),
}

/// Camera controls for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraInput {
    pub scroll_delta: f32,
    pub orbit_active: bool,
    pub look_delta: Vec2,
}

#[derive(Debug, Default)]
pub struct InputState {
    scroll_delta: f32,
    orbit_active: bool,
    look_delta: Vec2,
    move_axis: Vec2,
    intents: Vec<LocomotionIntent>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Zoom(delta) => self.process_scroll(delta),
            InputEvent::OrbitToggle(pressed) => self.process_orbit_button(pressed),
            InputEvent::Look(delta) => self.process_look(delta),
            InputEvent::MoveAxis(axis) => self.process_move_axis(axis),
            InputEvent::PrimaryClick { pressed, screen } => self.process_primary_click(pressed, screen),
        }
    }

    pub fn process_scroll(&mut self, delta: f32) {
        self.scroll_delta += delta;
    }

    pub fn process_orbit_button(&mut self, pressed: bool) {
        self.orbit_active = pressed;
        if !pressed {
            self.look_delta = Vec2::ZERO;
        }
    }

    pub fn process_look(&mut self, delta: Vec2) {
        // Pointer motion outside an orbit drag is not camera input
        if self.orbit_active {
            self.look_delta += delta;
        }
    }

    pub fn process_move_axis(&mut self, axis: Vec2) {
        self.move_axis = axis;
        self.intents.push(LocomotionIntent::Move(axis));
    }

    pub fn process_primary_click(&mut self, pressed: bool, screen: Vec2) {
        if pressed {
            self.intents.push(LocomotionIntent::NavigateTo(screen));
        }
    }

    pub fn camera_input(&self) -> CameraInput {
        CameraInput {
            scroll_delta: self.scroll_delta,
            orbit_active: self.orbit_active,
            look_delta: if self.orbit_active { self.look_delta } else { Vec2::ZERO },
        }
    }

    pub fn is_orbiting(&self) -> bool {
        self.orbit_active
    }

    /// Last reported movement axis (held between events)
    pub fn move_axis(&self) -> Vec2 {
        self.move_axis
    }

    pub fn take_locomotion_intents(&mut self) -> Vec<LocomotionIntent> {
        std::mem::take(&mut self.intents)
    }

    /// Reset deltas that only apply to the frame just processed
    pub fn end_frame(&mut self) {
        self.scroll_delta = 0.0;
        self.look_delta = Vec2::ZERO;
        self.intents.clear();
    }
}
