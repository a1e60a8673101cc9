/// Orbit follow-camera
///
/// Orbits a subject on a sphere described by a clamped distance and two angles
/// in degrees. While the orbit button is held the camera snaps to its orbit
/// position; otherwise it eases toward it with a frame-rate dependent lerp.
/// The camera always looks straight at the subject.

use glam::{Vec2, Vec3};

use crate::config::OrbitCameraConfig;
use crate::input::CameraInput;
use crate::transform::{look_rotation, Transform, TransformHandle};

/// World pose produced by the camera each frame
pub type CameraPose = Transform;

#[derive(Debug)]
pub struct OrbitCamera {
    settings: OrbitCameraConfig,
    subject: Option<TransformHandle>,
    distance: f32,
    horizontal_angle: f32,
    vertical_angle: f32,
    pose: CameraPose,
    warned_unbound: bool,
}

/// Unit vector from the subject toward the camera for the given angles in degrees.
/// Angle zero places the camera behind the subject on the -Z side.
pub fn orbit_direction(horizontal_degrees: f32, vertical_degrees: f32) -> Vec3 {
    let (sin_h, cos_h) = horizontal_degrees.to_radians().sin_cos();
    let (sin_v, cos_v) = vertical_degrees.to_radians().sin_cos();
    Vec3::new(sin_h * cos_v, sin_v, -cos_h * cos_v)
}

impl OrbitCamera {
    pub fn new(settings: OrbitCameraConfig, subject: Option<TransformHandle>) -> Self {
        let pose = Transform::from_position(settings.start_position);
        Self {
            distance: settings.distance.clamp(settings.min_distance, settings.max_distance),
            horizontal_angle: settings.horizontal_angle,
            vertical_angle: settings
                .vertical_angle
                .clamp(settings.min_vertical_angle, settings.max_vertical_angle),
            settings,
            subject,
            pose,
            warned_unbound: false,
        }
    }

    /// Attach (or replace) the followed subject
    pub fn bind_subject(&mut self, subject: TransformHandle) {
        log::debug!("[OrbitCamera] Subject bound at {:?}", subject.position());
        self.subject = Some(subject);
        self.warned_unbound = false;
    }

    pub fn has_subject(&self) -> bool {
        self.subject.is_some()
    }

    /// Whether the missing-subject warning has been logged since the last binding
    pub fn warned_unbound(&self) -> bool {
        self.warned_unbound
    }

    /// Record that the owner already reported the missing subject
    pub(crate) fn suppress_unbound_warning(&mut self) {
        self.warned_unbound = true;
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn horizontal_angle(&self) -> f32 {
        self.horizontal_angle
    }

    pub fn vertical_angle(&self) -> f32 {
        self.vertical_angle
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn settings(&self) -> &OrbitCameraConfig {
        &self.settings
    }

    /// Advance one frame following the bound subject.
    /// Without a subject the camera keeps its last pose.
    pub fn update(&mut self, input: &CameraInput, dt: f32) -> CameraPose {
        let subject_position = match &self.subject {
            Some(subject) => subject.position(),
            None => {
                if !self.warned_unbound {
                    log::warn!("[OrbitCamera] No subject bound; holding last pose");
                    self.warned_unbound = true;
                }
                return self.pose;
            }
        };
        self.step(input, subject_position, dt)
    }

    /// Advance one frame around an explicit subject position
    pub fn step(&mut self, input: &CameraInput, subject_position: Vec3, dt: f32) -> CameraPose {
        self.apply_zoom(input.scroll_delta);
        if input.orbit_active {
            self.apply_orbit(input.look_delta);
        }

        let target = self.orbit_position(subject_position);
        self.pose.position = if input.orbit_active {
            target
        } else {
            let factor = (self.settings.follow_smoothing * dt).clamp(0.0, 1.0);
            self.pose.position.lerp(target, factor)
        };

        if let Some(rotation) = look_rotation(subject_position - self.pose.position) {
            self.pose.rotation = rotation;
        }

        log::trace!(
            "[OrbitCamera] pos=({:.2}, {:.2}, {:.2}) dist={:.2} h={:.1} v={:.1}",
            self.pose.position.x,
            self.pose.position.y,
            self.pose.position.z,
            self.distance,
            self.horizontal_angle,
            self.vertical_angle
        );
        self.pose
    }

    /// Where the camera sits when fully settled around `subject_position`
    pub fn orbit_position(&self, subject_position: Vec3) -> Vec3 {
        subject_position + orbit_direction(self.horizontal_angle, self.vertical_angle) * self.distance
    }

    fn apply_zoom(&mut self, scroll_delta: f32) {
        if scroll_delta != 0.0 {
            self.distance = (self.distance - scroll_delta * self.settings.zoom_speed)
                .clamp(self.settings.min_distance, self.settings.max_distance);
        }
    }

    fn apply_orbit(&mut self, look_delta: Vec2) {
        let s = &self.settings;
        if look_delta.x != 0.0 {
            let direction = if s.invert_horizontal { -1.0 } else { 1.0 };
            self.horizontal_angle += look_delta.x * s.orbit_speed * direction;
        }
        if look_delta.y != 0.0 {
            let direction = if s.invert_vertical { 1.0 } else { -1.0 };
            self.vertical_angle = (self.vertical_angle + look_delta.y * s.orbit_speed * direction)
                .clamp(s.min_vertical_angle, s.max_vertical_angle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    fn orbiting(look: Vec2) -> CameraInput {
        CameraInput {
            scroll_delta: 0.0,
            orbit_active: true,
            look_delta: look,
        }
    }

    fn scrolling(delta: f32) -> CameraInput {
        CameraInput {
            scroll_delta: delta,
            ..Default::default()
        }
    }

    #[test]
    fn test_orbit_direction_behind_subject() {
        assert!(approx(orbit_direction(0.0, 0.0), Vec3::new(0.0, 0.0, -1.0)));
        assert!(approx(orbit_direction(90.0, 0.0), Vec3::new(1.0, 0.0, 0.0)));
        let up = orbit_direction(0.0, 45.0);
        assert!(approx(up, Vec3::new(0.0, 45f32.to_radians().sin(), -45f32.to_radians().cos())));
    }

    #[test]
    fn test_level_orbit_places_camera_behind() {
        let settings = OrbitCameraConfig {
            vertical_angle: 0.0,
            min_vertical_angle: -10.0,
            ..Default::default()
        };
        let mut camera = OrbitCamera::new(settings, None);
        let subject = Vec3::new(2.0, 1.0, 3.0);
        let pose = camera.step(&orbiting(Vec2::ZERO), subject, 0.016);
        assert!(approx(pose.position, subject + Vec3::new(0.0, 0.0, -10.0)));
        assert!(approx(pose.forward(), Vec3::Z));
    }

    #[test]
    fn test_scroll_zooms_and_saturates() {
        let mut camera = OrbitCamera::new(OrbitCameraConfig::default(), None);
        camera.step(&scrolling(100.0), Vec3::ZERO, 0.016);
        assert!((camera.distance() - 9.0).abs() < 1e-5);

        for _ in 0..20 {
            camera.step(&scrolling(120.0), Vec3::ZERO, 0.016);
        }
        assert_eq!(camera.distance(), 3.0);

        camera.step(&scrolling(-10_000.0), Vec3::ZERO, 0.016);
        assert_eq!(camera.distance(), 20.0);
    }

    #[test]
    fn test_clamps_hold_every_frame() {
        let mut camera = OrbitCamera::new(OrbitCameraConfig::default(), None);
        let deltas = [
            (Vec2::new(30.0, -900.0), 500.0),
            (Vec2::new(-5.0, 1200.0), -4000.0),
            (Vec2::new(0.0, -3.0), 7.5),
            (Vec2::new(720.0, 640.0), -0.5),
        ];
        for (look, scroll) in deltas.iter().cycle().take(40) {
            let input = CameraInput {
                scroll_delta: *scroll,
                orbit_active: true,
                look_delta: *look,
            };
            camera.step(&input, Vec3::ZERO, 0.016);
            let s = camera.settings();
            assert!((s.min_distance..=s.max_distance).contains(&camera.distance()));
            assert!((s.min_vertical_angle..=s.max_vertical_angle).contains(&camera.vertical_angle()));
        }
    }

    #[test]
    fn test_look_ignored_when_not_orbiting() {
        let mut camera = OrbitCamera::new(OrbitCameraConfig::default(), None);
        let input = CameraInput {
            scroll_delta: 0.0,
            orbit_active: false,
            look_delta: Vec2::new(50.0, 50.0),
        };
        camera.step(&input, Vec3::ZERO, 0.016);
        assert_eq!(camera.horizontal_angle(), 0.0);
        assert_eq!(camera.vertical_angle(), 45.0);
    }

    #[test]
    fn test_orbit_directions_and_inversion() {
        let mut camera = OrbitCamera::new(OrbitCameraConfig::default(), None);
        camera.step(&orbiting(Vec2::new(10.0, 10.0)), Vec3::ZERO, 0.016);
        assert!((camera.horizontal_angle() - 1.0).abs() < 1e-5);
        assert!((camera.vertical_angle() - 44.0).abs() < 1e-5);

        let inverted = OrbitCameraConfig {
            invert_horizontal: true,
            invert_vertical: true,
            ..Default::default()
        };
        let mut camera = OrbitCamera::new(inverted, None);
        camera.step(&orbiting(Vec2::new(10.0, 10.0)), Vec3::ZERO, 0.016);
        assert!((camera.horizontal_angle() + 1.0).abs() < 1e-5);
        assert!((camera.vertical_angle() - 46.0).abs() < 1e-5);
    }

    #[test]
    fn test_follow_eases_without_snapping() {
        let mut camera = OrbitCamera::new(OrbitCameraConfig::default(), None);
        let start = camera.pose().position;
        let target = camera.orbit_position(Vec3::ZERO);
        let dt = 0.016;

        let pose = camera.step(&CameraInput::default(), Vec3::ZERO, dt);
        let expected = start.lerp(target, 5.0 * dt);
        assert!(approx(pose.position, expected));
        assert!(pose.position.distance(target) > 0.1);
        assert!(pose.position.distance(target) < start.distance(target));
    }

    #[test]
    fn test_always_looks_at_subject() {
        let mut camera = OrbitCamera::new(OrbitCameraConfig::default(), None);
        let subject = Vec3::new(4.0, 0.0, -2.0);
        let pose = camera.step(&CameraInput::default(), subject, 0.1);
        let to_subject = (subject - pose.position).normalize();
        assert!(approx(pose.forward(), to_subject));
    }

    #[test]
    fn test_unbound_camera_holds_pose() {
        let mut camera = OrbitCamera::new(OrbitCameraConfig::default(), None);
        let before = camera.pose();
        assert!(!camera.warned_unbound());
        let pose = camera.update(&scrolling(500.0), 0.016);
        assert_eq!(pose, before);
        assert_eq!(camera.distance(), 10.0);
        assert!(camera.warned_unbound());

        camera.bind_subject(TransformHandle::at(Vec3::ZERO));
        assert!(camera.has_subject());
        let pose = camera.update(&CameraInput::default(), 0.016);
        assert_ne!(pose.position, before.position);
    }
}
