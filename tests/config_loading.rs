// Config file loading tests

use std::io::Write;

use third_person_motion::{LayerMask, MotionConfig, MotionError, SceneBuilder, TransformHandle};

#[test]
fn test_load_full_config_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"
[camera]
distance = 8.0
min_distance = 2.0
max_distance = 15.0
zoom_speed = 0.02
follow_smoothing = 3.0
vertical_angle = 30.0
min_vertical_angle = 5.0
max_vertical_angle = 70.0
orbit_speed = 0.2
invert_horizontal = true
start_position = [0.0, 5.0, -5.0]

[locomotion]
move_speed = 3.5
gravity = -20.0
ground_layers = 6
clamp_arrival = true

[scene]
subject_tag = "Player"
require_subject = true
"#
    )
    .expect("write config");

    let config = MotionConfig::load(file.path()).expect("config loads");
    assert_eq!(config.camera.distance, 8.0);
    assert_eq!(config.camera.start_position.y, 5.0);
    assert!(config.camera.invert_horizontal);
    assert_eq!(config.locomotion.ground_layers, LayerMask(6));
    assert!(config.locomotion.ground_layers.contains_layer(2));
    assert!(config.locomotion.clamp_arrival);
    assert_eq!(config.scene.subject_tag, "Player");

    // The strict scene setting turns a missing subject into a setup error
    let result = SceneBuilder::new(config, TransformHandle::default()).build();
    assert!(matches!(result, Err(MotionError::MissingBinding { ref tag, .. }) if tag == "Player"));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    match MotionConfig::load(&path) {
        Err(MotionError::ConfigIo { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ConfigIo, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "[camera]\nmin_vertical_angle = 60.0\nmax_vertical_angle = 20.0\n").expect("write config");
    let err = MotionConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, MotionError::InvalidConfig { .. }));
}

#[test]
fn test_shipped_config_matches_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config/motion.toml");
    let config = MotionConfig::load(path).expect("shipped config loads");
    assert_eq!(config, MotionConfig::default());
}
