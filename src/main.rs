/// Headless motion demo
/// Replays a scripted input sequence against a flat ground and logs the
/// character and camera poses.
///
/// Usage: motion_demo [config.toml]

use anyhow::{Context, Result};
use glam::{Vec2, Vec3};

use third_person_motion::{
    EffectQueue, GroundPlane, InputEvent, MotionConfig, SceneBuilder, TagDirectory, TransformHandle,
    Viewport,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: u64 = 600;

/// Input events delivered at the start of a given frame
fn scripted_events(frame: u64, viewport: &Viewport) -> Vec<InputEvent> {
    match frame {
        0 => vec![InputEvent::MoveAxis(Vec2::new(0.0, 1.0))],
        45 => vec![InputEvent::MoveAxis(Vec2::ZERO)],
        60 => vec![InputEvent::OrbitToggle(true)],
        61..=90 => vec![InputEvent::Look(Vec2::new(6.0, -2.0))],
        91 => vec![InputEvent::OrbitToggle(false), InputEvent::Zoom(240.0)],
        120 => vec![InputEvent::PrimaryClick {
            pressed: true,
            screen: viewport.center() + Vec2::new(180.0, -60.0),
        }],
        _ => Vec::new(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => MotionConfig::load(&path).with_context(|| format!("loading {}", path))?,
        None => MotionConfig::default(),
    };

    let character = TransformHandle::at(Vec3::ZERO);
    let mut directory = TagDirectory::new();
    directory.register(config.scene.subject_tag.clone(), character.clone());

    let mut scene = SceneBuilder::new(config, character)
        .discover_subject(&directory)
        .build()
        .context("wiring motion scene")?;

    let viewport = Viewport::default();
    let mut ground = GroundPlane::new(0.0, 0, viewport).with_grounded(true);
    let mut effects = EffectQueue::with_prefab("move_marker");

    for frame in 0..MAX_FRAMES {
        for event in scripted_events(frame, &viewport) {
            scene.push_event(event);
        }

        let report = scene.tick(FRAME_DT, &mut ground, &mut effects);

        for effect in effects.drain() {
            log::info!("Spawned '{}' at {:?}", effect.name, effect.position);
        }
        if report.frame % 30 == 0 {
            log::info!("{}", serde_json::to_string(&report)?);
        }
        if frame > 120 && report.mode == "idle" {
            log::info!("Arrived after {} frames: {}", report.frame, serde_json::to_string(&report)?);
            break;
        }
    }

    Ok(())
}
