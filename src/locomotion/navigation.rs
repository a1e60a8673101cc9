/// Click-to-navigate
///
/// A press on the ground becomes a navigation target. Ground resolution and
/// the visual cue belong to collaborators; neither can block the transition.

use glam::{Vec2, Vec3};

use super::{Locomotor, MovementMode};
use crate::environment::{EffectSpawner, GroundProbe};
use crate::transform::Transform;

impl Locomotor {
    /// Start walking toward an already resolved ground point and play a cue there.
    /// Returns false (and changes nothing) when no point was resolved.
    pub fn navigate_to(&mut self, point: Option<Vec3>, effects: &mut dyn EffectSpawner) -> bool {
        let Some(target) = point else {
            log::debug!("[Locomotor] Click did not resolve to ground; ignoring");
            return false;
        };

        log::debug!("[Locomotor] {:?} -> TargetSeeking {:?}", self.mode, target);
        self.mode = MovementMode::TargetSeeking { target };

        if let Err(e) = effects.spawn(target) {
            log::warn!("[Locomotor] Move effect not spawned at {:?}: {}", target, e);
        }
        true
    }

    /// Resolve a screen-space click through `probe` against the configured
    /// ground layers, then navigate to the hit point.
    pub fn handle_click(
        &mut self,
        screen: Vec2,
        view: &Transform,
        probe: &dyn GroundProbe,
        effects: &mut dyn EffectSpawner,
    ) -> bool {
        let point = probe.resolve_screen_point(view, screen, self.settings.ground_layers);
        self.navigate_to(point, effects)
    }
}
