/// Effect spawning reference collaborator

use glam::Vec3;

use super::EffectSpawner;
use crate::error::EffectError;

/// One spawned visual cue
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnedEffect {
    pub name: String,
    pub position: Vec3,
}

/// Records spawn requests for the host to render.
/// With no prefab assigned every request fails with `EffectError::MissingAsset`.
#[derive(Debug, Default)]
pub struct EffectQueue {
    prefab: Option<String>,
    spawned: Vec<SpawnedEffect>,
}

impl EffectQueue {
    pub fn new(prefab: Option<String>) -> Self {
        Self {
            prefab,
            spawned: Vec::new(),
        }
    }

    pub fn with_prefab(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()))
    }

    pub fn spawned(&self) -> &[SpawnedEffect] {
        &self.spawned
    }

    /// Hand the pending effects to the host
    pub fn drain(&mut self) -> Vec<SpawnedEffect> {
        std::mem::take(&mut self.spawned)
    }
}

impl EffectSpawner for EffectQueue {
    fn spawn(&mut self, point: Vec3) -> Result<(), EffectError> {
        let name = self.prefab.clone().ok_or(EffectError::MissingAsset)?;
        self.spawned.push(SpawnedEffect {
            name,
            position: point,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_records_effect() {
        let mut queue = EffectQueue::with_prefab("move_marker");
        queue.spawn(Vec3::new(1.0, 0.0, 2.0)).expect("prefab assigned");
        assert_eq!(queue.spawned().len(), 1);
        assert_eq!(queue.spawned()[0].name, "move_marker");

        let drained = queue.drain();
        assert_eq!(drained[0].position, Vec3::new(1.0, 0.0, 2.0));
        assert!(queue.spawned().is_empty());
    }

    #[test]
    fn test_missing_prefab_fails() {
        let mut queue = EffectQueue::default();
        assert_eq!(queue.spawn(Vec3::ZERO), Err(EffectError::MissingAsset));
        assert!(queue.spawned().is_empty());
    }
}
