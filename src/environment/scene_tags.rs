/// Tag registry used once at startup to find default bindings

use std::collections::HashMap;

use super::SceneDirectory;
use crate::transform::TransformHandle;

#[derive(Debug, Default, Clone)]
pub struct TagDirectory {
    entries: HashMap<String, TransformHandle>,
}

impl TagDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag an entity, replacing any previous holder of the tag
    pub fn register(&mut self, tag: impl Into<String>, handle: TransformHandle) {
        let tag = tag.into();
        if self.entries.insert(tag.clone(), handle).is_some() {
            log::debug!("[TagDirectory] Tag '{}' reassigned", tag);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SceneDirectory for TagDirectory {
    fn find_tagged(&self, tag: &str) -> Option<TransformHandle> {
        self.entries.get(tag).cloned()
    }
}
