//! Clip storage for a loaded asset
//!
//! The library owns every clip built for one hierarchy. Animators and players
//! only borrow from it, so it must outlive them.

use log::{debug, warn};

use crate::animation::AnimationClip;

/// All animation clips of an asset, in import order
#[derive(Debug, Clone, Default)]
pub struct ClipLibrary {
    clips: Vec<AnimationClip>,
}

impl ClipLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clip; a clip whose name is already taken is discarded
    ///
    /// Returns whether the clip was added.
    pub fn insert(&mut self, clip: AnimationClip) -> bool {
        if self.get(clip.name()).is_some() {
            warn!("Duplicate clip name '{}', keeping the first", clip.name());
            return false;
        }
        debug!("Registered clip '{}'", clip.name());
        self.clips.push(clip);
        true
    }

    /// Look up a clip by name
    pub fn get(&self, name: &str) -> Option<&AnimationClip> {
        self.clips.iter().find(|c| c.name() == name)
    }

    /// Names of all clips in import order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.clips.iter().map(AnimationClip::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimationClip> {
        self.clips.iter()
    }

    /// First clip in import order, if any
    pub fn first(&self) -> Option<&AnimationClip> {
        self.clips.first()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

impl FromIterator<AnimationClip> for ClipLibrary {
    fn from_iter<T: IntoIterator<Item = AnimationClip>>(iter: T) -> Self {
        let mut library = Self::new();
        for clip in iter {
            library.insert(clip);
        }
        library
    }
}
