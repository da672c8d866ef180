//! Playback control surface for game and editor code

use log::info;

use super::clip::AnimationClip;
use super::evaluator::Animator;
use crate::error::{AnimError, Result};
use crate::hierarchy::NodeHierarchy;
use crate::library::ClipLibrary;

/// Plays clips from a library by name, gated by a play/pause flag
#[derive(Debug, Clone)]
pub struct AnimationPlayer<'a> {
    library: &'a ClipLibrary,
    animator: Animator<'a>,
    playing: bool,
}

impl<'a> AnimationPlayer<'a> {
    /// Create a paused player with no clip selected
    pub fn new(library: &'a ClipLibrary, hierarchy: &NodeHierarchy) -> Self {
        Self {
            library,
            animator: Animator::with_bind_pose(hierarchy),
            playing: false,
        }
    }

    /// Switch to the named clip from tick 0 and start playing
    ///
    /// An unknown name leaves the current clip and flag untouched.
    pub fn play(&mut self, name: &str) -> Result<()> {
        let clip = self
            .library
            .get(name)
            .ok_or_else(|| AnimError::UnknownClip(name.to_string()))?;
        info!("Playing clip '{}'", name);
        self.animator.play(clip);
        self.playing = true;
        Ok(())
    }

    /// Names of every clip the player can play
    pub fn list_clip_names(&self) -> Vec<&'a str> {
        self.library.names().collect()
    }

    pub fn current_clip_name(&self) -> Option<&'a str> {
        self.animator.current_clip().map(AnimationClip::name)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Flip the play/pause flag, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Advance the animator by `delta_seconds` if playing
    pub fn tick(&mut self, delta_seconds: f32, hierarchy: &NodeHierarchy) {
        if self.playing {
            self.animator.update(delta_seconds, hierarchy);
        }
    }

    pub fn animator(&self) -> &Animator<'a> {
        &self.animator
    }
}
