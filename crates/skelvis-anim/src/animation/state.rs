//! Playback state tracking for an animator

use super::clip::AnimationClip;

/// Clip currently assigned to an animator and its playback time
///
/// Idle while no clip is assigned; playing otherwise. Playback always loops.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationState<'a> {
    /// Clip being played, borrowed from the library that owns it
    clip: Option<&'a AnimationClip>,
    /// Current time within the clip (ticks), always in `[0, duration)`
    time: f32,
}

impl<'a> AnimationState<'a> {
    /// Create an idle state
    pub fn idle() -> Self {
        Self {
            clip: None,
            time: 0.0,
        }
    }

    /// Start playing `clip` from tick 0
    pub fn play(&mut self, clip: &'a AnimationClip) {
        self.clip = Some(clip);
        self.time = 0.0;
    }

    /// Drop the current clip and return to idle
    pub fn stop(&mut self) {
        *self = Self::idle();
    }

    pub fn clip(&self) -> Option<&'a AnimationClip> {
        self.clip
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Check if a clip is assigned
    pub fn is_active(&self) -> bool {
        self.clip.is_some()
    }

    /// Advance by `delta_seconds` of wall-clock time, wrapping at the clip end
    ///
    /// Does nothing while idle.
    pub fn advance(&mut self, delta_seconds: f32) {
        let Some(clip) = self.clip else {
            return;
        };

        let duration = clip.duration();
        let time = (self.time + clip.ticks_per_second() * delta_seconds).rem_euclid(duration);
        // rem_euclid can round up to exactly `duration` for tiny negatives
        self.time = if time < duration { time } else { 0.0 };
    }
}
