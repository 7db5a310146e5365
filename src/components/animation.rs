//! Frame animation data and playback state.
//!
//! An [`Animation`] is an ordered list of atlas regions shown one after the
//! other with a fixed delay. It is immutable once shared (`Arc<Animation>`) and
//! can be played by any number of [`AnimationPlayer`]s at once.
//!
//! The player accumulates elapsed time and steps to the next frame each time
//! the accumulator reaches the delay, subtracting the delay so leftover time
//! carries into the next frame. Playback loops forever.
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;
use crate::resources::atlas::RegionId;

const DEFAULT_DELAY: Duration = Duration::from_millis(100);
const NANOS_PER_SEC: u128 = 1_000_000_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    /// Regions in playback order.
    pub frames: Vec<RegionId>,
    /// Time each frame stays on screen.
    pub delay: Duration,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            delay: DEFAULT_DELAY,
        }
    }
}

impl Animation {
    pub fn new(frames: Vec<RegionId>, delay: Duration) -> Self {
        Self { frames, delay }
    }

    pub fn with_frame(mut self, region: RegionId) -> Self {
        self.frames.push(region);
        self
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Check that the animation can be played back.
    pub fn validate(&self) -> Result<(), AnimationError> {
        if self.frames.is_empty() {
            return Err(AnimationError::NoFrames);
        }
        if self.delay.is_zero() {
            return Err(AnimationError::NonPositiveDelay);
        }
        Ok(())
    }
}

/// Looping playback of one [`Animation`].
///
/// Invariant: `frame_index < animation.frame_count()` and `elapsed < delay`
/// after every [`advance`](Self::advance).
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    animation: Arc<Animation>,
    frame_index: usize,
    elapsed: Duration,
}

impl AnimationPlayer {
    /// Start playing `animation` from its first frame.
    pub fn new(animation: Arc<Animation>) -> Result<Self, AnimationError> {
        animation.validate()?;
        Ok(Self {
            animation,
            frame_index: 0,
            elapsed: Duration::ZERO,
        })
    }

    /// Swap the animation being played.
    ///
    /// Playback always restarts at frame 0 with an empty accumulator, even if
    /// `animation` is the one already playing. On error nothing changes.
    pub fn set_animation(&mut self, animation: Arc<Animation>) -> Result<(), AnimationError> {
        animation.validate()?;
        self.animation = animation;
        self.frame_index = 0;
        self.elapsed = Duration::ZERO;
        Ok(())
    }

    /// Accumulate `delta` and step forward once per full delay it covers.
    ///
    /// Runs in constant time whatever the ratio of `delta` to the delay. The
    /// accumulator saturates at `Duration::MAX`.
    pub fn advance(&mut self, delta: Duration) {
        let delay = self.animation.delay.as_nanos();
        let count = self.animation.frame_count() as u128;
        let total = self.elapsed.saturating_add(delta).as_nanos();

        // delay > 0 and count > 0 are checked on bind
        let steps = total / delay;
        let offset = (self.frame_index as u128 + steps % count) % count;
        self.frame_index = offset as usize;

        // remainder <= total, so it fits back into a Duration
        let remainder = total % delay;
        self.elapsed = Duration::new(
            (remainder / NANOS_PER_SEC) as u64,
            (remainder % NANOS_PER_SEC) as u32,
        );
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Unconsumed time towards the next frame.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn current_region(&self) -> RegionId {
        self.animation.frames[self.frame_index]
    }

    pub fn animation(&self) -> &Arc<Animation> {
        &self.animation
    }
}
