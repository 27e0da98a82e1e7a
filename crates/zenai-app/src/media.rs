//! Hover-to-play state for the showreel videos.
//!
//! Reels start muted and paused. Hovering a card unmutes and plays it,
//! leaving pauses and mutes it again. The deck only records intent as
//! [`MediaCommand`]s; the host applies them to the actual video elements and
//! reports failures back.

use zenai_content::Reel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Muted and paused.
    #[default]
    Idle,
    Playing,
    /// The video failed to load; a placeholder is shown instead.
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaCommand {
    /// Unmute, then play.
    Play { reel: usize },
    /// Pause, then mute.
    Pause { reel: usize },
}

#[derive(Clone, Debug)]
struct ReelSlot {
    reel: Reel,
    state: PlaybackState,
}

#[derive(Clone, Debug, Default)]
pub struct ReelDeck {
    slots: Vec<ReelSlot>,
    commands: Vec<MediaCommand>,
}

impl ReelDeck {
    pub fn new(reels: &[Reel]) -> Self {
        Self {
            slots: reels
                .iter()
                .map(|reel| ReelSlot {
                    reel: *reel,
                    state: PlaybackState::Idle,
                })
                .collect(),
            commands: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn reel(&self, index: usize) -> Option<&Reel> {
        self.slots.get(index).map(|slot| &slot.reel)
    }

    pub fn state(&self, index: usize) -> Option<PlaybackState> {
        self.slots.get(index).map(|slot| slot.state)
    }

    pub fn is_muted(&self, index: usize) -> bool {
        self.state(index) != Some(PlaybackState::Playing)
    }

    pub fn shows_placeholder(&self, index: usize) -> bool {
        self.state(index) == Some(PlaybackState::Failed)
    }

    pub fn hover_enter(&mut self, index: usize) {
        let Some(slot) = self.slots.get_mut(index) else {
            log::trace!("hover on unknown reel {index}");
            return;
        };
        if slot.state == PlaybackState::Idle {
            slot.state = PlaybackState::Playing;
            self.commands.push(MediaCommand::Play { reel: index });
        }
    }

    pub fn hover_leave(&mut self, index: usize) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        if slot.state == PlaybackState::Playing {
            slot.state = PlaybackState::Idle;
            self.commands.push(MediaCommand::Pause { reel: index });
        }
    }

    /// `play()` was rejected (autoplay policy, decode error). The reel goes
    /// back to idle and can be retried on the next hover.
    pub fn play_rejected(&mut self, index: usize, reason: &str) {
        if let Some(slot) = self.slots.get_mut(index) {
            log::warn!("reel {} ({}) could not play: {reason}", slot.reel.id, slot.reel.src);
            if slot.state == PlaybackState::Playing {
                slot.state = PlaybackState::Idle;
            }
        }
    }

    /// The source failed to load. Terminal for this reel.
    pub fn load_failed(&mut self, index: usize, reason: &str) {
        if let Some(slot) = self.slots.get_mut(index) {
            log::warn!("reel {} failed to load {}: {reason}", slot.reel.id, slot.reel.src);
            slot.state = PlaybackState::Failed;
        }
    }

    pub fn take_commands(&mut self) -> Vec<MediaCommand> {
        std::mem::take(&mut self.commands)
    }
}

#[cfg(test)]
#[path = "tests/media_tests.rs"]
mod tests;
