//! Play/pause state for the hero video.

/// The media element being driven.
///
/// Implementations fire and forget: a refused `play()` (autoplay policy,
/// missing source) is not reported back, so [`PlaybackToggle`] may end up
/// believing the video plays when it does not.
pub trait MediaControl {
    fn play(&self);
    fn pause(&self);
}

/// Intended playback state plus an optional auto-pause offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackToggle {
    playing: bool,
    pause_at: Option<f64>,
}

impl PlaybackToggle {
    pub fn new(autoplay: bool) -> Self {
        Self {
            playing: autoplay,
            pause_at: None,
        }
    }

    /// Pause automatically once playback reaches `seconds`.
    pub fn with_pause_at(mut self, seconds: f64) -> Self {
        self.pause_at = Some(seconds);
        self
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn pause_at(&self) -> Option<f64> {
        self.pause_at
    }

    /// Button label for the current state.
    pub fn label(&self) -> &'static str {
        if self.playing { "Pause" } else { "Play" }
    }

    /// Flip between playing and paused, driving `media` accordingly.
    /// Returns the new flag.
    pub fn toggle(&mut self, media: &impl MediaControl) -> bool {
        if self.playing {
            media.pause();
        } else {
            media.play();
        }
        self.playing = !self.playing;
        self.playing
    }

    /// Feed a `timeupdate` position. Returns `true` if this call paused.
    pub fn on_time_update(&mut self, current_time: f64, media: &impl MediaControl) -> bool {
        match self.pause_at {
            Some(limit) if self.playing && current_time >= limit => {
                media.pause();
                self.playing = false;
                true
            }
            _ => false,
        }
    }
}

impl Default for PlaybackToggle {
    fn default() -> Self {
        Self::new(true)
    }
}
