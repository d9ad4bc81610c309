//! Announcement and audio sink.
//!
//! The engine narrates everything it does through an [`AnnouncementSink`]:
//! a human-readable sentence for an assistive-technology live region, and
//! optionally a [`Cue`] naming a short tone to play. Sinks hold no game
//! state; they only render.
//!
//! ## Provided sinks
//!
//! - [`RecordingSink`]: keeps every announcement, for tests and for front
//!   ends that drain announcements once per frame
//! - [`TracingSink`]: forwards announcements to `tracing`
//! - [`NullSink`]: discards everything

mod cue;
pub(crate) mod messages;

pub use cue::{Cue, Tone};

use serde::{Deserialize, Serialize};
use tracing::info;

/// Receiver of engine announcements.
pub trait AnnouncementSink {
    /// Render `message`, and play `cue` if one is given.
    fn announce(&mut self, message: &str, cue: Option<Cue>);
}

impl<S: AnnouncementSink + ?Sized> AnnouncementSink for &mut S {
    fn announce(&mut self, message: &str, cue: Option<Cue>) {
        (**self).announce(message, cue);
    }
}

impl<S: AnnouncementSink + ?Sized> AnnouncementSink for Box<S> {
    fn announce(&mut self, message: &str, cue: Option<Cue>) {
        (**self).announce(message, cue);
    }
}

/// A recorded announcement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Sentence for the live region.
    pub message: String,
    /// Cue to play, if any.
    pub cue: Option<Cue>,
}

/// Sink that records every announcement in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    announcements: Vec<Announcement>,
}

impl RecordingSink {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All announcements so far.
    #[must_use]
    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    /// The most recent announcement.
    #[must_use]
    pub fn last(&self) -> Option<&Announcement> {
        self.announcements.last()
    }

    /// The most recent message text.
    #[must_use]
    pub fn last_message(&self) -> Option<&str> {
        self.last().map(|a| a.message.as_str())
    }

    /// Messages in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.announcements.iter().map(|a| a.message.as_str())
    }

    /// Cues in order, skipping announcements without one.
    pub fn cues(&self) -> impl Iterator<Item = Cue> + '_ {
        self.announcements.iter().filter_map(|a| a.cue)
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&mut self) -> Vec<Announcement> {
        std::mem::take(&mut self.announcements)
    }

    /// Number of recorded announcements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.announcements.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.announcements.is_empty()
    }
}

impl AnnouncementSink for RecordingSink {
    fn announce(&mut self, message: &str, cue: Option<Cue>) {
        self.announcements.push(Announcement {
            message: message.to_string(),
            cue,
        });
    }
}

/// Sink that logs announcements at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl AnnouncementSink for TracingSink {
    fn announce(&mut self, message: &str, cue: Option<Cue>) {
        match cue {
            Some(cue) => info!(target: "memory_pairs::announce", %cue, "{}", message),
            None => info!(target: "memory_pairs::announce", "{}", message),
        }
    }
}

/// Sink that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl AnnouncementSink for NullSink {
    fn announce(&mut self, _message: &str, _cue: Option<Cue>) {}
}
