//! Audio cues and their tone sequences.
//!
//! A cue is a symbolic name; the sink decides how to render it. Each cue
//! also carries a short sine-tone melody so a sink with an audio backend
//! can synthesize it without its own table.

use serde::{Deserialize, Serialize};

/// One sine tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tone {
    /// Pitch in hertz.
    pub frequency_hz: u32,
    /// Length in milliseconds.
    pub duration_ms: u32,
}

const fn tone(frequency_hz: u32, duration_ms: u32) -> Tone {
    Tone {
        frequency_hz,
        duration_ms,
    }
}

const CARD_FLIP: &[Tone] = &[tone(400, 100)];
const MATCH: &[Tone] = &[tone(600, 100), tone(800, 200)];
const NO_MATCH: &[Tone] = &[tone(300, 100), tone(200, 200)];
const VICTORY: &[Tone] = &[tone(400, 100), tone(600, 100), tone(800, 200)];
const SELECT: &[Tone] = &[tone(500, 50)];
const MOVE: &[Tone] = &[tone(350, 50)];

/// Symbolic audio cue attached to an announcement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cue {
    /// A card was turned face-up.
    CardFlip,
    /// A pair was found.
    Match,
    /// Two revealed cards did not pair.
    NoMatch,
    /// All pairs found.
    Victory,
    /// A menu choice was made.
    Select,
    /// The cursor moved.
    Move,
}

impl Cue {
    /// Every cue.
    pub const ALL: [Cue; 6] = [
        Cue::CardFlip,
        Cue::Match,
        Cue::NoMatch,
        Cue::Victory,
        Cue::Select,
        Cue::Move,
    ];

    /// Stable name of the cue.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Cue::CardFlip => "cardFlip",
            Cue::Match => "match",
            Cue::NoMatch => "noMatch",
            Cue::Victory => "victory",
            Cue::Select => "select",
            Cue::Move => "move",
        }
    }

    /// Tones played in sequence for this cue.
    ///
    /// Rising melodies are good news, falling ones are not.
    #[must_use]
    pub const fn tones(self) -> &'static [Tone] {
        match self {
            Cue::CardFlip => CARD_FLIP,
            Cue::Match => MATCH,
            Cue::NoMatch => NO_MATCH,
            Cue::Victory => VICTORY,
            Cue::Select => SELECT,
            Cue::Move => MOVE,
        }
    }

    /// Total playback length of the cue in milliseconds.
    #[must_use]
    pub fn duration_ms(self) -> u32 {
        self.tones().iter().map(|t| t.duration_ms).sum()
    }
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
