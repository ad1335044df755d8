//! Tone sequences for feedback jingles.
//!
//! A sequence is a flat list of (frequency, start offset, duration) notes plus
//! a gain hint. The shell renders it with a single oscillator/gain graph, so
//! the engine stays free of any Web Audio types.

use serde::Serialize;

/// One note in a tone sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToneNote {
    /// Frequency in Hz.
    pub freq: f32,
    /// Start offset from the beginning of the sequence, in seconds.
    pub at: f32,
    /// Duration in seconds.
    pub dur: f32,
}

/// An ordered run of notes with a peak gain hint.
/// The shell applies an exponential decay from `gain` over the total length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToneSequence {
    pub notes: Vec<ToneNote>,
    pub gain: f32,
}

impl ToneSequence {
    /// Build a sequence of evenly spaced notes of equal duration.
    pub fn evenly_spaced(freqs: &[f32], step: f32, gain: f32) -> Self {
        let notes = freqs
            .iter()
            .enumerate()
            .map(|(i, &freq)| ToneNote {
                freq,
                at: i as f32 * step,
                dur: step,
            })
            .collect();
        Self { notes, gain }
    }

    /// Total length in seconds (end of the last note).
    pub fn total_duration(&self) -> f32 {
        self.notes
            .iter()
            .map(|n| n.at + n.dur)
            .fold(0.0, f32::max)
    }
}

/// The feedback jingles used across the lesson tasks. Frequencies and
/// timings match the original hand-tuned oscillator calls.
pub mod jingle {
    use super::ToneSequence;

    /// Rising chirp played when a word-search word is found.
    pub fn success() -> ToneSequence {
        ToneSequence::evenly_spaced(&[800.0, 1000.0, 1200.0], 0.1, 0.3)
    }

    /// Softer chirp for task completion (friendlier on small speakers).
    pub fn soft_success() -> ToneSequence {
        ToneSequence::evenly_spaced(&[600.0, 800.0, 600.0], 0.1, 0.2)
    }

    /// C5-E5-G5 triad for a correct word/picture pair.
    pub fn match_success() -> ToneSequence {
        ToneSequence::evenly_spaced(&[523.25, 659.25, 783.99], 0.1, 0.3)
    }

    /// Up-and-back chirp for a correctly built sentence.
    pub fn sentence_success() -> ToneSequence {
        ToneSequence::evenly_spaced(&[800.0, 1200.0, 800.0], 0.1, 0.3)
    }

    /// Short ascending arpeggio after the last sentence template.
    pub fn arpeggio_winner() -> ToneSequence {
        ToneSequence::evenly_spaced(&[523.25, 659.25, 783.99, 1046.5], 0.15, 0.2)
    }

    /// Six-note run when the whole word-search grid is solved.
    pub fn search_winner() -> ToneSequence {
        ToneSequence::evenly_spaced(&[523.0, 659.0, 784.0, 1047.0, 1319.0, 1568.0], 0.15, 0.3)
    }

    /// Full celebration fanfare: scale up, back down, then a final flourish.
    pub fn celebration() -> ToneSequence {
        ToneSequence::evenly_spaced(
            &[
                523.25, 587.33, 659.25, 698.46, 783.99, 880.0, 987.77, 1046.5, //
                1046.5, 987.77, 880.0, 783.99, 698.46, 659.25, 587.33, 523.25, //
                523.25, 659.25, 783.99, 1046.5, 1318.51, 1567.98, 2093.0,
            ],
            0.12,
            0.5,
        )
    }
}
