pub mod tone;

use serde::Serialize;

use self::tone::ToneSequence;

/// Which speech-synthesis register the shell should use.
/// The check-in dialog distinguishes the agent's and the passenger's voices;
/// everything else reads in the default narrator voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Voice {
    Narrator,
    Agent,
    Passenger,
}

/// One audio request emitted by the engine during a frame.
/// The engine never touches a platform audio API; the shell drains these and
/// drives the Web Audio / SpeechSynthesis / media-element players.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AudioRequest {
    /// Play a synthesized tone sequence (feedback jingles).
    Tone(ToneSequence),
    /// Speak a text with the given voice register.
    Speech { text: String, voice: Voice },
    /// Play a pre-recorded pronunciation clip by asset path.
    Clip { path: String },
}
