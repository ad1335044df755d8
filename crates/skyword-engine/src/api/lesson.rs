use crate::api::types::LessonEvent;
use crate::audio::tone::ToneSequence;
use crate::audio::{AudioRequest, Voice};
use crate::core::rng::Rng;
use crate::input::queue::InputQueue;
use crate::lesson::progress::ProgressSnapshot;
use crate::lesson::state::LessonView;

/// Configuration for the runner, provided by the lesson.
#[derive(Debug, Clone)]
pub struct LessonConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in layout units. Pointer events arrive in this space.
    pub world_width: f32,
    /// World height in layout units.
    pub world_height: f32,
    /// Maximum number of lesson events per frame (default: 32).
    pub max_events: usize,
    /// Seed for the deterministic shuffles.
    pub seed: u64,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_events: 32,
            seed: 42,
        }
    }
}

/// The core contract every lesson must fulfill.
pub trait Lesson {
    /// Return runner configuration. Called once before init.
    fn config(&self) -> LessonConfig {
        LessonConfig::default()
    }

    /// Setup initial state. Called once after construction.
    fn init(&mut self, ctx: &mut LessonContext);

    /// The update tick. Route input, advance task timers, emit events.
    fn update(&mut self, ctx: &mut LessonContext, input: &InputQueue, dt: f32);

    /// Current render state for the shell.
    fn view(&self) -> LessonView;

    /// Current progress snapshot (persisted by the shell).
    fn progress(&self) -> ProgressSnapshot;

    /// Restore a snapshot the shell loaded from its store.
    fn restore(&mut self, snapshot: ProgressSnapshot);
}

/// Mutable access to the per-frame queues, passed to Lesson::init and
/// Lesson::update.
pub struct LessonContext {
    /// Audio requests for this frame, drained by the runner.
    pub audio: Vec<AudioRequest>,
    /// Lesson events for this frame, drained by the runner.
    pub events: Vec<LessonEvent>,
    /// Deterministic RNG for shuffles.
    pub rng: Rng,
}

impl LessonContext {
    pub fn new(seed: u64) -> Self {
        Self {
            audio: Vec::new(),
            events: Vec::new(),
            rng: Rng::new(seed),
        }
    }

    /// Emit a lesson event to be forwarded to the shell.
    pub fn emit(&mut self, event: LessonEvent) {
        self.events.push(event);
    }

    /// Queue a tone-sequence jingle.
    pub fn play_tone(&mut self, seq: ToneSequence) {
        self.audio.push(AudioRequest::Tone(seq));
    }

    /// Queue a speech request in the narrator voice.
    pub fn say(&mut self, text: &str) {
        self.say_with(text, Voice::Narrator);
    }

    /// Queue a speech request with an explicit voice register.
    pub fn say_with(&mut self, text: &str, voice: Voice) {
        self.audio.push(AudioRequest::Speech {
            text: text.to_owned(),
            voice,
        });
    }

    /// Queue playback of a pre-recorded clip.
    pub fn play_clip(&mut self, path: &str) {
        if !path.is_empty() {
            self.audio.push(AudioRequest::Clip {
                path: path.to_owned(),
            });
        }
    }

    /// Clear per-frame transient data (audio requests, events).
    pub fn clear_frame_data(&mut self) {
        self.audio.clear();
        self.events.clear();
    }
}
