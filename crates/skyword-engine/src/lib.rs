pub mod api;
pub mod audio;
pub mod content;
pub mod core;
pub mod input;
pub mod lesson;
pub mod tasks;
pub mod wordsearch;

// Re-export key types at crate root for convenience
pub use api::lesson::{Lesson, LessonConfig, LessonContext};
pub use api::types::{event_kind, LessonEvent, TaskId};
pub use audio::tone::{jingle, ToneNote, ToneSequence};
pub use audio::{AudioRequest, Voice};
pub use content::{
    ContentError, DialogLine, DialogScript, DrillCard, DrillSection, GalleryEntry, MatchItem,
    SentenceTemplate, Speaker, TargetWord, VocabCategory, VocabEntry, WordSearchSpec,
};
pub use core::rng::Rng;
pub use core::time::FixedTimestep;
pub use input::queue::{InputEvent, InputQueue};
pub use input::UiAction;
pub use lesson::progress::ProgressSnapshot;
pub use lesson::state::{LessonState, LessonView, TaskSummary};
pub use lesson::plan::{LessonPlan, TaskSlot};
pub use lesson::LessonError;
pub use tasks::{
    DialogTask, DrillTask, FlashcardsTask, GalleryTask, SentenceTask, TaskState, TaskView,
    WordMatchTask, WordSearchTask,
};
pub use wordsearch::grid::{CellPos, CellState, FoundColor, LetterGrid};
pub use wordsearch::path::line_path;
pub use wordsearch::puzzle::{MatchOutcome, PuzzleError, SelectionPhase, WordSearchPuzzle};
