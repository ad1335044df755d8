//! Interactive task types. Each task is a plain struct with its own state
//! and view model; `TaskState` is the dispatch point the lesson shell talks
//! to. Only the word-search task consumes raw pointer coordinates; everything
//! else is driven by decoded UI actions and key presses.

pub mod dialog;
pub mod drill;
pub mod flashcards;
pub mod gallery;
pub mod sentence;
pub mod word_match;
pub mod word_search;

use serde::Serialize;

use crate::api::lesson::LessonContext;
use crate::input::UiAction;

pub use dialog::{DialogTask, DialogView};
pub use drill::{DrillTask, DrillView};
pub use flashcards::{FlashcardsTask, FlashcardsView};
pub use gallery::{GalleryTask, GalleryView};
pub use sentence::{SentenceTask, SentenceView};
pub use word_match::{WordMatchTask, WordMatchView};
pub use word_search::{WordSearchTask, WordSearchView};

/// One task slot's state.
#[derive(Debug)]
pub enum TaskState {
    Drill(DrillTask),
    Gallery(GalleryTask),
    Flashcards(FlashcardsTask),
    WordMatch(WordMatchTask),
    WordSearch(WordSearchTask),
    Sentence(SentenceTask),
    Dialog(DialogTask),
}

/// Serializable render state of the current task, tagged for the shell.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskView {
    Drill(DrillView),
    Gallery(GalleryView),
    Flashcards(FlashcardsView),
    WordMatch(WordMatchView),
    WordSearch(WordSearchView),
    Sentence(SentenceView),
    Dialog(DialogView),
}

impl TaskState {
    /// One-time setup needing the lesson RNG (deterministic shuffles).
    pub fn init(&mut self, ctx: &mut LessonContext) {
        match self {
            TaskState::WordMatch(task) => task.init(ctx),
            TaskState::Sentence(task) => task.init(ctx),
            _ => {}
        }
    }

    pub fn handle_ui(&mut self, action: UiAction, ctx: &mut LessonContext) {
        match self {
            TaskState::Drill(task) => task.handle_ui(action, ctx),
            TaskState::Gallery(task) => task.handle_ui(action, ctx),
            TaskState::Flashcards(task) => task.handle_ui(action, ctx),
            TaskState::WordMatch(task) => task.handle_ui(action, ctx),
            TaskState::WordSearch(task) => task.handle_ui(action, ctx),
            TaskState::Sentence(task) => task.handle_ui(action, ctx),
            TaskState::Dialog(task) => task.handle_ui(action, ctx),
        }
    }

    pub fn handle_key(&mut self, key_code: u32, ctx: &mut LessonContext) {
        if let TaskState::Drill(task) = self {
            task.handle_key(key_code, ctx);
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, ctx: &mut LessonContext) {
        if let TaskState::WordSearch(task) = self {
            task.pointer_down(x, y, ctx);
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, ctx: &mut LessonContext) {
        if let TaskState::WordSearch(task) = self {
            task.pointer_move(x, y, ctx);
        }
    }

    pub fn pointer_up(&mut self, x: f32, y: f32, ctx: &mut LessonContext) {
        if let TaskState::WordSearch(task) = self {
            task.pointer_up(x, y, ctx);
        }
    }

    pub fn pointer_cancel(&mut self, ctx: &mut LessonContext) {
        if let TaskState::WordSearch(task) = self {
            task.pointer_cancel(ctx);
        }
    }

    /// Advance task-owned timers (pair-check delays, celebration delays).
    pub fn tick(&mut self, dt: f32, ctx: &mut LessonContext) {
        match self {
            TaskState::WordMatch(task) => task.tick(dt, ctx),
            TaskState::Sentence(task) => task.tick(dt, ctx),
            _ => {}
        }
    }

    /// Whether the explicit "complete" button may succeed right now.
    pub fn can_complete(&self) -> bool {
        match self {
            TaskState::Drill(task) => task.can_complete(),
            TaskState::WordSearch(task) => task.can_complete(),
            TaskState::Sentence(task) => task.can_complete(),
            _ => true,
        }
    }

    /// Return the task to its initial interactive state.
    pub fn reset(&mut self) {
        match self {
            TaskState::Drill(task) => task.reset(),
            TaskState::Gallery(task) => task.reset(),
            TaskState::Flashcards(task) => task.reset(),
            TaskState::WordMatch(task) => task.reset(),
            TaskState::WordSearch(task) => task.reset(),
            TaskState::Sentence(task) => task.reset(),
            TaskState::Dialog(task) => task.reset(),
        }
    }

    pub fn view(&self) -> TaskView {
        match self {
            TaskState::Drill(task) => TaskView::Drill(task.view()),
            TaskState::Gallery(task) => TaskView::Gallery(task.view()),
            TaskState::Flashcards(task) => TaskView::Flashcards(task.view()),
            TaskState::WordMatch(task) => TaskView::WordMatch(task.view()),
            TaskState::WordSearch(task) => TaskView::WordSearch(task.view()),
            TaskState::Sentence(task) => TaskView::Sentence(task.view()),
            TaskState::Dialog(task) => TaskView::Dialog(task.view()),
        }
    }
}
