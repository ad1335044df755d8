use glam::Vec2;
use thiserror::Error;

use skyword_engine::content::ContentError;
use skyword_engine::lesson::plan::{LessonPlan, TaskSlot};
use skyword_engine::lesson::LessonError;
use skyword_engine::wordsearch::puzzle::PuzzleError;
use skyword_engine::{
    DialogTask, DrillTask, FlashcardsTask, GalleryTask, InputQueue, Lesson, LessonConfig,
    LessonContext, LessonState, LessonView, ProgressSnapshot, SentenceTask, TaskState,
    WordMatchTask, WordSearchTask,
};

use crate::content::AirportContent;

const WORLD_W: f32 = 800.0;
const WORLD_H: f32 = 600.0;
/// Word-search layout: 12 cells of 40 world units, centered horizontally.
const GRID_ORIGIN: Vec2 = Vec2::new(160.0, 60.0);
const GRID_CELL: f32 = 40.0;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    #[error(transparent)]
    Plan(#[from] LessonError),
}

/// The airport/travel English lesson: nine tasks over the shared task types.
pub struct AirportLesson {
    state: LessonState,
}

impl AirportLesson {
    /// Build from the embedded content. The tables are validated by unit
    /// tests, so a failure here means a broken build, not a user error.
    pub fn new() -> Self {
        Self::from_embedded().expect("embedded lesson content is valid")
    }

    pub fn from_embedded() -> Result<Self, SetupError> {
        let content = AirportContent::load()?;

        let plan = LessonPlan::new(vec![
            TaskSlot::new(
                1,
                "Alphabet Practice",
                TaskState::Drill(DrillTask::new(content.alphabet.clone(), false)),
            ),
            TaskSlot::new(
                2,
                "Numbers Practice",
                TaskState::Drill(DrillTask::new(content.numbers.clone(), true)),
            ),
            TaskSlot::new(
                3,
                "Airport Vocabulary",
                TaskState::Gallery(GalleryTask::new(
                    content.categories.clone(),
                    content.vocab_gallery(),
                )),
            ),
            TaskSlot::new(
                4,
                "Vocabulary Flashcards",
                TaskState::Flashcards(FlashcardsTask::new(
                    content.categories.clone(),
                    content.vocabulary.clone(),
                )),
            ),
            TaskSlot::new(
                5,
                "Match Words & Pictures",
                TaskState::WordMatch(WordMatchTask::new(
                    content.categories.clone(),
                    content.match_items(),
                )),
            ),
            TaskSlot::new(
                6,
                "Word Search",
                TaskState::WordSearch(WordSearchTask::new(
                    content.word_search.clone(),
                    GRID_ORIGIN,
                    GRID_CELL,
                )?),
            ),
            TaskSlot::new(
                7,
                "Sentence Structure",
                TaskState::Gallery(GalleryTask::new(
                    content.pattern_categories.clone(),
                    content.patterns.clone(),
                )),
            ),
            TaskSlot::new(
                8,
                "Build Sentences",
                TaskState::Sentence(SentenceTask::new(content.sentences.clone())),
            ),
            TaskSlot::new(
                9,
                "Check-in Dialog",
                TaskState::Dialog(DialogTask::new(content.dialog.clone())),
            ),
        ])?;

        Ok(Self {
            state: LessonState::new("Airport English Lesson", plan),
        })
    }
}

impl Default for AirportLesson {
    fn default() -> Self {
        Self::new()
    }
}

impl Lesson for AirportLesson {
    fn config(&self) -> LessonConfig {
        LessonConfig {
            fixed_dt: 1.0 / 60.0,
            world_width: WORLD_W,
            world_height: WORLD_H,
            max_events: 32,
            seed: 0x5eed_cafe,
        }
    }

    fn init(&mut self, ctx: &mut LessonContext) {
        self.state.init(ctx);
    }

    fn update(&mut self, ctx: &mut LessonContext, input: &InputQueue, dt: f32) {
        self.state.update(ctx, input, dt);
    }

    fn view(&self) -> LessonView {
        self.state.view()
    }

    fn progress(&self) -> ProgressSnapshot {
        self.state.progress()
    }

    fn restore(&mut self, snapshot: ProgressSnapshot) {
        self.state.restore(snapshot);
    }
}
