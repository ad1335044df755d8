//! Word-search task: maps raw pointer coordinates onto the puzzle grid and
//! turns match outcomes into jingles and lesson events. The geometry lives
//! here; the selection/match rules live in `wordsearch::puzzle`.

use glam::Vec2;
use serde::Serialize;

use crate::api::lesson::LessonContext;
use crate::api::types::{event_kind, LessonEvent};
use crate::audio::tone::jingle;
use crate::content::{TargetWord, WordSearchSpec};
use crate::input::UiAction;
use crate::wordsearch::grid::{CellPos, FoundColor, LetterGrid};
use crate::wordsearch::puzzle::{MatchOutcome, PuzzleError, SelectionPhase, WordSearchPuzzle};

#[derive(Debug)]
pub struct WordSearchTask {
    puzzle: WordSearchPuzzle,
    /// Target words with display categories, same order as the puzzle's list.
    words: Vec<TargetWord>,
    /// World position of the grid's top-left corner.
    origin: Vec2,
    /// Cell edge length in world units.
    cell_size: f32,
    /// Last cell the pointer was over, to derive enter transitions from
    /// high-frequency move events.
    last_cell: Option<CellPos>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellView {
    pub letter: char,
    pub found: bool,
    pub found_color: Option<FoundColor>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetWordView {
    pub word: String,
    pub category: String,
    pub found: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordSearchView {
    pub rows: usize,
    pub cols: usize,
    pub origin: [f32; 2],
    pub cell_size: f32,
    pub cells: Vec<CellView>,
    pub words: Vec<TargetWordView>,
    pub found_count: usize,
    pub complete: bool,
}

impl WordSearchTask {
    pub fn new(spec: WordSearchSpec, origin: Vec2, cell_size: f32) -> Result<Self, PuzzleError> {
        let grid = LetterGrid::from_rows(&spec.rows)?;
        let targets = spec.words.iter().map(|w| w.word.clone()).collect();
        let puzzle = WordSearchPuzzle::new(grid, targets)?;
        Ok(Self {
            puzzle,
            words: spec.words,
            origin,
            cell_size,
            last_cell: None,
        })
    }

    fn cell_at(&self, x: f32, y: f32) -> Option<CellPos> {
        let local = Vec2::new(x, y) - self.origin;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let col = (local.x / self.cell_size) as usize;
        let row = (local.y / self.cell_size) as usize;
        let pos = CellPos::new(row, col);
        self.puzzle.grid().in_bounds(pos).then_some(pos)
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, _ctx: &mut LessonContext) {
        if let Some(cell) = self.cell_at(x, y) {
            self.puzzle.pointer_down(cell);
            self.last_cell = Some(cell);
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, _ctx: &mut LessonContext) {
        match self.cell_at(x, y) {
            Some(cell) => {
                if self.last_cell != Some(cell) {
                    self.puzzle.pointer_enter(cell);
                    self.last_cell = Some(cell);
                }
            }
            None => {
                // Leaving the grid aborts the gesture without a match check
                if self.puzzle.phase() == SelectionPhase::Selecting {
                    self.puzzle.cancel();
                }
                self.last_cell = None;
            }
        }
    }

    pub fn pointer_up(&mut self, _x: f32, _y: f32, ctx: &mut LessonContext) {
        let outcome = self.puzzle.pointer_up();
        self.last_cell = None;
        if let MatchOutcome::Found {
            word,
            puzzle_complete,
        } = outcome
        {
            ctx.emit(LessonEvent::new(event_kind::WORD_FOUND).with_a(word as f32));
            ctx.play_tone(jingle::success());
            log::info!("word search: found {:?}", self.words[word].word);
            if puzzle_complete {
                ctx.emit(LessonEvent::new(event_kind::PUZZLE_COMPLETED));
                ctx.emit(LessonEvent::new(event_kind::CELEBRATION));
                ctx.play_tone(jingle::search_winner());
            }
        }
    }

    pub fn pointer_cancel(&mut self, _ctx: &mut LessonContext) {
        self.puzzle.cancel();
        self.last_cell = None;
    }

    pub fn handle_ui(&mut self, action: UiAction, ctx: &mut LessonContext) {
        match action {
            UiAction::PlayItem(i) => {
                if let Some(target) = self.words.get(i) {
                    ctx.say(&target.word);
                }
            }
            UiAction::ResetTask => self.reset(),
            _ => {}
        }
    }

    /// The complete button only works once every word is found.
    pub fn can_complete(&self) -> bool {
        self.puzzle.is_complete()
    }

    pub fn reset(&mut self) {
        self.puzzle.reset();
        self.last_cell = None;
    }

    pub fn view(&self) -> WordSearchView {
        let grid = self.puzzle.grid();
        let mut cells: Vec<CellView> = grid
            .cells()
            .iter()
            .map(|c| CellView {
                letter: c.letter,
                found: c.found,
                found_color: c.found_color,
                highlighted: false,
            })
            .collect();
        for pos in self.puzzle.selection() {
            cells[pos.row * grid.cols() + pos.col].highlighted = true;
        }
        WordSearchView {
            rows: grid.rows(),
            cols: grid.cols(),
            origin: [self.origin.x, self.origin.y],
            cell_size: self.cell_size,
            cells,
            words: self
                .words
                .iter()
                .enumerate()
                .map(|(i, w)| TargetWordView {
                    word: w.word.clone(),
                    category: w.category.clone(),
                    found: self.puzzle.is_found(i),
                })
                .collect(),
            found_count: self.puzzle.found_words().len(),
            complete: self.puzzle.is_complete(),
        }
    }
}
