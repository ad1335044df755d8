use thiserror::Error;

use crate::wordsearch::grid::{CellPos, FoundColor, GridError, LetterGrid};
use crate::wordsearch::path::line_path;

/// Gesture phase. One continuous press-drag-release selects a candidate run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Idle,
    Selecting,
}

/// Result of releasing the pointer over the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// No gesture was in progress.
    Ignored,
    /// The selected letters match no target in either direction.
    Miss,
    /// The matched word was found earlier; nothing changes.
    AlreadyFound,
    /// The selection reads as one target forward and a different target
    /// backward. Rejected so a single drag never claims two words.
    Ambiguous,
    /// A target was found. `puzzle_complete` is true exactly once, on the
    /// gesture that finds the last word.
    Found {
        word: usize,
        puzzle_complete: bool,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("target word list must not be empty")]
    EmptyWordList,
    #[error("target word must not be empty")]
    EmptyWord,
    #[error("duplicate target word {0:?}")]
    DuplicateWord(String),
    #[error("target word {0:?} must be uppercase ASCII letters")]
    NotUppercase(String),
    #[error("target word {0:?} cannot be read anywhere in the grid")]
    WordNotInGrid(String),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// The word-search puzzle: a letter grid, a fixed target list, and the
/// selection gesture state. All mutation happens through the pointer
/// events and `reset`; misses and invalid gestures are silent no-ops.
#[derive(Debug)]
pub struct WordSearchPuzzle {
    grid: LetterGrid,
    targets: Vec<String>,
    /// Indexes into `targets`, in the order the words were found.
    found: Vec<usize>,
    phase: SelectionPhase,
    anchor: Option<CellPos>,
    selection: Vec<CellPos>,
    complete_fired: bool,
}

impl WordSearchPuzzle {
    /// Build a puzzle. Malformed target lists are rejected here so gameplay
    /// never has to deal with them.
    pub fn new(grid: LetterGrid, targets: Vec<String>) -> Result<Self, PuzzleError> {
        if targets.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }
        for (i, word) in targets.iter().enumerate() {
            if word.is_empty() {
                return Err(PuzzleError::EmptyWord);
            }
            if !word.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(PuzzleError::NotUppercase(word.clone()));
            }
            if targets[..i].contains(word) {
                return Err(PuzzleError::DuplicateWord(word.clone()));
            }
            if !grid.contains_word(word) {
                return Err(PuzzleError::WordNotInGrid(word.clone()));
            }
        }
        Ok(Self {
            grid,
            targets,
            found: Vec::new(),
            phase: SelectionPhase::Idle,
            anchor: None,
            selection: Vec::new(),
            complete_fired: false,
        })
    }

    /// Pointer pressed on a cell: anchor a new selection.
    pub fn pointer_down(&mut self, pos: CellPos) {
        if !self.grid.in_bounds(pos) {
            return;
        }
        self.phase = SelectionPhase::Selecting;
        self.anchor = Some(pos);
        self.selection.clear();
        self.selection.push(pos);
    }

    /// Pointer dragged onto a cell: extend the selection along the line from
    /// the anchor. Off-line cells leave the previous path in place, which
    /// absorbs brief pointer jitter mid-drag.
    pub fn pointer_enter(&mut self, pos: CellPos) {
        if self.phase != SelectionPhase::Selecting {
            return;
        }
        let Some(anchor) = self.anchor else { return };
        if let Some(path) = line_path(anchor, pos, self.grid.rows(), self.grid.cols()) {
            self.selection = path;
        }
    }

    /// Pointer released: check the selection against the target list, then
    /// clear the gesture regardless of the outcome.
    pub fn pointer_up(&mut self) -> MatchOutcome {
        if self.phase != SelectionPhase::Selecting {
            return MatchOutcome::Ignored;
        }
        let outcome = self.check_selection();
        self.clear_gesture();
        outcome
    }

    /// Pointer left the grid or the touch was interrupted: abort the gesture
    /// without a match check.
    pub fn cancel(&mut self) {
        self.clear_gesture();
    }

    /// Fresh attempt at the same puzzle: clears found-state and the current
    /// gesture, keeps grid letters and targets.
    pub fn reset(&mut self) {
        self.grid.clear_found();
        self.found.clear();
        self.complete_fired = false;
        self.clear_gesture();
    }

    fn clear_gesture(&mut self) {
        self.phase = SelectionPhase::Idle;
        self.anchor = None;
        self.selection.clear();
    }

    fn check_selection(&mut self) -> MatchOutcome {
        if self.selection.is_empty() {
            return MatchOutcome::Ignored;
        }
        let candidate = self.grid.word_along(&self.selection);
        let reversed: String = candidate.chars().rev().collect();

        let forward = self.targets.iter().position(|w| *w == candidate);
        let backward = self.targets.iter().position(|w| *w == reversed);

        let word = match (forward, backward) {
            (None, None) => return MatchOutcome::Miss,
            (Some(f), Some(b)) if f != b => return MatchOutcome::Ambiguous,
            (Some(f), _) => f,
            (None, Some(b)) => b,
        };

        if self.found.contains(&word) {
            return MatchOutcome::AlreadyFound;
        }

        // Color is taken from the pre-insertion count: first word gets
        // palette[0], and so on round-robin.
        let color = FoundColor::for_index(self.found.len());
        for &pos in &self.selection {
            self.grid.mark_found(pos, color);
        }
        self.found.push(word);

        let puzzle_complete = self.found.len() == self.targets.len() && !self.complete_fired;
        if puzzle_complete {
            self.complete_fired = true;
        }
        MatchOutcome::Found {
            word,
            puzzle_complete,
        }
    }

    // -- Queries for the task layer / shell --

    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// The current selection path, anchor first.
    pub fn selection(&self) -> &[CellPos] {
        &self.selection
    }

    pub fn is_selected(&self, pos: CellPos) -> bool {
        self.selection.contains(&pos)
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Indexes of found targets, insertion-ordered.
    pub fn found_words(&self) -> &[usize] {
        &self.found
    }

    pub fn is_found(&self, word: usize) -> bool {
        self.found.contains(&word)
    }

    pub fn is_complete(&self) -> bool {
        self.found.len() == self.targets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The airport puzzle grid: GATE across row 0, AIRLINE across row 5.
    fn airport_grid() -> LetterGrid {
        LetterGrid::from_rows(&[
            "GATEWZPNKJHV",
            "KBCDESFGHIFK",
            "PLISTUVWXYLA",
            "QMRWYZABCDIT",
            "LNSXJKLMNOGI",
            "UAIRLINEPQHC",
            "GOTUVTWXYZTK",
            "GPUEFIGHIJKE",
            "AQVBOARDINGT",
            "GRWXYCZABCDL",
            "ESXYZKABCDEM",
            "FTYZAEBCDEFN",
        ])
        .unwrap()
    }

    fn airport_targets() -> Vec<String> {
        ["AIRLINE", "BOARDING", "FLIGHT", "GATE", "LUGGAGE", "TICKET"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn airport_puzzle() -> WordSearchPuzzle {
        WordSearchPuzzle::new(airport_grid(), airport_targets()).unwrap()
    }

    fn drag(puzzle: &mut WordSearchPuzzle, from: (usize, usize), to: (usize, usize)) -> MatchOutcome {
        puzzle.pointer_down(CellPos::new(from.0, from.1));
        puzzle.pointer_enter(CellPos::new(to.0, to.1));
        puzzle.pointer_up()
    }

    #[test]
    fn construction_validates_targets() {
        let grid = airport_grid;
        assert_eq!(
            WordSearchPuzzle::new(grid(), vec![]).unwrap_err(),
            PuzzleError::EmptyWordList
        );
        assert_eq!(
            WordSearchPuzzle::new(grid(), vec!["GATE".into(), "GATE".into()]).unwrap_err(),
            PuzzleError::DuplicateWord("GATE".into())
        );
        assert_eq!(
            WordSearchPuzzle::new(grid(), vec!["gate".into()]).unwrap_err(),
            PuzzleError::NotUppercase("gate".into())
        );
        assert_eq!(
            WordSearchPuzzle::new(grid(), vec!["RUNWAY".into()]).unwrap_err(),
            PuzzleError::WordNotInGrid("RUNWAY".into())
        );
    }

    #[test]
    fn drag_finds_gate_in_row_zero() {
        let mut puzzle = airport_puzzle();
        let outcome = drag(&mut puzzle, (0, 0), (0, 3));
        assert!(matches!(outcome, MatchOutcome::Found { word: 3, .. }));
        assert_eq!(puzzle.found_words(), &[3]);
        for col in 0..4 {
            let cell = puzzle.grid().cell(CellPos::new(0, col));
            assert!(cell.found);
            assert_eq!(cell.found_color, Some(FoundColor::Red));
        }
        // Neighbor cell untouched
        assert!(!puzzle.grid().cell(CellPos::new(0, 4)).found);
    }

    #[test]
    fn airline_in_row_five_gets_first_palette_color() {
        let mut puzzle = airport_puzzle();
        let outcome = drag(&mut puzzle, (5, 1), (5, 7));
        assert!(matches!(outcome, MatchOutcome::Found { word: 0, .. }));
        for col in 1..=7 {
            let cell = puzzle.grid().cell(CellPos::new(5, col));
            assert!(cell.found);
            assert_eq!(cell.found_color, Some(FoundColor::Red));
        }
        assert!(!puzzle.grid().cell(CellPos::new(5, 0)).found);
        assert!(!puzzle.grid().cell(CellPos::new(5, 8)).found);
    }

    #[test]
    fn second_word_gets_second_palette_color() {
        let mut puzzle = airport_puzzle();
        drag(&mut puzzle, (0, 0), (0, 3));
        drag(&mut puzzle, (5, 1), (5, 7));
        let cell = puzzle.grid().cell(CellPos::new(5, 4));
        assert_eq!(cell.found_color, Some(FoundColor::Green));
    }

    #[test]
    fn reversed_drag_matches() {
        let mut puzzle = airport_puzzle();
        let outcome = drag(&mut puzzle, (0, 3), (0, 0));
        assert!(matches!(outcome, MatchOutcome::Found { word: 3, .. }));
    }

    #[test]
    fn repeating_a_drag_is_idempotent() {
        let mut puzzle = airport_puzzle();
        drag(&mut puzzle, (0, 0), (0, 3));
        let outcome = drag(&mut puzzle, (0, 0), (0, 3));
        assert_eq!(outcome, MatchOutcome::AlreadyFound);
        assert_eq!(puzzle.found_words(), &[3]);
    }

    #[test]
    fn miss_changes_nothing() {
        let mut puzzle = airport_puzzle();
        let outcome = drag(&mut puzzle, (1, 0), (1, 3));
        assert_eq!(outcome, MatchOutcome::Miss);
        assert!(puzzle.found_words().is_empty());
        assert!(puzzle.grid().cells().iter().all(|c| !c.found));
    }

    #[test]
    fn off_line_move_keeps_last_valid_path() {
        let mut puzzle = airport_puzzle();
        puzzle.pointer_down(CellPos::new(0, 0));
        puzzle.pointer_enter(CellPos::new(0, 2));
        assert_eq!(puzzle.selection().len(), 3);
        // A knight-move wobble must not clear the selection
        puzzle.pointer_enter(CellPos::new(1, 4));
        assert_eq!(puzzle.selection().len(), 3);
        // And the gesture still completes from the kept path
        puzzle.pointer_enter(CellPos::new(0, 3));
        assert!(matches!(puzzle.pointer_up(), MatchOutcome::Found { .. }));
    }

    #[test]
    fn cancel_aborts_without_match() {
        let mut puzzle = airport_puzzle();
        puzzle.pointer_down(CellPos::new(0, 0));
        puzzle.pointer_enter(CellPos::new(0, 3));
        puzzle.cancel();
        assert_eq!(puzzle.phase(), SelectionPhase::Idle);
        assert!(puzzle.selection().is_empty());
        assert!(puzzle.found_words().is_empty());
        // A stray release afterwards is ignored
        assert_eq!(puzzle.pointer_up(), MatchOutcome::Ignored);
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut puzzle = airport_puzzle();

        assert!(matches!(drag(&mut puzzle, (0, 0), (0, 3)), MatchOutcome::Found { .. })); // GATE
        assert!(matches!(drag(&mut puzzle, (5, 1), (5, 7)), MatchOutcome::Found { .. })); // AIRLINE
        assert!(matches!(drag(&mut puzzle, (8, 3), (8, 10)), MatchOutcome::Found { .. })); // BOARDING
        assert!(matches!(drag(&mut puzzle, (1, 10), (6, 10)), MatchOutcome::Found { .. })); // FLIGHT
        assert!(matches!(drag(&mut puzzle, (4, 0), (10, 0)), MatchOutcome::Found { .. })); // LUGGAGE
        let last = drag(&mut puzzle, (3, 11), (8, 11)); // TICKET
        assert_eq!(
            last,
            MatchOutcome::Found {
                word: 5,
                puzzle_complete: true
            }
        );
        assert!(puzzle.is_complete());

        // A later valid-but-irrelevant drag must not re-fire completion.
        let again = drag(&mut puzzle, (0, 0), (0, 3));
        assert_eq!(again, MatchOutcome::AlreadyFound);
        let miss = drag(&mut puzzle, (1, 0), (1, 3));
        assert_eq!(miss, MatchOutcome::Miss);
    }

    #[test]
    fn reset_clears_progress_but_not_letters() {
        let mut puzzle = airport_puzzle();
        drag(&mut puzzle, (0, 0), (0, 3));
        assert_eq!(puzzle.found_words().len(), 1);

        puzzle.reset();
        assert!(puzzle.found_words().is_empty());
        assert!(puzzle.grid().cells().iter().all(|c| !c.found));
        assert_eq!(puzzle.grid().letter(CellPos::new(0, 0)), 'G');

        // Reset on a clean puzzle is a no-op in effect
        puzzle.reset();
        assert!(puzzle.found_words().is_empty());

        // Completion can fire again after a reset
        drag(&mut puzzle, (5, 1), (5, 7));
        assert_eq!(puzzle.found_words(), &[0]);
    }

    #[test]
    fn ambiguous_forward_and_backward_match_is_rejected() {
        let grid = LetterGrid::from_rows(&["ABX", "XXX", "XXX"]).unwrap();
        let puzzle = WordSearchPuzzle::new(grid, vec!["AB".into(), "BA".into()]);
        let mut puzzle = puzzle.unwrap();
        puzzle.pointer_down(CellPos::new(0, 0));
        puzzle.pointer_enter(CellPos::new(0, 1));
        assert_eq!(puzzle.pointer_up(), MatchOutcome::Ambiguous);
        assert!(puzzle.found_words().is_empty());
        assert!(!puzzle.grid().cell(CellPos::new(0, 0)).found);
    }

    #[test]
    fn pointer_down_out_of_bounds_is_ignored() {
        let mut puzzle = airport_puzzle();
        puzzle.pointer_down(CellPos::new(50, 50));
        assert_eq!(puzzle.phase(), SelectionPhase::Idle);
        assert_eq!(puzzle.pointer_up(), MatchOutcome::Ignored);
    }
}
