use serde::Serialize;
use thiserror::Error;

/// A grid position. Row 0 is the top row, column 0 the left column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Display color assigned to a solved word's cells.
/// Words cycle through the palette in the order they are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoundColor {
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
}

impl FoundColor {
    pub const PALETTE: [FoundColor; 5] = [
        FoundColor::Red,
        FoundColor::Green,
        FoundColor::Yellow,
        FoundColor::Blue,
        FoundColor::Purple,
    ];

    /// Palette color for the n-th solved word (round-robin).
    pub fn for_index(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }
}

/// Render state of one cell. The letter never changes after construction;
/// `found`/`found_color` are set when a word is solved and cleared on reset.
#[derive(Debug, Clone, Serialize)]
pub struct CellState {
    pub letter: char,
    pub found: bool,
    pub found_color: Option<FoundColor>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("letter grid must not be empty")]
    Empty,
    #[error("letter grid rows must all have the same length")]
    Ragged,
}

/// Fixed-size grid of single-character cells, row-major.
#[derive(Debug, Clone)]
pub struct LetterGrid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl LetterGrid {
    /// Build a grid from one string per row.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::Empty);
        }
        let row_letters: Vec<Vec<char>> = rows
            .iter()
            .map(|r| r.as_ref().chars().collect())
            .collect();
        let cols = row_letters[0].len();
        if cols == 0 {
            return Err(GridError::Empty);
        }
        if row_letters.iter().any(|r| r.len() != cols) {
            return Err(GridError::Ragged);
        }
        let cells = row_letters
            .into_iter()
            .flatten()
            .map(|letter| CellState {
                letter,
                found: false,
                found_color: None,
            })
            .collect();
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: CellPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: CellPos) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Cell state at `pos`. Callers must stay in bounds.
    pub fn cell(&self, pos: CellPos) -> &CellState {
        &self.cells[self.index(pos)]
    }

    pub fn letter(&self, pos: CellPos) -> char {
        self.cell(pos).letter
    }

    /// All cells in row-major order, for view building.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Mark a cell as belonging to a solved word. A cell keeps the color of
    /// the first word that claimed it.
    pub fn mark_found(&mut self, pos: CellPos, color: FoundColor) {
        let idx = self.index(pos);
        let cell = &mut self.cells[idx];
        if !cell.found {
            cell.found = true;
            cell.found_color = Some(color);
        }
    }

    /// Clear all found-state. Letters are untouched.
    pub fn clear_found(&mut self) {
        for cell in &mut self.cells {
            cell.found = false;
            cell.found_color = None;
        }
    }

    /// Concatenate the letters along a path of positions.
    pub fn word_along(&self, path: &[CellPos]) -> String {
        path.iter().map(|&p| self.letter(p)).collect()
    }

    /// Whether `word` can be read somewhere in the grid along one of the
    /// eight straight directions. Used to validate target lists at setup.
    pub fn contains_word(&self, word: &str) -> bool {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return false;
        }
        const DIRS: [(isize, isize); 8] = [
            (0, 1),
            (0, -1),
            (1, 0),
            (-1, 0),
            (1, 1),
            (1, -1),
            (-1, 1),
            (-1, -1),
        ];
        for row in 0..self.rows {
            for col in 0..self.cols {
                for (dr, dc) in DIRS {
                    if self.matches_at(&letters, row as isize, col as isize, dr, dc) {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn matches_at(&self, letters: &[char], row: isize, col: isize, dr: isize, dc: isize) -> bool {
        let mut r = row;
        let mut c = col;
        for &letter in letters {
            if r < 0 || c < 0 || r as usize >= self.rows || c as usize >= self.cols {
                return false;
            }
            if self.letter(CellPos::new(r as usize, c as usize)) != letter {
                return false;
            }
            r += dr;
            c += dc;
        }
        true
    }
}
