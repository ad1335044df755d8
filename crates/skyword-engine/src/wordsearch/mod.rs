//! Word-search puzzle core: letter grid, straight-line selection, and
//! match checking. Pure state machine; pointer mapping, rendering, and
//! audio feedback live in the task layer and the shell.

pub mod grid;
pub mod path;
pub mod puzzle;
