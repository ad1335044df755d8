use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Identifier of a task slot within a lesson plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u32);

/// A lesson event communicated from Rust to the shell through a flat float
/// buffer. Generic container: `kind` identifies the event, `a/b/c` carry
/// payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LessonEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl LessonEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_a(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    pub fn with_b(mut self, b: f32) -> Self {
        self.b = b;
        self
    }
}

/// Event kinds written into `LessonEvent::kind`.
/// Must stay in sync with the TypeScript side.
pub mod event_kind {
    /// A task was marked complete. `a` = task id.
    pub const TASK_COMPLETED: f32 = 1.0;
    /// Every task in the plan is complete. Fired once.
    pub const LESSON_COMPLETED: f32 = 2.0;
    /// The progress snapshot changed; the shell should persist it.
    pub const PROGRESS_DIRTY: f32 = 3.0;
    /// A word-search target was found. `a` = word index.
    pub const WORD_FOUND: f32 = 4.0;
    /// Every word-search target is found. Fired once per attempt.
    pub const PUZZLE_COMPLETED: f32 = 5.0;
    /// A word/picture pair was resolved. `a` = item index, `b` = 1 if correct.
    pub const PAIR_RESOLVED: f32 = 6.0;
    /// A built sentence was checked. `a` = template index, `b` = 1 if correct.
    pub const SENTENCE_CHECKED: f32 = 7.0;
    /// A match/search category or round finished; the shell may show the
    /// celebration popup. `a` = context-dependent index.
    pub const CELEBRATION: f32 = 8.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_is_four_floats() {
        assert_eq!(std::mem::size_of::<LessonEvent>(), 16);
        assert_eq!(LessonEvent::FLOATS, 4);
    }

    #[test]
    fn builder_sets_payload() {
        let e = LessonEvent::new(event_kind::WORD_FOUND).with_a(3.0).with_b(1.0);
        assert_eq!(e.kind, event_kind::WORD_FOUND);
        assert_eq!(e.a, 3.0);
        assert_eq!(e.b, 1.0);
        assert_eq!(e.c, 0.0);
    }
}
