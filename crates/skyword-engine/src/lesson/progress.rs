use serde::{Deserialize, Serialize};

use crate::api::types::TaskId;

/// Persisted lesson progress. The engine raises a `ProgressDirty` event when
/// this changes; the shell serializes it into whatever store it owns
/// (localStorage in the browser) and hands it back on the next start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Id of the task the learner was on.
    pub current_task: TaskId,
    /// Ids of completed tasks, in completion order.
    pub completed: Vec<TaskId>,
}

impl ProgressSnapshot {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned())
    }
}
