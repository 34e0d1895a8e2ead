//! Task and subtask domain models

use serde::{Deserialize, Serialize};

/// A titled, completable unit of work owning zero or more subtasks.
///
/// Tasks have no stable identifier: they are addressed by their position
/// in the task store, and positions shift when an earlier task is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    /// Create a new open task with no subtasks.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
            subtasks: Vec::new(),
        }
    }
}

/// A titled, completable unit of work scoped to exactly one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl Subtask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_defaults() {
        let task = Task::new("Buy milk");
        assert_eq!(task.title, "Buy milk");
        assert!(!task.done);
        assert!(task.subtasks.is_empty());
    }

    #[test]
    fn test_subtask_defaults() {
        let sub = Subtask::new("2% milk");
        assert_eq!(sub.title, "2% milk");
        assert!(!sub.done);
    }
}
