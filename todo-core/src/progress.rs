//! Completion progress for the currently selected category.

use crate::task::{Category, Task, TaskId};
use std::collections::HashMap;

/// Completion summary for the tasks in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
    /// `floor(100 * completed / total)`, or 0 when there is nothing to
    /// count.
    pub percentage: u8,
}

/// Counts the tasks in `category` and how many of them are completed.
pub fn progress(tasks: &HashMap<TaskId, Task>, category: Category) -> Progress {
    let total = tasks
        .values()
        .filter(|task| task.category == category)
        .count();
    let completed = tasks
        .values()
        .filter(|task| task.category == category && task.completed)
        .count();
    let percentage = if total == 0 {
        0
    } else {
        (100 * completed / total) as u8
    };
    Progress {
        total,
        completed,
        percentage,
    }
}
