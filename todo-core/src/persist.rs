//! Wire format of the durable mirror.
//!
//! Task data is stored under [`TASKS_KEY`] as a JSON object mapping ids
//! to records, and the selected category under [`MODE_KEY`] as a JSON
//! boolean. On the wire, `working` is the category (`true` = work), and
//! `completed` is absent in records written before the flag existed, so
//! it defaults to `false` on read. That default is the entire migration
//! between the persisted schema variants.

use crate::task::{Category, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key under which the serialized task collection is stored.
pub const TASKS_KEY: &str = "@toDos";

/// Key under which the serialized mode flag is stored.
pub const MODE_KEY: &str = "@workingState";

/// A task as it appears in the persisted payload.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredTask {
    pub text: String,
    pub working: bool,
    #[serde(default)]
    pub completed: bool,
}

impl From<&Task> for StoredTask {
    fn from(task: &Task) -> Self {
        Self {
            text: task.text.clone(),
            working: task.category.is_working(),
            completed: task.completed,
        }
    }
}

/// Serializes the full task collection for the durable mirror.
pub fn encode_tasks(tasks: &HashMap<TaskId, Task>) -> serde_json::Result<String> {
    let stored: HashMap<TaskId, StoredTask> = tasks
        .iter()
        .map(|(id, task)| (*id, StoredTask::from(task)))
        .collect();
    serde_json::to_string(&stored)
}

/// Deserializes a persisted task collection payload.
pub fn decode_tasks(payload: &str) -> serde_json::Result<HashMap<TaskId, Task>> {
    let stored: HashMap<TaskId, StoredTask> = serde_json::from_str(payload)?;
    Ok(stored
        .into_iter()
        .map(|(id, record)| {
            (
                id,
                Task {
                    id,
                    text: record.text,
                    category: Category::from_working(record.working),
                    completed: record.completed,
                },
            )
        })
        .collect())
}

/// Serializes the mode flag for the durable mirror.
pub fn encode_mode(category: Category) -> serde_json::Result<String> {
    serde_json::to_string(&category.is_working())
}

/// Deserializes a persisted mode flag payload.
pub fn decode_mode(payload: &str) -> serde_json::Result<Category> {
    let working: bool = serde_json::from_str(payload)?;
    Ok(Category::from_working(working))
}
