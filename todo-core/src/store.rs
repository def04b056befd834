//! The task store: authoritative in-memory state plus its durable mirror.

use crate::persist::{self, MODE_KEY, TASKS_KEY};
use crate::progress::{self, Progress};
use crate::storage::Storage;
use crate::task::{Category, Task, TaskId};
use log::warn;
use std::collections::HashMap;
use thiserror::Error;

/// Errors from task store operations.
///
/// Storage failures are not represented here: the durable mirror is
/// written fire-and-forget, and a failed write is logged rather than
/// surfaced (the in-memory state remains authoritative for the running
/// process).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("task text must not be empty")]
    EmptyText,
    #[error("no task with id {0}")]
    TaskNotFound(TaskId),
}

/// Owns the task collection and the selected category, and keeps the
/// durable mirror consistent with them. Every mutation rewrites the full
/// serialized collection; there is no diffing or batching.
pub struct TaskStore<S: Storage> {
    tasks: HashMap<TaskId, Task>,
    category: Category,
    storage: S,
}

impl<S: Storage> TaskStore<S> {
    /// Creates an empty store over `storage` without reading from it.
    pub fn new(storage: S) -> Self {
        Self {
            tasks: HashMap::new(),
            category: Category::default(),
            storage,
        }
    }

    /// Creates a store populated from the persisted state in `storage`.
    ///
    /// A missing key leaves the corresponding state at its default (empty
    /// collection, work category). An unreadable or unparseable payload
    /// is treated the same way, with a warning, so stale data can never
    /// prevent startup.
    pub fn load(storage: S) -> Self {
        let mut store = Self::new(storage);
        match store.storage.read(TASKS_KEY) {
            Ok(Some(payload)) => match persist::decode_tasks(&payload) {
                Ok(tasks) => store.tasks = tasks,
                Err(err) => warn!("ignoring unparseable task payload: {err}"),
            },
            Ok(None) => {}
            Err(err) => warn!("could not read persisted tasks: {err}"),
        }
        match store.storage.read(MODE_KEY) {
            Ok(Some(payload)) => match persist::decode_mode(&payload) {
                Ok(category) => store.category = category,
                Err(err) => warn!("ignoring unparseable mode payload: {err}"),
            },
            Ok(None) => {}
            Err(err) => warn!("could not read persisted mode: {err}"),
        }
        store
    }

    /// Adds a task with a fresh id and `completed = false`, and persists
    /// the collection. Rejects text that is empty after trimming.
    pub fn add(&mut self, text: &str, category: Category) -> Result<TaskId, Error> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyText);
        }
        let mut id = TaskId::now();
        while self.tasks.contains_key(&id) {
            id = id.next();
        }
        self.tasks.insert(
            id,
            Task {
                id,
                text: text.to_string(),
                category,
                completed: false,
            },
        );
        self.persist_tasks();
        Ok(id)
    }

    /// Flips the completion flag of the task identified by `id` and
    /// persists the collection. Returns the new flag value.
    pub fn toggle_completed(&mut self, id: TaskId) -> Result<bool, Error> {
        let task = self.tasks.get_mut(&id).ok_or(Error::TaskNotFound(id))?;
        task.completed = !task.completed;
        let completed = task.completed;
        self.persist_tasks();
        Ok(completed)
    }

    /// Removes the task identified by `id` and persists the collection.
    /// Callers are expected to have confirmed the deletion with the user
    /// before getting here.
    pub fn remove(&mut self, id: TaskId) -> Result<Task, Error> {
        let task = self.tasks.remove(&id).ok_or(Error::TaskNotFound(id))?;
        self.persist_tasks();
        Ok(task)
    }

    /// Switches the selected category and persists it under its own key.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        match persist::encode_mode(category) {
            Ok(payload) => {
                if let Err(err) = self.storage.write(MODE_KEY, &payload) {
                    warn!("could not persist mode: {err}");
                }
            }
            Err(err) => warn!("could not serialize mode: {err}"),
        }
    }

    /// The currently selected category.
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in the currently selected category, oldest first.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .values()
            .filter(|task| task.category == self.category)
            .collect();
        tasks.sort_by_key(|task| task.id);
        tasks
    }

    /// All tasks regardless of category, oldest first.
    pub fn all_tasks(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.values().collect();
        tasks.sort_by_key(|task| task.id);
        tasks
    }

    /// Completion progress for the currently selected category.
    pub fn progress(&self) -> Progress {
        progress::progress(&self.tasks, self.category)
    }

    fn persist_tasks(&mut self) {
        match persist::encode_tasks(&self.tasks) {
            Ok(payload) => {
                if let Err(err) = self.storage.write(TASKS_KEY, &payload) {
                    warn!("could not persist tasks: {err}");
                }
            }
            Err(err) => warn!("could not serialize tasks: {err}"),
        }
    }
}
