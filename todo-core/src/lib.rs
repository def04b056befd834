//! Core state for a two-category to-do list.
//!
//! The [`TaskStore`] owns the in-memory task collection and the currently
//! selected category, and mirrors both to a durable key-value [`storage`]
//! backend on every mutation. [`progress`] computes the completion
//! percentage shown for the selected category.

pub mod persist;
pub mod progress;
pub mod storage;
pub mod store;
pub mod task;

pub use progress::Progress;
pub use store::{Error, TaskStore};
pub use task::{Category, Task, TaskId};
