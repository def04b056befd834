use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier for a task: milliseconds since the Unix epoch at creation
/// time. Two tasks created within the same millisecond get consecutive
/// ids, see [`TaskId::next`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// An id for a task created right now.
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// The next id after this one, for resolving same-millisecond
    /// collisions.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<i64> for TaskId {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// The two task categories. Doubles as the mode flag selecting which
/// tasks are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Work,
    Travel,
}

impl Category {
    /// `true` for [`Category::Work`], matching the `working` boolean the
    /// persisted format uses.
    pub fn is_working(self) -> bool {
        matches!(self, Category::Work)
    }

    /// Inverse of [`Category::is_working`].
    pub fn from_working(working: bool) -> Self {
        if working {
            Category::Work
        } else {
            Category::Travel
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Work => write!(f, "work"),
            Category::Travel => write!(f, "travel"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "work" => Ok(Category::Work),
            "travel" => Ok(Category::Travel),
            other => Err(format!("unknown category '{other}', expected work or travel")),
        }
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub category: Category,
    pub completed: bool,
}
