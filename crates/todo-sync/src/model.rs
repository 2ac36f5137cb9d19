//! Task Models
//!
//! The backend's authoritative snapshot and the local display projection.

use serde::{Deserialize, Serialize};

/// Which of the two lists an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Ongoing,
    Done,
}

impl ListKind {
    pub const ALL: [ListKind; 2] = [ListKind::Ongoing, ListKind::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Ongoing => "ongoing",
            ListKind::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ongoing" => Some(ListKind::Ongoing),
            "done" => Some(ListKind::Done),
            _ => None,
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authoritative task titles as stored by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLists {
    pub ongoing: Vec<String>,
    pub done: Vec<String>,
}

impl TaskLists {
    pub fn new(ongoing: Vec<String>, done: Vec<String>) -> Self {
        Self { ongoing, done }
    }

    pub fn list(&self, kind: ListKind) -> &[String] {
        match kind {
            ListKind::Ongoing => &self.ongoing,
            ListKind::Done => &self.done,
        }
    }

    pub fn list_mut(&mut self, kind: ListKind) -> &mut Vec<String> {
        match kind {
            ListKind::Ongoing => &mut self.ongoing,
            ListKind::Done => &mut self.done,
        }
    }

    pub fn get(&self, kind: ListKind, index: usize) -> Option<&str> {
        self.list(kind).get(index).map(String::as_str)
    }

    /// Copy with the entry at `index` removed, or None if out of range
    pub fn without(&self, kind: ListKind, index: usize) -> Option<TaskLists> {
        if index >= self.list(kind).len() {
            return None;
        }
        let mut lists = self.clone();
        lists.list_mut(kind).remove(index);
        Some(lists)
    }

    /// Copy with the entry at `index` retitled, or None if out of range
    pub fn with_title(&self, kind: ListKind, index: usize, title: &str) -> Option<TaskLists> {
        if index >= self.list(kind).len() {
            return None;
        }
        let mut lists = self.clone();
        lists.list_mut(kind)[index] = title.to_string();
        Some(lists)
    }

    /// Move `ongoing[index]` to the front of `done`.
    ///
    /// Returns false and leaves the lists untouched when the index is out
    /// of range or the stored title does not match `title`.
    pub fn complete(&mut self, index: usize, title: &str) -> bool {
        match self.ongoing.get(index) {
            Some(stored) if stored == title => {
                let task = self.ongoing.remove(index);
                self.done.insert(0, task);
                true
            }
            _ => false,
        }
    }
}

/// A task row as shown in the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Title, possibly holding unsaved edits
    pub title: String,
    /// Whether the row is in edit mode (view-only, never persisted)
    pub editing: bool,
}

impl Task {
    pub fn viewing(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            editing: false,
        }
    }
}

/// Local projection of the backend snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub ongoing: Vec<Task>,
    pub done: Vec<Task>,
    /// Last confirmed snapshot, used to build outgoing requests and to
    /// restore titles on cancel
    pub snapshot: TaskLists,
    /// Request number of the last fetch response applied (0 = none yet)
    pub applied_request: u64,
    /// Last user-facing error
    pub last_error: Option<String>,
}

impl DisplayState {
    /// Fresh projection with every row in viewing mode
    pub fn from_snapshot(snapshot: TaskLists) -> Self {
        let project = |titles: &[String]| -> Vec<Task> { titles.iter().map(Task::viewing).collect() };
        Self {
            ongoing: project(&snapshot.ongoing),
            done: project(&snapshot.done),
            snapshot,
            ..Default::default()
        }
    }

    pub fn tasks(&self, kind: ListKind) -> &[Task] {
        match kind {
            ListKind::Ongoing => &self.ongoing,
            ListKind::Done => &self.done,
        }
    }

    pub fn tasks_mut(&mut self, kind: ListKind) -> &mut Vec<Task> {
        match kind {
            ListKind::Ongoing => &mut self.ongoing,
            ListKind::Done => &mut self.done,
        }
    }

    pub fn task(&self, kind: ListKind, index: usize) -> Option<&Task> {
        self.tasks(kind).get(index)
    }

    /// Display rows line up one-to-one with the snapshot
    pub fn is_consistent(&self) -> bool {
        ListKind::ALL
            .iter()
            .all(|&kind| self.tasks(kind).len() == self.snapshot.list(kind).len())
    }
}
