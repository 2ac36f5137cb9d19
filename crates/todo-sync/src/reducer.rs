//! Display State Reducer
//!
//! Every change to the display state goes through `reduce`, so mutation
//! points are explicit and ordered. Nothing here talks to the backend.

use crate::model::{DisplayState, ListKind, TaskLists};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A fetch tagged `request` returned `lists`
    FetchSucceeded { request: u64, lists: TaskLists },
    /// User switched a row into edit mode
    EditRequested { kind: ListKind, index: usize },
    /// User typed into a row being edited
    TitleChanged {
        kind: ListKind,
        index: usize,
        title: String,
    },
    /// Backend stored `title` for a row
    EditConfirmed {
        kind: ListKind,
        index: usize,
        title: String,
    },
    /// User abandoned the edit of a row
    EditCancelled { kind: ListKind, index: usize },
    /// A remote call failed
    ActionFailed { message: String },
    ErrorDismissed,
}

pub fn reduce(mut state: DisplayState, action: Action) -> DisplayState {
    match action {
        Action::FetchSucceeded { request, lists } => {
            if request <= state.applied_request {
                log::debug!(
                    "discarding stale fetch #{} (already applied #{})",
                    request,
                    state.applied_request
                );
                return state;
            }
            let mut next = DisplayState::from_snapshot(lists);
            next.applied_request = request;
            next.last_error = state.last_error;
            next
        }
        Action::EditRequested { kind, index } => {
            if let Some(task) = state.tasks_mut(kind).get_mut(index) {
                task.editing = true;
            }
            state
        }
        Action::TitleChanged { kind, index, title } => {
            if let Some(task) = state.tasks_mut(kind).get_mut(index) {
                task.title = title;
            }
            state
        }
        Action::EditConfirmed { kind, index, title } => {
            if index >= state.tasks(kind).len() {
                return state;
            }
            let Some(slot) = state.snapshot.list_mut(kind).get_mut(index) else {
                return state;
            };
            *slot = title.clone();
            // A row edited again while the save was in flight stays in edit mode
            let task = &mut state.tasks_mut(kind)[index];
            if task.title == title {
                task.editing = false;
            }
            state
        }
        Action::EditCancelled { kind, index } => {
            let confirmed = state.snapshot.get(kind, index).map(str::to_string);
            if let (Some(task), Some(title)) = (state.tasks_mut(kind).get_mut(index), confirmed) {
                task.editing = false;
                task.title = title;
            }
            state
        }
        Action::ActionFailed { message } => {
            state.last_error = Some(message);
            state
        }
        Action::ErrorDismissed => {
            state.last_error = None;
            state
        }
    }
}
