//! View-State Synchronizer
//!
//! Issues backend commands for user actions and keeps the display state in
//! step with the backend by re-fetching after every successful mutation.

use std::cell::{Cell, RefCell};

use crate::backend::{commands, TaskBackend};
use crate::error::{SyncError, SyncResult};
use crate::model::{DisplayState, ListKind, TaskLists};
use crate::reducer::{reduce, Action};

type Observer = Box<dyn Fn(&DisplayState)>;

/// Owns the display state for one view.
///
/// State lives in a `RefCell` that is only borrowed between awaits, so
/// several operations may be in flight on the same event loop. Fetch
/// responses are tagged with a request number and stale ones are dropped.
pub struct Synchronizer<B> {
    backend: B,
    state: RefCell<DisplayState>,
    last_request: Cell<u64>,
    observer: Option<Observer>,
}

impl<B: TaskBackend> Synchronizer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: RefCell::new(DisplayState::default()),
            last_request: Cell::new(0),
            observer: None,
        }
    }

    /// Call `observer` with the new state after every change
    pub fn with_observer(mut self, observer: impl Fn(&DisplayState) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state(&self) -> DisplayState {
        self.state.borrow().clone()
    }

    fn dispatch(&self, action: Action) {
        let current = self.state.take();
        let next = reduce(current, action);
        if let Some(observer) = &self.observer {
            // The observer may read back through `state()`
            let seen = next.clone();
            *self.state.borrow_mut() = next;
            observer(&seen);
        } else {
            *self.state.borrow_mut() = next;
        }
    }

    fn fail(&self, error: SyncError) -> SyncError {
        log::error!("{}", error);
        self.dispatch(Action::ActionFailed {
            message: error.to_string(),
        });
        error
    }

    fn confirmed(&self) -> TaskLists {
        self.state.borrow().snapshot.clone()
    }

    /// Re-fetch the authoritative snapshot and replace the display state
    pub async fn refresh(&self) -> SyncResult<()> {
        let request = self.last_request.get() + 1;
        self.last_request.set(request);
        log::debug!("fetch #{}", request);

        match self.backend.fetch_all().await {
            Ok(lists) => {
                self.dispatch(Action::FetchSucceeded { request, lists });
                Ok(())
            }
            Err(reason) => Err(self.fail(SyncError::backend(commands::FETCH_ALL, reason))),
        }
    }

    /// After a confirmed mutation the refresh outcome is recorded in the
    /// state but does not turn the mutation itself into a failure.
    async fn refresh_after_mutation(&self) {
        let _ = self.refresh().await;
    }

    /// Create a task. Returns `Ok(false)` without any request for an empty
    /// title, `Ok(true)` once the backend accepted it.
    pub async fn add(&self, title: &str) -> SyncResult<bool> {
        if title.is_empty() {
            return Ok(false);
        }
        self.backend
            .add_task(title)
            .await
            .map_err(|reason| self.fail(SyncError::backend(commands::ADD_TASK, reason)))?;
        log::info!("added task {:?}", title);
        self.refresh_after_mutation().await;
        Ok(true)
    }

    /// Save the in-progress title of a row
    pub async fn edit(&self, index: usize, kind: ListKind) -> SyncResult<()> {
        let outgoing = {
            let state = self.state.borrow();
            let outgoing = state.task(kind, index).and_then(|task| {
                let lists = state.snapshot.with_title(kind, index, &task.title)?;
                Some((task.title.clone(), lists))
            });
            outgoing
        };
        let Some((title, outgoing)) = outgoing else {
            return Err(self.fail(SyncError::NoSuchTask { kind, index }));
        };

        self.backend
            .edit_tasks(&outgoing)
            .await
            .map_err(|reason| self.fail(SyncError::backend(commands::EDIT_TASKS, reason)))?;
        // Confirm what was sent; the row may have changed meanwhile
        self.dispatch(Action::EditConfirmed { kind, index, title });
        self.refresh_after_mutation().await;
        Ok(())
    }

    /// Remove a row
    pub async fn delete(&self, index: usize, kind: ListKind) -> SyncResult<()> {
        let Some(outgoing) = self.confirmed().without(kind, index) else {
            return Err(self.fail(SyncError::NoSuchTask { kind, index }));
        };

        self.backend
            .delete_tasks(&outgoing)
            .await
            .map_err(|reason| self.fail(SyncError::backend(commands::DELETE_TASKS, reason)))?;
        log::info!("deleted {} task #{}", kind, index);
        self.refresh_after_mutation().await;
        Ok(())
    }

    /// Move an ongoing task to done
    pub async fn mark_done(&self, title: &str, index: usize) -> SyncResult<()> {
        let ongoing = self.confirmed().ongoing;
        if index >= ongoing.len() {
            return Err(self.fail(SyncError::NoSuchTask {
                kind: ListKind::Ongoing,
                index,
            }));
        }

        self.backend
            .complete_task(&ongoing, index, title)
            .await
            .map_err(|reason| self.fail(SyncError::backend(commands::COMPLETE_TASK, reason)))?;
        log::info!("completed task {:?}", title);
        self.refresh_after_mutation().await;
        Ok(())
    }

    pub fn enable_edit(&self, index: usize, kind: ListKind) {
        self.dispatch(Action::EditRequested { kind, index });
    }

    /// Leave edit mode, discarding unsaved changes
    pub fn cancel_edit(&self, index: usize, kind: ListKind) {
        self.dispatch(Action::EditCancelled { kind, index });
    }

    pub fn change_title(&self, title: impl Into<String>, kind: ListKind, index: usize) {
        self.dispatch(Action::TitleChanged {
            kind,
            index,
            title: title.into(),
        });
    }

    pub fn dismiss_error(&self) {
        self.dispatch(Action::ErrorDismissed);
    }
}
