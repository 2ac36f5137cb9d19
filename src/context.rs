//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{DisplayState, Synchronizer};

use crate::commands::TauriBackend;

pub type SharedSync = Rc<Synchronizer<TauriBackend>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Mirror of the synchronizer's display state
    pub display: ReadSignal<DisplayState>,
    /// The synchronizer itself (not `Send`, so kept in local storage)
    sync: StoredValue<SharedSync, LocalStorage>,
}

impl TodoContext {
    pub fn new(display: ReadSignal<DisplayState>, sync: SharedSync) -> Self {
        Self {
            display,
            sync: StoredValue::new_local(sync),
        }
    }

    /// Run a local (synchronous) synchronizer operation
    pub fn with_sync<R>(&self, f: impl FnOnce(&Synchronizer<TauriBackend>) -> R) -> R {
        self.sync.with_value(|sync| f(sync))
    }

    /// Spawn an async synchronizer operation on the event loop
    pub fn run<F, Fut>(&self, f: F)
    where
        F: FnOnce(SharedSync) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(f(self.sync.get_value()));
    }
}

pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
