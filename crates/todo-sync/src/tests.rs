//! Synchronizer Tests
//!
//! Drives the synchronizer against an in-memory backend that records every
//! command it receives.

#[cfg(test)]
mod tests {
    use crate::{DisplayState, ListKind, SyncError, Synchronizer, Task, TaskBackend, TaskLists};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;
    use tokio::sync::oneshot;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        FetchAll,
        AddTask { title: String },
        EditTasks(TaskLists),
        DeleteTasks(TaskLists),
        CompleteTask { ongoing: Vec<String>, index: usize, title: String },
    }

    /// Backend that stores lists in memory and honors every command
    #[derive(Default)]
    struct MemoryBackend {
        lists: RefCell<TaskLists>,
        calls: RefCell<Vec<Call>>,
        failing: Cell<Option<&'static str>>,
    }

    impl MemoryBackend {
        fn with(ongoing: &[&str], done: &[&str]) -> Self {
            let backend = Self::default();
            *backend.lists.borrow_mut() = lists(ongoing, done);
            backend
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn clear_calls(&self) {
            self.calls.borrow_mut().clear();
        }

        /// Make the named command fail from now on
        fn fail_on(&self, command: &'static str) {
            self.failing.set(Some(command));
        }

        fn check(&self, command: &str) -> Result<(), String> {
            match self.failing.get() {
                Some(failing) if failing == command => Err("disk on fire".to_string()),
                _ => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl TaskBackend for MemoryBackend {
        async fn fetch_all(&self) -> Result<TaskLists, String> {
            self.calls.borrow_mut().push(Call::FetchAll);
            self.check("fetch_all")?;
            Ok(self.lists.borrow().clone())
        }

        async fn add_task(&self, title: &str) -> Result<(), String> {
            self.calls.borrow_mut().push(Call::AddTask { title: title.to_string() });
            self.check("add_task")?;
            self.lists.borrow_mut().ongoing.push(title.to_string());
            Ok(())
        }

        async fn edit_tasks(&self, lists: &TaskLists) -> Result<(), String> {
            self.calls.borrow_mut().push(Call::EditTasks(lists.clone()));
            self.check("edit_tasks")?;
            *self.lists.borrow_mut() = lists.clone();
            Ok(())
        }

        async fn delete_tasks(&self, lists: &TaskLists) -> Result<(), String> {
            self.calls.borrow_mut().push(Call::DeleteTasks(lists.clone()));
            self.check("delete_tasks")?;
            *self.lists.borrow_mut() = lists.clone();
            Ok(())
        }

        async fn complete_task(
            &self,
            ongoing: &[String],
            index: usize,
            title: &str,
        ) -> Result<(), String> {
            self.calls.borrow_mut().push(Call::CompleteTask {
                ongoing: ongoing.to_vec(),
                index,
                title: title.to_string(),
            });
            self.check("complete_task")?;
            if self.lists.borrow_mut().complete(index, title) {
                Ok(())
            } else {
                Err(format!("no ongoing task {:?} at {}", title, index))
            }
        }
    }

    fn lists(ongoing: &[&str], done: &[&str]) -> TaskLists {
        TaskLists::new(
            ongoing.iter().map(|s| s.to_string()).collect(),
            done.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    async fn loaded(ongoing: &[&str], done: &[&str]) -> Synchronizer<MemoryBackend> {
        let sync = Synchronizer::new(MemoryBackend::with(ongoing, done));
        sync.refresh().await.expect("initial refresh");
        sync.backend().clear_calls();
        sync
    }

    #[tokio::test]
    async fn test_add_issues_add_then_fetch() {
        let sync = loaded(&["buy milk"], &[]).await;

        let added = sync.add("walk dog").await.expect("add failed");

        assert!(added);
        assert_eq!(
            sync.backend().calls(),
            vec![Call::AddTask { title: "walk dog".into() }, Call::FetchAll]
        );
        let state = sync.state();
        assert_eq!(titles(&state.ongoing), vec!["buy milk", "walk dog"]);
        assert!(state.done.is_empty());
        assert!(state.is_consistent());
    }

    proptest! {
        #[test]
        fn add_appends_title_exactly_once(title in ".+") {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let (before, after) = rt.block_on(async {
                let sync = loaded(&["buy milk", "x"], &["y"]).await;
                let count = |state: DisplayState| {
                    state.ongoing.iter().filter(|t| t.title == title).count()
                };
                let before = count(sync.state());

                sync.add(&title).await.unwrap();
                sync.refresh().await.unwrap();

                (before, count(sync.state()))
            });
            prop_assert_eq!(after, before + 1);
        }
    }

    #[tokio::test]
    async fn test_add_empty_is_noop() {
        let sync = loaded(&["a"], &["b"]).await;
        let before = sync.state();

        let added = sync.add("").await.unwrap();

        assert!(!added);
        assert!(sync.backend().calls().is_empty());
        assert_eq!(sync.state(), before);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let sync = loaded(&["a", "b", "c"], &["d", "e"]).await;

        sync.delete(1, ListKind::Ongoing).await.unwrap();

        assert_eq!(
            sync.backend().calls(),
            vec![Call::DeleteTasks(lists(&["a", "c"], &["d", "e"])), Call::FetchAll]
        );
        let state = sync.state();
        assert_eq!(titles(&state.ongoing), vec!["a", "c"]);
        assert_eq!(state.done.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_from_done() {
        let sync = loaded(&["a"], &["d", "e"]).await;

        sync.delete(0, ListKind::Done).await.unwrap();

        let state = sync.state();
        assert_eq!(titles(&state.ongoing), vec!["a"]);
        assert_eq!(titles(&state.done), vec!["e"]);
    }

    #[tokio::test]
    async fn test_delete_out_of_range_sends_nothing() {
        let sync = loaded(&["a"], &[]).await;

        let err = sync.delete(0, ListKind::Done).await.unwrap_err();

        assert_eq!(err, SyncError::NoSuchTask { kind: ListKind::Done, index: 0 });
        assert!(sync.backend().calls().is_empty());
        assert_eq!(titles(&sync.state().ongoing), vec!["a"]);
    }

    #[tokio::test]
    async fn test_edit_out_of_range_sends_nothing() {
        let sync = loaded(&["a"], &["b"]).await;

        let err = sync.edit(3, ListKind::Ongoing).await.unwrap_err();

        assert_eq!(err, SyncError::NoSuchTask { kind: ListKind::Ongoing, index: 3 });
        assert!(sync.backend().calls().is_empty());
        assert_eq!(sync.state().snapshot, lists(&["a"], &["b"]));
    }

    #[tokio::test]
    async fn test_mark_done_out_of_range_sends_nothing() {
        let sync = loaded(&["a"], &["b"]).await;

        let err = sync.mark_done("b", 1).await.unwrap_err();

        assert_eq!(err, SyncError::NoSuchTask { kind: ListKind::Ongoing, index: 1 });
        assert!(sync.backend().calls().is_empty());
        let state = sync.state();
        assert_eq!(titles(&state.ongoing), vec!["a"]);
        assert_eq!(titles(&state.done), vec!["b"]);
        assert!(state.last_error.is_some());
    }

    #[tokio::test]
    async fn test_edit_sends_in_progress_title() {
        let sync = loaded(&["a", "b"], &["c"]).await;
        sync.enable_edit(1, ListKind::Ongoing);
        sync.change_title("bee", ListKind::Ongoing, 1);

        sync.edit(1, ListKind::Ongoing).await.unwrap();

        assert_eq!(
            sync.backend().calls(),
            vec![Call::EditTasks(lists(&["a", "bee"], &["c"])), Call::FetchAll]
        );
        let state = sync.state();
        assert_eq!(state.ongoing[1], Task::viewing("bee"));
        assert_eq!(state.snapshot, lists(&["a", "bee"], &["c"]));
    }

    #[tokio::test]
    async fn test_cancel_edit_discards_changes() {
        let sync = loaded(&["a"], &["b"]).await;
        sync.enable_edit(0, ListKind::Done);
        sync.change_title("X", ListKind::Done, 0);
        assert_eq!(sync.state().done[0].title, "X");

        sync.cancel_edit(0, ListKind::Done);

        assert_eq!(sync.state().done[0], Task::viewing("b"));
        assert!(sync.backend().calls().is_empty());
    }

    #[tokio::test]
    async fn test_mark_done_moves_task() {
        let sync = loaded(&["a", "b"], &["c"]).await;

        sync.mark_done("b", 1).await.unwrap();
        sync.refresh().await.unwrap();

        let state = sync.state();
        assert_eq!(titles(&state.ongoing), vec!["a"]);
        assert_eq!(titles(&state.done), vec!["b", "c"]);
        assert_eq!(
            sync.backend().calls()[0],
            Call::CompleteTask {
                ongoing: vec!["a".into(), "b".into()],
                index: 1,
                title: "b".into()
            }
        );
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_lists_and_reports() {
        let sync = loaded(&["a"], &["b"]).await;
        sync.backend().fail_on("delete_tasks");
        let before = sync.state();

        let err = sync.delete(0, ListKind::Ongoing).await.unwrap_err();

        assert!(matches!(err, SyncError::Backend { command: "delete_tasks", .. }));
        let state = sync.state();
        assert_eq!(state.ongoing, before.ongoing);
        assert_eq!(state.snapshot, before.snapshot);
        assert_eq!(
            state.last_error.as_deref(),
            Some("delete_tasks failed: disk on fire")
        );
        // no refresh after a failed command
        assert_eq!(sync.backend().calls().len(), 1);

        sync.dismiss_error();
        assert_eq!(sync.state().last_error, None);
    }

    #[tokio::test]
    async fn test_failed_edit_keeps_row_in_edit_mode() {
        let sync = loaded(&["a"], &[]).await;
        sync.backend().fail_on("edit_tasks");
        sync.enable_edit(0, ListKind::Ongoing);
        sync.change_title("draft", ListKind::Ongoing, 0);

        assert!(sync.edit(0, ListKind::Ongoing).await.is_err());

        let state = sync.state();
        assert_eq!(state.ongoing[0], Task { title: "draft".into(), editing: true });
        assert_eq!(state.snapshot.ongoing, vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_refresh_leaves_state() {
        let sync = loaded(&["a"], &[]).await;
        sync.backend().fail_on("fetch_all");

        assert!(sync.refresh().await.is_err());

        let state = sync.state();
        assert_eq!(titles(&state.ongoing), vec!["a"]);
        assert!(state.last_error.is_some());
    }

    #[tokio::test]
    async fn test_add_succeeds_even_if_refresh_fails() {
        let sync = loaded(&[], &[]).await;
        sync.backend().fail_on("fetch_all");

        let added = sync.add("x").await.unwrap();

        assert!(added);
        assert!(sync.state().last_error.unwrap().starts_with("fetch_all failed"));
    }

    #[tokio::test]
    async fn test_observer_sees_every_change() {
        let seen: Rc<RefCell<Vec<DisplayState>>> = Rc::default();
        let sink = seen.clone();
        let sync = Synchronizer::new(MemoryBackend::with(&["a"], &[]))
            .with_observer(move |state| sink.borrow_mut().push(state.clone()));

        sync.refresh().await.unwrap();
        sync.enable_edit(0, ListKind::Ongoing);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(!seen[0].ongoing[0].editing);
        assert!(seen[1].ongoing[0].editing);
    }

    /// Backend whose fetches and edits resolve only when the test says so
    #[derive(Default)]
    struct GatedBackend {
        pending: RefCell<VecDeque<oneshot::Receiver<TaskLists>>>,
        edit_gate: RefCell<Option<oneshot::Receiver<()>>>,
        edits: RefCell<Vec<TaskLists>>,
    }

    #[async_trait(?Send)]
    impl TaskBackend for GatedBackend {
        async fn fetch_all(&self) -> Result<TaskLists, String> {
            let gate = self.pending.borrow_mut().pop_front().ok_or("no gate")?;
            gate.await.map_err(|e| e.to_string())
        }

        async fn add_task(&self, _title: &str) -> Result<(), String> {
            Ok(())
        }

        async fn edit_tasks(&self, lists: &TaskLists) -> Result<(), String> {
            self.edits.borrow_mut().push(lists.clone());
            let gate = self.edit_gate.borrow_mut().take();
            if let Some(gate) = gate {
                gate.await.map_err(|e| e.to_string())?;
            }
            Ok(())
        }

        async fn delete_tasks(&self, _lists: &TaskLists) -> Result<(), String> {
            Ok(())
        }

        async fn complete_task(&self, _: &[String], _: usize, _: &str) -> Result<(), String> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_newest_fetch_wins_when_responses_reorder() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let backend = GatedBackend::default();
        backend.pending.borrow_mut().extend([first_rx, second_rx]);
        let sync = Synchronizer::new(backend);

        let resolve = async {
            second_tx.send(lists(&["newer"], &[])).unwrap();
            while sync.state().applied_request < 2 {
                tokio::task::yield_now().await;
            }
            first_tx.send(lists(&["older"], &[])).unwrap();
        };
        let (a, b, _) = tokio::join!(sync.refresh(), sync.refresh(), resolve);

        assert!(a.is_ok() && b.is_ok());
        let state = sync.state();
        assert_eq!(titles(&state.ongoing), vec!["newer"]);
        assert_eq!(state.applied_request, 2);
    }

    #[tokio::test]
    async fn test_edit_confirms_sent_title_when_row_changes_in_flight() {
        let (fetch_tx, fetch_rx) = oneshot::channel();
        let (edit_tx, edit_rx) = oneshot::channel();
        let backend = GatedBackend::default();
        backend.pending.borrow_mut().push_back(fetch_rx);
        *backend.edit_gate.borrow_mut() = Some(edit_rx);
        let sync = Synchronizer::new(backend);
        fetch_tx.send(lists(&["old"], &[])).unwrap();
        sync.refresh().await.unwrap();
        sync.enable_edit(0, ListKind::Ongoing);
        sync.change_title("sent", ListKind::Ongoing, 0);

        let keep_typing = async {
            while sync.backend().edits.borrow().is_empty() {
                tokio::task::yield_now().await;
            }
            sync.change_title("typed after save", ListKind::Ongoing, 0);
            edit_tx.send(()).unwrap();
        };
        // no fetch gate left, so the follow-up refresh fails
        let (saved, _) = tokio::join!(sync.edit(0, ListKind::Ongoing), keep_typing);

        assert!(saved.is_ok());
        assert_eq!(*sync.backend().edits.borrow(), vec![lists(&["sent"], &[])]);
        let state = sync.state();
        assert_eq!(state.snapshot, lists(&["sent"], &[]));
        assert_eq!(state.ongoing[0], Task { title: "typed after save".into(), editing: true });
        assert!(state.last_error.unwrap().starts_with("fetch_all failed"));
    }
}
