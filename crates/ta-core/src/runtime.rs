//! Cooperative timer runtime and cancellable task bookkeeping
//!
//! Everything runs on one thread. A [`Runtime`] spawns local futures and
//! provides sleeps; the browser build backs it with `setTimeout`, the native
//! build with a tokio `LocalSet`.

use crate::model::FileId;
use futures::future::{AbortHandle, LocalBoxFuture};
use std::collections::HashMap;
use std::time::Duration;

pub trait Runtime: Clone + 'static {
    /// Run a future to completion in the background
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    /// Resolve after `duration`. Dropping the future cancels the timer.
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Abort handles of scheduled lifecycles, keyed by file
#[derive(Debug, Default)]
pub struct TaskRegistry {
    handles: HashMap<FileId, AbortHandle>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces (and aborts) any task already registered for the id
    pub fn insert(&mut self, id: FileId, handle: AbortHandle) {
        if let Some(previous) = self.handles.insert(id, handle) {
            previous.abort();
        }
    }

    /// Forget a task that ran to completion
    pub fn finish(&mut self, id: &FileId) {
        self.handles.remove(id);
    }

    pub fn cancel(&mut self, id: &FileId) -> bool {
        match self.handles.remove(id) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Abort everything; returns how many tasks were pending
    pub fn cancel_all(&mut self) -> usize {
        let count = self.handles.len();
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
        count
    }

    pub fn contains(&self, id: &FileId) -> bool {
        self.handles.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::TokioRuntime;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::Runtime;
    use futures::future::LocalBoxFuture;
    use futures::FutureExt;
    use std::time::Duration;

    /// Must be used from within a `tokio::task::LocalSet`
    #[derive(Debug, Clone, Copy, Default)]
    pub struct TokioRuntime;

    impl Runtime for TokioRuntime {
        fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
            tokio::task::spawn_local(task);
        }

        fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
            tokio::time::sleep(duration).boxed_local()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::{abortable, Aborted};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_registry_cancel() {
        let mut registry = TaskRegistry::new();
        let (_fut_a, handle_a) = abortable(async {});
        let (_fut_b, handle_b) = abortable(async {});
        let probe = handle_a.clone();

        registry.insert(FileId::from("a"), handle_a);
        registry.insert(FileId::from("b"), handle_b);
        assert_eq!(registry.len(), 2);

        assert!(registry.cancel(&FileId::from("a")));
        assert!(probe.is_aborted());
        assert!(!registry.cancel(&FileId::from("a")));

        assert_eq!(registry.cancel_all(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_replace_aborts_previous() {
        let mut registry = TaskRegistry::new();
        let (_f1, first) = abortable(async {});
        let (_f2, second) = abortable(async {});
        let probe = first.clone();

        registry.insert(FileId::from("x"), first);
        registry.insert(FileId::from("x"), second);
        assert!(probe.is_aborted());
        assert_eq!(registry.len(), 1);

        registry.finish(&FileId::from("x"));
        assert!(!registry.contains(&FileId::from("x")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_runtime_aborted_task_never_runs() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let runtime = TokioRuntime;
                let fired = Rc::new(Cell::new(false));

                let flag = fired.clone();
                let sleep = runtime.sleep(Duration::from_secs(1));
                let (task, handle) = abortable(async move {
                    sleep.await;
                    flag.set(true);
                });
                runtime.spawn(Box::pin(async move {
                    let _: Result<(), Aborted> = task.await;
                }));

                handle.abort();
                tokio::time::sleep(Duration::from_secs(2)).await;
                assert!(!fired.get());
            })
            .await;
    }
}
