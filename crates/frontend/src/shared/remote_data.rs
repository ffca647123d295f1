//! Page-local state of a view that shows the result of one backend call.
//!
//! A remote view holds an optional result and a loading flag. A call
//! replaces the result on success, leaves it untouched on failure (the
//! error is only logged) and clears the loading flag either way.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::fmt::Display;
use std::future::Future;

/// Pure state of a remote view
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteState<T> {
    result: Option<T>,
    loading: bool,
}

impl<T> Default for RemoteState<T> {
    fn default() -> Self {
        Self {
            result: None,
            loading: false,
        }
    }
}

impl<T> RemoteState<T> {
    /// State that renders `initial` until the first successful call
    pub fn with_result(initial: T) -> Self {
        Self {
            result: Some(initial),
            loading: false,
        }
    }

    /// Marks a call as started. Returns `false` if one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Applies the outcome of the call started by [`begin`](Self::begin)
    pub fn finish<E: Display>(&mut self, label: &str, outcome: Result<T, E>) {
        match outcome {
            Ok(value) => self.result = Some(value),
            Err(e) => log::error!("Failed to {}: {}", label, e),
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }
}

/// Reactive wrapper over [`RemoteState`] owned by a page component
pub struct RemoteView<T> {
    state: RwSignal<RemoteState<T>>,
}

impl<T> Clone for RemoteView<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RemoteView<T> {}

impl<T: Clone + Send + Sync + 'static> RemoteView<T> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(RemoteState::default()),
        }
    }

    pub fn with_result(initial: T) -> Self {
        Self {
            state: RwSignal::new(RemoteState::with_result(initial)),
        }
    }

    /// Reactive loading flag
    pub fn loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    /// Reactive copy of the current result
    pub fn result(&self) -> Option<T> {
        self.state.with(|s| s.result().cloned())
    }

    /// Issues `request` unless a call is already in flight.
    ///
    /// The outcome is dropped if the owning page was unmounted meanwhile.
    pub fn run<F, E>(&self, label: &'static str, request: F)
    where
        F: Future<Output = Result<T, E>> + 'static,
        E: Display + 'static,
    {
        let started = self.state.try_update(|s| s.begin()).unwrap_or(false);
        if !started {
            log::debug!("{}: request already in flight, ignoring", label);
            return;
        }

        let state = self.state;
        spawn_local(async move {
            let outcome = request.await;
            if state.try_update(|s| s.finish(label, outcome)).is_none() {
                log::debug!("{}: view closed before the response arrived", label);
            }
        });
    }
}

impl<T: Clone + Send + Sync + 'static> Default for RemoteView<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_toggles_around_success() {
        let mut state = RemoteState::<u32>::default();
        assert!(!state.is_loading());

        assert!(state.begin());
        assert!(state.is_loading());

        state.finish("load", Ok::<_, String>(7));
        assert!(!state.is_loading());
        assert_eq!(state.result(), Some(&7));
    }

    #[test]
    fn test_failure_keeps_previous_result() {
        let mut state = RemoteState::with_result("first".to_string());

        assert!(state.begin());
        state.finish("load", Err::<String, _>("HTTP error: 500"));

        assert!(!state.is_loading());
        assert_eq!(state.result().map(String::as_str), Some("first"));
    }

    #[test]
    fn test_failure_without_result_stays_empty() {
        let mut state = RemoteState::<u32>::default();
        state.begin();
        state.finish("load", Err::<u32, _>("network down"));
        assert!(!state.has_result());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_second_begin_is_refused_while_loading() {
        let mut state = RemoteState::<u32>::default();
        assert!(state.begin());
        assert!(!state.begin());

        state.finish("load", Ok::<_, String>(1));
        assert!(state.begin());
    }

    fn loading_of<T: Send + Sync + 'static>(view: RemoteView<T>) -> bool {
        view.state.with_untracked(|s| s.is_loading())
    }

    #[test]
    fn test_run_refuses_overlap_and_drops_late_response() {
        use any_spawner::Executor;
        use futures::channel::oneshot;
        use std::cell::Cell;
        use std::rc::Rc;

        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        let view = owner.with(RemoteView::<u32>::new);

        let (tx, rx) = oneshot::channel::<u32>();
        view.run("load", rx);
        Executor::poll_local();
        assert!(loading_of(view));

        // a second call while the first is pending never starts
        let started = Rc::new(Cell::new(false));
        let flag = started.clone();
        view.run("load", async move {
            flag.set(true);
            Ok::<u32, String>(1)
        });
        Executor::poll_local();
        assert!(!started.get());
        assert!(loading_of(view));

        let _ = tx.send(5);
        Executor::poll_local();
        assert_eq!(view.state.with_untracked(|s| s.result().copied()), Some(5));
        assert!(!loading_of(view));

        // response after the owning page is gone is ignored
        let (late_tx, late_rx) = oneshot::channel::<u32>();
        view.run("load", late_rx);
        owner.cleanup();
        drop(owner);
        let _ = late_tx.send(6);
        Executor::poll_local();
    }

    #[test]
    fn test_success_replaces_result() {
        let mut state = RemoteState::with_result(1u32);
        state.begin();
        state.finish("load", Ok::<_, String>(2));
        assert_eq!(state.result(), Some(&2));
    }
}
