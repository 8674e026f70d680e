//! Login prompt trigger and modal state
//!
//! [`LoginPromptTrigger`] is a single-slot notification channel: whichever part
//! of the application owns the login modal registers one handler, and any
//! other part asks for the prompt by calling [`LoginPromptTrigger::trigger`].
//! Registering again replaces the previous handler. Triggering with nothing
//! registered does nothing.
//!
//! [`LoginModal`] is the state the registered handler usually drives.

use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Callback stored in the trigger slot.
pub type LoginHandler = Arc<dyn Fn() + Send + Sync>;

/// Single-slot "show login" notifier
#[derive(Default)]
pub struct LoginPromptTrigger {
    slot: Mutex<Option<LoginHandler>>,
}

impl fmt::Debug for LoginPromptTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginPromptTrigger")
            .field("registered", &self.is_registered())
            .finish()
    }
}

impl LoginPromptTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handler`, silently replacing any previously registered one.
    pub fn register<F>(&self, handler: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::new(handler));
    }

    /// Invoke the registered handler, if any.
    ///
    /// The lock is released before the handler runs, so a handler may call
    /// [`register`](Self::register) on the same trigger.
    pub fn trigger(&self) {
        let handler = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if let Some(handler) = handler {
            handler();
        }
    }

    pub fn is_registered(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

/// Whether the login modal is showing
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Result of answering the login modal
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "outcome", content = "path", rename_all = "lowercase")]
pub enum ModalOutcome {
    /// The user agreed to log in; navigate to this path.
    Navigate(String),
    Dismissed,
}

/// Login modal asking the user to sign in before continuing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginModal {
    state: ModalState,
    login_path: String,
}

impl LoginModal {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            state: ModalState::Closed,
            login_path: login_path.into(),
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn open(&mut self) {
        self.state = ModalState::Open;
    }

    /// Close the modal and request navigation to the login page.
    ///
    /// Returns `None` when the modal is not open.
    pub fn confirm(&mut self) -> Option<ModalOutcome> {
        if !self.is_open() {
            return None;
        }
        self.state = ModalState::Closed;
        Some(ModalOutcome::Navigate(self.login_path.clone()))
    }

    /// Close the modal without navigating.
    ///
    /// Returns `None` when the modal is not open.
    pub fn cancel(&mut self) -> Option<ModalOutcome> {
        if !self.is_open() {
            return None;
        }
        self.state = ModalState::Closed;
        Some(ModalOutcome::Dismissed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    // ============================================================================
    // LoginPromptTrigger tests
    // ============================================================================

    #[test]
    fn test_trigger_without_handler_is_noop() {
        let trigger = LoginPromptTrigger::new();
        assert!(!trigger.is_registered());
        trigger.trigger();
        assert!(!trigger.is_registered());
    }

    #[test]
    fn test_trigger_invokes_registered_handler() {
        let trigger = LoginPromptTrigger::new();
        let calls = counter();
        let seen = Arc::clone(&calls);
        trigger.register(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        trigger.trigger();
        trigger.trigger();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_latest_registration_wins() {
        let trigger = LoginPromptTrigger::new();
        let first = counter();
        let second = counter();

        let h1 = Arc::clone(&first);
        trigger.register(move || {
            h1.fetch_add(1, Ordering::SeqCst);
        });
        let h2 = Arc::clone(&second);
        trigger.register(move || {
            h2.fetch_add(1, Ordering::SeqCst);
        });

        trigger.trigger();
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_instances_are_isolated() {
        let a = LoginPromptTrigger::new();
        let b = LoginPromptTrigger::new();
        let calls = counter();
        let seen = Arc::clone(&calls);
        a.register(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        b.trigger();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!b.is_registered());
    }

    #[test]
    fn test_handler_may_reregister() {
        let trigger = Arc::new(LoginPromptTrigger::new());
        let calls = counter();

        let inner_trigger = Arc::clone(&trigger);
        let inner_calls = Arc::clone(&calls);
        trigger.register(move || {
            let seen = Arc::clone(&inner_calls);
            inner_trigger.register(move || {
                seen.fetch_add(10, Ordering::SeqCst);
            });
        });

        trigger.trigger();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        trigger.trigger();
        assert_eq!(calls.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn test_concurrent_registrations_leave_exactly_one_handler() {
        let trigger = Arc::new(LoginPromptTrigger::new());
        let counters: Vec<Arc<AtomicUsize>> = (0..8).map(|_| counter()).collect();
        let barrier = Arc::new(std::sync::Barrier::new(counters.len()));

        let handles: Vec<_> = counters
            .iter()
            .map(|calls| {
                let trigger = Arc::clone(&trigger);
                let barrier = Arc::clone(&barrier);
                let seen = Arc::clone(calls);
                std::thread::spawn(move || {
                    barrier.wait();
                    trigger.register(move || {
                        seen.fetch_add(1, Ordering::SeqCst);
                    });
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        trigger.trigger();
        let fired: Vec<usize> = counters.iter().map(|c| c.load(Ordering::SeqCst)).collect();
        assert_eq!(fired.iter().sum::<usize>(), 1);
        assert_eq!(fired.iter().filter(|&&n| n == 1).count(), 1);

        let last = counter();
        let seen = Arc::clone(&last);
        trigger.register(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        trigger.trigger();
        assert_eq!(last.load(Ordering::SeqCst), 1);
        let total: usize = counters.iter().map(|c| c.load(Ordering::SeqCst)).sum();
        assert_eq!(total, 1);
    }

    // ============================================================================
    // LoginModal tests
    // ============================================================================

    #[test]
    fn test_modal_starts_closed() {
        let modal = LoginModal::new("/login");
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn test_modal_confirm_navigates_to_login() {
        let mut modal = LoginModal::new("/login");
        modal.open();
        assert!(modal.is_open());
        assert_eq!(
            modal.confirm(),
            Some(ModalOutcome::Navigate("/login".to_string()))
        );
        assert!(!modal.is_open());
    }

    #[test]
    fn test_modal_cancel_only_closes() {
        let mut modal = LoginModal::new("/account/login");
        modal.open();
        assert_eq!(modal.cancel(), Some(ModalOutcome::Dismissed));
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn test_modal_answers_ignored_when_closed() {
        let mut modal = LoginModal::new("/login");
        assert_eq!(modal.confirm(), None);
        assert_eq!(modal.cancel(), None);
    }

    #[test]
    fn test_trigger_opens_modal() {
        let trigger = LoginPromptTrigger::new();
        let modal = Arc::new(Mutex::new(LoginModal::new("/login")));

        let handle = Arc::clone(&modal);
        trigger.register(move || handle.lock().unwrap().open());
        trigger.trigger();

        assert!(modal.lock().unwrap().is_open());
    }
}
