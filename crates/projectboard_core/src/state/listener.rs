//! Snapshot listener contract and in-process registry.

use crate::model::project::Project;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Failure reported by one listener while handling a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerError {
    pub message: String,
}

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for ListenerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener failed: {}", self.message)
    }
}

impl Error for ListenerError {}

pub type ListenerResult = Result<(), ListenerError>;

/// Receiver of full project snapshots.
///
/// Each call gets its own copy, so implementors may keep or mutate it freely.
pub trait ProjectListener: Send + Sync {
    fn on_snapshot(&self, projects: Vec<Project>) -> ListenerResult;
}

impl<F> ProjectListener for F
where
    F: Fn(Vec<Project>) -> ListenerResult + Send + Sync,
{
    fn on_snapshot(&self, projects: Vec<Project>) -> ListenerResult {
        self(projects)
    }
}

/// Outcome of one snapshot fan-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Listeners that accepted the snapshot.
    pub delivered: usize,
    /// Listeners that returned an error; later listeners were still called.
    pub failed: usize,
}

impl BroadcastReport {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Ordered listener list. No deduplication, no removal.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<Arc<dyn ProjectListener>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, listener: Arc<dyn ProjectListener>) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Delivers a fresh copy of `projects` to every listener in registration order.
    ///
    /// A listener error is logged and counted; it never stops the fan-out.
    pub fn broadcast(&self, projects: &[Project]) -> BroadcastReport {
        let mut report = BroadcastReport::default();
        for (index, listener) in self.listeners.iter().enumerate() {
            match listener.on_snapshot(projects.to_vec()) {
                Ok(()) => report.delivered += 1,
                Err(err) => {
                    report.failed += 1;
                    warn!(
                        "event=listener_failed module=store status=error index={} error={}",
                        index, err
                    );
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::{ListenerError, ListenerRegistry, ListenerResult};
    use crate::model::project::Project;
    use std::sync::{Arc, Mutex};

    #[test]
    fn broadcast_calls_listeners_in_registration_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ListenerRegistry::new();
        for name in ["first", "second", "third"] {
            let calls = Arc::clone(&calls);
            registry.register(Arc::new(move |_: Vec<Project>| -> ListenerResult {
                calls.lock().unwrap().push(name);
                Ok(())
            }));
        }

        let report = registry.broadcast(&[]);
        assert_eq!(report.delivered, 3);
        assert!(report.is_clean());
        assert_eq!(*calls.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn failing_listener_does_not_stop_later_listeners() {
        let reached = Arc::new(Mutex::new(false));
        let mut registry = ListenerRegistry::new();
        registry.register(Arc::new(|_: Vec<Project>| -> ListenerResult {
            Err(ListenerError::new("render target missing"))
        }));
        let flag = Arc::clone(&reached);
        registry.register(Arc::new(move |_: Vec<Project>| -> ListenerResult {
            *flag.lock().unwrap() = true;
            Ok(())
        }));

        let report = registry.broadcast(&[Project::new(1, "t", "descr", 1)]);
        assert_eq!(report.failed, 1);
        assert_eq!(report.delivered, 1);
        assert!(*reached.lock().unwrap());
    }

    #[test]
    fn same_listener_may_register_twice() {
        let count = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&count);
        let listener: Arc<dyn super::ProjectListener> =
            Arc::new(move |_: Vec<Project>| -> ListenerResult {
                *counter.lock().unwrap() += 1;
                Ok(())
            });
        let mut registry = ListenerRegistry::new();
        registry.register(Arc::clone(&listener));
        registry.register(listener);

        registry.broadcast(&[]);
        assert_eq!(registry.len(), 2);
        assert_eq!(*count.lock().unwrap(), 2);
    }
}
