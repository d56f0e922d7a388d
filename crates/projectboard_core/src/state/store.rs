//! Project store: single source of truth for board state.
//!
//! # Responsibility
//! - Assign project identity and keep the ordered collection.
//! - Apply status transitions and broadcast the resulting snapshot.
//!
//! # Invariants
//! - Ids start at 1, strictly increase and are never reused.
//! - Ids already held by the collection (the seed record) are skipped.
//! - Exactly one broadcast per `create` and per effective `change_status`.
//! - Missing-id and same-status transitions are silent no-ops.
//! - Mutation requires `&mut self`; cross-thread sharing needs an outer lock.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::listener::{BroadcastReport, ListenerRegistry, ProjectListener};
use log::{debug, info};
use std::sync::Arc;

/// Id of the demo record present in a seeded store.
pub const SEED_PROJECT_ID: ProjectId = 999;

const FIRST_PROJECT_ID: ProjectId = 1;

/// Result of a status transition request.
///
/// Neither `NotFound` nor `Unchanged` is an error: drop targets cannot
/// guarantee the dragged id still exists, and re-dropping into the same lane
/// is routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    Changed {
        from: ProjectStatus,
        to: ProjectStatus,
    },
    Unchanged,
    NotFound,
}

impl StatusChange {
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// In-memory project store with snapshot fan-out.
pub struct ProjectStore {
    projects: Vec<Project>,
    next_id: ProjectId,
    listeners: ListenerRegistry,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            next_id: FIRST_PROJECT_ID,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Creates a store holding the single demo record (id 999, active).
    ///
    /// The id counter is unaffected, so the first created project still gets id 1.
    /// `create` steps over the seed id when the counter reaches it.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.projects.push(Project::new(
            SEED_PROJECT_ID,
            "Test Project",
            "This is a test project",
            1,
        ));
        store
    }

    /// Creates an active project, broadcasts, and returns a copy of it.
    ///
    /// Inputs are trusted; validation belongs to the input form.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Project {
        let id = self.next_id;
        self.advance_next_id();

        let project = Project::new(id, title, description, people);
        self.projects.push(project.clone());

        let report = self.broadcast();
        info!(
            "event=project_create module=store status=ok id={} listeners={} failed={}",
            id, report.delivered, report.failed
        );
        project
    }

    /// Moves a project to `new_status`.
    ///
    /// Broadcasts only when the status actually changed.
    pub fn change_status(&mut self, id: ProjectId, new_status: ProjectStatus) -> StatusChange {
        let Some(project) = self.projects.iter_mut().find(|project| project.id == id) else {
            debug!(
                "event=project_status module=store status=noop reason=not_found id={}",
                id
            );
            return StatusChange::NotFound;
        };
        if project.status == new_status {
            debug!(
                "event=project_status module=store status=noop reason=unchanged id={} lane={}",
                id, new_status
            );
            return StatusChange::Unchanged;
        }

        let from = project.status;
        project.status = new_status;

        let report = self.broadcast();
        info!(
            "event=project_status module=store status=ok id={} from={} to={} listeners={} failed={}",
            id, from, new_status, report.delivered, report.failed
        );
        StatusChange::Changed {
            from,
            to: new_status,
        }
    }

    /// Registers a snapshot listener. Listeners live as long as the store.
    pub fn subscribe(&mut self, listener: Arc<dyn ProjectListener>) {
        self.listeners.register(listener);
    }

    /// Broadcasts the current snapshot without mutating anything.
    pub fn notify_all(&self) -> BroadcastReport {
        let report = self.broadcast();
        debug!(
            "event=notify_all module=store status=ok projects={} listeners={} failed={}",
            self.projects.len(),
            report.delivered,
            report.failed
        );
        report
    }

    /// Owned copy of the collection in creation order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn get(&self, id: ProjectId) -> Option<Project> {
        self.projects.iter().find(|project| project.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Id the next `create` call will assign.
    pub fn next_id(&self) -> ProjectId {
        self.next_id
    }

    fn advance_next_id(&mut self) {
        self.next_id += 1;
        while self.projects.iter().any(|project| project.id == self.next_id) {
            self.next_id += 1;
        }
    }

    fn broadcast(&self) -> BroadcastReport {
        self.listeners.broadcast(&self.projects)
    }
}
