//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered by both lanes.
//! - Provide lane helpers (`toggled`, stable lane keys) and field rules.
//!
//! # Invariants
//! - `id` is assigned by the store, strictly increasing and never reused.
//! - `status` is mutated only through `ProjectStore::change_status`.
//! - Values handed out of the store are copies, never live aliases.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned project identifier.
pub type ProjectId = u32;

/// Minimum description length accepted by the input form.
pub const DESCRIPTION_MIN_LEN: usize = 5;
/// Inclusive lower bound for assigned people.
pub const PEOPLE_MIN: u32 = 1;
/// Inclusive upper bound for assigned people.
pub const PEOPLE_MAX: u32 = 5;

/// Lane a project currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work in progress; rendered by the active lane.
    Active,
    /// Completed work; rendered by the finished lane.
    Finished,
}

impl ProjectStatus {
    /// Stable lane key used in element ids and at the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Returns the opposite lane.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Finished,
            Self::Finished => Self::Active,
        }
    }

    /// Parses a lane key (`active|finished`), ignoring surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, ProjectStatusError> {
        match value.trim() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            other => Err(ProjectStatusError(other.to_string())),
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown lane key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStatusError(pub String);

impl Display for ProjectStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported project status `{}`; expected active|finished",
            self.0
        )
    }
}

impl Error for ProjectStatusError {}

/// Field rule violations for a project record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyTitle,
    DescriptionTooShort { len: usize },
    PeopleOutOfRange { people: u32 },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::DescriptionTooShort { len } => write!(
                f,
                "description must have at least {DESCRIPTION_MIN_LEN} characters, got {len}"
            ),
            Self::PeopleOutOfRange { people } => write!(
                f,
                "people must be within {PEOPLE_MIN}..={PEOPLE_MAX}, got {people}"
            ),
        }
    }
}

impl Error for ProjectValidationError {}

/// One tracked unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned.
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates an active project. Identity comes from the store.
    pub fn new(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Human label for the assigned-people line (`1 person`, `3 persons`).
    pub fn persons_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }

    /// Checks the field rules enforced upstream by the input form.
    ///
    /// The store never calls this; it trusts its callers.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle);
        }
        let len = self.description.chars().count();
        if self.description.trim().is_empty() || len < DESCRIPTION_MIN_LEN {
            return Err(ProjectValidationError::DescriptionTooShort { len });
        }
        if !(PEOPLE_MIN..=PEOPLE_MAX).contains(&self.people) {
            return Err(ProjectValidationError::PeopleOutOfRange {
                people: self.people,
            });
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectStatus, ProjectStatusError, ProjectValidationError};

    #[test]
    fn toggled_flips_lane() {
        assert_eq!(ProjectStatus::Active.toggled(), ProjectStatus::Finished);
        assert_eq!(ProjectStatus::Finished.toggled(), ProjectStatus::Active);
    }

    #[test]
    fn parse_accepts_lane_keys_and_rejects_others() {
        assert_eq!(
            ProjectStatus::parse(" finished ").expect("finished should parse"),
            ProjectStatus::Finished
        );
        let err = ProjectStatus::parse("Done").expect_err("unknown lane must fail");
        assert_eq!(err, ProjectStatusError("Done".to_string()));
    }

    #[test]
    fn persons_label_handles_singular() {
        let mut project = Project::new(1, "t", "desc!", 1);
        assert_eq!(project.persons_label(), "1 person");
        project.people = 4;
        assert_eq!(project.persons_label(), "4 persons");
    }

    #[test]
    fn validate_reports_first_broken_rule() {
        let project = Project::new(1, "  ", "long enough", 2);
        assert_eq!(
            project.validate().unwrap_err(),
            ProjectValidationError::EmptyTitle
        );

        let project = Project::new(1, "title", "abcd", 2);
        assert_eq!(
            project.validate().unwrap_err(),
            ProjectValidationError::DescriptionTooShort { len: 4 }
        );

        let project = Project::new(1, "title", "abcde", 6);
        assert_eq!(
            project.validate().unwrap_err(),
            ProjectValidationError::PeopleOutOfRange { people: 6 }
        );

        assert!(Project::new(1, "title", "abcde", 5).validate().is_ok());
    }
}
