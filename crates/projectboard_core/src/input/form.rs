//! Project input form.

use crate::input::validation::{validate, Validatable};
use crate::model::project::{Project, DESCRIPTION_MIN_LEN, PEOPLE_MAX, PEOPLE_MIN};
use crate::state::store::ProjectStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message shown to the user when a submission is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input, please try again!";

/// Which form field broke its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Title,
    Description,
    People,
}

impl InputField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Submission rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Invalid(InputField),
}

impl InputError {
    pub fn field(&self) -> InputField {
        match self {
            Self::Invalid(field) => *field,
        }
    }
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(_) => f.write_str(INVALID_INPUT_MESSAGE),
        }
    }
}

impl Error for InputError {}

/// Validated form values, ready for `ProjectStore::create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Raw form field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl ProjectInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all three fields at once.
    pub fn fill(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.people = people.into();
    }

    /// Validates the fields and returns the parsed draft.
    ///
    /// # Errors
    /// - `InputError::Invalid(field)` for the first field that breaks its rule.
    pub fn gather(&self) -> Result<ProjectDraft, InputError> {
        let title = Validatable::text(self.title.as_str()).required();
        if !validate(&title) {
            return Err(InputError::Invalid(InputField::Title));
        }

        let description = Validatable::text(self.description.as_str())
            .required()
            .min_length(DESCRIPTION_MIN_LEN);
        if !validate(&description) {
            return Err(InputError::Invalid(InputField::Description));
        }

        let people_value = parse_people(&self.people);
        let people = Validatable::number(people_value)
            .required()
            .min(f64::from(PEOPLE_MIN))
            .max(f64::from(PEOPLE_MAX));
        if !validate(&people) || people_value.fract() != 0.0 {
            return Err(InputError::Invalid(InputField::People));
        }

        Ok(ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            // In range and integral, checked above.
            people: people_value as u32,
        })
    }

    /// Validates, creates the project and clears the form.
    ///
    /// On failure the fields are left as typed and the store is not touched.
    pub fn submit(&mut self, store: &mut ProjectStore) -> Result<Project, InputError> {
        let draft = self.gather().map_err(|err| {
            warn!(
                "event=input_rejected module=input status=error field={}",
                err.field().as_str()
            );
            err
        })?;

        let project = store.create(draft.title, draft.description, draft.people);
        info!(
            "event=input_submit module=input status=ok id={}",
            project.id
        );
        self.clear();
        Ok(project)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

/// Blank input reads as zero; anything non-numeric reads as NaN.
fn parse_people(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
