//! Declarative field rules.

/// Raw value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatableValue {
    Text(String),
    Number(f64),
}

impl ValidatableValue {
    fn is_blank(&self) -> bool {
        match self {
            Self::Text(value) => value.trim().is_empty(),
            Self::Number(_) => false,
        }
    }
}

/// A value plus the constraints it must satisfy. Absent constraints are skipped.
///
/// Length bounds apply only to text; numeric bounds apply only to numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: ValidatableValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    pub fn text(value: impl Into<String>) -> Self {
        Self::with_value(ValidatableValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::with_value(ValidatableValue::Number(value))
    }

    fn with_value(value: ValidatableValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns whether `input` satisfies every constraint it declares.
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        is_valid = is_valid && !input.value.is_blank();
    }
    if let ValidatableValue::Text(value) = &input.value {
        let len = value.chars().count();
        if let Some(min_length) = input.min_length {
            is_valid = is_valid && len >= min_length;
        }
        if let Some(max_length) = input.max_length {
            is_valid = is_valid && len <= max_length;
        }
    }
    if let ValidatableValue::Number(value) = input.value {
        // NaN fails both comparisons, so non-numeric form input never passes a bound.
        if let Some(min) = input.min {
            is_valid = is_valid && value >= min;
        }
        if let Some(max) = input.max {
            is_valid = is_valid && value <= max;
        }
    }
    is_valid
}

#[cfg(test)]
mod tests {
    use super::{validate, Validatable};

    #[test]
    fn required_rejects_blank_text() {
        assert!(!validate(&Validatable::text("   ").required()));
        assert!(validate(&Validatable::text("x").required()));
        assert!(validate(&Validatable::text("").min_length(0)));
    }

    #[test]
    fn length_bounds_count_characters() {
        let rule = |value: &str| Validatable::text(value).min_length(5).max_length(6);
        assert!(!validate(&rule("abcd")));
        assert!(validate(&rule("ééééé")));
        assert!(!validate(&rule("abcdefg")));
    }

    #[test]
    fn numeric_bounds_are_inclusive() {
        let rule = |value: f64| Validatable::number(value).required().min(1.0).max(5.0);
        assert!(!validate(&rule(0.0)));
        assert!(validate(&rule(1.0)));
        assert!(validate(&rule(5.0)));
        assert!(!validate(&rule(5.5)));
        assert!(!validate(&rule(f64::NAN)));
    }

    #[test]
    fn length_bounds_ignore_numbers_and_numeric_bounds_ignore_text() {
        assert!(validate(&Validatable::number(2.0).min_length(10)));
        assert!(validate(&Validatable::text("9").max(1.0)));
    }
}
