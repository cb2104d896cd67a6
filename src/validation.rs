//! # Validation Policy
//!
//! Field rules for point-of-interest drafts. [`validate`] is pure: it never looks
//! at the catalog, so the store can call it on any candidate before committing.

use crate::model::PointOfInterestDraft;
use std::fmt::Display;

pub const NAME_MAX_LENGTH: usize = 50;
pub const DESCRIPTION_MAX_LENGTH: usize = 200;

/// The draft field a [`Violation`] is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Description,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Description => "Description",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single broken rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field name as it appears on the wire, e.g. `Description`.
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_for(&self, field: Field) -> bool {
        self.field == field.as_str()
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Checks a candidate against every rule and returns what it breaks.
///
/// An empty list means the candidate may be committed.
///
/// Lengths are counted in characters. A name made only of whitespace counts as
/// missing.
pub fn validate(candidate: &PointOfInterestDraft) -> Vec<Violation> {
    let mut violations = Vec::new();

    let name = candidate.name.as_str();
    if name.trim().is_empty() {
        violations.push(Violation::new(Field::Name.as_str(), "You should provide a name value."));
    } else if name.chars().count() > NAME_MAX_LENGTH {
        violations.push(too_long(Field::Name, NAME_MAX_LENGTH));
    }

    if let Some(description) = candidate.description.as_deref() {
        if description.chars().count() > DESCRIPTION_MAX_LENGTH {
            violations.push(too_long(Field::Description, DESCRIPTION_MAX_LENGTH));
        }
        if !description.is_empty() && description == name {
            violations.push(Violation::new(
                Field::Description.as_str(),
                "The provided description should be different from the name.",
            ));
        }
    }

    violations
}

fn too_long(field: Field, max: usize) -> Violation {
    Violation::new(
        field.as_str(),
        format!("The field {field} must be a string with a maximum length of '{max}'."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, description: Option<&str>) -> PointOfInterestDraft {
        PointOfInterestDraft::new(name, description)
    }

    #[test]
    fn test_valid_draft_has_no_violations() {
        assert!(validate(&draft("Central Park", Some("A big park"))).is_empty());
        assert!(validate(&draft("Central Park", None)).is_empty());
    }

    #[test]
    fn test_missing_name_is_required() {
        let violations = validate(&draft("", None));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].is_for(Field::Name));
        assert_eq!(violations[0].message, "You should provide a name value.");

        let violations = validate(&draft("   ", Some("desc")));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].is_for(Field::Name));
    }

    #[test]
    fn test_length_limits_are_inclusive() {
        let name = "n".repeat(NAME_MAX_LENGTH);
        let description = "d".repeat(DESCRIPTION_MAX_LENGTH);
        assert!(validate(&draft(&name, Some(&description))).is_empty());

        let name = "n".repeat(NAME_MAX_LENGTH + 1);
        let description = "d".repeat(DESCRIPTION_MAX_LENGTH + 1);
        let violations = validate(&draft(&name, Some(&description)));
        assert_eq!(violations.len(), 2);
        assert!(violations[0].is_for(Field::Name));
        assert!(violations[0].message.contains("'50'"));
        assert!(violations[1].is_for(Field::Description));
        assert!(violations[1].message.contains("'200'"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let name = "é".repeat(NAME_MAX_LENGTH);
        assert!(validate(&draft(&name, None)).is_empty());
    }

    #[test]
    fn test_name_equal_to_description_is_rejected_on_description() {
        let violations = validate(&draft("Dup", Some("Dup")));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].is_for(Field::Description));
        assert_eq!(
            violations[0].message,
            "The provided description should be different from the name."
        );
    }

    #[test]
    fn test_empty_description_is_not_compared() {
        assert!(validate(&draft("Dup", Some(""))).is_empty());
    }
}
