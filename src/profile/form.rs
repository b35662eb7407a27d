//! Edit-form draft and field validation for the profile screen.

use super::state::Profile;

/// Validation bounds for the name field.
const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;

/// A draft of the profile under edit, with per-field validation messages.
///
/// Owned exclusively by the `Editing`/`Saving` states and replaced
/// wholesale on every field-change event, never mutated in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub name_error: Option<String>,
    pub email_error: Option<String>,
}

impl ProfileForm {
    /// Seed a draft from a confirmed profile, with no pre-existing errors.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            name_error: None,
            email_error: None,
        }
    }

    /// Replace the name field and revalidate only that field.
    pub fn with_name(self, name: String) -> Self {
        let name_error = validate_name(&name);
        Self {
            name,
            name_error,
            ..self
        }
    }

    /// Replace the email field and revalidate only that field.
    pub fn with_email(self, email: String) -> Self {
        let email_error = validate_email(&email);
        Self {
            email,
            email_error,
            ..self
        }
    }

    /// Re-run validation on every field, surfacing all errors at once.
    ///
    /// Used on a failed submit attempt; while typing, only the changed
    /// field is validated.
    pub fn validated(self) -> Self {
        let name_error = validate_name(&self.name);
        let email_error = validate_email(&self.email);
        Self {
            name_error,
            email_error,
            ..self
        }
    }

    /// True if no field carries an error and no required field is blank.
    pub fn is_valid(&self) -> bool {
        self.name_error.is_none()
            && self.email_error.is_none()
            && !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
    }

    /// Build the record to persist by merging the draft into the original.
    pub fn merge_into(&self, original: &Profile) -> Profile {
        Profile {
            id: original.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Structural name check. Intentionally shallow.
pub fn validate_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Some("Name cannot be empty".to_string())
    } else if trimmed.chars().count() < NAME_MIN {
        Some(format!("Name must be at least {} characters", NAME_MIN))
    } else if trimmed.chars().count() > NAME_MAX {
        Some(format!("Name must be at most {} characters", NAME_MAX))
    } else {
        None
    }
}

/// Structural email check: non-blank and contains both `@` and `.`.
/// Not RFC validation.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        Some("Email cannot be empty".to_string())
    } else if !trimmed.contains('@') || !trimmed.contains('.') {
        Some("Email address is not valid".to_string())
    } else {
        None
    }
}
