//! Typed form payloads for the user pages.
//!
//! Browsers submit `application/x-www-form-urlencoded` bodies; these types
//! give that input an explicit shape instead of reading fields dynamically.
//! A raw [`UserForm`] converts into either a fully validated [`UserDraft`]
//! (create) or a field-wise [`UserChanges`] (update), so handlers never see
//! unvalidated strings.

use std::fmt;

use serde::Deserialize;

use crate::domain::{EmailAddress, UserChanges, UserDraft, UserName};

/// Raw form fields as submitted by the list and edit pages.
///
/// Both fields are optional at the transport level; presence and
/// non-emptiness are decided by the conversions below.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserForm {
    /// Submitted `name` field, if any.
    pub name: Option<String>,
    /// Submitted `email` field, if any.
    pub email: Option<String>,
}

/// Structured validation failure for the create path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormValidationError {
    /// `name` was missing, empty, or whitespace only.
    MissingName,
    /// `email` was missing, empty, or whitespace only.
    MissingEmail,
}

impl fmt::Display for FormValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "form field 'name' must be present and non-empty"),
            Self::MissingEmail => write!(f, "form field 'email' must be present and non-empty"),
        }
    }
}

impl std::error::Error for FormValidationError {}

/// Collapse absent and blank submissions into `None`.
fn normalise(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl UserForm {
    /// Validate the form as input for creating a user.
    ///
    /// Both fields must be present and non-empty.
    pub fn try_into_draft(self) -> Result<UserDraft, FormValidationError> {
        let Self { name, email } = self;
        let name = normalise(name)
            .and_then(|raw| UserName::new(raw).ok())
            .ok_or(FormValidationError::MissingName)?;
        let email = normalise(email)
            .and_then(|raw| EmailAddress::new(raw).ok())
            .ok_or(FormValidationError::MissingEmail)?;
        Ok(UserDraft::new(name, email))
    }

    /// Interpret the form as a partial update.
    ///
    /// Absent or blank fields become "keep the stored value"; this is what
    /// makes the update endpoint field-wise partial.
    pub fn into_changes(self) -> UserChanges {
        let Self { name, email } = self;
        UserChanges::new(
            normalise(name).and_then(|raw| UserName::new(raw).ok()),
            normalise(email).and_then(|raw| EmailAddress::new(raw).ok()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn form(name: Option<&str>, email: Option<&str>) -> UserForm {
        UserForm {
            name: name.map(str::to_owned),
            email: email.map(str::to_owned),
        }
    }

    #[rstest]
    fn draft_requires_both_fields() {
        let draft = form(Some("alice"), Some("alice@x.com"))
            .try_into_draft()
            .expect("valid form");
        assert_eq!(draft.name().as_ref(), "alice");
        assert_eq!(draft.email().as_ref(), "alice@x.com");
    }

    #[rstest]
    #[case(form(None, Some("a@x.com")), FormValidationError::MissingName)]
    #[case(form(Some(""), Some("a@x.com")), FormValidationError::MissingName)]
    #[case(form(Some("   "), Some("a@x.com")), FormValidationError::MissingName)]
    #[case(form(Some("alice"), None), FormValidationError::MissingEmail)]
    #[case(form(Some("alice"), Some("")), FormValidationError::MissingEmail)]
    fn draft_rejects_missing_or_blank_fields(
        #[case] input: UserForm,
        #[case] expected: FormValidationError,
    ) {
        assert_eq!(input.try_into_draft(), Err(expected));
    }

    #[rstest]
    fn changes_keep_omitted_fields() {
        let changes = form(Some("alice2"), None).into_changes();
        assert!(!changes.is_empty());

        let both_blank = form(Some(""), Some("  ")).into_changes();
        assert!(both_blank.is_empty());
    }
}
