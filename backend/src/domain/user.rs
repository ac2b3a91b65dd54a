//! User data model.

use std::fmt;

/// Validation errors returned by the user field constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The identifier was zero or negative.
    InvalidId,
    /// The name was empty or whitespace only.
    EmptyName,
    /// The email was empty or whitespace only.
    EmptyEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "user id must be a positive integer"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier assigned by the database on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i32);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: i32) -> Result<Self, UserValidationError> {
        if id <= 0 {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Access the raw integer key.
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human readable name for the user.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

/// Contact email for the user.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace.
///
/// No format or uniqueness constraint is enforced; any further validation
/// belongs in this constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`] from owned input.
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Application user.
///
/// ## Invariants
/// - `id` is assigned once by the database and never changes.
/// - `name` and `email` are non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
}

impl User {
    /// Build a [`User`] from validated components.
    pub fn new(id: UserId, name: UserName, email: EmailAddress) -> Self {
        Self { id, name, email }
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Name shown on the list and edit pages.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Contact email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Return a copy with the given name.
    pub fn with_name(mut self, name: UserName) -> Self {
        self.name = name;
        self
    }

    /// Return a copy with the given email.
    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = email;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn user_id_rejects_non_positive(#[case] raw: i32) {
        assert_eq!(UserId::new(raw), Err(UserValidationError::InvalidId));
    }

    #[rstest]
    fn user_id_accepts_positive() {
        let id = UserId::new(7).expect("positive id");
        assert_eq!(id.as_i32(), 7);
        assert_eq!(id.to_string(), "7");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn user_name_rejects_blank(#[case] raw: &str) {
        assert_eq!(UserName::new(raw), Err(UserValidationError::EmptyName));
    }

    #[rstest]
    #[case("")]
    #[case("\t\n")]
    fn email_rejects_blank(#[case] raw: &str) {
        assert_eq!(EmailAddress::new(raw), Err(UserValidationError::EmptyEmail));
    }

    #[rstest]
    fn email_accepts_any_non_blank_text() {
        // Format is deliberately unconstrained.
        let email = EmailAddress::new("not-an-email").expect("non-blank email");
        assert_eq!(email.as_ref(), "not-an-email");
    }

    #[rstest]
    fn with_name_replaces_only_the_name() {
        let user = User::new(
            UserId::new(1).expect("id"),
            UserName::new("alice").expect("name"),
            EmailAddress::new("alice@x.com").expect("email"),
        );

        let renamed = user
            .clone()
            .with_name(UserName::new("alice2").expect("name"));
        assert_eq!(renamed.name().as_ref(), "alice2");
        assert_eq!(renamed.email(), user.email());
        assert_eq!(renamed.id(), user.id());
    }
}
