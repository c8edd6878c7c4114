//! Login form field validation and submission gating.
//!
//! DESIGN
//! ======
//! Each field runs its rules in a fixed order on every change and keeps only
//! the first violation, so the displayed message is always a function of that
//! one violation. Submission may temporarily replace a field message with a
//! submit-specific variant; the next edit restores the derived message.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use validator::ValidateEmail;

use crate::net::gateway::AuthError;
use crate::net::types::{Credentials, User};
use crate::util::auth::Destination;

pub const REQUIRED_MESSAGE: &str = "You must enter a value";
pub const INVALID_EMAIL_MESSAGE: &str = "Not a valid email";
pub const EMAIL_SUBMIT_MESSAGE: &str = "Please enter a valid email before logging in.";
pub const PASSWORD_SUBMIT_MESSAGE: &str = "Please enter your password before logging in.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials and try again.";

const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];
const PASSWORD_RULES: &[Rule] = &[Rule::Required];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming.
    Required,
    /// Syntactically valid email address. Empty input is left to `Required`.
    Email,
}

impl Rule {
    fn is_violated_by(self, value: &str) -> bool {
        match self {
            Self::Required => value.trim().is_empty(),
            Self::Email => !value.is_empty() && !value.validate_email(),
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Required => REQUIRED_MESSAGE,
            Self::Email => INVALID_EMAIL_MESSAGE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not evaluated yet.
    #[default]
    Pristine,
    Valid,
    Invalid(Rule),
}

impl FieldStatus {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Pristine | Self::Valid => "",
            Self::Invalid(rule) => rule.message(),
        }
    }
}

/// Evaluate `rules` in order against `value`, stopping at the first failure.
#[must_use]
pub fn validate(rules: &[Rule], value: &str) -> FieldStatus {
    rules
        .iter()
        .copied()
        .find(|rule| rule.is_violated_by(value))
        .map_or(FieldStatus::Valid, FieldStatus::Invalid)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    value: String,
    rules: &'static [Rule],
    status: FieldStatus,
    submit_message: Option<&'static str>,
}

impl Field {
    #[must_use]
    pub fn new(rules: &'static [Rule]) -> Self {
        Self { value: String::new(), rules, status: FieldStatus::Pristine, submit_message: None }
    }

    #[must_use]
    pub fn email() -> Self {
        Self::new(EMAIL_RULES)
    }

    #[must_use]
    pub fn password() -> Self {
        Self::new(PASSWORD_RULES)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn status(&self) -> FieldStatus {
        self.status
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self.status, FieldStatus::Invalid(_))
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.submit_message.unwrap_or_else(|| self.status.message())
    }

    /// Value-change event.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.validate();
    }

    /// Re-run the rules against the current value.
    pub fn validate(&mut self) {
        self.status = validate(self.rules, &self.value);
        self.submit_message = None;
    }

    fn flag_on_submit(&mut self, message: &'static str) {
        self.submit_message = Some(message);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    InvalidEmail,
    InvalidPassword,
    /// A previous submission has not finished yet.
    InFlight,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub email: Field,
    pub password: Field,
    error_login: String,
    busy: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self { email: Field::email(), password: Field::password(), error_login: String::new(), busy: false }
    }

    /// Top-level message for a failed login; field messages are separate.
    #[must_use]
    pub fn error_login(&self) -> &str {
        &self.error_login
    }

    #[must_use]
    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Gate a submission. On success the form is marked busy and the
    /// credentials are ready to send; on failure nothing must be sent.
    ///
    /// # Errors
    ///
    /// Returns which check blocked the submission.
    pub fn begin_submit(&mut self) -> Result<Credentials, SubmitBlocked> {
        if self.busy {
            return Err(SubmitBlocked::InFlight);
        }
        self.email.validate();
        self.password.validate();
        if self.email.is_invalid() {
            self.email.flag_on_submit(EMAIL_SUBMIT_MESSAGE);
            return Err(SubmitBlocked::InvalidEmail);
        }
        if self.password.is_invalid() {
            self.password.flag_on_submit(PASSWORD_SUBMIT_MESSAGE);
            return Err(SubmitBlocked::InvalidPassword);
        }
        self.error_login.clear();
        self.busy = true;
        Ok(Credentials { email: self.email.value.clone(), password: self.password.value.clone() })
    }

    /// Record the gateway result. Returns where to navigate, if anywhere.
    pub fn finish_submit(&mut self, result: &Result<User, AuthError>) -> Option<Destination> {
        self.busy = false;
        match result {
            Ok(_) => Some(Destination::Home),
            Err(AuthError::Superseded) => None,
            Err(_) => {
                self.error_login = LOGIN_FAILED_MESSAGE.to_owned();
                None
            }
        }
    }
}
