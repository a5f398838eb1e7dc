use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum length of a trimmed message, in UTF-16 code units as a browser
/// counts `String.length`.
pub const MIN_MESSAGE_LEN: usize = 10;

// `\s` in a browser regex also covers U+FEFF
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field is empty")]
    EmptyField,
    #[error("value is not a valid email address")]
    InvalidFormat,
    #[error("message is too short")]
    TooShort,
}

impl FieldError {
    /// Inline text shown under `field` in the form.
    pub fn message(self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Name, _) => "Please enter your full name.",
            (Field::Email, FieldError::EmptyField) => "Please enter your email address.",
            (Field::Email, _) => "Please enter a valid email address.",
            (Field::Message, FieldError::EmptyField) => "Please enter your message.",
            (Field::Message, _) => "Message should be at least 10 characters.",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Checks every field independently, so one pass reports all failures.
    pub fn validate(&self) -> ValidationResult {
        ValidationResult {
            errors: FieldErrors {
                name: check_name(&self.name).err(),
                email: check_email(&self.email).err(),
                message: check_message(&self.message).err(),
            },
        }
    }

    pub fn validated(&self) -> Result<ValidSubmission, FieldErrors> {
        let result = self.validate();
        if result.is_valid() {
            Ok(ValidSubmission(self.clone()))
        } else {
            Err(result.errors)
        }
    }
}

/// A submission that passed every rule. Only `ContactSubmission::validated`
/// can build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission(ContactSubmission);

impl ValidSubmission {
    pub fn submission(&self) -> &ContactSubmission {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    /// Error text for `field`, or `""` when it passed.
    pub fn text(&self, field: Field) -> &'static str {
        self.get(field).map_or("", |err| err.message(field))
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: FieldErrors,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Trims the way a browser's `String.prototype.trim` does, which also strips
/// the byte order mark.
fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn check_name(name: &str) -> Result<(), FieldError> {
    if trim_input(name).is_empty() {
        return Err(FieldError::EmptyField);
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), FieldError> {
    let email = trim_input(email);
    if email.is_empty() {
        return Err(FieldError::EmptyField);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(FieldError::InvalidFormat);
    }
    Ok(())
}

fn check_message(message: &str) -> Result<(), FieldError> {
    let message = trim_input(message);
    if message.is_empty() {
        return Err(FieldError::EmptyField);
    }
    if message.encode_utf16().count() < MIN_MESSAGE_LEN {
        return Err(FieldError::TooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn empty_submission_reports_every_field() {
        let result = ContactSubmission::default().validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors.text(Field::Name), "Please enter your full name.");
        assert_eq!(result.errors.text(Field::Email), "Please enter your email address.");
        assert_eq!(result.errors.text(Field::Message), "Please enter your message.");
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let result = submission("  \t", "\n ", "     ").validate();
        for field in Field::ALL {
            assert_eq!(result.errors.get(field), Some(FieldError::EmptyField), "{:?}", field);
        }
    }

    #[test]
    fn double_at_email_is_malformed() {
        let result = submission("Jane Doe", "jane@@x", "Hello there").validate();
        assert_eq!(result.errors.name, None);
        assert_eq!(result.errors.email, Some(FieldError::InvalidFormat));
        assert_eq!(result.errors.text(Field::Email), "Please enter a valid email address.");
        assert_eq!(result.errors.message, None);
    }

    #[test]
    fn email_format_is_checked_independently() {
        for email in ["janeexample.com", "jane@example", "@example.com", "jane@.com", "jane@example.", "ja ne@example.com"] {
            let result = submission("", email, "").validate();
            assert_eq!(result.errors.email, Some(FieldError::InvalidFormat), "{}", email);
            assert_eq!(result.errors.name, Some(FieldError::EmptyField));
        }
    }

    #[test]
    fn email_is_trimmed_before_matching() {
        let result = submission("Jane", "  jane@example.com  ", "I need a refill please").validate();
        assert!(result.is_valid());
    }

    #[test]
    fn subdomains_are_accepted() {
        assert_eq!(check_email("jane@mail.example.co.uk"), Ok(()));
    }

    #[test]
    fn short_messages_are_rejected() {
        let result = submission("Jane Doe", "jane@example.com", "short").validate();
        assert_eq!(result.errors.message, Some(FieldError::TooShort));
        assert_eq!(result.errors.text(Field::Message), "Message should be at least 10 characters.");

        for len in 1..MIN_MESSAGE_LEN {
            let message = format!("  {}  ", "x".repeat(len));
            assert_eq!(check_message(&message), Err(FieldError::TooShort), "len {}", len);
        }
        assert_eq!(check_message(&"x".repeat(MIN_MESSAGE_LEN)), Ok(()));
    }

    #[test]
    fn message_length_counts_utf16_units_not_bytes() {
        // 9 units, well over 10 bytes
        assert_eq!(check_message("ééééééééé"), Err(FieldError::TooShort));
        assert_eq!(check_message("éééééééééé"), Ok(()));
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        assert_eq!(check_message("😀😀😀😀😀"), Ok(()));
        assert_eq!(check_message("😀😀😀😀"), Err(FieldError::TooShort));
        assert_eq!(check_message("😀😀😀😀a"), Err(FieldError::TooShort));
    }

    #[test]
    fn byte_order_mark_is_trimmed_like_whitespace() {
        assert_eq!(check_name("\u{feff}"), Err(FieldError::EmptyField));
        assert_eq!(check_email(" \u{feff}"), Err(FieldError::EmptyField));
        assert_eq!(check_message("\u{feff}\n\u{feff}"), Err(FieldError::EmptyField));
        assert_eq!(check_email("\u{feff}jane@example.com\u{feff}"), Ok(()));
        assert_eq!(check_email("jane\u{feff}@example.com"), Err(FieldError::InvalidFormat));
    }

    #[test]
    fn valid_submission_passes() {
        let input = submission("Jane Doe", "jane@example.com", "I need help with my prescription");
        let result = input.validate();
        assert!(result.is_valid());
        for field in Field::ALL {
            assert_eq!(result.errors.text(field), "");
        }
        let valid = input.validated().expect("should validate");
        assert_eq!(valid.submission(), &input);
    }

    #[test]
    fn validated_returns_errors_on_failure() {
        let errors = submission("Jane", "", "Hello there").validated().unwrap_err();
        assert_eq!(errors.email, Some(FieldError::EmptyField));
        assert!(!errors.is_empty());
    }

    #[test]
    fn set_updates_only_that_field() {
        let mut input = ContactSubmission::default();
        input.set(Field::Email, "jane@example.com".to_string());
        assert_eq!(input.get(Field::Email), "jane@example.com");
        assert_eq!(input.get(Field::Name), "");
        assert_eq!(input.get(Field::Message), "");
    }
}
