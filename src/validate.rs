//! Form Validation
//!
//! Pure field validators for the login and signup forms. Whole-form checks
//! run in field order and stop at the first failure, so the caller surfaces
//! exactly one message at a time.

use std::fmt;

/// Why a single field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    EmptyField,
    InvalidFormat,
    TooShort,
    Mismatch,
    NotAccepted,
}

/// First failing field + reason, ready for the alert prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormError {
    pub field: &'static str,
    pub error: FieldError,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.error {
            FieldError::EmptyField => "cannot be empty",
            FieldError::InvalidFormat => "is not valid",
            FieldError::TooShort => "is too short",
            FieldError::Mismatch => "does not match",
            FieldError::NotAccepted => "must be accepted",
        };
        match self.field {
            "email" => write!(f, "Email {}", reason),
            "password" => write!(f, "Password {}", reason),
            "confirm_password" => write!(f, "Password confirmation {}", reason),
            "name" => write!(f, "Name {}", reason),
            "terms" => write!(f, "The terms {}", reason),
            other => write!(f, "{} {}", other, reason),
        }
    }
}

const MIN_PASSWORD_LEN: usize = 6;
const MIN_NAME_LEN: usize = 3;

/// local-part@domain.tld: exactly one '@', a '.' after it with a non-empty
/// tail, no whitespace anywhere
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.is_empty() {
        return Err(FieldError::EmptyField);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(FieldError::InvalidFormat);
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return Err(FieldError::InvalidFormat),
    };
    if local.is_empty() || domain.contains('@') {
        return Err(FieldError::InvalidFormat);
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(FieldError::InvalidFormat),
    }
}

pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        Err(FieldError::EmptyField)
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Err(FieldError::TooShort)
    } else {
        Ok(())
    }
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> Result<(), FieldError> {
    if confirm.is_empty() {
        Err(FieldError::EmptyField)
    } else if confirm != password {
        Err(FieldError::Mismatch)
    } else {
        Ok(())
    }
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.is_empty() {
        Err(FieldError::EmptyField)
    } else if name.chars().count() < MIN_NAME_LEN {
        Err(FieldError::TooShort)
    } else {
        Ok(())
    }
}

pub fn validate_terms(accepted: bool) -> Result<(), FieldError> {
    if accepted {
        Ok(())
    } else {
        Err(FieldError::NotAccepted)
    }
}

fn field(name: &'static str, result: Result<(), FieldError>) -> Result<(), FormError> {
    result.map_err(|error| FormError { field: name, error })
}

/// Login form: email then password
pub fn validate_login(email: &str, password: &str) -> Result<(), FormError> {
    field("email", validate_email(email))?;
    field("password", validate_password(password))?;
    Ok(())
}

/// Signup form: name, email, password, confirmation, terms — in that order
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    accept_terms: bool,
) -> Result<(), FormError> {
    field("name", validate_name(name))?;
    field("email", validate_email(email))?;
    field("password", validate_password(password))?;
    field(
        "confirm_password",
        validate_confirm_password(password, confirm_password),
    )?;
    field("terms", validate_terms(accept_terms))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rejects_shapes_without_domain() {
        assert_eq!(validate_email("bob"), Err(FieldError::InvalidFormat));
        assert_eq!(validate_email("bob@"), Err(FieldError::InvalidFormat));
        assert_eq!(validate_email("bob@x"), Err(FieldError::InvalidFormat));
    }

    #[test]
    fn email_accepts_local_at_domain_tld() {
        assert_eq!(validate_email("bob@x.com"), Ok(()));
        assert_eq!(validate_email("alice.smith@mail.example.org"), Ok(()));
    }

    #[test]
    fn email_rejects_blank_whitespace_and_double_at() {
        assert_eq!(validate_email(""), Err(FieldError::EmptyField));
        assert_eq!(validate_email("bob @x.com"), Err(FieldError::InvalidFormat));
        assert_eq!(validate_email("bob@@x.com"), Err(FieldError::InvalidFormat));
        assert_eq!(validate_email("@x.com"), Err(FieldError::InvalidFormat));
        assert_eq!(validate_email("bob@.com"), Err(FieldError::InvalidFormat));
        assert_eq!(validate_email("bob@x."), Err(FieldError::InvalidFormat));
    }

    #[test]
    fn password_length_boundary_is_six() {
        assert_eq!(validate_password(""), Err(FieldError::EmptyField));
        assert_eq!(validate_password("12345"), Err(FieldError::TooShort));
        assert_eq!(validate_password("123456"), Ok(()));
        assert_eq!(validate_password("hunter22"), Ok(()));
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // 6 characters, more than 6 bytes
        assert_eq!(validate_password("héllo1"), Ok(()));
        assert_eq!(validate_password("秘密秘密秘密"), Ok(()));
        // 5 characters regardless of byte width
        assert_eq!(validate_password("héll1"), Err(FieldError::TooShort));
    }

    #[test]
    fn confirm_must_match_exactly() {
        assert_eq!(
            validate_confirm_password("secret1", ""),
            Err(FieldError::EmptyField)
        );
        assert_eq!(
            validate_confirm_password("secret1", "secret2"),
            Err(FieldError::Mismatch)
        );
        assert_eq!(validate_confirm_password("secret1", "secret1"), Ok(()));
    }

    #[test]
    fn name_length_boundary_is_three() {
        assert_eq!(validate_name(""), Err(FieldError::EmptyField));
        assert_eq!(validate_name("Al"), Err(FieldError::TooShort));
        assert_eq!(validate_name("Ana"), Ok(()));
    }

    #[test]
    fn terms_must_be_accepted() {
        assert_eq!(validate_terms(false), Err(FieldError::NotAccepted));
        assert_eq!(validate_terms(true), Ok(()));
    }

    #[test]
    fn valid_signup_passes() {
        assert_eq!(
            validate_signup("Ana", "ana@x.com", "secret1", "secret1", true),
            Ok(())
        );
    }

    #[test]
    fn signup_flips_yield_exactly_the_matching_failure() {
        let ok = ("Ana", "ana@x.com", "secret1", "secret1", true);

        let err = validate_signup("Al", ok.1, ok.2, ok.3, ok.4).unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.error, FieldError::TooShort);

        let err = validate_signup(ok.0, "ana@x", ok.2, ok.3, ok.4).unwrap_err();
        assert_eq!(err.field, "email");
        assert_eq!(err.error, FieldError::InvalidFormat);

        let err = validate_signup(ok.0, ok.1, "short", "short", ok.4).unwrap_err();
        assert_eq!(err.field, "password");
        assert_eq!(err.error, FieldError::TooShort);

        let err = validate_signup(ok.0, ok.1, ok.2, "secret2", ok.4).unwrap_err();
        assert_eq!(err.field, "confirm_password");
        assert_eq!(err.error, FieldError::Mismatch);

        let err = validate_signup(ok.0, ok.1, ok.2, ok.3, false).unwrap_err();
        assert_eq!(err.field, "terms");
        assert_eq!(err.error, FieldError::NotAccepted);
    }

    #[test]
    fn signup_reports_the_first_failure_in_field_order() {
        // Several fields invalid at once: name comes first
        let err = validate_signup("", "nope", "x", "y", false).unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.error, FieldError::EmptyField);
    }

    #[test]
    fn login_checks_email_before_password() {
        let err = validate_login("", "").unwrap_err();
        assert_eq!(err.field, "email");
        assert_eq!(err.error, FieldError::EmptyField);

        let err = validate_login("bob@x.com", "123").unwrap_err();
        assert_eq!(err.field, "password");
        assert_eq!(err.error, FieldError::TooShort);

        assert_eq!(validate_login("bob@x.com", "123456"), Ok(()));
    }
}
