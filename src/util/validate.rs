//! Client-side form validation for registration and login input.
//!
//! DESIGN
//! ======
//! These checks are the caller-side contract of the session controller:
//! they run before any event is dispatched, so rejected input never
//! touches the session store. The phone rules come from the injected
//! [`ValidationPolicy`] rather than a hardcoded country prefix.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::config::ValidationPolicy;
use crate::net::types::RegistrationInput;

/// Prepend the policy's dialing prefix when the raw input lacks it.
/// Mirrors the register form's as-you-type behavior.
pub fn normalize_phone(raw: &str, policy: &ValidationPolicy) -> String {
    if raw.is_empty() || raw.starts_with(&policy.phone_prefix) {
        raw.to_owned()
    } else {
        format!("{}{raw}", policy.phone_prefix)
    }
}

/// Basic `local@domain.tld` shape check.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

/// DD/MM/YYYY digit-shape check.
fn is_valid_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 2 | 5) || b.is_ascii_digit())
}

/// Dialing prefix (optional) followed by exactly the policy's number of
/// national digits.
fn is_valid_phone(phone: &str, policy: &ValidationPolicy) -> bool {
    let national = phone.strip_prefix(&policy.phone_prefix).unwrap_or(phone);
    national.len() == policy.phone_digits && national.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a registration form against the policy.
///
/// Returns the first failing rule's user-facing message, in form order.
/// The confirmation value is checked here and then discarded; it never
/// reaches the wire type.
///
/// # Errors
///
/// A human-readable message describing the first invalid field.
pub fn validate_registration(
    input: &RegistrationInput,
    confirm_password: &str,
    policy: &ValidationPolicy,
) -> Result<(), String> {
    if input.full_name.is_empty() {
        return Err("Full Name is required.".to_owned());
    }
    if !is_valid_email(&input.email) {
        return Err("Enter a valid email address.".to_owned());
    }
    if !is_valid_date(&input.date_of_birth) {
        return Err("Enter Date of Birth in DD/MM/YYYY format.".to_owned());
    }
    if !is_valid_phone(&input.phone_number, policy) {
        return Err(format!(
            "Enter a valid {}-digit phone number.",
            policy.phone_digits
        ));
    }
    if input.password.is_empty() {
        return Err("Password is required.".to_owned());
    }
    if input.password != confirm_password {
        return Err("Passwords do not match.".to_owned());
    }
    Ok(())
}
