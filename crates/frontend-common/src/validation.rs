//! Client-side form validation
//!
//! Mirrors the server's field rules so most mistakes are caught before a
//! request is made. Messages here are shown inline next to the fields.

use chrono::{Datelike, NaiveDate};

/// Minimum age accepted at registration.
const MINIMUM_AGE_YEARS: i32 = 13;

/// Fixed reference date for age checks, matching the server's cutoff.
fn age_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 26).expect("static date is valid")
}

pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required.".into());
    }
    if email.chars().any(char::is_whitespace) {
        return Err("Please enter a valid email address.".into());
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err("Please enter a valid email address.".into());
    }

    Ok(())
}

/// Names may contain letters, spaces and hyphens.
pub fn validate_name(value: &str, label: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{label} is required."));
    }
    if !value.chars().all(|c| c.is_alphabetic() || c == ' ' || c == '-') {
        return Err(format!("{label} can only contain letters, spaces and hyphens."));
    }
    Ok(())
}

/// Mobile numbers are international format: `+` then 4 to 17 digits.
pub fn validate_mobile_number(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Mobile number is required.".into());
    }

    let Some(digits) = value.strip_prefix('+') else {
        return Err("Mobile number must start with a country code, e.g. +44.".into());
    };
    if digits.is_empty()
        || !digits.chars().all(|c| c.is_ascii_digit())
        || !(4..=17).contains(&digits.len())
    {
        return Err("Please enter a valid mobile number.".into());
    }

    Ok(())
}

/// Date of birth must parse as `YYYY-MM-DD` and put the user at or above
/// the minimum age.
pub fn validate_date_of_birth(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Date of birth is required.".into());
    }

    let dob = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| "Please enter a valid date of birth.".to_string())?;
    let today = age_reference_date();
    if dob > today {
        return Err("Date of birth cannot be in the future.".into());
    }

    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    if age < MINIMUM_AGE_YEARS {
        return Err(format!("You must be at least {MINIMUM_AGE_YEARS} years old."));
    }

    Ok(())
}

/// NHS numbers are up to 10 digits while typing; a complete profile
/// requires exactly 10.
pub fn validate_nhs_number(value: &str, required: bool) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return if required {
            Err("NHS number is required.".into())
        } else {
            Ok(())
        };
    }

    if !value.chars().all(|c| c.is_ascii_digit()) || value.len() > 10 {
        return Err("NHS number can only contain up to 10 digits.".into());
    }
    if required && value.len() != 10 {
        return Err("NHS Number must be 10 digits long.".into());
    }

    Ok(())
}

/// Per-field errors for the profile form; `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileErrors {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub nhs_number: Option<String>,
}

impl ProfileErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.mobile_number.is_none()
            && self.date_of_birth.is_none()
            && self.nhs_number.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("  ada@example.com  ").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("ada@example").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@").is_err());
        assert!(validate_email("ada @example.com").is_err());
        assert!(validate_email("ada@@example.com").is_err());
    }

    #[test]
    fn name_rules() {
        assert!(validate_name("Ada", "First name").is_ok());
        assert!(validate_name("Anne-Marie", "First name").is_ok());
        assert!(validate_name("van der Berg", "Last name").is_ok());
        assert!(validate_name("", "First name").is_err());
        assert!(validate_name("Ada1", "First name").is_err());
        assert!(validate_name("O'Brien", "Last name").is_err());
    }

    #[test]
    fn mobile_number_rules() {
        assert!(validate_mobile_number("+447911123456").is_ok());
        assert!(validate_mobile_number("+1234").is_ok());
        assert!(validate_mobile_number("+12345678901234567").is_ok());
        assert!(validate_mobile_number("").is_err());
        assert!(validate_mobile_number("07911123456").is_err());
        assert!(validate_mobile_number("+123").is_err());
        assert!(validate_mobile_number("+123456789012345678").is_err());
        assert!(validate_mobile_number("+44 7911").is_err());
    }

    #[test]
    fn date_of_birth_rules() {
        assert!(validate_date_of_birth("1990-01-01").is_ok());
        assert!(validate_date_of_birth("").is_err());
        assert!(validate_date_of_birth("01/01/1990").is_err());
        assert!(validate_date_of_birth("2030-01-01").is_err());
    }

    #[test]
    fn age_boundary_is_thirteen_years() {
        // Reference date is 2025-05-26.
        assert!(validate_date_of_birth("2012-05-26").is_ok());
        assert!(validate_date_of_birth("2012-05-27").is_err());
        assert!(validate_date_of_birth("2012-05-25").is_ok());
    }

    #[test]
    fn nhs_number_rules() {
        assert!(validate_nhs_number("", false).is_ok());
        assert!(validate_nhs_number("", true).is_err());
        assert!(validate_nhs_number("12345", false).is_ok());
        assert!(validate_nhs_number("12345", true).is_err());
        assert!(validate_nhs_number("1234567890", true).is_ok());
        assert!(validate_nhs_number("12345678901", false).is_err());
        assert!(validate_nhs_number("12345abcde", false).is_err());
    }

    #[test]
    fn profile_errors_emptiness() {
        let mut errors = ProfileErrors::default();
        assert!(errors.is_empty());
        errors.mobile_number = Some("Please enter a valid mobile number.".into());
        assert!(!errors.is_empty());
    }
}
