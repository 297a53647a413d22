use crate::errors::AppError;
use regex::Regex;
use serde::{Deserialize, Serialize};

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
const PHONE_DIGITS: usize = 10;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// User-facing reasons for rejecting a contact.
pub struct ValidationReq;

impl ValidationReq {
    pub fn empty_fields() -> String {
        "Name, phone, and email cannot be empty.".to_string()
    }

    pub fn empty_name() -> String {
        "Name cannot be empty.".to_string()
    }

    pub fn phone_req() -> String {
        "Invalid phone number format.".to_string()
    }

    pub fn email_req() -> String {
        "Invalid email address format.".to_string()
    }

    pub fn already_exists(name: &str) -> String {
        format!("Contact with name '{}' already exists.", name)
    }
}

impl Contact {
    /// Only the name is trimmed; phone and email are kept as given and
    /// must match their formats exactly.
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        Contact {
            name: name.trim().to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    /// Runs every format rule in order and reports the first failure.
    /// Uniqueness is the book's concern, not the record's.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.is_empty() || self.phone.trim().is_empty() || self.email.trim().is_empty() {
            return Err(AppError::Validation(ValidationReq::empty_fields()));
        }

        if !validate_number(&self.phone) {
            return Err(AppError::Validation(ValidationReq::phone_req()));
        }

        if !validate_email(&self.email)? {
            return Err(AppError::Validation(ValidationReq::email_req()));
        }

        Ok(())
    }

    pub fn name_matches(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub fn validate_number(phone: &str) -> bool {
    // Exactly ten ASCII digits, nothing else
    phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
}

pub fn validate_email(email: &str) -> Result<bool, AppError> {
    let re = Regex::new(EMAIL_PATTERN)?;
    Ok(re.is_match(email))
}
