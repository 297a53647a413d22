use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid contact data in backing file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid validation pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("{0}")]
    Validation(String),

    #[error("No contact found with the name '{0}'.")]
    NotFound(String),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),
}

impl AppError {
    /// Errors the menu loop reports and then carries on from.
    /// Everything else aborts the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::NotFound(_) | AppError::ParseCommand(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_not_found_message() {
        let err = AppError::NotFound("Ann Lee".to_string());

        assert_eq!(
            format!("{}", err),
            "No contact found with the name 'Ann Lee'."
        );
    }

    #[test]
    fn confirm_validation_error() {
        let err = AppError::Validation("Invalid phone number format.".to_string());

        assert_eq!(format!("{}", err), "Invalid phone number format.");
    }

    #[test]
    fn io_and_json_errors_are_fatal() {
        let io = AppError::from(std::io::Error::other("disk gone"));
        let json = AppError::from(serde_json::from_str::<Vec<String>>("{").unwrap_err());

        assert!(!io.is_recoverable());
        assert!(!json.is_recoverable());
        assert!(format!("{}", io).contains("I/O error while accessing a file or resource: "));
    }

    #[test]
    fn user_errors_are_recoverable() {
        assert!(AppError::Validation("x".to_string()).is_recoverable());
        assert!(AppError::NotFound("x".to_string()).is_recoverable());
        assert!(AppError::ParseCommand("9".to_string()).is_recoverable());
    }
}
