//! Form-level validation results
//!
//! Screen-side checks collect every problem before submission rather than
//! failing on the first, so a form can surface all of them at once.
//! Warnings are non-fatal (the submission may proceed).

use crate::client::ClientDraft;

/// Result of validating a form draft
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the draft is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validates a client draft the way the create/edit form does
pub fn validate_client_draft(draft: &ClientDraft) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if draft.name.trim().is_empty() {
        result.add_error("Name is required");
    } else if draft.name.len() > 120 {
        result.add_error("Name must be at most 120 characters");
    }

    if let Some(email) = &draft.email {
        if !email.contains('@') {
            result.add_error("Email is not valid");
        }
    }

    if draft.email.is_none() && draft.phone.is_none() {
        result.add_warning("No contact detail; invoices cannot be sent by email");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft_passes() {
        let draft = ClientDraft::new("Acme").with_email("billing@acme.co");
        let result = validate_client_draft(&draft);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_missing_name_fails() {
        let draft = ClientDraft::new("");
        let result = validate_client_draft(&draft);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Name is required"]);
    }

    #[test]
    fn test_no_contact_detail_warns_but_passes() {
        let draft = ClientDraft::new("Acme");
        let result = validate_client_draft(&draft);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_collects_multiple_errors() {
        let draft = ClientDraft::new("").with_email("nope");
        let result = validate_client_draft(&draft);
        assert_eq!(result.errors.len(), 2);
    }
}
