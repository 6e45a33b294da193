//! Advisory validation of receipt input.
//!
//! Receipts are generated even when these checks find something, so issues
//! are reported as warnings rather than errors.

use std::fmt;

/// A single suspicious input field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// The field that looked wrong
    pub field: String,
    pub message: String,
    /// Suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Issue for a blank text field.
    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{label} is empty"))
            .with_suggestion(format!("pass --{field} or set \"{field}\" in the JSON input"))
    }

    /// Issue for a zero or negative amount.
    pub fn non_positive_amount(field: &str, amount: f64) -> Self {
        Self::new(field, format!("rent amount {amount:.2} is not positive"))
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {suggestion}")?;
        }
        Ok(())
    }
}

/// Collection of validation issues.
#[derive(Debug, Default)]
pub struct ValidationIssues {
    issues: Vec<ValidationIssue>,
}

impl ValidationIssues {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter()
    }

    /// Emit every issue as a warning.
    pub fn log_warnings(&self) {
        for issue in &self.issues {
            log::warn!("{issue}");
        }
    }
}

// ============================================================================
// Validation functions
// ============================================================================

/// Flag a string that is empty after trimming.
pub fn validate_required(value: &str, field: &str, label: &str, issues: &mut ValidationIssues) {
    if value.trim().is_empty() {
        issues.add(ValidationIssue::empty_field(field, label));
    }
}

/// Flag an amount that is zero or negative.
pub fn validate_positive_amount(amount: f64, field: &str, issues: &mut ValidationIssues) {
    if amount <= 0.0 || amount.is_nan() {
        issues.add(ValidationIssue::non_positive_amount(field, amount));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_blank() {
        let mut issues = ValidationIssues::new();
        validate_required("   ", "landlord", "Landlord name", &mut issues);
        assert_eq!(issues.len(), 1);
        let text = issues.iter().next().unwrap().to_string();
        assert!(text.starts_with("[landlord] Landlord name is empty"));
        assert!(text.contains("--landlord"));
    }

    #[test]
    fn test_validate_required_present() {
        let mut issues = ValidationIssues::new();
        validate_required("Ravi Kumar", "landlord", "Landlord name", &mut issues);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_validate_positive_amount() {
        let mut issues = ValidationIssues::new();
        validate_positive_amount(15000.0, "rent", &mut issues);
        assert!(issues.is_empty());
        validate_positive_amount(0.0, "rent", &mut issues);
        validate_positive_amount(-10.0, "rent", &mut issues);
        assert_eq!(issues.len(), 2);
    }
}
