//! Pricing input validation
//!
//! The calculation engine never rejects input; this module is the explicit
//! gate that runs before user-entered pricing data is acted on (persisting
//! a rate card, submitting an invoice). Every violation is collected so the
//! caller can surface all problems at once instead of one at a time.
//!
//! # Validation Rules
//!
//! ## Services
//! - Must have a name
//! - Hourly: rate must be greater than 0; declared estimated hours, if
//!   any, must be greater than 0
//! - Fixed: fee must be greater than 0
//! - Contingency: percentage must be in (0, 100]
//!
//! ## Time entries
//! - Must have a description
//! - Hours and rate must be greater than 0
//!
//! ## Expenses
//! - Must have a description
//! - Amount must be greater than 0

use rust_decimal_macros::dec;

use crate::error::PricingError;
use crate::expense::Expense;
use crate::service::{ServiceItem, ServicePricing};
use crate::time_entry::TimeEntry;

/// Result of pricing validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the inputs are valid
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

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Converts into a `Result`, aggregating all errors into one
    /// [`PricingError::Validation`]
    pub fn into_result(self) -> Result<(), PricingError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(PricingError::Validation(self.errors))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for pricing inputs
///
/// # Examples
///
/// ```rust
/// use domain_pricing::{PricingValidator, ServiceItem};
/// use core_kernel::Money;
/// use rust_decimal_macros::dec;
///
/// let services = vec![ServiceItem::hourly("Consultation", Money::new(dec!(-100)), None)];
/// let result = PricingValidator::validate(&services, &[], &[]);
///
/// assert!(!result.is_valid);
/// ```
pub struct PricingValidator;

impl PricingValidator {
    /// Validates services, time entries, and expenses, collecting every
    /// violation.
    ///
    /// # Returns
    ///
    /// A [`ValidationResult`] listing all errors found.
    pub fn validate(
        services: &[ServiceItem],
        time_entries: &[TimeEntry],
        expenses: &[Expense],
    ) -> ValidationResult {
        let mut result = ValidationResult::ok();

        for (index, service) in services.iter().enumerate() {
            Self::validate_service(service, index, &mut result);
        }

        for (index, entry) in time_entries.iter().enumerate() {
            Self::validate_time_entry(entry, index, &mut result);
        }

        for (index, expense) in expenses.iter().enumerate() {
            Self::validate_expense(expense, index, &mut result);
        }

        result
    }

    fn validate_service(service: &ServiceItem, index: usize, result: &mut ValidationResult) {
        if service.name.trim().is_empty() {
            result.add_error(format!("Service {}: Name is required", index + 1));
        }

        match &service.pricing {
            ServicePricing::Hourly {
                rate,
                estimated_hours,
            } => {
                if !rate.is_positive() {
                    result.add_error(format!(
                        "Service \"{}\": Hourly rate must be greater than 0",
                        service.name
                    ));
                }
                if let Some(hours) = estimated_hours {
                    if *hours <= dec!(0) {
                        result.add_error(format!(
                            "Service \"{}\": Estimated hours must be greater than 0",
                            service.name
                        ));
                    }
                }
            }
            ServicePricing::Fixed { fee, .. } => {
                if !fee.is_positive() {
                    result.add_error(format!(
                        "Service \"{}\": Fixed fee must be greater than 0",
                        service.name
                    ));
                }
            }
            ServicePricing::Contingency { percentage } => {
                if *percentage <= dec!(0) || *percentage > dec!(100) {
                    result.add_error(format!(
                        "Service \"{}\": Contingency percentage must be between 0 and 100",
                        service.name
                    ));
                }
            }
        }
    }

    fn validate_time_entry(entry: &TimeEntry, index: usize, result: &mut ValidationResult) {
        if entry.description.trim().is_empty() {
            result.add_error(format!("Time entry {}: Description is required", index + 1));
        }
        if entry.hours <= dec!(0) {
            result.add_error(format!(
                "Time entry {}: Hours must be greater than 0",
                index + 1
            ));
        }
        if !entry.rate.is_positive() {
            result.add_error(format!(
                "Time entry {}: Rate must be greater than 0",
                index + 1
            ));
        }
    }

    fn validate_expense(expense: &Expense, index: usize, result: &mut ValidationResult) {
        if expense.description.trim().is_empty() {
            result.add_error(format!("Expense {}: Description is required", index + 1));
        }
        if !expense.amount.is_positive() {
            result.add_error(format!(
                "Expense {}: Amount must be greater than 0",
                index + 1
            ));
        }
    }
}

/// Validates pricing inputs, aggregating all violations into a single
/// error.
///
/// # Errors
///
/// Returns [`PricingError::Validation`] carrying every violation when at
/// least one exists.
pub fn validate_pricing(
    services: &[ServiceItem],
    time_entries: &[TimeEntry],
    expenses: &[Expense],
) -> Result<(), PricingError> {
    PricingValidator::validate(services, time_entries, expenses).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::Money;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    #[test]
    fn test_valid_inputs_pass() {
        let services = vec![ServiceItem::hourly(
            "Consultation",
            Money::new(dec!(100)),
            Some(dec!(2)),
        )];
        let entries = vec![TimeEntry::new("Drafting", date(), dec!(1), Money::new(dec!(2500)))];
        let expenses = vec![Expense::new("Filing", "filing", Money::new(dec!(500)))];

        assert!(validate_pricing(&services, &entries, &expenses).is_ok());
    }

    #[test]
    fn test_negative_hourly_rate_rejected() {
        let services = vec![ServiceItem::hourly("Consultation", Money::new(dec!(-100)), None)];
        let result = PricingValidator::validate(&services, &[], &[]);

        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("Hourly rate")));
    }

    #[test]
    fn test_all_violations_are_collected() {
        let services = vec![
            ServiceItem::hourly("", Money::new(dec!(0)), None),
            ServiceItem::contingency("Claim", dec!(150)),
        ];
        let entries = vec![TimeEntry::new("", date(), dec!(0), Money::new(dec!(0)))];
        let expenses = vec![Expense::new("", "other", Money::new(dec!(0)))];

        let result = PricingValidator::validate(&services, &entries, &expenses);

        // name + rate, percentage, description + hours + rate, description + amount
        assert_eq!(result.errors.len(), 8);
    }

    #[test]
    fn test_aggregate_error_message() {
        let services = vec![ServiceItem::fixed("Opinion", Money::new(dec!(0)), None)];
        let err = validate_pricing(&services, &[], &[]).unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("Validation failed:"));
        assert!(message.contains("Fixed fee must be greater than 0"));
    }

    #[test]
    fn test_contingency_boundaries() {
        // 100 is allowed, 0 and 100.01 are not
        let ok = vec![ServiceItem::contingency("Claim", dec!(100))];
        assert!(validate_pricing(&ok, &[], &[]).is_ok());

        let zero = vec![ServiceItem::contingency("Claim", dec!(0))];
        assert!(validate_pricing(&zero, &[], &[]).is_err());

        let over = vec![ServiceItem::contingency("Claim", dec!(100.01))];
        assert!(validate_pricing(&over, &[], &[]).is_err());
    }

    #[test]
    fn test_undeclared_estimated_hours_are_fine() {
        let services = vec![ServiceItem::hourly("Consultation", Money::new(dec!(100)), None)];
        assert!(validate_pricing(&services, &[], &[]).is_ok());
    }
}
