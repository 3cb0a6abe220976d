//! Manufacturer product submissions.
//!
//! Manufacturers submit products for review from their portal. Submissions
//! are role-gated, validated, priced for carbon tax at the configured rate,
//! and enter the list in `Pending` status; review itself is out of scope for
//! the demo (seed data carries approved entries).

use crate::core::{ledger, tax};
use crate::errors::{Error, Result};
use crate::models::{ProductSubmission, Role, SubmissionStatus};
use chrono::NaiveDate;
use tracing::info;

/// A filled-in submission form from the manufacturer portal.
#[derive(Debug, Clone)]
pub struct SubmissionForm {
    pub name: String,
    pub category: String,
    pub base_price: f64,
    /// Declared CO2 emission in kg per unit
    pub co2_emission: f64,
    pub description: String,
}

/// Validates a submission and builds the pending record.
///
/// # Errors
/// - [`Error::AccessDenied`] unless `role` is manufacturer
/// - [`Error::MissingField`] for an empty name or category
/// - [`Error::InvalidAmount`] for a non-positive or non-finite price or
///   emission
pub fn submit_product(
    role: Role,
    form: &SubmissionForm,
    tax_rate_per_kg: f64,
    today: NaiveDate,
) -> Result<ProductSubmission> {
    if role != Role::Manufacturer {
        return Err(Error::AccessDenied {
            required: Role::Manufacturer,
        });
    }

    if form.name.is_empty() {
        return Err(Error::MissingField {
            field: "name".to_string(),
        });
    }
    if form.category.is_empty() {
        return Err(Error::MissingField {
            field: "category".to_string(),
        });
    }
    for amount in [form.base_price, form.co2_emission] {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::InvalidAmount { amount });
        }
    }

    let submission = ProductSubmission {
        id: ledger::purchase_id(chrono::Utc::now()),
        name: form.name.clone(),
        category: form.category.clone(),
        base_price: form.base_price,
        co2_emission: form.co2_emission,
        description: form.description.clone(),
        carbon_tax_per_unit: tax::carbon_tax_for(form.co2_emission, tax_rate_per_kg),
        units_sold: 0,
        carbon_tax_generated: 0.0,
        status: SubmissionStatus::Pending,
        submitted_date: today,
        tx_hash: ledger::random_tx_hash(),
    };
    info!(name = %submission.name, "Product submitted for review");
    Ok(submission)
}

/// Total units sold across all submissions.
#[must_use]
pub fn total_units_sold(submissions: &[ProductSubmission]) -> u64 {
    submissions.iter().map(|s| s.units_sold).sum()
}

/// Total carbon tax generated across all submissions.
#[must_use]
pub fn total_tax_generated(submissions: &[ProductSubmission]) -> f64 {
    submissions.iter().map(|s| s.carbon_tax_generated).sum()
}

/// Number of approved submissions.
#[must_use]
pub fn approved_count(submissions: &[ProductSubmission]) -> usize {
    submissions
        .iter()
        .filter(|s| s.status == SubmissionStatus::Approved)
        .count()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::sample_submissions;

    fn valid_form() -> SubmissionForm {
        SubmissionForm {
            name: "Green Smartphone".to_string(),
            category: "Electronics".to_string(),
            base_price: 25000.0,
            co2_emission: 85.0,
            description: "Sustainable smartphone with bio-plastic casing".to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    #[test]
    fn test_submission_requires_manufacturer_role() {
        for role in [Role::Consumer, Role::Admin] {
            let err = submit_product(role, &valid_form(), 20.0, today()).unwrap_err();
            assert!(matches!(
                err,
                Error::AccessDenied {
                    required: Role::Manufacturer
                }
            ));
        }
    }

    #[test]
    fn test_valid_submission_is_pending_with_computed_tax() {
        let submission =
            submit_product(Role::Manufacturer, &valid_form(), 20.0, today()).unwrap();

        assert_eq!(submission.status, SubmissionStatus::Pending);
        assert_eq!(submission.carbon_tax_per_unit, 85.0 * 20.0);
        assert_eq!(submission.units_sold, 0);
        assert_eq!(submission.carbon_tax_generated, 0.0);
        assert_eq!(submission.submitted_date, today());
        assert!(submission.tx_hash.starts_with("0x"));
    }

    #[test]
    fn test_submission_validation() {
        let mut form = valid_form();
        form.name = String::new();
        assert!(matches!(
            submit_product(Role::Manufacturer, &form, 20.0, today()).unwrap_err(),
            Error::MissingField { .. }
        ));

        let mut form = valid_form();
        form.base_price = 0.0;
        assert!(matches!(
            submit_product(Role::Manufacturer, &form, 20.0, today()).unwrap_err(),
            Error::InvalidAmount { amount: 0.0 }
        ));

        let mut form = valid_form();
        form.co2_emission = f64::NAN;
        assert!(matches!(
            submit_product(Role::Manufacturer, &form, 20.0, today()).unwrap_err(),
            Error::InvalidAmount { .. }
        ));
    }

    #[test]
    fn test_submission_aggregates() {
        let submissions = sample_submissions();
        assert_eq!(total_units_sold(&submissions), 7500);
        assert_eq!(total_tax_generated(&submissions), 350_000.0);
        assert_eq!(approved_count(&submissions), 2);
    }
}
