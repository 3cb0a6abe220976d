//! List filtering and dashboard aggregation.
//!
//! The read side of the portal: client-side filters over the project and
//! purchase lists, and the running totals the dashboards and transparency
//! pages display. All functions borrow their inputs and allocate only for
//! results.

use crate::models::{
    GovernmentWallet, Product, ProjectStatus, ProjectType, Purchase, RenewableProject,
};
use std::collections::BTreeMap;

/// Filter criteria for the renewable projects page. `None` means "all".
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectFilter {
    pub project_type: Option<ProjectType>,
    pub status: Option<ProjectStatus>,
}

/// Filters projects by type and/or status; the result is the intersection of
/// the matching criteria and is empty when nothing matches.
#[must_use]
pub fn filter_projects<'a>(
    projects: &'a [RenewableProject],
    filter: &ProjectFilter,
) -> Vec<&'a RenewableProject> {
    projects
        .iter()
        .filter(|p| filter.project_type.is_none_or(|t| p.project_type == t))
        .filter(|p| filter.status.is_none_or(|s| p.status == s))
        .collect()
}

/// Sum of all project investments.
#[must_use]
pub fn total_investment(projects: &[RenewableProject]) -> f64 {
    projects.iter().map(|p| p.amount_invested).sum()
}

/// Sum of estimated CO2 reduction across all projects, in tons.
#[must_use]
pub fn total_co2_reduction(projects: &[RenewableProject]) -> f64 {
    projects.iter().map(|p| p.co2_reduction_estimate).sum()
}

/// Number of completed projects.
#[must_use]
pub fn completed_count(projects: &[RenewableProject]) -> usize {
    projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Completed)
        .count()
}

/// Filter criteria for the transparency portal's transaction list.
/// Both filters are substring matches; `None` means "all".
#[derive(Debug, Clone, Default)]
pub struct PurchaseFilter {
    /// Matched against the ISO date string (`2024-01` matches the month)
    pub date_contains: Option<String>,
    /// Case-insensitive match against the product name
    pub name_contains: Option<String>,
}

/// Filters purchases by date and product-name substrings.
#[must_use]
pub fn filter_purchases<'a>(
    purchases: &'a [Purchase],
    filter: &PurchaseFilter,
) -> Vec<&'a Purchase> {
    purchases
        .iter()
        .filter(|p| {
            filter
                .date_contains
                .as_deref()
                .is_none_or(|d| p.date.to_string().contains(d))
        })
        .filter(|p| {
            filter.name_contains.as_deref().is_none_or(|n| {
                p.product_name
                    .to_lowercase()
                    .contains(&n.to_lowercase())
            })
        })
        .collect()
}

/// Total carbon tax across a purchase list.
#[must_use]
pub fn total_tax_collected(purchases: &[Purchase]) -> f64 {
    purchases.iter().map(|p| p.carbon_tax).sum()
}

/// Carbon tax paid, broken down by product category.
///
/// Purchases snapshot the product name, not its category, so the category is
/// resolved through the catalog; purchases whose product is no longer in the
/// catalog land in "Other".
#[must_use]
pub fn tax_by_category(purchases: &[Purchase], catalog: &[Product]) -> BTreeMap<String, f64> {
    let mut breakdown = BTreeMap::new();
    for purchase in purchases {
        let category = catalog
            .iter()
            .find(|p| p.name == purchase.product_name)
            .map_or("Other", |p| p.category.as_str());
        *breakdown.entry(category.to_string()).or_insert(0.0) += purchase.carbon_tax;
    }
    breakdown
}

/// Funds still available: collected minus spent.
#[must_use]
pub fn available_balance(total_collected: f64, total_spent: f64) -> f64 {
    total_collected - total_spent
}

/// Admin-dashboard mock: 70% of collected tax counts as deployed.
#[must_use]
pub fn fund_spent_estimate(total_collected: f64) -> f64 {
    (total_collected * 0.7).floor()
}

/// Spending efficiency of the government wallet as a rounded percentage.
/// Zero when nothing has been collected.
#[must_use]
pub fn efficiency_percent(wallet: &GovernmentWallet) -> i64 {
    if wallet.total_collected <= 0.0 {
        return 0;
    }
    // Percentages here are small; the cast cannot truncate meaningfully.
    #[allow(clippy::cast_possible_truncation)]
    let pct = (wallet.total_spent / wallet.total_collected * 100.0).round() as i64;
    pct
}
