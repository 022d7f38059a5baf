//! The emergency fund estimator.
//!
//! Maps a household's situation to three savings tiers (minimum,
//! recommended, ideal), each expressed in months of living expenses and in
//! dollars. The functions here are pure; input sanitization happens at the
//! presentation boundary via [`FundInput::sanitized`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Floor on the recommended coverage, in months of expenses.
pub const MINIMUM_MONTHS: u32 = 3;

/// How predictable the household income is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeStability {
    /// Salaried or otherwise predictable income
    #[default]
    Stable,
    /// Freelance, commission, or gig income
    Variable,
}

impl fmt::Display for IncomeStability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncomeStability::Stable => write!(f, "stable"),
            IncomeStability::Variable => write!(f, "variable"),
        }
    }
}

/// How much buffer risk the household accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTolerance::Low => write!(f, "low"),
            RiskTolerance::Medium => write!(f, "medium"),
            RiskTolerance::High => write!(f, "high"),
        }
    }
}

/// One household's answers, captured fresh for every calculation.
///
/// Field defaults mirror the questionnaire defaults, so a profile may omit
/// any answer in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FundInput {
    #[serde(default = "default_monthly_expenses")]
    pub monthly_expenses: f64,
    #[serde(default)]
    pub income_stability: IncomeStability,
    #[serde(default)]
    pub has_dependents: bool,
    #[serde(default)]
    pub risk_tolerance: RiskTolerance,
}

fn default_monthly_expenses() -> f64 {
    3000.0
}

impl Default for FundInput {
    fn default() -> Self {
        FundInput {
            monthly_expenses: default_monthly_expenses(),
            income_stability: IncomeStability::default(),
            has_dependents: false,
            risk_tolerance: RiskTolerance::default(),
        }
    }
}

impl FundInput {
    /// Coerces a malformed expense figure to zero.
    ///
    /// Zero expenses stay a valid scenario: the month counts are unaffected
    /// and every fund amount comes out as zero.
    pub fn sanitized(mut self) -> Self {
        if !self.monthly_expenses.is_finite() || self.monthly_expenses < 0.0 {
            self.monthly_expenses = 0.0;
        }
        self
    }
}

/// The signed month adjustments behind a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthsBreakdown {
    pub base_months: i32,
    pub dependents_adjustment: i32,
    pub risk_adjustment: i32,
}

impl MonthsBreakdown {
    /// Sum of base months and adjustments before the floor is applied.
    pub fn unfloored_total(&self) -> i32 {
        self.base_months + self.dependents_adjustment + self.risk_adjustment
    }

    /// Recommended coverage, never below [`MINIMUM_MONTHS`].
    pub fn recommended_months(&self) -> u32 {
        self.unfloored_total().max(MINIMUM_MONTHS as i32) as u32
    }

    /// Whether the floor raised the recommendation above the raw total.
    pub fn floor_applied(&self) -> bool {
        self.unfloored_total() < MINIMUM_MONTHS as i32
    }
}

/// The computed savings tiers for one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundResult {
    pub recommended_months: u32,
    pub minimum_months: u32,
    pub ideal_months: u32,
    pub recommended_fund: f64,
    pub minimum_fund: f64,
    pub ideal_fund: f64,
}

/// Derives the coverage month ledger for an input.
///
/// Stable income starts at 3 months, variable at 6. Dependents add two
/// months. Low risk tolerance adds two more, high takes one away. The
/// adjustments commute; they are listed in questionnaire order.
pub fn breakdown(input: &FundInput) -> MonthsBreakdown {
    let base_months = match input.income_stability {
        IncomeStability::Stable => 3,
        IncomeStability::Variable => 6,
    };
    let dependents_adjustment = if input.has_dependents { 2 } else { 0 };
    let risk_adjustment = match input.risk_tolerance {
        RiskTolerance::Low => 2,
        RiskTolerance::Medium => 0,
        RiskTolerance::High => -1,
    };
    MonthsBreakdown {
        base_months,
        dependents_adjustment,
        risk_adjustment,
    }
}

/// Computes the fund targets for an input.
///
/// Total over the declared input domain: no errors, no side effects. The
/// minimum tier is fixed at [`MINIMUM_MONTHS`]; the ideal tier sits three
/// months above the recommendation and so inherits its floor.
pub fn estimate(input: &FundInput) -> FundResult {
    let months = breakdown(input);
    let recommended_months = months.recommended_months();
    let ideal_months = recommended_months + 3;

    FundResult {
        recommended_months,
        minimum_months: MINIMUM_MONTHS,
        ideal_months,
        recommended_fund: f64::from(recommended_months) * input.monthly_expenses,
        minimum_fund: f64::from(MINIMUM_MONTHS) * input.monthly_expenses,
        ideal_fund: f64::from(ideal_months) * input.monthly_expenses,
    }
}
