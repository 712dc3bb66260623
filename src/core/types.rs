use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Retirement,
    Education,
    Protection,
    Health,
    Legacy,
}

/// Inputs for the retirement fund calculator. All money is in the planning
/// currency's smallest whole unit (today's money unless stated otherwise);
/// rates are decimals (0.08 for 8%).
#[derive(Debug, Clone)]
pub struct RetirementInputs {
    pub current_age: u32,
    pub retire_age: u32,
    pub life_expectancy: u32,
    pub current_monthly_expense: f64,
    pub inflation_rate: f64,
    pub investment_rate: f64,
    pub current_savings: f64,
    pub has_social_insurance: bool,
    /// Monthly wage basis the public pension is computed from, today's money.
    pub social_insurance_salary_basis: f64,
    /// Growth rate applied to savings already held. Deliberately separate from
    /// `investment_rate` so existing bank deposits and new investment
    /// contributions can compound on different paths.
    pub existing_asset_growth_rate: f64,
}

#[derive(Debug, Clone)]
pub struct EducationInputs {
    pub child_current_age: u32,
    pub university_start_age: u32,
    pub duration_years: u32,
    /// First-year tuition plus living costs, today's money.
    pub current_annual_cost: f64,
    pub inflation_rate: f64,
    pub investment_rate: f64,
    pub current_savings: f64,
}

#[derive(Debug, Clone)]
pub struct ProtectionInputs {
    pub monthly_income: f64,
    pub support_years: u32,
    /// Sum assured on in-force policies plus liquid assets.
    pub existing_coverage: f64,
    pub outstanding_loans: f64,
    pub emergency_fund: f64,
}

#[derive(Debug, Clone)]
pub struct HealthInputs {
    pub medical_cost: f64,
    pub monthly_income: f64,
    pub recovery_years: u32,
    pub existing_health_cover: f64,
}

#[derive(Debug, Clone)]
pub struct LegacyInputs {
    pub number_of_heirs: u32,
    pub amount_per_heir: f64,
    pub current_assets: f64,
}

/// Step-by-step breakdown behind the retirement headline numbers. The UI
/// renders these verbatim in its "show the math" panel, so key names are
/// load-bearing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementDetails {
    pub years_to_retire: u32,
    pub years_in_retirement: u32,
    pub future_monthly_expense: f64,
    pub estimated_pension: f64,
    pub net_monthly_needed: f64,
    pub future_annual_expense: f64,
    /// Inflation-adjusted withdrawal-phase return, in percent.
    pub real_rate: f64,
    pub future_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationDetails {
    pub years_to_uni: u32,
    pub future_tuition_first_year: f64,
    pub uni_duration: u32,
    /// Percent, as in `RetirementDetails`.
    pub real_rate: f64,
    pub total_fund_needed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionDetails {
    pub income_protection_needed: f64,
    pub debt_coverage: f64,
    pub support_years: u32,
    pub monthly_income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDetails {
    pub medical_cost: f64,
    pub income_during_recovery: f64,
    pub recovery_years: u32,
    pub monthly_income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyDetails {
    pub number_of_heirs: u32,
    pub amount_per_heir: f64,
}

/// Untagged so `details` serializes as the flat key map the UI binds to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlanDetails {
    Retirement(RetirementDetails),
    Education(EducationDetails),
    Protection(ProtectionDetails),
    Health(HealthDetails),
    Legacy(LegacyDetails),
}

/// Output of every calculator. Monetary fields are rounded to whole units and
/// satisfy `shortfall == max(0, required_amount - current_amount)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    pub goal: Goal,
    pub required_amount: f64,
    pub current_amount: f64,
    pub shortfall: f64,
    pub monthly_saving_needed: f64,
    pub details: PlanDetails,
}
