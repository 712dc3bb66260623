use super::timevalue::{ZERO_RATE_EPS, future_value, pv_annuity_due, real_rate};
use super::types::{
    EducationDetails, EducationInputs, Goal, HealthDetails, HealthInputs, LegacyDetails,
    LegacyInputs, PlanDetails, PlanResult, ProtectionDetails, ProtectionInputs, RetirementDetails,
    RetirementInputs,
};

/// Fraction of the projected wage basis a social-insurance pension replaces.
const PENSION_REPLACEMENT_RATIO: f64 = 0.60;

fn sanitize(amount: f64) -> f64 {
    if amount.is_nan() { 0.0 } else { amount }
}

/// Level start-of-month payment that accumulates to `target` over
/// `years * 12` months, compounding monthly at `annual_rate / 12`
/// (future-value-of-annuity-due inverse).
fn monthly_saving_for_target(target: f64, annual_rate: f64, years: u32) -> f64 {
    let months = years.saturating_mul(12);
    if months == 0 || !(target > 0.0) || annual_rate.is_nan() {
        return 0.0;
    }
    let monthly_rate = annual_rate / 12.0;
    if monthly_rate.abs() < ZERO_RATE_EPS {
        return target / months as f64;
    }
    // Horizons past i32::MAX months saturate rather than wrapping the
    // exponent sign.
    let exponent = i32::try_from(months).unwrap_or(i32::MAX);
    let factor =
        ((1.0 + monthly_rate).powi(exponent) - 1.0) / monthly_rate * (1.0 + monthly_rate);
    target / factor
}

/// Retirement fund: projects today's spending to the retirement date, nets
/// off the social-insurance pension, prices the withdrawal phase as a level
/// real annuity-due, and solves the monthly contribution that closes the gap.
pub fn calculate_retirement(inputs: &RetirementInputs) -> PlanResult {
    let years_to_retire = inputs.retire_age.saturating_sub(inputs.current_age);
    let years_in_retirement = inputs.life_expectancy.saturating_sub(inputs.retire_age);

    let future_monthly_expense = future_value(
        sanitize(inputs.current_monthly_expense),
        inputs.inflation_rate,
        years_to_retire,
    );
    let estimated_pension = if inputs.has_social_insurance {
        // Defined-benefit pension: wage basis scales with inflation, then a
        // fixed replacement ratio applies.
        future_value(
            sanitize(inputs.social_insurance_salary_basis),
            inputs.inflation_rate,
            years_to_retire,
        ) * PENSION_REPLACEMENT_RATIO
    } else {
        0.0
    };
    let net_monthly_needed = (future_monthly_expense - estimated_pension).max(0.0);
    let future_annual_expense = net_monthly_needed * 12.0;

    let withdrawal_real_rate = real_rate(inputs.investment_rate, inputs.inflation_rate);
    let required_amount = pv_annuity_due(
        future_annual_expense,
        withdrawal_real_rate,
        years_in_retirement,
    )
    .max(0.0)
    .round();
    let current_amount = future_value(
        sanitize(inputs.current_savings),
        inputs.existing_asset_growth_rate,
        years_to_retire,
    )
    .max(0.0)
    .round();
    let shortfall = (required_amount - current_amount).max(0.0);

    // With no accumulation years left there is nothing to amortize; the
    // shortfall is still reported but the monthly figure stays 0.
    let monthly_saving_needed = if shortfall > 0.0 && years_to_retire > 0 {
        monthly_saving_for_target(shortfall, inputs.investment_rate, years_to_retire).round()
    } else {
        0.0
    };

    PlanResult {
        goal: Goal::Retirement,
        required_amount,
        current_amount,
        shortfall,
        monthly_saving_needed,
        details: PlanDetails::Retirement(RetirementDetails {
            years_to_retire,
            years_in_retirement,
            future_monthly_expense: future_monthly_expense.round(),
            estimated_pension: estimated_pension.round(),
            net_monthly_needed: net_monthly_needed.round(),
            future_annual_expense: future_annual_expense.round(),
            real_rate: withdrawal_real_rate * 100.0,
            future_savings: current_amount,
        }),
    }
}

/// Education fund: first-year cost projected to university start, then priced
/// as a level real annuity-due over the study duration. Tuition inflation
/// within the study years is deliberately not compounded further; the
/// level-real-annuity simplification is part of the advertised arithmetic.
pub fn calculate_education(inputs: &EducationInputs) -> PlanResult {
    let years_to_uni = inputs
        .university_start_age
        .saturating_sub(inputs.child_current_age);

    let future_tuition_first_year = future_value(
        sanitize(inputs.current_annual_cost),
        inputs.inflation_rate,
        years_to_uni,
    );
    let study_real_rate = real_rate(inputs.investment_rate, inputs.inflation_rate);
    let required_amount = pv_annuity_due(
        future_tuition_first_year,
        study_real_rate,
        inputs.duration_years,
    )
    .max(0.0)
    .round();
    let current_amount = future_value(
        sanitize(inputs.current_savings),
        inputs.investment_rate,
        years_to_uni,
    )
    .max(0.0)
    .round();
    let shortfall = (required_amount - current_amount).max(0.0);

    // Unlike retirement, a zero horizon here reports the whole shortfall as
    // due this month. The asymmetry matches observed product behavior.
    let monthly_saving_needed = if shortfall > 0.0 {
        if years_to_uni == 0 {
            shortfall
        } else {
            monthly_saving_for_target(shortfall, inputs.investment_rate, years_to_uni).round()
        }
    } else {
        0.0
    };

    PlanResult {
        goal: Goal::Education,
        required_amount,
        current_amount,
        shortfall,
        monthly_saving_needed,
        details: PlanDetails::Education(EducationDetails {
            years_to_uni,
            future_tuition_first_year: future_tuition_first_year.round(),
            uni_duration: inputs.duration_years,
            real_rate: study_real_rate * 100.0,
            total_fund_needed: required_amount,
        }),
    }
}

/// Income protection: nominal arithmetic only. This goal is framed as "buy
/// cover now", so no savings stream is amortized.
pub fn calculate_protection(inputs: &ProtectionInputs) -> PlanResult {
    let monthly_income = sanitize(inputs.monthly_income);
    let income_protection_needed = monthly_income * 12.0 * inputs.support_years as f64;
    let debt_coverage = sanitize(inputs.outstanding_loans);
    let required_amount =
        (income_protection_needed + debt_coverage + sanitize(inputs.emergency_fund)).round();
    let current_amount = sanitize(inputs.existing_coverage).max(0.0).round();
    let shortfall = (required_amount - current_amount).max(0.0);

    PlanResult {
        goal: Goal::Protection,
        required_amount,
        current_amount,
        shortfall,
        monthly_saving_needed: 0.0,
        details: PlanDetails::Protection(ProtectionDetails {
            income_protection_needed: income_protection_needed.round(),
            debt_coverage: debt_coverage.round(),
            support_years: inputs.support_years,
            monthly_income: monthly_income.round(),
        }),
    }
}

/// Health fund: treatment cost plus income replaced during recovery.
pub fn calculate_health_fund(inputs: &HealthInputs) -> PlanResult {
    let monthly_income = sanitize(inputs.monthly_income);
    let medical_cost = sanitize(inputs.medical_cost);
    let income_during_recovery = monthly_income * 12.0 * inputs.recovery_years as f64;
    let required_amount = (medical_cost + income_during_recovery).round();
    let current_amount = sanitize(inputs.existing_health_cover).max(0.0).round();
    let shortfall = (required_amount - current_amount).max(0.0);

    PlanResult {
        goal: Goal::Health,
        required_amount,
        current_amount,
        shortfall,
        monthly_saving_needed: 0.0,
        details: PlanDetails::Health(HealthDetails {
            medical_cost: medical_cost.round(),
            income_during_recovery: income_during_recovery.round(),
            recovery_years: inputs.recovery_years,
            monthly_income: monthly_income.round(),
        }),
    }
}

/// Legacy fund: a fixed bequest per heir against assets already in place.
pub fn calculate_legacy_fund(inputs: &LegacyInputs) -> PlanResult {
    let amount_per_heir = sanitize(inputs.amount_per_heir);
    let required_amount = (inputs.number_of_heirs as f64 * amount_per_heir).round();
    let current_amount = sanitize(inputs.current_assets).max(0.0).round();
    let shortfall = (required_amount - current_amount).max(0.0);

    PlanResult {
        goal: Goal::Legacy,
        required_amount,
        current_amount,
        shortfall,
        monthly_saving_needed: 0.0,
        details: PlanDetails::Legacy(LegacyDetails {
            number_of_heirs: inputs.number_of_heirs,
            amount_per_heir: amount_per_heir.round(),
        }),
    }
}
