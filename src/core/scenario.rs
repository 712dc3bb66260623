use serde::Serialize;

use super::engine::calculate_retirement;
use super::types::{PlanResult, RetirementInputs};

/// Rate pair for the bank-vs-investment framing: the same retirement plan
/// priced once at a savings-account rate and once at an investment rate.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioRates {
    pub bank_rate: f64,
    pub investment_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementComparison {
    pub bank: PlanResult,
    pub invest: PlanResult,
    /// How much less per month the invest scenario requires, floored at 0.
    pub monthly_saving_reduction: f64,
}

/// Runs the retirement calculator twice. Each leg uses its rate for both the
/// withdrawal-phase return and the existing-asset growth path, so the two
/// results differ only in the rate assumption.
pub fn compare_retirement_scenarios(
    inputs: &RetirementInputs,
    rates: ScenarioRates,
) -> RetirementComparison {
    let bank = calculate_retirement(&with_uniform_rate(inputs, rates.bank_rate));
    let invest = calculate_retirement(&with_uniform_rate(inputs, rates.investment_rate));
    let monthly_saving_reduction =
        (bank.monthly_saving_needed - invest.monthly_saving_needed).max(0.0);

    RetirementComparison {
        bank,
        invest,
        monthly_saving_reduction,
    }
}

fn with_uniform_rate(inputs: &RetirementInputs, rate: f64) -> RetirementInputs {
    let mut leg = inputs.clone();
    leg.investment_rate = rate;
    leg.existing_asset_growth_rate = rate;
    leg
}
