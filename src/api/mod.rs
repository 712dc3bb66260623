use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    EducationInputs, HealthInputs, LegacyInputs, ProtectionInputs, RetirementInputs,
    ScenarioRates, calculate_education, calculate_health_fund, calculate_legacy_fund,
    calculate_protection, calculate_retirement, compare_retirement_scenarios,
};

/// Wire payloads carry rates as PERCENTAGES (4 means 4%) and money in whole
/// currency units, matching what the planning UI collects. Builders below
/// convert to the decimal rates the engine expects. Every field is optional
/// so the UI can send only what the agent edited.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RetirementPayload {
    current_age: Option<u32>,
    retire_age: Option<u32>,
    life_expectancy: Option<u32>,
    monthly_expense: Option<f64>,
    inflation_rate: Option<f64>,
    investment_rate: Option<f64>,
    current_savings: Option<f64>,
    has_social_insurance: Option<bool>,
    social_insurance_salary: Option<f64>,
    existing_asset_growth_rate: Option<f64>,
    /// Only read by the compare endpoint.
    bank_rate: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct EducationPayload {
    child_current_age: Option<u32>,
    university_start_age: Option<u32>,
    duration_years: Option<u32>,
    annual_cost: Option<f64>,
    inflation_rate: Option<f64>,
    investment_rate: Option<f64>,
    current_savings: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProtectionPayload {
    monthly_income: Option<f64>,
    support_years: Option<u32>,
    existing_coverage: Option<f64>,
    outstanding_loans: Option<f64>,
    emergency_fund: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct HealthPayload {
    medical_cost: Option<f64>,
    monthly_income: Option<f64>,
    recovery_years: Option<u32>,
    existing_health_cover: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LegacyPayload {
    number_of_heirs: Option<u32>,
    amount_per_heir: Option<f64>,
    current_assets: Option<f64>,
}

/// Resolved retirement form in wire units (percent rates). The separate step
/// keeps defaults, overrides, and validation independently testable.
#[derive(Debug, Clone)]
struct RetirementForm {
    current_age: u32,
    retire_age: u32,
    life_expectancy: u32,
    monthly_expense: f64,
    inflation_rate: f64,
    investment_rate: f64,
    current_savings: f64,
    has_social_insurance: bool,
    social_insurance_salary: f64,
    existing_asset_growth_rate: Option<f64>,
}

fn default_retirement_form() -> RetirementForm {
    RetirementForm {
        current_age: 30,
        retire_age: 60,
        life_expectancy: 85,
        monthly_expense: 15_000_000.0,
        inflation_rate: 4.0,
        investment_rate: 12.0,
        current_savings: 0.0,
        has_social_insurance: false,
        social_insurance_salary: 0.0,
        existing_asset_growth_rate: None,
    }
}

fn apply_retirement_payload(mut form: RetirementForm, payload: RetirementPayload) -> RetirementForm {
    if let Some(v) = payload.current_age {
        form.current_age = v;
    }
    if let Some(v) = payload.retire_age {
        form.retire_age = v;
    }
    if let Some(v) = payload.life_expectancy {
        form.life_expectancy = v;
    }
    if let Some(v) = payload.monthly_expense {
        form.monthly_expense = v;
    }
    if let Some(v) = payload.inflation_rate {
        form.inflation_rate = v;
    }
    if let Some(v) = payload.investment_rate {
        form.investment_rate = v;
    }
    if let Some(v) = payload.current_savings {
        form.current_savings = v;
    }
    if let Some(v) = payload.has_social_insurance {
        form.has_social_insurance = v;
    }
    if let Some(v) = payload.social_insurance_salary {
        form.social_insurance_salary = v;
    }
    if let Some(v) = payload.existing_asset_growth_rate {
        form.existing_asset_growth_rate = Some(v);
    }
    form
}

/// Upper bound on any age or year-count field. Keeps the engine's
/// month-count arithmetic far away from integer limits.
const MAX_PLAN_YEARS: u32 = 130;

fn check_rate_percent(name: &str, value: f64) -> Result<(), String> {
    // -100 itself is excluded: a total loss every period makes the Fisher
    // deflator divide by zero.
    if !value.is_finite() || value <= -100.0 || value >= 1000.0 {
        return Err(format!("{name} must be > -100 and < 1000"));
    }
    Ok(())
}

fn check_years(name: &str, value: u32) -> Result<(), String> {
    if value > MAX_PLAN_YEARS {
        return Err(format!("{name} must be <= {MAX_PLAN_YEARS}"));
    }
    Ok(())
}

fn check_money(name: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{name} must be >= 0"));
    }
    Ok(())
}

fn build_retirement_inputs(form: RetirementForm) -> Result<RetirementInputs, String> {
    check_years("currentAge", form.current_age)?;
    check_years("retireAge", form.retire_age)?;
    check_years("lifeExpectancy", form.life_expectancy)?;
    check_money("monthlyExpense", form.monthly_expense)?;
    check_money("currentSavings", form.current_savings)?;
    check_money("socialInsuranceSalary", form.social_insurance_salary)?;
    check_rate_percent("inflationRate", form.inflation_rate)?;
    check_rate_percent("investmentRate", form.investment_rate)?;
    if let Some(rate) = form.existing_asset_growth_rate {
        check_rate_percent("existingAssetGrowthRate", rate)?;
    }

    // The engine requires an explicit growth path for existing assets; the
    // wire default is the investment rate the caller settled on.
    let existing_asset_growth_rate = form
        .existing_asset_growth_rate
        .unwrap_or(form.investment_rate);

    Ok(RetirementInputs {
        current_age: form.current_age,
        retire_age: form.retire_age,
        life_expectancy: form.life_expectancy,
        current_monthly_expense: form.monthly_expense,
        inflation_rate: form.inflation_rate / 100.0,
        investment_rate: form.investment_rate / 100.0,
        current_savings: form.current_savings,
        has_social_insurance: form.has_social_insurance,
        social_insurance_salary_basis: form.social_insurance_salary,
        existing_asset_growth_rate: existing_asset_growth_rate / 100.0,
    })
}

fn retirement_inputs_from_payload(payload: RetirementPayload) -> Result<RetirementInputs, String> {
    build_retirement_inputs(apply_retirement_payload(default_retirement_form(), payload))
}

fn education_inputs_from_payload(payload: EducationPayload) -> Result<EducationInputs, String> {
    let annual_cost = payload.annual_cost.unwrap_or(100_000_000.0);
    let current_savings = payload.current_savings.unwrap_or(0.0);
    let inflation_rate = payload.inflation_rate.unwrap_or(4.0);
    let investment_rate = payload.investment_rate.unwrap_or(12.0);
    let child_current_age = payload.child_current_age.unwrap_or(5);
    let university_start_age = payload.university_start_age.unwrap_or(18);
    let duration_years = payload.duration_years.unwrap_or(4);

    check_years("childCurrentAge", child_current_age)?;
    check_years("universityStartAge", university_start_age)?;
    check_years("durationYears", duration_years)?;
    check_money("annualCost", annual_cost)?;
    check_money("currentSavings", current_savings)?;
    check_rate_percent("inflationRate", inflation_rate)?;
    check_rate_percent("investmentRate", investment_rate)?;

    Ok(EducationInputs {
        child_current_age,
        university_start_age,
        duration_years,
        current_annual_cost: annual_cost,
        inflation_rate: inflation_rate / 100.0,
        investment_rate: investment_rate / 100.0,
        current_savings,
    })
}

fn protection_inputs_from_payload(payload: ProtectionPayload) -> Result<ProtectionInputs, String> {
    let monthly_income = payload.monthly_income.unwrap_or(30_000_000.0);
    let existing_coverage = payload.existing_coverage.unwrap_or(0.0);
    let outstanding_loans = payload.outstanding_loans.unwrap_or(0.0);
    let emergency_fund = payload.emergency_fund.unwrap_or(0.0);
    let support_years = payload.support_years.unwrap_or(10);

    check_years("supportYears", support_years)?;
    check_money("monthlyIncome", monthly_income)?;
    check_money("existingCoverage", existing_coverage)?;
    check_money("outstandingLoans", outstanding_loans)?;
    check_money("emergencyFund", emergency_fund)?;

    Ok(ProtectionInputs {
        monthly_income,
        support_years,
        existing_coverage,
        outstanding_loans,
        emergency_fund,
    })
}

fn health_inputs_from_payload(payload: HealthPayload) -> Result<HealthInputs, String> {
    let medical_cost = payload.medical_cost.unwrap_or(200_000_000.0);
    let monthly_income = payload.monthly_income.unwrap_or(30_000_000.0);
    let existing_health_cover = payload.existing_health_cover.unwrap_or(0.0);
    let recovery_years = payload.recovery_years.unwrap_or(2);

    check_years("recoveryYears", recovery_years)?;
    check_money("medicalCost", medical_cost)?;
    check_money("monthlyIncome", monthly_income)?;
    check_money("existingHealthCover", existing_health_cover)?;

    Ok(HealthInputs {
        medical_cost,
        monthly_income,
        recovery_years,
        existing_health_cover,
    })
}

fn legacy_inputs_from_payload(payload: LegacyPayload) -> Result<LegacyInputs, String> {
    let amount_per_heir = payload.amount_per_heir.unwrap_or(500_000_000.0);
    let current_assets = payload.current_assets.unwrap_or(0.0);

    check_money("amountPerHeir", amount_per_heir)?;
    check_money("currentAssets", current_assets)?;

    Ok(LegacyInputs {
        number_of_heirs: payload.number_of_heirs.unwrap_or(1),
        amount_per_heir,
        current_assets,
    })
}

fn compare_request_from_payload(
    payload: RetirementPayload,
) -> Result<(RetirementInputs, ScenarioRates), String> {
    let bank_rate = payload.bank_rate.unwrap_or(6.0);
    check_rate_percent("bankRate", bank_rate)?;

    let inputs = retirement_inputs_from_payload(payload)?;
    let rates = ScenarioRates {
        bank_rate: bank_rate / 100.0,
        investment_rate: inputs.investment_rate,
    };
    Ok((inputs, rates))
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ServiceInfo {
    service: &'static str,
    version: &'static str,
    endpoints: &'static [&'static str],
}

const ENDPOINTS: &[&str] = &[
    "/api/plan/retirement",
    "/api/plan/retirement/compare",
    "/api/plan/education",
    "/api/plan/protection",
    "/api/plan/health",
    "/api/plan/legacy",
];

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route(
            "/api/plan/retirement",
            get(retirement_get_handler).post(retirement_post_handler),
        )
        .route(
            "/api/plan/retirement/compare",
            get(compare_get_handler).post(compare_post_handler),
        )
        .route(
            "/api/plan/education",
            get(education_get_handler).post(education_post_handler),
        )
        .route(
            "/api/plan/protection",
            get(protection_get_handler).post(protection_post_handler),
        )
        .route(
            "/api/plan/health",
            get(health_get_handler).post(health_post_handler),
        )
        .route(
            "/api/plan/legacy",
            get(legacy_get_handler).post(legacy_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    log::info!("planning API listening on http://{addr}");
    axum::serve(listener, app).await
}

async fn index_handler() -> Response {
    json_response(
        StatusCode::OK,
        ServiceInfo {
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            endpoints: ENDPOINTS,
        },
    )
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn retirement_get_handler(Query(payload): Query<RetirementPayload>) -> Response {
    plan_retirement(payload)
}

async fn retirement_post_handler(Json(payload): Json<RetirementPayload>) -> Response {
    plan_retirement(payload)
}

async fn compare_get_handler(Query(payload): Query<RetirementPayload>) -> Response {
    plan_compare(payload)
}

async fn compare_post_handler(Json(payload): Json<RetirementPayload>) -> Response {
    plan_compare(payload)
}

async fn education_get_handler(Query(payload): Query<EducationPayload>) -> Response {
    plan_education(payload)
}

async fn education_post_handler(Json(payload): Json<EducationPayload>) -> Response {
    plan_education(payload)
}

async fn protection_get_handler(Query(payload): Query<ProtectionPayload>) -> Response {
    plan_protection(payload)
}

async fn protection_post_handler(Json(payload): Json<ProtectionPayload>) -> Response {
    plan_protection(payload)
}

async fn health_get_handler(Query(payload): Query<HealthPayload>) -> Response {
    plan_health(payload)
}

async fn health_post_handler(Json(payload): Json<HealthPayload>) -> Response {
    plan_health(payload)
}

async fn legacy_get_handler(Query(payload): Query<LegacyPayload>) -> Response {
    plan_legacy(payload)
}

async fn legacy_post_handler(Json(payload): Json<LegacyPayload>) -> Response {
    plan_legacy(payload)
}

fn plan_retirement(payload: RetirementPayload) -> Response {
    match retirement_inputs_from_payload(payload) {
        Ok(inputs) => json_response(StatusCode::OK, calculate_retirement(&inputs)),
        Err(msg) => rejected(&msg),
    }
}

fn plan_compare(payload: RetirementPayload) -> Response {
    match compare_request_from_payload(payload) {
        Ok((inputs, rates)) => {
            json_response(StatusCode::OK, compare_retirement_scenarios(&inputs, rates))
        }
        Err(msg) => rejected(&msg),
    }
}

fn plan_education(payload: EducationPayload) -> Response {
    match education_inputs_from_payload(payload) {
        Ok(inputs) => json_response(StatusCode::OK, calculate_education(&inputs)),
        Err(msg) => rejected(&msg),
    }
}

fn plan_protection(payload: ProtectionPayload) -> Response {
    match protection_inputs_from_payload(payload) {
        Ok(inputs) => json_response(StatusCode::OK, calculate_protection(&inputs)),
        Err(msg) => rejected(&msg),
    }
}

fn plan_health(payload: HealthPayload) -> Response {
    match health_inputs_from_payload(payload) {
        Ok(inputs) => json_response(StatusCode::OK, calculate_health_fund(&inputs)),
        Err(msg) => rejected(&msg),
    }
}

fn plan_legacy(payload: LegacyPayload) -> Response {
    match legacy_inputs_from_payload(payload) {
        Ok(inputs) => json_response(StatusCode::OK, calculate_legacy_fund(&inputs)),
        Err(msg) => rejected(&msg),
    }
}

fn rejected(msg: &str) -> Response {
    log::warn!("rejected plan request: {msg}");
    error_response(StatusCode::BAD_REQUEST, msg)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Goal, PlanDetails};

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn retirement_payload_from_json(json: &str) -> RetirementPayload {
        serde_json::from_str(json).expect("payload should parse")
    }

    #[test]
    fn retirement_defaults_convert_percent_rates_to_decimals() {
        let inputs = retirement_inputs_from_payload(RetirementPayload::default())
            .expect("defaults must be valid");

        assert_eq!(inputs.current_age, 30);
        assert_eq!(inputs.retire_age, 60);
        assert_eq!(inputs.life_expectancy, 85);
        assert_approx(inputs.inflation_rate, 0.04);
        assert_approx(inputs.investment_rate, 0.12);
        // Growth path defaults to the investment rate when not sent.
        assert_approx(inputs.existing_asset_growth_rate, 0.12);
    }

    #[test]
    fn retirement_payload_parses_web_keys() {
        let payload = retirement_payload_from_json(
            r#"{
              "currentAge": 35,
              "retireAge": 62,
              "lifeExpectancy": 88,
              "monthlyExpense": 20000000,
              "inflationRate": 5,
              "investmentRate": 10,
              "currentSavings": 800000000,
              "hasSocialInsurance": true,
              "socialInsuranceSalary": 25000000,
              "existingAssetGrowthRate": 6
            }"#,
        );
        let inputs = retirement_inputs_from_payload(payload).expect("payload should build");

        assert_eq!(inputs.current_age, 35);
        assert_eq!(inputs.retire_age, 62);
        assert_eq!(inputs.life_expectancy, 88);
        assert_approx(inputs.current_monthly_expense, 20_000_000.0);
        assert_approx(inputs.inflation_rate, 0.05);
        assert_approx(inputs.investment_rate, 0.10);
        assert_approx(inputs.current_savings, 800_000_000.0);
        assert!(inputs.has_social_insurance);
        assert_approx(inputs.social_insurance_salary_basis, 25_000_000.0);
        assert_approx(inputs.existing_asset_growth_rate, 0.06);
    }

    #[test]
    fn retirement_growth_rate_only_defaults_when_absent() {
        let payload = retirement_payload_from_json(r#"{"investmentRate": 9}"#);
        let inputs = retirement_inputs_from_payload(payload).expect("payload should build");
        assert_approx(inputs.existing_asset_growth_rate, 0.09);

        let payload =
            retirement_payload_from_json(r#"{"investmentRate": 9, "existingAssetGrowthRate": 3}"#);
        let inputs = retirement_inputs_from_payload(payload).expect("payload should build");
        assert_approx(inputs.existing_asset_growth_rate, 0.03);
        assert_approx(inputs.investment_rate, 0.09);
    }

    #[test]
    fn retirement_rejects_negative_money() {
        let payload = retirement_payload_from_json(r#"{"currentSavings": -5}"#);
        let err = retirement_inputs_from_payload(payload).expect_err("must reject");
        assert!(err.contains("currentSavings"));
    }

    #[test]
    fn retirement_rejects_out_of_range_rate() {
        let payload = retirement_payload_from_json(r#"{"inflationRate": 1000}"#);
        let err = retirement_inputs_from_payload(payload).expect_err("must reject");
        assert!(err.contains("inflationRate"));

        // Hyperinflation is extreme but representable.
        let payload = retirement_payload_from_json(r#"{"inflationRate": 250}"#);
        let inputs = retirement_inputs_from_payload(payload).expect("must accept");
        assert_approx(inputs.inflation_rate, 2.5);
    }

    #[test]
    fn retirement_rejects_total_loss_inflation_rate() {
        // -100% exactly would zero the Fisher deflator and push a non-finite
        // realRate detail to the UI.
        let payload = retirement_payload_from_json(r#"{"inflationRate": -100}"#);
        let err = retirement_inputs_from_payload(payload).expect_err("must reject");
        assert!(err.contains("inflationRate"));

        let payload = retirement_payload_from_json(r#"{"inflationRate": -99.9}"#);
        let inputs = retirement_inputs_from_payload(payload).expect("must accept");
        let result = calculate_retirement(&inputs);
        assert!(result.required_amount.is_finite());
    }

    #[test]
    fn retirement_rejects_implausible_ages() {
        let payload = retirement_payload_from_json(r#"{"retireAge": 400000000}"#);
        let err = retirement_inputs_from_payload(payload).expect_err("must reject");
        assert!(err.contains("retireAge"));

        let payload = retirement_payload_from_json(r#"{"lifeExpectancy": 131}"#);
        let err = retirement_inputs_from_payload(payload).expect_err("must reject");
        assert!(err.contains("lifeExpectancy"));
    }

    #[test]
    fn education_and_protection_reject_implausible_year_counts() {
        let payload: EducationPayload =
            serde_json::from_str(r#"{"durationYears": 4000}"#).expect("payload should parse");
        let err = education_inputs_from_payload(payload).expect_err("must reject");
        assert!(err.contains("durationYears"));

        let err = protection_inputs_from_payload(ProtectionPayload {
            support_years: Some(100_000),
            ..ProtectionPayload::default()
        })
        .expect_err("must reject");
        assert!(err.contains("supportYears"));
    }

    #[test]
    fn retirement_accepts_retire_age_before_current_age() {
        // Engine quirk stays observable: no validation error, just a zero
        // accumulation phase.
        let payload = retirement_payload_from_json(r#"{"currentAge": 65, "retireAge": 60}"#);
        let inputs = retirement_inputs_from_payload(payload).expect("must not reject");
        let result = calculate_retirement(&inputs);
        assert_approx(result.monthly_saving_needed, 0.0);
    }

    #[test]
    fn compare_request_uses_bank_rate_for_both_legs_of_bank_scenario() {
        let payload = retirement_payload_from_json(r#"{"bankRate": 5, "investmentRate": 11}"#);
        let (inputs, rates) = compare_request_from_payload(payload).expect("must build");

        assert_approx(rates.bank_rate, 0.05);
        assert_approx(rates.investment_rate, 0.11);
        assert_approx(inputs.investment_rate, 0.11);
    }

    #[test]
    fn compare_rejects_out_of_range_bank_rate() {
        let payload = retirement_payload_from_json(r#"{"bankRate": 1000}"#);
        let err = compare_request_from_payload(payload).expect_err("must reject");
        assert!(err.contains("bankRate"));
    }

    #[test]
    fn education_payload_parses_and_converts() {
        let payload: EducationPayload = serde_json::from_str(
            r#"{
              "childCurrentAge": 8,
              "universityStartAge": 18,
              "durationYears": 5,
              "annualCost": 120000000,
              "inflationRate": 6,
              "investmentRate": 8,
              "currentSavings": 40000000
            }"#,
        )
        .expect("payload should parse");
        let inputs = education_inputs_from_payload(payload).expect("payload should build");

        assert_eq!(inputs.child_current_age, 8);
        assert_eq!(inputs.university_start_age, 18);
        assert_eq!(inputs.duration_years, 5);
        assert_approx(inputs.current_annual_cost, 120_000_000.0);
        assert_approx(inputs.inflation_rate, 0.06);
        assert_approx(inputs.investment_rate, 0.08);
        assert_approx(inputs.current_savings, 40_000_000.0);
    }

    #[test]
    fn protection_rejects_non_finite_income() {
        let err = protection_inputs_from_payload(ProtectionPayload {
            monthly_income: Some(f64::NAN),
            ..ProtectionPayload::default()
        })
        .expect_err("must reject");
        assert!(err.contains("monthlyIncome"));
    }

    #[test]
    fn retirement_response_serializes_ui_bound_keys() {
        let inputs = retirement_inputs_from_payload(RetirementPayload::default())
            .expect("defaults must be valid");
        let json = serde_json::to_string(&calculate_retirement(&inputs))
            .expect("result should serialize");

        assert!(json.contains("\"goal\":\"retirement\""));
        for key in [
            "requiredAmount",
            "currentAmount",
            "shortfall",
            "monthlySavingNeeded",
            "details",
            "yearsToRetire",
            "yearsInRetirement",
            "futureMonthlyExpense",
            "estimatedPension",
            "netMonthlyNeeded",
            "futureAnnualExpense",
            "realRate",
            "futureSavings",
        ] {
            assert!(json.contains(key), "missing key {key} in {json}");
        }
    }

    #[test]
    fn education_response_serializes_ui_bound_keys() {
        let inputs = education_inputs_from_payload(EducationPayload::default())
            .expect("defaults must be valid");
        let json =
            serde_json::to_string(&calculate_education(&inputs)).expect("result should serialize");

        assert!(json.contains("\"goal\":\"education\""));
        for key in [
            "yearsToUni",
            "futureTuitionFirstYear",
            "uniDuration",
            "realRate",
            "totalFundNeeded",
        ] {
            assert!(json.contains(key), "missing key {key} in {json}");
        }
    }

    #[test]
    fn protection_health_legacy_responses_serialize_ui_bound_keys() {
        let protection = protection_inputs_from_payload(ProtectionPayload::default())
            .expect("defaults must be valid");
        let json = serde_json::to_string(&calculate_protection(&protection))
            .expect("result should serialize");
        assert!(json.contains("\"goal\":\"protection\""));
        for key in [
            "incomeProtectionNeeded",
            "debtCoverage",
            "supportYears",
            "monthlyIncome",
        ] {
            assert!(json.contains(key), "missing key {key} in {json}");
        }

        let health =
            health_inputs_from_payload(HealthPayload::default()).expect("defaults must be valid");
        let json = serde_json::to_string(&calculate_health_fund(&health))
            .expect("result should serialize");
        assert!(json.contains("\"goal\":\"health\""));
        for key in [
            "medicalCost",
            "incomeDuringRecovery",
            "recoveryYears",
            "monthlyIncome",
        ] {
            assert!(json.contains(key), "missing key {key} in {json}");
        }

        let legacy =
            legacy_inputs_from_payload(LegacyPayload::default()).expect("defaults must be valid");
        let json = serde_json::to_string(&calculate_legacy_fund(&legacy))
            .expect("result should serialize");
        assert!(json.contains("\"goal\":\"legacy\""));
        for key in ["numberOfHeirs", "amountPerHeir"] {
            assert!(json.contains(key), "missing key {key} in {json}");
        }
    }

    #[test]
    fn compare_response_serializes_both_legs() {
        let payload = retirement_payload_from_json(r#"{"currentSavings": 500000000}"#);
        let (inputs, rates) = compare_request_from_payload(payload).expect("must build");
        let comparison = compare_retirement_scenarios(&inputs, rates);
        let json = serde_json::to_string(&comparison).expect("comparison should serialize");

        assert!(json.contains("\"bank\""));
        assert!(json.contains("\"invest\""));
        assert!(json.contains("\"monthlySavingReduction\""));
    }

    #[test]
    fn calculators_keep_goal_tags_distinct() {
        let inputs = retirement_inputs_from_payload(RetirementPayload::default())
            .expect("defaults must be valid");
        let result = calculate_retirement(&inputs);
        assert_eq!(result.goal, Goal::Retirement);
        assert!(matches!(result.details, PlanDetails::Retirement(_)));
    }
}
