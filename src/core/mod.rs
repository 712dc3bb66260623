mod engine;
mod scenario;
mod timevalue;
mod types;

pub use engine::{
    calculate_education, calculate_health_fund, calculate_legacy_fund, calculate_protection,
    calculate_retirement,
};
pub use scenario::{RetirementComparison, ScenarioRates, compare_retirement_scenarios};
pub use timevalue::{future_value, pv_annuity_due};
pub use types::{
    EducationDetails, EducationInputs, Goal, HealthDetails, HealthInputs, LegacyDetails,
    LegacyInputs, PlanDetails, PlanResult, ProtectionDetails, ProtectionInputs, RetirementDetails,
    RetirementInputs,
};
