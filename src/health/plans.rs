use crate::error::Error;
use crate::health::dataset::HealthDataSource;
use crate::health::types::BenefitLine;
use crate::health::validation::require_non_empty;

/// Resolve a plan id to its benefit lines, in declaration order
pub fn get_plan_benefits(
    source: &dyn HealthDataSource,
    plan_id: &str,
) -> Result<Vec<BenefitLine>, Error> {
    let plan_id = require_non_empty("plan_id", plan_id)?;

    source
        .plan_benefits(plan_id)
        .ok_or_else(|| Error::NotFound(format!("plan with ID {} not found", plan_id)))
}
