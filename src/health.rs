pub mod claims;
pub mod dataset;
pub mod plans;
pub mod providers;
pub mod types;
pub mod validation;

pub use claims::get_claim;
pub use dataset::{Dataset, DatasetCounts, HealthDataSource};
pub use plans::get_plan_benefits;
pub use providers::search_providers;
pub use types::{BenefitLine, Claim, ClaimNumber, ClaimStatus, PlanId, Provider, ProviderQuery};
