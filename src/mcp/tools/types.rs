//! MCP tool request and response types with JSON schemas

use crate::health::types::{BenefitLine, PlanId, Provider, ProviderQuery};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Tool 1: check_mcp_status
// ============================================================================

/// Response for check_mcp_status tool
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct StatusResponse {
    #[schemars(description = "Server version")]
    pub server_version: String,

    #[schemars(description = "Number of claims in the dataset")]
    pub claims: usize,

    #[schemars(description = "Number of plans in the dataset")]
    pub plans: usize,

    #[schemars(description = "Number of providers in the dataset")]
    pub providers: usize,
}

// ============================================================================
// Tool 2: get_claim_details
// ============================================================================

/// Request for get_claim_details tool
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ClaimRequest {
    #[schemars(description = "The unique identifier for the insurance claim (e.g. CLM123456)")]
    pub claim_number: String,
}

// Response: Claim (from health/types.rs)

// ============================================================================
// Tool 3: get_plan_benefits
// ============================================================================

/// Request for get_plan_benefits tool
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PlanBenefitsRequest {
    #[schemars(description = "The unique identifier for the insurance plan (e.g. PLAN001)")]
    pub plan_id: String,
}

/// Response for get_plan_benefits tool
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct PlanBenefitsResponse {
    #[schemars(description = "Plan the benefits belong to")]
    pub plan_id: PlanId,

    #[schemars(description = "Benefit lines in plan order")]
    pub benefits: Vec<BenefitLine>,
}

// ============================================================================
// Tool 4: get_health_provider_details
// ============================================================================

/// Request for get_health_provider_details tool
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ProviderSearchRequest {
    #[serde(default)]
    #[schemars(description = "Full or partial provider name, case-insensitive (optional)")]
    pub provider_name: Option<String>,

    #[serde(default)]
    #[schemars(description = "Exact ZIP code to search within (optional)")]
    pub zip_code: Option<String>,
}

impl From<ProviderSearchRequest> for ProviderQuery {
    fn from(request: ProviderSearchRequest) -> Self {
        Self {
            provider_name: request.provider_name,
            zip_code: request.zip_code,
        }
    }
}

/// Response for get_health_provider_details tool
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ProvidersResponse {
    #[schemars(description = "Matching providers in listing order")]
    pub providers: Vec<Provider>,

    #[schemars(description = "Number of matching providers")]
    pub total: usize,
}

impl From<Vec<Provider>> for ProvidersResponse {
    fn from(providers: Vec<Provider>) -> Self {
        Self {
            total: providers.len(),
            providers,
        }
    }
}
