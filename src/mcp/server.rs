use crate::health::{self, Claim, HealthDataSource, ProviderQuery};
use crate::logging::redact_id;
use crate::mcp::tools::{
    ClaimRequest, PlanBenefitsRequest, PlanBenefitsResponse, ProviderSearchRequest,
    ProvidersResponse, StatusResponse,
};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, InitializeResult, ProtocolVersion, ServerCapabilities};
use rmcp::{ErrorData as McpError, Json, ServerHandler, ServiceExt, tool, tool_handler, tool_router};
use std::sync::Arc;

#[derive(Clone)]
pub struct HealthServer {
    source: Arc<dyn HealthDataSource>,
    name: String,
    tool_router: ToolRouter<Self>,
}

impl HealthServer {
    pub fn new(source: Arc<dyn HealthDataSource>, name: impl Into<String>) -> Self {
        Self {
            source,
            name: name.into(),
            tool_router: Self::tool_router(),
        }
    }

    pub async fn run_stdio(self) -> anyhow::Result<()> {
        use tokio::io::{stdin, stdout};

        // Create stdio transport
        let transport = (stdin(), stdout());

        // Start MCP server with stdio transport
        let server = self.serve(transport).await?;

        // Wait for shutdown signal (blocks until server terminates)
        server.waiting().await?;

        Ok(())
    }
}

// ============================================================================
// MCP Tools
// ============================================================================

#[tool_router]
impl HealthServer {
    /// Tool 1: check_mcp_status - Health check and dataset diagnostics
    #[tool(description = "Report server version and how many claims, plans and providers are loaded")]
    pub async fn check_mcp_status(&self) -> Result<Json<StatusResponse>, McpError> {
        let counts = self.source.counts();

        Ok(Json(StatusResponse {
            server_version: env!("CARGO_PKG_VERSION").to_string(),
            claims: counts.claims,
            plans: counts.plans,
            providers: counts.providers,
        }))
    }

    /// Tool 2: get_claim_details - Claim status and amounts by claim number
    #[tool(description = "Retrieve claim status and details by claim number")]
    pub async fn get_claim_details(
        &self,
        Parameters(request): Parameters<ClaimRequest>,
    ) -> Result<Json<Claim>, McpError> {
        tracing::info!(claim = %redact_id(&request.claim_number), "get_claim_details");

        let claim = health::get_claim(self.source.as_ref(), &request.claim_number)
            .inspect_err(|e| tracing::warn!(kind = e.kind(), "get_claim_details failed"))?;

        Ok(Json(claim))
    }

    /// Tool 3: get_plan_benefits - Ordered coverage lines of a plan
    #[tool(description = "Retrieve benefits and coverage details for a specific health insurance plan")]
    pub async fn get_plan_benefits(
        &self,
        Parameters(request): Parameters<PlanBenefitsRequest>,
    ) -> Result<Json<PlanBenefitsResponse>, McpError> {
        tracing::info!(plan = %redact_id(&request.plan_id), "get_plan_benefits");

        let benefits = health::get_plan_benefits(self.source.as_ref(), &request.plan_id)
            .inspect_err(|e| tracing::warn!(kind = e.kind(), "get_plan_benefits failed"))?;

        Ok(Json(PlanBenefitsResponse {
            plan_id: health::PlanId(request.plan_id),
            benefits,
        }))
    }

    /// Tool 4: get_health_provider_details - Provider search by name and/or ZIP
    #[tool(description = "Search for healthcare providers by name and/or zip code. Both filters are optional; with none, all providers are returned")]
    pub async fn get_health_provider_details(
        &self,
        Parameters(request): Parameters<ProviderSearchRequest>,
    ) -> Result<Json<ProvidersResponse>, McpError> {
        let query = ProviderQuery::from(request);
        let providers = health::search_providers(self.source.as_ref(), &query);

        tracing::info!(
            by_name = query.provider_name.is_some(),
            by_zip = query.zip_code.is_some(),
            matches = providers.len(),
            "get_health_provider_details"
        );

        Ok(Json(ProvidersResponse::from(providers)))
    }
}

#[tool_handler]
impl ServerHandler for HealthServer {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Health Assistant MCP - Look up insurance claims, plan benefits and healthcare providers"
                    .to_string(),
            ),
        }
    }
}
