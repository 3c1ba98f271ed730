//! MCP tool surface for the FinOps handlers.
//!
//! This layer is deliberately thin: it registers the five tools with their
//! LLM-facing descriptions and forwards each call to [`FinopsTools`]. A
//! backend failure never becomes a protocol error; the handler's `❌`
//! diagnostic text rides back as a normal tool result so the calling agent
//! always has something to read.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt};

use mavvrik_finops::{
    CostCompareRequest, CostOverviewRequest, CostRankingsRequest, CostTrendRequest, FinopsTools,
    K8sDrilldownRequest,
};

const INSTRUCTIONS: &str = "Mavvrik Cost Intelligence tools. Use mvk_cost_overview for total \
spend, mvk_cost_trend for time-series and spike diagnosis, mvk_cost_rankings for top-N cost \
drivers in one month, mvk_k8s_drilldown for anything Kubernetes (cluster/namespace/node), and \
mvk_cost_compare for variance between two periods. Every tool returns markdown with a JSON \
payload and a dashboard link for manual verification.";

/// The Mavvrik MCP server: five FinOps tools over stdio.
#[derive(Clone)]
pub struct MavvrikServer {
    finops: Arc<FinopsTools>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl MavvrikServer {
    pub fn new(finops: FinopsTools) -> Self {
        Self {
            finops: Arc::new(finops),
            tool_router: Self::tool_router(),
        }
    }

    /// Serve the MCP protocol on stdin/stdout until the client disconnects.
    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        let service = self.serve(rmcp::transport::io::stdio()).await?;
        service.waiting().await?;
        Ok(())
    }

    #[tool(
        name = "mvk_cost_overview",
        description = "Calculate the single SCALAR total cost (aggregated bill) for a time \
period. Use when the user asks for total spend, 'how much did we spend?', or an invoice total. \
Do NOT use for breakdowns, trends, or comparisons. Scope with `provider` only when the user \
names a cloud (e.g. 'Total AWS spend')."
    )]
    async fn cost_overview(
        &self,
        Parameters(req): Parameters<CostOverviewRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(text_result(self.finops.cost_overview(req).await))
    }

    #[tool(
        name = "mvk_cost_trend",
        description = "Generate time-series data to visualize spending patterns, spikes, or \
trends over time. Use for 'trend', 'over time', 'daily spend', or 'is cost spiking?'. For \
diagnosing 'why did cost go up?', call this first with a `split_by` dimension: product_name for \
services, provider_code for clouds, location_id for regions. Omit `split_by` for one total line."
    )]
    async fn cost_trend(
        &self,
        Parameters(req): Parameters<CostTrendRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(text_result(self.finops.cost_trend(req).await))
    }

    #[tool(
        name = "mvk_cost_rankings",
        description = "Identify the TOP cost drivers for a single month. Use for 'top X', \
'biggest spenders', or 'who spent the most?'. Category billing_account_id covers teams, \
accounts, and subscriptions; location_id covers regions. Not for Kubernetes questions; use \
mvk_k8s_drilldown for those. Limit defaults to 5 and is capped at 20."
    )]
    async fn cost_rankings(
        &self,
        Parameters(req): Parameters<CostRankingsRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(text_result(self.finops.cost_rankings(req).await))
    }

    #[tool(
        name = "mvk_k8s_drilldown",
        description = "Analyze KUBERNETES (K8s) cost metrics. Use if and only if the user \
mentions Kubernetes, K8s, EKS, AKS, GKE, clusters, nodes, or namespaces. Group by cluster_id \
for 'which cluster costs the most?', namespace for team-level costs, node for compute \
infrastructure. For standard cloud VM/storage costs use mvk_cost_rankings instead."
    )]
    async fn k8s_drilldown(
        &self,
        Parameters(req): Parameters<K8sDrilldownRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(text_result(self.finops.k8s_drilldown(req).await))
    }

    #[tool(
        name = "mvk_cost_compare",
        description = "Compare total cost between two time periods and calculate the variance: \
absolute difference (base minus comparison, in USD) and percentage change. Use for 'compare', \
'growth', 'increase/decrease', or month-over-month questions, and to establish the exact \
magnitude of a change before diagnosing it."
    )]
    async fn cost_compare(
        &self,
        Parameters(req): Parameters<CostCompareRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(text_result(self.finops.cost_compare(req).await))
    }
}

fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

#[tool_handler]
impl ServerHandler for MavvrikServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
