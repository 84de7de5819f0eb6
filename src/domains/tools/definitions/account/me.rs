//! Get account tool definition.
//!
//! Shows which Harmonica account the configured API key belongs to.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::domains::sessions::{Account, HarmonicaClient};
use crate::domains::tools::definitions::common::{
    ValidateParams, api_error_result, parse_params, success_result,
};

/// The tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetAccountParams {}

impl ValidateParams for GetAccountParams {}

/// Get account tool.
pub struct GetAccountTool;

impl GetAccountTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_account";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Show the Harmonica account (name, email, subscription) the API key belongs to";

    pub async fn execute(_params: &GetAccountParams, client: &HarmonicaClient) -> CallToolResult {
        info!("Get account tool called");

        match client.get_me().await {
            Ok(account) => success_result(render(&account)),
            Err(e) => api_error_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetAccountParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute bound to the given client.
    pub fn create_route<S>(client: Arc<HarmonicaClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let client = client.clone();
            async move {
                let params: GetAccountParams = parse_params(args).map_err(McpError::from)?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

fn render(account: &Account) -> String {
    let name = account
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or("(no name)");
    format!(
        "**{}**\nEmail: {}\nSubscription: {}\nAccount ID: {}",
        name, account.email, account.subscription_status, account.id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_account() {
        let account = Account {
            id: "u-1".to_string(),
            email: "ada@example.org".to_string(),
            name: None,
            subscription_status: "pro".to_string(),
        };
        assert_eq!(
            render(&account),
            "**(no name)**\nEmail: ada@example.org\nSubscription: pro\nAccount ID: u-1"
        );
    }

    #[test]
    fn test_no_arguments_accepted() {
        assert!(parse_params::<GetAccountParams>(None).is_ok());
    }
}
