//! `liftoff create` — create a stack if it does not exist yet.

use std::time::Duration;

use anyhow::Result;
use clap::Args;

use crate::application::ports::{OverrideStore, StackApi, TemplateSource};
use crate::application::services::deploy;
use crate::domain::stack::StackConfig;
use crate::output::OutputContext;
use crate::output::reporter::TerminalReporter;

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Stack name — the deployment's cloud-side identifier
    pub name: String,

    /// Application template name (loads cloud_formation/<app>.json)
    #[arg(long)]
    pub app: String,

    /// Parent stack whose outputs seed this stack's parameters (repeatable,
    /// later parents win on duplicate output keys)
    #[arg(long = "parent", value_name = "STACK")]
    pub parents: Vec<String>,

    /// Stage label applied as the stack's stage tag (defaults to the stack name)
    #[arg(long)]
    pub stage: Option<String>,

    /// Seconds to wait for creation to complete before giving up
    #[arg(long, value_name = "SECS", default_value_t = 1800)]
    pub timeout: u64,
}

impl CreateArgs {
    /// Resolve the arguments into a stack configuration.
    #[must_use]
    pub fn stack_config(&self) -> StackConfig {
        let mut config = StackConfig::new(&self.name, &self.app);
        config.parent_stacks.clone_from(&self.parents);
        if let Some(stage) = &self.stage {
            config.stage.clone_from(stage);
        }
        config.wait_timeout = Duration::from_secs(self.timeout);
        config
    }
}

/// Run `liftoff create`.
///
/// Returns `Ok(false)` when the stack did not reach a complete state in
/// time — the caller maps that to a non-zero exit code.
///
/// # Errors
///
/// Returns an error for malformed override files, missing templates, and
/// rejected creation requests.
pub async fn run(
    config: &StackConfig,
    api: &impl StackApi,
    store: &impl OverrideStore,
    templates: &impl TemplateSource,
    ctx: &OutputContext,
) -> Result<bool> {
    let reporter = TerminalReporter::new(ctx);
    let created = deploy::create_stack(api, store, templates, &reporter, config).await?;

    if !created {
        ctx.error(&format!(
            "Stack {} was not created. Check the provider console for details; \
             a later run will pick up a stack that finished after the timeout.",
            config.name
        ));
    }
    Ok(created)
}
