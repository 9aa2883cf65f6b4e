//! `liftoff status` — show a stack's status, creation time, and outputs.

use anyhow::Result;
use clap::Args;

use crate::application::ports::StackApi;
use crate::domain::stack::StackStatus;
use crate::output::OutputContext;

/// Arguments for the status command.
#[derive(Args)]
pub struct StatusArgs {
    /// Stack name to describe
    pub name: String,
}

/// Run `liftoff status`.
///
/// # Errors
///
/// Returns an error if the remote describe call fails for any reason other
/// than the stack not existing.
pub async fn run(args: &StatusArgs, api: &impl StackApi, ctx: &OutputContext) -> Result<()> {
    let Some(description) = api.describe_stack(&args.name).await? else {
        ctx.header(&format!("Stack {}", args.name));
        ctx.kv("Status", &StackStatus::NotCreated.to_string());
        return Ok(());
    };

    ctx.header(&format!("Stack {}", args.name));
    ctx.kv("Status", &description.status.to_string());
    if let Some(reason) = &description.status_reason {
        ctx.kv("Reason", reason);
    }
    if let Some(created_at) = description.created_at {
        ctx.kv("Created", &created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string());
    }
    if !description.outputs.is_empty() {
        ctx.header("Outputs");
        for output in &description.outputs {
            ctx.kv(&output.key, &output.value);
        }
    }
    Ok(())
}
