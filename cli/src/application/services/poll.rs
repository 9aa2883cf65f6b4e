//! Status polling — wait for a stack to reach a target state.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::application::ports::{ProgressStep, StackApi};
use crate::domain::stack::StackStatus;

/// Poll the stack's status until it equals `target`, a different terminal
/// status is observed, or `timeout` elapses.
///
/// Returns `Ok(true)` on the target status and `Ok(false)` on terminal
/// failure or timeout — neither is an error; the stack may still be creating
/// remotely after a timeout, and a later run's existence check will find it.
/// A fixed `interval` sleep separates polls, and every poll emits a note on
/// the step. `verb` names the awaited transition in those notes ("created").
///
/// # Errors
///
/// Remote failures other than "stack does not exist" propagate.
pub async fn wait_for_state(
    api: &impl StackApi,
    name: &str,
    target: StackStatus,
    verb: &str,
    step: &impl ProgressStep,
    timeout: Duration,
    interval: Duration,
) -> Result<bool> {
    let deadline = Instant::now() + timeout;
    loop {
        match api.describe_stack(name).await? {
            Some(description) if description.status == target => return Ok(true),
            Some(description) if description.status.is_terminal() => {
                let reason = description
                    .status_reason
                    .unwrap_or_else(|| description.status.to_string());
                step.note(&format!("Stack {name} failed to be {verb}: {reason}"));
                return Ok(false);
            }
            Some(description) => {
                step.note(&format!(
                    "Waiting for stack {name} to be {verb}. ({})",
                    description.status
                ));
            }
            // Brief window between submission acceptance and visibility.
            None => step.note(&format!("Waiting for stack {name} to be {verb}.")),
        }

        if Instant::now() >= deadline {
            step.note(&format!(
                "Stack {name} was not {verb} within {}s. It may still be in progress remotely.",
                timeout.as_secs()
            ));
            return Ok(false);
        }
        tokio::time::sleep(interval).await;
    }
}
