//! Stack creation use-case — the top-level deployment flow.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use anyhow::{Context, Result};

use crate::application::ports::{
    CREATE_CAPABILITIES, CreateSpec, OverrideStore, ProgressReporter, ProgressStep, STAGE_TAG_KEY,
    StackApi, TemplateSource,
};
use crate::application::services::{parents, poll};
use crate::domain::params;
use crate::domain::stack::{StackConfig, StackStatus, Tag};

/// Create the configured stack, or confirm it already exists.
///
/// The flow: existence check → parent output resolution → override merge and
/// persist → submission → poll until terminal. An existing stack
/// short-circuits everything after the check — nothing is resolved and
/// nothing is submitted.
///
/// Returns `Ok(true)` when the stack exists or reached `CreateComplete`, and
/// `Ok(false)` when creation timed out or the provider reported a terminal
/// failure; in the `false` case the started step is left without a success
/// marker.
///
/// # Errors
///
/// Propagates override persistence failures, template failures, rejected
/// submissions, and remote transport failures — none of these are retried.
pub async fn create_stack(
    api: &impl StackApi,
    store: &impl OverrideStore,
    templates: &impl TemplateSource,
    reporter: &impl ProgressReporter,
    config: &StackConfig,
) -> Result<bool> {
    let name = &config.name;
    let step = reporter.start(&format!("Creating stack {name}."));

    if api.exists(name).await? {
        step.success(&format!("Stack {name} already exists."));
        return Ok(true);
    }

    let parent_outputs = parents::resolve(api, &config.parent_stacks)
        .await
        .context("resolving parent stack outputs")?;
    let overrides = store.load(name).await?;

    let template_body = templates.body()?;
    let template_keys = params::template_parameter_keys(&template_body)?;

    let merged = params::import_parent_outputs(&parent_outputs, &overrides, &template_keys);
    store.save(name, &merged).await?;
    let parameters = params::parameter_list(&merged, &template_keys);

    let tags = [Tag {
        key: STAGE_TAG_KEY.to_owned(),
        value: config.stage.clone(),
    }];
    api.create_stack(&CreateSpec {
        name,
        template_body: &template_body,
        tags: &tags,
        parameters: &parameters,
        capabilities: CREATE_CAPABILITIES,
    })
    .await?;
    step.note(&format!("Submitted creation request for stack {name}."));

    let created = poll::wait_for_state(
        api,
        name,
        StackStatus::CreateComplete,
        "created",
        &step,
        config.wait_timeout,
        config.poll_interval,
    )
    .await?;

    if created {
        step.success(&format!("Created stack {name}."));
    }
    Ok(created)
}
