//! AWS CloudFormation implementation of the `StackApi` port.
//!
//! The client is injected into services by the CLI layer — nothing here is
//! global, and nothing below this module constructs its own client.

use anyhow::{Context, Result};
use aws_sdk_cloudformation::Client;
use aws_sdk_cloudformation::error::ProvideErrorMetadata;
use aws_sdk_cloudformation::operation::describe_stacks::DescribeStacksError;
use aws_sdk_cloudformation::types::{Capability, Parameter as CfnParameter, Tag as CfnTag};

use crate::application::ports::{CreateSpec, StackApi};
use crate::domain::error::SubmissionError;
use crate::domain::stack::{StackDescription, StackOutput, StackStatus};

/// CloudFormation-backed stack API.
pub struct CfnStackApi {
    client: Client,
}

impl CfnStackApi {
    /// Connect using the ambient AWS credential and region chain.
    pub async fn connect() -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .load()
            .await;
        Self {
            client: Client::new(&config),
        }
    }

    /// Wrap an existing client (used in tests and tools).
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl StackApi for CfnStackApi {
    async fn describe_stack(&self, name: &str) -> Result<Option<StackDescription>> {
        let resp = match self.client.describe_stacks().stack_name(name).send().await {
            Ok(resp) => resp,
            Err(err) => {
                let service_err = err.into_service_error();
                if is_not_found(&service_err) {
                    return Ok(None);
                }
                return Err(anyhow::Error::new(service_err))
                    .with_context(|| format!("describing stack {name}"));
            }
        };

        let Some(stack) = resp.stacks().first() else {
            return Ok(None);
        };
        let status = stack
            .stack_status()
            .map_or(StackStatus::Creating, |s| StackStatus::from_provider(s.as_str()));
        let outputs = stack
            .outputs()
            .iter()
            .filter_map(|output| {
                Some(StackOutput {
                    key: output.output_key()?.to_owned(),
                    value: output.output_value()?.to_owned(),
                })
            })
            .collect();
        Ok(Some(StackDescription {
            status,
            status_reason: stack.stack_status_reason().map(str::to_owned),
            outputs,
            created_at: stack
                .creation_time()
                .and_then(|t| chrono::DateTime::from_timestamp(t.secs(), t.subsec_nanos())),
        }))
    }

    async fn create_stack(&self, spec: &CreateSpec<'_>) -> Result<()> {
        let parameters: Vec<CfnParameter> = spec
            .parameters
            .iter()
            .map(|p| {
                CfnParameter::builder()
                    .parameter_key(p.key.as_str())
                    .parameter_value(p.value.as_str())
                    .build()
            })
            .collect();
        let tags: Vec<CfnTag> = spec
            .tags
            .iter()
            .map(|t| CfnTag::builder().key(t.key.as_str()).value(t.value.as_str()).build())
            .collect();
        let capabilities: Vec<Capability> = spec
            .capabilities
            .iter()
            .map(|c| Capability::from(*c))
            .collect();

        self.client
            .create_stack()
            .stack_name(spec.name)
            .template_body(spec.template_body)
            .set_tags(Some(tags))
            .set_parameters(Some(parameters))
            .set_capabilities(Some(capabilities))
            .send()
            .await
            .map_err(|err| {
                let service_err = err.into_service_error();
                let message = service_err
                    .message()
                    .map_or_else(|| service_err.to_string(), str::to_owned);
                SubmissionError::Rejected { message }
            })?;
        Ok(())
    }
}

/// CloudFormation reports a missing stack as a `ValidationError` whose
/// message ends in "does not exist" — the one failure `describe_stack`
/// folds into `Ok(None)`.
fn is_not_found(err: &DescribeStacksError) -> bool {
    err.message().is_some_and(|m| m.contains("does not exist"))
}
