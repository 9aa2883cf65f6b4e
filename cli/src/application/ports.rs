//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;

use crate::domain::stack::{Parameter, StackDescription, Tag};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Tag key carrying the deployment stage on every created stack.
pub const STAGE_TAG_KEY: &str = "liftoff_stage";

/// Capabilities requested with every creation — templates are allowed to
/// create identity and permission resources.
pub const CREATE_CAPABILITIES: &[&str] = &["CAPABILITY_IAM"];

// ── Value Types ───────────────────────────────────────────────────────────────

/// A fully resolved stack creation request.
pub struct CreateSpec<'a> {
    /// Cloud-side stack name.
    pub name: &'a str,
    /// Template document, verbatim.
    pub template_body: &'a str,
    /// Fixed tags applied to the stack.
    pub tags: &'a [Tag],
    /// Resolved input parameters.
    pub parameters: &'a [Parameter],
    /// Provider capability strings, e.g. `"CAPABILITY_IAM"`.
    pub capabilities: &'a [&'a str],
}

// ── Remote Stack API Port ─────────────────────────────────────────────────────

/// Request/response boundary to the remote stack-management API.
#[allow(async_fn_in_trait)]
pub trait StackApi {
    /// Describe a stack. `Ok(None)` only on the provider's distinguishable
    /// "does not exist" response; any other failure surfaces as an error.
    async fn describe_stack(&self, name: &str) -> Result<Option<StackDescription>>;

    /// Submit a creation request without waiting for completion.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::Rejected` when the provider refuses the
    /// request (malformed template, invalid parameter reference).
    async fn create_stack(&self, spec: &CreateSpec<'_>) -> Result<()>;

    /// Whether the stack currently exists remotely.
    async fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.describe_stack(name).await?.is_some())
    }
}

// ── Override Store Port ───────────────────────────────────────────────────────

/// Per-stack parameter override persistence.
///
/// `save` overwrites the whole file — callers merge before calling.
#[allow(async_fn_in_trait)]
pub trait OverrideStore {
    /// Load the persisted override map; empty when no file exists yet.
    async fn load(&self, stack_name: &str) -> Result<BTreeMap<String, String>>;

    /// Atomically persist the full override map.
    async fn save(&self, stack_name: &str, overrides: &BTreeMap<String, String>) -> Result<()>;
}

// ── Template Source Port ──────────────────────────────────────────────────────

/// Provides the application's stack template.
pub trait TemplateSource {
    /// Path the template is loaded from.
    fn template_file(&self) -> PathBuf;

    /// The template document body.
    fn body(&self) -> Result<String>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Step-oriented progress observer.
///
/// A step is started, receives zero or more notes, and is either marked
/// successful or dropped without a success marker — the absence of a success
/// after a start is the failure signal. Sync traits — no async needed.
pub trait ProgressReporter {
    type Step: ProgressStep;

    /// Begin a logged step.
    fn start(&self, message: &str) -> Self::Step;
}

/// Handle for one in-flight step.
pub trait ProgressStep {
    /// Emit an in-progress note. Best-effort — never fails.
    fn note(&self, message: &str);

    /// Mark the step successful.
    fn success(&self, message: &str);
}
