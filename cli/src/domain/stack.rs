//! Stack domain types: identity, status vocabulary, and remote descriptions.
//!
//! Pure data — no I/O, no async, no imports from other layers.

use std::time::Duration;

use chrono::{DateTime, Utc};

// ── Defaults ─────────────────────────────────────────────────────────────────

/// How long `create` waits for the stack to reach a terminal state.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Fixed delay between remote status checks while waiting.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

// ── Stack configuration ───────────────────────────────────────────────────────

/// Configuration for one stack deployment. Immutable once handed to the
/// deploy service.
#[derive(Debug, Clone)]
pub struct StackConfig {
    /// The deployment's unique cloud-side identifier.
    pub name: String,
    /// Application name — selects `cloud_formation/<app_name>.json`.
    pub app_name: String,
    /// Parent stacks whose outputs seed this stack's parameters, in order.
    /// When two parents export the same key, the later parent wins.
    pub parent_stacks: Vec<String>,
    /// Stage label applied as the fixed stack tag. Defaults to the stack name.
    pub stage: String,
    /// Ceiling on the post-submission wait for a terminal state.
    pub wait_timeout: Duration,
    /// Delay between status polls.
    pub poll_interval: Duration,
}

impl StackConfig {
    /// Build a configuration with default stage, timeout, and poll interval.
    #[must_use]
    pub fn new(name: &str, app_name: &str) -> Self {
        Self {
            name: name.to_owned(),
            app_name: app_name.to_owned(),
            parent_stacks: Vec::new(),
            stage: name.to_owned(),
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

// ── Status vocabulary ─────────────────────────────────────────────────────────

/// Stack state abstracted from the provider's status strings.
///
/// Only `CreateComplete` counts as success; every other terminal status is a
/// failure. Rollback statuses are mapped to `CreateFailed` as soon as they
/// appear — a stack that started rolling back can never reach
/// `CreateComplete`, so waiting out the rollback adds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackStatus {
    /// The remote API has no record of the stack.
    NotCreated,
    /// Creation was submitted and has not yet reached a terminal state.
    Creating,
    /// Terminal success.
    CreateComplete,
    /// Terminal failure, including rollbacks and deletion of a failed stack.
    CreateFailed,
}

impl StackStatus {
    /// Map a provider status string onto the abstract vocabulary.
    #[must_use]
    pub fn from_provider(status: &str) -> Self {
        match status {
            "CREATE_COMPLETE" => Self::CreateComplete,
            "CREATE_IN_PROGRESS" | "REVIEW_IN_PROGRESS" => Self::Creating,
            _ => Self::CreateFailed,
        }
    }

    /// `true` when no further automatic state transition can occur.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::CreateComplete | Self::CreateFailed)
    }
}

impl std::fmt::Display for StackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::NotCreated => "not created",
            Self::Creating => "creating",
            Self::CreateComplete => "create complete",
            Self::CreateFailed => "create failed",
        };
        write!(f, "{label}")
    }
}

// ── Remote description ────────────────────────────────────────────────────────

/// A named value exported by a stack, queryable by dependents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOutput {
    pub key: String,
    pub value: String,
}

/// One submitted stack parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub key: String,
    pub value: String,
}

/// One stack tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// Snapshot of a remote stack as reported by the provider.
#[derive(Debug, Clone)]
pub struct StackDescription {
    pub status: StackStatus,
    /// Provider-supplied explanation for the current status, when present.
    pub status_reason: Option<String>,
    pub outputs: Vec<StackOutput>,
    pub created_at: Option<DateTime<Utc>>,
}
