//! Unit tests for the stack creation use-case.
//!
//! Drives `deploy::create_stack` against mocked ports and checks the
//! deployment flow's branching: idempotent skip, parameter import and
//! override precedence, timeout, and terminal failure.

#![allow(clippy::expect_used)]

use std::collections::BTreeMap;
use std::time::Duration;

use liftoff_cli::application::services::deploy;
use liftoff_cli::domain::error::SubmissionError;
use liftoff_cli::domain::stack::{StackConfig, StackStatus, Tag};

use crate::mocks::{
    CountingReporter, MemoryOverrideStore, RecordingApi, StaticTemplates, description,
};

const EMPTY_TEMPLATE: &str = r#"{"Resources":{}}"#;
const PARENT1_TEMPLATE: &str =
    r#"{"Parameters":{"Parent1":{"Type":"String"}},"Resources":{}}"#;

/// Millisecond-scale polling so tests never sleep noticeably.
fn fast_config(name: &str) -> StackConfig {
    let mut config = StackConfig::new(name, "test-app");
    config.wait_timeout = Duration::from_secs(2);
    config.poll_interval = Duration::from_millis(1);
    config
}

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

// ── Creation happy path ──────────────────────────────────────────────────────

#[tokio::test]
async fn creates_absent_stack_and_returns_true() {
    let api = RecordingApi::completing();
    let store = MemoryOverrideStore::empty();
    let templates = StaticTemplates::new(EMPTY_TEMPLATE);
    let reporter = CountingReporter::new();

    let created = deploy::create_stack(&api, &store, &templates, &reporter, &fast_config("test"))
        .await
        .expect("create");

    assert!(created);
    let creates = api.recorded_creates();
    assert_eq!(creates.len(), 1, "exactly one submission");
    let create = &creates[0];
    assert_eq!(create.name, "test");
    assert_eq!(create.template_body, EMPTY_TEMPLATE);
    assert!(create.parameters.is_empty(), "no parents, no overrides");
    assert_eq!(
        create.tags,
        vec![Tag {
            key: "liftoff_stage".to_owned(),
            value: "test".to_owned(),
        }]
    );
    assert_eq!(create.capabilities, vec!["CAPABILITY_IAM".to_owned()]);
    assert_eq!(reporter.success_count(), 1, "step marked successful");
}

#[tokio::test]
async fn stage_flag_overrides_the_stage_tag() {
    let api = RecordingApi::completing();
    let store = MemoryOverrideStore::empty();
    let templates = StaticTemplates::new(EMPTY_TEMPLATE);
    let mut config = fast_config("test");
    config.stage = "production".to_owned();

    deploy::create_stack(&api, &store, &templates, &CountingReporter::new(), &config)
        .await
        .expect("create");

    let creates = api.recorded_creates();
    assert_eq!(creates[0].tags[0].value, "production");
}

// ── Idempotence ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn existing_stack_short_circuits_the_pipeline() {
    let api = RecordingApi::completing();
    api.add_stack("test", description(StackStatus::CreateComplete, &[]));
    let store = MemoryOverrideStore::empty();
    let templates = StaticTemplates::new(EMPTY_TEMPLATE);
    let reporter = CountingReporter::new();

    let created = deploy::create_stack(&api, &store, &templates, &reporter, &fast_config("test"))
        .await
        .expect("create");

    assert!(created, "already-created stacks are a success");
    assert_eq!(api.create_count(), 0, "nothing submitted");
    assert_eq!(store.save_count(), 0, "overrides untouched");
    assert_eq!(reporter.success_count(), 1);
}

// ── Timeout and terminal failure ─────────────────────────────────────────────

#[tokio::test]
async fn polling_timeout_returns_false_after_one_submission() {
    let api = RecordingApi::stalling();
    let store = MemoryOverrideStore::empty();
    let templates = StaticTemplates::new(EMPTY_TEMPLATE);
    let reporter = CountingReporter::new();
    let mut config = fast_config("test");
    config.wait_timeout = Duration::from_millis(20);

    let created = deploy::create_stack(&api, &store, &templates, &reporter, &config)
        .await
        .expect("create");

    assert!(!created);
    assert_eq!(api.create_count(), 1, "submission still happened");
    assert_eq!(reporter.success_count(), 0, "no success marker on timeout");
    assert!(reporter.note_count() > 0, "polling progress was reported");
}

#[tokio::test]
async fn remote_terminal_failure_returns_false() {
    let api = RecordingApi::failing();
    let store = MemoryOverrideStore::empty();
    let templates = StaticTemplates::new(EMPTY_TEMPLATE);
    let reporter = CountingReporter::new();

    let created = deploy::create_stack(&api, &store, &templates, &reporter, &fast_config("test"))
        .await
        .expect("create");

    assert!(!created);
    assert_eq!(api.create_count(), 1);
    assert_eq!(reporter.success_count(), 0);
}

// ── Parent output import ─────────────────────────────────────────────────────

#[tokio::test]
async fn parent_outputs_become_parameters_and_persisted_overrides() {
    let api = RecordingApi::completing();
    api.add_stack(
        "myappdc-dc1",
        description(
            StackStatus::CreateComplete,
            &[("Parent1", "parents value"), ("Parent2", "other value")],
        ),
    );
    let store = MemoryOverrideStore::empty();
    let templates = StaticTemplates::new(PARENT1_TEMPLATE);
    let mut config = fast_config("test");
    config.parent_stacks = vec!["myappdc-dc1".to_owned()];

    let created =
        deploy::create_stack(&api, &store, &templates, &CountingReporter::new(), &config)
            .await
            .expect("create");

    assert!(created);
    let creates = api.recorded_creates();
    // Parent2 is not a declared template parameter, so it is imported
    // neither into the file nor into the submitted list.
    assert_eq!(creates[0].parameters.len(), 1);
    assert_eq!(creates[0].parameters[0].key, "Parent1");
    assert_eq!(creates[0].parameters[0].value, "parents value");
    assert_eq!(
        store.saved("test").expect("overrides persisted"),
        map(&[("Parent1", "parents value")])
    );
}

#[tokio::test]
async fn existing_override_beats_parent_output() {
    let api = RecordingApi::completing();
    api.add_stack(
        "myappdc-dc1",
        description(
            StackStatus::CreateComplete,
            &[("Parent1", "parents value"), ("Parent2", "other value")],
        ),
    );
    let store = MemoryOverrideStore::seeded("test", &[("Parent1", "Existing Value!")]);
    let templates = StaticTemplates::new(PARENT1_TEMPLATE);
    let mut config = fast_config("test");
    config.parent_stacks = vec!["myappdc-dc1".to_owned()];

    deploy::create_stack(&api, &store, &templates, &CountingReporter::new(), &config)
        .await
        .expect("create");

    let creates = api.recorded_creates();
    assert_eq!(creates[0].parameters[0].value, "Existing Value!");
    assert_eq!(
        store.saved("test").expect("overrides persisted"),
        map(&[("Parent1", "Existing Value!")])
    );
}

#[tokio::test]
async fn later_parent_wins_in_submitted_parameters() {
    let api = RecordingApi::completing();
    api.add_stack(
        "dc1",
        description(StackStatus::CreateComplete, &[("Parent1", "from dc1")]),
    );
    api.add_stack(
        "dc2",
        description(StackStatus::CreateComplete, &[("Parent1", "from dc2")]),
    );
    let store = MemoryOverrideStore::empty();
    let templates = StaticTemplates::new(PARENT1_TEMPLATE);
    let mut config = fast_config("test");
    config.parent_stacks = vec!["dc1".to_owned(), "dc2".to_owned()];

    deploy::create_stack(&api, &store, &templates, &CountingReporter::new(), &config)
        .await
        .expect("create");

    let creates = api.recorded_creates();
    assert_eq!(creates[0].parameters[0].value, "from dc2");
}

// ── Error propagation ────────────────────────────────────────────────────────

#[tokio::test]
async fn rejected_submission_propagates_as_error() {
    let api = RecordingApi::rejecting("Template format error");
    let store = MemoryOverrideStore::empty();
    let templates = StaticTemplates::new(EMPTY_TEMPLATE);
    let reporter = CountingReporter::new();

    let err = deploy::create_stack(&api, &store, &templates, &reporter, &fast_config("test"))
        .await
        .expect_err("expected Err");

    let submission = err
        .downcast_ref::<SubmissionError>()
        .expect("SubmissionError");
    assert!(submission.to_string().contains("Template format error"));
    assert_eq!(reporter.success_count(), 0);
}
