//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::net`. All error types
//! implement `thiserror::Error` and convert to `anyhow::Error` via the `?`
//! operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Override persistence errors ───────────────────────────────────────────────

/// Errors reading or writing the per-stack parameter override file.
///
/// A malformed file is never partially parsed — the whole load fails and the
/// creation flow aborts so the operator can inspect the file.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("cannot read parameter overrides at {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("malformed parameter overrides at {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("cannot write parameter overrides at {path}: {reason}")]
    Unwritable { path: PathBuf, reason: String },
}

// ── Template errors ───────────────────────────────────────────────────────────

/// Errors loading or interpreting the application's stack template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("cannot read template {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("invalid template: {0}")]
    Invalid(String),
}

// ── Submission errors ─────────────────────────────────────────────────────────

/// The remote API rejected a stack creation request.
///
/// Rejections (bad template, invalid parameter reference, missing
/// permissions) are never retried automatically — a rejected creation needs
/// operator review first.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("stack creation rejected: {message}")]
    Rejected { message: String },
}
