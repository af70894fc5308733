//! Core types shared between the commit-lint CLI and its WASM bindings.
//!
//! # Modules
//!
//! - [`resolve`] — Commit convention settings ([`CommitConfig`], [`PartialConfig`]) and [`resolve`]
//! - [`config`] — Config file model loaded from `.commit-lint.toml` ([`LintConfig`])
//! - [`linter`] — Validation output: [`ValidationIssue`], [`ValidationResult`], [`Severity`]
//! - [`docs`] — Rule documentation ([`RuleDoc`])
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`CommitConfig`] | Fully resolved settings every rule reads |
//! | [`PartialConfig`] | User overrides; every field optional |
//! | [`ConfigValidationError`] | An explicitly supplied setting is out of range |
//! | [`ValidationResult`] | Errors and warnings for one message |
//!
//! The [`parser`] module re-exports the [`commit_lint_parser`] crate.

pub mod config;
pub mod docs;
pub mod linter;
pub mod resolve;

pub use commit_lint_parser as parser;

pub use commit_lint_parser::{ParsedCommit, parse};
pub use config::{Color, ColorConfig, ColorMode, ConfigError, LintConfig};
pub use docs::RuleDoc;
pub use linter::{RULE_CATEGORIES, Severity, ValidationIssue, ValidationResult, Violation};
pub use resolve::{
    CommitConfig, ConfigValidationError, FieldError, PartialConfig, SubjectCase, resolve,
};
