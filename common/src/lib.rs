//! Shared models and contracts for `nimbus`.
//!
//! * [`cloud`]: candidates, providers, the pattern table and match results.
//! * [`resolving`]: the DNS resolution contract and its outcome type.
//! * [`progress`]: the observer notified as the pipeline advances.
//! * [`config`]: run-wide settings.
//! * [`error`]: errors surfaced to the shell.

pub mod cloud;
pub mod config;
pub mod error;
pub mod progress;
pub mod resolving;
