//! Workflow orchestration — the unit of work a virtual user repeats.
//!
//! Each flow is an ordered sequence of dependent HTTP calls sharing one
//! execution path ([`step::run_call`]) that issues the request, classifies
//! the response, and reports the outcome exactly once. Identifiers
//! extracted from earlier steps are threaded to later ones through a
//! [`WorkflowContext`]; a step whose dependency was never produced is
//! skipped silently rather than failed.
//!
//! # Architecture
//!
//! ```text
//! TeamFlow / TournamentFlow ──► step::run_call ──► ApiClient (HTTP)
//!         │                          │
//!   WorkflowContext            StatsCollector
//! ```
//!
//! An invocation always reaches its end: no retries, no rollback of
//! resources already created, no error escapes `run`.
//!
//! [`WorkflowContext`]: crate::context::WorkflowContext

pub mod step;
pub mod team;
pub mod tournament;

pub use step::{run_call, CallSpec};
pub use team::TeamFlow;
pub use tournament::{TournamentFlow, DEFAULT_TEAM_COUNT};

use uuid::Uuid;

/// A practically collision-free generated name, e.g. `"Team <uuid>"`.
pub(crate) fn unique_name(prefix: &str) -> String {
    format!("{} {}", prefix, Uuid::new_v4())
}
