//! Matchday Core — load-test workflows for a tournament-management HTTP API.
//!
//! This crate contains the unit of work a virtual-user scheduler invokes
//! repeatedly: multi-step business workflows that issue dependent HTTP
//! calls, thread extracted identifiers between steps, and classify each
//! response for load-test statistics. It has **no HTTP framework
//! dependency** — the transport is supplied through the [`ApiClient`]
//! trait (see `matchday-http` for the reqwest implementation), and
//! outcomes are reported through the [`StatsCollector`] trait.
//!
//! What deliberately lives *outside* this crate: the concurrent
//! virtual-user scheduler and pacing, socket-level transport concerns
//! (pooling, TLS, timeouts), and metrics export. A workflow invocation
//! never retries a call and never cleans up resources it created.

pub mod client;
pub mod context;
pub mod error;
pub mod extract;
pub mod outcome;
pub mod stats;
pub mod workflow;

// Convenience re-exports
pub use client::{ApiClient, ApiResponse, Method, StatsCollector};
pub use context::{ResourceRef, WorkflowContext};
pub use error::ClientError;
pub use extract::extract_id;
pub use outcome::StepOutcome;
pub use stats::CountingCollector;
pub use workflow::{TeamFlow, TournamentFlow};
