//! Per-invocation workflow state.

use serde::{Deserialize, Serialize};

/// A created resource handed forward to later steps, reduced to the two
/// fields the API's batch payloads carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Opaque identifier. Always a string, even when the API returned a
    /// number — the extractor normalizes.
    pub id: String,
    pub name: String,
}

/// The identifiers one workflow invocation has produced so far.
///
/// Owned exclusively by a single invocation: created at the start,
/// populated as each successful step extracts a value, read by later
/// steps to build paths and bodies, and dropped when the invocation
/// reaches its terminal state. Never shared across concurrent
/// invocations, so no synchronization is needed.
#[derive(Debug, Clone, Default)]
pub struct WorkflowContext {
    /// Id of the team created by the create-and-update flow.
    pub team_id: Option<String>,
    /// Id of the parent tournament.
    pub tournament_id: Option<String>,
    /// Id of the group created under the tournament.
    pub group_id: Option<String>,
    /// Teams that were created *and* yielded an extractable id, in
    /// creation order. Creations that failed either way are dropped.
    pub teams: Vec<ResourceRef>,
    /// Match ids collected from the matches query, in encounter order.
    pub match_ids: Vec<String>,
}
