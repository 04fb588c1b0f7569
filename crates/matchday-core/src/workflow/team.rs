//! Create-and-update flow: make a team, then probe its update endpoint.

use serde_json::json;

use crate::client::{ApiClient, Method, StatsCollector};
use crate::context::WorkflowContext;
use crate::workflow::step::{run_call, CallSpec};
use crate::workflow::unique_name;

/// Creates a team with a fresh unique name, then PATCHes it with a new
/// name. The update only probes whether the endpoint is present — a 405
/// is an expected answer and counts as success.
pub struct TeamFlow<C, S> {
    client: C,
    stats: S,
}

impl<C, S> TeamFlow<C, S>
where
    C: ApiClient,
    S: StatsCollector,
{
    pub fn new(client: C, stats: S) -> Self {
        Self { client, stats }
    }

    /// One full invocation. Never errors; every call's outcome lands in
    /// the collector.
    pub async fn run(&self) {
        let mut ctx = WorkflowContext::default();
        ctx.team_id = self.create_team().await;
        self.update_team(&ctx).await;
    }

    async fn create_team(&self) -> Option<String> {
        let name = unique_name("Team");
        let outcome = run_call(
            &self.client,
            &self.stats,
            CallSpec {
                name: "POST /teams",
                label: "Team creation",
                method: Method::Post,
                path: "/teams".to_string(),
                body: Some(json!({ "name": name })),
                soft: &[],
            },
        )
        .await;
        outcome.extracted().map(str::to_string)
    }

    async fn update_team(&self, ctx: &WorkflowContext) {
        let Some(team_id) = ctx.team_id.as_deref() else {
            // No id came out of the creation step; skip without a report.
            tracing::debug!("[TeamFlow] no team id, skipping update");
            return;
        };

        run_call(
            &self.client,
            &self.stats,
            CallSpec {
                name: "PATCH /teams/{id}",
                label: "Team update",
                method: Method::Patch,
                path: format!("/teams/{}", team_id),
                body: Some(json!({ "name": unique_name("Team updated") })),
                soft: &[405],
            },
        )
        .await;
    }
}
