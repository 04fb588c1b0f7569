//! Full tournament lifecycle flow.
//!
//! Per invocation: fan out team creations, create a tournament, create a
//! group under it, assign the created teams to the group in one batch,
//! query the generated matches, and post a random score to each. Every
//! step past the fan-out depends on identifiers extracted upstream and is
//! skipped silently when they are missing.

use rand::Rng;
use serde_json::{json, Value};

use crate::client::{ApiClient, Method, StatsCollector};
use crate::context::{ResourceRef, WorkflowContext};
use crate::extract::match_id_of;
use crate::outcome::StepOutcome;
use crate::workflow::step::{run_call, run_call_with_response, CallSpec};
use crate::workflow::unique_name;

/// How many teams one invocation creates by default.
pub const DEFAULT_TEAM_COUNT: usize = 8;

/// Fixed tournament configuration sent on creation.
const GROUPS_COUNT: u32 = 1;
const MAX_TEAMS_PER_GROUP: u32 = 32;

pub struct TournamentFlow<C, S> {
    client: C,
    stats: S,
    team_count: usize,
}

impl<C, S> TournamentFlow<C, S>
where
    C: ApiClient,
    S: StatsCollector,
{
    pub fn new(client: C, stats: S) -> Self {
        Self {
            client,
            stats,
            team_count: DEFAULT_TEAM_COUNT,
        }
    }

    /// Override the fan-out size.
    pub fn with_team_count(mut self, team_count: usize) -> Self {
        self.team_count = team_count;
        self
    }

    /// One full invocation. Steps run strictly in order; any missing
    /// dependency skips the dependent step and the invocation still
    /// reaches its end. Never errors, never retries, never cleans up
    /// what it created.
    pub async fn run(&self) {
        let mut ctx = WorkflowContext::default();

        ctx.teams = self.create_teams().await;
        ctx.tournament_id = self.create_tournament().await;
        ctx.group_id = self.create_group(&ctx).await;
        self.assign_teams_to_group(&ctx).await;
        ctx.match_ids = self.get_matches(&ctx).await;

        for match_id in &ctx.match_ids {
            // Independent updates: one failure does not stop the rest.
            self.update_match_score(&ctx, match_id).await;
        }
    }

    /// One team creation. Only calls that both succeed and yield an
    /// extractable id produce a [`ResourceRef`]; the rest are dropped.
    async fn create_team(&self) -> Option<ResourceRef> {
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
        outcome.extracted().map(|id| ResourceRef {
            id: id.to_string(),
            name,
        })
    }

    async fn create_teams(&self) -> Vec<ResourceRef> {
        let mut teams = Vec::with_capacity(self.team_count);
        for _ in 0..self.team_count {
            if let Some(team) = self.create_team().await {
                teams.push(team);
            }
        }
        teams
    }

    async fn create_tournament(&self) -> Option<String> {
        let outcome = run_call(
            &self.client,
            &self.stats,
            CallSpec {
                name: "POST /tournaments",
                label: "Tournament creation",
                method: Method::Post,
                path: "/tournaments".to_string(),
                body: Some(json!({
                    "name": unique_name("Tournament"),
                    "groupsCount": GROUPS_COUNT,
                    "maxTeamsPerGroup": MAX_TEAMS_PER_GROUP,
                })),
                soft: &[],
            },
        )
        .await;
        outcome.extracted().map(str::to_string)
    }

    async fn create_group(&self, ctx: &WorkflowContext) -> Option<String> {
        let tournament_id = ctx.tournament_id.as_deref()?;

        let outcome = run_call(
            &self.client,
            &self.stats,
            CallSpec {
                name: "POST /tournaments/{tid}/groups",
                label: "Group creation",
                method: Method::Post,
                path: format!("/tournaments/{}/groups", tournament_id),
                body: Some(json!({ "name": unique_name("Group") })),
                soft: &[],
            },
        )
        .await;
        outcome.extracted().map(str::to_string)
    }

    async fn assign_teams_to_group(&self, ctx: &WorkflowContext) {
        let (Some(tournament_id), Some(group_id)) =
            (ctx.tournament_id.as_deref(), ctx.group_id.as_deref())
        else {
            tracing::debug!("[TournamentFlow] missing tournament or group id, skipping assignment");
            return;
        };
        if ctx.teams.is_empty() {
            tracing::debug!("[TournamentFlow] no teams to assign, skipping assignment");
            return;
        }

        let batch = Value::Array(
            ctx.teams
                .iter()
                .map(|t| json!({ "id": t.id, "name": t.name }))
                .collect(),
        );

        run_call(
            &self.client,
            &self.stats,
            CallSpec {
                name: "PATCH /tournaments/{tid}/groups/{gid}/teams",
                label: "Update teams in group",
                method: Method::Patch,
                path: format!("/tournaments/{}/groups/{}/teams", tournament_id, group_id),
                body: Some(batch),
                soft: &[],
            },
        )
        .await;
    }

    /// Matches generated for the tournament, in encounter order. A 404 is
    /// a legitimate answer (the server may not have scheduled any yet) and
    /// yields an empty list, as does any failure or malformed body.
    async fn get_matches(&self, ctx: &WorkflowContext) -> Vec<String> {
        let Some(tournament_id) = ctx.tournament_id.as_deref() else {
            return Vec::new();
        };

        let (outcome, response) = run_call_with_response(
            &self.client,
            &self.stats,
            CallSpec {
                name: "GET /tournaments/{tid}/matches",
                label: "Get matches",
                method: Method::Get,
                path: format!("/tournaments/{}/matches", tournament_id),
                body: None,
                soft: &[404],
            },
        )
        .await;

        if !matches!(outcome, StepOutcome::Success { .. }) {
            return Vec::new();
        }
        let Some(response) = response else {
            return Vec::new();
        };

        match response.json() {
            Some(Value::Array(items)) => items.iter().filter_map(match_id_of).collect(),
            _ => Vec::new(),
        }
    }

    async fn update_match_score(&self, ctx: &WorkflowContext, match_id: &str) {
        let Some(tournament_id) = ctx.tournament_id.as_deref() else {
            return;
        };

        // ThreadRng is not Send, so take the samples before awaiting.
        let (home, visitor) = {
            let mut rng = rand::thread_rng();
            (rng.gen_range(0..=5), rng.gen_range(0..=5))
        };

        run_call(
            &self.client,
            &self.stats,
            CallSpec {
                name: "PATCH /tournaments/{tid}/matches/{mid}",
                label: "Update match score",
                method: Method::Patch,
                path: format!("/tournaments/{}/matches/{}", tournament_id, match_id),
                body: Some(json!({ "score": { "home": home, "visitor": visitor } })),
                soft: &[],
            },
        )
        .await;
    }
}
