//! Single-step execution: issue one call, classify it, report it once.

use serde_json::Value;

use crate::client::{ApiClient, ApiResponse, Method, StatsCollector};
use crate::extract::extract_id;
use crate::outcome::StepOutcome;

/// Everything needed to issue and classify one HTTP call.
#[derive(Debug)]
pub struct CallSpec<'a> {
    /// Logical stat name, aggregating templated paths
    /// (e.g. `"PATCH /teams/{id}"`).
    pub name: &'a str,
    /// Human label used in hard-failure reasons
    /// (e.g. `"Team creation"` → `"Team creation failed: 500"`).
    pub label: &'a str,
    pub method: Method,
    /// Literal request path with identifiers substituted in.
    pub path: String,
    pub body: Option<Value>,
    /// Status codes treated as soft failures for this step.
    pub soft: &'a [u16],
}

/// Issue one call and classify it. See [`run_call_with_response`].
pub async fn run_call<C, S>(client: &C, stats: &S, spec: CallSpec<'_>) -> StepOutcome
where
    C: ApiClient + ?Sized,
    S: StatsCollector + ?Sized,
{
    run_call_with_response(client, stats, spec).await.0
}

/// Issue one call, classify the outcome, and report it to the collector
/// exactly once. Also hands back the raw response (when the transport
/// delivered one) for steps that parse more than an identifier out of the
/// body.
///
/// Classification:
/// - transport error → `HardFailure`, reported;
/// - status in `spec.soft` → `SoftFailure`, reported as success;
/// - other status >= 400 → `HardFailure` with `"<label> failed: <status>"`,
///   reported;
/// - status < 400 → `Success`, reported, extractor run on the response.
pub async fn run_call_with_response<C, S>(
    client: &C,
    stats: &S,
    spec: CallSpec<'_>,
) -> (StepOutcome, Option<ApiResponse>)
where
    C: ApiClient + ?Sized,
    S: StatsCollector + ?Sized,
{
    let response = match client
        .request(spec.method, spec.name, &spec.path, spec.body.as_ref())
        .await
    {
        Ok(response) => response,
        Err(e) => {
            let reason = format!("{} failed: {}", spec.label, e);
            tracing::warn!("[Workflow] {}: {}", spec.name, reason);
            stats.failure(spec.name, &reason);
            return (StepOutcome::HardFailure { reason }, None);
        }
    };

    let outcome = match StepOutcome::classify(response.status, spec.soft, spec.label) {
        StepOutcome::Success { .. } => {
            stats.success(spec.name);
            StepOutcome::Success {
                extracted: extract_id(&response),
            }
        }
        StepOutcome::SoftFailure => {
            tracing::debug!(
                "[Workflow] {} answered {}, counted as success",
                spec.name,
                response.status
            );
            stats.success(spec.name);
            StepOutcome::SoftFailure
        }
        StepOutcome::HardFailure { reason } => {
            tracing::warn!("[Workflow] {}: {}", spec.name, reason);
            stats.failure(spec.name, &reason);
            StepOutcome::HardFailure { reason }
        }
    };

    (outcome, Some(response))
}
