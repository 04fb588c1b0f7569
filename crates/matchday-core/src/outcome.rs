//! Outcome classification for a single HTTP call.

/// The result of one issued HTTP call, as the statistics care about it.
///
/// Every call a workflow issues produces exactly one `StepOutcome`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Status < 400. Carries whatever identifier the extractor found;
    /// `None` is not an error, it just leaves downstream dependencies
    /// unmet.
    Success { extracted: Option<String> },
    /// An anticipated non-2xx status (405 on a probe update, 404 on a
    /// query that may legitimately be empty). Counted as success.
    SoftFailure,
    /// Any other >= 400, or a transport-level failure. Counted as a
    /// failure with a human-readable reason.
    HardFailure { reason: String },
}

impl StepOutcome {
    /// Classify a status code against a step's soft-status set.
    ///
    /// Does not run the extractor; a `Success` starts out with no
    /// extracted value and the caller fills it in.
    pub fn classify(status: u16, soft: &[u16], label: &str) -> Self {
        if status < 400 {
            Self::Success { extracted: None }
        } else if soft.contains(&status) {
            Self::SoftFailure
        } else {
            Self::HardFailure {
                reason: format!("{} failed: {}", label, status),
            }
        }
    }

    /// Whether this outcome counts as a success for load-test statistics.
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::HardFailure { .. })
    }

    /// The extracted identifier, if this is a successful call that
    /// yielded one.
    pub fn extracted(&self) -> Option<&str> {
        match self {
            Self::Success { extracted } => extracted.as_deref(),
            _ => None,
        }
    }
}
