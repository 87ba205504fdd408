//! The delivery dispatcher: resolved tokens in, dispatch report out.
//!
//! One multicast attempt per call, no retries, and no exceptions toward
//! the caller: a transport that fails as a whole produces a report with
//! every token marked failed. Stale tokens are surfaced in the report
//! and the log only; removing them from account records is someone
//! else's job.

use crate::delivery::{PushMessage, PushTransport, SendOutcome, TransportError};

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// One token that the transport could not deliver to, with the
/// platform-reported reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    pub token: String,
    pub reason: String,
}

/// Outcome of one dispatch call.
#[derive(Debug, Clone, Default)]
pub struct DispatchReport {
    /// How many tokens the multicast carried (0 when short-circuited).
    pub attempted: usize,
    /// The failing tokens, in the transport's result order.
    pub failures: Vec<DeliveryFailure>,
}

impl DispatchReport {
    /// Report for a dispatch that never reached the transport.
    pub fn skipped() -> Self {
        Self::default()
    }

    /// How many tokens were delivered successfully.
    pub fn delivered(&self) -> usize {
        self.attempted - self.failures.len()
    }
}

// ---------------------------------------------------------------------------
// dispatch
// ---------------------------------------------------------------------------

/// Send `title`/`body` to every token through one multicast call.
///
/// An empty token list is a silent no-op: the transport is not invoked
/// at all and the report shows zero attempts. Otherwise exactly one
/// multicast is issued; partial failures are collected into the report,
/// and a total transport failure is downgraded to an all-failed report.
/// This function never returns an error.
pub async fn dispatch<T>(transport: &T, tokens: Vec<String>, title: &str, body: &str) -> DispatchReport
where
    T: PushTransport + ?Sized,
{
    if tokens.is_empty() {
        tracing::info!("No tokens to send to; skipping dispatch");
        return DispatchReport::skipped();
    }

    let attempted = tokens.len();
    let message = PushMessage::new(title, body, tokens);

    match transport.send_multicast(&message).await {
        Ok(outcomes) => {
            let report = collect_report(&message.tokens, &outcomes);
            if report.failures.is_empty() {
                tracing::info!(attempted, "Multicast send delivered to all tokens");
            } else {
                tracing::info!(
                    attempted,
                    failed = report.failures.len(),
                    failed_tokens = ?report.failures.iter().map(|f| f.token.as_str()).collect::<Vec<_>>(),
                    "Multicast send had per-token failures"
                );
            }
            report
        }
        Err(e) => all_failed(&message.tokens, &e),
    }
}

/// Pair each token with its outcome; a token without a result entry
/// counts as failed.
fn collect_report(tokens: &[String], outcomes: &[SendOutcome]) -> DispatchReport {
    let failures = tokens
        .iter()
        .enumerate()
        .filter_map(|(idx, token)| match outcomes.get(idx) {
            Some(SendOutcome::Delivered) => None,
            Some(SendOutcome::Failed(reason)) => Some(DeliveryFailure {
                token: token.clone(),
                reason: reason.clone(),
            }),
            None => Some(DeliveryFailure {
                token: token.clone(),
                reason: "no result reported".to_string(),
            }),
        })
        .collect();

    DispatchReport {
        attempted: tokens.len(),
        failures,
    }
}

/// Downgrade a whole-call transport error to an all-failed report.
fn all_failed(tokens: &[String], error: &TransportError) -> DispatchReport {
    tracing::error!(error = %error, attempted = tokens.len(), "Multicast send failed as a whole");
    DispatchReport {
        attempted: tokens.len(),
        failures: tokens
            .iter()
            .map(|token| DeliveryFailure {
                token: token.clone(),
                reason: error.to_string(),
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
