//! Escalation policy for failed shell requests.
//!
//! Request failures outside the heartbeat go to a centralized error
//! handler owned by the host, unless the caller opted out or the
//! failure is an artifact of the page going away.

use appshell_core::SessionContext;

/// Per-request options influencing escalation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestOptions {
    /// Caller handles authentication failures itself.
    pub allow_auth_errors: bool,
}

/// Whether a failure reaches the centralized handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationDecision {
    Ignore,
    Escalate,
}

/// Classify a failed request.
///
/// Status 0 marks a request that never completed at the transport
/// level; during an unload or a navigation away those are expected
/// aborts, not errors.
#[must_use]
pub fn classify_failure(
    status: u16,
    options: RequestOptions,
    ctx: &SessionContext,
) -> EscalationDecision {
    if options.allow_auth_errors {
        return EscalationDecision::Ignore;
    }
    if status == 0 && (ctx.unload_started() || ctx.navigating_away()) {
        return EscalationDecision::Ignore;
    }
    EscalationDecision::Escalate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opted_out_callers_are_ignored() {
        let ctx = SessionContext::default();
        let options = RequestOptions {
            allow_auth_errors: true,
        };
        assert_eq!(
            classify_failure(401, options, &ctx),
            EscalationDecision::Ignore
        );
    }

    #[test]
    fn aborts_during_navigation_are_ignored() {
        let ctx = SessionContext::default();
        ctx.set_navigating_away(true);
        assert_eq!(
            classify_failure(0, RequestOptions::default(), &ctx),
            EscalationDecision::Ignore
        );
        // a real server error still escalates
        assert_eq!(
            classify_failure(500, RequestOptions::default(), &ctx),
            EscalationDecision::Escalate
        );
    }

    #[test]
    fn ordinary_failures_escalate() {
        let ctx = SessionContext::default();
        assert_eq!(
            classify_failure(0, RequestOptions::default(), &ctx),
            EscalationDecision::Escalate
        );
        assert_eq!(
            classify_failure(503, RequestOptions::default(), &ctx),
            EscalationDecision::Escalate
        );
    }
}
