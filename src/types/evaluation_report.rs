use std::fmt;
use std::time::Duration;

use super::decision::Decision;

/// Detailed evaluation report returned by
/// [`Policy::evaluate_detailed()`](super::Policy::evaluate_detailed).
///
/// Contains the decision, the individual allow and block results, and the
/// wall-clock duration of the evaluation.
#[derive(Debug, Clone)]
#[must_use]
pub struct EvaluationReport {
    decision: Decision,
    allowed: bool,
    blocked: bool,
    duration: Duration,
}

impl EvaluationReport {
    pub(crate) fn new(allowed: bool, blocked: bool, duration: Duration) -> Self {
        Self {
            decision: Decision::from_outcome(allowed, blocked),
            allowed,
            blocked,
            duration,
        }
    }

    /// The decision, same as [`Policy::evaluate()`](super::Policy::evaluate).
    pub fn decision(&self) -> Decision {
        self.decision
    }

    /// Whether the allow tree evaluated to `true`.
    #[must_use]
    pub fn allowed(&self) -> bool {
        self.allowed
    }

    /// Whether the block tree evaluated to `true`.
    #[must_use]
    pub fn blocked(&self) -> bool {
        self.blocked
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decision: {}", self.decision)?;
        write!(f, ", allow: {}, block: {}", self.allowed, self.blocked)?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_accessors() {
        let report = EvaluationReport::new(true, false, Duration::from_nanos(500));

        assert_eq!(report.decision(), Decision::Accept);
        assert!(report.allowed());
        assert!(!report.blocked());
        assert_eq!(report.duration(), Duration::from_nanos(500));
    }

    #[test]
    fn blocked_report_rejects() {
        let report = EvaluationReport::new(true, true, Duration::ZERO);
        assert_eq!(report.decision(), Decision::Reject);
    }

    #[test]
    fn report_display() {
        let report = EvaluationReport::new(false, false, Duration::from_nanos(100));
        let s = report.to_string();
        assert!(s.contains("decision: reject"));
        assert!(s.contains("allow: false, block: false"));
    }
}
