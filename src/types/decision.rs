use std::fmt;

/// Outcome of evaluating a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Decision {
    Accept,
    Reject,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Accept => write!(f, "accept"),
            Decision::Reject => write!(f, "reject"),
        }
    }
}

impl Decision {
    /// Combine the allow and block results: accepted iff allowed and not blocked.
    pub fn from_outcome(allowed: bool, blocked: bool) -> Self {
        if allowed && !blocked {
            Decision::Accept
        } else {
            Decision::Reject
        }
    }

    #[must_use]
    pub fn is_accepted(self) -> bool {
        self == Decision::Accept
    }

    /// Integer encoding: `1` for accept, `0` for reject.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Decision::Accept => 1,
            Decision::Reject => 0,
        }
    }
}

impl From<Decision> for i32 {
    fn from(decision: Decision) -> Self {
        decision.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_table() {
        assert_eq!(Decision::from_outcome(true, false), Decision::Accept);
        assert_eq!(Decision::from_outcome(true, true), Decision::Reject);
        assert_eq!(Decision::from_outcome(false, false), Decision::Reject);
        assert_eq!(Decision::from_outcome(false, true), Decision::Reject);
    }

    #[test]
    fn integer_codes() {
        assert_eq!(Decision::Accept.code(), 1);
        assert_eq!(i32::from(Decision::Reject), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Decision::Accept.to_string(), "accept");
        assert_eq!(Decision::Reject.to_string(), "reject");
    }
}
