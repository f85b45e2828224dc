use std::path::Path;

use super::attributes::Attributes;
use super::decision::Decision;
use super::evaluation_report::EvaluationReport;
use super::policy::Policy;

const LOG_TARGET: &str = "radar::charge";

/// One transaction's attributes together with the policy that judges it.
#[derive(Debug, Clone)]
pub struct Charge {
    attributes: Attributes,
    policy: Policy,
}

impl Charge {
    pub fn new(attributes: Attributes, policy: Policy) -> Self {
        Self { attributes, policy }
    }

    /// Build a charge from an ordered list of `CHARGE`, `ALLOW` and `BLOCK`
    /// directives.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`](crate::ParseError) if a directive has no `:` or a
    /// charge attribute has no `=`.
    pub fn from_directives<I, S>(directives: I) -> Result<Self, crate::ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = crate::parse::parse_directives(directives)?;
        Ok(parsed.into_charge())
    }

    /// Parse directives from text, one per line. Blank lines and lines
    /// starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`](crate::ParseError) on malformed directives.
    pub fn from_text(input: &str) -> Result<Self, crate::ParseError> {
        let parsed = crate::parse::parse_directive_text(input)?;
        Ok(parsed.into_charge())
    }

    /// Read a directive file and build a charge from it.
    ///
    /// # Errors
    ///
    /// Returns [`RadarError`](crate::RadarError) on I/O or parse failure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, crate::RadarError> {
        let input = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&input)?)
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Decide whether this charge is accepted.
    pub fn decide(&self) -> Decision {
        let decision = self.policy.evaluate(&self.attributes);
        log::debug!(
            target: LOG_TARGET,
            "charge with {} attributes under [{}]: {decision}",
            self.attributes.len(),
            self.policy
        );
        decision
    }

    /// Decide with the individual allow/block results and timing.
    pub fn evaluate_detailed(&self) -> EvaluationReport {
        self.policy.evaluate_detailed(&self.attributes)
    }
}
