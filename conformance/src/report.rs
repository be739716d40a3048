//! Conformance report types: findings, severity levels, and aggregation.

/// Severity level of a conformance finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// Suspicious but legal, such as a custom object type outside the AFF4
    /// namespace.
    Warning,
    /// The registry violates a vocabulary rule.
    Failure,
}

impl Severity {
    /// Fixed-width label used by the command-line report.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        }
    }
}

/// One outcome of one check.
#[derive(Debug, Clone)]
pub struct Finding {
    /// Validator that produced the finding, e.g. `"vocabulary/namespace"`.
    pub validator: &'static str,
    /// Object type the finding is about, if it concerns a single schema.
    pub subject: Option<String>,
    /// Human-readable description of the outcome.
    pub message: String,
    /// Severity of the finding.
    pub severity: Severity,
    /// Additional detail lines.
    pub details: Vec<String>,
}

impl Finding {
    fn new(validator: &'static str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            validator,
            subject: None,
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// A passing finding.
    pub fn pass(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, Severity::Pass, message)
    }

    /// A warning.
    pub fn warn(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, Severity::Warning, message)
    }

    /// A failure.
    pub fn fail(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, Severity::Failure, message)
    }

    /// Attaches the object type this finding concerns.
    #[must_use]
    pub fn about(mut self, object_type: impl Into<String>) -> Self {
        self.subject = Some(object_type.into());
        self
    }

    /// Attaches detail lines.
    #[must_use]
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Returns true if this finding is a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Findings from every validator that ran.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// All findings in the order they were produced.
    pub findings: Vec<Finding>,
}

impl ConformanceReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finding.
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Appends every finding of `other`.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.findings.extend(other.findings);
    }

    /// Number of findings with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    /// Number of failures.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Returns true if nothing failed. Warnings do not count as failures.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// Findings produced by `validator`.
    pub fn by_validator<'a>(&'a self, validator: &'a str) -> impl Iterator<Item = &'a Finding> {
        self.findings.iter().filter(move |f| f.validator == validator)
    }
}
