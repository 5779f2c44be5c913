use crate::Label;

/// A rule-level error attributed to the target under analysis.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    message: String,
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Diagnostic {
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Collects non-fatal, build-failing errors for one target. Recording an
/// error never halts evaluation; the build fails once diagnostics are
/// aggregated upstream.
#[derive(Clone, Debug)]
pub struct DiagnosticsSink {
    owner: Label,
    errors: Vec<Diagnostic>,
}

impl DiagnosticsSink {
    #[must_use]
    pub fn new(owner: Label) -> Self {
        Self {
            owner,
            errors: Vec::new(),
        }
    }

    pub fn rule_error(&mut self, message: impl Into<String>) {
        self.errors.push(Diagnostic {
            message: message.into(),
        });
    }

    #[must_use]
    pub fn owner(&self) -> &Label {
        &self.owner
    }

    #[must_use]
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
