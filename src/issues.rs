//! Issue types for event consistency results.
//!
//! Each issue carries everything the reporter needs: the event it concerns, the
//! file (and line, when known) to point at, and any detail for the note line.

use enum_dispatch::enum_dispatch;

use crate::core::registry::{FireCall, SiteKind};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingDeclaration,
    MissingDefinition,
    UncreatedEvent,
    ArityMismatch,
    ConflictingProvenance,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingDeclaration => write!(f, "missing-declaration"),
            Rule::MissingDefinition => write!(f, "missing-definition"),
            Rule::UncreatedEvent => write!(f, "uncreated-event"),
            Rule::ArityMismatch => write!(f, "arity-mismatch"),
            Rule::ConflictingProvenance => write!(f, "conflicting-provenance"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Event is created but never declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDeclarationIssue {
    pub event: String,
    pub creation_file: String,
}

/// Event is declared but never defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDefinitionIssue {
    pub event: String,
    pub declaration_file: String,
}

/// Event is fired but never created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncreatedEventIssue {
    pub event: String,
    pub call: FireCall,
}

/// Where the expected argument count of a fire call comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArityReference {
    /// Suffix of the declaration macro.
    Declaration { file: String },
    /// Suffix of the fire macro at the call site itself.
    FireMacro,
    /// Argument count of the first fire site for the event.
    FirstCall { file: String, line: usize },
}

/// Fire call passes a different number of arguments than expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArityMismatchIssue {
    pub event: String,
    pub call: FireCall,
    pub expected: usize,
    pub reference: ArityReference,
}

/// Two files claim the same fact about one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictingProvenanceIssue {
    pub event: String,
    pub kind: SiteKind,
    pub previous: String,
    pub current: String,
}

impl MissingDeclarationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MissingDeclaration
    }
}

impl MissingDefinitionIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MissingDefinition
    }
}

impl UncreatedEventIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UncreatedEvent
    }
}

impl ArityMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ArityMismatch
    }
}

impl ConflictingProvenanceIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ConflictingProvenance
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An event consistency issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingDeclaration(MissingDeclarationIssue),
    MissingDefinition(MissingDefinitionIssue),
    UncreatedEvent(UncreatedEventIssue),
    ArityMismatch(ArityMismatchIssue),
    ConflictingProvenance(ConflictingProvenanceIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

/// Sort by file, then line, then rule, then event.
pub fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by(|a, b| {
        let (a_loc, b_loc) = (a.location(), b.location());
        a_loc
            .file
            .cmp(b_loc.file)
            .then(a_loc.line.cmp(&b_loc.line))
            .then(a.rule().cmp(&b.rule()))
            .then(a.event().cmp(b.event()))
    });
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub struct ReportLocation<'a> {
    pub file: &'a str,
    pub line: Option<usize>,
}

/// Trait for types that can be reported to the CLI.
///
/// Uses `enum_dispatch` for static dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Identifier of the event the issue concerns.
    fn event(&self) -> &str;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingDeclarationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation {
            file: &self.creation_file,
            line: None,
        }
    }

    fn event(&self) -> &str {
        &self.event
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("event is created here but never declared".to_string())
    }
}

impl Report for MissingDefinitionIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation {
            file: &self.declaration_file,
            line: None,
        }
    }

    fn event(&self) -> &str {
        &self.event
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("event is declared here but never defined".to_string())
    }
}

impl Report for UncreatedEventIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation {
            file: &self.call.file,
            line: Some(self.call.line),
        }
    }

    fn event(&self) -> &str {
        &self.event
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("event is fired but never created".to_string())
    }
}

impl Report for ArityMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation {
            file: &self.call.file,
            line: Some(self.call.line),
        }
    }

    fn event(&self) -> &str {
        &self.event
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let source = match &self.reference {
            ArityReference::Declaration { file } => format!("declared in {}", file),
            ArityReference::FireMacro => "fire macro suffix".to_string(),
            ArityReference::FirstCall { file, line } => format!("first fired at {}:{}", file, line),
        };
        Some(format!(
            "passes {} argument(s), expected {} ({})",
            self.call.args.len(),
            self.expected,
            source
        ))
    }
}

impl Report for ConflictingProvenanceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation {
            file: &self.current,
            line: None,
        }
    }

    fn event(&self) -> &str {
        &self.event
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("{} also found in {}", self.kind, self.previous))
    }

    fn hint(&self) -> Option<String> {
        Some(format!("keep a single {} per event", self.kind))
    }
}
