use proc_macro2::Span;
use thiserror::Error;

/// Domain every coding keys diagnostic is reported under
pub const DIAGNOSTIC_DOMAIN: &str = "coding_keys";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    #[error("Empty argument")]
    MalformedCustomKey,
    #[error("Unrecognized coding key style, expected `snake_cased` or `kebab_cased`")]
    UnrecognizedStyle,
}

impl DiagnosticKind {
    /// Stable identifier of the diagnostic, independent of its message
    pub fn id(&self) -> &'static str {
        match self {
            DiagnosticKind::MalformedCustomKey => "emptyArgument",
            DiagnosticKind::UnrecognizedStyle => "unrecognizedStyle",
        }
    }
}

/// A build error attached to the attribute that caused it.
///
/// Any diagnostic aborts expansion for the whole record.
#[derive(Error, Debug, Clone)]
#[error("{kind} [{domain}::{id}]", domain = DIAGNOSTIC_DOMAIN, id = .kind.id())]
pub struct Diagnostic {
    pub span: Span,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(span: Span, kind: DiagnosticKind) -> Self {
        Self { span, kind }
    }

    pub fn malformed_custom_key(span: Span) -> Self {
        Self::new(span, DiagnosticKind::MalformedCustomKey)
    }

    pub fn unrecognized_style(span: Span) -> Self {
        Self::new(span, DiagnosticKind::UnrecognizedStyle)
    }
}

impl From<Diagnostic> for syn::Error {
    fn from(diagnostic: Diagnostic) -> Self {
        syn::Error::new(diagnostic.span, diagnostic.to_string())
    }
}
