pub mod rust;
pub(crate) mod tree;

pub use tree::{Language, NodeKind, SourceFile, Span, SyntaxNode, SyntaxTree};

/// A source file that cannot be parsed under its declared language's
/// grammar. Recorded as a file-scoped violation, never a crash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Capability interface: "can parse language L into a SyntaxTree".
/// One implementation per supported language, selected by the source
/// file's language tag.
pub trait ParserAdapter: Send + Sync {
    fn language(&self) -> Language;
    fn parse(&self, source: &SourceFile) -> Result<SyntaxTree, ParseError>;
}

static RUST: rust::RustParser = rust::RustParser;

pub fn adapter_for(language: Language) -> &'static dyn ParserAdapter {
    match language {
        Language::Rust => &RUST,
    }
}
