use std::path::{Path, PathBuf};

/// Language tag for a source file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Rust,
}

impl Language {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("rs") => Some(Language::Rust),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Language::Rust => "rs",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Language::Rust => "rust",
        })
    }
}

/// One source file, read once at the start of a run and never mutated.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
    pub language: Language,
}

impl SourceFile {
    pub fn new(path: PathBuf, text: String, language: Language) -> Self {
        Self {
            path,
            text,
            language,
        }
    }

    pub fn read(path: &Path, language: Language) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::new(path.to_path_buf(), text, language))
    }
}

/// 1-based line/column range of a node in the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Span {
    pub fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }
}

/// Normalized node kinds, covering the constructs the built-in rules
/// inspect. Language adapters lower their native AST into these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of the file.
    Module,
    Function { name: String },
    Block,
    MethodCall { method: String },
    Call { callee: String },
    GlobImport { path: String },
}

#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub span: Span,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

/// Arena-backed syntax tree for one file. Built once by a parser
/// adapter, read-only afterwards; node 0 is always the module root.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    pub path: PathBuf,
    pub language: Language,
    /// True if the adapter recovered from a syntax error and the tree
    /// only covers part of the file. The Rust adapter never recovers,
    /// but rules may check this before trusting absence of matches.
    pub partial: bool,
    nodes: Vec<SyntaxNode>,
    raw_lines: Vec<String>,
}

impl SyntaxTree {
    pub fn new(source: &SourceFile, nodes: Vec<SyntaxNode>, partial: bool) -> Self {
        Self {
            path: source.path.clone(),
            language: source.language,
            partial,
            nodes,
            raw_lines: source.text.lines().map(String::from).collect(),
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = (usize, &SyntaxNode)> {
        self.nodes.iter().enumerate()
    }

    pub fn node(&self, id: usize) -> &SyntaxNode {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Raw source lines, for rules that match on text rather than
    /// structure (custom regex patterns).
    pub fn raw_lines(&self) -> &[String] {
        &self.raw_lines
    }

    /// Walks parent links counting ancestors matching `pred`,
    /// excluding the node itself.
    pub fn ancestor_count(&self, id: usize, pred: impl Fn(&NodeKind) -> bool) -> usize {
        let mut count = 0;
        let mut current = self.nodes[id].parent;
        while let Some(p) = current {
            if pred(&self.nodes[p].kind) {
                count += 1;
            }
            current = self.nodes[p].parent;
        }
        count
    }

    /// Nearest ancestor matching `pred`, if any.
    pub fn ancestor(&self, id: usize, pred: impl Fn(&NodeKind) -> bool) -> Option<&SyntaxNode> {
        let mut current = self.nodes[id].parent;
        while let Some(p) = current {
            if pred(&self.nodes[p].kind) {
                return Some(&self.nodes[p]);
            }
            current = self.nodes[p].parent;
        }
        None
    }
}
