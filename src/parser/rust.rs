//! Rust parser adapter, lowering the `syn` AST into the normalized tree.

use syn::spanned::Spanned;
use syn::visit::{self, Visit};

use super::tree::{Language, NodeKind, SourceFile, Span, SyntaxNode, SyntaxTree};
use super::{ParseError, ParserAdapter};

pub struct RustParser;

impl ParserAdapter for RustParser {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn parse(&self, source: &SourceFile) -> Result<SyntaxTree, ParseError> {
        let file = syn::parse_file(&source.text).map_err(|e| {
            let start = e.span().start();
            ParseError {
                line: start.line.max(1),
                column: start.column + 1,
                message: e.to_string(),
            }
        })?;

        let mut builder = TreeBuilder::new(span_of(&file));
        builder.visit_file(&file);
        Ok(SyntaxTree::new(source, builder.nodes, false))
    }
}

fn span_of<T: Spanned>(node: &T) -> Span {
    let span = node.span();
    let (start, end) = (span.start(), span.end());
    Span {
        // proc-macro2 lines are 1-based, columns 0-based
        start_line: start.line.max(1),
        start_column: start.column + 1,
        end_line: end.line.max(1),
        end_column: end.column + 1,
    }
}

fn path_text(path: &syn::Path) -> String {
    path.segments
        .iter()
        .map(|s| s.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}

struct TreeBuilder {
    nodes: Vec<SyntaxNode>,
    stack: Vec<usize>,
}

impl TreeBuilder {
    fn new(root_span: Span) -> Self {
        Self {
            nodes: vec![SyntaxNode {
                kind: NodeKind::Module,
                span: root_span,
                parent: None,
                children: Vec::new(),
            }],
            stack: vec![0],
        }
    }

    fn open(&mut self, kind: NodeKind, span: Span) {
        let parent = *self.stack.last().unwrap_or(&0);
        let id = self.nodes.len();
        self.nodes.push(SyntaxNode {
            kind,
            span,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        self.stack.push(id);
    }

    fn close(&mut self) {
        self.stack.pop();
    }

    fn leaf(&mut self, kind: NodeKind, span: Span) {
        self.open(kind, span);
        self.close();
    }

    fn collect_globs(&mut self, prefix: &mut Vec<String>, tree: &syn::UseTree) {
        match tree {
            syn::UseTree::Path(p) => {
                prefix.push(p.ident.to_string());
                self.collect_globs(prefix, &p.tree);
                prefix.pop();
            }
            syn::UseTree::Group(g) => {
                for item in &g.items {
                    self.collect_globs(prefix, item);
                }
            }
            syn::UseTree::Glob(g) => {
                let mut path = prefix.join("::");
                path.push_str("::*");
                self.leaf(NodeKind::GlobImport { path }, span_of(&g.star_token));
            }
            syn::UseTree::Name(_) | syn::UseTree::Rename(_) => {}
        }
    }
}

impl<'ast> Visit<'ast> for TreeBuilder {
    fn visit_item_fn(&mut self, i: &'ast syn::ItemFn) {
        self.open(
            NodeKind::Function {
                name: i.sig.ident.to_string(),
            },
            span_of(i),
        );
        visit::visit_item_fn(self, i);
        self.close();
    }

    fn visit_impl_item_fn(&mut self, i: &'ast syn::ImplItemFn) {
        self.open(
            NodeKind::Function {
                name: i.sig.ident.to_string(),
            },
            span_of(i),
        );
        visit::visit_impl_item_fn(self, i);
        self.close();
    }

    fn visit_trait_item_fn(&mut self, i: &'ast syn::TraitItemFn) {
        // Only trait methods with a default body contribute a function node
        if i.default.is_some() {
            self.open(
                NodeKind::Function {
                    name: i.sig.ident.to_string(),
                },
                span_of(i),
            );
            visit::visit_trait_item_fn(self, i);
            self.close();
        }
    }

    fn visit_block(&mut self, i: &'ast syn::Block) {
        self.open(NodeKind::Block, span_of(i));
        visit::visit_block(self, i);
        self.close();
    }

    fn visit_expr_method_call(&mut self, i: &'ast syn::ExprMethodCall) {
        self.open(
            NodeKind::MethodCall {
                method: i.method.to_string(),
            },
            span_of(&i.method),
        );
        visit::visit_expr_method_call(self, i);
        self.close();
    }

    fn visit_expr_call(&mut self, i: &'ast syn::ExprCall) {
        if let syn::Expr::Path(p) = &*i.func {
            self.open(
                NodeKind::Call {
                    callee: path_text(&p.path),
                },
                span_of(i),
            );
            visit::visit_expr_call(self, i);
            self.close();
        } else {
            visit::visit_expr_call(self, i);
        }
    }

    fn visit_item_use(&mut self, i: &'ast syn::ItemUse) {
        let mut prefix = Vec::new();
        self.collect_globs(&mut prefix, &i.tree);
    }
}
