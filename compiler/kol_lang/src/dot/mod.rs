//! Graphviz rendering of an AST.
//!
//! Nodes are numbered in pre-order. Each node prints its label line,
//! then for every child an edge line followed by the child's own lines.

use std::fmt::Write;

use kol_stack::ensure_sufficient_stack;

use crate::{AstArena, ConstKind, Node, NodeId};

const HEADER: &str = "digraph astgraph {
node [shape=circle, fontsize=12, fontname=\"Courier\", height=.1];
ranksep=.3;
edge [arrowsize=.5]

";

/// Render the tree under `root` as a DOT document.
pub fn render(arena: &AstArena<'_>, root: NodeId) -> String {
    let mut printer = DotPrinter {
        arena,
        out: String::from(HEADER),
        next: 0,
    };
    printer.visit(root);
    printer.out.push_str("}\n");
    printer.out
}

struct DotPrinter<'a, 'src> {
    arena: &'a AstArena<'src>,
    out: String,
    /// Number of the node being printed.
    next: u32,
}

impl DotPrinter<'_, '_> {
    fn label(&mut self, number: u32, text: &str) {
        let _ = writeln!(self.out, "  node{number} [label=\"{}\"]", escape(text));
    }

    fn link(&mut self, parent: u32, child: u32) {
        let _ = writeln!(self.out, "  node{parent} -> node{child}");
    }

    /// Number the subtree `node` as the next child of `parent`.
    fn child(&mut self, parent: u32, node: NodeId) {
        self.next += 1;
        self.link(parent, self.next);
        self.visit(node);
    }

    fn visit(&mut self, id: NodeId) {
        ensure_sufficient_stack(|| self.visit_inner(id));
    }

    fn visit_inner(&mut self, id: NodeId) {
        let arena = self.arena;
        let me = self.next;
        match arena.get(id) {
            Node::Null => self.label(me, "Null"),
            Node::Nop => self.label(me, "Nop"),
            Node::Const { kind, text } => {
                let tag = match kind {
                    ConstKind::Integer => "(int)",
                    ConstKind::Real => "(float)",
                };
                self.label(me, &format!("{tag}\\n{text}"));
            }
            Node::Var { name } => self.label(me, &format!("Var:\\n{name}")),
            Node::Unary { op, operand, .. } => {
                self.label(me, &format!("unary {}", op.as_symbol()));
                self.child(me, *operand);
            }
            Node::Binary { op, lhs, rhs, .. } => {
                self.label(me, op.as_symbol());
                self.child(me, *lhs);
                self.child(me, *rhs);
            }
            Node::Compound { statements } => {
                self.label(me, "CompoundStatement");
                for &statement in statements {
                    self.child(me, statement);
                }
            }
            Node::Program { name, block } => {
                let title = match arena.get(*name) {
                    Node::Var { name } => name.as_str(),
                    _ => "",
                };
                self.label(me, &format!("Program\\n{title}"));
                self.child(me, *block);
            }
            Node::Block { declarations, body } => {
                self.label(me, "Block");
                for &declaration in declarations {
                    self.child(me, declaration);
                }
                self.child(me, *body);
            }
            Node::VarDecl { name, ty } => {
                self.label(me, "VarDecl");
                for text in [*name, *ty] {
                    self.next += 1;
                    let leaf = self.next;
                    self.label(leaf, text);
                    self.link(me, leaf);
                }
            }
            Node::Raw { text } => self.label(me, text),
            Node::RawList { items } => {
                self.label(me, "List");
                for &item in items {
                    self.child(me, item);
                }
            }
        }
    }
}

/// Escape a label for a double-quoted DOT string. `\n` sequences already in
/// the label are line breaks and pass through.
fn escape(text: &str) -> std::borrow::Cow<'_, str> {
    if text.contains('"') {
        text.replace('"', "\\\"").into()
    } else {
        text.into()
    }
}
