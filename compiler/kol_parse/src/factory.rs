//! The seam between the engine and a language's AST.

use crate::RuleId;

/// Builds AST nodes from matched rule pieces.
///
/// There is one method per production [`Shape`](crate::Shape). Each
/// receives the id of the rule being built so one factory can serve a whole
/// grammar. The engine treats `Node` as opaque.
///
/// Methods take `&mut self`, so a factory may own the arena its nodes live
/// in.
pub trait ParserFactory<T> {
    type Node;

    /// Placeholder for an absent node.
    fn create_null(&mut self) -> Self::Node;

    fn create_empty(&mut self, rule: RuleId) -> Self::Node;

    fn create_term(&mut self, rule: RuleId, term: T) -> Self::Node;

    fn create_nonterm(&mut self, rule: RuleId, node: Self::Node) -> Self::Node;

    fn create_term_nonterm(&mut self, rule: RuleId, term: T, node: Self::Node) -> Self::Node;

    fn create_nonterm_nonterm(
        &mut self,
        rule: RuleId,
        lhs: Self::Node,
        rhs: Self::Node,
    ) -> Self::Node;

    fn create_nonterm_term_nonterm(
        &mut self,
        rule: RuleId,
        lhs: Self::Node,
        term: T,
        rhs: Self::Node,
    ) -> Self::Node;

    fn create_nonterm_list(&mut self, rule: RuleId, nodes: Vec<Self::Node>) -> Self::Node;

    fn create_term_nonterm_list(
        &mut self,
        rule: RuleId,
        terms: Vec<T>,
        nodes: Vec<Self::Node>,
    ) -> Self::Node;
}
