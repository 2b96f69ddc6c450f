//! Stack growth for recursive descent.
//!
//! Rule dispatch in the parser, the AST interpreters and the DOT printer all
//! recurse once per level of source nesting. A deeply parenthesised input
//! such as `((((...))))` would otherwise be bounded by the host thread's
//! stack size. Wrapping each recursive step in [`ensure_sufficient_stack`]
//! moves that bound to available memory.
//!
//! On `wasm32` the guard is a plain call.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
///
/// ```text
/// fn depth(node: &Node) -> usize {
///     ensure_sufficient_stack(|| match node {
///         Node::Leaf => 1,
///         Node::Inner(child) => 1 + depth(child),
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
