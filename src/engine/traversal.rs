//! Depth-first traversal driving the rewrite of one file.
//!
//! Pre-order walk over the arena tree. String literals are handed to
//! the classifier and not descended into. Children are iterated from a
//! snapshot taken before descending, and a child detached by an earlier
//! sibling's rewrite is skipped via its cleared parent link.
//!
//! Scope transitions happen on type declarations. The scope is a single
//! mutable context, not a stack: when the walk returns from a nested
//! type's subtree the enclosing type's prefix and counter are not
//! restored. Java places all of a type's members before any sibling
//! type declaration in source order, which is what makes this safe.

use crate::engine::classifier::classify_literal;
use crate::engine::context::RunContext;
use crate::tree::{NodeId, NodeKind, SyntaxTree};

/// Rewrite every CJK literal in `tree`, collecting entries and
/// diagnostics into `ctx`. The tree is mutated in place; call
/// [`SyntaxTree::render`] afterward to serialize it.
pub fn transform(tree: &mut SyntaxTree, ctx: &mut RunContext) {
    walk(tree, tree.root(), ctx);
}

fn walk(tree: &mut SyntaxTree, node: NodeId, ctx: &mut RunContext) {
    match tree.kind(node) {
        NodeKind::StringLiteral(_) => {
            classify_literal(tree, node, ctx);
            return;
        }
        NodeKind::TypeDecl { qualified_name, .. } => {
            let qualified_name = qualified_name.clone();
            ctx.enter_type_scope(qualified_name.as_deref());
        }
        _ => {}
    }

    let snapshot: Vec<NodeId> = tree.children(node).to_vec();
    for child in snapshot {
        if tree.parent(child).is_some() {
            walk(tree, child, ctx);
        }
    }
}
