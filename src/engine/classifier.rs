//! Literal classification and rewriting.
//!
//! Given a CJK string literal and its immediate parent in the arena
//! tree, decides which rewrite applies. The dispatch is an exhaustive
//! match over the closed `NodeKind` set; anything without a policy row
//! lands in a named diagnostic instead of producing invalid output.
//!
//! Policy:
//! - non-static field initializer: replace the initializer
//! - static field initializer: retype the field to a lazy Supplier,
//!   rename it, wrap the lookup in a closure (or warn-only, per config)
//! - interface constant, enum constant argument, annotation value:
//!   diagnostic only, these must stay compile-time constants
//! - local variable initializer: replace unconditionally
//! - argument list / array initializer / binary operands: rewrite every
//!   CJK literal in the construct in one pass
//! - anything else: diagnostic naming the construct

use crate::diagnostics::Diagnostic;
use crate::engine::context::{RunContext, StaticFieldMode};
use crate::engine::template;
use crate::tree::{NodeId, NodeKind, SyntaxTree, TypeFlavor};
use crate::utils::contains_cjk;

/// Declared type a wrapped static field is rewritten to.
const SUPPLIER_TYPE: &str = "java.util.function.Supplier<String>";
/// Suffix appended to a wrapped static field's name.
const SUPPLIER_SUFFIX: &str = "_SUPPLIER";

pub(crate) fn classify_literal(tree: &mut SyntaxTree, literal: NodeId, ctx: &mut RunContext) {
    let value = match tree.kind(literal) {
        NodeKind::StringLiteral(v) => v.clone(),
        _ => return,
    };
    if !contains_cjk(&value) {
        return;
    }

    let Some(parent) = tree.parent(literal) else {
        ctx.diagnostics
            .push(Diagnostic::detached_literal(&ctx.file_identifier, &value));
        return;
    };

    match tree.kind(parent).clone() {
        NodeKind::Declarator => {
            classify_initializer(tree, literal, parent, &value, ctx);
        }
        NodeKind::ArgumentList | NodeKind::ArrayInitializer | NodeKind::Binary => {
            // Process the whole construct once; literals handled here
            // are detached, so the walk skips them as later siblings.
            rewrite_literal_list(tree, parent, ctx);
        }
        NodeKind::EnumConstant => {
            let (line, col, source_line) = position_of(tree, literal);
            ctx.diagnostics.push(Diagnostic::enum_constant_argument(
                &ctx.file_identifier,
                line,
                col,
                &value,
                source_line,
            ));
        }
        NodeKind::AnnotationValue => {
            let (line, col, source_line) = position_of(tree, literal);
            ctx.diagnostics.push(Diagnostic::annotation_value(
                &ctx.file_identifier,
                line,
                col,
                &value,
                source_line,
            ));
        }
        other => {
            let (line, col, source_line) = position_of(tree, literal);
            ctx.diagnostics.push(Diagnostic::unrecognized(
                &ctx.file_identifier,
                line,
                col,
                other.construct_name(),
                &value,
                source_line,
            ));
        }
    }
}

/// Literal is a declarator's initializer: field or local variable.
fn classify_initializer(
    tree: &mut SyntaxTree,
    literal: NodeId,
    declarator: NodeId,
    value: &str,
    ctx: &mut RunContext,
) {
    let Some(holder) = tree.parent(declarator) else {
        return;
    };
    match *tree.kind(holder) {
        NodeKind::Field { is_static } => {
            let in_interface = tree.parent(holder).is_some_and(|t| {
                matches!(
                    tree.kind(t),
                    NodeKind::TypeDecl {
                        flavor: TypeFlavor::Interface,
                        ..
                    }
                )
            });
            if in_interface {
                let (line, col, source_line) = position_of(tree, literal);
                ctx.diagnostics.push(Diagnostic::interface_constant(
                    &ctx.file_identifier,
                    line,
                    col,
                    value,
                    source_line,
                ));
            } else if is_static {
                rewrite_static_field(tree, literal, declarator, holder, value, ctx);
            } else {
                let expr = rendered_for(ctx, value);
                tree.replace_with_rendered(literal, expr);
            }
        }
        NodeKind::LocalVarDecl => {
            let expr = rendered_for(ctx, value);
            tree.replace_with_rendered(literal, expr);
        }
        // A declarator in any other position is left alone.
        _ => {}
    }
}

/// Static initializers may run before dependent state exists, so the
/// rewrite is unsafe in place. The field becomes a lazily evaluated
/// Supplier and a diagnostic flags the manual follow-up.
fn rewrite_static_field(
    tree: &mut SyntaxTree,
    literal: NodeId,
    declarator: NodeId,
    field: NodeId,
    value: &str,
    ctx: &mut RunContext,
) {
    let (line, col, source_line) = position_of(tree, literal);
    match ctx.static_fields {
        StaticFieldMode::Warn => {
            ctx.diagnostics.push(Diagnostic::static_field_skipped(
                &ctx.file_identifier,
                line,
                col,
                value,
                source_line,
            ));
        }
        StaticFieldMode::Wrap => {
            let expr = rendered_for(ctx, value);
            if let Some(type_ref) = tree.find_child(field, |k| matches!(k, NodeKind::TypeRef)) {
                tree.replace_with_rendered(type_ref, SUPPLIER_TYPE.to_string());
            }
            if let Some(name_id) =
                tree.find_child(declarator, |k| matches!(k, NodeKind::Identifier(_)))
            {
                if let NodeKind::Identifier(name) = tree.kind(name_id).clone() {
                    tree.replace_with_rendered(name_id, format!("{}{}", name, SUPPLIER_SUFFIX));
                }
            }
            tree.replace_with_rendered(literal, format!("() -> ({})", expr));
            ctx.diagnostics.push(Diagnostic::static_field(
                &ctx.file_identifier,
                line,
                col,
                value,
                source_line,
            ));
        }
    }
}

/// Replace every CJK string literal child of `list` with its own
/// rendered expression. Used for argument lists, array initializers and
/// binary operand pairs alike.
fn rewrite_literal_list(tree: &mut SyntaxTree, list: NodeId, ctx: &mut RunContext) {
    let snapshot: Vec<NodeId> = tree.children(list).to_vec();
    for child in snapshot {
        if tree.parent(child).is_none() {
            continue;
        }
        let value = match tree.kind(child) {
            NodeKind::StringLiteral(v) if contains_cjk(v) => v.clone(),
            _ => continue,
        };
        let expr = rendered_for(ctx, &value);
        tree.replace_with_rendered(child, expr);
    }
}

fn rendered_for(ctx: &mut RunContext, value: &str) -> String {
    let key = ctx.assign_or_reuse(value);
    template::render(&ctx.template, &key, &ctx.bundle_name, &ctx.file_identifier)
}

fn position_of(tree: &SyntaxTree, id: NodeId) -> (usize, usize, Option<String>) {
    let span = tree.span(id);
    let (line, col) = tree.position(span.start);
    (line, col, Some(tree.line_text(span.start).to_string()))
}
