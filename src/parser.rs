//! Java parsing and lowering.
//!
//! tree-sitter supplies the concrete syntax tree; this module lowers it
//! into the crate's own mutable [`SyntaxTree`](crate::tree::SyntaxTree)
//! so the rewrite engine never touches tree-sitter nodes. Grammar kinds
//! the classifier has no policy for are preserved as `NodeKind::Other`
//! with their kind name, so they can be reported instead of silently
//! dropped.
//!
//! Fully qualified type names are computed during lowering: package name
//! plus the chain of enclosing type names. Types declared inside a block
//! (local classes) get no qualified name, which later selects the
//! `.default` scope-prefix fallback.

use anyhow::{anyhow, bail, Context, Result};
use tree_sitter::{Node, Parser};

use crate::tree::{NodeId, NodeKind, SyntaxTree, TypeFlavor};

/// Parse one Java source file into the arena tree.
///
/// Returns an error if the source does not parse cleanly; the driver
/// reports that as a per-file diagnostic and skips the file.
pub fn parse_java(source: &str) -> Result<SyntaxTree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_java::language())
        .context("Failed to load Java grammar")?;

    let ts_tree = parser
        .parse(source, None)
        .ok_or_else(|| anyhow!("Parser returned no tree"))?;
    let root = ts_tree.root_node();
    if root.has_error() {
        bail!("Source contains syntax errors");
    }

    let mut tree = SyntaxTree::new(source.to_string(), NodeKind::CompilationUnit);
    let scope = TypeScope {
        qualifier: package_name(&root, source),
        in_block: false,
    };

    let lowerer = Lowerer { source };
    let tree_root = tree.root();
    for i in 0..root.named_child_count() {
        if let Some(child) = root.named_child(i) {
            lowerer.lower(&mut tree, tree_root, child, &scope);
        }
    }
    Ok(tree)
}

/// Naming context threaded through lowering.
#[derive(Debug, Clone)]
struct TypeScope {
    /// Dotted qualifier for type names declared at this level: the
    /// package for top-level types, the enclosing type's fully
    /// qualified name for members.
    qualifier: Option<String>,
    /// True inside statement blocks, where a declared type is local and
    /// has no computable qualified name.
    in_block: bool,
}

impl TypeScope {
    fn qualify(&self, name: &str) -> Option<String> {
        if self.in_block {
            return None;
        }
        Some(match &self.qualifier {
            Some(q) => format!("{}.{}", q, name),
            None => name.to_string(),
        })
    }
}

fn package_name(root: &Node, source: &str) -> Option<String> {
    for i in 0..root.named_child_count() {
        let child = root.named_child(i)?;
        if child.kind() == "package_declaration" {
            for j in 0..child.named_child_count() {
                if let Some(name) = child.named_child(j) {
                    if matches!(name.kind(), "scoped_identifier" | "identifier") {
                        return Some(node_text(&name, source).to_string());
                    }
                }
            }
        }
    }
    None
}

fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.byte_range()]
}

struct Lowerer<'a> {
    source: &'a str,
}

impl<'a> Lowerer<'a> {
    fn lower(&self, tree: &mut SyntaxTree, parent: NodeId, node: Node, scope: &TypeScope) {
        let span = node.byte_range();
        match node.kind() {
            "class_declaration" | "interface_declaration" | "enum_declaration" => {
                self.lower_type_decl(tree, parent, node, scope);
            }
            "field_declaration" | "constant_declaration" => {
                // Interface constants (constant_declaration) are
                // implicitly static.
                let is_static =
                    node.kind() == "constant_declaration" || has_modifier(&node, "static");
                let id = tree.push_child(parent, NodeKind::Field { is_static }, span);
                self.lower_declaration_children(tree, id, node, scope);
            }
            "local_variable_declaration" => {
                let id = tree.push_child(parent, NodeKind::LocalVarDecl, span);
                self.lower_declaration_children(tree, id, node, scope);
            }
            "variable_declarator" => {
                let id = tree.push_child(parent, NodeKind::Declarator, span);
                self.lower_children(tree, id, node, scope);
            }
            "enum_constant" => {
                let id = tree.push_child(parent, NodeKind::EnumConstant, span);
                for i in 0..node.named_child_count() {
                    let Some(child) = node.named_child(i) else {
                        continue;
                    };
                    if child.kind() == "argument_list" {
                        // Arguments hang directly off the enum constant,
                        // matching the classifier's parent model.
                        self.lower_children(tree, id, child, scope);
                    } else {
                        self.lower(tree, id, child, scope);
                    }
                }
            }
            "argument_list" => {
                let id = tree.push_child(parent, NodeKind::ArgumentList, span);
                self.lower_children(tree, id, node, scope);
            }
            "array_initializer" => {
                let id = tree.push_child(parent, NodeKind::ArrayInitializer, span);
                self.lower_children(tree, id, node, scope);
            }
            "binary_expression" => {
                let id = tree.push_child(parent, NodeKind::Binary, span);
                self.lower_children(tree, id, node, scope);
            }
            "annotation_argument_list" | "element_value_pair" | "annotation_type_element_declaration" => {
                let id = tree.push_child(parent, NodeKind::AnnotationValue, span);
                self.lower_children(tree, id, node, scope);
            }
            "string_literal" => {
                let value = decode_string_literal(node_text(&node, self.source));
                tree.push_child(parent, NodeKind::StringLiteral(value), span);
            }
            "identifier" => {
                let name = node_text(&node, self.source).to_string();
                tree.push_child(parent, NodeKind::Identifier(name), span);
            }
            kind => {
                let id = tree.push_child(parent, NodeKind::Other(kind.to_string()), span);
                let child_scope = if kind == "block" || kind == "constructor_body" {
                    TypeScope {
                        qualifier: scope.qualifier.clone(),
                        in_block: true,
                    }
                } else {
                    scope.clone()
                };
                self.lower_children(tree, id, node, &child_scope);
            }
        }
    }

    fn lower_type_decl(&self, tree: &mut SyntaxTree, parent: NodeId, node: Node, scope: &TypeScope) {
        let flavor = match node.kind() {
            "interface_declaration" => TypeFlavor::Interface,
            "enum_declaration" => TypeFlavor::Enum,
            _ => TypeFlavor::Class,
        };
        let name = node
            .child_by_field_name("name")
            .map(|n| node_text(&n, self.source).to_string())
            .unwrap_or_default();
        let qualified_name = scope.qualify(&name);

        let id = tree.push_child(
            parent,
            NodeKind::TypeDecl {
                flavor,
                qualified_name: qualified_name.clone(),
            },
            node.byte_range(),
        );

        let member_scope = TypeScope {
            in_block: qualified_name.is_none(),
            qualifier: qualified_name,
        };

        for i in 0..node.named_child_count() {
            let Some(child) = node.named_child(i) else {
                continue;
            };
            match child.kind() {
                // Bodies are elided: members hang directly off the type
                // declaration, so a field's parent is the type itself.
                "class_body" | "interface_body" | "enum_body" => {
                    self.lower_children(tree, id, child, &member_scope);
                }
                _ => self.lower(tree, id, child, &member_scope),
            }
        }
    }

    /// Lower a field/local-variable declaration: the declared type
    /// becomes a `TypeRef` leaf (addressable for the static Supplier
    /// rewrite), everything else lowers normally.
    fn lower_declaration_children(
        &self,
        tree: &mut SyntaxTree,
        id: NodeId,
        node: Node,
        scope: &TypeScope,
    ) {
        let type_node = node.child_by_field_name("type");
        for i in 0..node.named_child_count() {
            let Some(child) = node.named_child(i) else {
                continue;
            };
            if type_node.map(|t| t.id()) == Some(child.id()) {
                tree.push_child(id, NodeKind::TypeRef, child.byte_range());
            } else {
                self.lower(tree, id, child, scope);
            }
        }
    }

    fn lower_children(&self, tree: &mut SyntaxTree, id: NodeId, node: Node, scope: &TypeScope) {
        for i in 0..node.named_child_count() {
            if let Some(child) = node.named_child(i) {
                self.lower(tree, id, child, scope);
            }
        }
    }
}

fn has_modifier(node: &Node, keyword: &str) -> bool {
    for i in 0..node.named_child_count() {
        let Some(child) = node.named_child(i) else {
            continue;
        };
        if child.kind() == "modifiers" {
            // Modifier keywords are anonymous tokens, so walk all
            // children, not just named ones.
            for j in 0..child.child_count() {
                if let Some(m) = child.child(j) {
                    if m.kind() == keyword {
                        return true;
                    }
                }
            }
        }
    }
    false
}

/// Strip quotes and resolve escape sequences of a Java string literal.
fn decode_string_literal(raw: &str) -> String {
    let inner = raw
        .strip_prefix("\"\"\"")
        .and_then(|s| s.strip_suffix("\"\"\""))
        .or_else(|| raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(raw);
    unescape(inner)
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
