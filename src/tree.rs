//! Mutable arena syntax tree.
//!
//! The traversal engine and the literal classifier operate on this tree,
//! not on the tree-sitter CST directly. Nodes live in a flat arena and
//! address each other by index, so replacing one child never invalidates
//! a previously taken snapshot of its siblings.
//!
//! Rewrites replace a node's slot in its parent with a `Rendered` node
//! carrying the replacement expression text and the byte span of the
//! node it replaced. Serialization is span splicing: the original source
//! with every reachable `Rendered` span substituted.

use std::fmt;
use std::ops::Range;

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Flavor of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFlavor {
    Class,
    Interface,
    Enum,
}

/// Closed set of construct categories the classifier dispatches over.
///
/// Everything the policy table does not name maps to `Other` with the
/// grammar kind preserved, so coverage gaps show up in diagnostics by
/// name instead of being silently skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    CompilationUnit,
    TypeDecl {
        flavor: TypeFlavor,
        /// `None` for local classes, where a fully qualified name
        /// cannot be computed.
        qualified_name: Option<String>,
    },
    Field {
        is_static: bool,
    },
    LocalVarDecl,
    TypeRef,
    Identifier(String),
    Declarator,
    EnumConstant,
    ArgumentList,
    ArrayInitializer,
    Binary,
    AnnotationValue,
    /// A string literal with its decoded value.
    StringLiteral(String),
    /// A replacement expression produced by a rewrite. Spliced verbatim
    /// over the span it replaced during serialization.
    Rendered(String),
    Other(String),
}

impl NodeKind {
    /// Short construct name used in diagnostics.
    pub fn construct_name(&self) -> &str {
        match self {
            NodeKind::CompilationUnit => "compilation-unit",
            NodeKind::TypeDecl { .. } => "type-declaration",
            NodeKind::Field { .. } => "field-declaration",
            NodeKind::LocalVarDecl => "local-variable-declaration",
            NodeKind::TypeRef => "type",
            NodeKind::Identifier(_) => "identifier",
            NodeKind::Declarator => "declarator",
            NodeKind::EnumConstant => "enum-constant",
            NodeKind::ArgumentList => "argument-list",
            NodeKind::ArrayInitializer => "array-initializer",
            NodeKind::Binary => "binary-expression",
            NodeKind::AnnotationValue => "annotation-value",
            NodeKind::StringLiteral(_) => "string-literal",
            NodeKind::Rendered(_) => "rendered-expression",
            NodeKind::Other(name) => name,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.construct_name())
    }
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    span: Range<usize>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena syntax tree for one source file.
#[derive(Debug)]
pub struct SyntaxTree {
    source: String,
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl SyntaxTree {
    /// Create a tree holding only a root node covering the whole source.
    pub fn new(source: String, root_kind: NodeKind) -> Self {
        let span = 0..source.len();
        Self {
            source,
            nodes: vec![NodeData {
                kind: root_kind,
                span,
                parent: None,
                children: Vec::new(),
            }],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Allocate a node and append it to `parent`'s child list.
    pub fn push_child(&mut self, parent: NodeId, kind: NodeKind, span: Range<usize>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind,
            span,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    pub fn span(&self, id: NodeId) -> Range<usize> {
        self.nodes[id.index()].span.clone()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// Source text covered by a node.
    pub fn text(&self, id: NodeId) -> &str {
        &self.source[self.span(id)]
    }

    /// First child of `id` matching `pred`, if any.
    pub fn find_child(&self, id: NodeId, pred: impl Fn(&NodeKind) -> bool) -> Option<NodeId> {
        self.children(id).iter().copied().find(|c| pred(self.kind(*c)))
    }

    /// Replace `old` in its parent's child list with a `Rendered` node
    /// carrying `text` over the same byte span. The old subtree is
    /// detached (its parent link cleared) so a traversal snapshot that
    /// still holds it will skip it.
    ///
    /// Returns `None` if `old` has no parent.
    pub fn replace_with_rendered(&mut self, old: NodeId, text: String) -> Option<NodeId> {
        let parent = self.parent(old)?;
        let span = self.span(old);
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind: NodeKind::Rendered(text),
            span,
            parent: Some(parent),
            children: Vec::new(),
        });
        let slot = self.nodes[parent.index()]
            .children
            .iter()
            .position(|c| *c == old)?;
        self.nodes[parent.index()].children[slot] = id;
        self.nodes[old.index()].parent = None;
        Some(id)
    }

    /// Collect every reachable `Rendered` edit in span order.
    fn edits(&self) -> Vec<(Range<usize>, &str)> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if let NodeKind::Rendered(text) = self.kind(id) {
                out.push((self.span(id), text.as_str()));
                continue;
            }
            stack.extend(self.children(id).iter().copied());
        }
        out.sort_by_key(|(span, _)| span.start);
        out
    }

    /// Number of substitutions the tree currently carries.
    pub fn edit_count(&self) -> usize {
        self.edits().len()
    }

    /// Serialize the tree back to source text by splicing every
    /// replacement over the span it covers.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for (span, text) in self.edits() {
            out.push_str(&self.source[cursor..span.start]);
            out.push_str(text);
            cursor = span.end;
        }
        out.push_str(&self.source[cursor..]);
        out
    }

    /// 1-based line and column of a byte offset. Column counts
    /// characters, not bytes, so it stays meaningful for CJK source.
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let prefix = &self.source[..offset.min(self.source.len())];
        let line = prefix.matches('\n').count() + 1;
        let line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let col = self.source[line_start..offset].chars().count() + 1;
        (line, col)
    }

    /// Full text of the line containing a byte offset, without the
    /// trailing newline.
    pub fn line_text(&self, offset: usize) -> &str {
        let offset = offset.min(self.source.len());
        let start = self.source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let end = self.source[start..]
            .find('\n')
            .map(|i| start + i)
            .unwrap_or(self.source.len());
        &self.source[start..end]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn literal(value: &str) -> NodeKind {
        NodeKind::StringLiteral(value.to_string())
    }

    #[test]
    fn test_replace_and_render() {
        let mut tree = SyntaxTree::new("f(\"a\", \"b\")".to_string(), NodeKind::CompilationUnit);
        let args = tree.push_child(tree.root(), NodeKind::ArgumentList, 1..11);
        let a = tree.push_child(args, literal("a"), 2..5);
        let b = tree.push_child(args, literal("b"), 7..10);

        tree.replace_with_rendered(a, "lookup(\"k.1\")".to_string());
        assert_eq!(tree.render(), "f(lookup(\"k.1\"), \"b\")");
        assert_eq!(tree.edit_count(), 1);

        tree.replace_with_rendered(b, "lookup(\"k.2\")".to_string());
        assert_eq!(tree.render(), "f(lookup(\"k.1\"), lookup(\"k.2\"))");
        assert_eq!(tree.edit_count(), 2);
    }

    #[test]
    fn test_replace_detaches_old_node() {
        let mut tree = SyntaxTree::new("x = \"值\";".to_string(), NodeKind::CompilationUnit);
        let decl = tree.push_child(tree.root(), NodeKind::Declarator, 0..10);
        let lit = tree.push_child(decl, literal("值"), 4..9);

        let snapshot: Vec<_> = tree.children(decl).to_vec();
        let rendered = tree.replace_with_rendered(lit, "expr".to_string()).unwrap();

        // The snapshot still holds the old id, but its parent link is gone.
        assert_eq!(snapshot, vec![lit]);
        assert_eq!(tree.parent(lit), None);
        assert_eq!(tree.parent(rendered), Some(decl));
        assert_eq!(tree.children(decl), &[rendered]);
    }

    #[test]
    fn test_replace_detached_node_is_none() {
        let mut tree = SyntaxTree::new("\"值\"".to_string(), NodeKind::CompilationUnit);
        let lit = tree.push_child(tree.root(), literal("值"), 0..5);
        tree.replace_with_rendered(lit, "expr".to_string());
        // A second replacement of the now-detached node is rejected.
        assert_eq!(tree.replace_with_rendered(lit, "again".to_string()), None);
    }

    #[test]
    fn test_unmodified_tree_renders_source() {
        let src = "class A { }";
        let tree = SyntaxTree::new(src.to_string(), NodeKind::CompilationUnit);
        assert_eq!(tree.render(), src);
        assert_eq!(tree.edit_count(), 0);
    }

    #[test]
    fn test_position_and_line_text() {
        let tree = SyntaxTree::new("ab\ncd中文\nef".to_string(), NodeKind::CompilationUnit);
        assert_eq!(tree.position(0), (1, 1));
        assert_eq!(tree.position(3), (2, 1));
        // offset of '文' (after 'c','d','中' = 3 + 2 + 3 bytes)
        assert_eq!(tree.position(8), (2, 4));
        assert_eq!(tree.line_text(4), "cd中文");
        assert_eq!(tree.line_text(12), "ef");
    }
}
