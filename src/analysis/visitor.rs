//! Syntax tree traversal producing declaration records.

use tree_sitter::Node;

use super::comment::Comment;
use super::declaration::Declaration;
use super::name;
use super::syntax::{DeclNode, ParsedFile};
use super::visibility::Visibility;

/// An enclosing scope on the context stack.
#[derive(Debug)]
struct Scope {
    id: usize,
    name: String,
}

/// Walks a tree in pre-order and records every documentable declaration.
///
/// Type-like declarations (class, struct, actor, protocol, enum, extension)
/// qualify the names of their members. Other declarations are recorded and
/// their bodies skipped. Everything else, conditional compilation included,
/// is walked through.
pub struct Visitor<'a> {
    source: &'a str,
    minimum: Option<Visibility>,
    context: Vec<Scope>,
    declarations: Vec<Declaration>,
}

impl<'a> Visitor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            minimum: None,
            context: Vec::new(),
            declarations: Vec::new(),
        }
    }

    /// Only record declarations at least as accessible as `level`.
    ///
    /// Members of a filtered scope are still visited and qualified by it.
    pub fn with_minimum_visibility(mut self, level: Visibility) -> Self {
        self.minimum = Some(level);
        self
    }

    /// Visit `node` and its subtree.
    pub fn walk(&mut self, node: Node<'a>) {
        let mut cursor = node.walk();
        loop {
            if self.enter(cursor.node()) && cursor.goto_first_child() {
                continue;
            }
            loop {
                self.leave(cursor.node());
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
            }
        }
    }

    /// Number of open scopes.
    pub fn depth(&self) -> usize {
        self.context.len()
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn finish(self) -> Vec<Declaration> {
        self.declarations
    }

    /// Returns whether children should be visited.
    fn enter(&mut self, node: Node<'a>) -> bool {
        let Some(decl) = DeclNode::from_node(node, self.source) else {
            return true;
        };

        self.record(&decl);

        if decl.kind().introduces_scope() {
            self.context.push(Scope {
                id: decl.id(),
                name: name::scope_name(&decl),
            });
            true
        } else {
            false
        }
    }

    fn leave(&mut self, node: Node<'a>) {
        let is_scope = DeclNode::from_node(node, self.source)
            .map(|decl| decl.kind().introduces_scope())
            .unwrap_or(false);
        if !is_scope {
            return;
        }

        let scope = self.context.pop();
        assert_eq!(
            scope.as_ref().map(|s| s.id),
            Some(node.id()),
            "scope stack out of balance at {:?}",
            node.start_position()
        );
    }

    fn record(&mut self, decl: &DeclNode) {
        let visibility = Visibility::resolve(&decl.modifiers());
        if let Some(minimum) = self.minimum {
            if !visibility.is_at_least(minimum) {
                return;
            }
        }

        let path: Vec<String> = self.context.iter().map(|s| s.name.clone()).collect();
        let location = decl.location();
        let comments = decl
            .leading_trivia()
            .iter()
            .filter_map(Comment::classify)
            .collect();

        self.declarations.push(Declaration {
            comments,
            visibility,
            keyword: decl.keyword(),
            name: name::build(decl, &path),
            line: location.line,
            column: location.column,
        });
    }
}

/// Collect every declaration of a parsed file.
pub fn collect_declarations(parsed: &ParsedFile) -> Vec<Declaration> {
    let mut visitor = Visitor::new(&parsed.source);
    visitor.walk(parsed.root());
    debug_assert_eq!(visitor.depth(), 0);
    visitor.finish()
}
