//! Thin adapter over the tree-sitter Swift grammar.
//!
//! Everything the analysis needs from a concrete syntax tree goes through
//! [`DeclNode`]: declaration kind, modifiers, leading comments, location and
//! the text fragments a qualified name is assembled from.

use once_cell::sync::OnceCell;
use tree_sitter::{Language, Node, Parser, Tree};

use super::comment::TriviaPiece;
use super::kind::{DeclKeyword, DeclKind};
use super::visibility::Modifier;
use crate::error::{CoverageError, Result};

/// Tokens and nodes that end a name fragment scan.
const CLAUSE_TERMINATORS: &[&str] = &[
    "type_constraints",
    "class_body",
    "enum_class_body",
    "protocol_body",
    "function_body",
    "computed_property",
    "protocol_property_requirements",
    "macro_definition",
    "where",
    "=",
    "{",
];

/// Parses Swift source into tree-sitter trees.
///
/// `tree_sitter::Parser` is not `Sync`, so a fresh parser is created for
/// every file.
pub struct SwiftParser {
    language: Language,
}

/// Shared grammar; parsers themselves are created per call.
static SWIFT_PARSER: OnceCell<SwiftParser> = OnceCell::new();

impl SwiftParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_swift::LANGUAGE.into(),
        }
    }

    /// Process-wide instance; the grammar is loaded once.
    pub fn shared() -> &'static SwiftParser {
        SWIFT_PARSER.get_or_init(SwiftParser::new)
    }

    fn create_parser(&self, path: &str) -> Result<Parser> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| CoverageError::Parse {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        Ok(parser)
    }

    /// Parse a source text.
    ///
    /// Syntax errors do not fail the parse: tree-sitter recovers and the
    /// resulting tree carries ERROR nodes, see [`ParsedFile::has_errors`].
    pub fn parse(&self, path: &str, source: impl Into<String>) -> Result<ParsedFile> {
        let source = source.into();
        let mut parser = self.create_parser(path)?;
        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| CoverageError::Parse {
                path: path.to_string(),
                message: "parser produced no tree".to_string(),
            })?;

        Ok(ParsedFile {
            tree,
            source,
            path: path.to_string(),
        })
    }
}

impl Default for SwiftParser {
    fn default() -> Self {
        Self::new()
    }
}

/// A parsed tree together with the text it was parsed from.
pub struct ParsedFile {
    /// The tree-sitter parse tree.
    pub tree: Tree,
    /// Source text the tree was parsed from.
    pub source: String,
    /// Display path, used in diagnostics.
    pub path: String,
}

impl ParsedFile {
    /// Get text for a tree-sitter node.
    pub fn node_text(&self, node: Node) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Whether tree-sitter had to recover from syntax errors.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

/// 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn of(node: Node) -> Self {
        let start = node.start_position();
        Self {
            line: start.row + 1, // tree-sitter is 0-indexed
            column: start.column + 1,
        }
    }
}

/// A documentable declaration node.
#[derive(Clone, Copy)]
pub struct DeclNode<'a> {
    node: Node<'a>,
    source: &'a str,
    kind: DeclKind,
}

impl<'a> DeclNode<'a> {
    /// Wrap `node` if it is a documentable declaration.
    pub fn from_node(node: Node<'a>, source: &'a str) -> Option<Self> {
        let kind = match node.kind() {
            "typealias_declaration" => DeclKind::TypeAlias,
            "associatedtype_declaration" => DeclKind::AssociatedType,
            "class_declaration" => class_kind(node, source)?,
            "protocol_declaration" => DeclKind::Protocol,
            "function_declaration" | "protocol_function_declaration" => DeclKind::Function,
            "init_declaration" => DeclKind::Initializer,
            "subscript_declaration" => DeclKind::Subscript,
            "property_declaration" | "protocol_property_declaration" => DeclKind::Variable,
            "enum_entry" => DeclKind::EnumCase,
            "precedence_group_declaration" => DeclKind::PrecedenceGroup,
            "operator_declaration" => DeclKind::Operator,
            "macro_declaration" => DeclKind::Macro,
            _ => return None,
        };
        Some(Self { node, source, kind })
    }

    pub fn kind(&self) -> DeclKind {
        self.kind
    }

    pub fn id(&self) -> usize {
        self.node.id()
    }

    pub fn location(&self) -> Location {
        Location::of(self.node)
    }

    fn text(&self, node: Node) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    fn span_text(&self, start: Node, end: Node) -> &'a str {
        self.source
            .get(start.start_byte()..end.end_byte())
            .unwrap_or("")
    }

    fn children(&self) -> Vec<Node<'a>> {
        let mut cursor = self.node.walk();
        self.node.children(&mut cursor).collect()
    }

    fn child_of_kind(&self, kind: &str) -> Option<Node<'a>> {
        self.children().into_iter().find(|c| c.kind() == kind)
    }

    /// Modifier tokens in source order. Attributes are not modifiers.
    pub fn modifiers(&self) -> Vec<Modifier> {
        let Some(list) = self.child_of_kind("modifiers") else {
            return Vec::new();
        };
        let mut cursor = list.walk();
        list.named_children(&mut cursor)
            .filter(|m| m.kind() != "attribute" && !m.is_extra())
            .map(|m| parse_modifier(self.text(m)))
            .collect()
    }

    /// Comments directly preceding the declaration, in source order.
    ///
    /// Walks back over `comment` / `multiline_comment` siblings and stops at
    /// the first other node, compiler directives included. Comments that
    /// start on the line where the previous sibling ends trail that sibling
    /// and are dropped.
    pub fn leading_trivia(&self) -> Vec<TriviaPiece> {
        let mut comments = Vec::new();
        let mut boundary_row = None;
        let mut current = self.node.prev_sibling();
        while let Some(sibling) = current {
            if !is_comment(sibling) {
                boundary_row = Some(sibling.end_position().row);
                break;
            }
            comments.push(sibling);
            current = sibling.prev_sibling();
        }
        comments.reverse();

        comments
            .into_iter()
            .skip_while(|c| Some(c.start_position().row) == boundary_row)
            .map(|c| TriviaPiece::from_comment(self.text(c)))
            .collect()
    }

    /// Keyword of the declaration; `let` or `var` for variables.
    pub fn keyword(&self) -> DeclKeyword {
        if self.kind != DeclKind::Variable {
            return self.kind.keyword();
        }
        match self.binding_specifier() {
            Some(text) if text.trim_start().starts_with("let") => DeclKeyword::Let,
            _ => DeclKeyword::Var,
        }
    }

    fn binding_specifier(&self) -> Option<&'a str> {
        for child in self.children() {
            if child.kind() == "value_binding_pattern" {
                return Some(self.text(child));
            }
            if child.kind() == "pattern" {
                let mut cursor = child.walk();
                let nested = child
                    .children(&mut cursor)
                    .find(|c| c.kind() == "value_binding_pattern");
                if let Some(nested) = nested {
                    return Some(self.text(nested));
                }
            }
        }
        None
    }

    /// Declared identifier, or the extended type for extensions.
    pub fn identifier(&self) -> Option<&'a str> {
        if let Some(name) = self.node.child_by_field_name("name") {
            return Some(self.text(name));
        }
        self.children()
            .into_iter()
            .find(|c| matches!(c.kind(), "simple_identifier" | "type_identifier" | "user_type"))
            .map(|c| self.text(c))
    }

    /// `init`, `init?` or `init!`.
    pub fn initializer_name(&self) -> String {
        let children = self.children();
        let mark = children
            .iter()
            .position(|c| c.kind() == "init")
            .and_then(|i| children.get(i + 1))
            .map(|c| self.text(*c))
            .filter(|t| *t == "?" || *t == "!");
        format!("init{}", mark.unwrap_or(""))
    }

    /// Operator symbol of an operator declaration.
    pub fn operator_name(&self) -> Option<&'a str> {
        let children = self.children();
        children
            .iter()
            .position(|c| c.kind() == "operator")
            .and_then(|i| children.get(i + 1))
            .map(|c| self.text(*c))
    }

    /// Bound names of a variable declaration, patterns as written.
    pub fn binding_names(&self) -> Vec<String> {
        let mut cursor = self.node.walk();
        let mut patterns: Vec<Node> = self
            .node
            .children_by_field_name("name", &mut cursor)
            .collect();
        if patterns.is_empty() {
            patterns = self
                .children()
                .into_iter()
                .filter(|c| c.kind() == "pattern")
                .collect();
        }

        patterns
            .into_iter()
            .map(|pattern| {
                let mut cursor = pattern.walk();
                let binding = pattern
                    .children(&mut cursor)
                    .find(|c| c.kind() == "value_binding_pattern");
                match binding {
                    Some(binding) => self
                        .source
                        .get(binding.end_byte()..pattern.end_byte())
                        .unwrap_or("")
                        .trim()
                        .to_string(),
                    None => self.text(pattern).trim().to_string(),
                }
            })
            .collect()
    }

    /// Enum case elements with their associated value lists.
    pub fn enum_elements(&self) -> Vec<String> {
        let mut elements: Vec<String> = Vec::new();
        let mut cursor = self.node.walk();
        if !cursor.goto_first_child() {
            return elements;
        }
        loop {
            let child = cursor.node();
            match (cursor.field_name(), child.kind()) {
                (Some("name"), _) | (None, "simple_identifier") => {
                    elements.push(self.text(child).to_string());
                }
                (Some("data_contents"), _) | (None, "enum_type_parameters") => {
                    if let Some(last) = elements.last_mut() {
                        last.push_str(self.text(child));
                    }
                }
                _ => {}
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        elements
    }

    /// Base name per declaration kind.
    pub fn base_name(&self) -> String {
        match self.kind {
            DeclKind::Initializer => self.initializer_name(),
            DeclKind::Subscript => "subscript".to_string(),
            DeclKind::Variable => self.binding_names().join(","),
            DeclKind::EnumCase => self.enum_elements().join(","),
            DeclKind::Operator => self.operator_name().unwrap_or_default().to_string(),
            _ => self.identifier().unwrap_or_default().to_string(),
        }
    }

    /// `<T, U>` as written.
    pub fn generic_parameter_clause(&self) -> Option<&'a str> {
        if !self.kind.has_generic_parameters() {
            return None;
        }
        self.child_of_kind("type_parameters").map(|n| self.text(n))
    }

    /// `: A, B` as written.
    pub fn inheritance_clause(&self) -> Option<&'a str> {
        if !self.kind.has_inheritance() {
            return None;
        }
        self.clause_from(|c| c.kind() == ":")
    }

    /// Parameters, effects and return clause as written.
    pub fn signature(&self) -> Option<&'a str> {
        if !self.kind.has_signature() {
            return None;
        }
        self.clause_from(|c| c.kind() == "(")
    }

    /// `where ...` as written.
    pub fn where_clause(&self) -> Option<&'a str> {
        if !self.kind.has_where_clause() {
            return None;
        }
        self.child_of_kind("type_constraints").map(|n| self.text(n))
    }

    /// Text from the first child matching `start` up to the last child
    /// before a body, a where clause or an initial value.
    fn clause_from(&self, start: impl Fn(&Node) -> bool) -> Option<&'a str> {
        let children = self.children();
        let first = children.iter().position(start)?;
        let last = children[first..]
            .iter()
            .take_while(|c| !CLAUSE_TERMINATORS.contains(&c.kind()))
            .filter(|c| !is_comment(**c))
            .last()?;
        Some(self.span_text(children[first], *last))
    }
}

fn class_kind(node: Node, source: &str) -> Option<DeclKind> {
    let keyword = match node.child_by_field_name("declaration_kind") {
        Some(kind) => kind.utf8_text(source.as_bytes()).unwrap_or(""),
        None => {
            let mut cursor = node.walk();
            let found = node
                .children(&mut cursor)
                .find(|c| matches!(c.kind(), "class" | "struct" | "actor" | "enum" | "extension"));
            found.map(|c| c.kind()).unwrap_or("")
        }
    };
    match keyword {
        "class" => Some(DeclKind::Class),
        "struct" => Some(DeclKind::Struct),
        "actor" => Some(DeclKind::Actor),
        "enum" => Some(DeclKind::Enum),
        "extension" => Some(DeclKind::Extension),
        _ => None,
    }
}

fn is_comment(node: Node) -> bool {
    matches!(node.kind(), "comment" | "multiline_comment")
}

/// Split `private(set)` into name and detail.
fn parse_modifier(text: &str) -> Modifier {
    match text.split_once('(') {
        Some((name, rest)) => {
            let detail = rest.trim_end().trim_end_matches(')').trim();
            Modifier::with_detail(name.trim(), detail)
        }
        None => Modifier::new(text.trim()),
    }
}
