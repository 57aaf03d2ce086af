//! Qualified declaration names.
//!
//! A name reads like the declaration head with its scope path folded in:
//! `func Box<T>.map<U>(_ f: (T) -> U) -> Box<U>`.

use lazy_static::lazy_static;
use regex::Regex;

use super::syntax::DeclNode;

lazy_static! {
    /// A line break with the indentation around it.
    static ref LINE_BREAK: Regex = Regex::new(r"\s*\r?\n\s*").unwrap();
}

/// Append-only string builder that skips absent fragments.
#[derive(Debug, Default)]
struct NameBuilder {
    buf: String,
}

impl NameBuilder {
    fn push(&mut self, fragment: &str) -> &mut Self {
        self.buf.push_str(fragment);
        self
    }

    fn push_opt(&mut self, fragment: Option<&str>) -> &mut Self {
        if let Some(fragment) = fragment {
            self.buf.push_str(fragment.trim());
        }
        self
    }

    fn finish(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}

/// Build the qualified name of `decl` nested in `path`.
///
/// `path` holds the scope names of the enclosing declarations, outermost
/// first, as produced by [`scope_name`].
pub fn build(decl: &DeclNode, path: &[String]) -> String {
    let kind = decl.kind();
    let mut name = NameBuilder::default();

    if kind.shows_keyword() {
        name.push(decl.keyword().as_str()).push(" ");
    }
    if !path.is_empty() {
        name.push(&path.join(".")).push(".");
    }
    name.push(decl.base_name().trim())
        .push_opt(decl.generic_parameter_clause())
        .push_opt(decl.inheritance_clause())
        .push_opt(decl.signature());
    if let Some(clause) = decl.where_clause() {
        name.push(" ").push(clause.trim());
    }

    collapse_line_breaks(&name.finish())
}

/// Name a scope contributes to its members' paths: base name plus
/// generic parameters, e.g. `Box<T>`.
pub fn scope_name(decl: &DeclNode) -> String {
    let mut name = NameBuilder::default();
    name.push(decl.base_name().trim())
        .push_opt(decl.generic_parameter_clause());
    collapse_line_breaks(&name.finish())
}

/// Fold line breaks and the indentation around them into one space.
pub fn collapse_line_breaks(text: &str) -> String {
    if !text.contains('\n') {
        return text.to_string();
    }
    LINE_BREAK.replace_all(text, " ").into_owned()
}
