//! Comment classification for declaration trivia.

use serde::{Deserialize, Serialize};

/// A trivia piece preceding a declaration, as lexed from the source.
///
/// The lexical kind only looks at the comment marker. Whether the comment
/// actually documents anything is decided by [`Comment::classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriviaPiece {
    /// `// ...`
    LineComment(String),
    /// `/* ... */`
    BlockComment(String),
    /// `/// ...`
    DocLineComment(String),
    /// `/** ... */`
    DocBlockComment(String),
    /// Whitespace, newlines, compiler directives.
    Other,
}

impl TriviaPiece {
    /// Lex a raw comment by its marker.
    pub fn from_comment(text: &str) -> Self {
        let text = text.trim_end_matches(['\r', '\n']);
        if text.starts_with("///") && !text.starts_with("////") {
            TriviaPiece::DocLineComment(text.to_string())
        } else if text.starts_with("//") {
            TriviaPiece::LineComment(text.to_string())
        } else if text.starts_with("/**") && !text.starts_with("/**/") && !text.starts_with("/***") {
            TriviaPiece::DocBlockComment(text.to_string())
        } else if text.starts_with("/*") {
            TriviaPiece::BlockComment(text.to_string())
        } else {
            TriviaPiece::Other
        }
    }
}

/// Kind of a classified comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommentKind {
    LineComment,
    BlockComment,
    DocLine,
    DocBlock,
}

impl CommentKind {
    pub fn is_doc(&self) -> bool {
        matches!(self, CommentKind::DocLine | CommentKind::DocBlock)
    }
}

/// A comment attached to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub kind: CommentKind,
    /// Raw comment text, markers included.
    pub text: String,
}

impl Comment {
    /// Classify a trivia piece.
    ///
    /// Returns `None` for non-comment trivia. A doc marker with nothing
    /// after it (a bare `///` or `/** */`) is classified as the ordinary
    /// comment of the same shape so it never counts as documentation.
    pub fn classify(piece: &TriviaPiece) -> Option<Comment> {
        let (kind, text) = match piece {
            TriviaPiece::LineComment(text) => (CommentKind::LineComment, text),
            TriviaPiece::BlockComment(text) => (CommentKind::BlockComment, text),
            TriviaPiece::DocLineComment(text) => (CommentKind::DocLine, text),
            TriviaPiece::DocBlockComment(text) => (CommentKind::DocBlock, text),
            TriviaPiece::Other => return None,
        };

        let kind = match kind {
            CommentKind::DocLine if strip_markers(kind, text).is_empty() => CommentKind::LineComment,
            CommentKind::DocBlock if strip_markers(kind, text).is_empty() => {
                CommentKind::BlockComment
            }
            kind => kind,
        };

        Some(Comment {
            kind,
            text: text.clone(),
        })
    }

    /// Whether this comment documents the declaration.
    pub fn is_doc(&self) -> bool {
        self.kind.is_doc()
    }

    /// Comment body without markers and surrounding whitespace.
    pub fn content(&self) -> String {
        strip_markers(self.kind, &self.text)
    }
}

fn strip_markers(kind: CommentKind, text: &str) -> String {
    match kind {
        CommentKind::LineComment | CommentKind::DocLine => {
            text.trim_start_matches('/').trim().to_string()
        }
        CommentKind::BlockComment | CommentKind::DocBlock => {
            let body = text.strip_prefix("/*").unwrap_or(text);
            let body = body.strip_suffix("*/").unwrap_or(body);
            let body = body.trim_start_matches('*');
            body.lines()
                .map(|line| line.trim().trim_start_matches('*').trim())
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Option<Comment> {
        Comment::classify(&TriviaPiece::from_comment(text))
    }

    #[test]
    fn test_lexical_kinds() {
        assert!(matches!(
            TriviaPiece::from_comment("// note"),
            TriviaPiece::LineComment(_)
        ));
        assert!(matches!(
            TriviaPiece::from_comment("/// doc"),
            TriviaPiece::DocLineComment(_)
        ));
        assert!(matches!(
            TriviaPiece::from_comment("//// banner"),
            TriviaPiece::LineComment(_)
        ));
        assert!(matches!(
            TriviaPiece::from_comment("/* note */"),
            TriviaPiece::BlockComment(_)
        ));
        assert!(matches!(
            TriviaPiece::from_comment("/** doc */"),
            TriviaPiece::DocBlockComment(_)
        ));
        assert!(matches!(
            TriviaPiece::from_comment("/**/"),
            TriviaPiece::BlockComment(_)
        ));
        assert_eq!(TriviaPiece::from_comment("#if DEBUG"), TriviaPiece::Other);
    }

    #[test]
    fn test_classify_keeps_raw_text() {
        let comment = classify("/// A documentation line comment").unwrap();
        assert_eq!(comment.kind, CommentKind::DocLine);
        assert_eq!(comment.text, "/// A documentation line comment");
        assert_eq!(comment.content(), "A documentation line comment");
        assert!(comment.is_doc());

        let comment = classify("/* A developer block comment */").unwrap();
        assert_eq!(comment.kind, CommentKind::BlockComment);
        assert!(!comment.is_doc());
    }

    #[test]
    fn test_empty_doc_is_not_documentation() {
        let comment = classify("///").unwrap();
        assert_eq!(comment.kind, CommentKind::LineComment);
        assert!(!comment.is_doc());

        let comment = classify("///   ").unwrap();
        assert!(!comment.is_doc());

        let comment = classify("/** */").unwrap();
        assert_eq!(comment.kind, CommentKind::BlockComment);
        assert!(!comment.is_doc());

        let comment = classify("/**\n *\n */").unwrap();
        assert!(!comment.is_doc());
    }

    #[test]
    fn test_doc_block_content() {
        let comment = classify("/**\n * Adds two values.\n *\n * - Returns: the sum\n */").unwrap();
        assert_eq!(comment.kind, CommentKind::DocBlock);
        assert_eq!(comment.content(), "Adds two values.\n- Returns: the sum");
    }

    #[test]
    fn test_other_trivia() {
        assert!(Comment::classify(&TriviaPiece::Other).is_none());
    }
}
