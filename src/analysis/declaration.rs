//! Declaration records emitted by the visitor.

use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::kind::DeclKeyword;
use super::visibility::Visibility;

/// A documentable declaration found in a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Comments immediately preceding the declaration, in source order.
    pub comments: Vec<Comment>,
    pub visibility: Visibility,
    pub keyword: DeclKeyword,
    /// Qualified name, e.g. `func CompassPoint.turnNorth()`.
    pub name: String,
    /// Start line (1-indexed).
    pub line: usize,
    /// Start column (1-indexed).
    pub column: usize,
}

impl Declaration {
    /// True if any preceding comment is a documentation comment.
    pub fn is_documented(&self) -> bool {
        self.comments.iter().any(Comment::is_doc)
    }
}
