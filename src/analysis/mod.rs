//! Declaration extraction from Swift syntax trees.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ Swift text  │────▶│ SwiftParser  │────▶│ ParsedFile  │
//! └─────────────┘     │ (tree-sitter)│     └─────────────┘
//!                     └──────────────┘            │
//!                                                 ▼
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ Source      │◀────│ Declarations │◀────│ Visitor     │
//! └─────────────┘     └──────────────┘     │ (scopes)    │
//!                                          └─────────────┘
//! ```
//!
//! The visitor consumes the tree through [`DeclNode`], which maps grammar
//! nodes onto [`DeclKind`]s and exposes modifiers, comments and name
//! fragments. Names are assembled in [`name`].

mod comment;
mod declaration;
mod kind;
pub mod name;
mod source;
mod syntax;
mod visibility;
mod visitor;

pub use comment::{Comment, CommentKind, TriviaPiece};
pub use declaration::Declaration;
pub use kind::{DeclKeyword, DeclKind};
pub use source::Source;
pub use syntax::{DeclNode, Location, ParsedFile, SwiftParser};
pub use visibility::{Modifier, Visibility};
pub use visitor::{collect_declarations, Visitor};
