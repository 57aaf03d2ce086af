//! Documentable declaration kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a documentable Swift declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    TypeAlias,
    AssociatedType,
    Class,
    Actor,
    Struct,
    Protocol,
    Extension,
    Function,
    Initializer,
    Subscript,
    Variable,
    Enum,
    EnumCase,
    PrecedenceGroup,
    Operator,
    Macro,
}

impl DeclKind {
    /// Keyword introducing the declaration.
    ///
    /// Variables report `var`; the actual binding keyword is read from the
    /// node itself.
    pub fn keyword(&self) -> DeclKeyword {
        match self {
            DeclKind::TypeAlias => DeclKeyword::TypeAlias,
            DeclKind::AssociatedType => DeclKeyword::AssociatedType,
            DeclKind::Class => DeclKeyword::Class,
            DeclKind::Actor => DeclKeyword::Actor,
            DeclKind::Struct => DeclKeyword::Struct,
            DeclKind::Protocol => DeclKeyword::Protocol,
            DeclKind::Extension => DeclKeyword::Extension,
            DeclKind::Function => DeclKeyword::Func,
            DeclKind::Initializer => DeclKeyword::Init,
            DeclKind::Subscript => DeclKeyword::Subscript,
            DeclKind::Variable => DeclKeyword::Var,
            DeclKind::Enum => DeclKeyword::Enum,
            DeclKind::EnumCase => DeclKeyword::Case,
            DeclKind::PrecedenceGroup => DeclKeyword::PrecedenceGroup,
            DeclKind::Operator => DeclKeyword::Operator,
            DeclKind::Macro => DeclKeyword::Macro,
        }
    }

    /// Whether members of this declaration are qualified by its name.
    pub fn introduces_scope(&self) -> bool {
        matches!(
            self,
            DeclKind::Class
                | DeclKind::Actor
                | DeclKind::Struct
                | DeclKind::Protocol
                | DeclKind::Enum
                | DeclKind::Extension
        )
    }

    /// Initializers and subscripts are named by the keyword itself.
    pub fn shows_keyword(&self) -> bool {
        !matches!(self, DeclKind::Initializer | DeclKind::Subscript)
    }

    pub fn has_generic_parameters(&self) -> bool {
        matches!(
            self,
            DeclKind::TypeAlias
                | DeclKind::Class
                | DeclKind::Actor
                | DeclKind::Struct
                | DeclKind::Enum
                | DeclKind::Function
                | DeclKind::Initializer
                | DeclKind::Subscript
                | DeclKind::Macro
        )
    }

    pub fn has_inheritance(&self) -> bool {
        matches!(
            self,
            DeclKind::Class
                | DeclKind::Actor
                | DeclKind::Struct
                | DeclKind::Protocol
                | DeclKind::Enum
                | DeclKind::Extension
                | DeclKind::AssociatedType
        )
    }

    /// Parameters, effects and return clause are part of the name.
    pub fn has_signature(&self) -> bool {
        matches!(
            self,
            DeclKind::Function | DeclKind::Initializer | DeclKind::Subscript | DeclKind::Macro
        )
    }

    pub fn has_where_clause(&self) -> bool {
        !matches!(
            self,
            DeclKind::Variable | DeclKind::EnumCase | DeclKind::PrecedenceGroup | DeclKind::Operator
        )
    }
}

/// Declaration keyword as it appears in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKeyword {
    TypeAlias,
    AssociatedType,
    Class,
    Actor,
    Struct,
    Protocol,
    Extension,
    Func,
    Init,
    Subscript,
    Var,
    Let,
    Enum,
    Case,
    PrecedenceGroup,
    Operator,
    Macro,
}

impl DeclKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKeyword::TypeAlias => "typealias",
            DeclKeyword::AssociatedType => "associatedtype",
            DeclKeyword::Class => "class",
            DeclKeyword::Actor => "actor",
            DeclKeyword::Struct => "struct",
            DeclKeyword::Protocol => "protocol",
            DeclKeyword::Extension => "extension",
            DeclKeyword::Func => "func",
            DeclKeyword::Init => "init",
            DeclKeyword::Subscript => "subscript",
            DeclKeyword::Var => "var",
            DeclKeyword::Let => "let",
            DeclKeyword::Enum => "enum",
            DeclKeyword::Case => "case",
            DeclKeyword::PrecedenceGroup => "precedencegroup",
            DeclKeyword::Operator => "operator",
            DeclKeyword::Macro => "macro",
        }
    }
}

impl fmt::Display for DeclKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
