//! Access level resolution from declaration modifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A declaration modifier as written in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modifier {
    /// Modifier keyword (e.g. "public", "static", "mutating").
    pub name: String,
    /// Parenthesized qualifier, e.g. "set" for `private(set)`.
    pub detail: Option<String>,
}

impl Modifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: None,
        }
    }

    pub fn with_detail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: Some(detail.into()),
        }
    }
}

/// Swift access level, ordered from most to least accessible.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Open,
    Public,
    #[default]
    Internal,
    FilePrivate,
    Private,
}

impl Visibility {
    /// All levels, most accessible first.
    pub const ALL: [Visibility; 5] = [
        Visibility::Open,
        Visibility::Public,
        Visibility::Internal,
        Visibility::FilePrivate,
        Visibility::Private,
    ];

    /// Map an access keyword to its level.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "open" => Some(Visibility::Open),
            "public" => Some(Visibility::Public),
            "internal" => Some(Visibility::Internal),
            "fileprivate" => Some(Visibility::FilePrivate),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }

    /// Resolve the primary access level of a declaration.
    ///
    /// The first bare access modifier wins. Setter-scoped modifiers such as
    /// `private(set)` restrict only writes and are skipped. Declarations
    /// without an access modifier are `internal`.
    pub fn resolve(modifiers: &[Modifier]) -> Self {
        modifiers
            .iter()
            .filter(|m| m.detail.is_none())
            .find_map(|m| Self::from_keyword(&m.name))
            .unwrap_or_default()
    }

    /// Whether a declaration at this level is at least as accessible as `minimum`.
    pub fn is_at_least(&self, minimum: Visibility) -> bool {
        *self <= minimum
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Open => "open",
            Visibility::Public => "public",
            Visibility::Internal => "internal",
            Visibility::FilePrivate => "fileprivate",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(&s.to_ascii_lowercase()).ok_or_else(|| {
            format!(
                "invalid access level {:?}, must be one of: open, public, internal, fileprivate, private",
                s
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_internal() {
        assert_eq!(Visibility::resolve(&[]), Visibility::Internal);
        assert_eq!(
            Visibility::resolve(&[Modifier::new("static"), Modifier::new("final")]),
            Visibility::Internal
        );
    }

    #[test]
    fn test_first_keyword_wins() {
        let modifiers = [Modifier::new("open"), Modifier::new("public")];
        assert_eq!(Visibility::resolve(&modifiers), Visibility::Open);

        let modifiers = [Modifier::new("static"), Modifier::new("fileprivate")];
        assert_eq!(Visibility::resolve(&modifiers), Visibility::FilePrivate);
    }

    #[test]
    fn test_setter_detail_is_skipped() {
        let modifiers = [
            Modifier::with_detail("private", "set"),
            Modifier::new("public"),
        ];
        assert_eq!(Visibility::resolve(&modifiers), Visibility::Public);

        let modifiers = [Modifier::with_detail("public", "set")];
        assert_eq!(Visibility::resolve(&modifiers), Visibility::Internal);
    }

    #[test]
    fn test_unknown_keywords_ignored() {
        let modifiers = [Modifier::new("package"), Modifier::new("private")];
        assert_eq!(Visibility::resolve(&modifiers), Visibility::Private);
    }

    #[test]
    fn test_ordering() {
        assert!(Visibility::Open < Visibility::Public);
        assert!(Visibility::Public < Visibility::Internal);
        assert!(Visibility::Internal < Visibility::FilePrivate);
        assert!(Visibility::FilePrivate < Visibility::Private);
        assert!(Visibility::Public.is_at_least(Visibility::Internal));
        assert!(!Visibility::Private.is_at_least(Visibility::Public));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("fileprivate".parse::<Visibility>(), Ok(Visibility::FilePrivate));
        assert_eq!("Public".parse::<Visibility>(), Ok(Visibility::Public));
        assert!("protected".parse::<Visibility>().is_err());
    }
}
