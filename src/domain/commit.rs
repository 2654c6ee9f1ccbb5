use regex::Regex;
use std::sync::LazyLock;

/// One entry of the history log: subject line plus author name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub message: String,
    pub author: Option<String>,
}

impl CommitRecord {
    pub fn new(message: impl Into<String>, author: Option<String>) -> Self {
        CommitRecord {
            message: message.into(),
            author,
        }
    }
}

/// Matches the conventional-commit prefix at the start of a subject line.
/// An optional emoji marker may precede the type token, and an optional
/// parenthesized scope may follow it.
static SUBJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{Emoji_Presentation}?\s*(\w+)(?:\(([\w-]+)\))?:").expect("valid subject regex")
});

/// Leading conventional-commit token extracted from a subject line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub r#type: String,
    pub scope: Option<String>,
}

impl ParsedCommit {
    /// Parse a commit subject according to the conventional commits prefix.
    /// Supported shapes:
    /// - `type(scope): description`
    /// - `type: description`
    /// - either of the above preceded by an emoji marker
    ///
    /// Returns `None` when the subject has no conventional prefix; such
    /// commits belong in the miscellaneous bucket.
    pub fn parse(message: &str) -> Option<ParsedCommit> {
        let captures = SUBJECT_RE.captures(message)?;

        Some(ParsedCommit {
            r#type: captures.get(1)?.as_str().to_string(),
            scope: captures.get(2).map(|m| m.as_str().to_string()),
        })
    }
}
