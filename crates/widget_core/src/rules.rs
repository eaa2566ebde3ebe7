use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid url pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// How a rule recognizes a URL: path-fragment containment or regex search.
#[derive(Debug, Clone)]
pub enum UrlPattern {
    /// Path fragment matched by substring containment, scheme and host ignored.
    Literal(String),
    /// Compiled expression searched anywhere in the full URL, unanchored.
    Regex(Regex),
}

impl UrlPattern {
    pub fn matches(&self, url: &str) -> bool {
        match self {
            UrlPattern::Literal(fragment) => strip_origin(url).contains(fragment.as_str()),
            UrlPattern::Regex(expr) => expr.is_match(url),
        }
    }
}

// Regex carries no equality; compare pattern source text so rule sets stay
// assertable in tests.
impl PartialEq for UrlPattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (UrlPattern::Literal(a), UrlPattern::Literal(b)) => a == b,
            (UrlPattern::Regex(a), UrlPattern::Regex(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl Eq for UrlPattern {}

/// A single page-change directive: a URL pattern plus the intent announced
/// when it matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRule {
    pattern: UrlPattern,
    intent: String,
}

impl PageRule {
    /// Builds a literal rule. A `http(s)://host` prefix on the pattern is
    /// stripped up front so bare path fragments and absolute URLs configure
    /// the same rule.
    pub fn literal(pattern: impl Into<String>, intent: impl Into<String>) -> Self {
        let pattern = pattern.into();
        Self {
            pattern: UrlPattern::Literal(strip_origin(&pattern).to_string()),
            intent: intent.into(),
        }
    }

    /// Builds a regex rule, compiling the expression up front. Invalid
    /// expressions are rejected here, never at evaluation time.
    pub fn regex(pattern: &str, intent: impl Into<String>) -> Result<Self, RuleError> {
        let expr = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: UrlPattern::Regex(expr),
            intent: intent.into(),
        })
    }

    pub fn pattern(&self) -> &UrlPattern {
        &self.pattern
    }

    pub fn intent(&self) -> &str {
        &self.intent
    }

    pub fn matches(&self, url: &str) -> bool {
        self.pattern.matches(url)
    }
}

/// Ordered page-change rules plus the intent used when nothing matches.
///
/// Order is precedence: the first matching rule wins, even when a later rule
/// would be a closer fit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSet {
    rules: Vec<PageRule>,
    fallback_intent: String,
}

impl RuleSet {
    pub fn new(rules: Vec<PageRule>, fallback_intent: impl Into<String>) -> Self {
        Self {
            rules,
            fallback_intent: fallback_intent.into(),
        }
    }

    pub fn rules(&self) -> &[PageRule] {
        &self.rules
    }

    pub fn fallback_intent(&self) -> &str {
        &self.fallback_intent
    }

    /// Returns the intent of the first rule matching `url`, or the fallback
    /// intent when none does. An empty rule set always falls back.
    pub fn evaluate(&self, url: &str) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.matches(url))
            .map_or(self.fallback_intent.as_str(), PageRule::intent)
    }
}

/// Strips a leading `http://host` or `https://host` prefix, leaving the path
/// and everything after it. Strings without such a prefix pass through
/// unchanged; an absolute URL with no path strips to the empty string.
fn strip_origin(candidate: &str) -> &str {
    let rest = candidate
        .strip_prefix("http://")
        .or_else(|| candidate.strip_prefix("https://"));
    match rest {
        Some(rest) => rest.find('/').map_or("", |slash| &rest[slash..]),
        None => candidate,
    }
}
