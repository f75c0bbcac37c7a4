// PresetScrub - core/rules.rs
//
// Exclusion rule set and the line-selection predicate.
// Core layer: pure logic, no I/O.
//
// Matching is literal, case-sensitive substring search anywhere in the
// line. A token also matches inside a longer identifier
// (`trend_action` hits `trend_action_mode`); that is intended.

use crate::util::constants;

/// Which rule list produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Deprecated identifier.
    Token,
    /// Comment phrase describing a removed feature.
    Phrase,
}

impl RuleKind {
    /// Lowercase label used in logs and `--list-rules` output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Phrase => "phrase",
        }
    }
}

/// The rule that caused a line to be excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'r> {
    pub kind: RuleKind,
    pub rule: &'r str,
}

/// Immutable set of exclusion substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRules {
    tokens: Vec<String>,
    phrases: Vec<String>,
}

impl ExclusionRules {
    /// Build a rule set from arbitrary token and phrase lists.
    ///
    /// Empty strings are discarded: an empty needle would match every line.
    pub fn new<T, P>(tokens: T, phrases: P) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let keep = |s: &String| !s.is_empty();
        Self {
            tokens: tokens
                .into_iter()
                .map(Into::<String>::into)
                .filter(keep)
                .collect(),
            phrases: phrases
                .into_iter()
                .map(Into::<String>::into)
                .filter(keep)
                .collect(),
        }
    }

    /// The compiled-in rules for the removed grid and trend features.
    pub fn deprecated_preset_params() -> Self {
        Self::new(
            constants::DEPRECATED_PARAM_TOKENS.iter().copied(),
            constants::REMOVED_FEATURE_PHRASES.iter().copied(),
        )
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Returns true if no rules are present (every line is retained).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.phrases.is_empty()
    }

    /// True if `line` contains any token or phrase as a literal substring.
    pub fn should_exclude(&self, line: &str) -> bool {
        self.first_match(line).is_some()
    }

    /// First rule found in `line`, tokens checked before phrases.
    pub fn first_match(&self, line: &str) -> Option<RuleMatch<'_>> {
        if let Some(rule) = self.tokens.iter().find(|t| line.contains(t.as_str())) {
            return Some(RuleMatch {
                kind: RuleKind::Token,
                rule: rule.as_str(),
            });
        }
        self.phrases
            .iter()
            .find(|p| line.contains(p.as_str()))
            .map(|rule| RuleMatch {
                kind: RuleKind::Phrase,
                rule: rule.as_str(),
            })
    }
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self::deprecated_preset_params()
    }
}
