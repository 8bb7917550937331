//! Free-text intent resolution.
//!
//! Player input is matched against the current scene's choices by a
//! three-pass cascade. Passes run in order and the first choice (in
//! declaration order) that satisfies a pass wins. Later passes are more
//! permissive; false positives are accepted in exchange for forward progress.

use std::fmt;

use gm_core::Choice;

/// How many leading description words the second pass considers.
const LEADING_WORDS: usize = 4;

/// Which pass of the cascade produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchPass {
    /// The input is exactly a choice id.
    ExactKey,
    /// The input contains the choice id or one of the first description words.
    LeadingWords,
    /// The input contains any description word.
    KeywordScan,
}

impl fmt::Display for MatchPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactKey => write!(f, "exact key"),
            Self::LeadingWords => write!(f, "leading words"),
            Self::KeywordScan => write!(f, "keyword scan"),
        }
    }
}

/// Outcome of resolving one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A choice was selected.
    Resolved {
        /// Identifier of the selected choice.
        choice_id: String,
        /// The pass that selected it.
        pass: MatchPass,
    },
    /// No pass matched.
    Unresolved,
}

impl Resolution {
    /// The selected choice id, if any.
    pub fn choice_id(&self) -> Option<&str> {
        match self {
            Self::Resolved { choice_id, .. } => Some(choice_id),
            Self::Unresolved => None,
        }
    }

    /// Whether a choice was selected.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

/// Resolve `input` against `choices`.
///
/// Pure and deterministic: the same input and choice list always give the
/// same result.
pub fn resolve_intent(input: &str, choices: &[Choice]) -> Resolution {
    match select_choice(input, choices) {
        Some((choice, pass)) => Resolution::Resolved {
            choice_id: choice.id.clone(),
            pass,
        },
        None => Resolution::Unresolved,
    }
}

/// Like [`resolve_intent`], but borrows the matched choice itself.
pub fn select_choice<'a>(
    input: &str,
    choices: &'a [Choice],
) -> Option<(&'a Choice, MatchPass)> {
    let normalized = input.trim().to_lowercase();

    let passes: [(MatchPass, fn(&str, &Choice) -> bool); 3] = [
        (MatchPass::ExactKey, exact_key),
        (MatchPass::LeadingWords, leading_words),
        (MatchPass::KeywordScan, keyword_scan),
    ];

    passes.into_iter().find_map(|(pass, matches)| {
        choices
            .iter()
            .find(|c| matches(&normalized, c))
            .map(|choice| (choice, pass))
    })
}

fn exact_key(input: &str, choice: &Choice) -> bool {
    input == choice.id
}

fn leading_words(input: &str, choice: &Choice) -> bool {
    if input.contains(choice.id.as_str()) {
        return true;
    }
    let desc = choice.description.to_lowercase();
    desc.split_whitespace()
        .take(LEADING_WORDS)
        .any(|word| input.contains(word))
}

fn keyword_scan(input: &str, choice: &Choice) -> bool {
    let desc = choice.description.to_lowercase();
    desc.split_whitespace().any(|word| input.contains(word))
}
