use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of an effect. Extensible via `Custom(String)` so content written
/// for newer engines still loads; unknown kinds are applied as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EffectKind {
    /// Append the payload to the session journal.
    AddJournal,
    /// Append the payload to the session inventory.
    AddInventory,
    /// A kind this engine does not understand.
    Custom(String),
}

impl EffectKind {
    /// The authoring name of this kind (`add_journal`, `add_inventory`, ...).
    pub fn as_str(&self) -> &str {
        match self {
            Self::AddJournal => "add_journal",
            Self::AddInventory => "add_inventory",
            Self::Custom(name) => name,
        }
    }

    /// Whether the engine knows how to apply this kind.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl From<String> for EffectKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "add_journal" => Self::AddJournal,
            "add_inventory" => Self::AddInventory,
            _ => Self::Custom(s),
        }
    }
}

impl From<&str> for EffectKind {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<EffectKind> for String {
    fn from(kind: EffectKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An additive state mutation attached to a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    /// What to do with the payload.
    pub kind: EffectKind,
    /// The text or item identifier to append.
    pub payload: String,
}

impl Effect {
    /// Create an effect of any kind.
    pub fn new(kind: impl Into<EffectKind>, payload: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: payload.into(),
        }
    }

    /// Shorthand for an `add_journal` effect.
    pub fn journal(text: impl Into<String>) -> Self {
        Self::new(EffectKind::AddJournal, text)
    }

    /// Shorthand for an `add_inventory` effect.
    pub fn inventory(item: impl Into<String>) -> Self {
        Self::new(EffectKind::AddInventory, item)
    }
}
