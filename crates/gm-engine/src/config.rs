//! Configuration for a game session.

/// Line the narrator speaks before confirming a choice.
pub const DEFAULT_PREAMBLE: &str =
    "The Game Master (a calm, slightly mysterious narrator) replies:";

/// Line shown above the entry scene after a restart.
pub const DEFAULT_RESET_MESSAGE: &str =
    "The world resets. A new tide laps at the shore. You stand once more at the beginning.";

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How many recent history records the journal view shows.
    pub history_limit: usize,
    /// Optional narrator line placed before each transition.
    pub narrator_preamble: Option<String>,
    /// Name used in the greeting when the player gives none.
    pub default_player_name: String,
    /// Framing line for restarts.
    pub reset_message: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: 6,
            narrator_preamble: Some(DEFAULT_PREAMBLE.to_string()),
            default_player_name: "traveler".to_string(),
            reset_message: DEFAULT_RESET_MESSAGE.to_string(),
        }
    }
}

impl EngineConfig {
    /// Set the journal history window.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set the narrator preamble.
    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.narrator_preamble = Some(preamble.into());
        self
    }

    /// Drop the narrator preamble.
    pub fn without_preamble(mut self) -> Self {
        self.narrator_preamble = None;
        self
    }

    /// Set the fallback player name.
    pub fn with_default_player_name(mut self, name: impl Into<String>) -> Self {
        self.default_player_name = name.into();
        self
    }

    /// Set the restart framing line.
    pub fn with_reset_message(mut self, message: impl Into<String>) -> Self {
        self.reset_message = message.into();
        self
    }
}
