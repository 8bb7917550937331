//! Per-session mutable state.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One taken transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Scene the player was in.
    pub from: String,
    /// Choice identifier that was taken.
    pub action: String,
    /// Scene the player moved to.
    pub to: String,
    /// When the choice was taken.
    pub timestamp: DateTime<Utc>,
}

/// Everything one conversation remembers.
///
/// Collections only grow between resets. `history` and `choices_made` are
/// always the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Name given at start, if any.
    pub player_name: Option<String>,
    /// Scene the player is in. May name a scene the world lacks.
    pub current_scene: String,
    /// Taken transitions, oldest first.
    pub history: Vec<HistoryRecord>,
    /// Narrative facts collected so far.
    pub journal: Vec<String>,
    /// Item identifiers collected so far. Duplicates allowed.
    pub inventory: Vec<String>,
    /// Named characters met (name -> descriptor). Reserved.
    pub named_npcs: BTreeMap<String, String>,
    /// Choice identifiers, mirroring `history[..].action`.
    pub choices_made: Vec<String>,
    /// Short opaque identifier, new on every start or restart.
    pub session_id: String,
    /// When the session was (re)started.
    pub started_at: DateTime<Utc>,
}

impl SessionState {
    /// A fully reset state positioned at `entry`.
    pub fn fresh(
        entry: impl Into<String>,
        session_id: impl Into<String>,
        started_at: DateTime<Utc>,
        player_name: Option<String>,
    ) -> Self {
        Self {
            player_name,
            current_scene: entry.into(),
            history: Vec::new(),
            journal: Vec::new(),
            inventory: Vec::new(),
            named_npcs: BTreeMap::new(),
            choices_made: Vec::new(),
            session_id: session_id.into(),
            started_at,
        }
    }

    /// Append a transition record and its choice id together.
    pub fn record_transition(
        &mut self,
        from: impl Into<String>,
        action: impl Into<String>,
        to: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) {
        let action = action.into();
        self.choices_made.push(action.clone());
        self.history.push(HistoryRecord {
            from: from.into(),
            action,
            to: to.into(),
            timestamp,
        });
    }

    /// The last `n` history records, oldest first.
    pub fn recent_history(&self, n: usize) -> &[HistoryRecord] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }

    /// Number of turns taken since the last reset.
    pub fn turns(&self) -> usize {
        self.history.len()
    }
}

/// ISO-8601 UTC with a `Z` suffix and microsecond precision.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1983, 11, 6, 20, minute, 0).unwrap()
    }

    #[test]
    fn fresh_state_is_empty() {
        let state = SessionState::fresh("intro", "abcd1234", at(0), Some("Mike".into()));
        assert_eq!(state.current_scene, "intro");
        assert_eq!(state.player_name.as_deref(), Some("Mike"));
        assert!(state.history.is_empty());
        assert!(state.journal.is_empty());
        assert!(state.inventory.is_empty());
        assert!(state.named_npcs.is_empty());
        assert!(state.choices_made.is_empty());
        assert_eq!(state.turns(), 0);
    }

    #[test]
    fn record_keeps_parity() {
        let mut state = SessionState::fresh("intro", "x", at(0), None);
        state.record_transition("intro", "check_gate", "upside_down_peek", at(1));
        state.record_transition("upside_down_peek", "throw_stick", "demogorgon_spot", at(2));

        assert_eq!(state.history.len(), state.choices_made.len());
        assert_eq!(state.choices_made, vec!["check_gate", "throw_stick"]);
        assert_eq!(state.history[1].from, "upside_down_peek");
        assert_eq!(state.history[1].to, "demogorgon_spot");
        assert_eq!(state.history[1].timestamp, at(2));
    }

    #[test]
    fn recent_history_window() {
        let mut state = SessionState::fresh("a", "x", at(0), None);
        for i in 0..8 {
            state.record_transition("a", format!("c{i}"), "a", at(i));
        }
        let recent = state.recent_history(6);
        assert_eq!(recent.len(), 6);
        assert_eq!(recent[0].action, "c2");
        assert_eq!(recent[5].action, "c7");
        assert_eq!(state.recent_history(20).len(), 8);
        assert!(state.recent_history(0).is_empty());
    }

    #[test]
    fn timestamp_format() {
        assert_eq!(format_timestamp(&at(5)), "1983-11-06T20:05:00.000000Z");
    }
}
