//! Named operations exposed to the conversation layer.
//!
//! The surrounding agent calls the engine through five text-returning tools.
//! [`Tool`] names them and [`GameSession::dispatch`] runs them.

use crate::session::GameSession;

/// One call from the conversation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tool {
    /// Begin a fresh adventure.
    StartAdventure {
        /// Optional player name for the greeting.
        player_name: Option<String>,
    },
    /// Repeat the current scene.
    GetScene,
    /// Attempt an action described in free text.
    PlayerAction {
        /// What the player said.
        action: String,
    },
    /// Summarize journal, inventory, and recent choices.
    ShowJournal,
    /// Wipe the session and begin again.
    RestartAdventure,
}

impl Tool {
    /// Every tool name, in the order the conversation layer lists them.
    pub const NAMES: [&'static str; 5] = [
        "start_adventure",
        "get_scene",
        "player_action",
        "show_journal",
        "restart_adventure",
    ];

    /// The external name of this tool.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StartAdventure { .. } => "start_adventure",
            Self::GetScene => "get_scene",
            Self::PlayerAction { .. } => "player_action",
            Self::ShowJournal => "show_journal",
            Self::RestartAdventure => "restart_adventure",
        }
    }

    /// Build a tool call from its name and optional argument.
    ///
    /// Returns `None` for unknown names. A missing action argument becomes an
    /// empty utterance, which the engine answers with a clarification.
    pub fn parse(name: &str, arg: Option<&str>) -> Option<Self> {
        let arg = arg.map(str::trim).filter(|a| !a.is_empty());
        match name.trim() {
            "start_adventure" => Some(Self::StartAdventure {
                player_name: arg.map(str::to_string),
            }),
            "get_scene" => Some(Self::GetScene),
            "player_action" => Some(Self::PlayerAction {
                action: arg.unwrap_or_default().to_string(),
            }),
            "show_journal" => Some(Self::ShowJournal),
            "restart_adventure" => Some(Self::RestartAdventure),
            _ => None,
        }
    }

    /// Whether running this tool may change session state.
    pub fn mutates(&self) -> bool {
        !matches!(self, Self::GetScene | Self::ShowJournal)
    }
}

impl GameSession {
    /// Run one tool call and return its reply.
    pub fn dispatch(&mut self, tool: Tool) -> String {
        match tool {
            Tool::StartAdventure { player_name } => self.start(player_name.as_deref()),
            Tool::GetScene => self.scene_view(),
            Tool::PlayerAction { action } => self.submit_action(&action),
            Tool::ShowJournal => self.journal_view(),
            Tool::RestartAdventure => self.restart(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::EngineConfig;
    use crate::narration::PROMPT;
    use gm_core::World;

    #[test]
    fn names_round_trip() {
        for name in Tool::NAMES {
            let tool = Tool::parse(name, Some("x")).unwrap();
            assert_eq!(tool.name(), name);
        }
        assert!(Tool::parse("cast_spell", None).is_none());
    }

    #[test]
    fn parse_arguments() {
        assert_eq!(
            Tool::parse("start_adventure", Some("  Max ")),
            Some(Tool::StartAdventure {
                player_name: Some("Max".to_string())
            })
        );
        assert_eq!(
            Tool::parse("start_adventure", Some("")),
            Some(Tool::StartAdventure { player_name: None })
        );
        assert_eq!(
            Tool::parse("player_action", None),
            Some(Tool::PlayerAction {
                action: String::new()
            })
        );
    }

    #[test]
    fn mutating_tools() {
        assert!(!Tool::GetScene.mutates());
        assert!(!Tool::ShowJournal.mutates());
        assert!(Tool::RestartAdventure.mutates());
        assert!(
            Tool::PlayerAction {
                action: "x".into()
            }
            .mutates()
        );
    }

    #[test]
    fn dispatch_every_tool() {
        let mut session = GameSession::new(Arc::new(World::hawkins()), EngineConfig::default());
        let calls = vec![
            Tool::StartAdventure {
                player_name: Some("Will".into()),
            },
            Tool::GetScene,
            Tool::PlayerAction {
                action: "follow the slime".into(),
            },
            Tool::ShowJournal,
            Tool::RestartAdventure,
        ];
        for call in calls {
            let reply = session.dispatch(call);
            assert!(reply.ends_with(PROMPT), "{reply}");
        }
        assert_eq!(session.current_scene(), "intro");
    }
}
