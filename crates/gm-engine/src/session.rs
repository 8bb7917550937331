//! The turn controller.
//!
//! `GameSession` owns one conversation's [`SessionState`] and runs every
//! operation the conversation layer can call. No operation fails: unknown
//! scenes render as the void, unmatched input renders a clarification, and
//! every reply ends with the prompt.

use std::sync::Arc;

use gm_core::World;
use tracing::{debug, info};

use crate::clock::{Clock, IdGenerator, SystemClock, UuidIds};
use crate::config::EngineConfig;
use crate::effects::apply_effects;
use crate::narration;
use crate::resolver::select_choice;
use crate::state::SessionState;

/// One conversation's game.
pub struct GameSession {
    world: Arc<World>,
    state: SessionState,
    config: EngineConfig,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl GameSession {
    /// Create a session with the wall clock and random ids.
    pub fn new(world: Arc<World>, config: EngineConfig) -> Self {
        Self::with_sources(world, config, Box::new(SystemClock), Box::new(UuidIds))
    }

    /// Create a session with explicit time and id sources.
    ///
    /// The session starts at the entry scene so it can be inspected before
    /// [`GameSession::start`] is called.
    pub fn with_sources(
        world: Arc<World>,
        config: EngineConfig,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        let state = SessionState::fresh(world.entry(), ids.next_id(), clock.now(), None);
        Self {
            world,
            state,
            config,
            clock,
            ids,
        }
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Identifier of the scene the player is in.
    pub fn current_scene(&self) -> &str {
        &self.state.current_scene
    }

    /// Start a fresh adventure, wiping all prior state.
    pub fn start(&mut self, player_name: Option<&str>) -> String {
        let player_name = player_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        self.reset(player_name);
        info!(session = %self.state.session_id, "adventure started");

        let name = self
            .state
            .player_name
            .as_deref()
            .unwrap_or(&self.config.default_player_name);
        narration::render_opening(&self.world, name)
    }

    /// Describe the current scene without changing anything.
    pub fn scene_view(&self) -> String {
        narration::render_scene(&self.world, &self.state.current_scene)
    }

    /// Resolve a player utterance and, if it matches a choice, take it.
    pub fn submit_action(&mut self, text: &str) -> String {
        let current = self.state.current_scene.clone();
        let choices = self
            .world
            .get_scene(&current)
            .map(|s| s.choices.as_slice())
            .unwrap_or_default();

        let Some((choice, pass)) = select_choice(text, choices) else {
            debug!(scene = %current, input = %text, "unresolved action");
            return narration::render_clarification(&self.world, &current);
        };
        let choice_id = choice.id.clone();
        debug!(scene = %current, choice = %choice_id, %pass, "resolved action");

        let target = choice.target_from(&current).to_string();

        apply_effects(&choice.effects, &mut self.state);
        self.state
            .record_transition(&current, &choice_id, &target, self.clock.now());
        self.state.current_scene = target;

        narration::render_transition(
            &self.world,
            self.config.narrator_preamble.as_deref(),
            &choice_id,
            &self.state.current_scene,
        )
    }

    /// Summarize the session so far.
    pub fn journal_view(&self) -> String {
        narration::render_journal(&self.state, self.config.history_limit)
    }

    /// Start over, forgetting everything including the player's name.
    pub fn restart(&mut self) -> String {
        self.reset(None);
        info!(session = %self.state.session_id, "adventure restarted");
        narration::render_reset(&self.world, &self.config.reset_message)
    }

    fn reset(&mut self, player_name: Option<String>) {
        self.state = SessionState::fresh(
            self.world.entry(),
            self.ids.next_id(),
            self.clock.now(),
            player_name,
        );
    }
}
