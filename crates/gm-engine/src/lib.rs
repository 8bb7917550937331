//! Narrative session engine for Gamemaster.
//!
//! Walks a [`gm_core::World`] one turn at a time: free-text player input is
//! resolved against the current scene's choices with a deterministic
//! three-pass cascade, the chosen edge's effects are applied to the
//! per-session [`SessionState`], and every reply is rendered as text that
//! ends with the [`PROMPT`].
//!
//! Each conversation owns exactly one [`GameSession`]; the world is shared
//! read-only, so independent sessions never observe each other.

/// Time and session-id sources.
pub mod clock;
/// Engine configuration.
pub mod config;
/// Effect application.
pub mod effects;
/// Text rendering for every caller-facing reply.
pub mod narration;
/// Free-text intent resolution.
pub mod resolver;
/// The turn controller.
pub mod session;
/// Per-session mutable state.
pub mod state;
/// Named operations exposed to the conversation layer.
pub mod tool;

pub use clock::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidIds};
pub use config::EngineConfig;
pub use narration::PROMPT;
pub use resolver::{MatchPass, Resolution, resolve_intent, select_choice};
pub use session::GameSession;
pub use state::{HistoryRecord, SessionState};
pub use tool::Tool;
