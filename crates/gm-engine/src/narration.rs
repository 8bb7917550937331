//! Rendering of every caller-facing reply.
//!
//! Each public renderer returns text ending with [`PROMPT`] and nothing after
//! it. The conversation layer treats that suffix as "turn complete".

use gm_core::World;
use tracing::warn;

use crate::state::{SessionState, format_timestamp};

/// The mandatory closing line of every reply.
pub const PROMPT: &str = "What do you do?";

/// Body used for scene ids the world does not contain.
pub const VOID_TEXT: &str = "You are in a featureless void.";

/// Apology shown when player input matched no choice.
pub const CLARIFICATION: &str = "I didn't quite catch that action for this situation. \
Try one of the listed choices or use a simple phrase like 'inspect the box' or 'go to the tower'.";

/// Append the prompt on its own line unless `text` already ends with it.
pub fn ensure_prompt(mut text: String) -> String {
    if !text.ends_with(PROMPT) {
        text.push('\n');
        text.push_str(PROMPT);
    }
    text
}

/// Describe a scene and list its choices.
pub fn render_scene(world: &World, scene_id: &str) -> String {
    let Some(scene) = world.get_scene(scene_id) else {
        warn!(scene = %scene_id, "rendering unknown scene as void");
        return format!("{VOID_TEXT} {PROMPT}");
    };

    let mut out = format!("{}\n\nChoices:\n", scene.description);
    for choice in &scene.choices {
        out.push_str(&format!("- {} (say: {})\n", choice.description, choice.id));
    }
    out.push('\n');
    out.push_str(PROMPT);
    out
}

/// Greeting plus the entry scene.
pub fn render_opening(world: &World, player_name: &str) -> String {
    let title = world
        .entry_scene()
        .map(|s| s.title.as_str())
        .unwrap_or(world.meta.title.as_str());
    ensure_prompt(format!(
        "Greetings {player_name}. Welcome to '{title}'.\n\n{}",
        render_scene(world, world.entry())
    ))
}

/// Reset message plus the entry scene.
pub fn render_reset(world: &World, message: &str) -> String {
    ensure_prompt(format!("{message}\n\n{}", render_scene(world, world.entry())))
}

/// Confirmation of a taken choice plus the scene it led to.
pub fn render_transition(
    world: &World,
    preamble: Option<&str>,
    choice_id: &str,
    to: &str,
) -> String {
    let mut out = String::new();
    if let Some(preamble) = preamble {
        out.push_str(preamble);
        out.push_str("\n\n");
    }
    out.push_str(&format!("You chose '{choice_id}'.\n\n"));
    out.push_str(&render_scene(world, to));
    ensure_prompt(out)
}

/// Apology plus the unchanged current scene.
pub fn render_clarification(world: &World, current: &str) -> String {
    ensure_prompt(format!("{CLARIFICATION}\n\n{}", render_scene(world, current)))
}

/// Session summary: identity, journal, inventory, recent transitions.
pub fn render_journal(state: &SessionState, history_limit: usize) -> String {
    let mut lines = vec![format!(
        "Session: {} | Started at: {}",
        state.session_id,
        format_timestamp(&state.started_at)
    )];
    if let Some(name) = &state.player_name {
        lines.push(format!("Player: {name}"));
    }

    if state.journal.is_empty() {
        lines.push("\nJournal is empty.".to_string());
    } else {
        lines.push("\nJournal entries:".to_string());
        lines.extend(state.journal.iter().map(|j| format!("- {j}")));
    }

    if state.inventory.is_empty() {
        lines.push("\nNo items in inventory.".to_string());
    } else {
        lines.push("\nInventory:".to_string());
        lines.extend(state.inventory.iter().map(|item| format!("- {item}")));
    }

    lines.push("\nRecent choices:".to_string());
    for record in state.recent_history(history_limit) {
        lines.push(format!(
            "- {} | from {} -> {} via {}",
            format_timestamp(&record.timestamp),
            record.from,
            record.to,
            record.action
        ));
    }

    lines.push(format!("\n{PROMPT}"));
    ensure_prompt(lines.join("\n"))
}
