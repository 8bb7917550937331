//! Applying choice effects to session state.

use gm_core::{Effect, EffectKind};
use tracing::debug;

use crate::state::SessionState;

/// Apply `effects` in order. Returns how many were applied; unknown kinds
/// are skipped.
pub fn apply_effects(effects: &[Effect], state: &mut SessionState) -> usize {
    let mut applied = 0;
    for effect in effects {
        match &effect.kind {
            EffectKind::AddJournal => state.journal.push(effect.payload.clone()),
            EffectKind::AddInventory => state.inventory.push(effect.payload.clone()),
            EffectKind::Custom(kind) => {
                debug!(kind = %kind, "ignoring unknown effect kind");
                continue;
            }
        }
        applied += 1;
    }
    applied
}
