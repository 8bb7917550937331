pub mod check;
pub mod play;
pub mod scenes;

use std::path::Path;

use gm_core::World;

/// Load a world file, or the bundled adventure when no path is given.
fn load_world(path: Option<&Path>) -> Result<World, String> {
    let world = match path {
        Some(path) => {
            World::from_file(path).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => World::hawkins(),
    };
    tracing::info!(title = %world.meta.title, scenes = world.len(), "world loaded");
    Ok(world)
}
