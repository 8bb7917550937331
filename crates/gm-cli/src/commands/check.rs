use std::path::Path;

use colored::Colorize;

/// Load a world and warn about choices that lead to unauthored scenes.
pub fn run(path: &Path) -> Result<(), String> {
    let world = super::load_world(Some(path))?;

    let mut dangling = 0;
    for id in world.scene_ids() {
        let Some(scene) = world.get_scene(id) else {
            continue;
        };
        if scene.is_terminal() {
            eprintln!("  {} scene '{id}' has no choices", "warning:".yellow());
        }
        for choice in &scene.choices {
            let target = choice.target_from(id);
            if world.get_scene(target).is_none() {
                dangling += 1;
                eprintln!(
                    "  {} {id}.{} leads to missing scene '{target}'",
                    "warning:".yellow(),
                    choice.id
                );
            }
        }
    }

    println!(
        "  {} '{}': {} scene{}, entry '{}', {} dangling choice{}",
        "OK".green().bold(),
        world.meta.title,
        world.len(),
        if world.len() == 1 { "" } else { "s" },
        world.entry(),
        dangling,
        if dangling == 1 { "" } else { "s" },
    );
    Ok(())
}
