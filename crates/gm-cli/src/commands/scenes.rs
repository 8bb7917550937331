use std::path::Path;

use colored::Colorize;

/// Print one line per scene: id, title, and outgoing choice count.
pub fn run(path: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(path)?;

    println!("{} ({} scenes)", world.meta.title.bold(), world.len());
    for id in world.scene_ids() {
        let Some(scene) = world.get_scene(id) else {
            continue;
        };
        let marker = if id == world.entry() { "*" } else { " " };
        println!(
            "{marker} {:<20} {:<32} {} choice{}",
            id.cyan(),
            scene.title,
            scene.choices.len(),
            if scene.choices.len() == 1 { "" } else { "s" },
        );
    }
    Ok(())
}
