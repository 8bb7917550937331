use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GmError, GmResult};
use crate::scene::Scene;

/// The bundled "Shadows in Hawkins" adventure.
const HAWKINS_JSON: &str = include_str!("../worlds/hawkins.json");

/// Metadata about the world itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldMeta {
    /// Title of the adventure.
    pub title: String,
    /// Identifier of the scene every session starts in.
    pub entry: String,
}

impl WorldMeta {
    /// Create metadata for a world starting at `entry`.
    pub fn new(title: impl Into<String>, entry: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entry: entry.into(),
        }
    }
}

/// On-disk authoring format: metadata plus an ordered scene list.
#[derive(Debug, Deserialize)]
struct WorldFile {
    #[serde(flatten)]
    meta: WorldMeta,
    scenes: Vec<Scene>,
}

/// The world graph. Read-only once loaded; lookups never fail loudly.
#[derive(Debug, Clone)]
pub struct World {
    /// Title and entry point.
    pub meta: WorldMeta,
    scenes: HashMap<String, Scene>,
    // Declaration order, for stable listings.
    order: Vec<String>,
}

impl World {
    /// Create an empty world.
    pub fn new(meta: WorldMeta) -> Self {
        Self {
            meta,
            scenes: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Add a scene. Scene ids must be unique, and so must choice ids within
    /// the scene. Targets are not checked: dangling edges are legal.
    pub fn add_scene(&mut self, scene: Scene) -> GmResult<()> {
        if self.scenes.contains_key(&scene.id) {
            return Err(GmError::DuplicateScene(scene.id));
        }
        for (i, choice) in scene.choices.iter().enumerate() {
            if scene.choices[..i].iter().any(|c| c.id == choice.id) {
                return Err(GmError::DuplicateChoice {
                    scene: scene.id.clone(),
                    choice: choice.id.clone(),
                });
            }
        }

        self.order.push(scene.id.clone());
        self.scenes.insert(scene.id.clone(), scene);
        Ok(())
    }

    /// Builder-style [`World::add_scene`].
    pub fn with_scene(mut self, scene: Scene) -> GmResult<Self> {
        self.add_scene(scene)?;
        Ok(self)
    }

    /// Look up a scene. Absent ids return `None`.
    pub fn get_scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// Identifier of the entry scene.
    pub fn entry(&self) -> &str {
        &self.meta.entry
    }

    /// The entry scene, if the world contains it.
    pub fn entry_scene(&self) -> Option<&Scene> {
        self.get_scene(&self.meta.entry)
    }

    /// Scene identifiers in declaration order.
    pub fn scene_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the world has no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Parse a world from its JSON authoring format.
    pub fn from_json(json: &str) -> GmResult<Self> {
        let file: WorldFile = serde_json::from_str(json)?;
        let mut world = World::new(file.meta);
        for scene in file.scenes {
            world.add_scene(scene)?;
        }

        if world.entry_scene().is_none() {
            return Err(GmError::MissingEntry(world.meta.entry));
        }
        Ok(world)
    }

    /// Read and parse a world file.
    pub fn from_file(path: &Path) -> GmResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The bundled adventure.
    ///
    /// # Panics
    ///
    /// Only if the embedded `worlds/hawkins.json` asset is corrupt.
    pub fn hawkins() -> Self {
        Self::from_json(HAWKINS_JSON).expect("bundled world is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{Effect, EffectKind};
    use crate::scene::Choice;

    fn small_world() -> World {
        World::new(WorldMeta::new("Test", "start"))
            .with_scene(
                Scene::new("start", "Start", "A crossroads.")
                    .with_choice(Choice::new("north", "Go north.").leads_to("hill"))
                    .with_choice(Choice::new("loop", "Walk in circles.").leads_to("start")),
            )
            .unwrap()
            .with_scene(Scene::new("hill", "Hill", "Wind."))
            .unwrap()
    }

    #[test]
    fn lookup_scenes() {
        let world = small_world();
        assert_eq!(world.len(), 2);
        assert_eq!(world.entry(), "start");
        assert_eq!(world.entry_scene().unwrap().title, "Start");
        assert!(world.get_scene("hill").unwrap().is_terminal());
        assert!(world.get_scene("nowhere").is_none());
        assert_eq!(world.scene_ids().collect::<Vec<_>>(), vec!["start", "hill"]);
    }

    #[test]
    fn duplicate_scene_rejected() {
        let result = small_world().with_scene(Scene::new("hill", "Hill again", ""));
        assert!(matches!(result, Err(GmError::DuplicateScene(id)) if id == "hill"));
    }

    #[test]
    fn duplicate_choice_rejected() {
        let scene = Scene::new("x", "X", "")
            .with_choice(Choice::new("a", "A"))
            .with_choice(Choice::new("a", "A again"));
        let result = World::new(WorldMeta::new("T", "x")).with_scene(scene);
        assert!(matches!(
            result,
            Err(GmError::DuplicateChoice { ref scene, ref choice }) if scene == "x" && choice == "a"
        ));
    }

    #[test]
    fn json_round_trip_preserves_choice_order() {
        let json = r#"{
            "title": "Tiny",
            "entry": "a",
            "scenes": [
                {"id": "a", "title": "A", "description": "First.", "choices": [
                    {"id": "z_last", "description": "Zed.", "result_scene": "b"},
                    {"id": "a_first", "description": "Ay.", "effects": [
                        {"kind": "add_journal", "payload": "noted"},
                        {"kind": "teleport", "payload": "moon"}
                    ]}
                ]},
                {"id": "b", "title": "B", "description": "Second."}
            ]
        }"#;
        let world = World::from_json(json).unwrap();
        let a = world.get_scene("a").unwrap();
        assert_eq!(a.choices[0].id, "z_last");
        assert_eq!(a.choices[1].id, "a_first");
        assert_eq!(a.choices[1].effects[0], Effect::journal("noted"));
        assert_eq!(
            a.choices[1].effects[1].kind,
            EffectKind::Custom("teleport".to_string())
        );
        assert!(world.get_scene("b").unwrap().choices.is_empty());
    }

    #[test]
    fn missing_entry_rejected() {
        let json = r#"{"title": "T", "entry": "gone", "scenes": []}"#;
        assert!(matches!(
            World::from_json(json),
            Err(GmError::MissingEntry(id)) if id == "gone"
        ));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(World::from_json("{"), Err(GmError::Json(_))));
    }

    #[test]
    fn from_file_reads_world() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("world.json");
        std::fs::write(
            &path,
            r#"{"title": "File", "entry": "s", "scenes": [{"id": "s", "title": "S", "description": "."}]}"#,
        )
        .unwrap();
        let world = World::from_file(&path).unwrap();
        assert_eq!(world.meta.title, "File");

        let missing = World::from_file(&dir.path().join("nope.json"));
        assert!(matches!(missing, Err(GmError::Io(_))));
    }

    #[test]
    fn bundled_world_loads() {
        let world = World::hawkins();
        assert_eq!(world.meta.title, "Shadows in Hawkins");
        assert_eq!(world.entry(), "intro");

        let intro = world.entry_scene().unwrap();
        let ids: Vec<_> = intro.choices.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["check_gate", "lab_fence", "follow_slime"]);

        let peek = world.get_scene("upside_down_peek").unwrap();
        assert_eq!(
            peek.choice("throw_stick").unwrap().effects,
            vec![Effect::journal("Something inside reacted—fast.")]
        );

        let pipe = world.get_scene("pipe").unwrap();
        let bike = pipe.choice("check_bike").unwrap();
        assert_eq!(bike.result_scene.as_deref(), Some("bike_clue"));
        assert_eq!(bike.effects, vec![Effect::inventory("will_drawing")]);

        // Dangling targets are part of the content and must load.
        assert!(world.get_scene("bike_clue").is_none());
    }
}
