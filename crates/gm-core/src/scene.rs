use serde::{Deserialize, Serialize};

use crate::effect::Effect;

/// A node in the world graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique key of this scene (e.g. `intro`).
    pub id: String,
    /// Short human-readable title.
    pub title: String,
    /// Descriptive text read to the player.
    pub description: String,
    /// Outgoing edges in declaration order.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Create a scene with no choices.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            choices: Vec::new(),
        }
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Look up a choice by identifier.
    pub fn choice(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }

    /// A scene with zero choices offers no transitions.
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty()
    }
}

/// A labeled, directed edge from one scene to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Identifier, unique within the owning scene. Players can say it verbatim.
    pub id: String,
    /// Text shown in the choice list and matched against player input.
    pub description: String,
    /// Scene this choice leads to. `None` means stay in the current scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_scene: Option<String>,
    /// Effects applied when the choice is taken, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
}

impl Choice {
    /// Create a choice with no target and no effects.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            result_scene: None,
            effects: Vec::new(),
        }
    }

    /// Set the target scene.
    pub fn leads_to(mut self, scene: impl Into<String>) -> Self {
        self.result_scene = Some(scene.into());
        self
    }

    /// Add an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// The scene reached by taking this choice from `current`.
    pub fn target_from<'a>(&'a self, current: &'a str) -> &'a str {
        self.result_scene.as_deref().unwrap_or(current)
    }
}
