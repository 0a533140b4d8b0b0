//! The six canonical scene slots and the registry that holds them.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use storygrid_error::{StoryGridError, StudioError, StudioErrorKind};

/// One of the six fixed storyboard slots.
///
/// # Examples
///
/// ```
/// use storygrid_core::SceneId;
///
/// let id: SceneId = "c03".parse().unwrap();
/// assert_eq!(id, SceneId::C03);
/// assert_eq!(id.to_string(), "C03");
/// assert!("C07".parse::<SceneId>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum SceneId {
    /// Opening frame
    C01,
    /// Second frame
    C02,
    /// Third frame
    C03,
    /// Fourth frame
    C04,
    /// Fifth frame
    C05,
    /// Closing frame, usually the branding shot
    C06,
}

impl SceneId {
    /// All slots in canonical order.
    pub const ALL: [SceneId; 6] = [
        SceneId::C01,
        SceneId::C02,
        SceneId::C03,
        SceneId::C04,
        SceneId::C05,
        SceneId::C06,
    ];

    /// Zero-based position in canonical order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The slot for a frame digit `1..=6`.
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(SceneId::C01),
            '2' => Some(SceneId::C02),
            '3' => Some(SceneId::C03),
            '4' => Some(SceneId::C04),
            '5' => Some(SceneId::C05),
            '6' => Some(SceneId::C06),
            _ => None,
        }
    }
}

impl FromStr for SceneId {
    type Err = StoryGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let slot = match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some('c' | 'C'), Some('0'), Some(digit), None) => Self::from_digit(digit),
            _ => None,
        };
        slot.ok_or_else(|| StudioError::new(StudioErrorKind::UnknownScene(trimmed.to_string())).into())
    }
}

/// A single storyboard frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Scene {
    /// Fixed slot identifier
    id: SceneId,
    /// Display label, always the slot name
    label: String,
    /// Free-text frame content
    description: String,
    /// Reserved for per-frame images; the composite flow never sets it
    image_url: Option<String>,
    /// A scene-level request is in flight
    loading: bool,
    /// Last scene-level failure
    error: Option<String>,
}

impl Scene {
    /// An empty scene for the given slot.
    pub fn empty(id: SceneId) -> Self {
        Self {
            id,
            label: id.to_string(),
            description: String::new(),
            image_url: None,
            loading: false,
            error: None,
        }
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Attach or clear the per-frame image reference.
    pub fn set_image_url(&mut self, image_url: Option<String>) {
        self.image_url = image_url;
    }

    /// Set the busy indicator.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Record or clear a failure message.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}

/// Exactly six scenes, C01 through C06, in canonical order.
///
/// The registry has two update channels. [`SceneRegistry::replace_all`] takes
/// the output of a script parse and overwrites every description.
/// [`SceneRegistry::edit_description`] changes one description in place. A
/// later script parse always wins over earlier direct edits.
///
/// # Examples
///
/// ```
/// use storygrid_core::{SceneId, SceneRegistry};
///
/// let mut registry = SceneRegistry::new();
/// registry.edit_description(SceneId::C02, "Wide shot of the kitchen");
///
/// assert_eq!(registry.get(SceneId::C02).description(), "Wide shot of the kitchen");
/// assert_eq!(registry.iter().count(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneRegistry {
    scenes: [Scene; 6],
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRegistry {
    /// Six empty scenes.
    pub fn new() -> Self {
        Self {
            scenes: SceneId::ALL.map(Scene::empty),
        }
    }

    /// The scene for a slot.
    pub fn get(&self, id: SceneId) -> &Scene {
        &self.scenes[id.index()]
    }

    /// Mutable access to the scene for a slot.
    ///
    /// The slot id and label cannot be changed through the returned reference.
    pub fn scene_mut(&mut self, id: SceneId) -> &mut Scene {
        &mut self.scenes[id.index()]
    }

    /// Scenes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }

    /// Structured edit channel: replace one description.
    pub fn edit_description(&mut self, id: SceneId, description: impl Into<String>) {
        self.scene_mut(id).set_description(description);
    }

    /// Raw-text channel: take every description from a parse result.
    ///
    /// Busy and error indicators belong to in-flight operations and are kept.
    pub fn replace_all(&mut self, parsed: &SceneRegistry) {
        for (scene, fresh) in self.scenes.iter_mut().zip(parsed.iter()) {
            scene.set_description(fresh.description().clone());
        }
    }

    /// Whether at least one scene has content.
    pub fn has_any_description(&self) -> bool {
        self.scenes.iter().any(|s| !s.description.is_empty())
    }

    /// Render as `ID: description` lines in canonical order.
    ///
    /// Parsing the result reproduces the same descriptions.
    pub fn to_script(&self) -> String {
        self.scenes
            .iter()
            .map(|s| format!("{}: {}", s.id, s.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_fixed_and_ordered() {
        let registry = SceneRegistry::new();
        let ids: Vec<_> = registry.iter().map(|s| *s.id()).collect();
        assert_eq!(ids, SceneId::ALL.to_vec());
        for scene in registry.iter() {
            assert_eq!(scene.label(), &scene.id().to_string());
            assert!(scene.description().is_empty());
            assert!(!*scene.loading());
        }
    }

    #[test]
    fn parse_scene_id_rejects_other_slots() {
        for bad in ["C00", "C07", "C1", "C001", "D01", ""] {
            assert!(bad.parse::<SceneId>().is_err(), "{bad:?} should not parse");
        }
        assert_eq!(" c06 ".parse::<SceneId>().unwrap(), SceneId::C06);
    }

    #[test]
    fn replace_all_keeps_busy_flags() {
        let mut registry = SceneRegistry::new();
        registry.scene_mut(SceneId::C04).set_loading(true);
        registry.edit_description(SceneId::C04, "hand edit");

        let mut parsed = SceneRegistry::new();
        parsed.edit_description(SceneId::C01, "from script");
        registry.replace_all(&parsed);

        assert_eq!(registry.get(SceneId::C01).description(), "from script");
        assert_eq!(registry.get(SceneId::C04).description(), "");
        assert!(*registry.get(SceneId::C04).loading());
    }

    #[test]
    fn has_any_description_tracks_content() {
        let mut registry = SceneRegistry::new();
        assert!(!registry.has_any_description());
        registry.edit_description(SceneId::C05, "x");
        assert!(registry.has_any_description());
    }
}
