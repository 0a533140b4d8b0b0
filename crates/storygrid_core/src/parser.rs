//! Splits a free-form storyboard script into the six scene slots.
//!
//! A script is a sequence of lines. A line that contains a label marker such
//! as `C01:`, `Scene C02`, or `镜头C03：` opens that slot; the text left on the
//! line after removing the marker starts its description, and following
//! unlabeled lines are appended with a single space. Text before the first
//! marker is dropped. Only `C01`..`C06` are markers; `C07` and friends are
//! ordinary text.
//!
//! The byte-order mark U+FEFF counts as whitespace everywhere, so a script
//! file saved with a BOM parses the same as one without.

use crate::{SceneId, SceneRegistry};
use regex::Regex;
use serde::{Deserialize, Serialize};
use storygrid_error::{ConfigError, StoryGridResult};

/// Lead-in words that may precede a slot token.
///
/// # Examples
///
/// ```
/// use storygrid_core::LabelConfig;
///
/// let config = LabelConfig::default();
/// assert_eq!(config.lead_ins, vec!["镜头".to_string(), "scene".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Words meaning "scene" or "shot", matched case-insensitively
    #[serde(default = "default_lead_ins")]
    pub lead_ins: Vec<String>,
}

fn default_lead_ins() -> Vec<String> {
    vec!["镜头".to_string(), "scene".to_string()]
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            lead_ins: default_lead_ins(),
        }
    }
}

impl LabelConfig {
    /// Regex source for a label marker.
    fn pattern(&self) -> String {
        let lead_ins: Vec<String> = self
            .lead_ins
            .iter()
            .filter(|word| !word.is_empty())
            .map(|word| regex::escape(word))
            .collect();

        if lead_ins.is_empty() {
            format!(r"(?i){BLANK}*(c0[1-6]){BLANK}*[:：]?")
        } else {
            format!(
                r"(?i)(?:{})?{BLANK}*(c0[1-6]){BLANK}*[:：]?",
                lead_ins.join("|")
            )
        }
    }
}

/// Regex class for whitespace, including the byte-order mark.
const BLANK: &str = r"[\s\x{FEFF}]";

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank)
}

/// Pure, total script parser.
///
/// # Examples
///
/// ```
/// use storygrid_core::{LabelConfig, SceneId, ScriptParser};
///
/// # fn main() -> storygrid_error::StoryGridResult<()> {
/// let parser = ScriptParser::new(&LabelConfig::default())?;
/// let scenes = parser.parse("intro junk\nC01: Close-up of the mug\nsteam rising\nC02: Wide shot");
///
/// assert_eq!(scenes.get(SceneId::C01).description(), "Close-up of the mug steam rising");
/// assert_eq!(scenes.get(SceneId::C02).description(), "Wide shot");
/// assert_eq!(scenes.get(SceneId::C03).description(), "");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScriptParser {
    marker: Regex,
}

impl ScriptParser {
    /// Compile a parser for the given lead-in words.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the resulting pattern is rejected,
    /// which only happens when the lead-in list is enormous.
    #[tracing::instrument(skip(config), fields(lead_ins = config.lead_ins.len()))]
    pub fn new(config: &LabelConfig) -> StoryGridResult<Self> {
        let pattern = config.pattern();
        let marker = Regex::new(&pattern).map_err(|e| {
            ConfigError::new(format!("Invalid scene label pattern '{}': {}", pattern, e))
        })?;
        Ok(Self { marker })
    }

    /// Find the first label marker on a line.
    ///
    /// Returns the slot and the line with the marker text removed, trimmed.
    pub fn match_label(&self, line: &str) -> Option<(SceneId, String)> {
        let captures = self.marker.captures(line)?;
        let whole = captures.get(0)?;
        let token = captures.get(1)?.as_str();
        let id = token.chars().last().and_then(SceneId::from_digit)?;

        let remainder = format!("{}{}", &line[..whole.start()], &line[whole.end()..]);
        Some((id, trim_blank(&remainder).to_string()))
    }

    /// Parse a raw script into a fresh registry.
    ///
    /// Slots absent from the script keep empty descriptions. If a slot is
    /// labeled more than once, the last occurrence wins.
    pub fn parse(&self, raw: &str) -> SceneRegistry {
        let mut scenes = SceneRegistry::new();
        let mut current: Option<SceneId> = None;
        let mut buffer = String::new();

        for line in raw.split('\n') {
            match self.match_label(line) {
                Some((id, rest)) => {
                    if let Some(active) = current {
                        scenes.edit_description(active, trim_blank(&buffer));
                    }
                    current = Some(id);
                    buffer = rest;
                }
                None if current.is_some() => {
                    buffer.push(' ');
                    buffer.push_str(trim_blank(line));
                }
                None => {}
            }
        }

        if let Some(active) = current {
            scenes.edit_description(active, trim_blank(&buffer));
        }

        scenes
    }
}
