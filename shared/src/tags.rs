//! Play-experience tags attached to games by the review classifier.
//!
//! `game_tags.json` has shipped in two layouts: an array of entries that each
//! carry their `appid`, and an object keyed by appid. Older exports also used
//! snake_case tag names (`game_mechanics`) where the dashboard expects display
//! names (`Game Mechanics`). [`GameTagsFile::into_map`] folds both variations
//! into the keyed, display-name form the dashboard consumes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::game::AppId;

/// The fixed vocabulary offered by the play-experience filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayTag {
    GameMechanics,
    GameBalance,
    Music,
    Story,
    Immersion,
    UserInterface,
    Usability,
    Graphics,
    Community,
    Dlc,
    Mods,
    ContentVolume,
    PlayerSkill,
}

impl PlayTag {
    pub const ALL: [PlayTag; 13] = [
        PlayTag::GameMechanics,
        PlayTag::GameBalance,
        PlayTag::Music,
        PlayTag::Story,
        PlayTag::Immersion,
        PlayTag::UserInterface,
        PlayTag::Usability,
        PlayTag::Graphics,
        PlayTag::Community,
        PlayTag::Dlc,
        PlayTag::Mods,
        PlayTag::ContentVolume,
        PlayTag::PlayerSkill,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PlayTag::GameMechanics => "Game Mechanics",
            PlayTag::GameBalance => "Game Balance",
            PlayTag::Music => "Music",
            PlayTag::Story => "Story",
            PlayTag::Immersion => "Immersion",
            PlayTag::UserInterface => "User Interface",
            PlayTag::Usability => "Usability",
            PlayTag::Graphics => "Graphics",
            PlayTag::Community => "Community",
            PlayTag::Dlc => "DLC",
            PlayTag::Mods => "Mods",
            PlayTag::ContentVolume => "Content Volume",
            PlayTag::PlayerSkill => "Player Skill",
        }
    }

    pub fn snake_name(&self) -> &'static str {
        match self {
            PlayTag::GameMechanics => "game_mechanics",
            PlayTag::GameBalance => "game_balance",
            PlayTag::Music => "music",
            PlayTag::Story => "story",
            PlayTag::Immersion => "immersion",
            PlayTag::UserInterface => "user_interface",
            PlayTag::Usability => "usability",
            PlayTag::Graphics => "graphics",
            PlayTag::Community => "community",
            PlayTag::Dlc => "dlc",
            PlayTag::Mods => "mods",
            PlayTag::ContentVolume => "content_volume",
            PlayTag::PlayerSkill => "player_skill",
        }
    }

    /// Looks a tag up by its snake_case name, ignoring case
    pub fn from_snake_name(name: &str) -> Option<PlayTag> {
        let lowered = name.to_lowercase();
        PlayTag::ALL.into_iter().find(|tag| tag.snake_name() == lowered)
    }

    /// Display names in filter order
    pub fn display_names() -> Vec<String> {
        PlayTag::ALL.iter().map(|tag| tag.display_name().to_string()).collect()
    }
}

impl fmt::Display for PlayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Maps a snake_case tag name to its display form. Anything else passes through.
pub fn normalize_tag_name(name: &str) -> String {
    PlayTag::from_snake_name(name)
        .map(|tag| tag.display_name().to_string())
        .unwrap_or_else(|| name.to_string())
}

/// Tag assignment for one game
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GameTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appid: Option<AppId>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scores: BTreeMap<String, f64>,

    /// Fields the dashboard does not read, kept so rewrites are lossless
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GameTag {
    pub fn has_any(&self, selected: &[String]) -> bool {
        selected.iter().any(|s| self.tags.iter().any(|t| t == s))
    }

    /// Rewrites tag names and score keys into display form
    pub fn normalize(&mut self) {
        for tag in self.tags.iter_mut() {
            *tag = normalize_tag_name(tag);
        }
        self.scores = std::mem::take(&mut self.scores)
            .into_iter()
            .map(|(key, value)| (normalize_tag_name(&key), value))
            .collect();
    }
}

/// `game_tags.json` keyed by appid
pub type GameTagMap = BTreeMap<String, GameTag>;

/// Either on-disk layout of `game_tags.json`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GameTagsFile {
    Keyed(GameTagMap),
    List(Vec<GameTag>),
}

impl GameTagsFile {
    /// Keyed form with normalized tag names; list entries without an appid are dropped.
    pub fn into_map(self) -> GameTagMap {
        let mut map = match self {
            GameTagsFile::Keyed(map) => map,
            GameTagsFile::List(entries) => entries
                .into_iter()
                .filter_map(|entry| entry.appid.map(|appid| (appid.key(), entry)))
                .collect(),
        };
        for entry in map.values_mut() {
            entry.normalize();
        }
        map
    }
}
