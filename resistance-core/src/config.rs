use crate::error::{ResistanceError, Result};
use crate::{presets, GameMode, Player};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Initials to display names, e.g. `"AB" -> "Alice Brown"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap(BTreeMap<String, String>);

impl PlayerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, initials: impl Into<String>, name: impl Into<String>) {
        self.0.insert(initials.into(), name.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Case-insensitive lookup.
    pub fn name_for(&self, initials: &str) -> Option<&str> {
        let wanted = initials.trim().to_uppercase();
        self.0
            .iter()
            .find(|(key, _)| key.trim().to_uppercase() == wanted)
            .map(|(_, name)| name.as_str())
    }

    /// Turns roster entries into players.
    ///
    /// Unknown initials and entries naming someone already resolved are
    /// skipped. An empty map takes every entry verbatim as a display name.
    pub fn resolve<S: AsRef<str>>(&self, entries: &[S]) -> Vec<Player> {
        let mut seen = HashSet::new();
        let mut players = Vec::new();

        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }

            let name = if self.is_empty() {
                entry
            } else {
                match self.name_for(entry) {
                    Some(name) => name,
                    None => {
                        tracing::warn!("Unknown player initials '{}', skipping", entry);
                        continue;
                    }
                }
            };

            if !seen.insert(name.to_uppercase()) {
                tracing::warn!("Player '{}' entered more than once, skipping repeat", name);
                continue;
            }

            players.push(Player::new(name));
        }

        tracing::debug!(
            "Resolved {} of {} roster entries to players",
            players.len(),
            entries.len()
        );
        players
    }
}

/// Settings document, usually `appsettings.json`. Unknown sections are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameConfig {
    #[serde(default)]
    pub player_map: PlayerMap,
    #[serde(default)]
    pub game_modes: Vec<GameMode>,
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;

        tracing::debug!(
            "Loaded configuration with {} players and {} game modes",
            config.player_map.len(),
            config.game_modes.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let mut initials = HashSet::new();
        for (key, name) in self.player_map.iter() {
            if key.trim().is_empty() {
                return Err(ResistanceError::config("Player initials cannot be empty"));
            }
            if name.trim().is_empty() {
                return Err(ResistanceError::config(format!(
                    "Player '{}' has an empty name",
                    key
                )));
            }
            if !initials.insert(key.trim().to_uppercase()) {
                return Err(ResistanceError::config(format!(
                    "Player initials '{}' are listed more than once",
                    key
                )));
            }
        }

        let mut mode_names = HashSet::new();
        for mode in &self.game_modes {
            if mode.display_name.trim().is_empty() {
                return Err(ResistanceError::config("Game mode name cannot be empty"));
            }
            if !mode_names.insert(mode.display_name.trim().to_lowercase()) {
                return Err(ResistanceError::config(format!(
                    "Game mode '{}' is defined more than once",
                    mode.display_name
                )));
            }
            if mode.checked_player_count().is_none() {
                return Err(ResistanceError::config(format!(
                    "Game mode '{}' has too many wildcards ({})",
                    mode.display_name, mode.number_of_wildcards
                )));
            }
        }

        Ok(())
    }

    /// Configured game mode by display name, ignoring case.
    pub fn game_mode(&self, name: &str) -> Result<&GameMode> {
        let wanted = name.trim().to_lowercase();
        self.game_modes
            .iter()
            .find(|mode| mode.display_name.trim().to_lowercase() == wanted)
            .ok_or_else(|| ResistanceError::GameModeNotFound {
                name: name.to_string(),
            })
    }

    /// First configured mode dealing to exactly `player_count` players,
    /// falling back to the standard line-up.
    pub fn game_mode_for(&self, player_count: usize) -> Result<GameMode> {
        match self
            .game_modes
            .iter()
            .find(|mode| mode.player_count() == player_count)
        {
            Some(mode) => Ok(mode.clone()),
            None => presets::standard(player_count),
        }
    }

    /// Configured modes followed by the standard line-ups.
    pub fn available_modes(&self) -> Vec<GameMode> {
        let mut modes = self.game_modes.clone();
        modes.extend(presets::standard_modes());
        modes
    }
}
