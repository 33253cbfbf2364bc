use crate::Role;
use serde::{Deserialize, Serialize};

/// A playable configuration: fixed roles dealt one per player, plus a number
/// of wildcard slots filled from `wildcard_pool`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameMode {
    #[serde(default)]
    pub id: u32,
    pub display_name: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub wildcard_pool: Vec<Role>,
    #[serde(default)]
    pub number_of_wildcards: usize,
}

impl GameMode {
    /// Number of players this mode deals to, or `None` if the wildcard count
    /// is too large to add to the fixed roles.
    pub fn checked_player_count(&self) -> Option<usize> {
        self.roles.len().checked_add(self.number_of_wildcards)
    }

    /// Like [`GameMode::checked_player_count`], saturating at `usize::MAX`.
    pub fn player_count(&self) -> usize {
        self.roles.len().saturating_add(self.number_of_wildcards)
    }

    pub fn has_wildcards(&self) -> bool {
        self.number_of_wildcards > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Team;

    #[test]
    fn test_player_count_includes_wildcards() {
        let mode = GameMode {
            id: 1,
            display_name: "Mixed".to_string(),
            roles: vec![
                Role::new(1, "Resistance Operative", Team::Resistance),
                Role::new(2, "Spy", Team::Spy),
            ],
            wildcard_pool: vec![Role::new(3, "Defector", Team::Spy)],
            number_of_wildcards: 3,
        };

        assert_eq!(mode.player_count(), 5);
        assert!(mode.has_wildcards());
    }

    #[test]
    fn test_oversized_wildcard_count_does_not_overflow() {
        let mode = GameMode {
            display_name: "Huge".to_string(),
            roles: vec![Role::new(1, "Spy", Team::Spy)],
            number_of_wildcards: usize::MAX,
            ..GameMode::default()
        };

        assert_eq!(mode.checked_player_count(), None);
        assert_eq!(mode.player_count(), usize::MAX);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let mode: GameMode = serde_json::from_str(r#"{"DisplayName": "Empty"}"#).unwrap();

        assert!(mode.roles.is_empty());
        assert!(mode.wildcard_pool.is_empty());
        assert_eq!(mode.number_of_wildcards, 0);
        assert_eq!(mode.player_count(), 0);
    }
}
