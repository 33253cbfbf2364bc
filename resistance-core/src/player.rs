use serde::Serialize;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// A participant in a single game. Identity is generated at construction
/// and never changes; equality and hashing use the id alone.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Player {
    id: Uuid,
    name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_players_with_same_name_are_distinct() {
        let first = Player::new("Alice");
        let second = Player::new("Alice");

        assert_eq!(first.name(), second.name());
        assert_ne!(first.id(), second.id());
        assert_ne!(first, second);
    }

    #[test]
    fn test_identity_ignores_name() {
        let alice = Player::new("Alice");
        let mut renamed = alice.clone();
        renamed.name = "Alicia".to_string();

        assert_eq!(alice, renamed);

        let seats: HashSet<_> = [alice.clone(), renamed, Player::new("Alice")]
            .into_iter()
            .collect();
        assert_eq!(seats.len(), 2);
        assert!(seats.contains(&alice));
    }
}
