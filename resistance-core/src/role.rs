use serde::{Deserialize, Serialize};

/// Team affiliation of a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Resistance,
    Spy,
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Resistance => f.write_str("Resistance"),
            Team::Spy => f.write_str("Spy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Role {
    pub id: u32,
    pub display_name: String,
    pub team: Team,
}

impl Role {
    pub fn new(id: u32, display_name: impl Into<String>, team: Team) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            team,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name)
    }
}
