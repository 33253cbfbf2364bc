//! Resistance core - role assignment for social deduction games
//!
//! Deals the roles of a game mode to a table of players. Fixed roles go to a
//! randomly chosen subset of players in declared order; everyone else draws
//! from the game mode's wildcard pool. All randomness comes from an injectable
//! [`Randomizer`], backed in production by the operating system CSPRNG.
//!
//! This crate performs no I/O. Configuration is parsed from strings handed in
//! by the caller.

pub mod assignment;
pub mod config;
pub mod error;
pub mod game_mode;
pub mod generator;
pub mod player;
pub mod presets;
pub mod randomizer;
pub mod role;
pub mod roster;

pub use assignment::RoleAssignment;
pub use config::{GameConfig, PlayerMap};
pub use error::{ResistanceError, Result};
pub use game_mode::GameMode;
pub use generator::RoleAssignmentGenerator;
pub use player::Player;
pub use randomizer::{Randomizer, SecureRandomizer};
pub use role::{Role, Team};
pub use roster::{parse_initials, Roster};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_from_settings() {
        let config = GameConfig::from_json(
            r#"{"PlayerMap": {"AB": "Alice", "CD": "Carol", "EF": "Evan", "GH": "Gina", "IJ": "Ian"}}"#,
        )
        .unwrap();

        let mut roster = Roster::new();
        roster.push_line("ab, cd, ef, gh, ij");
        let players = config.player_map.resolve(roster.initials());

        let mode = config.game_mode_for(players.len()).unwrap();
        let assignments = RoleAssignmentGenerator::new()
            .generate_role_assignments(&players, &mode)
            .unwrap();

        assert_eq!(assignments.len(), 5);
        assert_eq!(
            assignments.iter().filter(|a| a.role().team == Team::Spy).count(),
            2
        );

        let json = serde_json::to_value(&assignments).unwrap();
        assert!(json[0]["Player"]["Name"].is_string());
        assert!(json[0]["Role"]["Team"].is_string());
    }
}
