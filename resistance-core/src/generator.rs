use crate::randomizer::{Randomizer, SecureRandomizer};
use crate::{GameMode, Player, ResistanceError, Result, Role, RoleAssignment};

/// Deals the roles of a [`GameMode`] to a set of players.
///
/// Players are shuffled once per call; the first `roles.len()` of them take
/// the fixed roles in declared order and every remaining player draws from
/// a freshly shuffled wildcard pool. Draws are with replacement, so two
/// wildcard players may receive the same pool role.
pub struct RoleAssignmentGenerator<P = SecureRandomizer, W = SecureRandomizer> {
    player_randomizer: P,
    wildcard_randomizer: W,
}

impl RoleAssignmentGenerator {
    pub fn new() -> Self {
        Self::with_randomizers(SecureRandomizer, SecureRandomizer)
    }
}

impl Default for RoleAssignmentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, W> RoleAssignmentGenerator<P, W>
where
    P: Randomizer<Player>,
    W: Randomizer<Role>,
{
    pub fn with_randomizers(player_randomizer: P, wildcard_randomizer: W) -> Self {
        Self {
            player_randomizer,
            wildcard_randomizer,
        }
    }

    /// Validates the request, then pairs every player with exactly one role.
    ///
    /// Fails with [`ResistanceError::InvalidNumberOfPlayers`] unless
    /// `players.len() == roles.len() + number_of_wildcards`, then with
    /// [`ResistanceError::WildcardPoolEmpty`] if wildcards are needed but the
    /// pool is empty. Nothing is randomized when validation fails.
    pub fn generate_role_assignments<'a>(
        &self,
        players: &'a [Player],
        game_mode: &'a GameMode,
    ) -> Result<Vec<RoleAssignment<'a>>> {
        if game_mode.checked_player_count() != Some(players.len()) {
            return Err(ResistanceError::InvalidNumberOfPlayers {
                players: players.len(),
                expected: game_mode.player_count(),
            });
        }

        if game_mode.has_wildcards() && game_mode.wildcard_pool.is_empty() {
            return Err(ResistanceError::WildcardPoolEmpty);
        }

        let shuffled = self.player_randomizer.randomize(players);
        assert_eq!(
            shuffled.len(),
            players.len(),
            "player randomizer must return a permutation of its input"
        );

        let (direct_players, wildcard_players) = shuffled.split_at(game_mode.roles.len());

        let direct = direct_players
            .iter()
            .zip(&game_mode.roles)
            .map(|(&player, role)| RoleAssignment::new(player, role));

        let wildcards = wildcard_players.iter().map(|&player| {
            let role = self
                .wildcard_randomizer
                .randomize(&game_mode.wildcard_pool)
                .into_iter()
                .next()
                .expect("wildcard randomizer returned nothing for a non-empty pool");
            RoleAssignment::new(player, role)
        });

        Ok(direct.chain(wildcards).collect())
    }
}
