//! Standard Resistance line-ups for 5 to 10 players.

use crate::{GameMode, ResistanceError, Result, Role, Team};

pub const MIN_PLAYERS: usize = 5;
pub const MAX_PLAYERS: usize = 10;

const RESISTANCE_ROLE_ID: u32 = 1;
const SPY_ROLE_ID: u32 = 2;

/// Spies dealt at each table size, indexed from `MIN_PLAYERS`.
const SPIES: [usize; MAX_PLAYERS - MIN_PLAYERS + 1] = [2, 2, 3, 3, 3, 4];

pub fn resistance_operative() -> Role {
    Role::new(RESISTANCE_ROLE_ID, "Resistance Operative", Team::Resistance)
}

pub fn spy() -> Role {
    Role::new(SPY_ROLE_ID, "Spy", Team::Spy)
}

/// Number of spies in a standard game, if the table size is supported.
pub fn spy_count(player_count: usize) -> Option<usize> {
    player_count
        .checked_sub(MIN_PLAYERS)
        .and_then(|index| SPIES.get(index))
        .copied()
}

pub fn standard(player_count: usize) -> Result<GameMode> {
    let spies =
        spy_count(player_count).ok_or(ResistanceError::UnsupportedPlayerCount(player_count))?;

    let mut roles = vec![resistance_operative(); player_count - spies];
    roles.extend(std::iter::repeat(spy()).take(spies));

    Ok(GameMode {
        id: player_count as u32,
        display_name: format!("Standard ({} players)", player_count),
        roles,
        wildcard_pool: Vec::new(),
        number_of_wildcards: 0,
    })
}

pub fn standard_modes() -> Vec<GameMode> {
    (MIN_PLAYERS..=MAX_PLAYERS)
        .filter_map(|count| standard(count).ok())
        .collect()
}
