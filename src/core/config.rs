//! Game configuration.
//!
//! The only free parameter of a game is the player count. Hand size is
//! derived from it:
//! - 1 player: 8 cards
//! - 2 players: 7 cards
//! - 3 or more players: 6 cards

use serde::{Deserialize, Serialize};

use super::error::SimError;

/// Fewest players a game can be dealt for.
pub const MIN_PLAYERS: usize = 1;

/// Most players a game can be dealt for.
pub const MAX_PLAYERS: usize = 7;

/// Starting hand size for the given player count.
#[must_use]
pub const fn hand_size_for(player_count: usize) -> usize {
    match player_count {
        1 => 8,
        2 => 7,
        _ => 6,
    }
}

/// Validated game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    player_count: usize,
}

impl GameConfig {
    /// Create a configuration, rejecting player counts outside `1..=7`.
    pub fn new(player_count: usize) -> Result<Self, SimError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(SimError::InvalidConfiguration { player_count });
        }
        Ok(Self { player_count })
    }

    /// Number of players.
    #[must_use]
    pub const fn player_count(&self) -> usize {
        self.player_count
    }

    /// Cards dealt to each player.
    #[must_use]
    pub const fn hand_size(&self) -> usize {
        hand_size_for(self.player_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_sizes() {
        assert_eq!(GameConfig::new(1).unwrap().hand_size(), 8);
        assert_eq!(GameConfig::new(2).unwrap().hand_size(), 7);
        for players in 3..=7 {
            assert_eq!(GameConfig::new(players).unwrap().hand_size(), 6);
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            GameConfig::new(0),
            Err(SimError::InvalidConfiguration { player_count: 0 })
        );
        assert_eq!(
            GameConfig::new(8),
            Err(SimError::InvalidConfiguration { player_count: 8 })
        );
    }

    #[test]
    fn test_error_message() {
        let err = GameConfig::new(9).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: can't play a game with 9 players (expected 1..=7)"
        );
    }
}
