//! Player demo jobs
//!
//! `Show` is a parent job with a single `FetchPlayer` sub-job. The sub-job
//! reads from a [`PlayerLookup`], which defaults to the in-memory [`Roster`].

pub mod fetch;
pub mod show;

pub use show::Show;

use serde::Serialize;

/// A player record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub team: String,
}

impl Player {
    pub fn new(id: u32, name: &str, team: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            team: team.to_string(),
        }
    }
}

/// Source of player records
pub trait PlayerLookup: Send + Sync {
    /// Finds a player by id
    ///
    /// # Returns
    /// `Ok(None)` when no player has that id
    fn find(&self, id: u32) -> anyhow::Result<Option<Player>>;
}

/// In-memory player store
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Roster used when nothing else is configured
    pub fn seeded() -> Self {
        Self::new(vec![
            Player::new(1, "Ada Brennan", "Harbor City"),
            Player::new(4, "Tomas Reyes", "Harbor City"),
            Player::new(7, "Mina Okafor", "North Ridge"),
            Player::new(12, "Lars Holm", "North Ridge"),
        ])
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
}

impl PlayerLookup for Roster {
    fn find(&self, id: u32) -> anyhow::Result<Option<Player>> {
        Ok(self.players.iter().find(|p| p.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_roster_lookup() {
        let roster = Roster::seeded();
        assert_eq!(roster.players().len(), 4);
        assert_eq!(roster.find(7).unwrap().unwrap().name, "Mina Okafor");
        assert!(roster.find(99).unwrap().is_none());
    }
}
