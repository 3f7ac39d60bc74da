use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlayerEntry {
    pub name: String,
    pub team: String,
}

impl PlayerEntry {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
        }
    }

    /// Two entries collide when they share both name and team.
    pub fn collides_with(&self, other: &PlayerEntry) -> bool {
        self.name == other.name && self.team == other.team
    }
}

impl std::fmt::Display for PlayerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.team)
    }
}

/// The players stored under a single group, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerList {
    players: Vec<PlayerEntry>,
}

impl PlayerList {
    pub fn new(players: Vec<PlayerEntry>) -> Self {
        Self { players }
    }

    fn contains(&self, player: &PlayerEntry) -> bool {
        self.players.iter().any(|p| p.collides_with(player))
    }

    /// Appends `player` unless an entry with the same name and team is
    /// already present, in which case the rejected entry is handed back.
    pub fn add(&mut self, player: PlayerEntry) -> Result<(), PlayerEntry> {
        if self.contains(&player) {
            return Err(player);
        }
        self.players.push(player);
        Ok(())
    }

    pub fn by_team(&self, team: &str) -> Vec<PlayerEntry> {
        self.players
            .iter()
            .filter(|p| p.team == team)
            .cloned()
            .collect()
    }

    /// Removes every entry named `name` whatever its team; returns how many
    /// were dropped.
    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let before = self.players.len();
        self.players.retain(|p| p.name != name);
        before - self.players.len()
    }

    pub fn as_slice(&self) -> &[PlayerEntry] {
        &self.players
    }

    pub fn into_vec(self) -> Vec<PlayerEntry> {
        self.players
    }
}
