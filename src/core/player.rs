//! Player identification, perspective, and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index as the server sends it on the wire (`0`, `1`, ...).
//!
//! ## Role
//!
//! The identity-relative view of a seat: the local viewer is `Role::Viewer`,
//! everyone else is `Role::Opponent`. Partitioned containers (hands) are
//! keyed by role, not by seat.
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::CommandError;

/// Seat identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use carte_sync::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map(PlayerId)
            .map_err(|_| CommandError::InvalidArgument {
                expected: "player id",
                value: s.to_string(),
            })
    }
}

/// Which side of the table a seat is on, from the local viewer's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The local viewer ("self").
    Viewer,
    /// Any other seat.
    Opponent,
}

impl Role {
    /// Both roles, viewer first.
    pub const ALL: [Role; 2] = [Role::Viewer, Role::Opponent];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Viewer => "self",
            Role::Opponent => "opponent",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves seats to roles.
///
/// Until the server announces the local seat every player resolves as an
/// opponent, so nothing is ever revealed to a spectator by accident.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Seating {
    local: Option<PlayerId>,
}

impl Seating {
    /// Seating with a known local seat.
    #[must_use]
    pub const fn seated(local: PlayerId) -> Self {
        Self { local: Some(local) }
    }

    /// Record the local viewer's seat.
    pub fn set_local(&mut self, local: PlayerId) {
        self.local = Some(local);
    }

    /// The local viewer's seat, if announced.
    #[must_use]
    pub const fn local(&self) -> Option<PlayerId> {
        self.local
    }

    /// Check whether a seat belongs to the local viewer.
    #[must_use]
    pub fn is_viewer(&self, player: PlayerId) -> bool {
        self.local == Some(player)
    }

    /// Resolve a seat to its role.
    #[must_use]
    pub fn role_of(&self, player: PlayerId) -> Role {
        if self.is_viewer(player) {
            Role::Viewer
        } else {
            Role::Opponent
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use carte_sync::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<i64> = PlayerMap::with_value(2, 0);
/// scores[PlayerId::new(1)] = 1;
/// assert_eq!(scores[PlayerId::new(0)], 0);
/// assert_eq!(scores[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, if the seat exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data, if the seat exists.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
