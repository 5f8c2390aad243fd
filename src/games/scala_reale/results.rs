//! End-of-round results table.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Text shown in a cell whose value has not arrived yet.
pub const PLACEHOLDER: &str = "-";

/// One player's row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub name: String,
    pub score: Option<i64>,
}

impl ResultRow {
    fn pending(name: String) -> Self {
        Self { name, score: None }
    }
}

/// One row per seated player, in seat order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsTable {
    rows: PlayerMap<ResultRow>,
}

impl ResultsTable {
    /// Rows for the given players, with every score still pending.
    #[must_use]
    pub fn prepare(names: &[String]) -> Self {
        Self {
            rows: PlayerMap::new(names.len(), |player| {
                ResultRow::pending(names[player.index()].clone())
            }),
        }
    }

    /// Rows for `count` unnamed players.
    #[must_use]
    pub fn anonymous(count: usize) -> Self {
        Self {
            rows: PlayerMap::new(count, |player| ResultRow::pending(format!("Player {player}"))),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.rows.player_count()
    }

    #[must_use]
    pub fn row(&self, player: PlayerId) -> Option<&ResultRow> {
        self.rows.get(player)
    }

    pub fn rows(&self) -> impl Iterator<Item = (PlayerId, &ResultRow)> {
        self.rows.iter()
    }

    /// Fill in scores in seat order. Scores past the last row are dropped.
    pub fn record(&mut self, scores: &[i64]) {
        for ((_, row), &score) in self.rows.iter_mut().zip(scores) {
            row.score = Some(score);
        }
    }

    /// Check whether every row has a score.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rows.iter().all(|(_, row)| row.score.is_some())
    }
}

impl std::fmt::Display for ResultsTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (_, row) in self.rows.iter() {
            match row.score {
                Some(score) => writeln!(f, "{:<16} {score:>4}", row.name)?,
                None => writeln!(f, "{:<16} {PLACEHOLDER:>4}", row.name)?,
            }
        }
        Ok(())
    }
}
