//! Engine configuration types.
//!
//! The client is configured at startup by providing:
//! - `ContainerConfig`: one entry per named container (hand, playing area,
//!   reveal area) with its capacity and whether it is partitioned per role
//! - `EngineConfig`: container layout plus animation timing and the
//!   default deck back
//!
//! `EngineConfig` deserializes from JSON; missing fields take defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::player::Role;

/// Name of a card container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerName {
    /// A player's hand, partitioned per role.
    Hand,
    /// The shared table: current card plus one cushioning card underneath.
    PlayingArea,
    /// End-of-round reveal area.
    WinnerCards,
}

impl ContainerName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ContainerName::Hand => "hand",
            ContainerName::PlayingArea => "playing-area",
            ContainerName::WinnerCards => "winner-cards",
        }
    }
}

impl std::fmt::Display for ContainerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete container: a name plus, for partitioned containers, the role
/// whose partition it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerKey {
    pub name: ContainerName,
    pub partition: Option<Role>,
}

impl ContainerKey {
    /// The shared table.
    pub const TABLE: ContainerKey = ContainerKey::shared(ContainerName::PlayingArea);

    /// The reveal area.
    pub const REVEAL: ContainerKey = ContainerKey::shared(ContainerName::WinnerCards);

    /// An unpartitioned container.
    #[must_use]
    pub const fn shared(name: ContainerName) -> Self {
        Self {
            name,
            partition: None,
        }
    }

    /// The hand partition of a role.
    #[must_use]
    pub const fn hand(role: Role) -> Self {
        Self {
            name: ContainerName::Hand,
            partition: Some(role),
        }
    }
}

impl std::fmt::Display for ContainerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.partition {
            Some(role) => write!(f, "{}[{}]", self.name, role),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Configuration for a single named container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerConfig {
    pub name: ContainerName,

    /// Whether the container has one partition per role.
    #[serde(default)]
    pub partitioned: bool,

    /// Maximum cards held. `None` for unbounded.
    #[serde(default)]
    pub capacity: Option<usize>,
}

impl ContainerConfig {
    /// Create an unpartitioned, unbounded container configuration.
    #[must_use]
    pub const fn new(name: ContainerName) -> Self {
        Self {
            name,
            partitioned: false,
            capacity: None,
        }
    }

    /// Give the container one partition per role.
    #[must_use]
    pub fn partitioned(mut self) -> Self {
        self.partitioned = true;
        self
    }

    /// Set maximum card limit.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Every concrete container key this configuration produces.
    pub fn keys(&self) -> impl Iterator<Item = ContainerKey> + '_ {
        let partitions: &[Option<Role>] = if self.partitioned {
            &[Some(Role::Viewer), Some(Role::Opponent)]
        } else {
            &[None]
        };
        partitions.iter().map(move |&partition| ContainerKey {
            name: self.name,
            partition,
        })
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Duration of one animated transition batch, in milliseconds.
    pub transition_ms: u64,

    /// Reveal pacing is `transition_ms / reveal_pacing_divisor`.
    pub reveal_pacing_divisor: u32,

    /// Whether transitions animate. The server can toggle this at runtime.
    pub animations: bool,

    /// Back skin the deck shows before the server configures it.
    pub default_back: String,

    /// Container layout.
    pub containers: Vec<ContainerConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            transition_ms: 400,
            reveal_pacing_divisor: 4,
            animations: true,
            default_back: "br".to_string(),
            containers: vec![
                ContainerConfig::new(ContainerName::Hand)
                    .partitioned()
                    .with_capacity(14),
                ContainerConfig::new(ContainerName::PlayingArea).with_capacity(2),
                ContainerConfig::new(ContainerName::WinnerCards).with_capacity(13),
            ],
        }
    }
}

impl EngineConfig {
    /// Set the transition duration.
    #[must_use]
    pub fn with_transition(mut self, duration: Duration) -> Self {
        self.transition_ms = duration.as_millis() as u64;
        self
    }

    /// Enable or disable animations.
    #[must_use]
    pub fn with_animations(mut self, animations: bool) -> Self {
        self.animations = animations;
        self
    }

    /// Set the default deck back.
    #[must_use]
    pub fn with_default_back(mut self, back: impl Into<String>) -> Self {
        self.default_back = back.into();
        self
    }

    /// Duration of one transition batch.
    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Delay between sequential reveal steps.
    #[must_use]
    pub fn reveal_pacing(&self) -> Duration {
        self.transition_duration() / self.reveal_pacing_divisor.max(1)
    }

    /// Look up a container configuration by name.
    #[must_use]
    pub fn container(&self, name: ContainerName) -> Option<&ContainerConfig> {
        self.containers.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_key_display() {
        assert_eq!(ContainerKey::TABLE.to_string(), "playing-area");
        assert_eq!(ContainerKey::hand(Role::Viewer).to_string(), "hand[self]");
    }

    #[test]
    fn test_partitioned_keys() {
        let hand = ContainerConfig::new(ContainerName::Hand).partitioned();
        let keys: Vec<_> = hand.keys().collect();
        assert_eq!(
            keys,
            vec![ContainerKey::hand(Role::Viewer), ContainerKey::hand(Role::Opponent)]
        );

        let table = ContainerConfig::new(ContainerName::PlayingArea);
        assert_eq!(table.keys().collect::<Vec<_>>(), vec![ContainerKey::TABLE]);
    }

    #[test]
    fn test_default_layout() {
        let config = EngineConfig::default();
        assert_eq!(
            config.container(ContainerName::PlayingArea).unwrap().capacity,
            Some(2)
        );
        assert_eq!(config.container(ContainerName::Hand).unwrap().capacity, Some(14));
        assert!(config.container(ContainerName::Hand).unwrap().partitioned);
    }

    #[test]
    fn test_reveal_pacing() {
        let config = EngineConfig::default().with_transition(Duration::from_millis(400));
        assert_eq!(config.reveal_pacing(), Duration::from_millis(100));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "transition_ms": 200, "animations": false }"#).unwrap();
        assert_eq!(config.transition_ms, 200);
        assert!(!config.animations);
        assert_eq!(config.default_back, "br");
        assert_eq!(config.containers.len(), 3);
    }
}
