//! Error types.
//!
//! A failed command aborts only itself: the dispatcher logs the error and
//! moves on to the next queued command. Nothing here is retried.

use thiserror::Error;

use super::config::ContainerKey;
use super::entity::EntityId;

/// A card descriptor that does not follow the wire format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("unknown rank '{0}'")]
    UnknownRank(String),
    #[error("unknown suit '{0}'")]
    UnknownSuit(String),
    #[error("malformed card descriptor '{0}'")]
    Malformed(String),
}

/// An inbound command whose arguments do not match its signature.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("command '{command}' is missing argument #{index}")]
    MissingArgument { command: &'static str, index: usize },
    #[error("expected {expected}, got '{value}'")]
    InvalidArgument {
        expected: &'static str,
        value: String,
    },
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

/// A container operation that could not find what it was asked to act on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("container {0} is not configured")]
    UnknownContainer(ContainerKey),
    #[error("no card matching {selector} in {container}")]
    NoMatchingCard {
        container: ContainerKey,
        selector: String,
    },
    #[error("{0} is not on screen")]
    UnknownEntity(EntityId),
}

/// Any failure while handling one inbound command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl From<DescriptorError> for EngineError {
    fn from(err: DescriptorError) -> Self {
        EngineError::Command(CommandError::Descriptor(err))
    }
}

/// A session loop that cannot continue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("outbound channel closed")]
    OutboundClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_error_converts_through_command_error() {
        let err: EngineError = DescriptorError::UnknownSuit("stars".into()).into();
        assert!(matches!(
            err,
            EngineError::Command(CommandError::Descriptor(DescriptorError::UnknownSuit(_)))
        ));
        assert_eq!(err.to_string(), "unknown suit 'stars'");
    }

    #[test]
    fn test_surface_error_message() {
        let err = SurfaceError::NoMatchingCard {
            container: ContainerKey::TABLE,
            selector: "5-hearts".into(),
        };
        assert_eq!(err.to_string(), "no card matching 5-hearts in playing-area");
    }
}
