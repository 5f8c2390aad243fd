//! Phase state machine and per-phase click handlers.

use tracing::{debug, trace, warn};

use super::Phase;
use crate::cards::{CardTag, ClickTarget, Position};
use crate::core::{ContainerKey, Role};
use crate::protocol::OutboundCommand;

/// Maps a clicked card to the command it stands for, or `None` when the
/// click does not fit the phase.
pub type ClickHandler = fn(&ClickTarget) -> Option<OutboundCommand>;

/// Current phase plus the awaiting-input flag.
///
/// `set_phase` is the only way the flag becomes set; the first click that
/// a phase handler accepts clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhaseMachine {
    phase: Option<Phase>,
    awaiting_input: bool,
}

impl PhaseMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Option<&Phase> {
        self.phase.as_ref()
    }

    #[must_use]
    pub fn awaiting_input(&self) -> bool {
        self.awaiting_input
    }

    /// Enter a phase and start waiting for input.
    pub fn set_phase(&mut self, phase: Phase) {
        debug!(%phase, "phase announced");
        self.phase = Some(phase);
        self.awaiting_input = true;
    }

    /// Click handler registered for a phase.
    #[must_use]
    pub fn handler(phase: &Phase) -> Option<ClickHandler> {
        match phase {
            Phase::Draw => Some(draw_click),
            Phase::HandPlay => Some(hand_click),
            Phase::Win | Phase::Other(_) => None,
        }
    }

    /// Route a click.
    ///
    /// The target is checked against the phase before the flag is
    /// touched, so a rejected click leaves the machine unchanged. An
    /// accepted click clears the flag before the command is handed back.
    pub fn on_click(&mut self, target: &ClickTarget) -> Option<OutboundCommand> {
        if !self.awaiting_input {
            trace!(position = ?target.position, "click while not awaiting input");
            return None;
        }
        let phase = self.phase.as_ref()?;
        let Some(handler) = Self::handler(phase) else {
            warn!(%phase, "no click handler for phase");
            return None;
        };

        let Some(command) = handler(target) else {
            trace!(%phase, position = ?target.position, slot = target.slot, "click ignored");
            return None;
        };

        self.awaiting_input = false;
        debug!(%phase, command = %command, "click routed");
        Some(command)
    }
}

/// Deck → draw; topmost table card → take it.
fn draw_click(target: &ClickTarget) -> Option<OutboundCommand> {
    match target.position {
        Position::Deck => Some(OutboundCommand::DrawCard),
        Position::Container(ContainerKey::TABLE) if target.is_topmost() => {
            Some(OutboundCommand::TakeFromTable)
        }
        Position::Container(_) => None,
    }
}

/// Unlocked card in the viewer's own hand → play it.
fn hand_click(target: &ClickTarget) -> Option<OutboundCommand> {
    let own_hand = target.position == Position::Container(ContainerKey::hand(Role::Viewer));
    (own_hand && !target.tags.contains(CardTag::HoldLock))
        .then(|| OutboundCommand::Play(target.descriptor.clone()))
}
