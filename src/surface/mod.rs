//! The capability interface the game client is built on.
//!
//! The client never owns card containers directly. It drives an injected
//! `CardSurface` (the container/deck framework) through these operations
//! and reads back the transitions each mutation recorded.
//!
//! `ContainerModel` in `crate::zones` is the in-process implementation.

use crate::cards::{Back, CardInstance, CardOverride, CardSelector, CardTag, ClickTarget, Transfer};
use crate::core::{ContainerKey, EntityId, SurfaceError};
use crate::transitions::TransitionBatch;
use crate::zones::Deck;

/// Container and deck operations.
///
/// ## Implementation Notes
///
/// - `move_cards` is atomic: a card is never observable as removed from
///   its source but not yet inserted into its destination.
/// - Inserting into a full container removes its bottom card first.
/// - Every mutation records its transitions; `take_transitions` drains
///   them in the order they were recorded.
pub trait CardSurface: Send {
    /// Clear every container, the discard pile, and pending transitions,
    /// and put out an empty deck showing `back`.
    fn instantiate(&mut self, back: Back);

    fn deck(&self) -> &Deck;

    fn deck_mut(&mut self) -> &mut Deck;

    /// Number of cards in a container.
    fn count(&self, key: ContainerKey) -> usize;

    /// Cards in a container matching `selector`, bottom to top, at most
    /// `limit` of them.
    fn select(
        &self,
        key: ContainerKey,
        selector: &CardSelector,
        limit: Option<usize>,
    ) -> Vec<EntityId>;

    /// Look up a card on screen.
    fn card(&self, entity: EntityId) -> Option<&CardInstance>;

    /// Card in a given slot of a container.
    fn entity_at(&self, key: ContainerKey, slot: usize) -> Option<EntityId>;

    /// Draw the deck's top card into a container with the given attributes.
    fn draw_to(&mut self, to: ContainerKey, apply: &CardOverride) -> Result<EntityId, SurfaceError>;

    /// Move up to `limit` cards matching `transfer.select` from one
    /// container to another, applying `transfer.apply` on insertion.
    ///
    /// Fails when no card matches.
    fn move_cards(
        &mut self,
        from: ContainerKey,
        transfer: &Transfer,
        to: ContainerKey,
        limit: usize,
    ) -> Result<Vec<EntityId>, SurfaceError>;

    /// Remove a container's bottom card to the discard pile.
    fn remove_bottom(&mut self, key: ContainerKey) -> Option<EntityId>;

    /// Re-lay out a container after cards left it.
    fn refresh(&mut self, key: ContainerKey);

    /// Flip a UI tag. Returns whether the tag is now present.
    fn toggle_tag(&mut self, entity: EntityId, tag: CardTag) -> Result<bool, SurfaceError>;

    /// Shuffle the discard pile back into the deck.
    fn recycle_discards(&mut self);

    /// Drain the transitions recorded since the last call.
    fn take_transitions(&mut self) -> TransitionBatch;

    /// Positional snapshot of a card for click routing.
    fn click_target(&self, entity: EntityId) -> Option<ClickTarget>;

    /// Cards in every container plus the deck and discard pile.
    fn total_cards(&self) -> usize;

    // === Convenience Methods ===

    /// Snapshot of the deck for a click on it.
    fn deck_target(&self) -> ClickTarget {
        ClickTarget::deck(self.deck().back().clone())
    }

    /// First card matching `selector`, or an error naming the container.
    fn find(&self, key: ContainerKey, selector: &CardSelector) -> Result<EntityId, SurfaceError> {
        self.select(key, selector, Some(1))
            .into_iter()
            .next()
            .ok_or_else(|| SurfaceError::NoMatchingCard {
                container: key,
                selector: selector.to_string(),
            })
    }
}
