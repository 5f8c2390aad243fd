//! Container model: card locations, movement, and recorded transitions.
//!
//! The `ContainerModel` tracks every card on screen and which slot of which
//! container it occupies. It supports:
//! - Named, ordered containers with optional capacity (bottom = slot 0)
//! - Per-role partitions for hand containers
//! - Attribute-based selection with an optional result cap
//! - Atomic moves between containers
//! - A deck that only knows its remaining count and back skin
//! - A discard counter for cards pushed off the table
//!
//! Slot lists and card instances live in persistent collections, so
//! `snapshot` is O(1) and the rendering layer can hold on to it while the
//! model keeps mutating.

use im::{HashMap as ImHashMap, Vector};
use rustc_hash::FxHashMap;
use tracing::debug;

use super::deck::Deck;
use crate::cards::{
    Back, CardDescriptor, CardInstance, CardOverride, CardSelector, CardTag, ClickTarget, Position,
    Transfer,
};
use crate::core::{ContainerKey, EngineConfig, EntityId, SurfaceError};
use crate::surface::CardSurface;
use crate::transitions::{Transition, TransitionBatch};

/// Read-only view of every container at one instant.
#[derive(Clone, Debug)]
pub struct ContainerSnapshot {
    pub slots: FxHashMap<ContainerKey, Vector<EntityId>>,
    pub cards: ImHashMap<EntityId, CardInstance>,
    pub deck: Deck,
}

impl ContainerSnapshot {
    /// Cards of one container, bottom to top.
    pub fn cards_in(&self, key: ContainerKey) -> impl Iterator<Item = &CardInstance> + '_ {
        self.slots
            .get(&key)
            .into_iter()
            .flat_map(|order| order.iter())
            .filter_map(|entity| self.cards.get(entity))
    }
}

/// In-process card container framework.
///
/// ## Usage
///
/// ```
/// use carte_sync::cards::{CardOverride, Face, Rank, Suit};
/// use carte_sync::core::{ContainerKey, EngineConfig};
/// use carte_sync::surface::CardSurface;
/// use carte_sync::zones::ContainerModel;
///
/// let mut model = ContainerModel::new(&EngineConfig::default());
/// model.deck_mut().set_count(40);
///
/// let face = Face::new(Rank::Ace, Suit::Diamonds);
/// model.draw_to(ContainerKey::TABLE, &CardOverride::reveal(face)).unwrap();
///
/// assert_eq!(model.count(ContainerKey::TABLE), 1);
/// assert_eq!(model.deck().remaining(), 39);
/// ```
#[derive(Clone, Debug)]
pub struct ContainerModel {
    /// Capacity per configured container.
    capacities: FxHashMap<ContainerKey, Option<usize>>,

    /// Slot order per container, bottom first.
    slots: FxHashMap<ContainerKey, Vector<EntityId>>,

    /// Every card on screen.
    cards: ImHashMap<EntityId, CardInstance>,

    deck: Deck,

    /// Cards pushed off screen since the last reshuffle.
    discarded: usize,

    next_entity: EntityId,

    /// Transitions recorded since the last drain.
    pending: Vec<Transition>,
}

impl ContainerModel {
    /// Build the containers named in `config`, all empty, with an empty
    /// deck showing the configured default back.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        let mut capacities = FxHashMap::default();
        let mut slots = FxHashMap::default();
        for container in &config.containers {
            for key in container.keys() {
                capacities.insert(key, container.capacity);
                slots.insert(key, Vector::new());
            }
        }

        Self {
            capacities,
            slots,
            cards: ImHashMap::new(),
            deck: Deck::new(Back::new(config.default_back.clone())),
            discarded: 0,
            next_entity: EntityId::FIRST,
            pending: Vec::new(),
        }
    }

    /// O(1) snapshot of every container.
    #[must_use]
    pub fn snapshot(&self) -> ContainerSnapshot {
        ContainerSnapshot {
            slots: self.slots.clone(),
            cards: self.cards.clone(),
            deck: self.deck.clone(),
        }
    }

    /// Cards in the discard pile.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Cards of one container, bottom to top.
    pub fn cards_in(&self, key: ContainerKey) -> impl Iterator<Item = &CardInstance> + '_ {
        self.slots
            .get(&key)
            .into_iter()
            .flat_map(|order| order.iter())
            .filter_map(|entity| self.cards.get(entity))
    }

    /// What the viewer knows about each card of a container, bottom to top.
    #[must_use]
    pub fn descriptors(&self, key: ContainerKey) -> Vec<CardDescriptor> {
        self.cards_in(key).map(CardInstance::descriptor).collect()
    }

    fn order(&self, key: ContainerKey) -> Result<&Vector<EntityId>, SurfaceError> {
        self.slots.get(&key).ok_or(SurfaceError::UnknownContainer(key))
    }

    fn order_mut(&mut self, key: ContainerKey) -> Result<&mut Vector<EntityId>, SurfaceError> {
        self.slots
            .get_mut(&key)
            .ok_or(SurfaceError::UnknownContainer(key))
    }

    /// Put a card on top of a container, pushing the bottom card off first
    /// when the container is full.
    fn insert(&mut self, key: ContainerKey, mut instance: CardInstance) -> Result<(), SurfaceError> {
        let capacity = self.capacities.get(&key).copied().flatten();
        let len = self.order(key)?.len();
        if capacity.is_some_and(|cap| len >= cap) {
            self.remove_bottom(key);
        }

        instance.container = key;
        self.order_mut(key)?.push_back(instance.entity_id);
        self.cards.insert(instance.entity_id, instance);
        Ok(())
    }

    /// Take a card out of its container without recording anything.
    fn detach(&mut self, key: ContainerKey, entity: EntityId) -> Result<CardInstance, SurfaceError> {
        let order = self.order_mut(key)?;
        let index = order
            .iter()
            .position(|&e| e == entity)
            .ok_or(SurfaceError::UnknownEntity(entity))?;
        order.remove(index);
        self.cards
            .remove(&entity)
            .ok_or(SurfaceError::UnknownEntity(entity))
    }
}

impl CardSurface for ContainerModel {
    fn instantiate(&mut self, back: Back) {
        for order in self.slots.values_mut() {
            order.clear();
        }
        self.cards.clear();
        self.deck = Deck::new(back);
        self.discarded = 0;
        self.pending.clear();
    }

    fn deck(&self) -> &Deck {
        &self.deck
    }

    fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    fn count(&self, key: ContainerKey) -> usize {
        self.slots.get(&key).map_or(0, Vector::len)
    }

    fn select(
        &self,
        key: ContainerKey,
        selector: &CardSelector,
        limit: Option<usize>,
    ) -> Vec<EntityId> {
        self.cards_in(key)
            .filter(|card| selector.matches(card.face, &card.back, &card.tags))
            .map(|card| card.entity_id)
            .take(limit.unwrap_or(usize::MAX))
            .collect()
    }

    fn card(&self, entity: EntityId) -> Option<&CardInstance> {
        self.cards.get(&entity)
    }

    fn entity_at(&self, key: ContainerKey, slot: usize) -> Option<EntityId> {
        self.slots.get(&key)?.get(slot).copied()
    }

    fn draw_to(&mut self, to: ContainerKey, apply: &CardOverride) -> Result<EntityId, SurfaceError> {
        self.order(to)?;
        if !self.deck.draw() {
            debug!(container = %to, "dealing from an empty deck");
        }

        let entity = self.next_entity.advance();
        let mut instance = CardInstance::new(entity, &CardDescriptor::default(), self.deck.back(), to);
        instance.apply(apply);
        self.insert(to, instance)?;
        self.pending.push(Transition::Move {
            entity,
            from: Position::Deck,
            to,
        });
        Ok(entity)
    }

    fn move_cards(
        &mut self,
        from: ContainerKey,
        transfer: &Transfer,
        to: ContainerKey,
        limit: usize,
    ) -> Result<Vec<EntityId>, SurfaceError> {
        self.order(to)?;
        self.order(from)?;

        let picked = self.select(from, &transfer.select, Some(limit));
        if picked.is_empty() {
            return Err(SurfaceError::NoMatchingCard {
                container: from,
                selector: transfer.select.to_string(),
            });
        }

        for &entity in &picked {
            let mut instance = self.detach(from, entity)?;
            instance.apply(&transfer.apply);
            self.insert(to, instance)?;
            self.pending.push(Transition::Move {
                entity,
                from: Position::Container(from),
                to,
            });
        }
        Ok(picked)
    }

    fn remove_bottom(&mut self, key: ContainerKey) -> Option<EntityId> {
        let entity = self.slots.get_mut(&key)?.pop_front()?;
        self.cards.remove(&entity);
        self.discarded += 1;
        self.pending.push(Transition::Discard { entity, from: key });
        Some(entity)
    }

    fn refresh(&mut self, key: ContainerKey) {
        self.pending.push(Transition::Relayout { container: key });
    }

    fn toggle_tag(&mut self, entity: EntityId, tag: CardTag) -> Result<bool, SurfaceError> {
        self.cards
            .get_mut(&entity)
            .map(|card| card.tags.toggle(tag))
            .ok_or(SurfaceError::UnknownEntity(entity))
    }

    fn recycle_discards(&mut self) {
        self.discarded = 0;
    }

    fn take_transitions(&mut self) -> TransitionBatch {
        TransitionBatch::new(std::mem::take(&mut self.pending))
    }

    fn click_target(&self, entity: EntityId) -> Option<ClickTarget> {
        let card = self.cards.get(&entity)?;
        let order = self.slots.get(&card.container)?;
        let slot = order.iter().position(|&e| e == entity)?;

        Some(ClickTarget {
            position: Position::Container(card.container),
            slot,
            stack_size: order.len(),
            descriptor: card.descriptor(),
            tags: card.tags.clone(),
        })
    }

    fn total_cards(&self) -> usize {
        self.slots.values().map(Vector::len).sum::<usize>() + self.deck.remaining() + self.discarded
    }
}
