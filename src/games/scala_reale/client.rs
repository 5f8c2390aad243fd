//! Round lifecycle handlers and click routing for one Scala Reale table.

use tracing::{debug, trace, warn};

use super::results::ResultsTable;
use crate::cards::{visibility, Back, CardDescriptor, CardSelector, CardTag, Transfer};
use crate::core::{ContainerKey, EngineConfig, EngineError, PlayerId, Role, Seating};
use crate::phase::{Clickable, Phase, PhaseMachine};
use crate::protocol::{Command, OutboundCommand};
use crate::surface::CardSurface;
use crate::transitions::{Animator, TimedAnimator, TransitionQueue};
use crate::zones::ContainerModel;

/// Client-side state of one table.
///
/// Owns the container surface, the transition queue, and the phase
/// machine. Container mutations only happen inside the command handlers;
/// `click` reads the surface but never mutates it.
///
/// ## Usage
///
/// ```
/// # tokio_test_block_on(async {
/// use carte_sync::games::scala_reale::ScalaRealeClient;
/// use carte_sync::core::{ContainerKey, EngineConfig};
/// use carte_sync::protocol::Frame;
/// use carte_sync::surface::CardSurface;
///
/// let mut client = ScalaRealeClient::new(EngineConfig::default().with_animations(false));
/// for frame in ["begin", "init_deck|40|blue", "draw_to_table|1-diamonds"] {
///     let command = Frame::parse(frame).decode().unwrap().unwrap();
///     client.handle(command).await.unwrap();
/// }
///
/// assert_eq!(client.surface().count(ContainerKey::TABLE), 1);
/// assert_eq!(client.surface().deck().remaining(), 39);
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug)]
pub struct ScalaRealeClient<S = ContainerModel, A = TimedAnimator> {
    surface: S,
    queue: TransitionQueue<A>,
    phase: PhaseMachine,
    seating: Seating,
    players: Vec<String>,
    results: Option<ResultsTable>,
    config: EngineConfig,
}

impl ScalaRealeClient {
    /// A client over the in-process container model, animating with
    /// wall-clock delays.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let surface = ContainerModel::new(&config);
        let animator = TimedAnimator::new(config.transition_duration());
        Self::with_parts(surface, animator, config)
    }
}

impl<S: CardSurface, A: Animator> ScalaRealeClient<S, A> {
    /// A client over an injected surface and animator.
    pub fn with_parts(surface: S, animator: A, config: EngineConfig) -> Self {
        Self {
            surface,
            queue: TransitionQueue::new(animator, config.animations),
            phase: PhaseMachine::new(),
            seating: Seating::default(),
            players: Vec::new(),
            results: None,
            config,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn queue(&self) -> &TransitionQueue<A> {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut TransitionQueue<A> {
        &mut self.queue
    }

    pub fn phase(&self) -> &PhaseMachine {
        &self.phase
    }

    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn results(&self) -> Option<&ResultsTable> {
        self.results.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply one inbound command, including every transition it starts.
    pub async fn handle(&mut self, command: Command) -> Result<(), EngineError> {
        match command {
            Command::Players(names) => self.set_players(names),
            Command::PlayerId(player) => self.seat(player),
            Command::Animations(on) => self.set_animations(on),
            Command::Begin => self.begin(),
            Command::ConfigureDeck {
                count,
                back,
                redraw,
            } => self.configure_deck(count, back, redraw).await,
            Command::AnnouncePhase(phase) => self.announce_phase(phase),
            Command::DealToTable { card, deck_back } => {
                self.deal_to_table(&card, deck_back).await?;
            }
            Command::DealToHand { player, card } => self.deal_to_hand(player, &card).await?,
            Command::TakeFromTable { player, card } => self.take_from_table(player, &card).await?,
            Command::ToggleHoldLock(card) => {
                self.toggle_hold_lock(&card)?;
            }
            Command::PlayCard { player, card } => self.play_card(player, &card).await?,
            Command::RevealWinnerCards { player, cards } => {
                self.reveal_winner_cards(player, &cards).await?;
            }
            Command::Turn => debug!("turn notice"),
            Command::PrepareResults => self.prepare_results(),
            Command::Results(scores) => self.record_results(&scores),
            Command::Error { message, command } => {
                warn!(%message, command = command.as_deref().unwrap_or(""), "server rejected command");
            }
        }
        Ok(())
    }

    /// Route a user gesture. Returns the command to send, if any.
    pub fn click(&mut self, clicked: Clickable) -> Option<OutboundCommand> {
        let target = match clicked {
            Clickable::Deck => self.surface.deck_target(),
            Clickable::Card(entity) => {
                let Some(target) = self.surface.click_target(entity) else {
                    trace!(%entity, "click on a card that is not on screen");
                    return None;
                };
                target
            }
        };
        self.phase.on_click(&target)
    }

    // === Seating and session state ===

    pub fn set_players(&mut self, names: Vec<String>) {
        debug!(players = ?names, "players seated");
        self.players = names;
    }

    pub fn seat(&mut self, player: PlayerId) {
        debug!(%player, "local seat");
        self.seating.set_local(player);
    }

    pub fn set_animations(&mut self, on: bool) {
        self.queue.set_animations(on);
    }

    // === Round lifecycle ===

    /// Clear the table and put out an empty deck with the default back.
    pub fn begin(&mut self) {
        self.surface
            .instantiate(Back::new(self.config.default_back.clone()));
        self.results = None;
    }

    /// Set the deck's count and, when given, its back. On a redraw the
    /// table keeps only its top card and the discard pile goes back into
    /// the deck.
    pub async fn configure_deck(&mut self, count: usize, back: Option<Back>, redraw: bool) {
        let deck = self.surface.deck_mut();
        if let Some(back) = back {
            deck.set_back(back);
        }
        deck.set_count(count);

        if redraw {
            if self.surface.count(ContainerKey::TABLE) == 2 {
                self.surface.remove_bottom(ContainerKey::TABLE);
                self.surface.refresh(ContainerKey::TABLE);
            }
            self.surface.recycle_discards();
        }

        self.queue.barrier(&mut self.surface).await;
    }

    pub fn announce_phase(&mut self, phase: Phase) {
        self.phase.set_phase(phase);
    }

    /// Deal the deck's top card face-up onto the table, then optionally
    /// change the deck's back.
    pub async fn deal_to_table(
        &mut self,
        card: &CardDescriptor,
        deck_back: Option<Back>,
    ) -> Result<(), EngineError> {
        let apply = visibility::deck_to_table(card);
        self.queue
            .run(&mut self.surface, |s| s.draw_to(ContainerKey::TABLE, &apply))
            .await?;

        if let Some(back) = deck_back {
            self.surface.deck_mut().set_back(back);
        }
        Ok(())
    }

    /// Deal the deck's top card into a player's hand.
    pub async fn deal_to_hand(
        &mut self,
        player: PlayerId,
        card: &CardDescriptor,
    ) -> Result<(), EngineError> {
        let role = self.seating.role_of(player);
        let apply = visibility::deck_to_hand(role, card);
        self.queue
            .run(&mut self.surface, |s| s.draw_to(ContainerKey::hand(role), &apply))
            .await?;
        Ok(())
    }

    /// Move a table card into the acting player's hand, hiding its face
    /// unless the player is the viewer.
    pub async fn take_from_table(
        &mut self,
        player: PlayerId,
        card: &CardDescriptor,
    ) -> Result<(), EngineError> {
        let role = self.seating.role_of(player);
        let transfer = visibility::table_to_hand(role, card);
        self.queue
            .run(&mut self.surface, |s| {
                s.move_cards(ContainerKey::TABLE, &transfer, ContainerKey::hand(role), 1)
            })
            .await?;
        Ok(())
    }

    /// Flip the hold-lock tag on a card in the viewer's hand. Returns
    /// whether the card is now locked.
    pub fn toggle_hold_lock(&mut self, card: &CardDescriptor) -> Result<bool, EngineError> {
        let hand = ContainerKey::hand(Role::Viewer);
        let entity = self
            .surface
            .find(hand, &CardSelector::from_descriptor(card))?;
        Ok(self.surface.toggle_tag(entity, CardTag::HoldLock)?)
    }

    /// Play a card from a player's hand onto the table.
    ///
    /// A full table loses its bottom card first. Once the play resolves,
    /// no card in the viewer's hand stays hold-locked.
    pub async fn play_card(
        &mut self,
        player: PlayerId,
        card: &CardDescriptor,
    ) -> Result<(), EngineError> {
        if self.surface.count(ContainerKey::TABLE) == 2 {
            self.surface.remove_bottom(ContainerKey::TABLE);
        }

        let played = self.play_to(player, card, ContainerKey::TABLE).await;

        let hand = ContainerKey::hand(Role::Viewer);
        for entity in self
            .surface
            .select(hand, &CardSelector::tagged(CardTag::HoldLock), None)
        {
            self.surface.toggle_tag(entity, CardTag::HoldLock)?;
        }

        played
    }

    /// Reveal a player's cards one at a time into the reveal area, pacing
    /// between cards, then wait for every move to finish.
    pub async fn reveal_winner_cards(
        &mut self,
        player: PlayerId,
        cards: &[CardDescriptor],
    ) -> Result<(), EngineError> {
        let role = self.seating.role_of(player);
        let hand = ContainerKey::hand(role);
        let pacing = self.config.reveal_pacing();

        let mut outcome = Ok(());
        for card in cards {
            let transfer = public_transfer(role, card);
            if let Err(err) = self
                .surface
                .move_cards(hand, &transfer, ContainerKey::REVEAL, 1)
            {
                outcome = Err(err);
                break;
            }
            self.queue.pace(pacing).await;
        }

        self.queue.barrier(&mut self.surface).await;
        Ok(outcome?)
    }

    /// Build the results table with one pending row per player.
    pub fn prepare_results(&mut self) {
        self.results = Some(ResultsTable::prepare(&self.players));
    }

    /// Fill in round scores, preparing the table first if needed.
    pub fn record_results(&mut self, scores: &[i64]) {
        let players = &self.players;
        let table = self.results.get_or_insert_with(|| {
            if players.is_empty() {
                ResultsTable::anonymous(scores.len())
            } else {
                ResultsTable::prepare(players)
            }
        });
        table.record(scores);
    }

    /// Move one card out of a player's hand into a shared container.
    async fn play_to(
        &mut self,
        player: PlayerId,
        card: &CardDescriptor,
        to: ContainerKey,
    ) -> Result<(), EngineError> {
        let role = self.seating.role_of(player);
        let transfer = public_transfer(role, card);
        self.queue
            .run(&mut self.surface, |s| {
                s.move_cards(ContainerKey::hand(role), &transfer, to, 1)
            })
            .await?;
        Ok(())
    }
}

/// A card leaving `role`'s hand face-up, remembering whose hand it was.
fn public_transfer(role: Role, card: &CardDescriptor) -> Transfer {
    let mut transfer = visibility::hand_to_public(role, card);
    transfer.apply = transfer.apply.with_origin(role);
    transfer
}
