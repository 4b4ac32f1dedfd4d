//! Card definitions - static card data.
//!
//! `CardEntry` holds the immutable properties of a card type: cost,
//! faction, category, defense, how copies enter the game, and its
//! abilities. Entries are built once and shared read-only by every
//! instance of that card type.

use serde::{Deserialize, Serialize};

use super::attributes::{AbilityId, CardKind, Faction};
use super::instance::InstanceId;
use crate::core::{GameState, Mutation, PlayerId};
use crate::effects::{Effect, EffectResolver, PlayerPointer, ResolverContext};

/// When an ability resolves relative to playing its card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityGroup {
    /// Resolves before everything else; usually prompts for a choice.
    BeforePlay,
    /// Resolves whenever the card's abilities are played.
    Primary,
    /// Resolves once another card of the same faction is in play.
    Ally,
}

/// Whether an ability resolves on its own or waits to be activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activation {
    Instant,
    Activated(AbilityId),
}

/// One ability of a card.
///
/// ## Example
///
/// ```
/// use star_realms_engine::cards::{Ability, AbilityGroup, AbilityId};
/// use star_realms_engine::core::Counter;
/// use star_realms_engine::effects::{Effect, PlayerPointer};
///
/// let scrap = Ability::primary(Effect::gain(Counter::Combat, 2)).activated(AbilityId::Utilization);
/// assert_eq!(scrap.group, AbilityGroup::Primary);
/// assert_eq!(scrap.ability_id(), Some(AbilityId::Utilization));
///
/// let discard = Ability::ally(Effect::gain(Counter::Discard, 1)).on_opponent();
/// assert_eq!(discard.target, PlayerPointer::Opponent);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub group: AbilityGroup,
    pub activation: Activation,
    pub target: PlayerPointer,
    pub effect: Effect,
}

impl Ability {
    fn new(group: AbilityGroup, effect: Effect) -> Self {
        Self {
            group,
            activation: Activation::Instant,
            target: PlayerPointer::Current,
            effect,
        }
    }

    #[must_use]
    pub fn before_play(effect: Effect) -> Self {
        Self::new(AbilityGroup::BeforePlay, effect)
    }

    #[must_use]
    pub fn primary(effect: Effect) -> Self {
        Self::new(AbilityGroup::Primary, effect)
    }

    #[must_use]
    pub fn ally(effect: Effect) -> Self {
        Self::new(AbilityGroup::Ally, effect)
    }

    /// Require explicit activation under `id`.
    #[must_use]
    pub fn activated(mut self, id: AbilityId) -> Self {
        self.activation = Activation::Activated(id);
        self
    }

    /// Aim the effect at the opponent of the resolving player.
    #[must_use]
    pub fn on_opponent(mut self) -> Self {
        self.target = PlayerPointer::Opponent;
        self
    }

    #[must_use]
    pub fn ability_id(&self) -> Option<AbilityId> {
        match self.activation {
            Activation::Instant => None,
            Activation::Activated(id) => Some(id),
        }
    }

    /// Resolve the effect for `actor` playing card `source`.
    #[must_use]
    pub fn resolve(&self, actor: PlayerId, source: &InstanceId, state: &GameState) -> Vec<Mutation> {
        let context = ResolverContext::new(self.target.resolve(actor), source, state);
        EffectResolver::resolve(&self.effect, &context)
    }
}

/// How the copies of a card enter the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Supply {
    /// Shuffled into the trade deck and revealed through the trade row.
    TradeDeck,
    /// Split between the players' starting decks.
    Starter,
    /// Always available for purchase; buying one never refills the row.
    Unlimited,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use star_realms_engine::cards::{Ability, CardEntry, CardKind, Faction};
/// use star_realms_engine::core::Counter;
/// use star_realms_engine::effects::Effect;
///
/// let pod = CardEntry::ship("tradePod", Faction::Blob)
///     .cost(2)
///     .qty(2)
///     .with(Ability::primary(Effect::gain(Counter::Trade, 3)))
///     .with(Ability::ally(Effect::gain(Counter::Combat, 2)));
///
/// assert_eq!(pod.kind, CardKind::Ship);
/// assert_eq!(pod.primary().count(), 1);
/// assert_eq!(pod.ally().count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardEntry {
    /// Catalog key; instance ids are `<key>_<n>`.
    pub key: &'static str,
    pub cost: i64,
    /// Copies minted per session.
    pub qty: u32,
    /// Damage needed to destroy a base; zero for ships.
    pub defense: i64,
    pub faction: Faction,
    pub kind: CardKind,
    pub supply: Supply,
    pub abilities: Vec<Ability>,
}

impl CardEntry {
    fn new(key: &'static str, faction: Faction, kind: CardKind, defense: i64) -> Self {
        Self {
            key,
            cost: 0,
            qty: 1,
            defense,
            faction,
            kind,
            supply: Supply::TradeDeck,
            abilities: Vec::new(),
        }
    }

    #[must_use]
    pub fn ship(key: &'static str, faction: Faction) -> Self {
        Self::new(key, faction, CardKind::Ship, 0)
    }

    #[must_use]
    pub fn base(key: &'static str, faction: Faction, defense: i64) -> Self {
        Self::new(key, faction, CardKind::Base, defense)
    }

    #[must_use]
    pub fn cost(mut self, cost: i64) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn qty(mut self, qty: u32) -> Self {
        self.qty = qty;
        self
    }

    #[must_use]
    pub fn starter(mut self) -> Self {
        self.supply = Supply::Starter;
        self
    }

    #[must_use]
    pub fn unlimited(mut self) -> Self {
        self.supply = Supply::Unlimited;
        self
    }

    #[must_use]
    pub fn with(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    #[must_use]
    pub fn is_base(&self) -> bool {
        self.kind == CardKind::Base
    }

    #[must_use]
    pub fn has_unlimited_supply(&self) -> bool {
        self.supply == Supply::Unlimited
    }

    fn group(&self, group: AbilityGroup) -> impl Iterator<Item = &Ability> {
        self.abilities.iter().filter(move |a| a.group == group)
    }

    pub fn before_play(&self) -> impl Iterator<Item = &Ability> {
        self.group(AbilityGroup::BeforePlay)
    }

    pub fn primary(&self) -> impl Iterator<Item = &Ability> {
        self.group(AbilityGroup::Primary)
    }

    pub fn ally(&self) -> impl Iterator<Item = &Ability> {
        self.group(AbilityGroup::Ally)
    }

    /// Abilities that wait for explicit activation, from any group.
    pub fn activated(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter().filter(|a| a.ability_id().is_some())
    }

    /// The activated ability registered under `id`.
    #[must_use]
    pub fn find_activated(&self, id: AbilityId) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.ability_id() == Some(id))
    }
}
