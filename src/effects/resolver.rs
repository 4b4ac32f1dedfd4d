//! Effect resolution - turning effects into mutations.
//!
//! The `EffectResolver` never touches the game state. It reads a snapshot
//! and emits the mutations the state manager will apply later, so
//! resolving the same effect against the same snapshot always yields the
//! same list.

use crate::cards::InstanceId;
use crate::core::{GameState, Mutation, PlayerId};
use crate::zones::{Area, Location};

use super::effect::{CustomEffect, Effect};

/// Inputs an effect is resolved against.
pub struct ResolverContext<'a> {
    /// Player the effect applies to, already resolved from its pointer.
    pub player: PlayerId,
    /// Card instance the effect originates from.
    pub source: &'a InstanceId,
    /// Latest snapshot.
    pub state: &'a GameState,
}

impl<'a> ResolverContext<'a> {
    #[must_use]
    pub fn new(player: PlayerId, source: &'a InstanceId, state: &'a GameState) -> Self {
        Self { player, source, state }
    }
}

/// Resolves effects into mutations.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve one effect.
    #[must_use]
    pub fn resolve(effect: &Effect, context: &ResolverContext) -> Vec<Mutation> {
        let mut out = Vec::new();
        Self::resolve_into(effect, context, &mut out);
        out
    }

    /// Resolve one effect, appending to `out`.
    pub fn resolve_into(effect: &Effect, context: &ResolverContext, out: &mut Vec<Mutation>) {
        let player = context.player;

        match effect {
            Effect::ChangeCounter { counter, operation, value } => {
                out.push(Mutation::counter(player, *counter, *operation, *value));
            }

            Effect::DrawCards(count) => Self::draw(player, *count, out),

            Effect::RequestInput(action) => {
                out.push(Mutation::request(player, *action, Some(context.source.clone())));
            }

            Effect::DisableAbility(ability) => {
                out.push(Mutation::DisableActivatedAbility {
                    card_id: context.source.clone(),
                    ability: *ability,
                });
            }

            Effect::Batch(effects) => {
                for effect in effects {
                    Self::resolve_into(effect, context, out);
                }
            }

            Effect::Custom(custom) => Self::resolve_custom(*custom, context, out),
        }
    }

    fn resolve_custom(custom: CustomEffect, context: &ResolverContext, out: &mut Vec<Mutation>) {
        let player = context.player;

        match custom {
            CustomEffect::DrawIfBases { bases, draw } => {
                let owned = context.state.cards.count_in(Location::of(player, Area::Bases));
                if owned >= bases {
                    Self::draw(player, draw, out);
                }
            }
            CustomEffect::DrawPerBlob => {
                let blobs = context.state.counters(player).blobs.max(0);
                Self::draw(player, blobs as u32, out);
            }
        }
    }

    fn draw(player: PlayerId, count: u32, out: &mut Vec<Mutation>) {
        for _ in 0..count {
            out.push(Mutation::TopCard {
                from: Location::of(player, Area::Deck),
                to: Location::of(player, Area::Hand),
            });
        }
    }
}
