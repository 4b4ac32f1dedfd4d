//! The standard card set.

use super::attributes::{AbilityId, Faction};
use super::definition::{Ability, CardEntry};
use super::registry::Catalog;
use crate::core::{ActionCode, Counter};
use crate::effects::{CustomEffect, Effect};

use AbilityId as Id;
use Counter::{Authority, Combat, Discard, FleetBonus, ShipsOnTop, Trade};

fn gain(counter: Counter, amount: i64) -> Effect {
    Effect::gain(counter, amount)
}

fn ask(action: ActionCode) -> Effect {
    Effect::request(action)
}

/// `effect`, then switch off the mutually exclusive `sibling`.
fn either(effect: Effect, sibling: AbilityId) -> Effect {
    Effect::batch([effect, Effect::DisableAbility(sibling)])
}

fn unaligned() -> Vec<CardEntry> {
    vec![
        CardEntry::ship("scout", Faction::Unaligned)
            .qty(16)
            .starter()
            .with(Ability::primary(gain(Trade, 1))),
        CardEntry::ship("viper", Faction::Unaligned)
            .qty(4)
            .starter()
            .with(Ability::primary(gain(Combat, 1))),
        CardEntry::ship("explorer", Faction::Unaligned)
            .cost(2)
            .qty(10)
            .unlimited()
            .with(Ability::primary(gain(Trade, 2)))
            .with(Ability::primary(gain(Combat, 2)).activated(Id::Utilization)),
    ]
}

fn blob() -> Vec<CardEntry> {
    let f = Faction::Blob;
    vec![
        CardEntry::ship("blobFighter", f)
            .cost(1)
            .qty(3)
            .with(Ability::primary(gain(Combat, 3)))
            .with(Ability::ally(Effect::draw())),
        CardEntry::ship("tradePod", f)
            .cost(2)
            .qty(2)
            .with(Ability::primary(gain(Trade, 3)))
            .with(Ability::ally(gain(Combat, 2))),
        CardEntry::ship("ram", f)
            .cost(3)
            .qty(2)
            .with(Ability::primary(gain(Combat, 5)))
            .with(Ability::primary(gain(Trade, 3)).activated(Id::Utilization))
            .with(Ability::ally(gain(Combat, 2))),
        CardEntry::base("theHive", f, 5)
            .cost(5)
            .with(Ability::primary(gain(Combat, 3)))
            .with(Ability::ally(Effect::draw())),
        CardEntry::base("blobWheel", f, 5)
            .cost(3)
            .qty(3)
            .with(Ability::primary(gain(Combat, 1)))
            .with(Ability::primary(gain(Trade, 3)).activated(Id::Utilization)),
        CardEntry::ship("battlePod", f)
            .cost(2)
            .qty(2)
            .with(Ability::before_play(ask(ActionCode::ScrapCardTradeRow)))
            .with(Ability::primary(gain(Combat, 4)))
            .with(Ability::ally(gain(Combat, 2))),
        CardEntry::ship("blobCarrier", f)
            .cost(6)
            .with(Ability::primary(gain(Combat, 7)))
            .with(Ability::ally(ask(ActionCode::AcquireShipForFree)).activated(Id::BlobCarrierAcquire)),
        CardEntry::ship("blobDestroyer", f)
            .cost(4)
            .qty(2)
            .with(Ability::primary(gain(Combat, 6)))
            .with(
                Ability::ally(ask(ActionCode::DestroyBaseBlobDestroyer))
                    .activated(Id::BlobDestroyerDestroyBase),
            ),
        CardEntry::base("blobWorld", f, 7)
            .cost(8)
            .with(Ability::primary(either(gain(Combat, 5), Id::BlobWorldDraw)).activated(Id::BlobWorldCombat))
            .with(
                Ability::primary(either(Effect::Custom(CustomEffect::DrawPerBlob), Id::BlobWorldCombat))
                    .activated(Id::BlobWorldDraw),
            ),
    ]
}

fn star_empire() -> Vec<CardEntry> {
    let f = Faction::StarEmpire;
    vec![
        CardEntry::ship("imperialFighter", f)
            .cost(1)
            .qty(3)
            .with(Ability::primary(gain(Combat, 2)))
            .with(Ability::primary(gain(Discard, 1)).on_opponent())
            .with(Ability::ally(gain(Combat, 2))),
        CardEntry::ship("imperialFrigate", f)
            .cost(1)
            .qty(3)
            .with(Ability::primary(gain(Combat, 4)))
            .with(Ability::primary(gain(Discard, 1)).on_opponent())
            .with(Ability::primary(Effect::draw()).activated(Id::Utilization))
            .with(Ability::ally(gain(Combat, 2))),
        CardEntry::ship("corvette", f)
            .cost(2)
            .qty(2)
            .with(Ability::primary(gain(Combat, 1)))
            .with(Ability::primary(Effect::draw()))
            .with(Ability::ally(gain(Combat, 2))),
        CardEntry::ship("dreadnaught", f)
            .cost(7)
            .with(Ability::primary(gain(Combat, 7)))
            .with(Ability::primary(Effect::draw()))
            .with(Ability::primary(gain(Combat, 5)).activated(Id::Utilization)),
        CardEntry::base("royalRedoubt", f, 6)
            .cost(6)
            .with(Ability::primary(gain(Combat, 3)))
            .with(Ability::ally(gain(Discard, 1)).on_opponent()),
        CardEntry::base("spaceStation", f, 4)
            .cost(4)
            .qty(2)
            .with(Ability::primary(gain(Combat, 2)))
            .with(Ability::ally(gain(Combat, 2)))
            .with(Ability::primary(gain(Trade, 4)).activated(Id::Utilization)),
        CardEntry::ship("surveyShip", f)
            .cost(3)
            .qty(3)
            .with(Ability::primary(gain(Trade, 1)))
            .with(Ability::primary(Effect::draw()))
            .with(Ability::primary(gain(Discard, 1)).on_opponent().activated(Id::Utilization)),
        CardEntry::base("warWorld", f, 4)
            .cost(5)
            .with(Ability::primary(gain(Combat, 3)))
            .with(Ability::ally(gain(Combat, 4))),
        CardEntry::ship("battlecruiser", f)
            .cost(6)
            .with(Ability::primary(gain(Combat, 5)))
            .with(Ability::primary(Effect::draw()))
            .with(
                Ability::primary(Effect::batch([Effect::draw(), ask(ActionCode::DestroyBaseForFree)]))
                    .activated(Id::Utilization),
            )
            .with(Ability::ally(gain(Discard, 1)).on_opponent()),
        CardEntry::base("recyclingStation", f, 4)
            .cost(4)
            .qty(2)
            .with(Ability::primary(ask(ActionCode::ActivateRecyclingStation)).activated(Id::RecyclingStation)),
        CardEntry::base("fleetHQ", f, 8)
            .cost(8)
            .with(Ability::primary(Effect::set(FleetBonus, 1))),
    ]
}

fn machine_cult() -> Vec<CardEntry> {
    let f = Faction::MachineCult;
    vec![
        CardEntry::ship("battleMech", f)
            .cost(5)
            .with(Ability::before_play(ask(ActionCode::ScrapCard)))
            .with(Ability::primary(gain(Combat, 4)))
            .with(Ability::ally(Effect::draw())),
        CardEntry::ship("missileBot", f)
            .cost(2)
            .qty(3)
            .with(Ability::before_play(ask(ActionCode::ScrapCard)))
            .with(Ability::primary(gain(Combat, 2)))
            .with(Ability::ally(gain(Combat, 2))),
        CardEntry::ship("supplyBot", f)
            .cost(3)
            .qty(3)
            .with(Ability::before_play(ask(ActionCode::ScrapCard)))
            .with(Ability::primary(gain(Trade, 2)))
            .with(Ability::ally(gain(Combat, 2))),
        CardEntry::ship("tradeBot", f)
            .cost(1)
            .qty(3)
            .with(Ability::before_play(ask(ActionCode::ScrapCard)))
            .with(Ability::primary(gain(Trade, 1)))
            .with(Ability::ally(gain(Combat, 2))),
        CardEntry::ship("missileMech", f)
            .cost(6)
            .with(Ability::before_play(ask(ActionCode::DestroyBaseForFree)))
            .with(Ability::primary(gain(Combat, 6)))
            .with(Ability::ally(Effect::draw())),
        CardEntry::ship("patrolMech", f)
            .cost(4)
            .qty(2)
            .with(Ability::primary(ask(ActionCode::ActivateAbility)))
            .with(
                Ability::primary(Effect::batch([
                    gain(Trade, 3),
                    Effect::DisableAbility(Id::PatrolMechCombat),
                    ask(ActionCode::None),
                ]))
                .activated(Id::PatrolMechTrade),
            )
            .with(
                Ability::primary(Effect::batch([
                    gain(Combat, 5),
                    Effect::DisableAbility(Id::PatrolMechTrade),
                    ask(ActionCode::None),
                ]))
                .activated(Id::PatrolMechCombat),
            )
            .with(Ability::ally(ask(ActionCode::ScrapCard)).activated(Id::PatrolMechScrap)),
        CardEntry::ship("stealthNeedle", f)
            .cost(4)
            .with(Ability::primary(ask(ActionCode::ActivateNeedle))),
        CardEntry::base("junkyard", f, 5)
            .cost(6)
            .with(Ability::primary(ask(ActionCode::ScrapCard)).activated(Id::Junkyard)),
        CardEntry::base("machineBase", f, 6)
            .cost(7)
            .with(
                Ability::primary(Effect::batch([Effect::draw(), ask(ActionCode::ScrapCardInHand)]))
                    .activated(Id::MachineBase),
            ),
        CardEntry::base("brainWorld", f, 6)
            .cost(8)
            .with(Ability::primary(ask(ActionCode::ActivateBrainWorld)).activated(Id::BrainWorld)),
        CardEntry::base("mechWorld", f, 6)
            .cost(5)
            .with(Ability::primary(ask(ActionCode::ActivateMechWorld))),
    ]
}

fn trade_federation() -> Vec<CardEntry> {
    let f = Faction::TradeFederation;
    vec![
        CardEntry::ship("federationShuttle", f)
            .cost(1)
            .qty(3)
            .with(Ability::primary(gain(Trade, 2)))
            .with(Ability::ally(gain(Authority, 4))),
        CardEntry::ship("cutter", f)
            .cost(2)
            .qty(3)
            .with(Ability::primary(gain(Trade, 2)))
            .with(Ability::primary(gain(Authority, 4)))
            .with(Ability::ally(gain(Combat, 4))),
        CardEntry::ship("tradeEscort", f)
            .cost(5)
            .with(Ability::primary(gain(Combat, 4)))
            .with(Ability::primary(gain(Authority, 4)))
            .with(Ability::ally(Effect::draw())),
        CardEntry::ship("flagship", f)
            .cost(6)
            .with(Ability::primary(gain(Combat, 5)))
            .with(Ability::primary(Effect::draw()))
            .with(Ability::ally(gain(Authority, 5))),
        CardEntry::ship("commandShip", f)
            .cost(8)
            .with(Ability::primary(gain(Combat, 5)))
            .with(Ability::primary(gain(Authority, 4)))
            .with(Ability::primary(Effect::DrawCards(2)))
            .with(
                Ability::ally(ask(ActionCode::DestroyBaseForFree)).activated(Id::CommandShipDestroyBase),
            ),
        CardEntry::base("tradingPost", f, 4)
            .cost(3)
            .qty(2)
            .with(
                Ability::primary(either(gain(Authority, 1), Id::TradingPostTrade))
                    .activated(Id::TradingPostAuthority),
            )
            .with(
                Ability::primary(either(gain(Trade, 1), Id::TradingPostAuthority))
                    .activated(Id::TradingPostTrade),
            )
            .with(Ability::primary(gain(Combat, 3)).activated(Id::Utilization)),
        CardEntry::base("barterWorld", f, 4)
            .cost(4)
            .qty(2)
            .with(
                Ability::primary(either(gain(Authority, 2), Id::BarterWorldTrade))
                    .activated(Id::BarterWorldAuthority),
            )
            .with(
                Ability::primary(either(gain(Trade, 2), Id::BarterWorldAuthority))
                    .activated(Id::BarterWorldTrade),
            )
            .with(Ability::primary(gain(Combat, 5)).activated(Id::Utilization)),
        CardEntry::base("defenseCenter", f, 5)
            .cost(5)
            .with(
                Ability::primary(either(gain(Authority, 3), Id::DefenseCenterCombat))
                    .activated(Id::DefenseCenterAuthority),
            )
            .with(
                Ability::primary(either(gain(Combat, 2), Id::DefenseCenterAuthority))
                    .activated(Id::DefenseCenterCombat),
            )
            .with(Ability::ally(gain(Combat, 2))),
        CardEntry::base("portOfCall", f, 6)
            .cost(6)
            .with(Ability::primary(gain(Trade, 3)))
            .with(
                Ability::primary(Effect::batch([Effect::draw(), ask(ActionCode::DestroyBaseForFree)]))
                    .activated(Id::Utilization),
            ),
        CardEntry::ship("freighter", f)
            .cost(4)
            .qty(2)
            .with(Ability::primary(gain(Trade, 4)))
            .with(Ability::ally(gain(ShipsOnTop, 1))),
        CardEntry::base("centralOffice", f, 6)
            .cost(7)
            .with(Ability::primary(gain(Trade, 2)))
            .with(Ability::primary(gain(ShipsOnTop, 1)))
            .with(Ability::ally(Effect::draw())),
        CardEntry::ship("embassyYacht", f)
            .cost(3)
            .qty(2)
            .with(Ability::primary(gain(Trade, 2)))
            .with(Ability::primary(gain(Authority, 3)))
            .with(Ability::primary(Effect::Custom(CustomEffect::DrawIfBases { bases: 2, draw: 2 }))),
    ]
}

impl Catalog {
    /// Build the standard card set.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Catalog::new();
        for entry in unaligned()
            .into_iter()
            .chain(blob())
            .chain(star_empire())
            .chain(machine_cult())
            .chain(trade_federation())
        {
            catalog.register(entry);
        }
        catalog
    }
}
