//! Rules engine integration tests.
//!
//! Each test builds a small hand-made position, runs one or more actions
//! through the engine, and applies the resulting mutations to check the
//! board afterwards.

use star_realms_engine::cards::{AbilityId, Faction, InstanceId};
use star_realms_engine::core::{
    ActionCode, ActionRequest, Counter, EngineError, ErrorKind, GameState, Mutation, Operation, PlayerId,
    ShuffleSource,
};
use star_realms_engine::rules::{Resolution, RulesEngine};
use star_realms_engine::zones::Location;

const P1: PlayerId = PlayerId::FIRST;
const P2: PlayerId = PlayerId::SECOND;

fn id(key: &str, n: u32) -> InstanceId {
    InstanceId::new(key, n)
}

fn position(cards: &[(&str, u32, Location)]) -> GameState {
    let mut state = GameState::new(50);
    for (key, n, location) in cards {
        state.cards.place(id(key, *n), *location);
    }
    state
}

/// Leave `player` owing an answer to `action`, as if `card` had asked.
fn prompt(state: &mut GameState, player: PlayerId, action: ActionCode, card: Option<InstanceId>) {
    state.action_requests[player] = ActionRequest { action, card_id: card };
}

fn apply(state: &mut GameState, resolution: &Resolution) {
    let mut source = ShuffleSource::from_seed(Some(7));
    for mutation in &resolution.mutations {
        state.apply(mutation.clone(), &mut source).unwrap();
    }
}

/// Handle `action` and apply the result, asserting it was accepted.
fn act(engine: &mut RulesEngine, state: &mut GameState, player: PlayerId, action: &str) -> Resolution {
    let resolution = engine.handle(action, player, state);
    assert!(resolution.is_accepted(), "{action} rejected: {:?}", resolution.error());
    apply(state, &resolution);
    resolution
}

/// Handle `action`, asserting it was rejected with only a refresh.
fn reject(engine: &mut RulesEngine, state: &GameState, player: PlayerId, action: &str) -> EngineError {
    let resolution = engine.handle(action, player, state);
    assert_eq!(resolution.mutations, vec![Mutation::GetState], "{action}");
    resolution.outcome.unwrap_err()
}

// =============================================================================
// Scenarios
// =============================================================================

/// Test that playing a scout moves it to the table and grants trade.
#[test]
fn test_basic_play() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[("scout", 1, Location::FirstPlayerHand)]);

    act(&mut engine, &mut state, P1, "1,scout_1");

    assert_eq!(state.cards.location_of(&id("scout", 1)), Some(Location::FirstPlayerTable));
    assert_eq!(state.counters(P1).trade, 1);
}

/// Test that buying from the trade row pays and refills the row.
#[test]
fn test_buy_and_refill() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("ram", 1, Location::TradeRow),
        ("cutter", 1, Location::TradeDeck),
    ]);
    state.counters[P1].trade = 3;

    act(&mut engine, &mut state, P1, "4,ram_1");

    assert_eq!(state.cards.location_of(&id("ram", 1)), Some(Location::FirstPlayerDiscard));
    assert_eq!(state.counters(P1).trade, 0);
    assert_eq!(state.cards.location_of(&id("cutter", 1)), Some(Location::TradeRow));
}

/// Test that ending the turn prompts a discard when the opponent owes one.
#[test]
fn test_end_with_pending_discard() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[("viper", 1, Location::FirstPlayerTable)]);
    state.counters[P2].discard = 2;

    act(&mut engine, &mut state, P1, "2");

    assert_eq!(state.request(P2).action, ActionCode::DiscardCard);
    assert_eq!(state.turn, P2);
}

// =============================================================================
// Turn flow
// =============================================================================

/// Test the full end-of-turn cleanup.
#[test]
fn test_end_cleans_up_and_draws() {
    let mut engine = RulesEngine::standard();
    let mut cards: Vec<(&str, u32, Location)> = (1..=6).map(|n| ("scout", n, Location::FirstPlayerDeck)).collect();
    cards.push(("viper", 1, Location::FirstPlayerTable));
    let mut state = position(&cards);
    state.counters[P1].trade = 4;
    state.counters[P1].fleet_bonus = 1;
    state.counters[P1].blobs = 2;

    act(&mut engine, &mut state, P1, "End");

    assert_eq!(state.cards.location_of(&id("viper", 1)), Some(Location::FirstPlayerDiscard));
    assert_eq!(state.cards.count_in(Location::FirstPlayerHand), 5);
    assert_eq!(state.counters(P1).trade, 0);
    assert_eq!(state.counters(P1).fleet_bonus, 0);
    assert_eq!(state.counters(P1).blobs, 0);
    assert_eq!(state.request(P2).action, ActionCode::Start);
    assert_eq!(state.request(P1).action, ActionCode::None);
    assert!(state.activated_abilities.is_empty());
}

/// Test that drawing past the deck recycles the discard pile.
#[test]
fn test_end_reshuffles_discard_into_deck() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("scout", 1, Location::FirstPlayerDeck),
        ("scout", 2, Location::FirstPlayerDiscard),
        ("scout", 3, Location::FirstPlayerDiscard),
    ]);

    act(&mut engine, &mut state, P1, "2");

    // Three cards exist, so the five draws stop after three.
    assert_eq!(state.cards.count_in(Location::FirstPlayerHand), 3);
    assert_eq!(state.cards.count_in(Location::FirstPlayerDeck), 0);
}

/// Test that discarding counts down and the last discard prompts Start.
#[test]
fn test_discard_obligation() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("scout", 1, Location::SecondPlayerHand),
        ("scout", 2, Location::SecondPlayerHand),
    ]);
    state.turn = P2;
    state.counters[P2].discard = 2;

    act(&mut engine, &mut state, P2, "8,scout_1");
    assert_eq!(state.counters(P2).discard, 1);
    assert_ne!(state.request(P2).action, ActionCode::Start);

    act(&mut engine, &mut state, P2, "8,scout_2");
    assert_eq!(state.counters(P2).discard, 0);
    assert_eq!(state.request(P2).action, ActionCode::Start);

    let err = reject(&mut engine, &state, P2, "8,scout_1");
    assert_eq!(err.kind(), ErrorKind::RuleViolation);
}

/// Test that Start fires bases and prompts nothing when they ask nothing.
#[test]
fn test_start_fires_bases() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[("blobWheel", 1, Location::FirstPlayerBases)]);

    let resolution = act(&mut engine, &mut state, P1, "6");

    assert_eq!(state.counters(P1).combat, 1);
    assert!(state.is_ability_enabled(&id("blobWheel", 1), AbilityId::Utilization));
    assert!(resolution.mutations.contains(&Mutation::request(P1, ActionCode::None, None)));
}

/// Test that a base prompt at Start is not overwritten by the default prompt.
#[test]
fn test_start_keeps_base_prompt() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[("mechWorld", 1, Location::FirstPlayerBases)]);

    act(&mut engine, &mut state, P1, "Start");

    assert_eq!(state.request(P1).action, ActionCode::ActivateMechWorld);
    assert_eq!(state.request(P1).card_id, Some(id("mechWorld", 1)));
}

// =============================================================================
// Allies
// =============================================================================

/// Test that the first card of a faction catches up once a second arrives.
#[test]
fn test_ally_catch_up() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("tradePod", 1, Location::FirstPlayerHand),
        ("ram", 1, Location::FirstPlayerHand),
        ("blobFighter", 1, Location::FirstPlayerHand),
        ("scout", 1, Location::FirstPlayerDeck),
    ]);

    act(&mut engine, &mut state, P1, "1,tradePod_1");
    assert_eq!(state.counters(P1).combat, 0);

    // ram 5, its own ally 2, tradePod's queued ally 2.
    act(&mut engine, &mut state, P1, "1,ram_1");
    assert_eq!(state.counters(P1).combat, 9);

    // blobFighter 3 plus its own ally draw; nothing queued any more.
    act(&mut engine, &mut state, P1, "1,blobFighter_1");
    assert_eq!(state.counters(P1).combat, 12);
    assert_eq!(state.cards.location_of(&id("scout", 1)), Some(Location::FirstPlayerHand));
    assert_eq!(state.counters(P1).blobs, 3);
}

/// Test that scrapping the last card of a faction takes its ally bonus away.
#[test]
fn test_utilize_revokes_ally() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("ram", 1, Location::FirstPlayerHand),
        ("tradePod", 1, Location::FirstPlayerHand),
    ]);

    act(&mut engine, &mut state, P1, "1,ram_1");
    act(&mut engine, &mut state, P1, "5,ram_1");
    assert_eq!(state.cards.location_of(&id("ram", 1)), Some(Location::ScrapHeap));
    assert_eq!(state.counters(P1).trade, 3);

    act(&mut engine, &mut state, P1, "1,tradePod_1");
    assert_eq!(state.counters(P1).combat, 5);
    assert_eq!(state.counters(P1).trade, 6);
}

/// Test that Mech World flushes queued ally abilities.
#[test]
fn test_mech_world_unlocks_allies() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[("tradePod", 1, Location::FirstPlayerHand)]);

    act(&mut engine, &mut state, P1, "1,tradePod_1");
    prompt(&mut state, P1, ActionCode::ActivateMechWorld, Some(id("mechWorld", 1)));
    act(&mut engine, &mut state, P1, "17");

    assert_eq!(state.counters(P1).combat, 2);
    assert_eq!(state.request(P1).action, ActionCode::None);
}

// =============================================================================
// Activated abilities
// =============================================================================

/// Test that choosing one patrol mech mode disables the other.
#[test]
fn test_sibling_abilities_are_exclusive() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[("patrolMech", 1, Location::FirstPlayerHand)]);

    act(&mut engine, &mut state, P1, "1,patrolMech_1");
    assert_eq!(state.request(P1).action, ActionCode::ActivateAbility);
    assert!(state.is_ability_enabled(&id("patrolMech", 1), AbilityId::PatrolMechCombat));

    act(&mut engine, &mut state, P1, "9,patrolMech_1,PatrolMechTrade");
    assert_eq!(state.counters(P1).trade, 3);
    assert!(!state.is_ability_enabled(&id("patrolMech", 1), AbilityId::PatrolMechTrade));
    assert!(!state.is_ability_enabled(&id("patrolMech", 1), AbilityId::PatrolMechCombat));

    let err = reject(&mut engine, &state, P1, "9,patrolMech_1,3");
    assert_eq!(err.kind(), ErrorKind::RuleViolation);
}

/// Test that an unknown ability name is an invalid pointer.
#[test]
fn test_unknown_ability() {
    let mut engine = RulesEngine::standard();
    let state = position(&[("patrolMech", 1, Location::FirstPlayerTable)]);

    let err = reject(&mut engine, &state, P1, "9,patrolMech_1,Warp");
    assert_eq!(err.kind(), ErrorKind::InvalidPointer);
}

// =============================================================================
// Deferred before-play
// =============================================================================

/// Test that a before-play card waits for its prompt to be answered.
#[test]
fn test_before_play_defers_abilities() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("battlePod", 1, Location::FirstPlayerHand),
        ("ram", 1, Location::TradeRow),
        ("cutter", 1, Location::TradeDeck),
    ]);

    act(&mut engine, &mut state, P1, "1,battlePod_1");
    assert_eq!(state.request(P1).action, ActionCode::ScrapCardTradeRow);
    assert_eq!(state.counters(P1).combat, 0);

    let resolution = act(&mut engine, &mut state, P1, "11,ram_1");
    assert_eq!(resolution.mutations[0], Mutation::ResetActionLog);
    assert_eq!(
        resolution.mutations[1],
        Mutation::counter(P1, Counter::Combat, Operation::Increase, 4)
    );
    assert_eq!(state.counters(P1).combat, 4);
    assert_eq!(state.cards.location_of(&id("ram", 1)), Some(Location::ScrapHeap));
    assert_eq!(state.cards.location_of(&id("cutter", 1)), Some(Location::TradeRow));
    assert_eq!(state.request(P1).action, ActionCode::None);
}

/// Test that declining the before-play prompt still resolves the card.
#[test]
fn test_before_play_declined() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[("missileBot", 1, Location::FirstPlayerHand)]);

    act(&mut engine, &mut state, P1, "1,missileBot_1");
    act(&mut engine, &mut state, P1, "10");

    assert_eq!(state.counters(P1).combat, 2);
}

// =============================================================================
// Buying
// =============================================================================

/// Test that ships go on top of the deck while the flag is up.
#[test]
fn test_buy_ship_on_top() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("scout", 1, Location::FirstPlayerDeck),
        ("cutter", 1, Location::TradeRow),
        ("tradingPost", 1, Location::TradeRow),
    ]);
    state.counters[P1].trade = 10;
    state.counters[P1].ships_on_top = 1;

    act(&mut engine, &mut state, P1, "4,cutter_1");
    assert_eq!(state.cards.top_of(Location::FirstPlayerDeck), Some(id("cutter", 1)));
    assert_eq!(state.counters(P1).ships_on_top, 0);

    act(&mut engine, &mut state, P1, "4,tradingPost_1");
    assert_eq!(state.cards.location_of(&id("tradingPost", 1)), Some(Location::FirstPlayerDiscard));
    assert_eq!(state.counters(P1).trade, 5);
}

/// Test that explorers never refill the trade row.
#[test]
fn test_buy_explorer() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("explorer", 1, Location::Explorers),
        ("cutter", 1, Location::TradeDeck),
    ]);
    state.counters[P1].trade = 2;

    let resolution = act(&mut engine, &mut state, P1, "4,explorer_1");

    assert!(!resolution.mutations.iter().any(|m| matches!(m, Mutation::TopCard { .. })));
    assert_eq!(state.cards.location_of(&id("cutter", 1)), Some(Location::TradeDeck));
    assert_eq!(state.counters(P1).trade, 0);
}

/// Test that cards outside the market cannot be bought.
#[test]
fn test_buy_outside_market() {
    let mut engine = RulesEngine::standard();
    let state = position(&[("ram", 1, Location::SecondPlayerHand)]);

    let err = reject(&mut engine, &state, P1, "4,ram_1");
    assert_eq!(err.kind(), ErrorKind::RuleViolation);
}

// =============================================================================
// Combat
// =============================================================================

/// Test that damage spends combat and lowers opposing authority.
#[test]
fn test_damage() {
    let mut engine = RulesEngine::standard();
    let mut state = GameState::new(50);
    state.counters[P1].combat = 8;

    act(&mut engine, &mut state, P1, "3,8");

    assert_eq!(state.counters(P2).authority, 42);
    assert_eq!(state.counters(P1).combat, 0);
}

/// Test paid base destruction and the ship check.
#[test]
fn test_destroy_base() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("tradingPost", 1, Location::SecondPlayerBases),
        ("viper", 1, Location::SecondPlayerTable),
    ]);
    state.counters[P1].combat = 5;

    let err = reject(&mut engine, &state, P1, "7,viper_1");
    assert_eq!(err.kind(), ErrorKind::RuleViolation);

    act(&mut engine, &mut state, P1, "7,tradingPost_1");
    assert_eq!(state.counters(P1).combat, 1);
    assert_eq!(state.cards.location_of(&id("tradingPost", 1)), Some(Location::SecondPlayerDiscard));
}

/// Test the blob destroyer's two optional parts.
#[test]
fn test_blob_destroyer() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("warWorld", 1, Location::SecondPlayerBases),
        ("ram", 1, Location::TradeRow),
        ("cutter", 1, Location::TradeDeck),
    ]);
    prompt(&mut state, P1, ActionCode::DestroyBaseBlobDestroyer, Some(id("blobDestroyer", 1)));

    act(&mut engine, &mut state, P1, "15,warWorld_1,ram_1");

    assert_eq!(state.cards.location_of(&id("warWorld", 1)), Some(Location::SecondPlayerDiscard));
    assert_eq!(state.cards.location_of(&id("ram", 1)), Some(Location::ScrapHeap));
    assert_eq!(state.cards.location_of(&id("cutter", 1)), Some(Location::TradeRow));

    assert_eq!(state.request(P1).action, ActionCode::None);

    // The prompt is answered; a second answer is refused.
    let err = reject(&mut engine, &state, P1, "15");
    assert_eq!(err.kind(), ErrorKind::RuleViolation);
}

// =============================================================================
// Faction specials
// =============================================================================

/// Test that Brain World scraps and draws the same number of cards.
#[test]
fn test_brain_world() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("scout", 1, Location::FirstPlayerHand),
        ("viper", 1, Location::FirstPlayerDiscard),
        ("scout", 2, Location::FirstPlayerDeck),
        ("scout", 3, Location::FirstPlayerDeck),
    ]);
    prompt(&mut state, P1, ActionCode::ActivateBrainWorld, Some(id("brainWorld", 1)));

    let err = reject(&mut engine, &state, P1, "16,scout_1,scout_1");
    assert_eq!(err.kind(), ErrorKind::RuleViolation);

    act(&mut engine, &mut state, P1, "16,scout_1,viper_1");
    assert_eq!(state.cards.count_in(Location::ScrapHeap), 2);
    assert_eq!(state.cards.count_in(Location::FirstPlayerHand), 2);
}

/// Test that the recycling station cycles cards through the discard pile.
#[test]
fn test_recycling_station() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("scout", 1, Location::FirstPlayerHand),
        ("scout", 2, Location::FirstPlayerDeck),
    ]);
    prompt(&mut state, P1, ActionCode::ActivateRecyclingStation, Some(id("recyclingStation", 1)));

    act(&mut engine, &mut state, P1, "18,scout_1");

    assert_eq!(state.cards.location_of(&id("scout", 1)), Some(Location::FirstPlayerDiscard));
    assert_eq!(state.cards.location_of(&id("scout", 2)), Some(Location::FirstPlayerHand));
}

/// Test that a free acquisition lands on top of the deck.
#[test]
fn test_acquire_ship_for_free() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("ram", 1, Location::TradeRow),
        ("cutter", 1, Location::TradeDeck),
    ]);
    prompt(&mut state, P1, ActionCode::AcquireShipForFree, Some(id("blobCarrier", 1)));

    act(&mut engine, &mut state, P1, "14,ram_1");

    assert_eq!(state.cards.top_of(Location::FirstPlayerDeck), Some(id("ram", 1)));
    assert_eq!(state.cards.location_of(&id("cutter", 1)), Some(Location::TradeRow));
    assert_eq!(state.counters(P1).trade, 0);
}

/// Test that the stealth needle behaves as the ship it copies.
#[test]
fn test_stealth_needle() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("stealthNeedle", 1, Location::FirstPlayerHand),
        ("ram", 1, Location::FirstPlayerTable),
    ]);

    act(&mut engine, &mut state, P1, "1,stealthNeedle_1");
    assert_eq!(state.request(P1).action, ActionCode::ActivateNeedle);
    assert_eq!(state.request(P1).card_id, Some(id("stealthNeedle", 1)));

    let err = reject(&mut engine, &state, P1, "19,stealthNeedle_1");
    assert_eq!(err.kind(), ErrorKind::RuleViolation);

    act(&mut engine, &mut state, P1, "19,ram_1");
    assert_eq!(state.counters(P1).combat, 5);
    assert!(state.is_ability_enabled(&id("stealthNeedle", 1), AbilityId::Utilization));

    act(&mut engine, &mut state, P1, "5,stealthNeedle_1");
    assert_eq!(state.counters(P1).trade, 3);
    assert_eq!(state.cards.location_of(&id("stealthNeedle", 1)), Some(Location::ScrapHeap));
}

/// Test that a copied ship's before-play prompt is asked before its abilities resolve.
#[test]
fn test_stealth_needle_copies_before_play() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("stealthNeedle", 1, Location::FirstPlayerHand),
        ("battlePod", 1, Location::FirstPlayerTable),
        ("ram", 1, Location::TradeRow),
        ("cutter", 1, Location::TradeDeck),
    ]);

    act(&mut engine, &mut state, P1, "1,stealthNeedle_1");
    act(&mut engine, &mut state, P1, "19,battlePod_1");
    assert_eq!(state.request(P1).action, ActionCode::ScrapCardTradeRow);
    assert_eq!(state.request(P1).card_id, Some(id("stealthNeedle", 1)));
    assert_eq!(state.counters(P1).combat, 0);

    act(&mut engine, &mut state, P1, "11,ram_1");
    assert_eq!(state.counters(P1).combat, 4);
    assert_eq!(state.cards.location_of(&id("ram", 1)), Some(Location::ScrapHeap));
    assert_eq!(state.cards.location_of(&id("cutter", 1)), Some(Location::TradeRow));
}

/// Test that Fleet HQ's bonus applies to ships only.
#[test]
fn test_fleet_bonus() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("fleetHQ", 1, Location::FirstPlayerHand),
        ("viper", 1, Location::FirstPlayerHand),
    ]);

    act(&mut engine, &mut state, P1, "1,fleetHQ_1");
    assert_eq!(state.counters(P1).fleet_bonus, 1);

    act(&mut engine, &mut state, P1, "1,viper_1");
    assert_eq!(state.counters(P1).combat, 2);
}

// =============================================================================
// Rejections
// =============================================================================

/// Test that malformed and misdirected input is rejected without effect.
#[test]
fn test_rejections() {
    let mut engine = RulesEngine::standard();
    let state = position(&[("scout", 1, Location::FirstPlayerHand)]);

    assert!(matches!(reject(&mut engine, &state, P1, ""), EngineError::MalformedAction(_)));
    assert!(matches!(reject(&mut engine, &state, P1, "42"), EngineError::UnknownAction(_)));
    assert!(matches!(reject(&mut engine, &state, P1, "1"), EngineError::MissingArgument { .. }));
    assert!(matches!(reject(&mut engine, &state, P1, "1,warpGate_1"), EngineError::InvalidCard(_)));
    assert!(matches!(reject(&mut engine, &state, P1, "3,-4"), EngineError::InvalidArgument { .. }));
    assert_eq!(reject(&mut engine, &state, P2, "1,scout_1").kind(), ErrorKind::RuleViolation);
}

/// Test that prompt answers are refused when nothing asked for them.
#[test]
fn test_unprompted_answers() {
    let mut engine = RulesEngine::standard();
    let state = position(&[
        ("scout", 1, Location::FirstPlayerHand),
        ("tradingPost", 1, Location::SecondPlayerBases),
        ("ram", 1, Location::TradeRow),
    ]);

    let answers = [
        "10,scout_1",
        "11,ram_1",
        "12,scout_1",
        "13,tradingPost_1",
        "14,ram_1",
        "15",
        "16",
        "17",
        "18",
        "19,scout_1",
    ];
    for action in answers {
        let err = reject(&mut engine, &state, P1, action);
        assert_eq!(err.kind(), ErrorKind::RuleViolation, "{action}");
    }
    assert!(!engine.allies().is_unlocked(Faction::Blob));
}

/// Test that a prompt only admits the code it asked for.
#[test]
fn test_prompt_admits_only_its_code() {
    let mut engine = RulesEngine::standard();
    let mut state = position(&[
        ("scout", 1, Location::FirstPlayerHand),
        ("scout", 2, Location::FirstPlayerDeck),
    ]);
    prompt(&mut state, P1, ActionCode::ScrapCardInHand, Some(id("machineBase", 1)));

    let err = reject(&mut engine, &state, P1, "16,scout_1");
    assert_eq!(err.kind(), ErrorKind::RuleViolation);

    act(&mut engine, &mut state, P1, "12,scout_1");
    assert_eq!(state.cards.location_of(&id("scout", 1)), Some(Location::ScrapHeap));
    assert_eq!(state.request(P1).action, ActionCode::None);
}

/// Test that None from either player is a plain refresh.
#[test]
fn test_none_from_idle_player() {
    let mut engine = RulesEngine::standard();
    let state = GameState::new(50);

    let resolution = engine.handle("0", P2, &state);

    assert!(resolution.is_accepted());
    assert_eq!(resolution.mutations, vec![Mutation::GetState]);
}
