//! End-to-end gameplay scenarios on hand-built arenas

use gear_core::action::{Command, Direction};
use gear_core::combat::{self, AttackOutcome};
use gear_core::dungeon::{GeneratedLevel, Grid, Tile};
use gear_core::entity::{Ai, Color, DeathKind, Entity, EntityId, Fighter, Position, RenderLayer};
use gear_core::interface::{
    Display, Input, InputEvent, InventoryPurpose, ScriptedInput, TargetChoice, TargetRequest,
};
use gear_core::message::Tone;
use gear_core::monster::MonsterKind;
use gear_core::object::ItemKind;
use gear_core::world::GameOptions;
use gear_core::{GameLoop, GameLoopResult, GamePhase, GameRng, GameState};
use proptest::prelude::*;

fn arena(seed: u64) -> GameState {
    let grid = Grid::filled(20, 20, Tile::floor());
    let level = GeneratedLevel::from_grid(grid, Position::new(5, 5), Position::new(18, 18));
    GameState::with_level(GameOptions::default(), GameRng::new(seed), level)
}

fn brute(pos: Position, power: i32, defense: i32) -> Entity {
    Entity::new(pos, 'B', "brute", Color::LightGrey)
        .blocking()
        .with_fighter(Fighter::new(20, defense, power, DeathKind::Monster))
        .with_ai(Ai::Basic)
}

fn death_messages(state: &GameState) -> usize {
    state.messages.iter().filter(|m| m.tone == Tone::Death).count()
}

#[test]
fn power_six_against_defense_two_deals_four() {
    let mut state = arena(1);
    let id = state.entities.insert(brute(Position::new(6, 5), 6, 0));
    let player = state.player;

    let outcome = combat::attack_with_luck(&mut state, id, player, 0);
    assert_eq!(
        outcome,
        AttackOutcome::Hit {
            damage: 4,
            killed: false
        }
    );
    assert_eq!(state.player_fighter().unwrap().hp, 26);
}

#[test]
fn blocked_blow_changes_nothing() {
    let mut state = arena(1);
    let id = state.entities.insert(brute(Position::new(6, 5), 6, 9));
    let player = state.player;

    let outcome = combat::attack_with_luck(&mut state, player, id, 3);
    assert_eq!(outcome, AttackOutcome::NoEffect);
    assert_eq!(state.entities.get(id).unwrap().fighter.unwrap().hp, 20);
    assert!(state.messages.contains("but it has no effect!"));
}

#[test]
fn full_inventory_rejects_pickup() {
    let mut state = arena(2);
    for _ in 0..26 {
        state
            .inventory
            .push(ItemKind::OilCan.spawn(Position::default()))
            .unwrap();
    }
    let item = state
        .entities
        .insert(ItemKind::CorruptScript.spawn(Position::new(5, 5)));

    let mut game = GameLoop::new(state);
    let mut input = ScriptedInput::default();
    game.tick(Command::PickUp, &mut input);

    let state = game.state();
    assert_eq!(state.inventory.len(), 26);
    assert!(state.entities.contains(item));
    assert_eq!(state.turns, 0);
    assert_eq!(state.messages.last().unwrap().tone, Tone::Warning);
}

#[test]
fn slain_monster_becomes_remains_beneath_the_living() {
    let mut state = arena(3);
    let victim = state
        .entities
        .insert(MonsterKind::BrainInAJar.spawn(Position::new(6, 5)));
    let item = state
        .entities
        .insert(ItemKind::OilCan.spawn(Position::new(6, 5)));

    assert!(combat::take_damage(&mut state, victim, 8));

    let remains = state.entities.get(victim).unwrap();
    assert_eq!(remains.glyph, '%');
    assert!(remains.name.starts_with("remains of "));
    let order: Vec<EntityId> = state.entities.draw_order().iter().map(|e| e.id).collect();
    let remains_at = order.iter().position(|&id| id == victim).unwrap();
    let item_at = order.iter().position(|&id| id == item).unwrap();
    assert!(remains_at < item_at);
    assert_eq!(remains.layer, RenderLayer::Floor);

    // the corpse no longer blocks or fights back
    let mut game = GameLoop::new(state);
    let mut input = ScriptedInput::default();
    game.tick(Command::Move(Direction::East), &mut input);
    assert_eq!(game.state().player_pos(), Position::new(6, 5));
}

#[test]
fn player_death_happens_once_and_ends_play() {
    let mut state = arena(4);
    let player = state.player;
    {
        let fighter = state
            .entities
            .get_mut(player)
            .and_then(|e| e.fighter.as_mut())
            .unwrap();
        fighter.hp = 1;
    }
    state.entities.insert(brute(Position::new(6, 5), 40, 0));
    state.entities.insert(brute(Position::new(4, 5), 40, 0));

    let mut game = GameLoop::new(state);
    let mut input = ScriptedInput::default();
    assert_eq!(game.tick(Command::Wait, &mut input), GameLoopResult::PlayerDied);
    assert_eq!(game.state().phase, GamePhase::Dead);
    assert_eq!(death_messages(game.state()), 1);

    // nothing else happens until the player leaves
    assert_eq!(game.tick(Command::Wait, &mut input), GameLoopResult::Continue);
    assert_eq!(death_messages(game.state()), 1);
    assert_eq!(game.tick(Command::Exit, &mut input), GameLoopResult::Quit);
}

#[test]
fn remains_take_no_turns() {
    let mut state = arena(5);
    let id = state
        .entities
        .insert(MonsterKind::ScrapMetal.spawn(Position::new(12, 5)));
    combat::take_damage(&mut state, id, 50);
    assert!(!state.entities.ids_with_ai().contains(&id));

    let mut game = GameLoop::new(state);
    game.tick(Command::Wait, &mut ScriptedInput::default());
    assert_eq!(
        game.state().entities.get(id).unwrap().pos,
        Position::new(12, 5)
    );
}

#[test]
fn glitched_monster_recovers_its_old_mind() {
    let mut state = arena(6);
    let id = state
        .entities
        .insert(MonsterKind::SecurityRobot.spawn(Position::new(8, 5)));
    state.entities.get_mut(id).unwrap().fighter.as_mut().unwrap().hp = 1000;
    state
        .inventory
        .push(ItemKind::GlitchScript.spawn(Position::default()))
        .unwrap();
    state
        .inventory
        .push(ItemKind::GlitchScript.spawn(Position::default()))
        .unwrap();

    let mut game = GameLoop::new(state);
    let mut input = ScriptedInput::default()
        .with_targets([TargetChoice::Entity(id), TargetChoice::Entity(id)]);
    assert_eq!(game.tick(Command::Use('a'), &mut input), GameLoopResult::Continue);
    assert!(game.state().entities.get(id).unwrap().ai.as_ref().unwrap().is_confused());

    // a second dose while still confused
    game.tick(Command::Use('a'), &mut input);
    assert_eq!(game.state().corruption(), 2);

    for _ in 0..40 {
        game.tick(Command::Wait, &mut input);
        if game.state().entities.get(id).unwrap().ai == Some(Ai::Basic) {
            break;
        }
    }
    assert_eq!(game.state().entities.get(id).unwrap().ai, Some(Ai::Basic));
}

#[test]
fn cancelled_targeting_keeps_item_and_turn() {
    let mut state = arena(7);
    state
        .inventory
        .push(ItemKind::AntiMatter.spawn(Position::default()))
        .unwrap();
    let mut game = GameLoop::new(state);
    let mut input = ScriptedInput::default().with_targets([TargetChoice::Cancelled]);
    assert_eq!(game.tick(Command::Use('a'), &mut input), GameLoopResult::Continue);
    assert_eq!(game.state().inventory.len(), 1);
    assert_eq!(game.state().turns, 0);
    assert_eq!(game.state().corruption(), 0);
}

#[derive(Default)]
struct ScriptedFrontend {
    input: ScriptedInput,
    frames: usize,
}

impl Display for ScriptedFrontend {
    fn render(&mut self, _state: &GameState) {
        self.frames += 1;
    }
}

impl Input for ScriptedFrontend {
    fn poll(&mut self) -> InputEvent {
        self.input.poll()
    }

    fn choose_item(&mut self, state: &GameState, purpose: InventoryPurpose) -> Option<char> {
        self.input.choose_item(state, purpose)
    }

    fn poll_target(&mut self, state: &GameState, request: &TargetRequest) -> TargetChoice {
        self.input.poll_target(state, request)
    }
}

#[test]
fn run_plays_until_exit() {
    let mut state = arena(8);
    state
        .entities
        .insert(ItemKind::OilCan.spawn(Position::new(6, 5)));
    let mut frontend = ScriptedFrontend {
        input: ScriptedInput::new([
            InputEvent::Move(Direction::East),
            InputEvent::PickUp,
            InputEvent::None,
            InputEvent::OpenInventoryDrop,
            InputEvent::Exit,
        ])
        .with_items([Some('a')]),
        frames: 0,
    };

    let mut game = GameLoop::new(state);
    assert_eq!(game.run(&mut frontend), GameLoopResult::SaveAndQuit);
    assert_eq!(game.state().turns, 3);
    assert!(game.state().inventory.is_empty());
    assert!(game.state().entities.item_at(Position::new(6, 5)).is_some());
    // one frame per event plus the farewell frame
    assert_eq!(frontend.frames, 6);
}

proptest! {
    #[test]
    fn healing_never_exceeds_max(damage in 0i32..29, amount in 0i32..100) {
        let mut state = arena(9);
        let player = state.player;
        combat::take_damage(&mut state, player, damage);
        combat::heal(&mut state, player, amount);
        let fighter = state.player_fighter().unwrap();
        prop_assert!(fighter.hp <= fighter.max_hp);
        prop_assert_eq!(fighter.hp, (30 - damage + amount).min(30));
    }

    #[test]
    fn death_fires_exactly_once(blows in proptest::collection::vec(1i32..20, 1..10)) {
        let mut state = arena(10);
        let id = state.entities.insert(MonsterKind::ScrapMetal.spawn(Position::new(9, 9)));
        let kills = blows
            .iter()
            .filter(|&&b| combat::take_damage(&mut state, id, b))
            .count();
        let total: i32 = blows.iter().sum();
        prop_assert_eq!(kills, usize::from(total >= 10));
        prop_assert_eq!(state.corruption(), u32::from(total >= 10));
    }
}
