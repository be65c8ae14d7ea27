//! Main game loop
//!
//! [`GameState`] is the whole session; [`GameLoop`] drives it one player
//! command at a time and lets every entity with an Ai react.

use log::{info, trace};
use serde::{Deserialize, Serialize};

use crate::action::{self, ActionResult, Command};
use crate::dungeon::{GeneratedLevel, Grid, generate_level};
use crate::entity::{Entity, EntityId, EntityRegistry, Fighter, Position};
use crate::interface::{Display, Input, InputEvent, InventoryPurpose};
use crate::message::{MessageLog, Tone};
use crate::monster::{self, player_entity};
use crate::object::Inventory;
use crate::rng::GameRng;
use crate::vision::{VisibleSet, compute_fov, mark_explored};
use crate::world::GameOptions;

const WELCOME: &str = "Welcome to the Nexus, brave automaton. Will you learn the secrets of \
                       this place or perish like so many before you?";

const EMPTY_INVENTORY_QUIPS: [&str; 5] = [
    "You are free from the burden of attachment, as your inventory is empty.",
    "Are you sure you know how to loot a dungeon? You have nothing to show for it.",
    "Your inventory could not be more empty than this.",
    "The only things in your inventory are some broken dreams.",
    "I hope you were not counting on finding something useful here.",
];

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// The player died; only exiting is possible
    Dead,
}

/// Outcome of one loop step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// The player died during this step
    PlayerDied,
    /// Exit requested while alive; the session should be saved
    SaveAndQuit,
    /// Exit requested after death; nothing to save
    Quit,
}

fn fov_dirty_on_load() -> bool {
    true
}

/// Main game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current floor, starting at 1
    pub dungeon_level: u32,
    pub messages: MessageLog,
    pub phase: GamePhase,
    pub inventory: Inventory,
    corruption: u32,
    pub grid: Grid,
    pub entities: EntityRegistry,
    pub player: EntityId,
    pub stairs: EntityId,
    pub rng: GameRng,
    pub options: GameOptions,
    /// Turns that consumed time
    pub turns: u64,

    /// Cells in view; rebuilt from the grid, never saved
    #[serde(skip)]
    pub visible: VisibleSet,
    #[serde(skip, default = "fov_dirty_on_load")]
    fov_dirty: bool,
}

impl GameState {
    /// Start a new game on a freshly generated first floor
    pub fn new(options: GameOptions, mut rng: GameRng) -> Self {
        let level = generate_level(&options.generation, &mut rng);
        info!("new game with seed {}", rng.seed());
        Self::with_level(options, rng, level)
    }

    /// Start a new game on a prepared level
    pub fn with_level(options: GameOptions, rng: GameRng, level: GeneratedLevel) -> Self {
        let GeneratedLevel {
            grid,
            mut entities,
            player_start,
            stairs,
            ..
        } = level;
        let player = entities.insert(player_entity(player_start));

        let mut state = Self {
            dungeon_level: 1,
            messages: MessageLog::new(options.message_log_height),
            phase: GamePhase::Playing,
            inventory: Inventory::default(),
            corruption: 0,
            grid,
            entities,
            player,
            stairs,
            rng,
            options,
            turns: 0,
            visible: VisibleSet::new(),
            fov_dirty: true,
        };
        state.message(WELCOME, Tone::Welcome);
        state.refresh_visibility();
        state
    }

    /// Add a message to the log
    pub fn message(&mut self, text: impl Into<String>, tone: Tone) {
        self.messages.push(text, tone);
    }

    pub fn player_entity(&self) -> Option<&Entity> {
        self.entities.get(self.player)
    }

    pub fn player_pos(&self) -> Position {
        self.player_entity().map(|e| e.pos).unwrap_or_default()
    }

    pub fn player_fighter(&self) -> Option<&Fighter> {
        self.player_entity().and_then(|e| e.fighter.as_ref())
    }

    pub fn stairs_pos(&self) -> Option<Position> {
        self.entities.get(self.stairs).map(|e| e.pos)
    }

    pub fn is_dead(&self) -> bool {
        self.phase == GamePhase::Dead
    }

    /// Distortion level
    pub fn corruption(&self) -> u32 {
        self.corruption
    }

    pub fn add_corruption(&mut self, amount: u32) {
        self.corruption = self
            .corruption
            .saturating_add(amount)
            .min(self.options.max_corruption);
    }

    /// Request a field of view recomputation
    pub fn mark_fov_dirty(&mut self) {
        self.fov_dirty = true;
    }

    /// Recompute the field of view if it is stale
    pub fn refresh_visibility(&mut self) {
        if !self.fov_dirty {
            return;
        }
        self.visible = compute_fov(
            &self.grid,
            self.player_pos(),
            self.options.torch_radius,
            self.options.light_walls,
        );
        mark_explored(&mut self.grid, &self.visible);
        self.fov_dirty = false;
    }

    pub fn is_visible(&self, pos: Position) -> bool {
        self.visible.contains(pos)
    }

    /// Names of the visible entities on `pos`, comma separated
    pub fn names_at(&self, pos: Position) -> String {
        if !self.is_visible(pos) {
            return String::new();
        }
        let names: Vec<&str> = self
            .entities
            .entities_at(pos)
            .map(|e| e.name.as_str())
            .collect();
        capitalize(&names.join(", "))
    }

    /// Move the player onto a new level
    pub fn enter_level(&mut self, level: GeneratedLevel) {
        let GeneratedLevel {
            grid,
            mut entities,
            player_start,
            stairs,
            ..
        } = level;

        let mut player = self
            .entities
            .remove(self.player)
            .unwrap_or_else(|| player_entity(player_start));
        player.pos = player_start;
        self.player = entities.insert(player);
        self.grid = grid;
        self.entities = entities;
        self.stairs = stairs;
        self.mark_fov_dirty();
        self.refresh_visibility();
    }
}

/// Uppercase the first character
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Game loop controller
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Play until the player exits
    ///
    /// Renders, polls and resolves events in a loop. Death does not end the
    /// loop; the player looks at the remains and exits.
    pub fn run<F: Display + Input>(&mut self, frontend: &mut F) -> GameLoopResult {
        self.state.refresh_visibility();
        loop {
            frontend.render(&self.state);
            let event = frontend.poll();
            match self.handle_event(event, frontend) {
                GameLoopResult::Continue => {}
                GameLoopResult::PlayerDied => {
                    info!(
                        "player died on floor {} after {} turns",
                        self.state.dungeon_level, self.state.turns
                    );
                }
                exit => {
                    frontend.render(&self.state);
                    return exit;
                }
            }
        }
    }

    /// Translate an input event into a command and run it
    pub fn handle_event(&mut self, event: InputEvent, input: &mut dyn Input) -> GameLoopResult {
        let command = match event {
            InputEvent::Move(dir) => Command::Move(dir),
            InputEvent::Wait => Command::Wait,
            InputEvent::PickUp => Command::PickUp,
            InputEvent::DescendStairs => Command::Descend,
            InputEvent::Exit => Command::Exit,
            InputEvent::OpenInventoryUse => match self.choose_item(InventoryPurpose::Use, input) {
                Some(letter) => Command::Use(letter),
                None => return GameLoopResult::Continue,
            },
            InputEvent::OpenInventoryDrop => {
                match self.choose_item(InventoryPurpose::Drop, input) {
                    Some(letter) => Command::Drop(letter),
                    None => return GameLoopResult::Continue,
                }
            }
            InputEvent::ToggleFullscreen | InputEvent::None => return GameLoopResult::Continue,
        };
        self.tick(command, input)
    }

    fn choose_item(&mut self, purpose: InventoryPurpose, input: &mut dyn Input) -> Option<char> {
        if self.state.is_dead() {
            return None;
        }
        if self.state.inventory.is_empty() {
            let quip = self
                .state
                .rng
                .choose(&EMPTY_INVENTORY_QUIPS)
                .copied()
                .unwrap_or(EMPTY_INVENTORY_QUIPS[0]);
            self.state.message(quip, Tone::Warning);
            return None;
        }
        input.choose_item(&self.state, purpose)
    }

    /// Execute a single player command and, if it took time, the monster pass
    pub fn tick(&mut self, command: Command, input: &mut dyn Input) -> GameLoopResult {
        if self.state.is_dead() {
            return match command {
                Command::Exit => GameLoopResult::Quit,
                _ => GameLoopResult::Continue,
            };
        }

        match self.execute_command(command, input) {
            ActionResult::Success => {}
            ActionResult::NoTime | ActionResult::Cancelled => {
                self.state.refresh_visibility();
                return GameLoopResult::Continue;
            }
            ActionResult::Failed(msg) => {
                self.state.message(msg, Tone::Warning);
                return GameLoopResult::Continue;
            }
            ActionResult::Save => return GameLoopResult::SaveAndQuit,
        }

        self.state.turns += 1;
        // monsters decide against what the player sees after moving
        self.state.refresh_visibility();

        if !self.state.is_dead() {
            self.move_monsters();
        }

        if self.state.is_dead() {
            GameLoopResult::PlayerDied
        } else {
            GameLoopResult::Continue
        }
    }

    fn execute_command(&mut self, command: Command, input: &mut dyn Input) -> ActionResult {
        let state = &mut self.state;
        match command {
            Command::Move(dir) => action::move_or_attack(state, dir),
            Command::Wait => ActionResult::Success,
            Command::PickUp => action::pick_up(state),
            Command::Drop(letter) => action::drop(state, letter),
            Command::Use(letter) => action::use_item(state, letter, input),
            Command::Descend => action::descend(state),
            Command::Exit => ActionResult::Save,
        }
    }

    /// Give every entity with an Ai one turn
    ///
    /// The id list is taken up front; entities whose Ai is gone by the time
    /// their turn comes (killed earlier in the pass) are skipped. The pass
    /// stops as soon as the player dies.
    fn move_monsters(&mut self) {
        let ids = self.state.entities.ids_with_ai();
        for id in ids {
            if self.state.is_dead() {
                break;
            }
            let action = monster::take_turn(&mut self.state, id);
            trace!("{id:?} -> {action:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Direction;
    use crate::dungeon::Tile;
    use crate::entity::Ai;
    use crate::interface::ScriptedInput;
    use crate::monster::MonsterKind;

    fn arena() -> GameState {
        let grid = Grid::filled(20, 20, Tile::floor());
        let level = GeneratedLevel::from_grid(grid, Position::new(5, 5), Position::new(15, 15));
        GameState::with_level(GameOptions::default(), GameRng::new(42), level)
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new(GameOptions::default(), GameRng::new(42));
        assert_eq!(state.dungeon_level, 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.corruption(), 0);
        assert!(state.inventory.is_empty());
        assert!(state.is_visible(state.player_pos()));
        assert!(state.grid.is_explored(state.player_pos()));
        assert_eq!(state.messages.last().unwrap().tone, Tone::Welcome);
    }

    #[test]
    fn test_wait_consumes_turn() {
        let mut game = GameLoop::new(arena());
        let mut input = ScriptedInput::default();
        assert_eq!(game.tick(Command::Wait, &mut input), GameLoopResult::Continue);
        assert_eq!(game.state().turns, 1);
    }

    #[test]
    fn test_exit_saves_while_alive() {
        let mut game = GameLoop::new(arena());
        let mut input = ScriptedInput::default();
        assert_eq!(game.tick(Command::Exit, &mut input), GameLoopResult::SaveAndQuit);
    }

    #[test]
    fn test_dead_player_can_only_quit() {
        let mut game = GameLoop::new(arena());
        game.state_mut().phase = GamePhase::Dead;
        let mut input = ScriptedInput::default();
        let before = game.state().player_pos();

        let result = game.tick(Command::Move(Direction::East), &mut input);
        assert_eq!(result, GameLoopResult::Continue);
        assert_eq!(game.state().player_pos(), before);
        assert_eq!(game.state().turns, 0);
        assert_eq!(game.tick(Command::Exit, &mut input), GameLoopResult::Quit);
    }

    #[test]
    fn test_monster_pass_stops_when_player_dies() {
        let mut state = arena();
        let player = state.player;
        state.entities.get_mut(player).unwrap().fighter.as_mut().unwrap().hp = 1;

        let mut brute = MonsterKind::SecurityRobot.spawn(Position::new(6, 5));
        brute.fighter.as_mut().unwrap().power = 20;
        state.entities.insert(brute);
        let bystander = state
            .entities
            .insert(MonsterKind::ScrapMetal.spawn(Position::new(10, 5)));

        let mut game = GameLoop::new(state);
        let mut input = ScriptedInput::default();
        assert_eq!(game.tick(Command::Wait, &mut input), GameLoopResult::PlayerDied);

        let state = game.state();
        assert!(state.is_dead());
        assert_eq!(state.entities.get(bystander).unwrap().pos, Position::new(10, 5));
    }

    #[test]
    fn test_move_updates_visibility_before_monsters() {
        let mut state = arena();
        state.options.torch_radius = 3;
        state.mark_fov_dirty();
        state.refresh_visibility();
        // four cells east of the player: outside radius 3 until the player steps
        let monster = state
            .entities
            .insert(MonsterKind::BrainInAJar.spawn(Position::new(9, 5)));
        assert!(!state.is_visible(Position::new(9, 5)));

        let mut game = GameLoop::new(state);
        let mut input = ScriptedInput::default();
        game.tick(Command::Move(Direction::East), &mut input);

        let state = game.state();
        assert_eq!(state.player_pos(), Position::new(6, 5));
        assert!(state.is_visible(Position::new(9, 5)));
        // the monster saw the player in the same tick and closed in
        assert_eq!(state.entities.get(monster).unwrap().pos, Position::new(8, 5));
    }

    #[test]
    fn test_corruption_is_capped() {
        let mut state = arena();
        state.options.max_corruption = 5;
        state.add_corruption(3);
        state.add_corruption(4);
        assert_eq!(state.corruption(), 5);
    }

    #[test]
    fn test_names_at_only_when_visible() {
        let mut state = arena();
        let pos = Position::new(7, 5);
        state.entities.insert(MonsterKind::ScrapMetal.spawn(pos));
        assert_eq!(state.names_at(pos), "Sentient scrap metal");

        state.visible = VisibleSet::new();
        assert_eq!(state.names_at(pos), "");
    }

    #[test]
    fn test_empty_inventory_menu_logs_quip() {
        let mut game = GameLoop::new(arena());
        let mut input = ScriptedInput::default().with_items([Some('a')]);
        let before = game.state().messages.len();
        let result = game.handle_event(InputEvent::OpenInventoryUse, &mut input);
        assert_eq!(result, GameLoopResult::Continue);
        assert_eq!(game.state().messages.len(), before + 1);
        let quip = game.state().messages.last().unwrap().text.as_str();
        assert!(EMPTY_INVENTORY_QUIPS.contains(&quip));
        assert_eq!(game.state().turns, 0);
    }

    #[test]
    fn test_ui_only_events_take_no_time() {
        let mut game = GameLoop::new(arena());
        let mut input = ScriptedInput::default();
        game.handle_event(InputEvent::None, &mut input);
        game.handle_event(InputEvent::ToggleFullscreen, &mut input);
        assert_eq!(game.state().turns, 0);
    }

    #[test]
    fn test_player_ai_is_skipped_by_monster_pass() {
        let mut game = GameLoop::new(arena());
        let player = game.state().player;
        let mut input = ScriptedInput::default();
        game.tick(Command::Wait, &mut input);
        assert_eq!(
            game.state().entities.get(player).unwrap().ai,
            Some(Ai::PlayerControlled)
        );
        assert_eq!(game.state().player_pos(), Position::new(5, 5));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("remains of brain"), "Remains of brain");
        assert_eq!(capitalize(""), "");
    }
}
