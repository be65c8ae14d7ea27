//! Whole-screen rendering and input through the real frontend

use crossterm::event::{Event, KeyCode, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use gear_core::dungeon::{GeneratedLevel, Grid, Rect, RoomShape};
use gear_core::entity::Position;
use gear_core::interface::Display;
use gear_core::monster::MonsterKind;
use gear_core::world::GameOptions;
use gear_core::{GameLoop, GameLoopResult, GameRng, GameState};
use gear_tui::app::PANEL_HEIGHT;
use gear_tui::distortion::Distortion;
use gear_tui::{App, ScriptedEvents};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 30;

/// One 10x8 room in a 30x20 map, player at (5, 5), stairs at (8, 8)
fn small_state() -> GameState {
    let mut grid = Grid::new(30, 20);
    Rect::new(1, 1, 10, 10).carve(&mut grid, RoomShape::Rectangular);
    let level = GeneratedLevel::from_grid(grid, Position::new(5, 5), Position::new(8, 8));
    GameState::with_level(GameOptions::default(), GameRng::new(42), level)
}

fn new_app(events: ScriptedEvents) -> App<TestBackend, ScriptedEvents> {
    let terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    App::with_distortion(terminal, events, Distortion::with_seed(1))
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
}

fn screen_text(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| row_text(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn key(code: KeyCode) -> Event {
    Event::Key(crossterm::event::KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_panel_shows_bars_and_floor() {
    let state = small_state();
    let mut app = new_app(ScriptedEvents::default());
    app.render(&state);

    let text = screen_text(app.terminal().backend().buffer());
    assert!(text.contains("HEALTH: 30/30"));
    assert!(text.contains("CURRENT FLOOR: 1"));
    assert!(text.contains("DISTORT: 0/10000"));
    assert!(text.contains("Welcome to the Nexus"));
}

#[test]
fn test_player_and_stairs_are_drawn() {
    let state = small_state();
    let mut app = new_app(ScriptedEvents::default());
    app.render(&state);

    let buf = app.terminal().backend().buffer();
    assert_eq!(buf[(5, 5)].symbol(), "@");
    assert_eq!(buf[(8, 8)].symbol(), "<");
}

#[test]
fn test_unseen_monsters_are_hidden() {
    let mut state = small_state();
    // beyond the room walls, in solid rock
    state
        .entities
        .insert(MonsterKind::ServiceRobot.spawn(Position::new(20, 15)));
    let seen = state
        .entities
        .insert(MonsterKind::ScrapMetal.spawn(Position::new(3, 3)));
    state.mark_fov_dirty();
    state.refresh_visibility();

    let mut app = new_app(ScriptedEvents::default());
    app.render(&state);
    let buf = app.terminal().backend().buffer();

    assert_eq!(buf[(3, 3)].symbol(), "m");
    assert_ne!(buf[(20, 15)].symbol(), "r");
    assert!(state.entities.contains(seen));
}

#[test]
fn test_unexplored_cells_are_blank() {
    let state = small_state();
    let mut app = new_app(ScriptedEvents::default());
    app.render(&state);
    let buf = app.terminal().backend().buffer();

    assert_eq!(buf[(25, 15)].bg, gear_tui::Theme::default().unexplored);
}

#[test]
fn test_mouse_look_names_what_is_under_the_pointer() {
    let state = small_state();
    let moved = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 5,
        row: 5,
        modifiers: KeyModifiers::NONE,
    });
    let mut app = new_app(ScriptedEvents::new([moved]));
    app.render(&state);
    gear_core::interface::Input::poll(&mut app);
    app.render(&state);

    let look_row = row_text(app.terminal().backend().buffer(), HEIGHT - PANEL_HEIGHT);
    assert!(look_row.contains("Player"), "{look_row}");
}

#[test]
fn test_waiting_then_escape_saves() {
    let state = small_state();
    let events = ScriptedEvents::new([
        key(KeyCode::Char('5')),
        key(KeyCode::Char('5')),
        key(KeyCode::Esc),
    ]);
    let mut app = new_app(events);
    let mut game = GameLoop::new(state);

    assert_eq!(game.run(&mut app), GameLoopResult::SaveAndQuit);
    assert_eq!(game.state().turns, 2);
}

#[test]
fn test_empty_inventory_gets_a_quip() {
    let state = small_state();
    let events = ScriptedEvents::new([key(KeyCode::Char('i')), key(KeyCode::Esc)]);
    let mut app = new_app(events);
    let mut game = GameLoop::new(state);

    game.run(&mut app);
    assert_eq!(game.state().turns, 0);
    assert_eq!(game.state().messages.len(), 2);
}

#[test]
fn test_walking_moves_the_player() {
    let state = small_state();
    let events = ScriptedEvents::new([key(KeyCode::Right), key(KeyCode::Down), key(KeyCode::Esc)]);
    let mut app = new_app(events);
    let mut game = GameLoop::new(state);

    game.run(&mut app);
    assert_eq!(game.state().player_pos(), Position::new(6, 6));

    let buf = app.terminal().backend().buffer();
    assert_eq!(buf[(6, 6)].symbol(), "@");
}
