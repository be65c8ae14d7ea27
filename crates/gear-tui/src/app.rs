//! Application state and main UI controller
//!
//! [`App`] owns the terminal and the event source and is the game's
//! frontend: it implements [`Display`] by drawing the whole screen and
//! [`Input`] by translating terminal events, running the nested inventory
//! and targeting prompts itself.

use std::collections::VecDeque;
use std::io;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::warn;
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use gear_core::GameState;
use gear_core::entity::Position;
use gear_core::interface::{
    Display, Input, InputEvent, InventoryPurpose, TargetChoice, TargetKind, TargetRequest,
};

use crate::camera::Camera;
use crate::distortion::Distortion;
use crate::input::{key_direction, key_to_event, key_to_letter};
use crate::theme::Theme;
use crate::widgets::{Cursor, MapWidget, MenuWidget, MessagesWidget, StatusWidget};

/// Width of the bar column in the bottom panel
pub const BAR_WIDTH: u16 = 20;
/// Height of the bottom panel
pub const PANEL_HEIGHT: u16 = 7;

const TITLE: [&str; 2] = ["G E A R", "Wizard of the Techno Nexus"];
const MAIN_MENU: [&str; 3] = ["New Game", "Continue Game", "Quit"];

/// Where terminal events come from
pub trait EventSource {
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Blocking reads from the real terminal
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Events replayed from a queue; answers `Esc` once empty
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn keys(codes: impl IntoIterator<Item = KeyCode>) -> Self {
        Self::new(
            codes
                .into_iter()
                .map(|code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        Ok(self
            .events
            .pop_front()
            .unwrap_or(Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))))
    }
}

/// Main menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewGame,
    Continue,
    Quit,
}

/// Modal layer drawn over the map
#[derive(Debug, Clone, Copy, PartialEq)]
enum Overlay {
    None,
    Inventory(InventoryPurpose),
    Target {
        request: TargetRequest,
        cursor: Position,
    },
}

/// Everything needed to draw a frame, apart from the terminal
pub struct Screen {
    theme: Theme,
    distortion: Distortion,
    overlay: Overlay,
    fullscreen: bool,
    /// Last mouse position in terminal cells
    mouse: Option<(u16, u16)>,
    /// Map area and camera of the last frame, for mouse lookups
    map_area: Rect,
    camera: Camera,
}

impl Screen {
    fn new(theme: Theme, distortion: Distortion) -> Self {
        Self {
            theme,
            distortion,
            overlay: Overlay::None,
            fullscreen: false,
            mouse: None,
            map_area: Rect::default(),
            camera: Camera::default(),
        }
    }

    /// Map cell under terminal cell (`column`, `row`) in the last frame
    fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        if !self.map_area.contains(ratatui::layout::Position::new(column, row)) {
            return None;
        }
        self.camera.to_map(
            i32::from(column - self.map_area.x),
            i32::from(row - self.map_area.y),
        )
    }

    fn mouse_cell(&self) -> Option<Position> {
        self.mouse.and_then(|(column, row)| self.cell_at(column, row))
    }

    fn draw(&mut self, frame: &mut Frame, state: &GameState) {
        let area = frame.area();
        let (map_area, panel) = if self.fullscreen {
            (area, None)
        } else {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(PANEL_HEIGHT)])
                .split(area);
            (rows[0], Some(rows[1]))
        };

        self.map_area = map_area;
        self.camera = Camera::follow(
            state.player_pos(),
            state.grid.width(),
            state.grid.height(),
            i32::from(map_area.width),
            i32::from(map_area.height),
        );

        let cursor = match self.overlay {
            Overlay::Target { request, cursor } => Some(Cursor {
                pos: cursor,
                valid: request.accepts(&state.visible, cursor),
            }),
            _ => None,
        };
        let look = self
            .mouse_cell()
            .map(|pos| state.names_at(pos))
            .unwrap_or_default();

        self.distortion.update(
            state.turns,
            state.corruption(),
            state.options.max_corruption,
        );
        let mut shading = self.distortion.begin_frame();
        let map = MapWidget::new(state, self.camera, &self.theme, &mut shading).cursor(cursor);
        frame.render_widget(map, map_area);

        if let Some(panel) = panel {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(BAR_WIDTH + 2), Constraint::Min(1)])
                .split(panel);
            frame.render_widget(StatusWidget::new(state, &self.theme), columns[0]);
            frame.render_widget(
                MessagesWidget::new(&state.messages, &self.theme).look(&look),
                columns[1],
            );
        }

        if let Overlay::Inventory(purpose) = self.overlay {
            frame.render_widget(MenuWidget::inventory(state, purpose, &self.theme), area);
        }
    }

    fn draw_main_menu(&self, frame: &mut Frame, notice: Option<&str>) {
        let area = frame.area();
        let title: Vec<Line> = TITLE
            .iter()
            .map(|line| Line::styled(*line, Style::default().fg(self.theme.header)).bold())
            .collect();
        let top = Rect {
            y: area.y + area.height / 4,
            height: 2.min(area.height),
            ..area
        };
        frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), top);

        let menu = match notice {
            Some(text) => MenuWidget::new(text, Vec::new(), &self.theme),
            None => MenuWidget::new(
                "",
                MAIN_MENU.iter().map(|s| s.to_string()).collect(),
                &self.theme,
            ),
        };
        frame.render_widget(menu.width(24), area);
    }
}

/// Application state
pub struct App<B: Backend, E: EventSource> {
    terminal: Terminal<B>,
    events: E,
    screen: Screen,
}

impl<B: Backend, E: EventSource> App<B, E> {
    pub fn new(terminal: Terminal<B>, events: E) -> Self {
        Self::with_distortion(terminal, events, Distortion::new())
    }

    /// Use a prepared distortion source, e.g. a seeded one
    pub fn with_distortion(terminal: Terminal<B>, events: E, distortion: Distortion) -> Self {
        Self {
            terminal,
            events,
            screen: Screen::new(Theme::default(), distortion),
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn is_fullscreen(&self) -> bool {
        self.screen.fullscreen
    }

    /// Draw the game screen
    pub fn redraw(&mut self, state: &GameState) -> io::Result<()> {
        let screen = &mut self.screen;
        self.terminal.draw(|frame| screen.draw(frame, state))?;
        Ok(())
    }

    /// Show the main menu until a choice is made
    ///
    /// A `notice` is shown first as a message box and dismissed by any key.
    pub fn main_menu(&mut self, notice: Option<&str>) -> io::Result<MenuChoice> {
        let mut notice = notice;
        loop {
            let screen = &self.screen;
            self.terminal
                .draw(|frame| screen.draw_main_menu(frame, notice))?;

            let Some(key) = self.next_key()? else {
                continue;
            };
            if notice.take().is_some() {
                continue;
            }
            match key.code {
                KeyCode::Char('a') => return Ok(MenuChoice::NewGame),
                KeyCode::Char('b') => return Ok(MenuChoice::Continue),
                KeyCode::Char('c') | KeyCode::Esc => return Ok(MenuChoice::Quit),
                _ => {}
            }
        }
    }

    /// Next key press; mouse motion is recorded, other events yield `None`
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        match self.events.next_event()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(key)),
            Event::Mouse(mouse) => {
                self.track_mouse(&mouse);
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn track_mouse(&mut self, mouse: &MouseEvent) {
        self.screen.mouse = Some((mouse.column, mouse.row));
    }

    fn draw_or_warn(&mut self, state: &GameState) {
        if let Err(err) = self.redraw(state) {
            warn!("failed to draw frame: {err}");
        }
    }

    fn target_choice(state: &GameState, request: &TargetRequest, pos: Position) -> TargetChoice {
        match request.kind {
            TargetKind::Tile => TargetChoice::Tile(pos),
            TargetKind::Entity => state
                .entities
                .fighter_at(pos)
                .filter(|id| *id != state.player)
                .map_or(TargetChoice::Tile(pos), TargetChoice::Entity),
        }
    }

    fn run_target_prompt(&mut self, state: &GameState, request: &TargetRequest) -> TargetChoice {
        let mut cursor = self
            .screen
            .mouse_cell()
            .filter(|pos| state.is_visible(*pos))
            .unwrap_or(request.origin);

        loop {
            self.screen.overlay = Overlay::Target {
                request: *request,
                cursor,
            };
            self.draw_or_warn(state);

            let event = match self.events.next_event() {
                Ok(event) => event,
                Err(err) => {
                    warn!("input error while targeting: {err}");
                    return TargetChoice::Cancelled;
                }
            };
            match event {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Esc => return TargetChoice::Cancelled,
                    KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('.') => {
                        if request.accepts(&state.visible, cursor) {
                            return Self::target_choice(state, request, cursor);
                        }
                    }
                    code => {
                        if let Some(dir) = key_direction(code) {
                            let (dx, dy) = dir.delta();
                            let next = cursor.offset(dx, dy);
                            if state.grid.in_bounds(next.x, next.y) {
                                cursor = next;
                            }
                        }
                    }
                },
                Event::Mouse(mouse) => {
                    self.track_mouse(&mouse);
                    let cell = self.screen.cell_at(mouse.column, mouse.row);
                    match mouse.kind {
                        MouseEventKind::Down(MouseButton::Right) => {
                            return TargetChoice::Cancelled;
                        }
                        MouseEventKind::Down(MouseButton::Left) => {
                            if let Some(pos) = cell {
                                cursor = pos;
                                if request.accepts(&state.visible, pos) {
                                    return Self::target_choice(state, request, pos);
                                }
                            }
                        }
                        _ => {
                            if let Some(pos) = cell {
                                cursor = pos;
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

impl<B: Backend, E: EventSource> Display for App<B, E> {
    fn render(&mut self, state: &GameState) {
        self.draw_or_warn(state);
    }
}

impl<B: Backend, E: EventSource> Input for App<B, E> {
    fn poll(&mut self) -> InputEvent {
        match self.events.next_event() {
            Ok(Event::Key(key)) => {
                let event = key_to_event(key);
                if event == InputEvent::ToggleFullscreen {
                    self.screen.fullscreen = !self.screen.fullscreen;
                }
                event
            }
            Ok(Event::Mouse(mouse)) => {
                self.track_mouse(&mouse);
                InputEvent::None
            }
            Ok(_) => InputEvent::None,
            Err(err) => {
                warn!("input error, leaving the game: {err}");
                InputEvent::Exit
            }
        }
    }

    fn choose_item(&mut self, state: &GameState, purpose: InventoryPurpose) -> Option<char> {
        self.screen.overlay = Overlay::Inventory(purpose);
        let key = loop {
            self.draw_or_warn(state);
            match self.next_key() {
                Ok(Some(key)) => break Some(key),
                Ok(None) => continue,
                Err(err) => {
                    warn!("input error in inventory menu: {err}");
                    break None;
                }
            }
        };
        self.screen.overlay = Overlay::None;

        key.and_then(key_to_letter)
            .filter(|letter| state.inventory.get(*letter).is_some())
    }

    fn poll_target(&mut self, state: &GameState, request: &TargetRequest) -> TargetChoice {
        let choice = self.run_target_prompt(state, request);
        self.screen.overlay = Overlay::None;
        choice
    }
}
