use crate::game::{Board, CarName, Direction, MoveError, EXIT};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    board: Board,
    initial: Board,
    selected: Option<CarName>,
    moves: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(board: Board) -> Self {
        let selected = board.cars().first().map(|car| car.name());
        App {
            initial: board.clone(),
            board,
            selected,
            moves: 0,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Whether the board reached the solved position.
    pub fn solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Whether a car's tail has come to rest in the exit opening. Sliding
    /// stops here; a board that is only solved still allows the closing move.
    fn escaped(&self) -> bool {
        self.board.cars().iter().any(|car| car.tail() == EXIT)
    }

    /// Moves made since the last reset.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') => {
                self.reset();
            }
            KeyCode::Tab => {
                self.select_next();
            }
            KeyCode::Up => self.slide(Direction::Up),
            KeyCode::Down => self.slide(Direction::Down),
            KeyCode::Left => self.slide(Direction::Left),
            KeyCode::Right => self.slide(Direction::Right),
            KeyCode::Char(letter) => {
                // Lowercase u/d/l/r are move keys; everything else may name
                // a car. Capital R still selects the red car.
                if let Some(direction) = Direction::from_key(letter) {
                    self.slide(direction);
                } else if let Some(name) = CarName::from_letter(letter) {
                    self.select(name);
                }
            }
            _ => {}
        }
    }

    fn select(&mut self, name: CarName) {
        if self.board.car(name).is_some() {
            self.selected = Some(name);
        } else {
            self.message = Some(format!("No car {} in this puzzle", name.letter()));
        }
    }

    /// Cycle selection through the cars in placement order.
    fn select_next(&mut self) {
        let cars = self.board.cars();
        if cars.is_empty() {
            return;
        }
        let next = match self
            .selected
            .and_then(|name| cars.iter().position(|car| car.name() == name))
        {
            Some(index) => (index + 1) % cars.len(),
            None => 0,
        };
        self.selected = Some(cars[next].name());
    }

    /// Slide the selected car one cell
    fn slide(&mut self, direction: Direction) {
        if self.escaped() {
            self.message = Some("Solved! Press 'n' for a new game.".to_string());
            return;
        }
        let name = match self.selected {
            Some(name) => name,
            None => {
                self.message = Some("Select a car first".to_string());
                return;
            }
        };

        let was_solved = self.board.is_solved();
        match self.board.move_car(name, direction) {
            Ok(()) => {
                self.moves += 1;
                if self.escaped() {
                    self.message = Some(format!(
                        "Car {} is out! Press 'n' for a new game.",
                        name.letter()
                    ));
                } else if self.board.is_solved() && !was_solved {
                    self.message = Some("The way is clear!".to_string());
                }
            }
            Err(MoveError::OffAxis) => {
                self.message = Some(format!("Car {} cannot move {}", name.letter(), direction));
            }
            Err(MoveError::OutOfBounds) => {
                self.message = Some("Edge of the board!".to_string());
            }
            Err(MoveError::Blocked) => {
                self.message = Some("The way is blocked!".to_string());
            }
            Err(MoveError::UnknownCar) => {
                self.message = Some("That car is not on the board!".to_string());
            }
        }
    }

    /// Restore the starting position
    fn reset(&mut self) {
        self.board = self.initial.clone();
        self.moves = 0;
        self.message = Some("New game started!".to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.board, self.selected, self.moves, &self.message);
    }
}
